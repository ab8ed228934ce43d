//! UART adapter for the companion link
//!
//! Wraps a buffered UART so received bytes accumulate in the ring
//! buffer while the controller is busy elsewhere, and the transport's
//! RX poll can check for pending data without blocking.

use embassy_rp::uart::BufferedUart;
use embedded_io::{Read, ReadReady, Write};
use kalyptra_hal::{UartRx, UartTx};

/// The serial link to the companion module
pub struct LinkUart<'d>(pub BufferedUart<'d>);

impl UartTx for LinkUart<'_> {
    type Error = embassy_rp::uart::Error;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        Write::write_all(&mut self.0, data)?;
        Write::flush(&mut self.0)
    }
}

impl UartRx for LinkUart<'_> {
    type Error = embassy_rp::uart::Error;

    fn try_read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if !self.0.read_ready()? {
            return Ok(0);
        }
        Read::read(&mut self.0, buf)
    }
}
