//! UART serial abstractions
//!
//! The link to the companion connectivity module is half-duplex in
//! practice: the controller writes a sentinel token, then polls for a
//! reply. The RX side is therefore a *non-blocking* poll - blocking
//! reads would defeat the transport's wall-clock timeout.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write all bytes to the UART, blocking until they are accepted
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Read whatever has arrived, without waiting
    ///
    /// Returns the number of bytes copied into `buf`; `Ok(0)` means
    /// nothing is pending yet.
    fn try_read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Combined UART interface
pub trait Uart: UartTx + UartRx {}

// Blanket implementation
impl<T: UartTx + UartRx> Uart for T {}

impl<T: UartTx> UartTx for &mut T {
    type Error = T::Error;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write_all(self, data)
    }
}

impl<T: UartRx> UartRx for &mut T {
    type Error = T::Error;

    fn try_read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        T::try_read(self, buf)
    }
}
