//! Kalyptra - Observatory Cover Firmware
//!
//! Main firmware binary for the RP2040 cover controller. Wires the
//! reference board's pins to the board-agnostic control logic in
//! `kalyptra-core` and runs the alternating dashboard/weather loop.
//!
//! Named after the Greek "kalyptra" (κάλυπτρα), a veil or covering.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUart, Config as UartConfig};
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use kalyptra_core::config::CoverConfig;
use kalyptra_core::cover::{CoverController, CoverState};
use kalyptra_core::motion::{Axis, MotionController, MotionOutcome, Polarity};
use kalyptra_core::transport::RemoteLink;
use kalyptra_core::weather::{DecisionEngine, SkySensors};
use kalyptra_hal_rp2040::{AdcInput, LinkUart, OutPin, SharedAdc, SwitchPin, SystemClock};

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART ring buffers (must live forever)
const LINK_BUF_LEN: usize = 64;
static TX_BUF: StaticCell<[u8; LINK_BUF_LEN]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; LINK_BUF_LEN]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Kalyptra firmware starting...");

    let p = embassy_rp::init(Default::default());
    let config = CoverConfig::default();
    let clock = SystemClock;

    // Serial link to the companion module: UART0 on GPIO 0/1, wake
    // line on GPIO 11
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = 115_200;
    let tx_buf = TX_BUF.init([0; LINK_BUF_LEN]);
    let rx_buf = RX_BUF.init([0; LINK_BUF_LEN]);
    let uart = LinkUart(BufferedUart::new(
        p.UART0,
        Irqs,
        p.PIN_0,
        p.PIN_1,
        tx_buf,
        rx_buf,
        uart_config,
    ));
    let wake = OutPin(Output::new(p.PIN_11, Level::Low));
    let link = RemoteLink::new(uart, wake, clock, &config);

    // Mirrored stepper axes. Axis one: dir GPIO3, step GPIO2, limit
    // switches GPIO21 (open) / GPIO19 (close). Axis two: dir GPIO5,
    // step GPIO4, limit switches GPIO20 (open) / GPIO18 (close). The
    // motors face each other, hence the opposite polarity.
    let axis_one = Axis::new(
        OutPin(Output::new(p.PIN_3, Level::Low)),
        OutPin(Output::new(p.PIN_2, Level::Low)),
        SwitchPin(Input::new(p.PIN_21, Pull::Down)),
        SwitchPin(Input::new(p.PIN_19, Pull::Down)),
        Polarity::Direct,
    );
    let axis_two = Axis::new(
        OutPin(Output::new(p.PIN_5, Level::Low)),
        OutPin(Output::new(p.PIN_4, Level::Low)),
        SwitchPin(Input::new(p.PIN_20, Pull::Down)),
        SwitchPin(Input::new(p.PIN_18, Pull::Down)),
        Polarity::Inverted,
    );
    let motion = MotionController::new([axis_one, axis_two], clock, &config);

    // Moisture channels: rain on ADC2 (GPIO28), dew on ADC1 (GPIO27)
    let adc: SharedAdc = RefCell::new(Adc::new_blocking(p.ADC, adc::Config::default()));
    let sensors = SkySensors::new(
        AdcInput::new(&adc, Channel::new_pin(p.PIN_28, Pull::None)),
        AdcInput::new(&adc, Channel::new_pin(p.PIN_27, Pull::None)),
    );

    // Status LED on the Pico's onboard GPIO25
    let indicator = OutPin(Output::new(p.PIN_25, Level::Low));

    let mut cover = CoverController::new(
        link,
        motion,
        sensors,
        DecisionEngine::new(&config),
        indicator,
    );

    info!("calibrating: homing to the open limits");
    match cover.calibrate() {
        MotionOutcome::Completed => info!("cover homed open"),
        MotionOutcome::TimedOut => {
            warn!("calibration homing timed out - check panels, switches and motor wiring")
        }
    }
    Timer::after(Duration::from_millis(u64::from(config.startup_settle_ms))).await;

    let pause = Duration::from_millis(u64::from(config.cycle_pause_ms));
    loop {
        let before = cover.state();
        let state = cover.dashboard_step();
        report("dashboard", before, state, cover.last_motion());
        Timer::after(pause).await;

        let before = cover.state();
        let state = cover.weather_step();
        report("weather", before, state, cover.last_motion());
        Timer::after(pause).await;
    }
}

/// Log the outcome of one half-cycle; a transition that rode on a
/// timed-out homing run is a suspected hardware fault
fn report(step: &str, before: CoverState, after: CoverState, motion: Option<MotionOutcome>) {
    if before == after {
        debug!("{=str} step: cover stays {}", step, after);
        return;
    }
    match motion {
        Some(MotionOutcome::TimedOut) => warn!(
            "{=str} step: cover now {} but homing timed out - possible stuck panel",
            step, after
        ),
        _ => info!("{=str} step: cover now {}", step, after),
    }
}
