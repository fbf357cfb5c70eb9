//! Prosopon - Person Sensor Display Firmware
//!
//! Main firmware binary for RP2040-based boards. Polls the person
//! sensor on one I2C bus and mirrors the decoded face list onto an
//! SSD1306 OLED on a second bus.
//!
//! Named after the Greek "prosopon" meaning "face" - the one thing
//! this firmware looks for and the one thing it draws.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c;
use embassy_time::{block_for, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use prosopon_core::config::PollConfig;
use prosopon_core::poll::Poller;
use prosopon_core::render::render_splash;
use prosopon_core::traits::Delay;
use prosopon_drivers::display::Oled;
use prosopon_drivers::sensor::PersonSensor;

use crate::bus::SharedSensorBus;

mod bus;

/// Blocking inter-cycle sleep on the embassy time driver
struct CycleDelay;

impl Delay for CycleDelay {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Prosopon firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Person sensor bus (GP4 = SDA, GP5 = SCL)
    let sensor_i2c = i2c::I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    // OLED bus (GP6 = SDA, GP7 = SCL)
    let oled_i2c = i2c::I2c::new_blocking(p.I2C1, p.PIN_7, p.PIN_6, i2c::Config::default());

    let mut display = Oled::new(oled_i2c);
    match display.init() {
        Ok(()) => {
            info!("OLED initialized");
            // Boot banner until the first poll result replaces it
            render_splash().draw(&mut display).ok();
        }
        // Keep going; the poll loop surfaces display faults as its own
        // fatal path
        Err(_) => error!("Failed to initialize display"),
    }

    let mut sensor_bus = SharedSensorBus::new(PersonSensor::new(sensor_i2c));

    let config = PollConfig::default();
    info!("Polling person sensor every {} ms", config.interval_ms);

    let mut poller = Poller::new(config);
    let err = poller.run(&mut sensor_bus, &mut display, &mut CycleDelay);

    // The bus claim was released on the error path; nothing to clean up.
    error!("Poll loop terminated: {}", Debug2Format(&err));

    loop {
        Timer::after(Duration::from_secs(1)).await;
    }
}
