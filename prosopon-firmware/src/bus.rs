//! Shared sensor bus claim
//!
//! The person sensor requires its bus to be claimed before a read
//! transfer will return, and the bus may carry other peripherals. The
//! claim flag lives behind a critical-section mutex so any other task
//! touching the bus can honor it.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal::i2c::I2c;

use prosopon_core::traits::SensorBus;
use prosopon_drivers::sensor::PersonSensor;
use prosopon_protocol::SENSOR_RESULT_SIZE;

/// Whether the sensor bus is currently claimed
static SENSOR_BUS_CLAIMED: Mutex<CriticalSectionRawMutex, Cell<bool>> =
    Mutex::new(Cell::new(false));

/// The person sensor behind the shared-bus claim
pub struct SharedSensorBus<I2C> {
    sensor: PersonSensor<I2C>,
}

impl<I2C> SharedSensorBus<I2C>
where
    I2C: I2c,
{
    /// Wrap a sensor whose bus is shared with other users
    pub fn new(sensor: PersonSensor<I2C>) -> Self {
        Self { sensor }
    }
}

impl<I2C> SensorBus for SharedSensorBus<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn try_claim(&mut self) -> bool {
        SENSOR_BUS_CLAIMED.lock(|claimed| {
            if claimed.get() {
                false
            } else {
                claimed.set(true);
                true
            }
        })
    }

    fn release(&mut self) {
        SENSOR_BUS_CLAIMED.lock(|claimed| claimed.set(false));
    }

    fn read_result(&mut self, buf: &mut [u8; SENSOR_RESULT_SIZE]) -> Result<(), Self::Error> {
        self.sensor.read_result(buf)
    }
}
