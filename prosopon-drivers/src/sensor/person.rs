//! Person sensor I2C reader
//!
//! The sensor exposes no registers; every read transfer at its address
//! returns one complete result packet. Detection runs on the sensor
//! itself, so the host side is a single fixed-length read.

use embedded_hal::i2c::I2c;
use prosopon_protocol::SENSOR_RESULT_SIZE;

/// The person sensor's 7-bit I2C address (0x62, decimal 98)
pub const PERSON_SENSOR_ADDR: u8 = 0x62;

/// Person sensor on an I2C bus
pub struct PersonSensor<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> PersonSensor<I2C>
where
    I2C: I2c,
{
    /// Create a sensor at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, PERSON_SENSOR_ADDR)
    }

    /// Create a sensor at a non-default address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Read one raw result packet
    ///
    /// Blocks until the transfer completes or the bus reports an error.
    pub fn read_result(
        &mut self,
        buf: &mut [u8; SENSOR_RESULT_SIZE],
    ) -> Result<(), I2C::Error> {
        self.i2c.read(self.address, buf)
    }
}
