//! Sensor bus abstraction
//!
//! The person sensor shares its I2C bus with other peripherals, and it
//! requires the bus to be claimed before a read transfer will complete.
//! This trait models that surface: a non-blocking claim attempt, an
//! explicit release, and a blocking fixed-size result read.

use prosopon_protocol::SENSOR_RESULT_SIZE;

/// Exclusive access to the sensor's shared bus
pub trait SensorBus {
    /// Error type for bus transfers
    type Error;

    /// Attempt to claim the bus
    ///
    /// Returns `true` if the claim was taken. Callers that need the bus
    /// retry until it succeeds; a failed attempt is not an error.
    fn try_claim(&mut self) -> bool;

    /// Release a previously taken claim
    fn release(&mut self);

    /// Read one complete result packet from the sensor
    ///
    /// Blocks until the transfer completes. The sensor always transmits
    /// exactly [`SENSOR_RESULT_SIZE`] bytes.
    fn read_result(&mut self, buf: &mut [u8; SENSOR_RESULT_SIZE]) -> Result<(), Self::Error>;
}
