//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod bus;
pub mod delay;
pub mod display;

pub use bus::SensorBus;
pub use delay::Delay;
pub use display::DisplayDriver;
