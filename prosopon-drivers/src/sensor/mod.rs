//! Person sensor access

mod person;

pub use person::{PersonSensor, PERSON_SENSOR_ADDR};
