//! Status display drivers

mod oled;

pub use oled::Oled;
