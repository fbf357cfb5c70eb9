//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in prosopon-core for the two peripherals on the board:
//!
//! - Person sensor (fixed-size I2C result reads)
//! - SSD1306 OLED (text grid over the buffered graphics mode)

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;
