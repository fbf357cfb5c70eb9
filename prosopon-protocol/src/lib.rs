//! Person Sensor I2C result packet format
//!
//! This crate defines the fixed-layout response packet the person sensor
//! returns on every I2C read. The layout is fixed at compile time: the
//! sensor always transmits all four face slots, padded with zeroes past
//! the reported count.
//!
//! # Packet Overview
//!
//! All integers are little-endian:
//! ```text
//! ┌─────────┬───────┬────────────────────┬──────────┐
//! │ HEADER  │ COUNT │ FACES (4 × 9 B)    │ CHECKSUM │
//! │ 4B      │ 1B    │ 36B                │ 2B       │
//! └─────────┴───────┴────────────────────┴──────────┘
//! ```
//!
//! The checksum trails every response but is not verified by this crate;
//! callers that want it can read it off the decoded result.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod result;

pub use result::{
    Face, PacketError, ResultHeader, SensorResult, FACE_RECORD_SIZE, HEADER_SIZE, MAX_FACES,
    SENSOR_RESULT_SIZE,
};
