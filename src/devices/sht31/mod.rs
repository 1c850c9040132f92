//! SHT31 humidity + temperature driver
//!
//! I2C driver for the Sensirion SHT31. Single-shot, high repeatability: each
//! read triggers a measurement, waits the conversion time and fetches the
//! 6-byte payload (two big-endian words, each followed by a CRC byte).
//!
//! CRC verification is available but off by default; enable it through
//! [`Sht31Config::validate_crc`].

pub mod crc;
mod driver;
pub mod registers;

pub use driver::{Sht31Config, Sht31Driver};
