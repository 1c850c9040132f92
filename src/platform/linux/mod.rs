//! Linux platform implementation
//!
//! Raspberry Pi I2C transport via `rppal` plus a thread-sleep delay provider.
//! The CimaStation board hangs off bus 1 of a Raspberry Pi.

pub mod delay;
pub mod i2c;

pub use delay::StdDelay;
pub use i2c::LinuxI2c;
