//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod delay;
pub mod i2c;

// Re-export trait interfaces
pub use delay::DelayProvider;
pub use i2c::{I2cConfig, I2cInterface};
