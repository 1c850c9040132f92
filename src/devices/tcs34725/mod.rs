//! TCS34725 color/light driver
//!
//! I2C driver for the AMS TCS34725 RGB color sensor. The device free-runs
//! once its ADC is enabled, so initialization performs the power-up sequence
//! and each read just fetches the four 16-bit channel counts.
//!
//! The lux value is a linear estimate from the clear and red channels, not a
//! datasheet-certified conversion; its coefficients are tuning constants and
//! configurable through [`LuxCoefficients`].

pub mod config;
mod driver;
pub mod registers;

pub use config::{Gain, IntegrationTime, LuxCoefficients, Tcs34725Config};
pub use driver::Tcs34725Driver;
