//! BMP280 pressure + temperature driver
//!
//! I2C driver for the Bosch BMP280 barometric sensor (the board may also
//! carry a BME280, which answers the same protocol for these two channels).
//!
//! ## Features
//!
//! - 24-byte factory calibration block, parsed once at initialization
//! - Normal mode, temperature and pressure oversampling x1
//! - Packed 20-bit ADC readout for both channels
//! - Double-precision datasheet compensation
//!
//! ## Usage
//!
//! ```ignore
//! use cima_station::devices::bmp280::{Bmp280Config, Bmp280Driver};
//! use cima_station::devices::traits::EnvironmentSensor;
//!
//! let mut driver = Bmp280Driver::new(&mut bus, &mut delay, Bmp280Config::default())?;
//! let measurement = driver.read(&mut bus, &mut delay)?;
//! ```

pub mod calibration;
pub mod compensation;
mod driver;
pub mod registers;

pub use calibration::CalibrationParams;
pub use driver::{Bmp280Config, Bmp280Driver};
