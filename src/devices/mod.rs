//! Device drivers
//!
//! This module contains the sensor drivers for the CimaStation board. All
//! drivers use the platform abstraction traits and expose the uniform
//! [`traits::EnvironmentSensor`] interface.
//!
//! ## Modules
//!
//! - `codec`: raw register byte decoding primitives
//! - `traits`: device trait definitions (EnvironmentSensor, Measurement, ...)
//! - `bmp280`: Bosch BMP280 pressure + temperature driver
//! - `sht31`: Sensirion SHT31 humidity + temperature driver
//! - `tcs34725`: AMS TCS34725 color/light driver

pub mod bmp280;
pub mod codec;
pub mod sht31;
pub mod tcs34725;
pub mod traits;

pub use bmp280::Bmp280Driver;
pub use sht31::Sht31Driver;
pub use tcs34725::Tcs34725Driver;
