#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! cima_station - Environmental sensor drivers for the CimaStation board
//!
//! This library provides register-level I2C drivers for the sensors mounted on
//! the CimaStation environmental monitoring board, converting raw register
//! bytes into calibrated physical units:
//!
//! - **BMP280**: barometric pressure (hPa) + temperature (°C)
//! - **SHT31**: relative humidity (%RH) + temperature (°C)
//! - **TCS34725**: clear/red/green/blue light counts + a lux estimate
//!
//! Drivers are generic over the [`platform::I2cInterface`] and
//! [`platform::DelayProvider`] traits, so the same driver code runs against
//! real hardware (see the `linux` and `embedded-hal` features) and against the
//! mock platform used by the test suite.
//!
//! All three sensors share one physical bus. Reads are multi-step register
//! transactions (trigger, settle, fetch), so the bus must not be used from two
//! contexts at once; whoever polls the drivers owns the bus handle and lends
//! it to each driver for the duration of a single `read` call.

// Logging infrastructure
pub mod core;

// Platform abstraction layer (bus transport + delays)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;
