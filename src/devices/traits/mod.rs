//! Device traits
//!
//! This module contains the hardware-independent interface shared by all
//! sensor drivers: the measurement output type, the capability flags, the
//! error taxonomy, and the `EnvironmentSensor` trait itself.

pub mod environment;

pub use environment::{
    Capabilities, Channel, ColorReading, EnvironmentSensor, Measurement, SensorError,
};
