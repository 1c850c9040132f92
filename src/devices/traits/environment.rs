//! Environment sensor trait and data types
//!
//! Device-independent interface for the environmental sensors, consumed by
//! whatever aggregates and displays the readings. Each driver fills in the
//! channels its device supports and leaves the rest absent; a failed read
//! yields an error for that cycle, never a stale or fabricated value.

use crate::platform::{DelayProvider, I2cInterface, PlatformError};
use bitflags::bitflags;
use core::fmt;
use heapless::Vec;

/// Sensor error types
///
/// All failure originates at the transport boundary; the decode and
/// compensation functions are pure and never fail given correctly sized
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Transport-level I/O failure during a measurement
    Bus(PlatformError),

    /// Calibration block read returned fewer bytes than required.
    /// Fatal for the device instance; initialization fails.
    IncompleteCalibrationRead { expected: usize, got: usize },

    /// A measurement read returned fewer bytes than the device protocol
    /// requires. Recoverable; the caller may retry next cycle.
    IncompleteSampleRead { expected: usize, got: usize },

    /// A write to a control or enable register was rejected by the transport
    Configuration(PlatformError),

    /// Checksum verification failed on a measurement word
    CrcMismatch,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Bus(e) => write!(f, "bus error: {}", e),
            SensorError::IncompleteCalibrationRead { expected, got } => {
                write!(f, "incomplete calibration read: {} of {} bytes", got, expected)
            }
            SensorError::IncompleteSampleRead { expected, got } => {
                write!(f, "incomplete sample read: {} of {} bytes", got, expected)
            }
            SensorError::Configuration(e) => write!(f, "configuration rejected: {}", e),
            SensorError::CrcMismatch => write!(f, "CRC mismatch on measurement data"),
        }
    }
}

bitflags! {
    /// Capability set of a sensor driver
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        const TEMPERATURE = 1 << 0;
        const PRESSURE = 1 << 1;
        const HUMIDITY = 1 << 2;
        const LIGHT = 1 << 3;
    }
}

/// Measurement channel names, as exposed to the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Temperature in °C
    Temperature,
    /// Barometric pressure in hPa
    Pressure,
    /// Relative humidity in %RH
    Humidity,
    /// Estimated illuminance in lux
    Lux,
    /// Raw clear-channel count
    Clear,
    /// Raw red-channel count
    Red,
    /// Raw green-channel count
    Green,
    /// Raw blue-channel count
    Blue,
}

impl Channel {
    /// Channel name for display
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Temperature => "temperature",
            Channel::Pressure => "pressure",
            Channel::Humidity => "humidity",
            Channel::Lux => "lux",
            Channel::Clear => "clear",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// Raw color channel counts from the light sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorReading {
    pub clear: u16,
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

/// One sensor reading
///
/// Channels a device does not support, or that failed, are `None`. Values are
/// kept at full precision; [`Measurement::channels`] rounds to 2 decimal
/// places for presentation.
///
/// Unit invariants: temperature is always °C, pressure always hPa, humidity a
/// percentage in [0, 100], lux non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Temperature in °C
    pub temperature_c: Option<f64>,
    /// Barometric pressure in hPa
    pub pressure_hpa: Option<f64>,
    /// Relative humidity in %RH, clamped to [0, 100]
    pub humidity_pct: Option<f64>,
    /// Estimated illuminance in lux, clamped to >= 0
    pub lux: Option<f64>,
    /// Raw color channel counts
    pub color: Option<ColorReading>,
}

impl Measurement {
    /// Render the populated channels as (name, value) pairs
    ///
    /// Values are rounded to 2 decimal places; color counts are reported as
    /// raw counts. This is the form handed to the measurement aggregator.
    pub fn channels(&self) -> Vec<(Channel, f64), 8> {
        let mut out = Vec::new();
        let mut push = |channel: Channel, value: f64| {
            // capacity 8 covers every channel a Measurement can carry
            let _ = out.push((channel, round2(value)));
        };
        if let Some(t) = self.temperature_c {
            push(Channel::Temperature, t);
        }
        if let Some(p) = self.pressure_hpa {
            push(Channel::Pressure, p);
        }
        if let Some(h) = self.humidity_pct {
            push(Channel::Humidity, h);
        }
        if let Some(lux) = self.lux {
            push(Channel::Lux, lux);
        }
        if let Some(c) = self.color {
            push(Channel::Clear, c.clear as f64);
            push(Channel::Red, c.red as f64);
            push(Channel::Green, c.green as f64);
            push(Channel::Blue, c.blue as f64);
        }
        out
    }
}

/// Round to 2 decimal places for presentation
fn round2(value: f64) -> f64 {
    libm::round(value * 100.0) / 100.0
}

/// Device-independent environment sensor interface
///
/// Every call to `read` performs the full trigger → wait → fetch → decode →
/// compensate sequence; drivers do not cache results between calls and do not
/// retry on failure. `read` is synchronous and may block for the
/// device-specific settling time.
///
/// The driver borrows the bus and the delay provider only for the duration of
/// the call. The bus is shared between sensors; serializing access is the
/// caller's responsibility.
pub trait EnvironmentSensor {
    /// Which channels this device can measure
    fn capabilities(&self) -> Capabilities;

    /// Perform one measurement cycle
    fn read<B: I2cInterface, D: DelayProvider>(
        &mut self,
        bus: &mut B,
        delay: &mut D,
    ) -> Result<Measurement, SensorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_default_is_empty() {
        let m = Measurement::default();
        assert!(m.channels().is_empty());
    }

    #[test]
    fn test_channels_rounding() {
        let m = Measurement {
            temperature_c: Some(25.0824779),
            pressure_hpa: Some(1006.5326677),
            ..Default::default()
        };
        let channels = m.channels();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0], (Channel::Temperature, 25.08));
        assert_eq!(channels[1], (Channel::Pressure, 1006.53));
    }

    #[test]
    fn test_channels_color_counts() {
        let m = Measurement {
            lux: Some(756.719),
            color: Some(ColorReading {
                clear: 500,
                red: 100,
                green: 80,
                blue: 60,
            }),
            ..Default::default()
        };
        let channels = m.channels();
        assert_eq!(channels.len(), 5);
        assert_eq!(channels[0], (Channel::Lux, 756.72));
        assert_eq!(channels[1], (Channel::Clear, 500.0));
        assert_eq!(channels[4], (Channel::Blue, 60.0));
    }

    #[test]
    fn test_channel_names() {
        assert_eq!(Channel::Temperature.name(), "temperature");
        assert_eq!(Channel::Lux.name(), "lux");
    }

    #[test]
    fn test_capabilities_flags() {
        let caps = Capabilities::TEMPERATURE | Capabilities::PRESSURE;
        assert!(caps.contains(Capabilities::TEMPERATURE));
        assert!(!caps.contains(Capabilities::HUMIDITY));
    }
}
