//! TCS34725 driver configuration

use super::registers;

/// ADC integration time
///
/// Longer integration accumulates more counts per cycle; 2.4 ms matches the
/// board's default of reading fast under daylight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationTime {
    /// 2.4 ms, 1 cycle
    Ms2_4,
    /// 24 ms, 10 cycles
    Ms24,
    /// 101 ms, 42 cycles
    Ms101,
    /// 154 ms, 64 cycles
    Ms154,
    /// 700 ms, 256 cycles
    Ms700,
}

impl IntegrationTime {
    /// ATIME register value: 256 minus the cycle count
    pub fn register_value(&self) -> u8 {
        match self {
            IntegrationTime::Ms2_4 => 0xFF,
            IntegrationTime::Ms24 => 0xF6,
            IntegrationTime::Ms101 => 0xD6,
            IntegrationTime::Ms154 => 0xC0,
            IntegrationTime::Ms700 => 0x00,
        }
    }
}

/// Analog gain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gain {
    X1,
    X4,
    X16,
    X60,
}

impl Gain {
    /// CONTROL register value
    pub fn register_value(&self) -> u8 {
        match self {
            Gain::X1 => 0x00,
            Gain::X4 => 0x01,
            Gain::X16 => 0x02,
            Gain::X60 => 0x03,
        }
    }
}

/// Coefficients of the linear lux estimate
///
/// `lux = red_coeff * red + clear_coeff * clear`, clamped to zero. These are tuning
/// constants of unknown provenance, kept configurable pending calibration
/// against a reference light meter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuxCoefficients {
    pub red: f64,
    pub clear: f64,
}

impl Default for LuxCoefficients {
    fn default() -> Self {
        Self {
            red: -0.32466,
            clear: 1.57837,
        }
    }
}

/// TCS34725 driver configuration
#[derive(Debug, Clone, Copy)]
pub struct Tcs34725Config {
    /// 7-bit I2C address
    pub address: u8,
    pub integration_time: IntegrationTime,
    pub gain: Gain,
    pub lux_coefficients: LuxCoefficients,
}

impl Default for Tcs34725Config {
    fn default() -> Self {
        Self {
            address: registers::TCS34725_ADDR,
            integration_time: IntegrationTime::Ms2_4,
            gain: Gain::X1,
            lux_coefficients: LuxCoefficients::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integration_time_register_values() {
        assert_eq!(IntegrationTime::Ms2_4.register_value(), 0xFF);
        assert_eq!(IntegrationTime::Ms700.register_value(), 0x00);
    }

    #[test]
    fn test_gain_register_values() {
        assert_eq!(Gain::X1.register_value(), 0x00);
        assert_eq!(Gain::X60.register_value(), 0x03);
    }
}
