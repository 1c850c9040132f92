//! SHT31 driver implementation

use super::{crc, registers};
use crate::devices::codec::decode_be16;
use crate::devices::traits::{Capabilities, EnvironmentSensor, Measurement, SensorError};
use crate::platform::{DelayProvider, I2cInterface};

/// SHT31 driver configuration
#[derive(Debug, Clone, Copy)]
pub struct Sht31Config {
    /// 7-bit I2C address
    pub address: u8,
    /// Wait between triggering a measurement and fetching the result, in
    /// milliseconds. Clamped at read time to the 15 ms datasheet minimum for
    /// high repeatability.
    pub measurement_delay_ms: u32,
    /// Verify the CRC bytes of the measurement payload
    pub validate_crc: bool,
}

impl Default for Sht31Config {
    fn default() -> Self {
        Self {
            address: registers::SHT31_ADDR,
            measurement_delay_ms: 20,
            validate_crc: false,
        }
    }
}

/// SHT31 humidity + temperature driver
///
/// The device needs no initialization; a handle is just the configuration.
/// Each read is a single-shot measurement.
pub struct Sht31Driver {
    config: Sht31Config,
}

impl Sht31Driver {
    /// Create a new SHT31 driver
    pub fn new(config: Sht31Config) -> Self {
        Self { config }
    }
}

/// Convert a raw temperature word to °C
pub fn convert_temperature(raw: u16) -> f64 {
    -45.0 + 175.0 * raw as f64 / 65535.0
}

/// Convert a raw humidity word to %RH, clamped to [0, 100]
pub fn convert_humidity(raw: u16) -> f64 {
    (100.0 * raw as f64 / 65535.0).clamp(0.0, 100.0)
}

impl EnvironmentSensor for Sht31Driver {
    fn capabilities(&self) -> Capabilities {
        Capabilities::TEMPERATURE | Capabilities::HUMIDITY
    }

    fn read<B: I2cInterface, D: DelayProvider>(
        &mut self,
        bus: &mut B,
        delay: &mut D,
    ) -> Result<Measurement, SensorError> {
        bus.write(self.config.address, &registers::CMD_MEASURE_HIGH)
            .map_err(SensorError::Bus)?;

        delay.delay_ms(
            self.config
                .measurement_delay_ms
                .max(registers::MIN_MEASUREMENT_DELAY_MS),
        );

        let mut buf = [0u8; registers::SAMPLE_LEN];
        let n = bus.read(self.config.address, &mut buf).map_err(SensorError::Bus)?;
        if n < registers::SAMPLE_LEN {
            return Err(SensorError::IncompleteSampleRead {
                expected: registers::SAMPLE_LEN,
                got: n,
            });
        }

        if self.config.validate_crc {
            let temp_ok = crc::verify(&[buf[0], buf[1]], buf[2]);
            let hum_ok = crc::verify(&[buf[3], buf[4]], buf[5]);
            if !temp_ok || !hum_ok {
                crate::log_warn!("SHT31 CRC mismatch, discarding sample");
                return Err(SensorError::CrcMismatch);
            }
        }

        let temp_raw = decode_be16(buf[0], buf[1]);
        let hum_raw = decode_be16(buf[3], buf[4]);

        Ok(Measurement {
            temperature_c: Some(convert_temperature(temp_raw)),
            humidity_pct: Some(convert_humidity(hum_raw)),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockDelay, MockI2c};

    // temp_raw = 0x6666 (25.0 °C), hum_raw = 0x9999 (60.0 %RH), valid CRCs
    const SAMPLE: [u8; 6] = [0x66, 0x66, 0x93, 0x99, 0x99, 0xBE];

    #[test]
    fn test_convert_temperature_extremes() {
        assert!((convert_temperature(0) - (-45.0)).abs() < 1e-9);
        assert!((convert_temperature(65535) - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_humidity_extremes() {
        assert!((convert_humidity(0) - 0.0).abs() < 1e-9);
        assert!((convert_humidity(65535) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_read_triggers_waits_and_converts() {
        let mut bus = MockI2c::default();
        let mut delay = MockDelay::new();
        bus.set_read_data(&SAMPLE);

        let mut driver = Sht31Driver::new(Sht31Config::default());
        let m = driver.read(&mut bus, &mut delay).unwrap();

        assert!((m.temperature_c.unwrap() - 25.0).abs() < 0.01);
        assert!((m.humidity_pct.unwrap() - 60.0).abs() < 0.01);
        assert_eq!(m.pressure_hpa, None);

        let transactions = bus.transactions();
        assert_eq!(
            transactions[0],
            I2cTransaction::Write {
                addr: 0x45,
                data: vec![0x24, 0x00],
            }
        );
        assert_eq!(transactions[1], I2cTransaction::Read { addr: 0x45, len: 6 });
        // Conversion wait honored
        assert!(delay.total_us() >= 15_000);
    }

    #[test]
    fn test_measurement_delay_clamped_to_datasheet_minimum() {
        let mut bus = MockI2c::default();
        let mut delay = MockDelay::new();
        bus.set_read_data(&SAMPLE);

        let config = Sht31Config {
            measurement_delay_ms: 1,
            ..Default::default()
        };
        let mut driver = Sht31Driver::new(config);
        driver.read(&mut bus, &mut delay).unwrap();

        assert_eq!(delay.delays_us(), vec![15_000]);
    }

    #[test]
    fn test_short_read_yields_incomplete_sample() {
        let mut bus = MockI2c::default();
        let mut delay = MockDelay::new();
        bus.set_read_data(&SAMPLE[..4]);

        let mut driver = Sht31Driver::new(Sht31Config::default());
        let result = driver.read(&mut bus, &mut delay);
        assert_eq!(
            result.err(),
            Some(SensorError::IncompleteSampleRead {
                expected: 6,
                got: 4
            })
        );
    }

    #[test]
    fn test_crc_validation_accepts_good_payload() {
        let mut bus = MockI2c::default();
        let mut delay = MockDelay::new();
        bus.set_read_data(&SAMPLE);

        let config = Sht31Config {
            validate_crc: true,
            ..Default::default()
        };
        let mut driver = Sht31Driver::new(config);
        assert!(driver.read(&mut bus, &mut delay).is_ok());
    }

    #[test]
    fn test_crc_validation_rejects_corrupt_payload() {
        let mut corrupted = SAMPLE;
        corrupted[2] ^= 0xFF;

        let mut bus = MockI2c::default();
        let mut delay = MockDelay::new();
        bus.set_read_data(&corrupted);

        let config = Sht31Config {
            validate_crc: true,
            ..Default::default()
        };
        let mut driver = Sht31Driver::new(config);
        assert_eq!(
            driver.read(&mut bus, &mut delay).err(),
            Some(SensorError::CrcMismatch)
        );
    }

    #[test]
    fn test_crc_disabled_ignores_corrupt_payload() {
        // CRC validation is opt-in; the default path accepts the payload
        let mut corrupted = SAMPLE;
        corrupted[2] ^= 0xFF;

        let mut bus = MockI2c::default();
        let mut delay = MockDelay::new();
        bus.set_read_data(&corrupted);

        let mut driver = Sht31Driver::new(Sht31Config::default());
        assert!(driver.read(&mut bus, &mut delay).is_ok());
    }

    #[test]
    fn test_capabilities() {
        let driver = Sht31Driver::new(Sht31Config::default());
        assert_eq!(
            driver.capabilities(),
            Capabilities::TEMPERATURE | Capabilities::HUMIDITY
        );
    }
}
