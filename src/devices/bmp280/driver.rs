//! BMP280 driver implementation

use super::calibration::CalibrationParams;
use super::compensation::{compensate_pressure, compensate_temperature};
use super::registers;
use crate::devices::codec::decode_20bit;
use crate::devices::traits::{Capabilities, EnvironmentSensor, Measurement, SensorError};
use crate::platform::{DelayProvider, I2cInterface, PlatformError};

/// BMP280 driver configuration
#[derive(Debug, Clone, Copy)]
pub struct Bmp280Config {
    /// 7-bit I2C address
    pub address: u8,
    /// Value written to CTRL_MEAS at initialization
    pub ctrl_meas: u8,
    /// Settling time after configuring the measurement mode, in milliseconds
    pub settle_ms: u32,
}

impl Default for Bmp280Config {
    fn default() -> Self {
        Self {
            address: registers::BMP280_ADDR,
            ctrl_meas: registers::CTRL_MEAS_NORMAL_X1,
            settle_ms: 10,
        }
    }
}

/// BMP280 pressure + temperature driver
///
/// Owns the calibration parameters read once at construction. The device runs
/// in normal mode, so a read is a plain register fetch of both packed 20-bit
/// channels followed by compensation.
pub struct Bmp280Driver {
    config: Bmp280Config,
    calibration: CalibrationParams,
}

impl Bmp280Driver {
    /// Create and initialize a new BMP280 driver
    ///
    /// Verifies the chip ID, loads the 24-byte calibration block and writes
    /// the measurement mode. Fails with `IncompleteCalibrationRead` if the
    /// calibration block comes back short; the device must not be read in
    /// that state.
    pub fn new<B: I2cInterface, D: DelayProvider>(
        bus: &mut B,
        delay: &mut D,
        config: Bmp280Config,
    ) -> Result<Self, SensorError> {
        // Chip identification: BMP280 and BME280 share this protocol
        let mut id = [0u8; 1];
        bus.write_read(config.address, &[registers::REG_CHIP_ID], &mut id)
            .map_err(SensorError::Bus)?;
        match id[0] {
            registers::BMP280_CHIP_ID => {
                crate::log_info!("BMP280 detected at {:#x}", config.address)
            }
            registers::BME280_CHIP_ID => {
                crate::log_info!("BME280 detected at {:#x}", config.address)
            }
            other => {
                crate::log_error!("unexpected chip ID {:#x} at {:#x}", other, config.address);
                return Err(SensorError::Configuration(PlatformError::InvalidConfig));
            }
        }

        let mut block = [0u8; registers::CALIB_LEN];
        let n = bus
            .write_read(config.address, &[registers::REG_CALIB_START], &mut block)
            .map_err(SensorError::Bus)?;
        if n < registers::CALIB_LEN {
            return Err(SensorError::IncompleteCalibrationRead {
                expected: registers::CALIB_LEN,
                got: n,
            });
        }
        let calibration = CalibrationParams::parse(&block);

        // Oversampling x1/x1, normal mode
        bus.write(config.address, &[registers::REG_CTRL_MEAS, config.ctrl_meas])
            .map_err(SensorError::Configuration)?;
        delay.delay_ms(config.settle_ms);

        crate::log_debug!("BMP280 calibration loaded, t1={}", calibration.t1);
        Ok(Self { config, calibration })
    }

    /// Calibration parameters loaded at initialization
    pub fn calibration(&self) -> &CalibrationParams {
        &self.calibration
    }

    /// Fetch one packed 20-bit sample
    fn read_sample<B: I2cInterface>(&self, bus: &mut B, reg: u8) -> Result<u32, SensorError> {
        let mut buf = [0u8; registers::SAMPLE_LEN];
        let n = bus
            .write_read(self.config.address, &[reg], &mut buf)
            .map_err(SensorError::Bus)?;
        if n < registers::SAMPLE_LEN {
            return Err(SensorError::IncompleteSampleRead {
                expected: registers::SAMPLE_LEN,
                got: n,
            });
        }
        Ok(decode_20bit(buf[0], buf[1], buf[2]))
    }
}

impl EnvironmentSensor for Bmp280Driver {
    fn capabilities(&self) -> Capabilities {
        Capabilities::TEMPERATURE | Capabilities::PRESSURE
    }

    fn read<B: I2cInterface, D: DelayProvider>(
        &mut self,
        bus: &mut B,
        _delay: &mut D,
    ) -> Result<Measurement, SensorError> {
        let adc_t = self.read_sample(bus, registers::REG_TEMP_MSB)?;
        let temperature = compensate_temperature(adc_t, &self.calibration);

        let adc_p = self.read_sample(bus, registers::REG_PRESS_MSB)?;
        let pressure = compensate_pressure(adc_p, temperature.t_fine, &self.calibration);

        Ok(Measurement {
            temperature_c: Some(temperature.celsius),
            pressure_hpa: Some(pressure),
            ..Default::default()
        })
    }
}
