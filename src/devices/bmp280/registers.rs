//! BMP280 register definitions

/// BMP280 default I2C address (SDO = LOW)
pub const BMP280_ADDR: u8 = 0x76;

/// BMP280 alternate I2C address (SDO = HIGH)
pub const BMP280_ADDR_ALT: u8 = 0x77;

/// Chip ID register
pub const REG_CHIP_ID: u8 = 0xD0;

/// Chip ID value for the BMP280
pub const BMP280_CHIP_ID: u8 = 0x58;

/// Chip ID value for the BME280 (same pressure/temperature protocol)
pub const BME280_CHIP_ID: u8 = 0x60;

/// Start of the factory calibration block (0x88..=0x9F)
pub const REG_CALIB_START: u8 = 0x88;

/// Calibration block length in bytes
pub const CALIB_LEN: usize = 24;

/// Measurement control register
pub const REG_CTRL_MEAS: u8 = 0xF4;

/// CTRL_MEAS value: temperature oversampling x1, pressure oversampling x1,
/// normal mode
pub const CTRL_MEAS_NORMAL_X1: u8 = 0x27;

/// Pressure readout, 3 bytes MSB first (packed 20-bit)
pub const REG_PRESS_MSB: u8 = 0xF7;

/// Temperature readout, 3 bytes MSB first (packed 20-bit)
pub const REG_TEMP_MSB: u8 = 0xFA;

/// Length of one packed 20-bit sample
pub const SAMPLE_LEN: usize = 3;
