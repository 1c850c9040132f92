//! SHT31 command definitions

/// SHT31 I2C address on the CimaStation board (ADDR pin high)
pub const SHT31_ADDR: u8 = 0x45;

/// SHT31 default I2C address (ADDR pin low)
pub const SHT31_ADDR_ALT: u8 = 0x44;

/// Single-shot measurement, high repeatability, no clock stretching
pub const CMD_MEASURE_HIGH: [u8; 2] = [0x24, 0x00];

/// Measurement payload: temperature word, CRC, humidity word, CRC
pub const SAMPLE_LEN: usize = 6;

/// Datasheet minimum conversion time for high repeatability, milliseconds
pub const MIN_MEASUREMENT_DELAY_MS: u32 = 15;
