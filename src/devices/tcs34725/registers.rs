//! TCS34725 register definitions
//!
//! Every register access must OR the command bit into the register offset;
//! the device ignores plain offsets.

/// TCS34725 I2C address
pub const TCS34725_ADDR: u8 = 0x29;

/// Command bit, ORed into every register offset
pub const COMMAND_BIT: u8 = 0x80;

/// Enable register
pub const REG_ENABLE: u8 = 0x00;

/// Integration time register
pub const REG_ATIME: u8 = 0x01;

/// Gain control register
pub const REG_CONTROL: u8 = 0x0F;

/// Clear channel data, low byte
pub const REG_CDATAL: u8 = 0x14;

/// Red channel data, low byte
pub const REG_RDATAL: u8 = 0x16;

/// Green channel data, low byte
pub const REG_GDATAL: u8 = 0x18;

/// Blue channel data, low byte
pub const REG_BDATAL: u8 = 0x1A;

/// Bytes per color channel (16-bit little-endian)
pub const CHANNEL_LEN: usize = 2;

/// Enable register: power on
pub const ENABLE_PON: u8 = 0x01;

/// Enable register: ADC enable
pub const ENABLE_AEN: u8 = 0x02;

/// Wait after power-on before enabling the ADC, milliseconds
pub const POWER_ON_DELAY_MS: u32 = 3;

/// Wait after configuration before the first read, milliseconds
pub const SETTLE_DELAY_MS: u32 = 10;
