//! Register byte decoding primitives
//!
//! Every sensor on the board packs its registers differently: the SHT31
//! transmits big-endian words, the TCS34725 and the BMP280 calibration block
//! are little-endian, and the BMP280 ADC channels use a packed 20-bit format.
//! These functions are pure and total; callers guarantee input length through
//! the transport contract.

/// Combine two bytes big-endian (high byte first)
pub fn decode_be16(hi: u8, lo: u8) -> u16 {
    u16::from_be_bytes([hi, lo])
}

/// Combine two bytes little-endian (low byte first)
pub fn decode_le16(lo: u8, hi: u8) -> u16 {
    u16::from_le_bytes([lo, hi])
}

/// Reinterpret an unsigned 16-bit word as signed two's complement
///
/// Calibration words and some measurements are stored as unsigned registers
/// but encode signed values: anything above 32767 is negative.
pub fn to_signed16(value: u16) -> i16 {
    value as i16
}

/// Combine three bytes into the packed 20-bit ADC format of the BMP280
///
/// Layout: `(b0 << 12) | (b1 << 4) | (b2 >> 4)`. The low nibble of the third
/// byte is padding.
pub fn decode_20bit(b0: u8, b1: u8, b2: u8) -> u32 {
    ((b0 as u32) << 12) | ((b1 as u32) << 4) | ((b2 as u32) >> 4)
}
