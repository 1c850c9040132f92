//! BMP280 factory calibration parameters
//!
//! The device carries twelve compensation coefficients in a 24-byte block at
//! 0x88..=0x9F, stored as little-endian 16-bit words. T1 and P1 are unsigned,
//! every other word is signed two's complement.

use super::registers::CALIB_LEN;
use crate::devices::codec::{decode_le16, to_signed16};

/// Parsed calibration coefficients, immutable after load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationParams {
    pub t1: u16,
    pub t2: i16,
    pub t3: i16,
    pub p1: u16,
    pub p2: i16,
    pub p3: i16,
    pub p4: i16,
    pub p5: i16,
    pub p6: i16,
    pub p7: i16,
    pub p8: i16,
    pub p9: i16,
}

impl CalibrationParams {
    /// Parse the raw calibration block
    pub fn parse(block: &[u8; CALIB_LEN]) -> Self {
        let word = |i: usize| decode_le16(block[i], block[i + 1]);
        Self {
            t1: word(0),
            t2: to_signed16(word(2)),
            t3: to_signed16(word(4)),
            p1: word(6),
            p2: to_signed16(word(8)),
            p3: to_signed16(word(10)),
            p4: to_signed16(word(12)),
            p5: to_signed16(word(14)),
            p6: to_signed16(word(16)),
            p7: to_signed16(word(18)),
            p8: to_signed16(word(20)),
            p9: to_signed16(word(22)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Little-endian encoding of the Bosch datasheet example coefficients:
    // T1=27504 T2=26435 T3=-1000 P1=36477 P2=-10685 P3=3024 P4=2855 P5=140
    // P6=-7 P7=15500 P8=-14600 P9=6000
    pub(crate) const DATASHEET_BLOCK: [u8; CALIB_LEN] = [
        0x70, 0x6B, 0x43, 0x67, 0x18, 0xFC, 0x7D, 0x8E, 0x43, 0xD6, 0xD0, 0x0B, 0x27, 0x0B,
        0x8C, 0x00, 0xF9, 0xFF, 0x8C, 0x3C, 0xF8, 0xC6, 0x70, 0x17,
    ];

    #[test]
    fn test_parse_datasheet_block() {
        let cal = CalibrationParams::parse(&DATASHEET_BLOCK);
        assert_eq!(cal.t1, 27504);
        assert_eq!(cal.t2, 26435);
        assert_eq!(cal.t3, -1000);
        assert_eq!(cal.p1, 36477);
        assert_eq!(cal.p2, -10685);
        assert_eq!(cal.p3, 3024);
        assert_eq!(cal.p4, 2855);
        assert_eq!(cal.p5, 140);
        assert_eq!(cal.p6, -7);
        assert_eq!(cal.p7, 15500);
        assert_eq!(cal.p8, -14600);
        assert_eq!(cal.p9, 6000);
    }

    #[test]
    fn test_parse_unsigned_words_stay_unsigned() {
        // T1/P1 words above 32767 must not be reinterpreted as negative
        let mut block = [0u8; CALIB_LEN];
        block[0] = 0xFF;
        block[1] = 0xFF; // T1 = 65535
        block[6] = 0x00;
        block[7] = 0x80; // P1 = 32768
        let cal = CalibrationParams::parse(&block);
        assert_eq!(cal.t1, 65535);
        assert_eq!(cal.p1, 32768);
    }
}
