//! SHT31 payload checksum
//!
//! CRC-8 as specified by Sensirion: polynomial 0x31 (x^8 + x^5 + x^4 + 1),
//! initialization 0xFF, no reflection, no final XOR. Each 16-bit measurement
//! word is followed by its CRC byte on the wire.

const POLYNOMIAL: u8 = 0x31;
const INIT: u8 = 0xFF;

/// Compute the CRC-8 of a byte slice
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc = INIT;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Check a measurement word against its transmitted CRC byte
pub fn verify(word: &[u8; 2], expected: u8) -> bool {
    crc8(word) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc8_sensirion_reference() {
        // Test vector from the SHT3x datasheet
        assert_eq!(crc8(&[0xBE, 0xEF]), 0x92);
    }

    #[test]
    fn test_verify() {
        assert!(verify(&[0xBE, 0xEF], 0x92));
        assert!(!verify(&[0xBE, 0xEF], 0x91));
        assert!(!verify(&[0xBF, 0xEF], 0x92));
    }
}
