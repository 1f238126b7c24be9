//! Bit-level serialization of payloads and sample LSB access.
//!
//! Bits are written MSB-first: the length header as a 16-bit big-endian
//! integer, then each payload byte from bit 7 down to bit 0.

use super::mode::{Mode, LENGTH_HEADER_BITS};
use super::payload::{Payload, BITS_PER_CHAR};
use crate::error::{Result, WatermarkError};

/// Largest payload, in bits, the self-describing length header can express.
pub const MAX_LENGTH_FIELD_BITS: usize = u16::MAX as usize;

/// Returns the least significant bit of a sample.
#[inline]
pub fn lsb(sample: i16) -> bool {
    sample & 1 != 0
}

/// Replaces the least significant bit of a sample, leaving bits 1..=15 as-is.
#[inline]
pub fn with_lsb(sample: i16, bit: bool) -> i16 {
    (sample & !1) | i16::from(bit)
}

/// Serializes a payload into the bitstream for the given mode.
///
/// Fails with [`WatermarkError::LengthFieldOverflow`] when the mode is
/// self-describing and the payload has more than 65535 bits.
pub fn to_bits(payload: &Payload, mode: Mode) -> Result<Vec<bool>> {
    let payload_bits = payload.bit_len();
    let mut bits = Vec::with_capacity(mode.header_bits() + payload_bits);

    if mode == Mode::SelfDescribing {
        let declared = u16::try_from(payload_bits)
            .map_err(|_| WatermarkError::LengthFieldOverflow { bits: payload_bits })?;
        push_msb_first(&mut bits, u32::from(declared), LENGTH_HEADER_BITS);
    }

    for &byte in payload.as_bytes() {
        push_msb_first(&mut bits, u32::from(byte), BITS_PER_CHAR);
    }

    Ok(bits)
}

/// Packs bits MSB-first into bytes.
///
/// A trailing group of fewer than 8 bits is dropped.
pub fn from_bits<I>(bits: I) -> Vec<u8>
where
    I: IntoIterator<Item = bool>,
{
    let mut bytes = Vec::new();
    let mut acc = 0u8;
    let mut filled = 0usize;

    for bit in bits {
        acc = (acc << 1) | u8::from(bit);
        filled += 1;
        if filled == BITS_PER_CHAR {
            bytes.push(acc);
            acc = 0;
            filled = 0;
        }
    }

    bytes
}

/// Reads the LSBs of `samples` as one big-endian unsigned integer.
pub fn read_uint(samples: &[i16]) -> usize {
    samples
        .iter()
        .fold(0usize, |acc, &sample| (acc << 1) | usize::from(lsb(sample)))
}

fn push_msb_first(bits: &mut Vec<bool>, value: u32, width: usize) {
    for shift in (0..width).rev() {
        bits.push((value >> shift) & 1 == 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bit_string(bits: &[bool]) -> String {
        bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }

    #[test]
    fn test_self_describing_layout() {
        let payload = Payload::from_text("HI").unwrap();
        let bits = to_bits(&payload, Mode::SelfDescribing).unwrap();
        assert_eq!(bits.len(), 32);
        assert_eq!(bit_string(&bits[..16]), "0000000000010000");
        assert_eq!(bit_string(&bits[16..24]), "01001000");
        assert_eq!(bit_string(&bits[24..]), "01001001");
    }

    #[test]
    fn test_externally_keyed_has_no_header() {
        let payload = Payload::from_text("H").unwrap();
        let bits = to_bits(&payload, Mode::ExternallyKeyed).unwrap();
        assert_eq!(bit_string(&bits), "01001000");
    }

    #[test]
    fn test_length_field_limit() {
        // 8191 chars = 65528 bits fits; 8192 chars = 65536 bits does not.
        let fits = Payload::from_bytes(vec![b'a'; 8191]);
        assert!(to_bits(&fits, Mode::SelfDescribing).is_ok());

        let too_big = Payload::from_bytes(vec![b'a'; 8192]);
        assert_eq!(
            to_bits(&too_big, Mode::SelfDescribing).unwrap_err(),
            WatermarkError::LengthFieldOverflow { bits: 65536 }
        );

        // No header, no limit.
        assert_eq!(to_bits(&too_big, Mode::ExternallyKeyed).unwrap().len(), 65536);
    }

    #[test]
    fn test_from_bits_drops_partial_byte() {
        let mut bits = to_bits(&Payload::from_text("HI").unwrap(), Mode::ExternallyKeyed).unwrap();
        bits.extend([true, false, true]);
        assert_eq!(from_bits(bits), b"HI");
        assert!(from_bits([true; 7]).is_empty());
    }

    #[test]
    fn test_lsb_helpers_keep_sign() {
        assert_eq!(with_lsb(-2, true), -1);
        assert_eq!(with_lsb(-1, false), -2);
        assert_eq!(with_lsb(i16::MIN, true), i16::MIN + 1);
        assert_eq!(with_lsb(i16::MAX, false), i16::MAX - 1);
        assert!(lsb(-1));
        assert!(!lsb(-32768));
    }

    #[test]
    fn test_read_uint() {
        let samples = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0];
        assert_eq!(read_uint(&samples), 16);
        assert_eq!(read_uint(&[-1; 16]), 65535);
    }
}
