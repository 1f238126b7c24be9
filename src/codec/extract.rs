//! Recovering a payload from sample LSBs.
//!
//! Extraction never judges the recovered bytes. Audio that was never
//! watermarked decodes to arbitrary characters (or a length error) rather
//! than a "no watermark" result.

use super::bitstream::{from_bits, lsb, read_uint};
use super::mode::{Mode, LENGTH_HEADER_BITS};
use super::payload::{Payload, BITS_PER_CHAR};
use crate::error::{Result, WatermarkError};

/// Extracts a payload embedded with `mode`.
///
/// `external_length` is the character count and must be given for
/// [`Mode::ExternallyKeyed`] and omitted for [`Mode::SelfDescribing`].
pub fn extract(samples: &[i16], mode: Mode, external_length: Option<usize>) -> Result<Payload> {
    match (mode, external_length) {
        (Mode::SelfDescribing, None) => extract_self_describing(samples),
        (Mode::ExternallyKeyed, Some(characters)) => extract_externally_keyed(samples, characters),
        (Mode::SelfDescribing, Some(_)) => Err(WatermarkError::InvalidArgument(
            "self-describing watermarks carry their own length; no character count expected"
                .to_string(),
        )),
        (Mode::ExternallyKeyed, None) => Err(WatermarkError::InvalidArgument(
            "externally-keyed watermarks need the character count used at embedding".to_string(),
        )),
    }
}

/// Reads the 16-bit length header and then that many payload bits.
///
/// # Errors
/// [`WatermarkError::Truncated`] if the audio is shorter than the header, or
/// the header declares more bits than the samples after it.
pub fn extract_self_describing(samples: &[i16]) -> Result<Payload> {
    if samples.len() < LENGTH_HEADER_BITS {
        return Err(WatermarkError::Truncated {
            required: LENGTH_HEADER_BITS,
            available: samples.len(),
        });
    }

    let declared = read_uint(&samples[..LENGTH_HEADER_BITS]);
    let end = LENGTH_HEADER_BITS + declared;
    if end > samples.len() {
        return Err(WatermarkError::Truncated {
            required: end,
            available: samples.len(),
        });
    }

    Ok(decode_lsbs(&samples[LENGTH_HEADER_BITS..end]))
}

/// Reads `characters * 8` payload bits from the start of the audio.
///
/// # Errors
/// [`WatermarkError::InvalidArgument`] if the count needs more samples than
/// there are.
pub fn extract_externally_keyed(samples: &[i16], characters: usize) -> Result<Payload> {
    let bits = characters
        .checked_mul(BITS_PER_CHAR)
        .filter(|&bits| bits <= samples.len())
        .ok_or_else(|| {
            WatermarkError::InvalidArgument(format!(
                "{} characters need {} samples, audio has {}",
                characters,
                characters.saturating_mul(BITS_PER_CHAR),
                samples.len()
            ))
        })?;

    Ok(decode_lsbs(&samples[..bits]))
}

/// Parses an externally supplied character count.
///
/// Accepts a non-negative base-10 integer, surrounding whitespace allowed.
pub fn parse_character_count(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(WatermarkError::InvalidArgument(
            "character count is empty".to_string(),
        ));
    }
    if trimmed.starts_with('-') {
        return Err(WatermarkError::InvalidArgument(format!(
            "character count must not be negative, got '{}'",
            trimmed
        )));
    }
    trimmed.parse::<usize>().map_err(|_| {
        WatermarkError::InvalidArgument(format!(
            "character count must be a whole number, got '{}'",
            trimmed
        ))
    })
}

fn decode_lsbs(samples: &[i16]) -> Payload {
    Payload::from(from_bits(samples.iter().map(|&sample| lsb(sample))))
}
