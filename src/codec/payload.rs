//! Single-byte text payloads.

use std::fmt;

use crate::error::{Result, WatermarkError};

/// Bits used per payload character.
pub const BITS_PER_CHAR: usize = 8;

/// A sequence of 8-bit characters.
///
/// Text is mapped one character per byte (U+0000 to U+00FF), so every byte
/// value round-trips and the character count always equals the byte count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Builds a payload from text.
    ///
    /// Fails with [`WatermarkError::InvalidArgument`] if any character lies
    /// outside U+0000..=U+00FF.
    pub fn from_text(text: &str) -> Result<Self> {
        text.chars()
            .enumerate()
            .map(|(position, ch)| {
                u8::try_from(u32::from(ch)).map_err(|_| {
                    WatermarkError::InvalidArgument(format!(
                        "character {:?} at position {} is not a single-byte character",
                        ch, position
                    ))
                })
            })
            .collect::<Result<Vec<u8>>>()
            .map(Self)
    }

    /// Wraps raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the payload and returns its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Decodes the payload back to text, one character per byte.
    pub fn to_text(&self) -> String {
        self.0.iter().map(|&b| char::from(b)).collect()
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Payload length in bits, excluding any header.
    pub fn bit_len(&self) -> usize {
        self.0.len() * BITS_PER_CHAR
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
