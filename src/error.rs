//! Error types for container parsing and the LSB codec.

use thiserror::Error;

/// Coarse classification of a [`WatermarkError`].
///
/// Front ends use this to pick a user-facing message without matching on
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Not a valid or supported WAV container.
    Format,
    /// Payload does not fit in the sample sequence or the length field.
    Capacity,
    /// Embedded length points past the end of the sample sequence.
    TruncatedData,
    /// Bad caller-supplied argument.
    InvalidArgument,
}

/// Errors that can occur while watermarking or reading a watermark.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WatermarkError {
    /// The byte stream is not a valid 16-bit PCM WAV, or the header and
    /// sample count disagree.
    #[error("Invalid WAV container: {0}")]
    Format(String),

    /// The bitstream needs more samples than the audio has.
    #[error("Audio too short to hold payload: need {required} samples, have {available}")]
    Capacity {
        /// Samples needed for the full bitstream.
        required: usize,
        /// Samples in the sequence.
        available: usize,
    },

    /// The payload bit length cannot be written into the 16-bit length header.
    #[error("Payload of {bits} bits exceeds the 16-bit length header (max 65535 bits)")]
    LengthFieldOverflow {
        /// Payload length in bits.
        bits: usize,
    },

    /// The embedded length header points past the end of the audio.
    #[error("Embedded watermark needs {required} samples, audio has {available}")]
    Truncated {
        /// Samples covered by the header plus the declared payload bits.
        required: usize,
        /// Samples in the sequence.
        available: usize,
    },

    /// A caller-supplied argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl WatermarkError {
    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Format(_) => ErrorKind::Format,
            Self::Capacity { .. } | Self::LengthFieldOverflow { .. } => ErrorKind::Capacity,
            Self::Truncated { .. } => ErrorKind::TruncatedData,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, WatermarkError>;
