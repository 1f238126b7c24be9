//! Embedding protocols.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WatermarkError;

/// Width of the self-describing length header, in bits (one sample each).
pub const LENGTH_HEADER_BITS: usize = 16;

/// Embedding protocol.
///
/// The two modes produce different bitstreams for the same payload. An
/// extractor has to be told which one the embedder used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// A 16-bit big-endian payload length (in bits) precedes the payload.
    #[default]
    SelfDescribing,
    /// Payload bits only. The character count travels out of band.
    ExternallyKeyed,
}

impl Mode {
    /// Number of header bits this mode prepends to the payload.
    pub fn header_bits(self) -> usize {
        match self {
            Self::SelfDescribing => LENGTH_HEADER_BITS,
            Self::ExternallyKeyed => 0,
        }
    }

    /// Stable name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SelfDescribing => "self-describing",
            Self::ExternallyKeyed => "externally-keyed",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "self-describing" | "self" => Ok(Self::SelfDescribing),
            "externally-keyed" | "keyed" => Ok(Self::ExternallyKeyed),
            other => Err(WatermarkError::InvalidArgument(format!(
                "unknown mode '{}' (expected 'self-describing' or 'externally-keyed')",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bits() {
        assert_eq!(Mode::SelfDescribing.header_bits(), 16);
        assert_eq!(Mode::ExternallyKeyed.header_bits(), 0);
    }

    #[test]
    fn test_parse_and_display() {
        for mode in [Mode::SelfDescribing, Mode::ExternallyKeyed] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!("keyed".parse::<Mode>().unwrap(), Mode::ExternallyKeyed);
        assert_eq!(" Self-Describing ".parse::<Mode>().unwrap(), Mode::SelfDescribing);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "lsb".parse::<Mode>().unwrap_err();
        assert!(matches!(err, WatermarkError::InvalidArgument(_)));
    }

    #[test]
    fn test_default_is_self_describing() {
        assert_eq!(Mode::default(), Mode::SelfDescribing);
    }
}
