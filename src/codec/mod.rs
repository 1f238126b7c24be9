//! LSB codec over in-memory 16-bit sample sequences.
//!
//! Each payload bit replaces bit 0 of one sample, starting at sample 0:
//!
//! - [`Mode::SelfDescribing`]: `[16-bit big-endian bit length] + [payload]`
//! - [`Mode::ExternallyKeyed`]: `[payload]`, length known to the extractor
//!
//! Payload characters are written MSB-first, in order.

pub mod bitstream;
pub mod embed;
pub mod extract;
pub mod mode;
pub mod payload;

pub use bitstream::MAX_LENGTH_FIELD_BITS;
pub use embed::{embed, embed_in_place};
pub use extract::{extract, extract_externally_keyed, extract_self_describing, parse_character_count};
pub use mode::{Mode, LENGTH_HEADER_BITS};
pub use payload::{Payload, BITS_PER_CHAR};

/// Maximum number of characters that fit in `sample_count` samples.
pub fn capacity(sample_count: usize, mode: Mode) -> usize {
    match mode {
        Mode::SelfDescribing => (sample_count.saturating_sub(LENGTH_HEADER_BITS) / BITS_PER_CHAR)
            .min(MAX_LENGTH_FIELD_BITS / BITS_PER_CHAR),
        Mode::ExternallyKeyed => sample_count / BITS_PER_CHAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        assert_eq!(capacity(10_000, Mode::SelfDescribing), 1248);
        assert_eq!(capacity(10_000, Mode::ExternallyKeyed), 1250);
        assert_eq!(capacity(20, Mode::ExternallyKeyed), 2);
        assert_eq!(capacity(15, Mode::SelfDescribing), 0);
        assert_eq!(capacity(10_000_000, Mode::SelfDescribing), 8191);
    }

    #[test]
    fn test_capacity_is_achievable() {
        for mode in [Mode::SelfDescribing, Mode::ExternallyKeyed] {
            let samples = vec![0i16; 1003];
            let max = capacity(samples.len(), mode);
            let fits = Payload::from_bytes(vec![b'z'; max]);
            let over = Payload::from_bytes(vec![b'z'; max + 1]);
            assert!(embed(&samples, &fits, mode).is_ok());
            assert!(embed(&samples, &over, mode).is_err());
        }
    }
}
