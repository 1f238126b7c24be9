//! # wavmark - LSB text watermarks for WAV audio
//!
//! wavmark hides a short single-byte text in the least significant bits of
//! a 16-bit PCM WAV file and reads it back.
//!
//! ## Overview
//!
//! - Each payload bit replaces bit 0 of one sample, from the first sample on
//! - Characters are written MSB-first, 8 bits each (U+0000 to U+00FF only)
//! - **Self-describing** mode prefixes a 16-bit big-endian bit length
//! - **Externally-keyed** mode writes payload bits only; the extractor must
//!   be told the character count
//! - Header fields and sample count are never changed
//!
//! The scheme is fragile by construction: any re-encoding, resampling or
//! gain change destroys the watermark. Payloads are neither encrypted nor
//! authenticated, and extracting from unmarked audio returns garbage
//! rather than an error.
//!
//! ## Example Usage
//!
//! ```rust
//! use wavmark::container::{self, WavHeader};
//! use wavmark::{embed_self_describing, extract_self_describing};
//!
//! let silence = vec![0i16; 10_000];
//! let wav = container::encode(&WavHeader::new(1, 44100, 10_000), &silence).unwrap();
//!
//! let marked = embed_self_describing(&wav, "HI").unwrap();
//! assert_eq!(extract_self_describing(&marked).unwrap(), "HI");
//! ```
//!
//! ## Modules
//!
//! - [`container`]: WAV bytes to header + samples and back
//! - [`codec`]: bitstream layout, embed and extract over sample slices
//! - [`carrier`]: in-memory WAV carrier and byte-level entry points
//! - [`config`]: persisted command-line defaults
//! - [`error`]: error types

pub mod carrier;
pub mod codec;
pub mod config;
pub mod container;
pub mod error;

// Re-export commonly used types at the crate root
pub use carrier::{
    embed_externally_keyed, embed_self_describing, embed_wav, extract_externally_keyed,
    extract_self_describing, extract_wav, WavCarrier,
};
pub use codec::{capacity, embed, embed_in_place, extract, parse_character_count, Mode, Payload};
pub use config::{ConfigError, WatermarkConfig};
pub use container::WavHeader;
pub use error::{ErrorKind, Result, WatermarkError};
