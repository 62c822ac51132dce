//! # lzwpack: chunked LZW compression
//!
//! A lossless byte-stream compressor built on the LZW dictionary algorithm
//! with a variable-width bit-packing layer and a chunked container format.
//!
//! ## Features
//!
//! - **Pure Rust**: no C dependencies, `#![forbid(unsafe_code)]`
//! - **Bounded memory**: the phrase dictionary resets at a configurable
//!   ceiling, sealing independent chunks
//! - **Parallel**: input segments are compressed concurrently with rayon
//!   (the `parallel` feature, on by default) with byte-identical output
//! - **Dense packing**: code width starts at 8 bits and grows to 16 via
//!   in-band growth markers, so literal-only data costs one byte per code
//!
//! ## Format
//!
//! The container is a 16-bit chunk count followed by length-prefixed
//! chunks; every chunk carries the bit-packed codes of one dictionary
//! lifetime and decodes in isolation. All integers are little-endian.
//!
//! ## Example
//!
//! ```rust
//! use lzwpack::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let container = compress(original).unwrap();
//! let restored = decompress(&container).unwrap();
//! assert_eq!(restored, original);
//! ```
//!
//! Empty input is a degenerate success, not an error:
//!
//! ```rust
//! let container = lzwpack::compress(b"").unwrap();
//! assert_eq!(container, vec![0, 0]); // zero chunks
//! assert!(lzwpack::decompress(&container).unwrap().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitpack;
mod config;
mod container;
mod decoder;
mod dictionary;
mod encoder;
mod error;

pub use config::{LzwConfig, MAX_DICT_ENTRIES};
pub use container::{compress, compress_with_config, decompress};
pub use decoder::LzwDecoder;
pub use encoder::{CodeChunk, LzwEncoder};
pub use error::{LzwError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_simple() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let container = compress(original).unwrap();
        assert_eq!(decompress(&container).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_empty() {
        let container = compress(b"").unwrap();
        assert_eq!(container, vec![0, 0]);
        assert!(decompress(&container).unwrap().is_empty());
    }

    #[test]
    fn test_repetitive_data_compresses() {
        let original = vec![b'X'; 4096];
        let container = compress(&original).unwrap();
        assert!(container.len() < original.len() / 4);
        assert_eq!(decompress(&container).unwrap(), original);
    }

    #[test]
    fn test_custom_config_roundtrip() {
        let config = LzwConfig::new(512, 1024).unwrap();
        let original: Vec<u8> = (0..10_000u32).map(|i| (i * 13 % 241) as u8).collect();
        let container = compress_with_config(&original, config).unwrap();
        assert_eq!(decompress(&container).unwrap(), original);
    }
}
