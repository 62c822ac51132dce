//! Error types for the LZW codec.

use thiserror::Error;

/// Errors produced by compression, decompression, and container parsing.
#[derive(Debug, Error)]
pub enum LzwError {
    /// A code referenced a dictionary entry that does not exist.
    #[error("invalid code {code}: no dictionary entry")]
    InvalidCode {
        /// The unresolvable code value.
        code: u16,
    },

    /// A chunk's code sequence could not be resolved against a fresh
    /// dictionary. Chunks decoded before this one are unaffected.
    #[error("corrupt code stream in chunk {chunk}: code {code} has no dictionary entry")]
    CorruptStream {
        /// Zero-based index of the failing chunk in the container.
        chunk: usize,
        /// The unresolvable code value.
        code: u16,
    },

    /// Declared chunk lengths exceed the available container bytes.
    /// Fatal for the whole decode; no partial recovery is attempted.
    #[error("truncated container: need {needed} bytes, have {available}")]
    TruncatedContainer {
        /// Bytes required by the framing.
        needed: usize,
        /// Bytes actually available.
        available: usize,
    },

    /// The input produced more chunks than the 16-bit chunk count can hold.
    #[error("input produced {count} chunks, container limit is {max}", max = u16::MAX)]
    TooManyChunks {
        /// Number of chunks the input would require.
        count: usize,
    },

    /// Configuration parameter out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the offending parameter.
        message: String,
    },

    /// I/O error from the surrounding file layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
