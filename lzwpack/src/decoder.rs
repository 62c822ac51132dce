//! LZW decoder: chunked code sequences back into bytes.

use crate::dictionary::DecodeDict;
use crate::error::{LzwError, Result};

/// LZW decoder. Stateless across chunks: every chunk is decoded against a
/// freshly initialized inverse dictionary, mirroring the encoder's reset
/// boundaries exactly.
#[derive(Debug, Default)]
pub struct LzwDecoder;

impl LzwDecoder {
    /// Create a decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decode one chunk's code sequence into bytes.
    ///
    /// The first code of a chunk is always a lone literal (the encoder
    /// starts every chunk from the empty-prefix state); anything else means
    /// the stream is corrupt. Resolution errors abort this chunk only.
    pub fn decode_chunk(&self, codes: &[u16]) -> Result<Vec<u8>> {
        let Some((&first, rest)) = codes.split_first() else {
            return Ok(Vec::new());
        };
        if first >= 256 {
            return Err(LzwError::InvalidCode { code: first });
        }

        let mut output = vec![first as u8];
        let mut dict = DecodeDict::new();
        let mut old = first;
        for &code in rest {
            let phrase = dict.resolve(code, old)?;
            output.extend_from_slice(&phrase);
            old = code;
        }
        Ok(output)
    }
}
