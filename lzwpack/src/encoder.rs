//! LZW encoder: byte stream in, chunked code sequences out.

use crate::config::LzwConfig;
use crate::dictionary::{EncodeDict, Lookup};

/// One chunk's worth of codes, produced between two dictionary resets.
pub type CodeChunk = Vec<u16>;

/// LZW encoder with bounded dictionary growth.
///
/// Scanning never fails: the encoder always terminates and seals at least
/// one chunk for any non-empty input. When the dictionary reaches the
/// configured ceiling the current chunk is sealed and scanning restarts
/// against a fresh dictionary, which bounds both memory and the maximum
/// code width of any single chunk.
#[derive(Debug)]
pub struct LzwEncoder {
    config: LzwConfig,
}

impl LzwEncoder {
    /// Create an encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self { config }
    }

    /// Encode one segment into its chunk sequence.
    ///
    /// Each returned chunk corresponds to one dictionary lifetime and is
    /// decodable in isolation. An empty segment yields no chunks.
    pub fn encode(&self, input: &[u8]) -> Vec<CodeChunk> {
        let mut chunks = Vec::new();
        let mut chunk = CodeChunk::new();
        let mut dict = EncodeDict::new();
        let mut w: Option<u16> = None;

        for &c in input {
            if dict.len() >= self.config.max_entries {
                if let Some(code) = w.take() {
                    chunk.push(code);
                }
                chunks.push(std::mem::take(&mut chunk));
                dict = EncodeDict::new();
            }
            match dict.lookup_or_insert(w, c) {
                Lookup::Hit(code) => w = Some(code),
                Lookup::Miss(_) => {
                    let code = w
                        .take()
                        .expect("BUG: a lookup miss requires a prefix code");
                    chunk.push(code);
                    w = Some(c as u16);
                }
            }
        }

        if let Some(code) = w {
            chunk.push(code);
            chunks.push(chunk);
        }
        chunks
    }
}
