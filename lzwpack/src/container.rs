//! Container framing and the segment orchestrator.
//!
//! Container layout, all integers little-endian:
//!
//! ```text
//! chunk_count : u16
//! repeated chunk_count times:
//!   chunk_len : u32
//!   bytes     : chunk_len bytes (packed codes, see bitpack)
//! ```
//!
//! Compression splits the input into fixed-size segments and compresses
//! them independently; segment boundaries and dictionary-reset boundaries
//! are deliberately the same boundary, so no state is shared between
//! workers and the segments can be compressed in parallel. Results are
//! collected in segment order regardless of completion order, which keeps
//! the output byte-identical to a serial run.

use crate::bitpack;
use crate::config::LzwConfig;
use crate::decoder::LzwDecoder;
use crate::encoder::LzwEncoder;
use crate::error::{LzwError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Size of the chunk-count header field in bytes.
const COUNT_SIZE: usize = 2;
/// Size of each per-chunk length field in bytes.
const LEN_SIZE: usize = 4;

/// Compress `input` into a container with the default configuration.
///
/// Empty input is a degenerate success: a container declaring zero chunks.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    compress_with_config(input, LzwConfig::default())
}

/// Compress `input` into a container with an explicit configuration.
pub fn compress_with_config(input: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let encoder = LzwEncoder::new(config);
    let segments: Vec<&[u8]> = input.chunks(config.segment_size).collect();
    let packed_per_segment = compress_segments(&encoder, &segments);

    let chunk_count: usize = packed_per_segment.iter().map(Vec::len).sum();
    if chunk_count > u16::MAX as usize {
        return Err(LzwError::TooManyChunks { count: chunk_count });
    }

    let mut output = Vec::with_capacity(COUNT_SIZE + input.len() / 2);
    output.extend_from_slice(&(chunk_count as u16).to_le_bytes());
    for packed in packed_per_segment.into_iter().flatten() {
        output.extend_from_slice(&(packed.len() as u32).to_le_bytes());
        output.extend_from_slice(&packed);
    }
    Ok(output)
}

/// Decompress a container produced by [`compress`].
///
/// Chunks are decoded top-to-bottom in container order; each gets a fresh
/// dictionary. A chunk that fails resolution reports [`LzwError::CorruptStream`]
/// with its index, after every earlier chunk decoded cleanly. Bytes past
/// the last declared chunk are ignored.
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    let mut reader = ContainerReader::new(container);
    let header = reader.take(COUNT_SIZE)?;
    let chunk_count = u16::from_le_bytes([header[0], header[1]]);

    let decoder = LzwDecoder::new();
    let mut output = Vec::new();
    for chunk_index in 0..chunk_count as usize {
        let len = reader.take(LEN_SIZE)?;
        let chunk_len = u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize;
        let packed = reader.take(chunk_len)?;

        let codes = bitpack::unpack(packed);
        let decoded = decoder.decode_chunk(&codes).map_err(|err| match err {
            LzwError::InvalidCode { code } => LzwError::CorruptStream {
                chunk: chunk_index,
                code,
            },
            other => other,
        })?;
        output.extend_from_slice(&decoded);
    }
    Ok(output)
}

/// Encode and bit-pack every segment, in segment order.
#[cfg(feature = "parallel")]
fn compress_segments(encoder: &LzwEncoder, segments: &[&[u8]]) -> Vec<Vec<Vec<u8>>> {
    segments
        .par_iter()
        .map(|segment| pack_segment(encoder, segment))
        .collect()
}

/// Serial fallback when the `parallel` feature is disabled.
#[cfg(not(feature = "parallel"))]
fn compress_segments(encoder: &LzwEncoder, segments: &[&[u8]]) -> Vec<Vec<Vec<u8>>> {
    segments
        .iter()
        .map(|segment| pack_segment(encoder, segment))
        .collect()
}

fn pack_segment(encoder: &LzwEncoder, segment: &[u8]) -> Vec<Vec<u8>> {
    encoder
        .encode(segment)
        .iter()
        .map(|chunk| bitpack::pack(chunk))
        .collect()
}

/// Bounds-checked cursor over the container bytes.
struct ContainerReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ContainerReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.data.len() - self.pos {
            return Err(LzwError::TruncatedContainer {
                needed: self.pos.saturating_add(len),
                available: self.data.len(),
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }
}
