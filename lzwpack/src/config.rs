//! Codec configuration: dictionary ceiling and segment size.

use crate::error::{LzwError, Result};

/// First code assigned to a learned phrase; `0..=255` are literal bytes.
pub const FIRST_CODE: u16 = 256;

/// Largest dictionary ceiling that keeps every code within `u16`.
pub const MAX_DICT_ENTRIES: usize = (1 << 16) - FIRST_CODE as usize;

/// Tuning knobs for the chunked LZW codec.
///
/// The defaults match the container format's limits: with
/// [`MAX_DICT_ENTRIES`] phrases the largest assignable code is 65535, so
/// every code fits the packer's terminal 16-bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Maximum learned phrases per dictionary lifetime. Reaching this
    /// ceiling seals the current chunk and resets the dictionary.
    pub max_entries: usize,
    /// Input segment size in bytes. Each segment is compressed with its
    /// own independent dictionary, which is what makes segments safe to
    /// compress in parallel.
    pub segment_size: usize,
}

impl LzwConfig {
    /// Default configuration: full 16-bit code space, 32 KiB segments.
    pub const DEFAULT: Self = Self {
        max_entries: MAX_DICT_ENTRIES,
        segment_size: 32 * 1024,
    };

    /// Create a validated configuration.
    ///
    /// `max_entries` must be in `1..=65280` so codes stay within `u16`;
    /// `segment_size` must be non-zero.
    pub fn new(max_entries: usize, segment_size: usize) -> Result<Self> {
        if max_entries == 0 || max_entries > MAX_DICT_ENTRIES {
            return Err(LzwError::InvalidConfig {
                message: format!(
                    "max_entries must be in 1..={MAX_DICT_ENTRIES}, got {max_entries}"
                ),
            });
        }
        if segment_size == 0 {
            return Err(LzwError::InvalidConfig {
                message: "segment_size must be non-zero".into(),
            });
        }
        Ok(Self {
            max_entries,
            segment_size,
        })
    }

    /// Largest code this configuration can assign.
    pub fn max_code(&self) -> u16 {
        (FIRST_CODE as usize + self.max_entries - 1) as u16
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
