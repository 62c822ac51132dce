//! Phrase dictionaries for LZW encoding and decoding.
//!
//! The forward dictionary maps `(prefix code, next byte)` pairs to codes and
//! is driven by the encoder. The inverse dictionary maps codes back to full
//! phrases and is rebuilt lazily by the decoder. They are two distinct types
//! on purpose: their insertion triggers differ (lookup miss vs. new-code
//! case), but their sizes must track one-for-one at every step of a
//! symmetric encode/decode, which the tests below check.

use crate::config::{FIRST_CODE, MAX_DICT_ENTRIES};
use crate::error::{LzwError, Result};
use std::collections::HashMap;

/// Outcome of a forward dictionary probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The extended phrase already has a code; keep scanning.
    Hit(u16),
    /// The pair was unknown: it is now registered under the returned code,
    /// and the encoder must emit its pending prefix.
    Miss(u16),
}

/// Forward dictionary: `(prefix code, symbol) -> code`.
///
/// Codes are assigned sequentially from 256 in insertion order.
#[derive(Debug, Default)]
pub struct EncodeDict {
    map: HashMap<(u16, u8), u16>,
}

impl EncodeDict {
    /// Create an empty forward dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of learned phrases.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no phrase has been learned yet.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Probe the dictionary for `prefix` extended by `symbol`.
    ///
    /// With no prefix (stream start), a literal byte is always its own
    /// code and nothing is inserted. Otherwise an unknown pair is
    /// registered under the next sequential code and reported as a miss.
    pub fn lookup_or_insert(&mut self, prefix: Option<u16>, symbol: u8) -> Lookup {
        let Some(prefix) = prefix else {
            return Lookup::Hit(symbol as u16);
        };
        if let Some(&code) = self.map.get(&(prefix, symbol)) {
            return Lookup::Hit(code);
        }
        let code = FIRST_CODE + self.map.len() as u16;
        self.map.insert((prefix, symbol), code);
        Lookup::Miss(code)
    }
}

/// Inverse dictionary: `code -> phrase`, for codes 256 and above.
///
/// Codes are sequential, so phrases live in a `Vec` indexed by
/// `code - 256`; the next free code is always `256 + phrases.len()`.
#[derive(Debug, Default)]
pub struct DecodeDict {
    phrases: Vec<Vec<u8>>,
}

impl DecodeDict {
    /// Create an empty inverse dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// True when no phrase has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// The code the next registration will receive.
    pub fn next_code(&self) -> u16 {
        FIRST_CODE + self.phrases.len() as u16
    }

    /// Resolve `code` into its phrase, given the previously decoded code,
    /// and register the follow-up entry the symmetric encoder inserted at
    /// this step.
    ///
    /// A code equal to [`next_code`](Self::next_code) is the classic
    /// unseen-code case: the encoder emitted the code it assigned on this
    /// very step, so the phrase is the previous phrase extended by its own
    /// first byte. Any code beyond that is unresolvable.
    pub fn resolve(&mut self, code: u16, prev: u16) -> Result<Vec<u8>> {
        let prev_phrase = self.phrase_of(prev)?.to_vec();

        if code < FIRST_CODE {
            let byte = code as u8;
            let mut extended = prev_phrase;
            extended.push(byte);
            self.register(extended);
            return Ok(vec![byte]);
        }

        let index = (code - FIRST_CODE) as usize;
        match self.phrases.get(index) {
            Some(phrase) => {
                let phrase = phrase.clone();
                let mut extended = prev_phrase;
                extended.push(phrase[0]);
                self.register(extended);
                Ok(phrase)
            }
            None if code == self.next_code() => {
                let mut extended = prev_phrase;
                extended.push(extended[0]);
                self.register(extended.clone());
                Ok(extended)
            }
            None => Err(LzwError::InvalidCode { code }),
        }
    }

    fn phrase_of(&self, code: u16) -> Result<&[u8]> {
        if code < FIRST_CODE {
            // Literal bytes are stored implicitly; borrow from a static
            // table so literal and learned phrases share a return type.
            return Ok(&LITERALS[code as usize..code as usize + 1]);
        }
        self.phrases
            .get((code - FIRST_CODE) as usize)
            .map(Vec::as_slice)
            .ok_or(LzwError::InvalidCode { code })
    }

    fn register(&mut self, phrase: Vec<u8>) {
        // A well-formed stream never grows past the encoder's ceiling; an
        // oversized corrupt chunk must not wrap the 16-bit code space.
        if self.phrases.len() < MAX_DICT_ENTRIES {
            self.phrases.push(phrase);
        }
    }
}

/// The 256 literal one-byte phrases, indexable by byte value.
static LITERALS: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_prefix_is_literal_hit() {
        let mut dict = EncodeDict::new();
        assert_eq!(dict.lookup_or_insert(None, b'A'), Lookup::Hit(65));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_miss_then_hit() {
        let mut dict = EncodeDict::new();
        assert_eq!(dict.lookup_or_insert(Some(65), b'B'), Lookup::Miss(256));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.lookup_or_insert(Some(65), b'B'), Lookup::Hit(256));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_distinct_symbols_under_one_prefix() {
        let mut dict = EncodeDict::new();
        assert_eq!(dict.lookup_or_insert(Some(65), b'B'), Lookup::Miss(256));
        assert_eq!(dict.lookup_or_insert(Some(65), b'C'), Lookup::Miss(257));
    }

    #[test]
    fn test_resolve_literal_registers_extension() {
        let mut dict = DecodeDict::new();
        // prev = 'A', code = 'B': phrase "B", new entry 256 = "AB"
        assert_eq!(dict.resolve(66, 65).unwrap(), b"B");
        assert_eq!(dict.next_code(), 257);
        // 256 now resolves to "AB"
        assert_eq!(dict.resolve(256, 66).unwrap(), b"AB");
    }

    #[test]
    fn test_resolve_unseen_code() {
        let mut dict = DecodeDict::new();
        // Encoder side of "AAAA": 256 arrives before the decoder defines it.
        assert_eq!(dict.resolve(256, 65).unwrap(), b"AA");
        assert_eq!(dict.next_code(), 257);
    }

    #[test]
    fn test_resolve_rejects_gap_code() {
        let mut dict = DecodeDict::new();
        let err = dict.resolve(300, 65).unwrap_err();
        assert!(matches!(err, LzwError::InvalidCode { code: 300 }));
    }

    #[test]
    fn test_forward_and_inverse_sizes_track() {
        // Encode "ABABABA" by hand and replay the emitted codes through the
        // inverse dictionary; after every resolve both sides must agree.
        let input = b"ABABABA";
        let mut forward = EncodeDict::new();
        let mut w: Option<u16> = None;
        let mut codes = Vec::new();
        let mut sizes = Vec::new();
        for &c in input {
            match forward.lookup_or_insert(w, c) {
                Lookup::Hit(code) => w = Some(code),
                Lookup::Miss(_) => {
                    codes.push(w.unwrap());
                    sizes.push(forward.len());
                    w = Some(c as u16);
                }
            }
        }
        codes.push(w.unwrap());
        assert_eq!(codes, vec![65, 66, 256, 258]);

        let mut inverse = DecodeDict::new();
        let mut old = codes[0];
        for (i, &code) in codes[1..].iter().enumerate() {
            inverse.resolve(code, old).unwrap();
            assert_eq!(inverse.len(), sizes[i], "size diverged at step {i}");
            old = code;
        }
    }
}
