//! Variable-width bit packing for code sequences.
//!
//! Codes are written MSB-first at a width that starts at 8 bits and grows to
//! a terminal 16. The all-ones value at the current width (`2^W - 1`) is
//! reserved as an in-band growth marker: the packer writes it whenever the
//! next code no longer fits below it, then bumps the width; the unpacker
//! recognizes the same value and bumps its width without emitting a code.
//! No side channel is needed, and a literal-only chunk stays at width 8,
//! i.e. it is stored as plain bytes.
//!
//! The only padding is trailing zero bits completing the final byte. Since
//! every width is at least 8, leftover bits shorter than the current width
//! are always padding, which is how unpacking terminates.

/// Initial code width in bits.
pub const MIN_WIDTH: u8 = 8;

/// Terminal code width: two full bytes per code, no further growth.
pub const MAX_WIDTH: u8 = 16;

/// All-ones value per width, indexed by width in bits. Doubles as the
/// growth marker for every width below [`MAX_WIDTH`].
const WIDTH_MASK: [u16; MAX_WIDTH as usize + 1] = {
    let mut table = [0u16; MAX_WIDTH as usize + 1];
    let mut w = 0;
    while w <= MAX_WIDTH as usize {
        table[w] = ((1u32 << w) - 1) as u16;
        w += 1;
    }
    table
};

/// MSB-first bit writer.
#[derive(Debug, Default)]
struct MsbBitWriter {
    output: Vec<u8>,
    buffer: u32,
    bits_in_buffer: u8,
}

impl MsbBitWriter {
    fn new() -> Self {
        Self::default()
    }

    /// Write the low `count` bits of `value`, most significant bit first.
    fn write_bits(&mut self, value: u16, count: u8) {
        debug_assert!((1..=16).contains(&count));
        self.buffer = (self.buffer << count) | (value as u32 & ((1u32 << count) - 1));
        self.bits_in_buffer += count;

        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
    }

    /// Zero-pad the final partial byte and return the packed bytes.
    fn into_vec(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            let byte = (self.buffer << (8 - self.bits_in_buffer)) as u8;
            self.output.push(byte);
        }
        self.output
    }
}

/// MSB-first bit reader over a byte slice.
#[derive(Debug)]
struct MsbBitReader<'a> {
    data: &'a [u8],
    byte_pos: usize,
    buffer: u32,
    bits_in_buffer: u8,
}

impl<'a> MsbBitReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Bits not yet consumed, including unread input bytes.
    fn remaining_bits(&self) -> usize {
        self.bits_in_buffer as usize + (self.data.len() - self.byte_pos) * 8
    }

    /// Read `count` bits, most significant bit first. The caller checks
    /// [`remaining_bits`](Self::remaining_bits) beforehand.
    fn read_bits(&mut self, count: u8) -> u16 {
        debug_assert!((1..=16).contains(&count));
        debug_assert!(self.remaining_bits() >= count as usize);
        while self.bits_in_buffer < count {
            self.buffer = (self.buffer << 8) | self.data[self.byte_pos] as u32;
            self.byte_pos += 1;
            self.bits_in_buffer += 8;
        }
        let shift = self.bits_in_buffer - count;
        let value = (self.buffer >> shift) & ((1u32 << count) - 1);
        self.bits_in_buffer -= count;
        value as u16
    }
}

/// Pack a chunk's code sequence into a dense byte string.
pub fn pack(codes: &[u16]) -> Vec<u8> {
    let mut writer = MsbBitWriter::new();
    let mut width = MIN_WIDTH;
    for &code in codes {
        while width < MAX_WIDTH && code >= WIDTH_MASK[width as usize] {
            writer.write_bits(WIDTH_MASK[width as usize], width);
            width += 1;
        }
        writer.write_bits(code, width);
    }
    writer.into_vec()
}

/// Unpack a byte string produced by [`pack`] back into its code sequence.
///
/// Infallible: width growth is replayed from the in-band markers, and any
/// inconsistency in corrupt input surfaces later at the dictionary layer.
pub fn unpack(bytes: &[u8]) -> Vec<u16> {
    let mut reader = MsbBitReader::new(bytes);
    let mut width = MIN_WIDTH;
    let mut codes = Vec::new();
    while reader.remaining_bits() >= width as usize {
        let value = reader.read_bits(width);
        if width < MAX_WIDTH && value == WIDTH_MASK[width as usize] {
            width += 1;
        } else {
            codes.push(value);
        }
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(pack(&[]).is_empty());
        assert!(unpack(&[]).is_empty());
    }

    #[test]
    fn test_literal_only_is_plain_bytes() {
        let codes = vec![0u16, 65, 66, 254];
        let packed = pack(&codes);
        assert_eq!(packed, vec![0, 65, 66, 254]);
        assert_eq!(unpack(&packed), codes);
    }

    #[test]
    fn test_literal_255_escapes_to_width_9() {
        // 255 collides with the width-8 marker and must be escaped.
        let codes = vec![255u16];
        let packed = pack(&codes);
        assert_eq!(packed, vec![0xFF, 0x7F, 0x80]);
        assert_eq!(unpack(&packed), codes);
    }

    #[test]
    fn test_width_9_to_10_boundary() {
        // Sequential codes crossing 511 force the 9 -> 10 escalation.
        let codes: Vec<u16> = (0..600).collect();
        assert_eq!(unpack(&pack(&codes)), codes);
    }

    #[test]
    fn test_small_code_after_growth() {
        // Width never shrinks: a small code after escalation still reads
        // back at the grown width.
        let codes = vec![100, 700, 3, 9];
        assert_eq!(unpack(&pack(&codes)), codes);
    }

    #[test]
    fn test_terminal_width_16() {
        let codes = vec![40_000u16, 5, u16::MAX, 65_534];
        let packed = pack(&codes);
        assert_eq!(unpack(&packed), codes);
    }

    #[test]
    fn test_chained_markers_to_terminal_width() {
        // A lone max code walks every width from 8 to 16.
        let codes = vec![u16::MAX];
        let packed = pack(&codes);
        assert_eq!(unpack(&packed), codes);
    }

    #[test]
    fn test_bit_writer_reader_symmetry() {
        let mut writer = MsbBitWriter::new();
        writer.write_bits(0b1_0110_1011, 9);
        writer.write_bits(0b11_0000_0001, 10);
        writer.write_bits(0xBEEF, 16);
        let data = writer.into_vec();

        let mut reader = MsbBitReader::new(&data);
        assert_eq!(reader.read_bits(9), 0b1_0110_1011);
        assert_eq!(reader.read_bits(10), 0b11_0000_0001);
        assert_eq!(reader.read_bits(16), 0xBEEF);
        // Only zero padding may remain.
        assert!(reader.remaining_bits() < 8);
    }
}
