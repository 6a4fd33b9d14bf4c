//! Byte-mode data segments.

use crate::bit_buffer::BitBuffer;
use crate::version::Version;

/// UTF-8 byte order mark, prefixed to text that needed multi-byte sequences.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Segment encoding mode. Only byte mode is produced by this encoder.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SegmentMode {
    Byte,
}

impl SegmentMode {
    /// The 4-bit mode indicator.
    pub fn mode_bits(self) -> u32 {
        match self {
            SegmentMode::Byte => 0x4,
        }
    }

    /// Width of the length field for this mode in a symbol of `ver`.
    pub fn char_count_bits(self, ver: Version) -> u8 {
        (match self {
            SegmentMode::Byte => [8, 16, 16],
        })[usize::from((ver.value() + 7) / 17)]
    }
}

/// A run of text encoded in byte mode.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ByteSegment {
    mode: SegmentMode,
    text: String,
    data: Vec<u8>,
}

impl ByteSegment {
    /// Encodes `text` one UTF-16 code unit at a time.
    ///
    /// When the encoded length differs from the number of code units, the
    /// UTF-8 byte order mark is prepended so that readers which sniff the
    /// encoding pick UTF-8 rather than Latin-1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qrmint::segment::ByteSegment;
    ///
    /// assert_eq!(ByteSegment::new("abc").data(), b"abc");
    /// assert_eq!(ByteSegment::new("é").data(), &[0xEF, 0xBB, 0xBF, 0xC3, 0xA9]);
    /// ```
    pub fn new(text: &str) -> Self {
        let mut data = Vec::with_capacity(text.len());
        let mut units: usize = 0;
        for unit in text.encode_utf16() {
            encode_code_unit(u32::from(unit), &mut data);
            units += 1;
        }
        if data.len() != units {
            data.splice(0..0, UTF8_BOM);
        }
        Self {
            mode: SegmentMode::Byte,
            text: text.to_owned(),
            data,
        }
    }

    /// Wraps raw bytes without any re-encoding.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            mode: SegmentMode::Byte,
            text: String::from_utf8_lossy(bytes).into_owned(),
            data: bytes.to_vec(),
        }
    }

    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes written for this segment, BOM included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends the payload bytes, 8 bits each.
    pub fn write(&self, buffer: &mut BitBuffer) {
        for &b in &self.data {
            buffer.put(u32::from(b), 8);
        }
    }
}

fn encode_code_unit(code: u32, out: &mut Vec<u8>) {
    if code > 0x10000 {
        out.extend_from_slice(&[
            (0xF0 | ((code & 0x1C_0000) >> 18)) as u8,
            (0x80 | ((code & 0x3_F000) >> 12)) as u8,
            (0x80 | ((code & 0xFC0) >> 6)) as u8,
            (0x80 | (code & 0x3F)) as u8,
        ]);
    } else if code > 0x800 {
        out.extend_from_slice(&[
            (0xE0 | ((code & 0xF000) >> 12)) as u8,
            (0x80 | ((code & 0xFC0) >> 6)) as u8,
            (0x80 | (code & 0x3F)) as u8,
        ]);
    } else if code > 0x80 {
        out.extend_from_slice(&[
            (0xC0 | ((code & 0x7C0) >> 6)) as u8,
            (0x80 | (code & 0x3F)) as u8,
        ]);
    } else {
        out.push(code as u8);
    }
}
