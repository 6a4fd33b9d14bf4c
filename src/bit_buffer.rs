/// An append-only sequence of bits, packed MSB first into a growable byte vector.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct BitBuffer {
    data: Vec<u8>,
    length: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits appended so far.
    pub fn len_in_bits(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The backing bytes. The last byte is zero-filled past `len_in_bits()`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len_in_bits()`.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.length, "Bit index out of range");
        (self.data[index >> 3] >> (7 - (index & 7))) & 1 == 1
    }

    /// Appends the `len` low bits of `val`, most significant first.
    pub fn put(&mut self, val: u32, len: u8) {
        assert!(len <= 32, "Bit field too wide");
        for i in (0..len).rev() {
            self.put_bit((val >> i) & 1 == 1);
        }
    }

    pub fn put_bit(&mut self, bit: bool) {
        let index: usize = self.length >> 3;
        if self.data.len() <= index {
            self.data.push(0);
        }
        if bit {
            self.data[index] |= 0x80 >> (self.length & 7);
        }
        self.length += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_put_packs_msb_first() {
        let mut bb = BitBuffer::new();
        bb.put(0b0100, 4);
        bb.put(5, 8);
        assert_eq!(bb.len_in_bits(), 12);
        assert_eq!(bb.as_bytes(), &[0x40, 0x50]);
    }

    #[test]
    fn test_put_keeps_only_low_bits() {
        let mut bb = BitBuffer::new();
        bb.put(0xFF3, 4);
        assert_eq!(bb.as_bytes(), &[0x30]);
        assert!(!bb.get(0));
        assert!(bb.get(2));
    }

    #[test]
    fn test_backing_vector_grows_lazily() {
        let mut bb = BitBuffer::new();
        assert!(bb.as_bytes().is_empty());
        bb.put_bit(true);
        assert_eq!(bb.as_bytes().len(), 1);
        bb.put(0, 7);
        assert_eq!(bb.as_bytes().len(), 1);
        bb.put_bit(false);
        assert_eq!(bb.as_bytes(), &[0x80, 0x00]);
        assert!(bb.len_in_bits() <= bb.as_bytes().len() * 8);
    }

    #[test]
    fn test_put_full_width_value() {
        let mut bb = BitBuffer::new();
        bb.put(0xDEAD_BEEF, 32);
        assert_eq!(bb.as_bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    }
}
