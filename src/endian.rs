//! Word load/store in an explicit byte order.
//!
//! Every primitive declares the order it packs words in. Loading a lane with the wrong order
//! does not fail loudly, it just produces a different cipher, so the order is passed around as a
//! value instead of being baked into ad-hoc `from_le_bytes` calls.

/// Byte order used when packing multi-byte words into a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endian {
    /// Load a 16-bit word from the first 2 bytes of `bytes`.
    #[inline(always)]
    pub fn load_u16(self, bytes: &[u8]) -> u16 {
        let mut word = [0u8; 2];
        word.copy_from_slice(&bytes[..2]);
        match self {
            Endian::Little => u16::from_le_bytes(word),
            Endian::Big => u16::from_be_bytes(word),
        }
    }

    /// Load a 32-bit word from the first 4 bytes of `bytes`.
    #[inline(always)]
    pub fn load_u32(self, bytes: &[u8]) -> u32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&bytes[..4]);
        match self {
            Endian::Little => u32::from_le_bytes(word),
            Endian::Big => u32::from_be_bytes(word),
        }
    }

    /// Load a 64-bit word from the first 8 bytes of `bytes`.
    #[inline(always)]
    pub fn load_u64(self, bytes: &[u8]) -> u64 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[..8]);
        match self {
            Endian::Little => u64::from_le_bytes(word),
            Endian::Big => u64::from_be_bytes(word),
        }
    }

    /// Store a 16-bit word into the first 2 bytes of `out`.
    #[inline(always)]
    pub fn store_u16(self, word: u16, out: &mut [u8]) {
        let bytes = match self {
            Endian::Little => word.to_le_bytes(),
            Endian::Big => word.to_be_bytes(),
        };
        out[..2].copy_from_slice(&bytes);
    }

    /// Store a 32-bit word into the first 4 bytes of `out`.
    #[inline(always)]
    pub fn store_u32(self, word: u32, out: &mut [u8]) {
        let bytes = match self {
            Endian::Little => word.to_le_bytes(),
            Endian::Big => word.to_be_bytes(),
        };
        out[..4].copy_from_slice(&bytes);
    }

    /// Store a 64-bit word into the first 8 bytes of `out`.
    #[inline(always)]
    pub fn store_u64(self, word: u64, out: &mut [u8]) {
        let bytes = match self {
            Endian::Little => word.to_le_bytes(),
            Endian::Big => word.to_be_bytes(),
        };
        out[..8].copy_from_slice(&bytes);
    }

    /// Load `N` consecutive 32-bit words.
    #[inline]
    pub fn load_words<const N: usize>(self, bytes: &[u8]) -> [u32; N] {
        let mut words = [0u32; N];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = self.load_u32(chunk);
        }
        words
    }

    /// Store 32-bit words consecutively into `out`.
    #[inline]
    pub fn store_words(self, words: &[u32], out: &mut [u8]) {
        for (word, chunk) in words.iter().zip(out.chunks_exact_mut(4)) {
            self.store_u32(*word, chunk);
        }
    }
}

/// XOR `src` into the front of `dst`.
#[inline(always)]
pub(crate) fn xor_into(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}
