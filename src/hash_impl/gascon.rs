//! GASCON-HASH and GASCON-XOF.
//!
//! The ASCON hashing sponge over the GASCON permutation: an 8-byte rate at the front of the
//! state, the full 12 rounds after every block and a `0x80` marker just past the last input
//! byte. The hash and the XOF differ only in the word loaded before the first permutation.

use super::{HASH_SIZE, Hasher};
use crate::engine::Duplex;
use crate::primitive::{Gascon, Permutation};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Rate in bytes.
const RATE: usize = 8;

/// Padding marker after the last input byte.
const PAD: u8 = 0x80;

/// Initialization word of the hash (256-bit output length).
const HASH_IV: u64 = 0x0040_0c00_0000_0100;

/// Initialization word of the XOF (unbounded output).
const XOF_IV: u64 = 0x0040_0c00_0000_0000;

/// GASCON-XOF with interleavable absorb and squeeze calls.
///
/// ```
/// use lwc_aead::GasconXof;
///
/// let mut xof = GasconXof::new();
/// xof.absorb(b"abc");
/// let mut stream = [0u8; 48];
/// xof.squeeze(&mut stream[..5]);
/// xof.squeeze(&mut stream[5..]);
///
/// let mut again = GasconXof::new();
/// again.absorb(b"ab");
/// again.absorb(b"c");
/// let mut whole = [0u8; 48];
/// again.squeeze(&mut whole);
/// assert_eq!(stream, whole);
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GasconXof {
    duplex: Duplex<Gascon>,
    /// Bytes of the current rate block already absorbed or squeezed.
    count: usize,
    #[zeroize(skip)]
    squeezing: bool,
}

impl GasconXof {
    /// Create a fresh XOF.
    pub fn new() -> Self {
        Self::with_iv(XOF_IV)
    }

    fn with_iv(iv: u64) -> Self {
        let mut duplex = Duplex::<Gascon>::new();
        duplex.xor_at(0, &iv.to_le_bytes());
        duplex.permute(Gascon::ROUNDS);
        Self {
            duplex,
            count: 0,
            squeezing: false,
        }
    }

    /// Absorb more input. Absorbing after a squeeze permutes and starts a new input block.
    pub fn absorb(&mut self, mut data: &[u8]) {
        if self.squeezing {
            self.duplex.permute(Gascon::ROUNDS);
            self.squeezing = false;
            self.count = 0;
        }

        while !data.is_empty() {
            let available = (RATE - self.count).min(data.len());
            self.duplex.xor_at(self.count, &data[..available]);
            self.count += available;
            data = &data[available..];

            if self.count == RATE {
                self.duplex.permute(Gascon::ROUNDS);
                self.count = 0;
            }
        }
    }

    /// Fill `out` with output. Consecutive squeezes continue the same stream.
    pub fn squeeze(&mut self, mut out: &mut [u8]) {
        if !self.squeezing {
            self.duplex.xor_at(self.count, &[PAD]);
            self.count = RATE;
            self.squeezing = true;
        }

        while !out.is_empty() {
            if self.count == RATE {
                self.duplex.permute(Gascon::ROUNDS);
                self.count = 0;
            }
            let available = (RATE - self.count).min(out.len());
            let (head, tail) = core::mem::take(&mut out).split_at_mut(available);
            head.copy_from_slice(&self.duplex.bytes()[self.count..self.count + available]);
            self.count += available;
            out = tail;
        }
    }
}

impl Default for GasconXof {
    fn default() -> Self {
        Self::new()
    }
}

/// GASCON-HASH with a 256-bit digest.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GasconHash {
    sponge: GasconXof,
}

impl GasconHash {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self {
            sponge: GasconXof::with_iv(HASH_IV),
        }
    }
}

impl Default for GasconHash {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for GasconHash {
    const ALGORITHM: &'static str = "GASCON-HASH";

    fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    fn finalize(mut self) -> [u8; HASH_SIZE] {
        let mut output = [0u8; HASH_SIZE];
        self.sponge.squeeze(&mut output);
        output
    }
}
