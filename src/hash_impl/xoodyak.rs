//! Xoodyak in hash mode.
//!
//! The Cyclist object absorbs lazily: a full 16-byte block is only permuted once more input
//! arrives, so the last block of an absorb call may be full and its padding lands just past it.
//! The first block after (re)starting absorption carries domain byte `0x01`.

use super::{HASH_SIZE, Hasher};
use crate::engine::Duplex;
use crate::primitive::{Permutation, Xoodoo};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Hash-mode rate in bytes.
const RATE: usize = 16;

/// Padding bit after each block.
const PAD: u8 = 0x01;

/// Domain byte of the first block of an absorb call.
const ABSORB_DOMAIN: u8 = 0x01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing permuted since the last restart.
    Fresh,
    Absorbing,
    Squeezing,
}

/// Xoodyak hash object with interleavable absorb and squeeze calls.
///
/// ```
/// use lwc_aead::XoodyakXof;
///
/// let mut xof = XoodyakXof::new();
/// xof.absorb(b"abc");
/// let mut first = [0u8; 10];
/// let mut rest = [0u8; 22];
/// xof.squeeze(&mut first);
/// xof.squeeze(&mut rest);
///
/// let mut whole = [0u8; 32];
/// let mut again = XoodyakXof::new();
/// again.absorb(b"abc");
/// again.squeeze(&mut whole);
/// assert_eq!(&whole[..10], &first);
/// assert_eq!(&whole[10..], &rest);
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XoodyakXof {
    duplex: Duplex<Xoodoo>,
    /// Bytes of the current rate block already absorbed or squeezed.
    count: usize,
    #[zeroize(skip)]
    phase: Phase,
}

impl XoodyakXof {
    /// Create a fresh hash object.
    pub fn new() -> Self {
        Self {
            duplex: Duplex::new(),
            count: 0,
            phase: Phase::Fresh,
        }
    }

    fn pending_domain(&self) -> u8 {
        if self.phase == Phase::Fresh { ABSORB_DOMAIN } else { 0 }
    }

    /// Close the current block with padding and the pending domain byte.
    fn close_block(&mut self) {
        self.duplex.xor_at(self.count, &[PAD]);
        self.duplex.mix_domain(self.pending_domain());
        self.duplex.permute(Xoodoo::ROUNDS);
        self.count = 0;
    }

    /// Absorb more input. Absorbing after a squeeze starts a new absorb call.
    pub fn absorb(&mut self, mut data: &[u8]) {
        if self.phase == Phase::Squeezing {
            self.duplex.permute(Xoodoo::ROUNDS);
            self.phase = Phase::Fresh;
            self.count = 0;
        }

        while !data.is_empty() {
            if self.count == RATE {
                self.close_block();
                self.phase = Phase::Absorbing;
            }
            let available = (RATE - self.count).min(data.len());
            self.duplex.xor_at(self.count, &data[..available]);
            self.count += available;
            data = &data[available..];
        }
    }

    /// Fill `out` with output. Consecutive squeezes continue the same stream.
    pub fn squeeze(&mut self, mut out: &mut [u8]) {
        if self.phase != Phase::Squeezing {
            self.close_block();
            self.phase = Phase::Squeezing;
        }

        while !out.is_empty() {
            if self.count == RATE {
                self.duplex.xor_at(0, &[PAD]);
                self.duplex.permute(Xoodoo::ROUNDS);
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

impl Default for XoodyakXof {
    fn default() -> Self {
        Self::new()
    }
}

/// Xoodyak hash with a 256-bit digest.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct XoodyakHash {
    xof: XoodyakXof,
}

impl XoodyakHash {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hasher for XoodyakHash {
    const ALGORITHM: &'static str = "Xoodyak";

    fn update(&mut self, data: &[u8]) {
        self.xof.absorb(data);
    }

    fn finalize(mut self) -> [u8; HASH_SIZE] {
        let mut output = [0u8; HASH_SIZE];
        self.xof.squeeze(&mut output);
        output
    }
}
