//! # Hash and XOF functions
//!
//! Four fixed-output hashes share the [`Hasher`] interface: Xoodyak in hash mode, ACE-HASH
//! over sLiSCP-light-320, GASCON-HASH, and SATURNIN-Hash (the cascade MAC with a zero key).
//! Each one can be driven one-shot through [`Hasher::hash`] or incrementally with `update` and
//! `finalize`. [`XoodyakXof`] and [`GasconXof`] are extendable-output objects whose absorb and
//! squeeze calls may be interleaved.
//!
//! # Usage
//!
//! ```
//! use lwc_aead::{AceHash, Hasher};
//!
//! // One-shot hashing.
//! let digest = AceHash::hash(b"Hello, World!");
//!
//! // Incremental hashing.
//! let mut hasher = AceHash::new();
//! hasher.update(b"Hello, ");
//! hasher.update(b"World!");
//! let digest2 = hasher.finalize();
//!
//! assert_eq!(digest, digest2);
//! ```

use zeroize::Zeroize;

mod ace;
mod gascon;
mod saturnin;
mod xoodyak;

pub use ace::AceHash;
pub use gascon::{GasconHash, GasconXof};
pub use saturnin::SaturninHash;
pub use xoodyak::{XoodyakHash, XoodyakXof};

/// Digest size of every fixed-output hash in bytes.
pub const HASH_SIZE: usize = 32;

/// A fixed-output hash function with a 32-byte digest.
pub trait Hasher: Clone + Default {
    /// Algorithm name as used by the reference suite.
    const ALGORITHM: &'static str;

    /// Absorb more input.
    fn update(&mut self, data: &[u8]);

    /// Pad the remaining input and produce the digest.
    fn finalize(self) -> [u8; HASH_SIZE];

    /// Hash `input` in one call.
    fn hash(input: &[u8]) -> [u8; HASH_SIZE] {
        let mut hasher = Self::default();
        hasher.update(input);
        hasher.finalize()
    }
}

/// Input bytes waiting for a full block.
///
/// Full blocks are handed out as soon as they fill, so the final block seen by `finalize` is
/// always shorter than `N` and gets the padding.
#[derive(Clone, Zeroize)]
struct Pending<const N: usize> {
    block: [u8; N],
    len: usize,
}

impl<const N: usize> Pending<N> {
    const fn new() -> Self {
        Self {
            block: [0u8; N],
            len: 0,
        }
    }

    fn update(&mut self, mut data: &[u8], mut absorb: impl FnMut(&[u8; N])) {
        while !data.is_empty() {
            // Copy as much as we can: either all remaining input, or until the block is full.
            let available = (N - self.len).min(data.len());
            self.block[self.len..self.len + available].copy_from_slice(&data[..available]);
            self.len += available;
            data = &data[available..];

            if self.len == N {
                absorb(&self.block);
                self.len = 0;
            }
        }
    }

    fn remainder(&self) -> &[u8] {
        &self.block[..self.len]
    }
}
