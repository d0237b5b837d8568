//! SATURNIN-Hash: the cascade over 32-byte blocks, starting from an all-zero key.

use super::{HASH_SIZE, Hasher, Pending};
use crate::aead_impl::saturnin_cascade;
use crate::primitive::{Saturnin, SaturninDomain};
use zeroize::{Zeroize, ZeroizeOnDrop};

const BLOCK: usize = 32;

/// SATURNIN-Hash with a 256-bit digest.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SaturninHash {
    chain: [u8; HASH_SIZE],
    pending: Pending<BLOCK>,
}

impl SaturninHash {
    /// Create a new hasher.
    pub const fn new() -> Self {
        Self {
            chain: [0u8; HASH_SIZE],
            pending: Pending::new(),
        }
    }
}

impl Default for SaturninHash {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for SaturninHash {
    const ALGORITHM: &'static str = "SATURNIN-Hash";

    fn update(&mut self, data: &[u8]) {
        self.pending.update(data, |block| {
            Saturnin::encrypt_xor(SaturninDomain::Hash, block, &mut self.chain);
        });
    }

    fn finalize(mut self) -> [u8; HASH_SIZE] {
        saturnin_cascade(
            &mut self.chain,
            self.pending.remainder(),
            SaturninDomain::Hash,
            SaturninDomain::HashLast,
        );
        self.chain
    }
}
