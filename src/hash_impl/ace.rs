//! ACE-HASH: an 8-byte-rate sponge over sLiSCP-light-320.

use super::{HASH_SIZE, Hasher, Pending};
use crate::aead_impl::ACE_RATE;
use crate::engine::{Data, Duplex, DuplexPhase};
use crate::policy::{Framing, Padding, PhasePolicy};
use crate::primitive::{Permutation, SliscpLight320};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// State after loading the hash parameters (`0x80, 0x40, 0x40` at byte 8) and permuting once.
const IV: [u8; 40] = [
    0xb9, 0x7d, 0xda, 0x3f, 0x66, 0x2c, 0xd1, 0xa6, 0x65, 0xd1, 0x80, 0xd6, 0x49, 0xdc, 0xa1, 0x8c,
    0x0c, 0x5f, 0x0e, 0xca, 0x70, 0x37, 0x58, 0x75, 0x29, 0x7d, 0xb0, 0xb0, 0x72, 0x73, 0xce, 0xa8,
    0x99, 0x71, 0xde, 0x8a, 0x9a, 0x65, 0x72, 0x24,
];

/// The final block: `10*` padding, then one permutation.
const FINAL: DuplexPhase = DuplexPhase::absorb_then_permute(
    PhasePolicy::new(ACE_RATE, Framing::PadAlways).with_padding(Padding::last(0x80)),
    SliscpLight320::ROUNDS,
);

/// ACE-HASH with a 256-bit digest.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AceHash {
    duplex: Duplex<SliscpLight320>,
    pending: Pending<ACE_RATE>,
}

impl AceHash {
    /// Create a new hasher.
    pub fn new() -> Self {
        let mut duplex = Duplex::new();
        duplex.bytes_mut().copy_from_slice(&IV);
        Self {
            duplex,
            pending: Pending::new(),
        }
    }
}

impl Default for AceHash {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for AceHash {
    const ALGORITHM: &'static str = "ACE-HASH";

    fn update(&mut self, data: &[u8]) {
        self.pending.update(data, |block| {
            self.duplex.xor_at(0, block);
            self.duplex.permute(SliscpLight320::ROUNDS);
        });
    }

    fn finalize(mut self) -> [u8; HASH_SIZE] {
        self.duplex.run(&FINAL, Data::Absorb(self.pending.remainder()));

        let mut output = [0u8; HASH_SIZE];
        for (i, chunk) in output.chunks_exact_mut(ACE_RATE).enumerate() {
            if i > 0 {
                self.duplex.permute(SliscpLight320::ROUNDS);
            }
            chunk.copy_from_slice(&self.duplex.bytes()[..ACE_RATE]);
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iv_derivation() {
        let mut duplex = Duplex::<SliscpLight320>::new();
        duplex.bytes_mut()[8..11].copy_from_slice(&[0x80, 0x40, 0x40]);
        duplex.state_mut().swap();
        duplex.permute(SliscpLight320::ROUNDS);
        assert_eq!(duplex.bytes(), &IV[..]);
    }
}
