//! GASCON-128, GASCON-128a and GASCON-80pq.
//!
//! The state is `IV || key || nonce`, permuted once with the key folded back into its tail. The
//! associated data (only when present) and the message are absorbed with `10*` padding, and a
//! separator bit in the last state byte always splits the two phases. The final message block
//! is not permuted; the key is XORed into the capacity before the closing permutation instead.

use crate::engine::{AeadFamily, Data, Duplex, DuplexPhase};
use crate::policy::{DomainRule, Framing, Padding, PhasePolicy};
use crate::primitive::{Gascon, Permutation};
use aead::consts::{U16, U20};

/// Nonce length shared by all three variants.
const NONCE_LEN: usize = 16;

/// Parameters of one GASCON variant.
struct Variant {
    /// Little-endian IV bytes at the front of the state.
    iv: &'static [u8],
    /// Associated data phase.
    ad: DuplexPhase,
    /// Message phase.
    message: DuplexPhase,
    /// Offset of the key XORed in before the final permutation.
    finalize_offset: usize,
}

const fn ad_phase(rate: usize, rounds: usize) -> DuplexPhase {
    DuplexPhase::absorb_then_permute(
        PhasePolicy::new(rate, Framing::PadAlways)
            .skipping_empty()
            .with_padding(Padding::last(0x80))
            .with_domain(DomainRule {
                after: 0x01,
                ..DomainRule::NONE
            }),
        rounds,
    )
}

const fn message_phase(rate: usize, rounds: usize) -> DuplexPhase {
    DuplexPhase::absorb_then_permute(
        PhasePolicy::new(rate, Framing::PadAlways).with_padding(Padding::last(0x80)),
        rounds,
    )
    .holding_last()
}

const GASCON_128: Variant = Variant {
    iv: &0x8040_0c06_0000_0000u64.to_le_bytes(),
    ad: ad_phase(8, 6),
    message: message_phase(8, 6),
    finalize_offset: 8,
};

const GASCON_128A: Variant = Variant {
    iv: &0x8080_0c08_0000_0000u64.to_le_bytes(),
    ad: ad_phase(16, 8),
    message: message_phase(16, 8),
    finalize_offset: 16,
};

const GASCON_80PQ: Variant = Variant {
    iv: &0xa040_0c06u32.to_le_bytes(),
    ad: ad_phase(8, 6),
    message: message_phase(8, 6),
    finalize_offset: 8,
};

impl Variant {
    fn initialize(&self, key: &[u8], nonce: &[u8; NONCE_LEN]) -> Duplex<Gascon> {
        let mut duplex = Duplex::new();
        let state = duplex.bytes_mut();
        let key_end = self.iv.len() + key.len();
        state[..self.iv.len()].copy_from_slice(self.iv);
        state[self.iv.len()..key_end].copy_from_slice(key);
        state[Gascon::WIDTH - NONCE_LEN..].copy_from_slice(nonce);

        duplex.permute(Gascon::ROUNDS);
        duplex.xor_at(Gascon::WIDTH - key.len(), key);
        duplex
    }

    fn process(&self, key: &[u8], nonce: &[u8; NONCE_LEN], ad: &[u8], data: Data<'_>) -> [u8; 16] {
        let mut duplex = self.initialize(key, nonce);
        duplex.run(&self.ad, Data::Absorb(ad));
        duplex.run(&self.message, data);

        duplex.xor_at(self.finalize_offset, key);
        duplex.permute(Gascon::ROUNDS);

        let mut tag = [0u8; 16];
        tag.copy_from_slice(&duplex.bytes()[Gascon::WIDTH - 16..]);
        crate::endian::xor_into(&mut tag, &key[key.len() - 16..]);
        tag
    }
}

/// GASCON-128: 16-byte key, 8-byte rate.
#[derive(Debug, Clone, Copy)]
pub struct Gascon128;

impl AeadFamily for Gascon128 {
    const ALGORITHM: &'static str = "GASCON-128";
    type Key = [u8; 16];
    type Nonce = [u8; 16];
    type Tag = [u8; 16];
    type KeySize = U16;
    type NonceSize = U16;
    type TagSize = U16;

    fn seal(key: &[u8; 16], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        GASCON_128.process(key, nonce, ad, Data::Encrypt(buffer))
    }

    fn unseal(key: &[u8; 16], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        GASCON_128.process(key, nonce, ad, Data::Decrypt(buffer))
    }
}

/// GASCON-128a: 16-byte key, 16-byte rate, 8-round inner permutation.
#[derive(Debug, Clone, Copy)]
pub struct Gascon128a;

impl AeadFamily for Gascon128a {
    const ALGORITHM: &'static str = "GASCON-128a";
    type Key = [u8; 16];
    type Nonce = [u8; 16];
    type Tag = [u8; 16];
    type KeySize = U16;
    type NonceSize = U16;
    type TagSize = U16;

    fn seal(key: &[u8; 16], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        GASCON_128A.process(key, nonce, ad, Data::Encrypt(buffer))
    }

    fn unseal(key: &[u8; 16], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        GASCON_128A.process(key, nonce, ad, Data::Decrypt(buffer))
    }
}

/// GASCON-80pq: 20-byte key, 8-byte rate.
#[derive(Debug, Clone, Copy)]
pub struct Gascon80pq;

impl AeadFamily for Gascon80pq {
    const ALGORITHM: &'static str = "GASCON-80pq";
    type Key = [u8; 20];
    type Nonce = [u8; 16];
    type Tag = [u8; 16];
    type KeySize = U20;
    type NonceSize = U16;
    type TagSize = U16;

    fn seal(key: &[u8; 20], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        GASCON_80PQ.process(key, nonce, ad, Data::Encrypt(buffer))
    }

    fn unseal(key: &[u8; 20], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        GASCON_80PQ.process(key, nonce, ad, Data::Decrypt(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let key = [0x3cu8; 16];
        let nonce = [0xa5u8; 16];
        let first = GASCON_128.initialize(&key, &nonce);
        let second = GASCON_128.initialize(&key, &nonce);
        assert_eq!(first.bytes(), second.bytes());
    }

    #[test]
    fn iv_layout() {
        assert_eq!(GASCON_128.iv, &[0x00, 0x00, 0x00, 0x00, 0x06, 0x0c, 0x40, 0x80]);
        assert_eq!(GASCON_80PQ.iv, &[0x06, 0x0c, 0x40, 0xa0]);
    }

    #[test]
    fn variants_differ() {
        let mut a = [0u8; 20];
        let mut b = [0u8; 20];
        let tag_128 = Gascon128::seal(&[0; 16], &[0; 16], b"", &mut a);
        let tag_128a = Gascon128a::seal(&[0; 16], &[0; 16], b"", &mut b);
        assert_ne!(tag_128, tag_128a);
        assert_ne!(a, b);
    }
}
