//! ACE authenticated encryption over sLiSCP-light-320.
//!
//! Key and nonce are interleaved in canonical order, swapped into the rate-contiguous layout the
//! permutation works on, and each 8-byte key half is absorbed with its own permutation both
//! before the associated data and after the message. Domain bits in the last state byte tag
//! every associated data block (`0x01`) and every message block (`0x02`).

use crate::engine::{AeadFamily, Data, Duplex, DuplexPhase};
use crate::policy::{DomainRule, Framing, Padding, PhasePolicy};
use crate::primitive::{Permutation, SliscpLight320};
use aead::consts::U16;

/// ACE rate in bytes.
pub(crate) const RATE: usize = 8;

const fn phase(domain: u8) -> PhasePolicy {
    PhasePolicy::new(RATE, Framing::PadAlways)
        .with_padding(Padding::last(0x80))
        .with_domain(DomainRule {
            every: domain,
            ..DomainRule::NONE
        })
}

const AD: DuplexPhase =
    DuplexPhase::absorb_then_permute(phase(0x01).skipping_empty(), SliscpLight320::ROUNDS);

const MESSAGE: DuplexPhase = DuplexPhase::absorb_then_permute(phase(0x02), SliscpLight320::ROUNDS);

fn absorb_key(duplex: &mut Duplex<SliscpLight320>, key: &[u8; 16]) {
    for half in key.chunks_exact(RATE) {
        duplex.xor_at(0, half);
        duplex.permute(SliscpLight320::ROUNDS);
    }
}

fn initialize(key: &[u8; 16], nonce: &[u8; 16]) -> Duplex<SliscpLight320> {
    let mut duplex = Duplex::<SliscpLight320>::new();
    let state = duplex.bytes_mut();
    state[..8].copy_from_slice(&key[..8]);
    state[8..16].copy_from_slice(&nonce[..8]);
    state[16..24].copy_from_slice(&key[8..]);
    state[32..].copy_from_slice(&nonce[8..]);
    duplex.state_mut().swap();

    duplex.permute(SliscpLight320::ROUNDS);
    absorb_key(&mut duplex, key);
    duplex
}

fn process(key: &[u8; 16], nonce: &[u8; 16], ad: &[u8], data: Data<'_>) -> [u8; 16] {
    let mut duplex = initialize(key, nonce);
    duplex.run(&AD, Data::Absorb(ad));
    duplex.run(&MESSAGE, data);

    absorb_key(&mut duplex, key);
    duplex.state_mut().swap();

    let state = duplex.bytes();
    let mut tag = [0u8; 16];
    tag[..8].copy_from_slice(&state[..8]);
    tag[8..].copy_from_slice(&state[16..24]);
    tag
}

/// ACE authenticated encryption.
#[derive(Debug, Clone, Copy)]
pub struct Ace;

impl AeadFamily for Ace {
    const ALGORITHM: &'static str = "ACE";
    type Key = [u8; 16];
    type Nonce = [u8; 16];
    type Tag = [u8; 16];
    type KeySize = U16;
    type NonceSize = U16;
    type TagSize = U16;

    fn seal(key: &[u8; 16], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        process(key, nonce, ad, Data::Encrypt(buffer))
    }

    fn unseal(key: &[u8; 16], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        process(key, nonce, ad, Data::Decrypt(buffer))
    }
}
