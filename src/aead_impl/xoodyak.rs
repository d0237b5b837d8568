//! Xoodyak in keyed mode.
//!
//! Every call into the Cyclist object permutes first, then mixes in its block. The nonce and the
//! associated data are each one absorb call (an empty associated data still takes one padded
//! block), the message is squeezed 24 bytes at a time, and the tag is squeezed last.

use crate::engine::{AeadFamily, Data, Duplex, DuplexPhase};
use crate::policy::{DomainRule, Framing, Padding, PhasePolicy};
use crate::primitive::{Permutation, Xoodoo};
use aead::consts::U16;

/// Rate of absorb calls.
pub(crate) const ABSORB_RATE: usize = 44;

/// Rate of keyed squeeze calls.
pub(crate) const SQUEEZE_RATE: usize = 24;

/// Domain byte of the first block of an absorb call.
const ABSORB_DOMAIN: u8 = 0x03;

/// Domain byte of the first message block.
const CRYPT_DOMAIN: u8 = 0x80;

/// Domain byte of the tag squeeze.
const SQUEEZE_DOMAIN: u8 = 0x40;

const ABSORB: DuplexPhase = DuplexPhase::permute_then_absorb(
    PhasePolicy::new(ABSORB_RATE, Framing::LastMayBeFull)
        .with_padding(Padding::every(0x01))
        .with_domain(DomainRule {
            entry: ABSORB_DOMAIN,
            ..DomainRule::NONE
        }),
    Xoodoo::ROUNDS,
);

const CRYPT: DuplexPhase = DuplexPhase::permute_then_absorb(
    PhasePolicy::new(SQUEEZE_RATE, Framing::LastMayBeFull)
        .with_padding(Padding::every(0x01))
        .with_domain(DomainRule {
            entry: CRYPT_DOMAIN,
            ..DomainRule::NONE
        }),
    Xoodoo::ROUNDS,
)
.injecting_before_permute();

fn initialize(key: &[u8; 16]) -> Duplex<Xoodoo> {
    let mut duplex = Duplex::new();
    let state = duplex.bytes_mut();
    state[..16].copy_from_slice(key);
    state[17] = 0x01;
    duplex.mix_domain(0x02);
    duplex
}

fn process(key: &[u8; 16], nonce: &[u8; 16], ad: &[u8], data: Data<'_>) -> [u8; 16] {
    let mut duplex = initialize(key);
    duplex.run(&ABSORB, Data::Absorb(nonce));
    duplex.run(&ABSORB, Data::Absorb(ad));
    duplex.run(&CRYPT, data);

    duplex.mix_domain(SQUEEZE_DOMAIN);
    duplex.permute(Xoodoo::ROUNDS);

    let mut tag = [0u8; 16];
    tag.copy_from_slice(&duplex.bytes()[..16]);
    tag
}

/// Xoodyak authenticated encryption.
#[derive(Debug, Clone, Copy)]
pub struct Xoodyak;

impl AeadFamily for Xoodyak {
    const ALGORITHM: &'static str = "Xoodyak";
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_layout() {
        let duplex = initialize(&[0xffu8; 16]);
        let state = duplex.bytes();
        assert_eq!(&state[..16], &[0xffu8; 16]);
        assert_eq!(state[16], 0x00);
        assert_eq!(state[17], 0x01);
        assert_eq!(state[47], 0x02);
        assert!(state[18..47].iter().all(|&b| b == 0));
    }

    #[test]
    fn empty_ad_still_absorbs_a_block() {
        // An empty associated data call is padded and permuted, so it is not a no-op.
        let key = [7u8; 16];
        let nonce = [9u8; 16];

        let mut with_call = initialize(&key);
        with_call.run(&ABSORB, Data::Absorb(&nonce));
        let before = with_call.clone();
        with_call.run(&ABSORB, Data::Absorb(&[]));
        assert_ne!(before.bytes(), with_call.bytes());
    }
}
