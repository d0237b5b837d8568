//! Romulus-N members N1 to N3.
//!
//! A nonce-based mode over tweakable SKINNY-128 with a 16-byte rolling state. Associated data is
//! taken two blocks at a time: the first is XORed into the state, the second is loaded into the
//! tweak lane before the state is encrypted. The nonce closes the associated data. Each message
//! block then goes through the feedback function `rho` before the state is encrypted again, and
//! the tag is the feedback of the final state.
//!
//! The members differ in where the data tweak lives: TK2 of SKINNY-128-384 for N1, the upper
//! twelve bytes of TK1 for N2 (SKINNY-128-384) and N3 (SKINNY-128-256).

use super::SkinnyTweakey;
use crate::endian::xor_into;
use crate::engine::AeadFamily;
use crate::policy::{DomainRule, DoubleBlockPolicy, Framing, PhasePolicy};
use crate::primitive::{BlockCipher, Skinny128_256, Skinny128_384};
use aead::consts::{U12, U16};
use zeroize::Zeroize;

/// Largest associated data or message, in bytes: 2^23 blocks.
const DATA_LIMIT: u64 = 16 << 23;

/// Initial value of the block counter in both phases.
const COUNTER_START: u64 = 1;

/// Pairs are `8`; the closing nonce step is `0x18`, or `0x1a` after a short final block.
const AD_DOMAIN: DomainRule = DomainRule {
    every: 0x08,
    partial: 0x02,
    after: 0x18,
    ..DomainRule::NONE
};

/// Message blocks: `4`, then `0x14` for a full final block or `0x15` for a short one.
const MESSAGE: PhasePolicy = PhasePolicy::new(16, Framing::LastMayBeFull).with_domain(DomainRule {
    every: 0x04,
    last: 0x10,
    partial: 0x01,
    ..DomainRule::NONE
});

/// Tweakey layout of one member.
trait Member {
    type Cipher: BlockCipher<Block = [u8; 16]>;

    /// Bytes of associated data carried by the tweak of each pair.
    const TWEAK_LEN: usize;

    /// Member bits of the domain byte.
    const PREFIX: u8;

    /// Associated data framing.
    const AD: DoubleBlockPolicy =
        DoubleBlockPolicy::new(16, Self::TWEAK_LEN).with_domain(AD_DOMAIN);

    /// Key the cipher with `tweak` (zero-padded) in the tweak lane; counter and domain are zero.
    fn schedule(key: &[u8; 16], tweak: &[u8]) -> Self::Cipher;

    /// Replace the tweak, keeping the counter and domain.
    fn set_tweak(cipher: &mut Self::Cipher, key: &[u8; 16], tweak: &[u8]);

    /// Store the counter in TK1.
    fn set_counter(cipher: &mut Self::Cipher, lfsr: u64);

    /// Store the domain byte in TK1.
    fn set_domain(cipher: &mut Self::Cipher, domain: u8);

    /// Clock the counter once.
    fn next_counter(lfsr: u64) -> u64;
}

impl Member for RomulusN1 {
    type Cipher = Skinny128_384;
    const TWEAK_LEN: usize = 16;
    const PREFIX: u8 = 0x00;

    fn schedule(key: &[u8; 16], tweak: &[u8]) -> Skinny128_384 {
        let mut tweakey = [0u8; 48];
        tweakey[16..16 + tweak.len()].copy_from_slice(tweak);
        tweakey[32..].copy_from_slice(key);
        let cipher = Skinny128_384::new(&tweakey);
        tweakey.zeroize();
        cipher
    }

    // TK2 is folded into the round keys, so a new tweak means a new schedule.
    fn set_tweak(cipher: &mut Skinny128_384, key: &[u8; 16], tweak: &[u8]) {
        let tk1 = *cipher.tk1_mut();
        *cipher = Self::schedule(key, tweak);
        *cipher.tk1_mut() = tk1;
    }

    fn set_counter(cipher: &mut Skinny128_384, lfsr: u64) {
        cipher.tk1_mut()[..7].copy_from_slice(&lfsr.to_le_bytes()[..7]);
    }

    fn set_domain(cipher: &mut Skinny128_384, domain: u8) {
        cipher.tk1_mut()[7] = domain;
    }

    fn next_counter(lfsr: u64) -> u64 {
        ((lfsr << 1) & 0x00ff_ffff_ffff_ffff) ^ (0u64.wrapping_sub((lfsr >> 55) & 1) & 0x95)
    }
}

impl Member for RomulusN2 {
    type Cipher = Skinny128_384;
    const TWEAK_LEN: usize = 12;
    const PREFIX: u8 = 0x40;

    fn schedule(key: &[u8; 16], tweak: &[u8]) -> Skinny128_384 {
        let mut tweakey = [0u8; 48];
        tweakey[4..4 + tweak.len()].copy_from_slice(tweak);
        tweakey[16..32].copy_from_slice(key);
        // High half of the counter, fixed.
        tweakey[32] = 0x01;
        let cipher = Skinny128_384::new(&tweakey);
        tweakey.zeroize();
        cipher
    }

    fn set_tweak(cipher: &mut Skinny128_384, _key: &[u8; 16], tweak: &[u8]) {
        cipher.tk1_mut()[4..].copy_from_slice(tweak);
    }

    fn set_counter(cipher: &mut Skinny128_384, lfsr: u64) {
        cipher.tk1_mut()[..3].copy_from_slice(&lfsr.to_le_bytes()[..3]);
    }

    fn set_domain(cipher: &mut Skinny128_384, domain: u8) {
        cipher.tk1_mut()[3] = domain;
    }

    fn next_counter(lfsr: u64) -> u64 {
        <Skinny128_256 as SkinnyTweakey>::next_counter(lfsr)
    }
}

impl Member for RomulusN3 {
    type Cipher = Skinny128_256;
    const TWEAK_LEN: usize = 12;
    const PREFIX: u8 = 0x80;

    fn schedule(key: &[u8; 16], tweak: &[u8]) -> Skinny128_256 {
        let mut tweakey = [0u8; 32];
        tweakey[4..4 + tweak.len()].copy_from_slice(tweak);
        tweakey[16..].copy_from_slice(key);
        let cipher = Skinny128_256::new(&tweakey);
        tweakey.zeroize();
        cipher
    }

    fn set_tweak(cipher: &mut Skinny128_256, _key: &[u8; 16], tweak: &[u8]) {
        cipher.tk1_mut()[4..].copy_from_slice(tweak);
    }

    fn set_counter(cipher: &mut Skinny128_256, lfsr: u64) {
        cipher.tk1_mut()[..3].copy_from_slice(&lfsr.to_le_bytes()[..3]);
    }

    fn set_domain(cipher: &mut Skinny128_256, domain: u8) {
        cipher.tk1_mut()[3] = domain;
    }

    fn next_counter(lfsr: u64) -> u64 {
        <Skinny128_256 as SkinnyTweakey>::next_counter(lfsr)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Feedback applied to the state to produce keystream and the tag.
#[inline(always)]
fn gamma(s: u8) -> u8 {
    (s >> 1) ^ (s & 0x80) ^ (s << 7)
}

/// Run `chunk` through the state feedback, leaving plaintext in the state.
fn rho(state: &mut [u8; 16], chunk: &mut [u8], direction: Direction) {
    for (s, byte) in state.iter_mut().zip(chunk.iter_mut()) {
        let keystream = gamma(*s);
        match direction {
            Direction::Encrypt => {
                *s ^= *byte;
                *byte ^= keystream;
            }
            Direction::Decrypt => {
                *byte ^= keystream;
                *s ^= *byte;
            }
        }
    }
}

fn absorb_ad<M: Member>(key: &[u8; 16], nonce: &[u8], ad: &[u8], state: &mut [u8; 16]) {
    let mut cipher = M::schedule(key, &[]);
    let mut lfsr = COUNTER_START;
    let mut closing = M::AD.domain.after;

    for pair in M::AD.pairs(ad.len()) {
        lfsr = M::next_counter(lfsr);
        xor_into(state, &ad[pair.state.range()]);
        if pair.state.partial {
            state[15] ^= pair.state.len as u8;
        }

        if let Some(plan) = pair.tweak {
            let mut tweak = [0u8; 16];
            tweak[..plan.len].copy_from_slice(&ad[plan.range()]);
            if plan.partial {
                tweak[M::TWEAK_LEN - 1] = plan.len as u8;
            }
            M::set_tweak(&mut cipher, key, &tweak[..M::TWEAK_LEN]);
            M::set_counter(&mut cipher, lfsr);
            M::set_domain(&mut cipher, M::PREFIX | M::AD.domain.for_block(&pair.state));
            cipher.encrypt_block(state);
            tweak.zeroize();
            lfsr = M::next_counter(lfsr);
        }

        closing = M::AD.closing_domain(pair.last_block());
    }

    M::set_tweak(&mut cipher, key, nonce);
    M::set_counter(&mut cipher, lfsr);
    M::set_domain(&mut cipher, M::PREFIX | closing);
    cipher.encrypt_block(state);
}

fn process<M: Member>(
    key: &[u8; 16],
    nonce: &[u8],
    ad: &[u8],
    buffer: &mut [u8],
    direction: Direction,
) -> [u8; 16] {
    let mut state = [0u8; 16];
    absorb_ad::<M>(key, nonce, ad, &mut state);

    let mut cipher = M::schedule(key, nonce);
    let mut lfsr = COUNTER_START;
    for plan in MESSAGE.blocks(buffer.len()) {
        rho(&mut state, &mut buffer[plan.range()], direction);
        if plan.partial {
            state[15] ^= plan.len as u8;
        }
        lfsr = M::next_counter(lfsr);
        M::set_counter(&mut cipher, lfsr);
        M::set_domain(&mut cipher, M::PREFIX | MESSAGE.domain.for_block(&plan));
        cipher.encrypt_block(&mut state);
    }

    let tag = state.map(gamma);
    state.zeroize();
    tag
}

macro_rules! romulus_member {
    (
        $(#[$doc:meta])*
        $name:ident, $algorithm:literal, nonce: $nonce:literal / $nonce_size:ty
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl AeadFamily for $name {
            const ALGORITHM: &'static str = $algorithm;
            type Key = [u8; 16];
            type Nonce = [u8; $nonce];
            type Tag = [u8; 16];
            type KeySize = U16;
            type NonceSize = $nonce_size;
            type TagSize = U16;

            const MAX_AD_LEN: u64 = DATA_LIMIT;
            const MAX_MESSAGE_LEN: u64 = DATA_LIMIT;

            fn seal(
                key: &[u8; 16],
                nonce: &[u8; $nonce],
                ad: &[u8],
                buffer: &mut [u8],
            ) -> [u8; 16] {
                process::<$name>(key, nonce, ad, buffer, Direction::Encrypt)
            }

            fn unseal(
                key: &[u8; 16],
                nonce: &[u8; $nonce],
                ad: &[u8],
                buffer: &mut [u8],
            ) -> [u8; 16] {
                process::<$name>(key, nonce, ad, buffer, Direction::Decrypt)
            }
        }
    };
}

romulus_member!(
    /// Romulus-N1: SKINNY-128-384 with the data tweak in TK2, 128-bit nonce. The primary member.
    RomulusN1, "Romulus-N1", nonce: 16 / U16
);

romulus_member!(
    /// Romulus-N2: SKINNY-128-384 with the data tweak in TK1, 96-bit nonce.
    RomulusN2, "Romulus-N2", nonce: 12 / U12
);

romulus_member!(
    /// Romulus-N3: SKINNY-128-256 with the data tweak in TK1, 96-bit nonce.
    RomulusN3, "Romulus-N3", nonce: 12 / U12
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_cycle() {
        assert_eq!(RomulusN1::next_counter(1), 2);
        assert_eq!(RomulusN1::next_counter(1 << 55), 0x95);
        assert_eq!(RomulusN1::next_counter((1 << 55) | 1), 0x97);
        assert_eq!(RomulusN2::next_counter(1 << 23), 0x1b);
        assert_eq!(RomulusN3::next_counter(0x40_0000), 0x80_0000);
    }

    #[test]
    fn tweak_layout() {
        let nonce = [0xaau8; 12];
        let mut cipher = RomulusN3::schedule(&[0; 16], &nonce);
        RomulusN3::set_counter(&mut cipher, 0x0012_3456);
        RomulusN3::set_domain(&mut cipher, RomulusN3::PREFIX | 0x15);
        let tk1 = *cipher.tk1_mut();
        assert_eq!(&tk1[..4], &[0x56, 0x34, 0x12, 0x95]);
        assert_eq!(&tk1[4..], &nonce);

        let mut cipher = RomulusN1::schedule(&[0; 16], &[0xbb; 16]);
        RomulusN1::set_counter(&mut cipher, 0x00aa_0000_0000_0001);
        RomulusN1::set_domain(&mut cipher, 0x1a);
        assert_eq!(cipher.tk1_mut(), &[1, 0, 0, 0, 0, 0, 0xaa, 0x1a, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn init_is_idempotent() {
        let key = [0x3cu8; 16];
        let nonce = [0xa5u8; 16];
        let mut first = RomulusN1::schedule(&key, &nonce);
        let mut second = RomulusN1::schedule(&key, &nonce);
        assert_eq!(first.tk1_mut(), second.tk1_mut());
        let (mut a, mut b) = ([0x11u8; 16], [0x11u8; 16]);
        first.encrypt_block(&mut a);
        second.encrypt_block(&mut b);
        assert_eq!(a, b);

        let mut first = RomulusN2::schedule(&key, &nonce[..12]);
        let mut second = RomulusN2::schedule(&key, &nonce[..12]);
        assert_eq!(first.tk1_mut(), second.tk1_mut());
        let (mut a, mut b) = ([0x22u8; 16], [0x22u8; 16]);
        first.encrypt_block(&mut a);
        second.encrypt_block(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn set_tweak_matches_fresh_schedule() {
        let key = [0x0fu8; 16];
        let mut rekeyed = RomulusN1::schedule(&key, &[]);
        RomulusN1::set_counter(&mut rekeyed, 0x1234);
        RomulusN1::set_tweak(&mut rekeyed, &key, &[0x77; 16]);

        let mut fresh = RomulusN1::schedule(&key, &[0x77; 16]);
        RomulusN1::set_counter(&mut fresh, 0x1234);

        let (mut a, mut b) = ([0u8; 16], [0u8; 16]);
        rekeyed.encrypt_block(&mut a);
        fresh.encrypt_block(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn rho_inverts() {
        let start = [0x5au8; 16];
        let mut enc_state = start;
        let mut dec_state = start;
        let mut block = *b"rho feedback!";
        rho(&mut enc_state, &mut block, Direction::Encrypt);
        assert_ne!(&block, b"rho feedback!");
        rho(&mut dec_state, &mut block, Direction::Decrypt);
        assert_eq!(&block, b"rho feedback!");
        assert_eq!(enc_state, dec_state);
    }

    #[test]
    fn members_are_separated() {
        let key = [0x42u8; 16];
        let nonce = [0x24u8; 12];
        let n2 = RomulusN2::seal(&key, &nonce, b"ad", &mut []);
        let n3 = RomulusN3::seal(&key, &nonce, b"ad", &mut []);
        assert_ne!(n2, n3);
    }

    #[test]
    fn full_and_short_last_block_differ() {
        let key = [1u8; 16];
        let nonce = [2u8; 16];
        let mut full = [0u8; 16];
        let mut short = [0u8; 15];
        let tag_full = RomulusN1::seal(&key, &nonce, b"", &mut full);
        let tag_short = RomulusN1::seal(&key, &nonce, b"", &mut short);
        assert_ne!(tag_full, tag_short);
        assert_eq!(&full[..15], &short);
    }
}
