//! SKINNY-AEAD members M1 to M6.
//!
//! A checksum mode over tweakable SKINNY-128. The nonce and key sit in the fixed tweakey lanes;
//! the TK1 lane carries a block counter (an LFSR) and a domain byte that change for every block.
//! Full message blocks go through the cipher directly while the plaintext is summed; a trailing
//! partial block is XORed with an encrypted zero block. The summed plaintext is encrypted into
//! the tag, and the associated data is hashed on top of it afterwards.

use crate::endian::{Endian, xor_into};
use crate::engine::AeadFamily;
use crate::policy::{DomainRule, Framing, Padding, PhasePolicy};
use crate::primitive::{BlockCipher, BlockDecrypt, Skinny128_256, Skinny128_384};
use aead::consts::{U8, U12, U16};
use zeroize::Zeroize;

/// SKINNY-128 with a TK1 lane that holds a counter and a domain byte.
pub trait SkinnyTweakey: BlockDecrypt<Block = [u8; 16]> {
    /// Longest input, in bytes, before the counter would repeat.
    const MAX_INPUT_LEN: u64;

    /// Key the cipher with `nonce` and `key`; TK1 starts with a zero counter and domain.
    fn with_nonce(key: &[u8; 16], nonce: &[u8]) -> Self;

    /// Store the counter in TK1.
    fn set_counter(&mut self, lfsr: u64);

    /// Store the domain byte in TK1.
    fn set_domain(&mut self, domain: u8);

    /// Clock the counter once.
    fn next_counter(lfsr: u64) -> u64;
}

/// SKINNY-128-384: TK2 holds the zero-padded nonce, TK3 the key, TK1 a 64-bit LFSR.
impl SkinnyTweakey for Skinny128_384 {
    const MAX_INPUT_LEN: u64 = u64::MAX;

    fn with_nonce(key: &[u8; 16], nonce: &[u8]) -> Self {
        let mut tweakey = [0u8; 48];
        tweakey[16..16 + nonce.len()].copy_from_slice(nonce);
        tweakey[32..].copy_from_slice(key);
        let cipher = Self::new(&tweakey);
        tweakey.zeroize();
        cipher
    }

    fn set_counter(&mut self, lfsr: u64) {
        Endian::Little.store_u64(lfsr, &mut self.tk1_mut()[..8]);
    }

    fn set_domain(&mut self, domain: u8) {
        self.tk1_mut()[15] = domain;
    }

    fn next_counter(lfsr: u64) -> u64 {
        (lfsr << 1) ^ (0u64.wrapping_sub(lfsr >> 63) & 0x1b)
    }
}

/// SKINNY-128-256: TK1 holds a 24-bit LFSR, the domain byte and the right-aligned nonce.
impl SkinnyTweakey for Skinny128_256 {
    const MAX_INPUT_LEN: u64 = 16 * ((1 << 24) - 2);

    fn with_nonce(key: &[u8; 16], nonce: &[u8]) -> Self {
        let mut tweakey = [0u8; 32];
        tweakey[16 - nonce.len()..16].copy_from_slice(nonce);
        tweakey[16..].copy_from_slice(key);
        let cipher = Self::new(&tweakey);
        tweakey.zeroize();
        cipher
    }

    fn set_counter(&mut self, lfsr: u64) {
        let bytes = (lfsr as u32).to_le_bytes();
        self.tk1_mut()[..3].copy_from_slice(&bytes[..3]);
    }

    fn set_domain(&mut self, domain: u8) {
        self.tk1_mut()[3] = domain;
    }

    fn next_counter(lfsr: u64) -> u64 {
        ((lfsr << 1) & 0x00ff_ffff) ^ (0u64.wrapping_sub((lfsr >> 23) & 1) & 0x1b)
    }
}

/// Message blocks: domain `0` for full blocks, `1` for the trailing partial block.
const MESSAGE: PhasePolicy = PhasePolicy::new(16, Framing::PadPartial)
    .with_padding(Padding::partial(0x80))
    .with_domain(DomainRule {
        partial: 0x01,
        ..DomainRule::NONE
    });

/// Associated data blocks: `2` for full blocks, `3` for the trailing partial block.
const AD: PhasePolicy = PhasePolicy::new(16, Framing::PadPartial)
    .with_padding(Padding::partial(0x80))
    .with_domain(DomainRule {
        every: 0x02,
        partial: 0x01,
        ..DomainRule::NONE
    });

/// Domain of the checksum encryption; `| 1` when the message ended in a partial block.
const CHECKSUM_DOMAIN: u8 = 0x04;

/// Initial counter of both phases.
const COUNTER_START: u64 = 1;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn process<T: SkinnyTweakey>(
    key: &[u8; 16],
    nonce: &[u8],
    prefix: u8,
    ad: &[u8],
    buffer: &mut [u8],
    direction: Direction,
) -> [u8; 16] {
    let mut cipher = T::with_nonce(key, nonce);
    let mut sum = [0u8; 16];
    let mut lfsr = COUNTER_START;
    let mut checksum_domain = CHECKSUM_DOMAIN;

    for plan in MESSAGE.blocks(buffer.len()) {
        cipher.set_counter(lfsr);
        cipher.set_domain(prefix | MESSAGE.domain.for_block(&plan));
        let chunk = &mut buffer[plan.range()];

        if plan.partial {
            let mut pad = [0u8; 16];
            cipher.encrypt_block(&mut pad);
            if direction == Direction::Encrypt {
                xor_into(&mut sum, chunk);
            }
            xor_into(chunk, &pad);
            if direction == Direction::Decrypt {
                xor_into(&mut sum, chunk);
            }
            pad.zeroize();
            checksum_domain |= MESSAGE.domain.partial;
        } else {
            let mut block = [0u8; 16];
            block.copy_from_slice(chunk);
            match direction {
                Direction::Encrypt => {
                    xor_into(&mut sum, &block);
                    cipher.encrypt_block(&mut block);
                }
                Direction::Decrypt => {
                    cipher.decrypt_block(&mut block);
                    xor_into(&mut sum, &block);
                }
            }
            chunk.copy_from_slice(&block);
            block.zeroize();
        }

        if let Some(position) = MESSAGE.padding.position(&plan) {
            sum[position] ^= MESSAGE.padding.marker;
        }
        lfsr = T::next_counter(lfsr);
    }

    cipher.set_counter(lfsr);
    cipher.set_domain(prefix | checksum_domain);
    cipher.encrypt_block(&mut sum);

    lfsr = COUNTER_START;
    for plan in AD.blocks(ad.len()) {
        cipher.set_counter(lfsr);
        cipher.set_domain(prefix | AD.domain.for_block(&plan));

        let mut block = [0u8; 16];
        block[..plan.len].copy_from_slice(&ad[plan.range()]);
        if let Some(position) = AD.padding.position(&plan) {
            block[position] ^= AD.padding.marker;
        }
        cipher.encrypt_block(&mut block);
        xor_into(&mut sum, &block);

        lfsr = T::next_counter(lfsr);
    }

    sum
}

/// Seal or unseal with one member's parameters, truncating the tag to `TAG`.
fn member<T: SkinnyTweakey, const TAG: usize>(
    key: &[u8; 16],
    nonce: &[u8],
    prefix: u8,
    ad: &[u8],
    buffer: &mut [u8],
    direction: Direction,
) -> [u8; TAG] {
    let mut full = process::<T>(key, nonce, prefix, ad, buffer, direction);
    let mut tag = [0u8; TAG];
    tag.copy_from_slice(&full[..TAG]);
    full.zeroize();
    tag
}

macro_rules! skinny_member {
    (
        $(#[$doc:meta])*
        $name:ident, $algorithm:literal, $cipher:ty, $prefix:literal,
        nonce: $nonce:literal / $nonce_size:ty,
        tag: $tag:literal / $tag_size:ty
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl AeadFamily for $name {
            const ALGORITHM: &'static str = $algorithm;
            type Key = [u8; 16];
            type Nonce = [u8; $nonce];
            type Tag = [u8; $tag];
            type KeySize = U16;
            type NonceSize = $nonce_size;
            type TagSize = $tag_size;

            const MAX_AD_LEN: u64 = <$cipher as SkinnyTweakey>::MAX_INPUT_LEN;
            const MAX_MESSAGE_LEN: u64 = <$cipher as SkinnyTweakey>::MAX_INPUT_LEN;

            fn seal(
                key: &[u8; 16],
                nonce: &[u8; $nonce],
                ad: &[u8],
                buffer: &mut [u8],
            ) -> [u8; $tag] {
                member::<$cipher, $tag>(key, nonce, $prefix, ad, buffer, Direction::Encrypt)
            }

            fn unseal(
                key: &[u8; 16],
                nonce: &[u8; $nonce],
                ad: &[u8],
                buffer: &mut [u8],
            ) -> [u8; $tag] {
                member::<$cipher, $tag>(key, nonce, $prefix, ad, buffer, Direction::Decrypt)
            }
        }
    };
}

skinny_member!(
    /// SKINNY-AEAD-M1: SKINNY-128-384, 128-bit nonce, 128-bit tag. The primary member.
    SkinnyAeadM1, "SKINNY-AEAD-M1", Skinny128_384, 0x00,
    nonce: 16 / U16, tag: 16 / U16
);

skinny_member!(
    /// SKINNY-AEAD-M2: SKINNY-128-384, 96-bit nonce, 128-bit tag.
    SkinnyAeadM2, "SKINNY-AEAD-M2", Skinny128_384, 0x10,
    nonce: 12 / U12, tag: 16 / U16
);

skinny_member!(
    /// SKINNY-AEAD-M3: SKINNY-128-384, 128-bit nonce, 64-bit tag.
    SkinnyAeadM3, "SKINNY-AEAD-M3", Skinny128_384, 0x08,
    nonce: 16 / U16, tag: 8 / U8
);

skinny_member!(
    /// SKINNY-AEAD-M4: SKINNY-128-384, 96-bit nonce, 64-bit tag.
    SkinnyAeadM4, "SKINNY-AEAD-M4", Skinny128_384, 0x18,
    nonce: 12 / U12, tag: 8 / U8
);

skinny_member!(
    /// SKINNY-AEAD-M5: SKINNY-128-256, 96-bit nonce, 128-bit tag.
    SkinnyAeadM5, "SKINNY-AEAD-M5", Skinny128_256, 0x10,
    nonce: 12 / U12, tag: 16 / U16
);

skinny_member!(
    /// SKINNY-AEAD-M6: SKINNY-128-256, 96-bit nonce, 64-bit tag.
    SkinnyAeadM6, "SKINNY-AEAD-M6", Skinny128_256, 0x18,
    nonce: 12 / U12, tag: 8 / U8
);
