//! COMET: a rekeying block-cipher mode.
//!
//! Two values travel through the mode: `Y`, one cipher block of chaining state, and `Z`, a
//! 16-byte key that is re-derived for every block by doubling its 64-bit prefix in GF(2^64).
//! Phase markers go into the top byte of `Z` and stay there, so every later block key carries
//! them too. The message keystream is a word shuffle of the encrypted `Y`.

use crate::endian::{Endian, xor_into};
use crate::engine::AeadFamily;
use crate::policy::{BlockPlan, DomainRule, Framing, Padding, PhasePolicy};
use crate::primitive::{BlockCipher, Cham64, Cham128, Speck64};
use aead::consts::{U8, U15, U16};
use zeroize::Zeroize;

/// A block cipher keyed with 16 bytes that COMET can run over.
pub trait CometCipher: BlockCipher<Key = [u8; 16]> {
    /// Derive the keystream block from the encrypted chaining state.
    fn shuffle(block: &Self::Block) -> Self::Block;
}

impl CometCipher for Cham128 {
    fn shuffle(block: &[u8; 16]) -> [u8; 16] {
        let x: [u32; 4] = Endian::Little.load_words(block);
        let mut out = [0u8; 16];
        Endian::Little.store_words(&[x[3], x[2].rotate_right(1), x[0], x[1]], &mut out);
        out
    }
}

/// Shuffle shared by both 64-bit ciphers.
fn shuffle_64(block: &[u8; 8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    out[..2].copy_from_slice(&block[6..]);
    let middle = Endian::Little.load_u16(&block[4..]).rotate_right(1);
    Endian::Little.store_u16(middle, &mut out[2..]);
    out[4..].copy_from_slice(&block[..4]);
    out
}

impl CometCipher for Cham64 {
    fn shuffle(block: &[u8; 8]) -> [u8; 8] {
        shuffle_64(block)
    }
}

impl CometCipher for Speck64 {
    fn shuffle(block: &[u8; 8]) -> [u8; 8] {
        shuffle_64(block)
    }
}

/// Associated data: `0x08` on entry, `0x10` more for a trailing partial block.
const fn ad_policy(block: usize) -> PhasePolicy {
    PhasePolicy::new(block, Framing::PadPartial)
        .skipping_empty()
        .with_padding(Padding::partial(0x01))
        .with_domain(DomainRule {
            entry: 0x08,
            partial: 0x10,
            ..DomainRule::NONE
        })
}

/// Message: `0x20` on entry, `0x40` more for a trailing partial block.
const fn message_policy(block: usize) -> PhasePolicy {
    PhasePolicy::new(block, Framing::PadPartial)
        .skipping_empty()
        .with_padding(Padding::partial(0x01))
        .with_domain(DomainRule {
            entry: 0x20,
            partial: 0x40,
            ..DomainRule::NONE
        })
}

/// Marker for the tag block.
const TAG_DOMAIN: u8 = 0x80;

/// Direction of the message phase.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Running `Y` and `Z`.
struct Comet<C: CometCipher> {
    y: C::Block,
    z: [u8; 16],
}

impl<C: CometCipher> Drop for Comet<C> {
    fn drop(&mut self) {
        self.y.as_mut().zeroize();
        self.z.zeroize();
    }
}

impl<C: CometCipher> Comet<C> {
    fn block_len() -> usize {
        C::Block::default().as_ref().len()
    }

    /// 128-bit block: `Y = K`, `Z = E_K(N)`.
    fn with_wide_block(key: &[u8; 16], nonce: &[u8]) -> Self {
        let mut y = C::Block::default();
        y.as_mut().copy_from_slice(key);
        let mut encrypted_nonce = C::Block::default();
        encrypted_nonce.as_mut().copy_from_slice(nonce);
        C::new(key).encrypt_block(&mut encrypted_nonce);
        let mut z = [0u8; 16];
        z.copy_from_slice(encrypted_nonce.as_ref());
        Self { y, z }
    }

    /// 64-bit block: `Y = E_K(0)`, `Z = (N || 0) ^ K`.
    fn with_narrow_block(key: &[u8; 16], nonce: &[u8]) -> Self {
        let mut y = C::Block::default();
        C::new(key).encrypt_block(&mut y);
        let mut z = [0u8; 16];
        z[..nonce.len()].copy_from_slice(nonce);
        xor_into(&mut z, key);
        Self { y, z }
    }

    /// Double the 64-bit prefix of `Z`, then `Y = E_Z(Y)`.
    fn advance(&mut self) {
        let prefix = Endian::Little.load_u64(&self.z);
        let carry = 0u64.wrapping_sub(prefix >> 63) & 0x1b;
        Endian::Little.store_u64((prefix << 1) ^ carry, &mut self.z);
        C::new(&self.z).encrypt_block(&mut self.y);
    }

    fn enter_block(&mut self, policy: &PhasePolicy, plan: &BlockPlan) {
        self.z[15] ^= policy.domain.for_block(plan);
        self.advance();
    }

    fn pad(&mut self, policy: &PhasePolicy, plan: &BlockPlan) {
        if let Some(position) = policy.padding.position(plan) {
            self.y.as_mut()[position] ^= policy.padding.marker;
        }
    }

    fn absorb_ad(&mut self, ad: &[u8]) {
        let policy = ad_policy(Self::block_len());
        for plan in policy.blocks(ad.len()) {
            self.enter_block(&policy, &plan);
            xor_into(self.y.as_mut(), &ad[plan.range()]);
            self.pad(&policy, &plan);
        }
    }

    fn process_message(&mut self, buffer: &mut [u8], direction: Direction) {
        let policy = message_policy(Self::block_len());
        for plan in policy.blocks(buffer.len()) {
            self.enter_block(&policy, &plan);
            let mut keystream = C::shuffle(&self.y);
            let chunk = &mut buffer[plan.range()];
            match direction {
                Direction::Encrypt => {
                    xor_into(self.y.as_mut(), chunk);
                    xor_into(chunk, keystream.as_ref());
                }
                Direction::Decrypt => {
                    xor_into(chunk, keystream.as_ref());
                    xor_into(self.y.as_mut(), chunk);
                }
            }
            keystream.as_mut().zeroize();
            self.pad(&policy, &plan);
        }
    }

    fn finalize(mut self) -> C::Block {
        self.z[15] ^= TAG_DOMAIN;
        self.advance();
        self.y
    }

    fn run(mut self, ad: &[u8], buffer: &mut [u8], direction: Direction) -> C::Block {
        self.absorb_ad(ad);
        self.process_message(buffer, direction);
        self.finalize()
    }
}

/// COMET-128 with CHAM-128/128.
#[derive(Debug, Clone, Copy)]
pub struct Comet128Cham;

impl AeadFamily for Comet128Cham {
    const ALGORITHM: &'static str = "COMET-128_CHAM-128/128";
    type Key = [u8; 16];
    type Nonce = [u8; 16];
    type Tag = [u8; 16];
    type KeySize = U16;
    type NonceSize = U16;
    type TagSize = U16;

    fn seal(key: &[u8; 16], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        Comet::<Cham128>::with_wide_block(key, nonce).run(ad, buffer, Direction::Encrypt)
    }

    fn unseal(key: &[u8; 16], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        Comet::<Cham128>::with_wide_block(key, nonce).run(ad, buffer, Direction::Decrypt)
    }
}

/// COMET-64 with CHAM-64/128.
#[derive(Debug, Clone, Copy)]
pub struct Comet64Cham;

impl AeadFamily for Comet64Cham {
    const ALGORITHM: &'static str = "COMET-64_CHAM-64/128";
    type Key = [u8; 16];
    type Nonce = [u8; 15];
    type Tag = [u8; 8];
    type KeySize = U16;
    type NonceSize = U15;
    type TagSize = U8;

    fn seal(key: &[u8; 16], nonce: &[u8; 15], ad: &[u8], buffer: &mut [u8]) -> [u8; 8] {
        Comet::<Cham64>::with_narrow_block(key, nonce).run(ad, buffer, Direction::Encrypt)
    }

    fn unseal(key: &[u8; 16], nonce: &[u8; 15], ad: &[u8], buffer: &mut [u8]) -> [u8; 8] {
        Comet::<Cham64>::with_narrow_block(key, nonce).run(ad, buffer, Direction::Decrypt)
    }
}

/// COMET-64 with SPECK-64/128.
#[derive(Debug, Clone, Copy)]
pub struct Comet64Speck;

impl AeadFamily for Comet64Speck {
    const ALGORITHM: &'static str = "COMET-64_SPECK-64/128";
    type Key = [u8; 16];
    type Nonce = [u8; 15];
    type Tag = [u8; 8];
    type KeySize = U16;
    type NonceSize = U15;
    type TagSize = U8;

    fn seal(key: &[u8; 16], nonce: &[u8; 15], ad: &[u8], buffer: &mut [u8]) -> [u8; 8] {
        Comet::<Speck64>::with_narrow_block(key, nonce).run(ad, buffer, Direction::Encrypt)
    }

    fn unseal(key: &[u8; 16], nonce: &[u8; 15], ad: &[u8], buffer: &mut [u8]) -> [u8; 8] {
        Comet::<Speck64>::with_narrow_block(key, nonce).run(ad, buffer, Direction::Decrypt)
    }
}
