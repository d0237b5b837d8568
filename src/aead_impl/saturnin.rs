//! SATURNIN-CTR-Cascade and SATURNIN-Short.
//!
//! The AEAD mode encrypts in counter mode and authenticates with the cascade: every 32-byte block
//! is encrypted under the running tag as key and fed forward into it. Each input class (nonce and
//! associated data, ciphertext, final padded blocks) uses its own cipher domain.
//!
//! SATURNIN-Short seals at most 15 bytes into a single block and has no separate tag.

use crate::ct;
use crate::endian::{Endian, xor_into};
use crate::engine::{AeadFamily, StreamMac, stream};
use crate::error::{Error, InvalidParameter, Result};
use crate::primitive::{Saturnin, SaturninDomain};
use aead::consts::{U16, U32};
use log::debug;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Block size of SATURNIN-256 in bytes.
pub(crate) const BLOCK: usize = 32;

/// Padding marker after the nonce and after the last cascade input.
const PAD: u8 = 0x80;

/// Offset of the big-endian counter in the keystream input block.
const COUNTER_OFFSET: usize = 28;

/// `nonce || 0x80 || 0^15`.
fn nonce_block(nonce: &[u8; 16]) -> [u8; BLOCK] {
    let mut block = [0u8; BLOCK];
    block[..16].copy_from_slice(nonce);
    block[16] = PAD;
    block
}

/// Feed `data` through the cascade: full blocks in `full`, then one `10*`-padded block in `last`.
pub(crate) fn cascade(
    tag: &mut [u8; BLOCK],
    data: &[u8],
    full: SaturninDomain,
    last: SaturninDomain,
) {
    let mut chunks = data.chunks_exact(BLOCK);
    let mut block = [0u8; BLOCK];
    for chunk in &mut chunks {
        block.copy_from_slice(chunk);
        Saturnin::encrypt_xor(full, &block, tag);
    }

    let rest = chunks.remainder();
    block = [0u8; BLOCK];
    block[..rest.len()].copy_from_slice(rest);
    block[rest.len()] = PAD;
    Saturnin::encrypt_xor(last, &block, tag);
    block.zeroize();
}

/// Counter-mode keystream plus cascade MAC for one message.
#[derive(Zeroize, ZeroizeOnDrop)]
struct CtrCascade {
    cipher: Saturnin,
    counter_block: [u8; BLOCK],
    tag: [u8; BLOCK],
}

impl CtrCascade {
    fn new(key: &[u8; 32], nonce: &[u8; 16]) -> Self {
        let counter_block = nonce_block(nonce);
        let mut tag = *key;
        Saturnin::encrypt_xor(SaturninDomain::AssociatedData, &counter_block, &mut tag);
        Self {
            cipher: Saturnin::new(key),
            counter_block,
            tag,
        }
    }
}

impl StreamMac for CtrCascade {
    type Tag = [u8; BLOCK];

    fn apply_keystream(&mut self, data: &mut [u8]) {
        let mut keystream = [0u8; BLOCK];
        for (counter, chunk) in (1u32..).zip(data.chunks_mut(BLOCK)) {
            Endian::Big.store_u32(counter, &mut self.counter_block[COUNTER_OFFSET..]);
            keystream = self.counter_block;
            self.cipher
                .encrypt_block(SaturninDomain::Keystream, &mut keystream);
            xor_into(chunk, &keystream);
        }
        keystream.zeroize();
    }

    fn authenticate_ad(&mut self, ad: &[u8]) {
        cascade(
            &mut self.tag,
            ad,
            SaturninDomain::AssociatedData,
            SaturninDomain::AssociatedDataLast,
        );
    }

    fn authenticate_ciphertext(&mut self, ciphertext: &[u8]) {
        cascade(
            &mut self.tag,
            ciphertext,
            SaturninDomain::Ciphertext,
            SaturninDomain::CiphertextLast,
        );
    }

    fn finalize(self) -> [u8; BLOCK] {
        self.tag
    }
}

/// SATURNIN-CTR-Cascade.
#[derive(Debug, Clone, Copy)]
pub struct SaturninAead;

impl AeadFamily for SaturninAead {
    const ALGORITHM: &'static str = "SATURNIN-CTR-Cascade";
    type Key = [u8; 32];
    type Nonce = [u8; 16];
    type Tag = [u8; 32];
    type KeySize = U32;
    type NonceSize = U16;
    type TagSize = U32;

    /// The counter is 32 bits wide and starts at 1.
    const MAX_MESSAGE_LEN: u64 = BLOCK as u64 * (u32::MAX as u64);

    fn seal(key: &[u8; 32], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 32] {
        stream::seal(CtrCascade::new(key, nonce), ad, buffer)
    }

    fn unseal(key: &[u8; 32], nonce: &[u8; 16], ad: &[u8], buffer: &mut [u8]) -> [u8; 32] {
        stream::unseal(CtrCascade::new(key, nonce), ad, buffer)
    }
}

/// SATURNIN-Short: one block holding `nonce || message || 10*`, at most 15 message bytes.
#[derive(Debug, Clone, Copy)]
pub struct SaturninShort;

impl SaturninShort {
    /// Algorithm name.
    pub const ALGORITHM: &'static str = "SATURNIN-Short";

    /// Key length in bytes.
    pub const KEY_LEN: usize = 32;

    /// Nonce length in bytes.
    pub const NONCE_LEN: usize = 16;

    /// Largest message in bytes.
    pub const MAX_MESSAGE_LEN: usize = 15;

    /// Length of the sealed block.
    pub const SEALED_LEN: usize = BLOCK;

    fn check(ad: &[u8], message_len: usize) -> Result<()> {
        if !ad.is_empty() {
            debug!("{}: associated data is not supported", Self::ALGORITHM);
            return Err(InvalidParameter::AssociatedDataTooLong.into());
        }
        if message_len > Self::MAX_MESSAGE_LEN {
            debug!("{}: message of {} bytes over the limit", Self::ALGORITHM, message_len);
            return Err(InvalidParameter::MessageTooLong.into());
        }
        Ok(())
    }

    /// Seal `message` into one 32-byte block.
    pub fn seal(key: &[u8; 32], nonce: &[u8; 16], ad: &[u8], message: &[u8]) -> Result<[u8; 32]> {
        Self::check(ad, message.len())?;

        let mut block = [0u8; BLOCK];
        block[..16].copy_from_slice(nonce);
        block[16..16 + message.len()].copy_from_slice(message);
        block[16 + message.len()] = PAD;
        Saturnin::new(key).encrypt_block(SaturninDomain::Short, &mut block);
        Ok(block)
    }

    /// Open a sealed block into `out`, returning the message length.
    ///
    /// The recovered nonce and padding are checked without branching on secret bytes. On
    /// [`Error::AuthenticationFailure`] every byte of `out` that could have held the message is
    /// zeroed.
    pub fn open(
        key: &[u8; 32],
        nonce: &[u8; 16],
        ad: &[u8],
        sealed: &[u8; 32],
        out: &mut [u8],
    ) -> Result<usize> {
        Self::check(ad, 0)?;
        if out.len() < Self::MAX_MESSAGE_LEN {
            debug!("{}: output of {} bytes, need 15", Self::ALGORITHM, out.len());
            return Err(InvalidParameter::BufferTooSmall.into());
        }

        let mut block = *sealed;
        Saturnin::new(key).decrypt_block(SaturninDomain::Short, &mut block);
        let (recovered_nonce, tail) = block.split_at(16);

        // The message ends at the last non-zero byte of the tail, which must be the marker.
        let mut seen = Choice::from(0);
        let mut padded = Choice::from(0);
        let mut len = 0u8;
        for (i, byte) in tail.iter().enumerate().rev() {
            let nonzero = !byte.ct_eq(&0);
            let first = nonzero & !seen;
            padded |= first & byte.ct_eq(&PAD);
            len.conditional_assign(&(i as u8), first);
            seen |= nonzero;
        }

        let valid = ct::tags_match(recovered_nonce, nonce) & padded;
        let out = &mut out[..Self::MAX_MESSAGE_LEN];
        out.copy_from_slice(&tail[..Self::MAX_MESSAGE_LEN]);
        ct::clear_unless(valid, out);
        block.zeroize();

        if bool::from(valid) {
            let len = usize::from(len);
            out[len..].zeroize();
            Ok(len)
        } else {
            debug!("{}: authentication failed", Self::ALGORITHM);
            Err(Error::AuthenticationFailure)
        }
    }
}
