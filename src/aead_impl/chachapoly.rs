//! ChaCha20-Poly1305 with a 64-bit nonce.
//!
//! Keystream block 0 supplies the one-time Poly1305 key; encryption starts at block 1. The MAC
//! covers `pad16(ad) || pad16(ciphertext) || le64(|ad|) || le64(|ciphertext|)`.

use crate::engine::{AeadFamily, StreamMac, stream};
use crate::primitive::{ChaCha20, Poly1305};
use aead::consts::{U8, U16, U32};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// ChaCha20 block size in bytes.
pub(crate) const BLOCK: usize = 64;

#[derive(Zeroize, ZeroizeOnDrop)]
struct ChaChaPolyStream {
    cipher: ChaCha20,
    mac: Poly1305,
    ad_len: u64,
    ciphertext_len: u64,
}

impl ChaChaPolyStream {
    fn new(key: &[u8; 32], nonce: &[u8; 8]) -> Self {
        let cipher = ChaCha20::new(key, nonce);
        let mut block = [0u8; BLOCK];
        cipher.block(0, &mut block);
        let mut mac_key = [0u8; 32];
        mac_key.copy_from_slice(&block[..32]);
        let mac = Poly1305::new(&mac_key);
        block.zeroize();
        mac_key.zeroize();

        Self {
            cipher,
            mac,
            ad_len: 0,
            ciphertext_len: 0,
        }
    }
}

impl StreamMac for ChaChaPolyStream {
    type Tag = [u8; 16];

    fn apply_keystream(&mut self, data: &mut [u8]) {
        self.cipher.apply_keystream(1, data);
    }

    fn authenticate_ad(&mut self, ad: &[u8]) {
        self.mac.update_padded(ad);
        self.ad_len = ad.len() as u64;
    }

    fn authenticate_ciphertext(&mut self, ciphertext: &[u8]) {
        self.mac.update_padded(ciphertext);
        self.ciphertext_len = ciphertext.len() as u64;
    }

    fn finalize(mut self) -> [u8; 16] {
        let mut lengths = [0u8; 16];
        lengths[..8].copy_from_slice(&self.ad_len.to_le_bytes());
        lengths[8..].copy_from_slice(&self.ciphertext_len.to_le_bytes());

        self.mac.update_padded(&lengths);
        self.mac.finalize()
    }
}

/// ChaCha20-Poly1305 with a 32-byte key, 8-byte nonce and 16-byte tag.
#[derive(Debug, Clone, Copy)]
pub struct ChaChaPoly;

impl AeadFamily for ChaChaPoly {
    const ALGORITHM: &'static str = "ChaChaPoly";
    type Key = [u8; 32];
    type Nonce = [u8; 8];
    type Tag = [u8; 16];
    type KeySize = U32;
    type NonceSize = U8;
    type TagSize = U16;

    fn seal(key: &[u8; 32], nonce: &[u8; 8], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        stream::seal(ChaChaPolyStream::new(key, nonce), ad, buffer)
    }

    fn unseal(key: &[u8; 32], nonce: &[u8; 8], ad: &[u8], buffer: &mut [u8]) -> [u8; 16] {
        stream::unseal(ChaChaPolyStream::new(key, nonce), ad, buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_tag() {
        let key: [u8; 32] = core::array::from_fn(|i| i as u8);
        let nonce: [u8; 8] = core::array::from_fn(|i| i as u8);
        let tag = ChaChaPoly::seal(&key, &nonce, b"", &mut []);

        // With nothing to authenticate but the zero lengths block, the tag is Poly1305 of 16
        // zero bytes under the block-0 key.
        let mut block = [0u8; BLOCK];
        ChaCha20::new(&key, &nonce).block(0, &mut block);
        let mut mac_key = [0u8; 32];
        mac_key.copy_from_slice(&block[..32]);
        let mut mac = Poly1305::new(&mac_key);
        mac.update_padded(&[0u8; 16]);
        assert_eq!(tag, mac.finalize());
    }

    #[test]
    fn init_is_idempotent() {
        let key = [0x3cu8; 32];
        let nonce = [0xa5u8; 8];
        let mut first = ChaChaPolyStream::new(&key, &nonce);
        let mut second = ChaChaPolyStream::new(&key, &nonce);
        assert_eq!(
            (first.ad_len, first.ciphertext_len),
            (second.ad_len, second.ciphertext_len)
        );

        let mut first_block = [0u8; BLOCK];
        let mut second_block = [0u8; BLOCK];
        first.cipher.block(1, &mut first_block);
        second.cipher.block(1, &mut second_block);
        assert_eq!(first_block, second_block);
        assert_eq!(first.mac.finalize(), second.mac.finalize());

        let other = ChaChaPolyStream::new(&key, &[0x5au8; 8]);
        other.cipher.block(1, &mut second_block);
        assert_ne!(first_block, second_block);
    }

    #[test]
    fn counter_is_not_capped() {
        // The block counter is 64 bits wide, so no ceiling short of the length type.
        assert_eq!(ChaChaPoly::MAX_MESSAGE_LEN, u64::MAX);
    }
}
