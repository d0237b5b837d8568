//! CHAM-128/128 and CHAM-64/128 block ciphers (encryption only).

use super::BlockCipher;
use crate::endian::Endian;
use zeroize::{Zeroize, ZeroizeOnDrop};

const ROUNDS: usize = 80;

/// CHAM-128/128: 128-bit block, 128-bit key, 32-bit words.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cham128 {
    round_keys: [u32; 8],
}

impl BlockCipher for Cham128 {
    type Key = [u8; 16];
    type Block = [u8; 16];

    fn new(key: &[u8; 16]) -> Self {
        let k: [u32; 4] = Endian::Little.load_words(key);
        let g = |v: u32| v ^ v.rotate_left(1) ^ v.rotate_left(11);
        let f = |v: u32| v ^ v.rotate_left(1) ^ v.rotate_left(8);
        Self {
            round_keys: [
                f(k[0]),
                f(k[1]),
                f(k[2]),
                f(k[3]),
                g(k[1]),
                g(k[0]),
                g(k[3]),
                g(k[2]),
            ],
        }
    }

    fn encrypt_block(&self, block: &mut [u8; 16]) {
        let mut x: [u32; 4] = Endian::Little.load_words(block);

        for round in 0..ROUNDS {
            let i = round % 4;
            let next = x[(i + 1) % 4];
            let key = self.round_keys[round % 8];
            let counter = x[i] ^ round as u32;
            x[i] = if round % 2 == 0 {
                counter
                    .wrapping_add(next.rotate_left(1) ^ key)
                    .rotate_left(8)
            } else {
                counter
                    .wrapping_add(next.rotate_left(8) ^ key)
                    .rotate_left(1)
            };
        }

        Endian::Little.store_words(&x, block);
    }
}

/// CHAM-64/128: 64-bit block, 128-bit key, 16-bit words.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cham64 {
    round_keys: [u16; 16],
}

impl BlockCipher for Cham64 {
    type Key = [u8; 16];
    type Block = [u8; 8];

    fn new(key: &[u8; 16]) -> Self {
        let mut round_keys = [0u16; 16];
        for (i, chunk) in key.chunks_exact(2).enumerate() {
            let k = Endian::Little.load_u16(chunk);
            round_keys[i] = k ^ k.rotate_left(1) ^ k.rotate_left(8);
            // Neighbouring key words trade places in the second half.
            round_keys[8 + (i ^ 1)] = k ^ k.rotate_left(1) ^ k.rotate_left(11);
        }
        Self { round_keys }
    }

    fn encrypt_block(&self, block: &mut [u8; 8]) {
        let mut x: [u16; 4] = core::array::from_fn(|i| Endian::Little.load_u16(&block[2 * i..]));

        for round in 0..ROUNDS {
            let i = round % 4;
            let next = x[(i + 1) % 4];
            let key = self.round_keys[round % 16];
            let counter = x[i] ^ round as u16;
            x[i] = if round % 2 == 0 {
                counter
                    .wrapping_add(next.rotate_left(1) ^ key)
                    .rotate_left(8)
            } else {
                counter
                    .wrapping_add(next.rotate_left(8) ^ key)
                    .rotate_left(1)
            };
        }

        for (word, chunk) in x.iter().zip(block.chunks_exact_mut(2)) {
            Endian::Little.store_u16(*word, chunk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::hex_block;

    #[test]
    fn test_cham128() {
        let cipher = Cham128::new(&hex_block("000102030405060708090a0b0c0d0e0f"));
        let mut block: [u8; 16] = hex_block("00112233445566778899aabbccddeeff");
        cipher.encrypt_block(&mut block);
        assert_eq!(block, hex_block::<16>("346074c3c50057b532ec648df7329348"));
    }

    #[test]
    fn test_cham64() {
        let cipher = Cham64::new(&hex_block("000102030405060708090a0b0c0d0e0f"));
        let mut block: [u8; 8] = hex_block("0011223344556677");
        cipher.encrypt_block(&mut block);
        assert_eq!(block, hex_block::<8>("3c45bc63fadc4ebf"));
    }
}
