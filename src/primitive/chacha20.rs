//! ChaCha20 keystream with a 64-bit block counter and a 64-bit nonce.

use crate::endian::Endian;
use zeroize::{Zeroize, ZeroizeOnDrop};

const SIGMA: &[u8; 16] = b"expand 32-byte k";

#[inline(always)]
fn quarter_round(s: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(16);
    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(12);
    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(8);
    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(7);
}

/// ChaCha20 input block: constants, key, counter words 12..14 and nonce words 14..16.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    input: [u32; 16],
}

impl ChaCha20 {
    /// Set up the input block for `key` and `nonce`.
    pub fn new(key: &[u8; 32], nonce: &[u8; 8]) -> Self {
        let mut input = [0u32; 16];
        input[..4].copy_from_slice(&Endian::Little.load_words::<4>(SIGMA));
        input[4..12].copy_from_slice(&Endian::Little.load_words::<8>(key));
        input[14..].copy_from_slice(&Endian::Little.load_words::<2>(nonce));
        Self { input }
    }

    /// Write keystream block number `counter` into `out`.
    pub fn block(&self, counter: u64, out: &mut [u8; 64]) {
        let mut input = self.input;
        input[12] = counter as u32;
        input[13] = (counter >> 32) as u32;

        let mut x = input;
        for _ in 0..10 {
            quarter_round(&mut x, 0, 4, 8, 12);
            quarter_round(&mut x, 1, 5, 9, 13);
            quarter_round(&mut x, 2, 6, 10, 14);
            quarter_round(&mut x, 3, 7, 11, 15);

            quarter_round(&mut x, 0, 5, 10, 15);
            quarter_round(&mut x, 1, 6, 11, 12);
            quarter_round(&mut x, 2, 7, 8, 13);
            quarter_round(&mut x, 3, 4, 9, 14);
        }

        for (word, start) in x.iter_mut().zip(input.iter()) {
            *word = word.wrapping_add(*start);
        }
        Endian::Little.store_words(&x, out);

        x.zeroize();
        input.zeroize();
    }

    /// XOR the keystream starting at block `counter` into `data`.
    pub fn apply_keystream(&self, mut counter: u64, data: &mut [u8]) {
        let mut stream = [0u8; 64];
        for chunk in data.chunks_mut(64) {
            self.block(counter, &mut stream);
            crate::endian::xor_into(chunk, &stream);
            counter = counter.wrapping_add(1);
        }
        stream.zeroize();
    }
}
