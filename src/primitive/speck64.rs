//! SPECK-64/128 block cipher, little-endian word order as used by COMET.

use super::BlockCipher;
use crate::endian::Endian;
use zeroize::{Zeroize, ZeroizeOnDrop};

const ROUNDS: usize = 27;

/// SPECK-64/128 with an expanded key schedule.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Speck64 {
    round_keys: [u32; ROUNDS],
}

impl BlockCipher for Speck64 {
    type Key = [u8; 16];
    type Block = [u8; 8];

    fn new(key: &[u8; 16]) -> Self {
        let mut s = Endian::Little.load_u32(key);
        let mut l: [u32; 3] = Endian::Little.load_words(&key[4..]);

        let mut round_keys = [0u32; ROUNDS];
        round_keys[0] = s;
        for round in 0..ROUNDS - 1 {
            let lane = &mut l[round % 3];
            *lane = s.wrapping_add(lane.rotate_right(8)) ^ round as u32;
            s = s.rotate_left(3) ^ *lane;
            round_keys[round + 1] = s;
        }
        l.zeroize();

        Self { round_keys }
    }

    fn encrypt_block(&self, block: &mut [u8; 8]) {
        let mut y = Endian::Little.load_u32(block);
        let mut x = Endian::Little.load_u32(&block[4..]);

        for &key in &self.round_keys {
            x = x.rotate_right(8).wrapping_add(y) ^ key;
            y = y.rotate_left(3) ^ x;
        }

        Endian::Little.store_u32(y, block);
        Endian::Little.store_u32(x, &mut block[4..]);
    }
}
