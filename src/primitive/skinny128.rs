//! SKINNY-128 tweakable block ciphers (128, 256 and 384-bit tweakeys).
//!
//! Rows of the 4x4 cell state are held as little-endian 32-bit words. TK2 and TK3 are folded into
//! a precomputed schedule; TK1 is kept as bytes and permuted on the fly so the tweak can change
//! between blocks without recomputing anything.

use super::{BlockCipher, BlockDecrypt};
use crate::endian::Endian;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[inline(always)]
fn lfsr2(x: u32) -> u32 {
    ((x << 1) & 0xfefe_fefe) ^ (((x >> 7) ^ (x >> 5)) & 0x0101_0101)
}

#[inline(always)]
fn lfsr3(x: u32) -> u32 {
    ((x >> 1) & 0x7f7f_7f7f) ^ (((x << 7) ^ (x << 1)) & 0x8080_8080)
}

#[inline(always)]
fn same(x: u32) -> u32 {
    x
}

/// Cell permutation PT applied to a tweakey lane.
#[inline(always)]
fn permute_tk(tk: &mut [u32; 4]) {
    let row2 = tk[2];
    let row3 = tk[3].rotate_left(16);
    tk[2] = tk[0];
    tk[3] = tk[1];
    tk[0] = ((row2 >> 8) & 0x0000_00ff) | ((row2 << 16) & 0x00ff_0000) | (row3 & 0xff00_ff00);
    tk[1] = ((row2 >> 16) & 0x0000_00ff)
        | (row2 & 0xff00_0000)
        | ((row3 << 8) & 0x0000_ff00)
        | (row3 & 0x00ff_0000);
}

#[inline(always)]
fn inv_permute_tk(tk: &mut [u32; 4]) {
    let row0 = tk[0];
    let row1 = tk[1];
    tk[0] = tk[2];
    tk[1] = tk[3];
    tk[2] = ((row0 >> 16) & 0x0000_00ff)
        | ((row0 << 8) & 0x0000_ff00)
        | ((row1 << 16) & 0x00ff_0000)
        | (row1 & 0xff00_0000);
    tk[3] = ((row0 >> 16) & 0x0000_ff00)
        | ((row0 << 16) & 0xff00_0000)
        | ((row1 >> 16) & 0x0000_00ff)
        | ((row1 << 8) & 0x00ff_0000);
}

#[inline(always)]
fn sbox(mut x: u32) -> u32 {
    x = !x;
    x ^= ((x >> 2) & (x >> 3)) & 0x1111_1111;
    let y = ((x << 5) & (x << 1)) & 0x2020_2020;
    x ^= (((x << 5) & (x << 4)) & 0x4040_4040) ^ y;
    let y = ((x << 2) & (x << 1)) & 0x8080_8080;
    x ^= (((x >> 2) & (x << 1)) & 0x0202_0202) ^ y;
    let y = ((x >> 5) & (x << 1)) & 0x0404_0404;
    x ^= (((x >> 1) & (x >> 2)) & 0x0808_0808) ^ y;
    x = !x;

    // Bit permutation [2 7 6 1 3 0 4 5] within each byte.
    ((x & 0x0808_0808) << 1)
        | ((x & 0x3232_3232) << 2)
        | ((x & 0x0101_0101) << 5)
        | ((x & 0x8080_8080) >> 6)
        | ((x & 0x4040_4040) >> 4)
        | ((x & 0x0404_0404) >> 2)
}

#[inline(always)]
fn inv_sbox(mut x: u32) -> u32 {
    x = !x;
    let y = ((x >> 1) & (x >> 3)) & 0x0101_0101;
    x ^= (((x >> 2) & (x >> 3)) & 0x1010_1010) ^ y;
    let y = ((x >> 6) & (x >> 1)) & 0x0202_0202;
    x ^= (((x >> 1) & (x >> 2)) & 0x0808_0808) ^ y;
    let y = ((x << 2) & (x << 1)) & 0x8080_8080;
    x ^= (((x >> 1) & (x << 2)) & 0x0404_0404) ^ y;
    let y = ((x << 5) & (x << 1)) & 0x2020_2020;
    x ^= (((x << 4) & (x << 5)) & 0x4040_4040) ^ y;
    x = !x;

    ((x & 0x0101_0101) << 2)
        | ((x & 0x0404_0404) << 4)
        | ((x & 0x0202_0202) << 6)
        | ((x & 0x2020_2020) >> 5)
        | ((x & 0xc8c8_c8c8) >> 2)
        | ((x & 0x1010_1010) >> 1)
}

/// Round subkeys from the lanes that are folded into the schedule.
///
/// Each lane is permuted and then clocked through its LFSR between rounds.
fn expand<const R: usize>(lanes: &mut [([u32; 4], fn(u32) -> u32)]) -> [[u32; 2]; R] {
    let mut subkeys = [[0u32; 2]; R];
    let mut rc = 0u8;
    for subkey in subkeys.iter_mut() {
        rc = (rc << 1) ^ ((rc >> 5) & 0x01) ^ ((rc >> 4) & 0x01) ^ 0x01;
        rc &= 0x3f;

        subkey[0] = (rc & 0x0f) as u32;
        subkey[1] = (rc >> 4) as u32;
        for (tk, lfsr) in lanes.iter_mut() {
            subkey[0] ^= tk[0];
            subkey[1] ^= tk[1];
            permute_tk(tk);
            tk[0] = lfsr(tk[0]);
            tk[1] = lfsr(tk[1]);
        }
    }
    for (tk, _) in lanes.iter_mut() {
        tk.zeroize();
    }
    subkeys
}

fn encrypt<const R: usize>(subkeys: &[[u32; 2]; R], tweak: &[u8; 16], block: &mut [u8; 16]) {
    let [mut s0, mut s1, mut s2, mut s3] = Endian::Little.load_words::<4>(block);
    let mut tk1 = Endian::Little.load_words::<4>(tweak);

    for subkey in subkeys {
        s0 = sbox(s0);
        s1 = sbox(s1);
        s2 = sbox(s2);
        s3 = sbox(s3);

        s0 ^= subkey[0] ^ tk1[0];
        s1 ^= subkey[1] ^ tk1[1];
        s2 ^= 0x02;

        // Shift rows right, which is a left rotate of each row word.
        s1 = s1.rotate_left(8);
        s2 = s2.rotate_left(16);
        s3 = s3.rotate_left(24);

        // Mix columns.
        s1 ^= s2;
        s2 ^= s0;
        let temp = s3 ^ s2;
        s3 = s2;
        s2 = s1;
        s1 = s0;
        s0 = temp;

        permute_tk(&mut tk1);
    }

    Endian::Little.store_words(&[s0, s1, s2, s3], block);
    tk1.zeroize();
}

fn decrypt<const R: usize>(subkeys: &[[u32; 2]; R], tweak: &[u8; 16], block: &mut [u8; 16]) {
    let [mut s0, mut s1, mut s2, mut s3] = Endian::Little.load_words::<4>(block);
    let mut tk1 = Endian::Little.load_words::<4>(tweak);

    // PT has period 16: move TK1 to its value after the last round.
    for _ in 0..R % 16 {
        permute_tk(&mut tk1);
    }

    for subkey in subkeys.iter().rev() {
        inv_permute_tk(&mut tk1);

        let temp = s3;
        s3 = s0;
        s0 = s1;
        s1 = s2;
        s3 ^= temp;
        s2 = temp ^ s0;
        s1 ^= s2;

        s1 = s1.rotate_left(24);
        s2 = s2.rotate_left(16);
        s3 = s3.rotate_left(8);

        s0 ^= subkey[0] ^ tk1[0];
        s1 ^= subkey[1] ^ tk1[1];
        s2 ^= 0x02;

        s0 = inv_sbox(s0);
        s1 = inv_sbox(s1);
        s2 = inv_sbox(s2);
        s3 = inv_sbox(s3);
    }

    Endian::Little.store_words(&[s0, s1, s2, s3], block);
    tk1.zeroize();
}

/// SKINNY-128-128: 40 rounds, the key is the whole tweakey.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Skinny128_128 {
    subkeys: [[u32; 2]; 40],
}

impl BlockCipher for Skinny128_128 {
    type Key = [u8; 16];
    type Block = [u8; 16];

    fn new(key: &[u8; 16]) -> Self {
        let tk1 = Endian::Little.load_words(key);
        Self {
            subkeys: expand(&mut [(tk1, same as fn(u32) -> u32)]),
        }
    }

    fn encrypt_block(&self, block: &mut [u8; 16]) {
        encrypt(&self.subkeys, &[0; 16], block);
    }
}

impl BlockDecrypt for Skinny128_128 {
    fn decrypt_block(&self, block: &mut [u8; 16]) {
        decrypt(&self.subkeys, &[0; 16], block);
    }
}

/// SKINNY-128-256: 48 rounds, tweakey `TK1 || TK2`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Skinny128_256 {
    subkeys: [[u32; 2]; 48],
    tk1: [u8; 16],
}

impl Skinny128_256 {
    /// The TK1 lane, which may be changed between blocks.
    #[inline]
    pub fn tk1_mut(&mut self) -> &mut [u8; 16] {
        &mut self.tk1
    }
}

impl BlockCipher for Skinny128_256 {
    type Key = [u8; 32];
    type Block = [u8; 16];

    fn new(key: &[u8; 32]) -> Self {
        let mut tk1 = [0u8; 16];
        tk1.copy_from_slice(&key[..16]);
        let tk2 = Endian::Little.load_words(&key[16..]);
        Self {
            subkeys: expand(&mut [(tk2, lfsr2 as fn(u32) -> u32)]),
            tk1,
        }
    }

    fn encrypt_block(&self, block: &mut [u8; 16]) {
        encrypt(&self.subkeys, &self.tk1, block);
    }
}

impl BlockDecrypt for Skinny128_256 {
    fn decrypt_block(&self, block: &mut [u8; 16]) {
        decrypt(&self.subkeys, &self.tk1, block);
    }
}

/// SKINNY-128-384: 56 rounds, tweakey `TK1 || TK2 || TK3`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Skinny128_384 {
    subkeys: [[u32; 2]; 56],
    tk1: [u8; 16],
}

impl Skinny128_384 {
    /// The TK1 lane, which may be changed between blocks.
    #[inline]
    pub fn tk1_mut(&mut self) -> &mut [u8; 16] {
        &mut self.tk1
    }
}

impl BlockCipher for Skinny128_384 {
    type Key = [u8; 48];
    type Block = [u8; 16];

    fn new(key: &[u8; 48]) -> Self {
        let mut tk1 = [0u8; 16];
        tk1.copy_from_slice(&key[..16]);
        let tk2 = Endian::Little.load_words(&key[16..32]);
        let tk3 = Endian::Little.load_words(&key[32..]);
        Self {
            subkeys: expand(&mut [
                (tk2, lfsr2 as fn(u32) -> u32),
                (tk3, lfsr3 as fn(u32) -> u32),
            ]),
            tk1,
        }
    }

    fn encrypt_block(&self, block: &mut [u8; 16]) {
        encrypt(&self.subkeys, &self.tk1, block);
    }
}

impl BlockDecrypt for Skinny128_384 {
    fn decrypt_block(&self, block: &mut [u8; 16]) {
        decrypt(&self.subkeys, &self.tk1, block);
    }
}
