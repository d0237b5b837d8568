//! Xoodoo-384, the permutation under Xoodyak.

use super::Permutation;
use crate::endian::Endian;
use zeroize::{Zeroize, ZeroizeOnDrop};

const ROUNDS: usize = 12;

const ROUND_CONSTANTS: [u32; ROUNDS] = [
    0x0058, 0x0038, 0x03c0, 0x00d0, 0x0120, 0x0014, 0x0060, 0x002c, 0x0380, 0x00f0, 0x01a0, 0x0012,
];

/// Xoodoo state: 3 planes of 4 little-endian 32-bit lanes (48 bytes).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Xoodoo([u8; 48]);

type Planes = [[u32; 4]; 3];

#[inline(always)]
fn round(a: &mut Planes, rc: u32) {
    // Theta: mix column parity.
    let p: [u32; 4] = core::array::from_fn(|x| a[0][x] ^ a[1][x] ^ a[2][x]);
    for x in 0..4 {
        let q = p[(x + 3) % 4];
        let e = q.rotate_left(5) ^ q.rotate_left(14);
        for plane in a.iter_mut() {
            plane[x] ^= e;
        }
    }

    // Rho-west.
    a[1].rotate_right(1);
    for lane in a[2].iter_mut() {
        *lane = lane.rotate_left(11);
    }

    // Iota.
    a[0][0] ^= rc;

    // Chi, column by column in place.
    for x in 0..4 {
        a[0][x] ^= !a[1][x] & a[2][x];
        a[1][x] ^= !a[2][x] & a[0][x];
        a[2][x] ^= !a[0][x] & a[1][x];
    }

    // Rho-east.
    for lane in a[1].iter_mut() {
        *lane = lane.rotate_left(1);
    }
    a[2].rotate_left(2);
    for lane in a[2].iter_mut() {
        *lane = lane.rotate_left(8);
    }
}

impl Permutation for Xoodoo {
    const WIDTH: usize = 48;
    const ROUNDS: usize = ROUNDS;

    #[inline(always)]
    fn new() -> Self {
        Self([0; 48])
    }

    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    fn permute_rounds(&mut self, rounds: usize) {
        let mut a: Planes =
            core::array::from_fn(|y| Endian::Little.load_words(&self.0[16 * y..16 * (y + 1)]));

        for &rc in &ROUND_CONSTANTS[ROUNDS - rounds.min(ROUNDS)..] {
            round(&mut a, rc);
        }

        for (plane, out) in a.iter().zip(self.0.chunks_exact_mut(16)) {
            Endian::Little.store_words(plane, out);
        }
        a.zeroize();
    }
}
