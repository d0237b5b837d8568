//! sLiSCP-light-320, the permutation under ACE.
//!
//! The state is kept in the "pre-swapped" byte order: bytes 4..8 and 16..20 trade places so that
//! the 8 rate bytes sit contiguously at the front. [`SliscpLight320::swap`] converts between this
//! layout and the canonical one.

use super::Permutation;
use crate::endian::Endian;
use zeroize::{Zeroize, ZeroizeOnDrop};

const STEPS: usize = 16;

/// Interleaved `rc0, rc1, rc2, sc0, sc1, sc2` for each step.
const ROUND_CONSTANTS: [u8; STEPS * 6] = [
    0x07, 0x53, 0x43, 0x50, 0x28, 0x14, 0x0a, 0x5d, 0xe4, 0x5c, 0xae, 0x57, 0x9b, 0x49, 0x5e, 0x91,
    0x48, 0x24, 0xe0, 0x7f, 0xcc, 0x8d, 0xc6, 0x63, 0xd1, 0xbe, 0x32, 0x53, 0xa9, 0x54, 0x1a, 0x1d,
    0x4e, 0x60, 0x30, 0x18, 0x22, 0x28, 0x75, 0x68, 0x34, 0x9a, 0xf7, 0x6c, 0x25, 0xe1, 0x70, 0x38,
    0x62, 0x82, 0xfd, 0xf6, 0x7b, 0xbd, 0x96, 0x47, 0xf9, 0x9d, 0xce, 0x67, 0x71, 0x6b, 0x76, 0x40,
    0x20, 0x10, 0xaa, 0x88, 0xa0, 0x4f, 0x27, 0x13, 0x2b, 0xdc, 0xb0, 0xbe, 0x5f, 0x2f, 0xe9, 0x8b,
    0x09, 0x5b, 0xad, 0xd6, 0xcf, 0x59, 0x1e, 0xe9, 0x74, 0xba, 0xb7, 0xc6, 0xad, 0x7f, 0x3f, 0x1f,
];

/// Byte offset of each 32-bit word `x0..x9` in the pre-swapped layout.
const WORD_OFFSETS: [usize; 10] = [0, 16, 8, 12, 4, 20, 24, 28, 32, 36];

/// sLiSCP-light-320 state (40 bytes, big-endian words, pre-swapped).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SliscpLight320([u8; 40]);

impl SliscpLight320 {
    /// Exchange bytes 4..8 with 16..20, converting to or from the canonical layout.
    #[inline]
    pub fn swap(&mut self) {
        let (head, tail) = self.0.split_at_mut(16);
        head[4..8].swap_with_slice(&mut tail[..4]);
    }
}

/// Eight rounds of Simeck-64 on the pair `(x, y)`.
#[inline(always)]
fn simeck64_box(x: &mut u32, y: &mut u32, mut rc: u8) {
    for _ in 0..4 {
        *y ^= (x.rotate_left(5) & *x) ^ x.rotate_left(1) ^ 0xffff_fffe ^ (rc & 1) as u32;
        rc >>= 1;
        *x ^= (y.rotate_left(5) & *y) ^ y.rotate_left(1) ^ 0xffff_fffe ^ (rc & 1) as u32;
        rc >>= 1;
    }
}

impl Permutation for SliscpLight320 {
    const WIDTH: usize = 40;
    const ROUNDS: usize = STEPS;

    #[inline(always)]
    fn new() -> Self {
        Self([0; 40])
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
        let mut x: [u32; 10] =
            core::array::from_fn(|i| Endian::Big.load_u32(&self.0[WORD_OFFSETS[i]..]));

        let first = STEPS - rounds.min(STEPS);
        for rc in ROUND_CONSTANTS[6 * first..].chunks_exact(6) {
            let [x0, x1, x2, x3, x4, x5, x6, x7, x8, x9] = &mut x;

            simeck64_box(x0, x1, rc[0]);
            simeck64_box(x4, x5, rc[1]);
            simeck64_box(x8, x9, rc[2]);
            *x6 ^= *x8;
            *x7 ^= *x9;
            *x2 ^= *x4;
            *x3 ^= *x5;
            *x8 ^= *x0;
            *x9 ^= *x1;

            // Step constants.
            *x2 ^= 0xffff_ffff;
            *x3 ^= 0xffff_ff00 ^ rc[3] as u32;
            *x6 ^= 0xffff_ffff;
            *x7 ^= 0xffff_ff00 ^ rc[4] as u32;
            *x8 ^= 0xffff_ffff;
            *x9 ^= 0xffff_ff00 ^ rc[5] as u32;

            // Rotate the sub-blocks.
            x = [*x6, *x7, *x4, *x5, *x0, *x1, *x8, *x9, *x2, *x3];
        }

        for (word, offset) in x.iter().zip(WORD_OFFSETS) {
            Endian::Big.store_u32(*word, &mut self.0[offset..]);
        }
        x.zeroize();
    }
}
