//! GASCON-320: the ASCON permutation with bit-interleaved lanes.
//!
//! Each 64-bit lane holds its even bits in the low half and its odd bits in the high half, so
//! every 64-bit rotation becomes a pair of 32-bit rotations.

use super::Permutation;
use crate::endian::Endian;
use zeroize::{Zeroize, ZeroizeOnDrop};

const ROUNDS: usize = 12;

/// GASCON state: 5 little-endian 64-bit lanes (40 bytes).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Gascon([u8; 40]);

/// Right-rotate an interleaved lane by `n` bits of the original 64-bit word.
#[inline(always)]
fn interleaved_rotr(x: u64, n: u32) -> u64 {
    let even = x as u32;
    let odd = (x >> 32) as u32;
    if n % 2 == 0 {
        let half = n / 2;
        (even.rotate_right(half) as u64) | ((odd.rotate_right(half) as u64) << 32)
    } else {
        let half = (n - 1) / 2;
        let even = even.rotate_right(half + 1);
        let odd = odd.rotate_right(half);
        (odd as u64) | ((even as u64) << 32)
    }
}

#[inline(always)]
fn round(x: &mut [u64; 5], round: u64) {
    x[2] ^= ((0x0f - round) << 4) | round;

    // Substitution layer.
    x[0] ^= x[4];
    x[2] ^= x[1];
    x[4] ^= x[3];
    let t: [u64; 5] = core::array::from_fn(|i| !x[i] & x[(i + 1) % 5]);
    for i in 0..5 {
        x[i] ^= t[(i + 1) % 5];
    }
    x[1] ^= x[0];
    x[3] ^= x[2];
    x[0] ^= x[4];
    x[2] = !x[2];

    // Linear diffusion layer.
    x[0] ^= interleaved_rotr(x[0], 19) ^ interleaved_rotr(x[0], 28);
    x[1] ^= interleaved_rotr(x[1], 61) ^ interleaved_rotr(x[1], 38);
    x[2] ^= interleaved_rotr(x[2], 1) ^ interleaved_rotr(x[2], 6);
    x[3] ^= interleaved_rotr(x[3], 10) ^ interleaved_rotr(x[3], 17);
    x[4] ^= interleaved_rotr(x[4], 7) ^ interleaved_rotr(x[4], 40);
}

impl Permutation for Gascon {
    const WIDTH: usize = 40;
    const ROUNDS: usize = ROUNDS;

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
        let first = ROUNDS - rounds.min(ROUNDS);
        let mut x = self.lanes();
        for r in first..ROUNDS {
            round(&mut x, r as u64);
        }
        self.set_lanes(&x);
        x.zeroize();
    }
}

impl Gascon {
    #[inline(always)]
    fn lanes(&self) -> [u64; 5] {
        core::array::from_fn(|i| Endian::Little.load_u64(&self.0[8 * i..]))
    }

    #[inline(always)]
    fn set_lanes(&mut self, x: &[u64; 5]) {
        for (lane, chunk) in x.iter().zip(self.0.chunks_exact_mut(8)) {
            Endian::Little.store_u64(*lane, chunk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::hex_block;

    #[test]
    fn test_gascon_permutation() {
        let mut state = Gascon(core::array::from_fn(|i| i as u8));
        state.permute();

        let expected: [u8; 40] = hex_block(
            "9749ac0de8267fc650f7285fe8f7b8b138856a2fc65bf3d5911221910d186c19\
             217abadd24a982ee",
        );
        assert_eq!(state.0, expected);
    }

    #[test]
    fn partial_rounds_are_a_suffix() {
        let input: [u8; 40] = core::array::from_fn(|i| (i * 7) as u8);

        let mut short = Gascon(input);
        short.permute_rounds(6);

        let mut manual = Gascon(input);
        let mut x = manual.lanes();
        for r in 6..12 {
            round(&mut x, r);
        }
        manual.set_lanes(&x);

        assert_eq!(short.0, manual.0);
    }

    #[test]
    fn interleaved_rotation_matches_definition() {
        // Rotating twice by 1 equals rotating once by 2.
        let x = 0x0123_4567_89ab_cdef;
        assert_eq!(
            interleaved_rotr(interleaved_rotr(x, 1), 1),
            interleaved_rotr(x, 2)
        );
        assert_eq!(
            interleaved_rotr(interleaved_rotr(x, 19), 45),
            x
        );
    }
}
