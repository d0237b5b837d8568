//! Poly1305 one-time authenticator over 26-bit limbs.
//!
//! The AEAD construction only ever feeds zero-padded 16-byte blocks through
//! [`Poly1305::update_padded`]. [`Poly1305::finalize_unpadded`] closes a raw message the plain
//! MAC way, with a `0x01` byte after a short final block.

use crate::endian::Endian;
use zeroize::{Zeroize, ZeroizeOnDrop};

const BLOCK: usize = 16;

/// The `2^128` bit added to every full block, in the top limb.
const HIBIT: u32 = 1 << 24;

/// Poly1305 state keyed with a one-time `r || s` key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Poly1305 {
    r: [u32; 5],
    h: [u32; 5],
    pad: [u32; 4],
}

impl Poly1305 {
    /// Clamp `r` and load the key.
    pub fn new(key: &[u8; 32]) -> Self {
        let load = |offset: usize| Endian::Little.load_u32(&key[offset..]);
        let r = [
            load(0) & 0x03ff_ffff,
            (load(3) >> 2) & 0x03ff_ff03,
            (load(6) >> 4) & 0x03ff_c0ff,
            (load(9) >> 6) & 0x03f0_3fff,
            (load(12) >> 8) & 0x000f_ffff,
        ];
        Self {
            r,
            h: [0; 5],
            pad: Endian::Little.load_words(&key[16..]),
        }
    }

    fn block(&mut self, block: &[u8; BLOCK], hibit: u32) {
        let [r0, r1, r2, r3, r4] = self.r.map(u64::from);
        let (s1, s2, s3, s4) = (r1 * 5, r2 * 5, r3 * 5, r4 * 5);

        let load = |offset: usize| Endian::Little.load_u32(&block[offset..]);
        let mut h = self.h.map(u64::from);
        h[0] += u64::from(load(0) & 0x03ff_ffff);
        h[1] += u64::from((load(3) >> 2) & 0x03ff_ffff);
        h[2] += u64::from((load(6) >> 4) & 0x03ff_ffff);
        h[3] += u64::from((load(9) >> 6) & 0x03ff_ffff);
        h[4] += u64::from((load(12) >> 8) | hibit);

        let d0 = h[0] * r0 + h[1] * s4 + h[2] * s3 + h[3] * s2 + h[4] * s1;
        let mut d1 = h[0] * r1 + h[1] * r0 + h[2] * s4 + h[3] * s3 + h[4] * s2;
        let mut d2 = h[0] * r2 + h[1] * r1 + h[2] * r0 + h[3] * s4 + h[4] * s3;
        let mut d3 = h[0] * r3 + h[1] * r2 + h[2] * r1 + h[3] * r0 + h[4] * s4;
        let mut d4 = h[0] * r4 + h[1] * r3 + h[2] * r2 + h[3] * r1 + h[4] * r0;

        let mut c = d0 >> 26;
        let mut h0 = d0 & 0x03ff_ffff;
        d1 += c;
        c = d1 >> 26;
        let h1 = d1 & 0x03ff_ffff;
        d2 += c;
        c = d2 >> 26;
        let h2 = d2 & 0x03ff_ffff;
        d3 += c;
        c = d3 >> 26;
        let h3 = d3 & 0x03ff_ffff;
        d4 += c;
        c = d4 >> 26;
        let h4 = d4 & 0x03ff_ffff;
        h0 += c * 5;
        c = h0 >> 26;
        h0 &= 0x03ff_ffff;

        self.h = [h0 as u32, (h1 + c) as u32, h2 as u32, h3 as u32, h4 as u32];
    }

    /// Absorb `data`, zero-padding the final partial block to 16 bytes.
    pub fn update_padded(&mut self, data: &[u8]) {
        let mut chunks = data.chunks_exact(BLOCK);
        for chunk in &mut chunks {
            let mut block = [0u8; BLOCK];
            block.copy_from_slice(chunk);
            self.block(&block, HIBIT);
        }

        let rest = chunks.remainder();
        if !rest.is_empty() {
            let mut block = [0u8; BLOCK];
            block[..rest.len()].copy_from_slice(rest);
            self.block(&block, HIBIT);
            block.zeroize();
        }
    }

    /// Absorb the end of a raw message and produce the tag.
    ///
    /// Full blocks are absorbed as usual; a short final block gets a `0x01` byte appended and no
    /// `2^128` bit.
    pub fn finalize_unpadded(&mut self, data: &[u8]) -> [u8; 16] {
        let mut chunks = data.chunks_exact(BLOCK);
        for chunk in &mut chunks {
            let mut block = [0u8; BLOCK];
            block.copy_from_slice(chunk);
            self.block(&block, HIBIT);
        }

        let rest = chunks.remainder();
        if !rest.is_empty() {
            let mut block = [0u8; BLOCK];
            block[..rest.len()].copy_from_slice(rest);
            block[rest.len()] = 0x01;
            self.block(&block, 0);
            block.zeroize();
        }
        self.finalize()
    }

    /// Fully reduce the accumulator and add the `s` half of the key. The state is wiped.
    pub fn finalize(&mut self) -> [u8; 16] {
        let [mut h0, mut h1, mut h2, mut h3, mut h4] = self.h;

        let mut c = h1 >> 26;
        h1 &= 0x03ff_ffff;
        h2 += c;
        c = h2 >> 26;
        h2 &= 0x03ff_ffff;
        h3 += c;
        c = h3 >> 26;
        h3 &= 0x03ff_ffff;
        h4 += c;
        c = h4 >> 26;
        h4 &= 0x03ff_ffff;
        h0 += c * 5;
        c = h0 >> 26;
        h0 &= 0x03ff_ffff;
        h1 += c;

        // g = h + 5 - 2^130, selected in constant time when it does not borrow.
        let mut g0 = h0.wrapping_add(5);
        c = g0 >> 26;
        g0 &= 0x03ff_ffff;
        let mut g1 = h1.wrapping_add(c);
        c = g1 >> 26;
        g1 &= 0x03ff_ffff;
        let mut g2 = h2.wrapping_add(c);
        c = g2 >> 26;
        g2 &= 0x03ff_ffff;
        let mut g3 = h3.wrapping_add(c);
        c = g3 >> 26;
        g3 &= 0x03ff_ffff;
        let g4 = h4.wrapping_add(c).wrapping_sub(1 << 26);

        let mask = (g4 >> 31).wrapping_sub(1);
        let select = |h: u32, g: u32| (h & !mask) | (g & mask);
        h0 = select(h0, g0);
        h1 = select(h1, g1);
        h2 = select(h2, g2);
        h3 = select(h3, g3);
        h4 = select(h4, g4);

        let words = [
            h0 | (h1 << 26),
            (h1 >> 6) | (h2 << 20),
            (h2 >> 12) | (h3 << 14),
            (h3 >> 18) | (h4 << 8),
        ];

        let mut tag = [0u8; 16];
        let mut carry = 0u64;
        for ((word, pad), out) in words.iter().zip(self.pad).zip(tag.chunks_exact_mut(4)) {
            carry += u64::from(*word) + u64::from(pad);
            Endian::Little.store_u32(carry as u32, out);
            carry >>= 32;
        }

        self.zeroize();
        tag
    }
}
