//! SATURNIN-256, the block cipher under the SATURNIN AEAD and hash modes.
//!
//! The 256-bit state is held bit-sliced as eight 32-bit words: word `i` packs bytes `2i, 2i+1`
//! into its low half and bytes `2i+16, 2i+17` into its high half. Every mode call selects a
//! [`SaturninDomain`], which fixes both the round count and the round constants.

use zeroize::{Zeroize, ZeroizeOnDrop};

const RC_10_1: [u32; 10] = [
    0x4eb026c2, 0x90595303, 0xaa8fe632, 0xfe928a92, 0x4115a419, 0x93539532, 0x5db1cc4e, 0x541515ca,
    0xbd1f55a8, 0x5a6e1a0d,
];
const RC_10_2: [u32; 10] = [
    0x4e4526b5, 0xa3565ff0, 0x0f8f20d8, 0x0b54bee1, 0x7d1a6c9d, 0x17a6280a, 0xaa46c986, 0xc1199062,
    0x182c5cde, 0xa00d53fe,
];
const RC_10_3: [u32; 10] = [
    0x4e162698, 0xb2535ba1, 0x6c8f9d65, 0x5816ad30, 0x691fd4fa, 0x6bf5bcf9, 0xf8eb3525, 0xb21decfa,
    0x7b3da417, 0xf62c94b4,
];
const RC_10_4: [u32; 10] = [
    0x4faf265b, 0xc5484616, 0x45dcad21, 0xe08bd607, 0x0504fdb8, 0x1e1f5257, 0x45fbc216, 0xeb529b1f,
    0x52194e32, 0x5498c018,
];
const RC_10_5: [u32; 10] = [
    0x4ffc2676, 0xd44d4247, 0x26dc109c, 0xb3c9c5d6, 0x110145df, 0x624cc6a4, 0x17563eb5, 0x9856e787,
    0x3108b6fb, 0x02b90752,
];
const RC_10_6: [u32; 10] = [
    0x4f092601, 0xe7424eb4, 0x83dcd676, 0x460ff1a5, 0x2d0e8d5b, 0xe6b97b9c, 0xe0a13b7d, 0x0d5a622f,
    0x943bbf8d, 0xf8da4ea1,
];
const RC_16_7: [u32; 16] = [
    0x3fba180c, 0x563ab9ab, 0x125ea5ef, 0x859da26c, 0xb8cf779b, 0x7d4de793, 0x07efb49f, 0x8d525306,
    0x1e08e6ab, 0x41729f87, 0x8c4aef0a, 0x4aa0c9a7, 0xd93a95ef, 0xbb00d2af, 0xb62c5bf0, 0x386d94d8,
];
const RC_16_8: [u32; 16] = [
    0x3c9b19a7, 0xa9098694, 0x23f878da, 0xa7b647d3, 0x74fc9d78, 0xeacaae11, 0x2f31a677, 0x4cc8c054,
    0x2f51ca05, 0x5268f195, 0x4f5b8a2b, 0xf614b4ac, 0xf1d95401, 0x764d2568, 0x6a493611, 0x8eef9c3e,
];

/// Domain separator: selects rounds and round constants for one use of the cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturninDomain {
    /// Counter-mode keystream blocks.
    Keystream,
    /// Nonce block and full associated data blocks.
    AssociatedData,
    /// Final padded associated data block.
    AssociatedDataLast,
    /// Full ciphertext blocks.
    Ciphertext,
    /// Final padded ciphertext block.
    CiphertextLast,
    /// The single block of SATURNIN-Short.
    Short,
    /// Full hash input blocks.
    Hash,
    /// Final padded hash input block.
    HashLast,
}

impl SaturninDomain {
    /// Round constants, two per double round.
    fn constants(self) -> &'static [u32] {
        match self {
            SaturninDomain::Keystream => &RC_10_1,
            SaturninDomain::AssociatedData => &RC_10_2,
            SaturninDomain::AssociatedDataLast => &RC_10_3,
            SaturninDomain::Ciphertext => &RC_10_4,
            SaturninDomain::CiphertextLast => &RC_10_5,
            SaturninDomain::Short => &RC_10_6,
            SaturninDomain::Hash => &RC_16_7,
            SaturninDomain::HashLast => &RC_16_8,
        }
    }

    /// Number of rounds run in this domain.
    pub fn rounds(self) -> usize {
        self.constants().len()
    }
}

type State = [u32; 8];

#[inline(always)]
fn load(bytes: &[u8; 32]) -> State {
    core::array::from_fn(|i| {
        u32::from(bytes[2 * i])
            | (u32::from(bytes[2 * i + 1]) << 8)
            | (u32::from(bytes[2 * i + 16]) << 16)
            | (u32::from(bytes[2 * i + 17]) << 24)
    })
}

#[inline(always)]
fn store(state: &State, bytes: &mut [u8; 32]) {
    for (i, word) in state.iter().enumerate() {
        let [b0, b1, b2, b3] = word.to_le_bytes();
        bytes[2 * i] = b0;
        bytes[2 * i + 1] = b1;
        bytes[2 * i + 16] = b2;
        bytes[2 * i + 17] = b3;
    }
}

#[inline(always)]
fn xor_key(state: &mut State, key: &[u32]) {
    for (s, k) in state.iter_mut().zip(key) {
        *s ^= k;
    }
}

#[inline(always)]
fn s_layer(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32) {
    *a ^= *b & *c;
    *b ^= *a | *d;
    *d ^= *b | *c;
    *c ^= *b & *d;
    *b ^= *a | *c;
    *a ^= *b | *d;
}

#[inline(always)]
fn s_layer_inv(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32) {
    *a ^= *b | *d;
    *b ^= *a | *c;
    *c ^= *b & *d;
    *d ^= *b | *c;
    *b ^= *a | *d;
    *a ^= *b & *c;
}

fn sbox(s: &mut State) {
    let [mut a, mut b, mut c, mut d] = [s[0], s[1], s[2], s[3]];
    s_layer(&mut a, &mut b, &mut c, &mut d);
    s[..4].copy_from_slice(&[b, c, d, a]);

    let [mut a, mut b, mut c, mut d] = [s[4], s[5], s[6], s[7]];
    s_layer(&mut a, &mut b, &mut c, &mut d);
    s[4..].copy_from_slice(&[d, b, a, c]);
}

fn sbox_inv(s: &mut State) {
    let [mut b, mut c, mut d, mut a] = [s[0], s[1], s[2], s[3]];
    s_layer_inv(&mut a, &mut b, &mut c, &mut d);
    s[..4].copy_from_slice(&[a, b, c, d]);

    let [mut d, mut b, mut a, mut c] = [s[4], s[5], s[6], s[7]];
    s_layer_inv(&mut a, &mut b, &mut c, &mut d);
    s[4..].copy_from_slice(&[a, b, c, d]);
}

/// Multiply a column group by alpha.
#[inline(always)]
fn mul(x: &mut [u32]) {
    x.rotate_left(1);
    x[3] ^= x[0];
}

#[inline(always)]
fn mul_inv(x: &mut [u32]) {
    x.rotate_right(1);
    x[0] ^= x[1];
}

/// XOR the half-swapped words of `src` into `dst`.
#[inline(always)]
fn xor_swapped(dst: &mut [u32], src: &[u32]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s.rotate_left(16);
    }
}

fn mds(s: &mut State) {
    let (lo, hi) = s.split_at_mut(4);
    for (l, h) in lo.iter_mut().zip(hi.iter()) {
        *l ^= h;
    }
    mul(hi);
    xor_swapped(hi, lo);
    mul(lo);
    mul(lo);
    for (l, h) in lo.iter_mut().zip(hi.iter()) {
        *l ^= h;
    }
    xor_swapped(hi, lo);
}

fn mds_inv(s: &mut State) {
    let (lo, hi) = s.split_at_mut(4);
    xor_swapped(hi, lo);
    for (l, h) in lo.iter_mut().zip(hi.iter()) {
        *l ^= h;
    }
    mul_inv(lo);
    mul_inv(lo);
    xor_swapped(hi, lo);
    mul_inv(hi);
    for (l, h) in lo.iter_mut().zip(hi.iter()) {
        *l ^= h;
    }
}

/// Rotate the `width`-bit fields of each 16-bit half left, by `lo_bits` in the low half and
/// `hi_bits` in the high half. `lo_mask`/`hi_mask` select the bits that do not wrap.
#[inline(always)]
fn rotate_fields(a: u32, width: u32, lo_mask: u32, lo_bits: u32, hi_mask: u32, hi_bits: u32) -> u32 {
    let hi_mask = hi_mask << 16;
    ((a & lo_mask) << lo_bits)
        | ((a & (lo_mask ^ 0xffff)) >> ((width - lo_bits) % width))
        | ((a & hi_mask) << hi_bits)
        | ((a & (hi_mask ^ 0xffff_0000)) >> (width - hi_bits))
}

fn slice(s: &mut State) {
    for word in &mut s[..4] {
        *word = rotate_fields(*word, 4, 0xffff, 0, 0x3333, 2);
    }
    for word in &mut s[4..] {
        *word = rotate_fields(*word, 4, 0x7777, 1, 0x1111, 3);
    }
}

fn slice_inv(s: &mut State) {
    for word in &mut s[..4] {
        *word = rotate_fields(*word, 4, 0xffff, 0, 0x3333, 2);
    }
    for word in &mut s[4..] {
        *word = rotate_fields(*word, 4, 0x1111, 3, 0x7777, 1);
    }
}

fn sheet(s: &mut State) {
    for word in &mut s[..4] {
        *word = rotate_fields(*word, 16, 0xffff, 0, 0x00ff, 8);
    }
    for word in &mut s[4..] {
        *word = rotate_fields(*word, 16, 0x0fff, 4, 0x000f, 12);
    }
}

fn sheet_inv(s: &mut State) {
    for word in &mut s[..4] {
        *word = rotate_fields(*word, 16, 0xffff, 0, 0x00ff, 8);
    }
    for word in &mut s[4..] {
        *word = rotate_fields(*word, 16, 0x000f, 12, 0x0fff, 4);
    }
}

/// SATURNIN-256 keyed with a 32-byte key.
///
/// The second half of the schedule holds the key with every 16-bit half rotated right by 5.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Saturnin {
    key: [u32; 16],
}

impl Saturnin {
    /// Expand `key`.
    pub fn new(key: &[u8; 32]) -> Self {
        let mut words = load(key);
        let mut schedule = [0u32; 16];
        for (i, &k) in words.iter().enumerate() {
            schedule[i] = k;
            schedule[8 + i] = ((k & 0x001f_001f) << 11) | ((k >> 5) & 0x07ff_07ff);
        }
        words.zeroize();
        Self { key: schedule }
    }

    /// Encrypt one block in place.
    pub fn encrypt_block(&self, domain: SaturninDomain, block: &mut [u8; 32]) {
        let (key, rotated) = self.key.split_at(8);
        let mut s = load(block);

        xor_key(&mut s, key);
        for rc in domain.constants().chunks_exact(2) {
            sbox(&mut s);
            mds(&mut s);
            sbox(&mut s);
            slice(&mut s);
            mds(&mut s);
            slice_inv(&mut s);
            s[0] ^= rc[0];
            xor_key(&mut s, rotated);

            sbox(&mut s);
            mds(&mut s);
            sbox(&mut s);
            sheet(&mut s);
            mds(&mut s);
            sheet_inv(&mut s);
            s[0] ^= rc[1];
            xor_key(&mut s, key);
        }

        store(&s, block);
        s.zeroize();
    }

    /// Decrypt one block in place.
    pub fn decrypt_block(&self, domain: SaturninDomain, block: &mut [u8; 32]) {
        let (key, rotated) = self.key.split_at(8);
        let mut s = load(block);

        for rc in domain.constants().rchunks_exact(2) {
            xor_key(&mut s, key);
            s[0] ^= rc[1];
            sheet(&mut s);
            mds_inv(&mut s);
            sheet_inv(&mut s);
            sbox_inv(&mut s);
            mds_inv(&mut s);
            sbox_inv(&mut s);

            xor_key(&mut s, rotated);
            s[0] ^= rc[0];
            slice(&mut s);
            mds_inv(&mut s);
            slice_inv(&mut s);
            sbox_inv(&mut s);
            mds_inv(&mut s);
            sbox_inv(&mut s);
        }
        xor_key(&mut s, key);

        store(&s, block);
        s.zeroize();
    }

    /// Cascade step: `key <- E_key(block) ^ block`.
    pub fn encrypt_xor(domain: SaturninDomain, block: &[u8; 32], key: &mut [u8; 32]) {
        let mut out = *block;
        Saturnin::new(key).encrypt_block(domain, &mut out);
        for ((k, o), b) in key.iter_mut().zip(&out).zip(block) {
            *k = o ^ b;
        }
        out.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::hex_block;

    #[test]
    fn test_saturnin() {
        let cipher = Saturnin::new(&hex_block(
            "4479650b43a04bc09dae858bd2d9701c9fb6fb15b60b47ceb392f9b23d728d1e",
        ));
        let plaintext: [u8; 32] =
            hex_block("11913867484e4b8ea759f19dbcf4241b0f659d00a88a41bab6780f9a57d79492");
        let mut block = plaintext;
        cipher.encrypt_block(SaturninDomain::AssociatedDataLast, &mut block);
        assert_eq!(
            block,
            hex_block::<32>("a87c318db5668e840ebd66b9720a781db4060712b2e6945de067acf491f6bafd")
        );
        cipher.decrypt_block(SaturninDomain::AssociatedDataLast, &mut block);
        assert_eq!(block, plaintext);
    }

    #[test]
    fn domains_round_trip_and_differ() {
        let cipher = Saturnin::new(&core::array::from_fn(|i| i as u8));
        let domains = [
            SaturninDomain::Keystream,
            SaturninDomain::AssociatedData,
            SaturninDomain::AssociatedDataLast,
            SaturninDomain::Ciphertext,
            SaturninDomain::CiphertextLast,
            SaturninDomain::Short,
            SaturninDomain::Hash,
            SaturninDomain::HashLast,
        ];
        let mut outputs = [[0u8; 32]; 8];
        for (domain, out) in domains.iter().zip(outputs.iter_mut()) {
            cipher.encrypt_block(*domain, out);
            let mut back = *out;
            cipher.decrypt_block(*domain, &mut back);
            assert_eq!(back, [0u8; 32]);
        }
        for i in 0..outputs.len() {
            for j in i + 1..outputs.len() {
                assert_ne!(outputs[i], outputs[j]);
            }
        }
        assert_eq!(SaturninDomain::Hash.rounds(), 16);
        assert_eq!(SaturninDomain::Short.rounds(), 10);
    }

    #[test]
    fn mds_inverse() {
        let mut s: State = core::array::from_fn(|i| 0x0123_4567u32.rotate_left(i as u32 * 5));
        let before = s;
        mds(&mut s);
        mds_inv(&mut s);
        assert_eq!(s, before);
    }
}
