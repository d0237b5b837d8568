//! # Primitive transforms
//!
//! Permutations and block ciphers the modes are built from. Each primitive is a fixed
//! mathematical transform with no failure path: key sizes are enforced by the types, so nothing
//! here returns a `Result`.
//!
//! Permutation states are kept as byte arrays and unpacked into words in the primitive's own
//! byte order at the start of every call, so the modes can XOR data into the rate without caring
//! about word layout.

use zeroize::Zeroize;

mod cham;
mod chacha20;
mod gascon;
mod poly1305;
mod saturnin;
mod skinny128;
mod sliscp_light;
mod speck64;
mod xoodoo;

pub use cham::{Cham64, Cham128};
pub use chacha20::ChaCha20;
pub use gascon::Gascon;
pub use poly1305::Poly1305;
pub use saturnin::{Saturnin, SaturninDomain};
pub use skinny128::{Skinny128_128, Skinny128_256, Skinny128_384};
pub use sliscp_light::SliscpLight320;
pub use speck64::Speck64;
pub use xoodoo::Xoodoo;

/// A fixed-width permutation over a byte state.
pub trait Permutation: Clone + Zeroize {
    /// State size in bytes.
    const WIDTH: usize;

    /// Round count of the full permutation.
    const ROUNDS: usize;

    /// All-zero state.
    fn new() -> Self;

    /// The state as bytes.
    fn as_bytes(&self) -> &[u8];

    /// The state as mutable bytes.
    fn as_bytes_mut(&mut self) -> &mut [u8];

    /// Run the last `rounds` rounds of the permutation.
    ///
    /// `rounds` is clamped to [`Self::ROUNDS`].
    fn permute_rounds(&mut self, rounds: usize);

    /// Run the full permutation.
    #[inline]
    fn permute(&mut self) {
        self.permute_rounds(Self::ROUNDS);
    }
}

/// Forward direction of a block cipher.
pub trait BlockCipher: Sized {
    /// Key (or full tweakey) material.
    type Key;

    /// One block.
    type Block: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// Expand the key schedule.
    fn new(key: &Self::Key) -> Self;

    /// Encrypt one block in place.
    fn encrypt_block(&self, block: &mut Self::Block);
}

/// Inverse direction of a block cipher.
pub trait BlockDecrypt: BlockCipher {
    /// Decrypt one block in place.
    fn decrypt_block(&self, block: &mut Self::Block);
}

#[cfg(test)]
pub(crate) fn hex_block<const N: usize>(hex_str: &str) -> [u8; N] {
    let bytes = hex::decode(hex_str).expect("valid hex");
    bytes.try_into().expect("length matches")
}
