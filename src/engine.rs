//! # AEAD mode engine
//!
//! Every family implements [`AeadFamily`] by supplying two raw operations: `seal` encrypts a
//! buffer in place and returns the tag, `unseal` decrypts a buffer in place and returns the tag
//! it expects. Everything a caller touches is built on top of those two in this trait's
//! provided methods: key and nonce length checks, processing ceilings, the constant-time tag
//! check that wipes the plaintext, and the combined `ciphertext || tag` layout.
//!
//! The sponge families drive a [`Duplex`] with one [`DuplexPhase`] per phase; the
//! stream-then-MAC families implement [`StreamMac`] and use [`stream::seal`] and
//! [`stream::unseal`].
//!
//! ```
//! use lwc_aead::{AeadFamily, Gascon128};
//!
//! let key = [0x11; 16];
//! let nonce = [0x22; 16];
//! let mut buffer = *b"attack at dawn";
//!
//! let tag = Gascon128::encrypt_in_place(&key, &nonce, b"header", &mut buffer).unwrap();
//! Gascon128::decrypt_in_place(&key, &nonce, b"header", &mut buffer, &tag).unwrap();
//! assert_eq!(&buffer, b"attack at dawn");
//! ```

use crate::ct;
use crate::error::{Error, InvalidParameter, Result};
use aead::generic_array::ArrayLength;
use aead::generic_array::typenum::Unsigned;
use log::debug;
use zeroize::{Zeroize, Zeroizing};

mod duplex;
pub mod stream;

pub use duplex::{Data, DomainInjection, Duplex, DuplexPhase, PermuteOrder};
pub use stream::StreamMac;

/// One AEAD algorithm.
///
/// Implementors provide the raw `seal`/`unseal` transforms; callers use the provided methods,
/// which validate every length first and never release unauthenticated plaintext.
pub trait AeadFamily {
    /// Algorithm name as used by the reference suite.
    const ALGORITHM: &'static str;

    /// Key bytes.
    type Key: for<'a> TryFrom<&'a [u8]> + AsRef<[u8]> + Zeroize;

    /// Nonce bytes.
    type Nonce: for<'a> TryFrom<&'a [u8]> + AsRef<[u8]>;

    /// Authentication tag bytes.
    type Tag: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// Key length for the RustCrypto adapter.
    type KeySize: ArrayLength<u8>;

    /// Nonce length for the RustCrypto adapter.
    type NonceSize: ArrayLength<u8>;

    /// Tag length for the RustCrypto adapter.
    type TagSize: ArrayLength<u8>;

    /// Largest associated data accepted, in bytes.
    const MAX_AD_LEN: u64 = u64::MAX;

    /// Largest message accepted, in bytes.
    const MAX_MESSAGE_LEN: u64 = u64::MAX;

    /// Key length in bytes.
    const KEY_LEN: usize = <Self::KeySize as Unsigned>::USIZE;

    /// Nonce length in bytes.
    const NONCE_LEN: usize = <Self::NonceSize as Unsigned>::USIZE;

    /// Tag length in bytes.
    const TAG_LEN: usize = <Self::TagSize as Unsigned>::USIZE;

    /// Encrypt `buffer` in place and return the tag. Lengths are already validated.
    fn seal(key: &Self::Key, nonce: &Self::Nonce, ad: &[u8], buffer: &mut [u8]) -> Self::Tag;

    /// Decrypt `buffer` in place and return the expected tag. Lengths are already validated.
    fn unseal(key: &Self::Key, nonce: &Self::Nonce, ad: &[u8], buffer: &mut [u8]) -> Self::Tag;

    /// Reject inputs beyond the family's ceilings.
    fn check_lengths(ad_len: usize, message_len: usize) -> Result<()> {
        if ad_len as u64 > Self::MAX_AD_LEN {
            debug!("{}: associated data of {} bytes over the limit", Self::ALGORITHM, ad_len);
            return Err(InvalidParameter::AssociatedDataTooLong.into());
        }
        if message_len as u64 > Self::MAX_MESSAGE_LEN {
            debug!("{}: message of {} bytes over the limit", Self::ALGORITHM, message_len);
            return Err(InvalidParameter::MessageTooLong.into());
        }
        Ok(())
    }

    /// Encrypt `buffer` in place and return the detached tag.
    fn encrypt_in_place(
        key: &Self::Key,
        nonce: &Self::Nonce,
        ad: &[u8],
        buffer: &mut [u8],
    ) -> Result<Self::Tag> {
        Self::check_lengths(ad.len(), buffer.len())?;
        Ok(Self::seal(key, nonce, ad, buffer))
    }

    /// Decrypt `buffer` in place and check `tag`.
    ///
    /// On [`Error::AuthenticationFailure`] the whole buffer has been zeroed.
    fn decrypt_in_place(
        key: &Self::Key,
        nonce: &Self::Nonce,
        ad: &[u8],
        buffer: &mut [u8],
        tag: &Self::Tag,
    ) -> Result<()> {
        Self::check_lengths(ad.len(), buffer.len())?;
        let expected = Self::unseal(key, nonce, ad, buffer);
        ct::verify(expected.as_ref(), tag.as_ref(), buffer).inspect_err(|_| {
            debug!(
                "{}: authentication failed ({} bytes of associated data, {} bytes of message)",
                Self::ALGORITHM,
                ad.len(),
                buffer.len()
            );
        })
    }

    /// Slice-based [`encrypt_in_place`](Self::encrypt_in_place) writing the tag into `tag_out`.
    fn encrypt_detached(
        key: &[u8],
        nonce: &[u8],
        ad: &[u8],
        buffer: &mut [u8],
        tag_out: &mut [u8],
    ) -> Result<()> {
        let key = parse_key::<Self>(key)?;
        let nonce = parse_nonce::<Self>(nonce)?;
        if tag_out.len() != Self::TAG_LEN {
            debug!("{}: tag buffer of {} bytes", Self::ALGORITHM, tag_out.len());
            return Err(InvalidParameter::TagLength.into());
        }

        let tag = Self::encrypt_in_place(&key, &nonce, ad, buffer)?;
        tag_out.copy_from_slice(tag.as_ref());
        Ok(())
    }

    /// Slice-based [`decrypt_in_place`](Self::decrypt_in_place).
    fn decrypt_detached(
        key: &[u8],
        nonce: &[u8],
        ad: &[u8],
        buffer: &mut [u8],
        tag: &[u8],
    ) -> Result<()> {
        let key = parse_key::<Self>(key)?;
        let nonce = parse_nonce::<Self>(nonce)?;
        if tag.len() != Self::TAG_LEN {
            debug!("{}: tag of {} bytes", Self::ALGORITHM, tag.len());
            return Err(InvalidParameter::TagLength.into());
        }

        let mut expected = Self::Tag::default();
        expected.as_mut().copy_from_slice(tag);
        Self::decrypt_in_place(&key, &nonce, ad, buffer, &expected)
    }

    /// Encrypt `plaintext` into `out` as `ciphertext || tag`, returning the bytes written.
    fn encrypt(
        key: &[u8],
        nonce: &[u8],
        ad: &[u8],
        plaintext: &[u8],
        out: &mut [u8],
    ) -> Result<usize> {
        let total = plaintext.len() + Self::TAG_LEN;
        if out.len() < total {
            debug!("{}: output of {} bytes, need {}", Self::ALGORITHM, out.len(), total);
            return Err(InvalidParameter::BufferTooSmall.into());
        }

        let (body, tag) = out[..total].split_at_mut(plaintext.len());
        body.copy_from_slice(plaintext);
        Self::encrypt_detached(key, nonce, ad, body, tag)?;
        Ok(total)
    }

    /// Decrypt `ciphertext || tag` into `out`, returning the plaintext length.
    ///
    /// On [`Error::AuthenticationFailure`] the plaintext region of `out` is zeroed.
    fn decrypt(
        key: &[u8],
        nonce: &[u8],
        ad: &[u8],
        ciphertext_and_tag: &[u8],
        out: &mut [u8],
    ) -> Result<usize> {
        let Some(message_len) = ciphertext_and_tag.len().checked_sub(Self::TAG_LEN) else {
            debug!(
                "{}: input of {} bytes is shorter than a tag",
                Self::ALGORITHM,
                ciphertext_and_tag.len()
            );
            return Err(InvalidParameter::BufferTooSmall.into());
        };
        if out.len() < message_len {
            debug!("{}: output of {} bytes, need {}", Self::ALGORITHM, out.len(), message_len);
            return Err(InvalidParameter::BufferTooSmall.into());
        }

        let (ciphertext, tag) = ciphertext_and_tag.split_at(message_len);
        let body = &mut out[..message_len];
        body.copy_from_slice(ciphertext);
        Self::decrypt_detached(key, nonce, ad, body, tag)?;
        Ok(message_len)
    }
}

/// Copy a key slice into the family's key type, wiped on drop.
fn parse_key<F: AeadFamily + ?Sized>(key: &[u8]) -> Result<Zeroizing<F::Key>> {
    F::Key::try_from(key).map(Zeroizing::new).map_err(|_| {
        debug!("{}: key of {} bytes, expected {}", F::ALGORITHM, key.len(), F::KEY_LEN);
        Error::from(InvalidParameter::KeyLength)
    })
}

fn parse_nonce<F: AeadFamily + ?Sized>(nonce: &[u8]) -> Result<F::Nonce> {
    F::Nonce::try_from(nonce).map_err(|_| {
        debug!("{}: nonce of {} bytes, expected {}", F::ALGORITHM, nonce.len(), F::NONCE_LEN);
        Error::from(InvalidParameter::NonceLength)
    })
}

#[cfg(test)]
mod tests;
