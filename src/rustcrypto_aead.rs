//! # RustCrypto AEAD trait implementation
//!
//! [`Cipher`] wraps any [`AeadFamily`] in the RustCrypto `aead` traits, so every family can be
//! used wherever a `KeyInit + AeadInPlace` cipher is expected.
//!
//! ```
//! use lwc_aead::{AeadInPlace, Cipher, KeyInit, Xoodyak};
//! use lwc_aead::aead::generic_array::GenericArray;
//!
//! let cipher = Cipher::<Xoodyak>::new(&GenericArray::from([7u8; 16]));
//! let nonce = GenericArray::from([1u8; 16]);
//!
//! let mut buffer = *b"over the wire";
//! let tag = cipher.encrypt_in_place_detached(&nonce, b"", &mut buffer).unwrap();
//! cipher.decrypt_in_place_detached(&nonce, b"", &mut buffer, &tag).unwrap();
//! assert_eq!(&buffer, b"over the wire");
//! ```

use crate::aead_impl::{
    Ace, ChaChaPoly, Comet64Cham, Comet64Speck, Comet128Cham, Gascon80pq, Gascon128, Gascon128a,
    RomulusN1, RomulusN2, RomulusN3, SaturninAead, SkinnyAeadM1, SkinnyAeadM2, SkinnyAeadM3,
    SkinnyAeadM4, SkinnyAeadM5, SkinnyAeadM6, Xoodyak,
};
use crate::engine::AeadFamily;
use aead::generic_array::GenericArray;
use aead::{AeadCore, AeadInPlace, Error, KeyInit, KeySizeUser, consts::U0};
use core::marker::PhantomData;
use log::debug;
use zeroize::Zeroize;

/// A keyed instance of the family `F` implementing the RustCrypto traits.
pub struct Cipher<F: AeadFamily> {
    key: GenericArray<u8, F::KeySize>,
    family: PhantomData<F>,
}

impl<F: AeadFamily> Clone for Cipher<F> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            family: PhantomData,
        }
    }
}

impl<F: AeadFamily> Drop for Cipher<F> {
    fn drop(&mut self) {
        self.key.as_mut_slice().zeroize();
    }
}

impl<F: AeadFamily> KeySizeUser for Cipher<F> {
    type KeySize = F::KeySize;
}

impl<F: AeadFamily> KeyInit for Cipher<F> {
    fn new(key: &GenericArray<u8, Self::KeySize>) -> Self {
        Self {
            key: key.clone(),
            family: PhantomData,
        }
    }
}

impl<F: AeadFamily> AeadCore for Cipher<F> {
    type NonceSize = F::NonceSize;
    type TagSize = F::TagSize;
    type CiphertextOverhead = U0;
}

impl<F: AeadFamily> AeadInPlace for Cipher<F> {
    fn encrypt_in_place_detached(
        &self,
        nonce: &GenericArray<u8, Self::NonceSize>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> Result<GenericArray<u8, Self::TagSize>, Error> {
        let mut tag = GenericArray::default();
        F::encrypt_detached(
            self.key.as_slice(),
            nonce.as_slice(),
            associated_data,
            buffer,
            tag.as_mut_slice(),
        )
        .map_err(|err| {
            debug!("{}: {}", F::ALGORITHM, err);
            Error::from(err)
        })?;
        Ok(tag)
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &GenericArray<u8, Self::NonceSize>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &GenericArray<u8, Self::TagSize>,
    ) -> Result<(), Error> {
        F::decrypt_detached(
            self.key.as_slice(),
            nonce.as_slice(),
            associated_data,
            buffer,
            tag.as_slice(),
        )
        .map_err(Error::from)
    }
}

/// ChaCha20-Poly1305 implementing RustCrypto traits.
pub type ChaChaPolyAead = Cipher<ChaChaPoly>;
/// GASCON-128 implementing RustCrypto traits.
pub type Gascon128Aead = Cipher<Gascon128>;
/// GASCON-128a implementing RustCrypto traits.
pub type Gascon128aAead = Cipher<Gascon128a>;
/// GASCON-80pq implementing RustCrypto traits.
pub type Gascon80pqAead = Cipher<Gascon80pq>;
/// Xoodyak implementing RustCrypto traits.
pub type XoodyakAead = Cipher<Xoodyak>;
/// ACE implementing RustCrypto traits.
pub type AceAead = Cipher<Ace>;
/// COMET-128_CHAM-128/128 implementing RustCrypto traits.
pub type Comet128ChamAead = Cipher<Comet128Cham>;
/// COMET-64_CHAM-64/128 implementing RustCrypto traits.
pub type Comet64ChamAead = Cipher<Comet64Cham>;
/// COMET-64_SPECK-64/128 implementing RustCrypto traits.
pub type Comet64SpeckAead = Cipher<Comet64Speck>;
/// SKINNY-AEAD-M1 implementing RustCrypto traits.
pub type SkinnyM1Aead = Cipher<SkinnyAeadM1>;
/// SKINNY-AEAD-M2 implementing RustCrypto traits.
pub type SkinnyM2Aead = Cipher<SkinnyAeadM2>;
/// SKINNY-AEAD-M3 implementing RustCrypto traits.
pub type SkinnyM3Aead = Cipher<SkinnyAeadM3>;
/// SKINNY-AEAD-M4 implementing RustCrypto traits.
pub type SkinnyM4Aead = Cipher<SkinnyAeadM4>;
/// SKINNY-AEAD-M5 implementing RustCrypto traits.
pub type SkinnyM5Aead = Cipher<SkinnyAeadM5>;
/// SKINNY-AEAD-M6 implementing RustCrypto traits.
pub type SkinnyM6Aead = Cipher<SkinnyAeadM6>;
/// Romulus-N1 implementing RustCrypto traits.
pub type RomulusN1Aead = Cipher<RomulusN1>;
/// Romulus-N2 implementing RustCrypto traits.
pub type RomulusN2Aead = Cipher<RomulusN2>;
/// Romulus-N3 implementing RustCrypto traits.
pub type RomulusN3Aead = Cipher<RomulusN3>;
/// SATURNIN-CTR-Cascade implementing RustCrypto traits.
pub type SaturninCtrCascadeAead = Cipher<SaturninAead>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aead_roundtrip() {
        let key = GenericArray::from([1u8; 16]);
        let cipher = XoodyakAead::new(&key);

        let nonce = GenericArray::from([2u8; 16]);
        let plaintext = *b"Hello, RustCrypto AEAD!";
        let aad = b"associated data";

        let mut ciphertext = plaintext;
        let tag = cipher
            .encrypt_in_place_detached(&nonce, aad, &mut ciphertext)
            .expect("encryption failed");

        cipher
            .decrypt_in_place_detached(&nonce, aad, &mut ciphertext, &tag)
            .expect("decryption failed");

        assert_eq!(&ciphertext, b"Hello, RustCrypto AEAD!");
    }

    #[test]
    fn aead_matches_family() {
        let key = [42u8; 20];
        let nonce = [99u8; 16];
        let cipher = Cipher::<Gascon80pq>::new(&GenericArray::clone_from_slice(&key));

        let mut buffer = *b"In-place test!  ";
        let original = buffer;
        let tag = cipher
            .encrypt_in_place_detached(GenericArray::from_slice(&nonce), b"metadata", &mut buffer)
            .expect("encryption failed");

        let mut direct = original;
        let direct_tag = Gascon80pq::encrypt_in_place(&key, &nonce, b"metadata", &mut direct)
            .expect("encryption failed");
        assert_eq!(buffer, direct);
        assert_eq!(tag.as_slice(), &direct_tag);
    }

    #[test]
    fn aead_odd_sizes() {
        let cipher = Cipher::<Comet64Cham>::new_from_slice(&[3u8; 16]).expect("key length");
        assert!(Cipher::<Comet64Cham>::new_from_slice(&[3u8; 15]).is_err());

        let nonce = GenericArray::clone_from_slice(&[4u8; 15]);
        let mut buffer = *b"fifteen byte nonce";
        let tag = cipher
            .encrypt_in_place_detached(&nonce, b"", &mut buffer)
            .expect("encryption failed");
        assert_eq!(tag.len(), 8);
        cipher
            .decrypt_in_place_detached(&nonce, b"", &mut buffer, &tag)
            .expect("decryption failed");
        assert_eq!(&buffer, b"fifteen byte nonce");
    }

    #[test]
    fn aead_wrong_tag() {
        let cipher = SaturninCtrCascadeAead::new(&GenericArray::from([1u8; 32]));

        let nonce = GenericArray::from([2u8; 16]);
        let mut buffer = *b"Test message";

        let mut tag = cipher
            .encrypt_in_place_detached(&nonce, b"", &mut buffer)
            .expect("encryption failed");

        // Corrupt the tag
        tag[0] ^= 1;

        let result = cipher.decrypt_in_place_detached(&nonce, b"", &mut buffer, &tag);
        assert!(result.is_err());
        assert_eq!(buffer, [0u8; 12]);
    }

    #[test]
    fn aead_wrong_associated_data() {
        let cipher = RomulusN3Aead::new(&GenericArray::from([5u8; 16]));
        let nonce = GenericArray::from([6u8; 12]);
        let mut buffer = *b"romulus";
        let tag = cipher
            .encrypt_in_place_detached(&nonce, b"header", &mut buffer)
            .expect("encryption failed");
        let mut wrong_ad = buffer;
        assert_eq!(
            cipher.decrypt_in_place_detached(&nonce, b"headex", &mut wrong_ad, &tag),
            Err(Error)
        );
        cipher
            .decrypt_in_place_detached(&nonce, b"header", &mut buffer, &tag)
            .expect("decryption failed");
        assert_eq!(&buffer, b"romulus");
    }
}
