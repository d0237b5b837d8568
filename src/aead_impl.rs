//! # AEAD families
//!
//! Each family is a zero-sized type implementing [`AeadFamily`](crate::AeadFamily). The sponge
//! families (GASCON, Xoodyak, ACE) are a few [`DuplexPhase`](crate::engine::DuplexPhase) values
//! plus key/nonce loading. SKINNY-AEAD, Romulus-N and COMET are block-cipher modes generic over
//! their primitive. ChaCha20-Poly1305 and SATURNIN-CTR-Cascade compose a keystream with a MAC.
//!
//! # Usage
//!
//! ```
//! use lwc_aead::{AeadFamily, Error, SkinnyAeadM1};
//!
//! let key = [7u8; 16];
//! let nonce = [9u8; 16];
//! let mut data = *b"Secret message";
//! let aad = b"public header";
//!
//! let tag = SkinnyAeadM1::encrypt_in_place(&key, &nonce, aad, &mut data)?;
//!
//! let mut forged = tag;
//! forged[0] ^= 1;
//! let mut copy = data;
//! assert_eq!(
//!     SkinnyAeadM1::decrypt_in_place(&key, &nonce, aad, &mut copy, &forged),
//!     Err(Error::AuthenticationFailure)
//! );
//! assert_eq!(copy, [0u8; 14]);
//!
//! SkinnyAeadM1::decrypt_in_place(&key, &nonce, aad, &mut data, &tag)?;
//! assert_eq!(&data, b"Secret message");
//! # Ok::<(), Error>(())
//! ```
//!
//! For allocating APIs with separate input/output buffers, use the RustCrypto
//! [`Cipher`](crate::Cipher) adapter.

mod ace;
mod chachapoly;
mod comet;
mod gascon;
mod romulus;
mod saturnin;
mod skinny_aead;
mod xoodyak;

pub use ace::Ace;
pub use chachapoly::ChaChaPoly;
pub use comet::{Comet64Cham, Comet64Speck, Comet128Cham, CometCipher};
pub use gascon::{Gascon80pq, Gascon128, Gascon128a};
pub use romulus::{RomulusN1, RomulusN2, RomulusN3};
pub use saturnin::{SaturninAead, SaturninShort};
pub use skinny_aead::{
    SkinnyAeadM1, SkinnyAeadM2, SkinnyAeadM3, SkinnyAeadM4, SkinnyAeadM5, SkinnyAeadM6,
    SkinnyTweakey,
};
pub use xoodyak::Xoodyak;

pub(crate) use ace::RATE as ACE_RATE;
pub(crate) use saturnin::cascade as saturnin_cascade;
