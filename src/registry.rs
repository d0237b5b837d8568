//! # Algorithm registry
//!
//! Closed enumerations of every AEAD family and hash function, for callers that pick the
//! algorithm at run time (test harnesses, benchmarks, protocol negotiation). Each variant
//! dispatches to the matching [`AeadFamily`] or [`Hasher`] implementation.
//!
//! ```
//! use lwc_aead::Algorithm;
//!
//! let algorithm = Algorithm::from_name("SKINNY-AEAD-M5").unwrap();
//! let key = vec![0u8; algorithm.key_len()];
//! let nonce = vec![0u8; algorithm.nonce_len()];
//!
//! let mut sealed = vec![0u8; 5 + algorithm.tag_len()];
//! let written = algorithm.encrypt(&key, &nonce, b"", b"hello", &mut sealed).unwrap();
//!
//! let mut opened = [0u8; 5];
//! algorithm.decrypt(&key, &nonce, b"", &sealed[..written], &mut opened).unwrap();
//! assert_eq!(&opened, b"hello");
//! ```

use crate::aead_impl::*;
use crate::engine::AeadFamily;
use crate::error::Result;
use crate::hash_impl::{AceHash, GasconHash, HASH_SIZE, Hasher, SaturninHash, XoodyakHash};
use core::fmt;
use log::trace;

macro_rules! algorithms {
    ($($variant:ident => $family:ty,)*) => {
        /// One AEAD family.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Algorithm {
            $(
                #[doc = concat!("[`", stringify!($family), "`]")]
                $variant,
            )*
        }

        impl Algorithm {
            /// Every family, in suite order.
            pub const ALL: &'static [Algorithm] = &[$(Algorithm::$variant,)*];

            /// Algorithm name as used by the reference suite.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Algorithm::$variant => <$family as AeadFamily>::ALGORITHM,)*
                }
            }

            /// Key length in bytes.
            pub const fn key_len(self) -> usize {
                match self {
                    $(Algorithm::$variant => <$family as AeadFamily>::KEY_LEN,)*
                }
            }

            /// Nonce length in bytes.
            pub const fn nonce_len(self) -> usize {
                match self {
                    $(Algorithm::$variant => <$family as AeadFamily>::NONCE_LEN,)*
                }
            }

            /// Tag length in bytes.
            pub const fn tag_len(self) -> usize {
                match self {
                    $(Algorithm::$variant => <$family as AeadFamily>::TAG_LEN,)*
                }
            }

            /// Largest associated data accepted, in bytes.
            pub const fn max_ad_len(self) -> u64 {
                match self {
                    $(Algorithm::$variant => <$family as AeadFamily>::MAX_AD_LEN,)*
                }
            }

            /// Largest message accepted, in bytes.
            pub const fn max_message_len(self) -> u64 {
                match self {
                    $(Algorithm::$variant => <$family as AeadFamily>::MAX_MESSAGE_LEN,)*
                }
            }

            /// Encrypt `buffer` in place, writing the tag into `tag_out`.
            pub fn encrypt_detached(
                self,
                key: &[u8],
                nonce: &[u8],
                ad: &[u8],
                buffer: &mut [u8],
                tag_out: &mut [u8],
            ) -> Result<()> {
                trace!("{}: encrypt {} bytes", self.name(), buffer.len());
                match self {
                    $(Algorithm::$variant => {
                        <$family>::encrypt_detached(key, nonce, ad, buffer, tag_out)
                    })*
                }
            }

            /// Decrypt `buffer` in place and check `tag`; the buffer is zeroed on failure.
            pub fn decrypt_detached(
                self,
                key: &[u8],
                nonce: &[u8],
                ad: &[u8],
                buffer: &mut [u8],
                tag: &[u8],
            ) -> Result<()> {
                trace!("{}: decrypt {} bytes", self.name(), buffer.len());
                match self {
                    $(Algorithm::$variant => {
                        <$family>::decrypt_detached(key, nonce, ad, buffer, tag)
                    })*
                }
            }

            /// Encrypt `plaintext` into `out` as `ciphertext || tag`.
            pub fn encrypt(
                self,
                key: &[u8],
                nonce: &[u8],
                ad: &[u8],
                plaintext: &[u8],
                out: &mut [u8],
            ) -> Result<usize> {
                trace!("{}: encrypt {} bytes", self.name(), plaintext.len());
                match self {
                    $(Algorithm::$variant => <$family>::encrypt(key, nonce, ad, plaintext, out),)*
                }
            }

            /// Decrypt `ciphertext || tag` into `out`.
            pub fn decrypt(
                self,
                key: &[u8],
                nonce: &[u8],
                ad: &[u8],
                ciphertext_and_tag: &[u8],
                out: &mut [u8],
            ) -> Result<usize> {
                trace!("{}: decrypt {} bytes", self.name(), ciphertext_and_tag.len());
                match self {
                    $(Algorithm::$variant => {
                        <$family>::decrypt(key, nonce, ad, ciphertext_and_tag, out)
                    })*
                }
            }
        }
    };
}

algorithms! {
    ChaChaPoly => ChaChaPoly,
    Gascon128 => Gascon128,
    Gascon128a => Gascon128a,
    Gascon80pq => Gascon80pq,
    Xoodyak => Xoodyak,
    Ace => Ace,
    Comet128Cham => Comet128Cham,
    Comet64Cham => Comet64Cham,
    Comet64Speck => Comet64Speck,
    SkinnyAeadM1 => SkinnyAeadM1,
    SkinnyAeadM2 => SkinnyAeadM2,
    SkinnyAeadM3 => SkinnyAeadM3,
    SkinnyAeadM4 => SkinnyAeadM4,
    SkinnyAeadM5 => SkinnyAeadM5,
    SkinnyAeadM6 => SkinnyAeadM6,
    RomulusN1 => RomulusN1,
    RomulusN2 => RomulusN2,
    RomulusN3 => RomulusN3,
    Saturnin => SaturninAead,
}

impl Algorithm {
    /// Look a family up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|algorithm| algorithm.name() == name)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One fixed-output hash function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// [`XoodyakHash`]
    Xoodyak,
    /// [`AceHash`]
    Ace,
    /// [`GasconHash`]
    Gascon,
    /// [`SaturninHash`]
    Saturnin,
}

impl HashAlgorithm {
    /// Every hash function.
    pub const ALL: &'static [HashAlgorithm] = &[
        HashAlgorithm::Xoodyak,
        HashAlgorithm::Ace,
        HashAlgorithm::Gascon,
        HashAlgorithm::Saturnin,
    ];

    /// Algorithm name as used by the reference suite.
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Xoodyak => XoodyakHash::ALGORITHM,
            HashAlgorithm::Ace => AceHash::ALGORITHM,
            HashAlgorithm::Gascon => GasconHash::ALGORITHM,
            HashAlgorithm::Saturnin => SaturninHash::ALGORITHM,
        }
    }

    /// Digest length in bytes.
    pub const fn digest_len(self) -> usize {
        HASH_SIZE
    }

    /// Hash `input` in one call.
    pub fn hash(self, input: &[u8]) -> [u8; HASH_SIZE] {
        trace!("{}: hash {} bytes", self.name(), input.len());
        match self {
            HashAlgorithm::Xoodyak => XoodyakHash::hash(input),
            HashAlgorithm::Ace => AceHash::hash(input),
            HashAlgorithm::Gascon => GasconHash::hash(input),
            HashAlgorithm::Saturnin => SaturninHash::hash(input),
        }
    }

    /// Look a hash function up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|algorithm| algorithm.name() == name)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::error::Error;
    use std::collections::HashSet;
    use std::string::ToString;
    use std::vec;

    #[test]
    fn names_are_unique_and_resolve() {
        assert_eq!(Algorithm::ALL.len(), 19);
        let names: HashSet<_> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names.len(), Algorithm::ALL.len());
        for &algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_name("GIFT-COFB"), None);
        assert_eq!(Algorithm::from_name("Romulus-N1"), Some(Algorithm::RomulusN1));

        assert_eq!(HashAlgorithm::ALL.len(), 4);
        for &algorithm in HashAlgorithm::ALL {
            assert_eq!(HashAlgorithm::from_name(algorithm.name()), Some(algorithm));
        }
    }

    #[test]
    fn dispatch_matches_family() {
        let key = [9u8; 16];
        let nonce = [8u8; 16];
        let mut direct = *b"registry";
        let tag = Xoodyak::encrypt_in_place(&key, &nonce, b"ad", &mut direct).unwrap();

        let mut sealed = [0u8; 8 + 16];
        let written = Algorithm::Xoodyak
            .encrypt(&key, &nonce, b"ad", b"registry", &mut sealed)
            .unwrap();
        assert_eq!(written, 24);
        assert_eq!(&sealed[..8], &direct);
        assert_eq!(&sealed[8..], &tag);
    }

    #[test]
    fn every_algorithm_round_trips() {
        for &algorithm in Algorithm::ALL {
            let key = vec![0x5au8; algorithm.key_len()];
            let nonce = vec![0xa5u8; algorithm.nonce_len()];
            let mut buffer = *b"dispatched through the registry";
            let mut tag = vec![0u8; algorithm.tag_len()];
            algorithm
                .encrypt_detached(&key, &nonce, b"ad", &mut buffer, &mut tag)
                .unwrap();

            let mut bad_tag = tag.clone();
            bad_tag[0] ^= 1;
            let mut copy = buffer;
            assert_eq!(
                algorithm.decrypt_detached(&key, &nonce, b"ad", &mut copy, &bad_tag),
                Err(Error::AuthenticationFailure),
                "{algorithm}"
            );
            assert_eq!(copy, [0u8; 31]);

            algorithm
                .decrypt_detached(&key, &nonce, b"ad", &mut buffer, &tag)
                .unwrap();
            assert_eq!(&buffer, b"dispatched through the registry");
        }
    }

    #[test]
    fn hash_dispatch() {
        for &algorithm in HashAlgorithm::ALL {
            assert_eq!(algorithm.digest_len(), 32);
        }
        assert_eq!(HashAlgorithm::Ace.hash(b"abc"), AceHash::hash(b"abc"));
        assert_eq!(HashAlgorithm::Saturnin.hash(b""), SaturninHash::hash(b""));
        assert_eq!(HashAlgorithm::Gascon.hash(b"abc"), GasconHash::hash(b"abc"));
        assert_eq!(HashAlgorithm::from_name("GASCON-HASH"), Some(HashAlgorithm::Gascon));
        assert_eq!(HashAlgorithm::Xoodyak.to_string(), "Xoodyak");
    }
}
