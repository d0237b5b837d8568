#![no_std]
#![doc = include_str!("../README.md")]

pub mod ct;
pub mod engine;
pub mod policy;
pub mod primitive;

mod aead_impl;
mod endian;
mod error;
mod hash_impl;
mod registry;

mod rustcrypto_aead;
mod rustcrypto_hash;

pub use aead_impl::{
    Ace, ChaChaPoly, Comet64Cham, Comet64Speck, Comet128Cham, CometCipher, Gascon80pq, Gascon128,
    Gascon128a, RomulusN1, RomulusN2, RomulusN3, SaturninAead, SaturninShort, SkinnyAeadM1,
    SkinnyAeadM2, SkinnyAeadM3, SkinnyAeadM4, SkinnyAeadM5, SkinnyAeadM6, SkinnyTweakey, Xoodyak,
};
pub use engine::AeadFamily;
pub use error::{Error, InvalidParameter, Result};
pub use hash_impl::{
    AceHash, GasconHash, GasconXof, HASH_SIZE, Hasher, SaturninHash, XoodyakHash, XoodyakXof,
};
pub use registry::{Algorithm, HashAlgorithm};
pub use rustcrypto_aead::{
    AceAead, ChaChaPolyAead, Cipher, Comet64ChamAead, Comet64SpeckAead, Comet128ChamAead,
    Gascon80pqAead, Gascon128Aead, Gascon128aAead, RomulusN1Aead, RomulusN2Aead, RomulusN3Aead,
    SaturninCtrCascadeAead, SkinnyM1Aead, SkinnyM2Aead, SkinnyM3Aead, SkinnyM4Aead, SkinnyM5Aead,
    SkinnyM6Aead, XoodyakAead,
};
pub use rustcrypto_hash::{
    AceDigest, GasconDigest, GasconXofCore, GasconXofDigest, GasconXofReader, GasconXofReaderCore,
    HashCore, SaturninDigest, XoodyakDigest, XoodyakXofCore, XoodyakXofDigest, XoodyakXofReader,
    XoodyakXofReaderCore,
};

pub use aead::{self, AeadInPlace, KeyInit}; // For `Cipher` users
pub use digest::{self, Digest, Update}; // For `HashCore` users
