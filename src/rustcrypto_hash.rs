//! # RustCrypto Digest trait implementation
//!
//! [`HashCore`] adapts any [`Hasher`] to the `digest` core API; [`XoodyakXofCore`] and
//! [`GasconXofCore`] do the same for the two extendable-output functions.
//!
//! ```
//! use lwc_aead::{Digest, XoodyakDigest, XoodyakXofDigest};
//! use lwc_aead::digest::{ExtendableOutput, Update, XofReader};
//!
//! let digest = XoodyakDigest::digest(b"abc");
//!
//! let mut xof = XoodyakXofDigest::default();
//! Update::update(&mut xof, b"abc");
//! let mut reader = xof.finalize_xof();
//! let mut stream = [0u8; 48];
//! reader.read(&mut stream);
//!
//! assert_eq!(&stream[..32], digest.as_slice());
//! ```

use crate::hash_impl::{
    AceHash, GasconHash, GasconXof, Hasher, SaturninHash, XoodyakHash, XoodyakXof,
};
use core::fmt;
use digest::{
    HashMarker, Output, OutputSizeUser, Reset,
    block_buffer::Eager,
    consts::{U8, U16, U32},
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        ExtendableOutputCore, FixedOutputCore, UpdateCore, XofReaderCore, XofReaderCoreWrapper,
    },
};

/// Block-buffered core over one [`Hasher`].
#[derive(Clone, Default)]
pub struct HashCore<H: Hasher> {
    hasher: H,
}

impl<H: Hasher> OutputSizeUser for HashCore<H> {
    type OutputSize = U32;
}

impl<H: Hasher> BlockSizeUser for HashCore<H> {
    type BlockSize = U32; // Every hasher buffers its own rate, so any block size works.
}

impl<H: Hasher> BufferKindUser for HashCore<H> {
    type BufferKind = Eager;
}

impl<H: Hasher> UpdateCore for HashCore<H> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.hasher.update(block.as_slice());
        }
    }
}

impl<H: Hasher> FixedOutputCore for HashCore<H> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        self.hasher.update(buffer.get_data());
        let result = core::mem::take(&mut self.hasher).finalize();
        out.copy_from_slice(&result);
    }
}

impl<H: Hasher> Reset for HashCore<H> {
    #[inline]
    fn reset(&mut self) {
        self.hasher = H::default();
    }
}

impl<H: Hasher> AlgorithmName for HashCore<H> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(H::ALGORITHM)
    }
}

impl<H: Hasher> fmt::Debug for HashCore<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashCore<{}> {{ ... }}", H::ALGORITHM)
    }
}

impl<H: Hasher> HashMarker for HashCore<H> {}

/// Xoodyak hash implementing RustCrypto digest traits.
pub type XoodyakDigest = CoreWrapper<HashCore<XoodyakHash>>;

/// ACE-HASH implementing RustCrypto digest traits.
pub type AceDigest = CoreWrapper<HashCore<AceHash>>;

/// GASCON-HASH implementing RustCrypto digest traits.
pub type GasconDigest = CoreWrapper<HashCore<GasconHash>>;

/// SATURNIN-Hash implementing RustCrypto digest traits.
pub type SaturninDigest = CoreWrapper<HashCore<SaturninHash>>;

macro_rules! xof_core {
    (
        $xof:ty, $name:literal, block: $block:ty,
        $(#[$core_doc:meta])* $core:ident,
        $(#[$reader_doc:meta])* $reader:ident
    ) => {
        $(#[$core_doc])*
        #[derive(Clone, Default)]
        pub struct $core {
            xof: $xof,
        }

        impl BlockSizeUser for $core {
            type BlockSize = $block;
        }

        impl BufferKindUser for $core {
            type BufferKind = Eager;
        }

        impl UpdateCore for $core {
            #[inline]
            fn update_blocks(&mut self, blocks: &[Block<Self>]) {
                for block in blocks {
                    self.xof.absorb(block.as_slice());
                }
            }
        }

        impl ExtendableOutputCore for $core {
            type ReaderCore = $reader;

            fn finalize_xof_core(&mut self, buffer: &mut Buffer<Self>) -> Self::ReaderCore {
                self.xof.absorb(buffer.get_data());
                $reader {
                    xof: core::mem::take(&mut self.xof),
                }
            }
        }

        impl Reset for $core {
            #[inline]
            fn reset(&mut self) {
                self.xof = <$xof>::new();
            }
        }

        impl AlgorithmName for $core {
            fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($name)
            }
        }

        impl fmt::Debug for $core {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($core), " { ... }"))
            }
        }

        $(#[$reader_doc])*
        #[derive(Clone)]
        pub struct $reader {
            xof: $xof,
        }

        impl BlockSizeUser for $reader {
            type BlockSize = $block;
        }

        impl XofReaderCore for $reader {
            #[inline]
            fn read_block(&mut self) -> Block<Self> {
                let mut block = Block::<Self>::default();
                self.xof.squeeze(block.as_mut_slice());
                block
            }
        }
    };
}

xof_core!(
    XoodyakXof, "Xoodyak-XOF", block: U16,
    /// Absorbing half of the Xoodyak XOF.
    XoodyakXofCore,
    /// Squeezing half of the Xoodyak XOF, one 16-byte block per read.
    XoodyakXofReaderCore
);

xof_core!(
    GasconXof, "GASCON-XOF", block: U8,
    /// Absorbing half of GASCON-XOF.
    GasconXofCore,
    /// Squeezing half of GASCON-XOF, one 8-byte block per read.
    GasconXofReaderCore
);

/// Xoodyak XOF implementing RustCrypto `ExtendableOutput`.
pub type XoodyakXofDigest = CoreWrapper<XoodyakXofCore>;

/// Reader returned by [`XoodyakXofDigest`].
pub type XoodyakXofReader = XofReaderCoreWrapper<XoodyakXofReaderCore>;

/// GASCON-XOF implementing RustCrypto `ExtendableOutput`.
pub type GasconXofDigest = CoreWrapper<GasconXofCore>;

/// Reader returned by [`GasconXofDigest`].
pub type GasconXofReader = XofReaderCoreWrapper<GasconXofReaderCore>;

#[cfg(test)]
mod tests {
    use super::*;
    use digest::{Digest, ExtendableOutput, ExtendableOutputReset, Update, XofReader};

    #[test]
    fn hash_matches_hasher() {
        assert_eq!(XoodyakDigest::digest(b"abc").as_slice(), &XoodyakHash::hash(b"abc"));
        assert_eq!(AceDigest::digest(b"abc").as_slice(), &AceHash::hash(b"abc"));
        assert_eq!(SaturninDigest::digest(b"abc").as_slice(), &SaturninHash::hash(b"abc"));
        assert_eq!(GasconDigest::digest(b"abc").as_slice(), &GasconHash::hash(b"abc"));
    }

    #[test]
    fn hash_incremental() {
        let message = [0x42u8; 100];

        let mut hasher1 = AceDigest::new();
        for chunk in message.chunks(7) {
            Digest::update(&mut hasher1, chunk);
        }
        let result1 = hasher1.finalize();

        assert_eq!(result1.as_slice(), &AceHash::hash(&message));
    }

    #[test]
    fn hash_empty() {
        assert_eq!(SaturninDigest::new().finalize().as_slice(), &SaturninHash::hash(b""));
    }

    #[test]
    fn hash_reset() {
        let mut hasher = XoodyakDigest::new();
        Digest::update(&mut hasher, b"First message");
        Digest::reset(&mut hasher);
        Digest::update(&mut hasher, b"Second message");
        let result1 = hasher.finalize();

        let result2 = XoodyakDigest::digest(b"Second message");
        assert_eq!(result1, result2);
    }

    #[test]
    fn hash_clone() {
        let mut hasher1 = SaturninDigest::new();
        Digest::update(&mut hasher1, b"Common prefix");

        let mut hasher2 = hasher1.clone();

        Digest::update(&mut hasher1, b" - branch 1");
        Digest::update(&mut hasher2, b" - branch 2");

        assert_ne!(hasher1.finalize(), hasher2.finalize());
    }

    #[test]
    fn xof_matches_squeeze() {
        let mut expected = [0u8; 75];
        let mut xof = XoodyakXof::new();
        xof.absorb(b"The quick brown fox");
        xof.squeeze(&mut expected);

        let mut digest = XoodyakXofDigest::default();
        Update::update(&mut digest, b"The quick ");
        Update::update(&mut digest, b"brown fox");
        let mut reader = digest.finalize_xof();

        let mut output = [0u8; 75];
        let (a, rest) = output.split_at_mut(5);
        let (b, c) = rest.split_at_mut(33);
        reader.read(a);
        reader.read(b);
        reader.read(c);
        assert_eq!(output, expected);
    }

    #[test]
    fn xof_reset() {
        let mut digest = XoodyakXofDigest::default();
        Update::update(&mut digest, b"abc");
        let mut first = [0u8; 32];
        digest.finalize_xof_reset().read(&mut first);
        assert_eq!(first, XoodyakHash::hash(b"abc"));

        Update::update(&mut digest, b"abc");
        let mut second = [0u8; 32];
        digest.finalize_xof().read(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn gascon_xof_matches_squeeze() {
        let mut expected = [0u8; 41];
        let mut xof = GasconXof::new();
        xof.absorb(b"extendable output");
        xof.squeeze(&mut expected);

        let mut digest = GasconXofDigest::default();
        Update::update(&mut digest, b"extendable");
        Update::update(&mut digest, b" output");
        let mut reader = digest.finalize_xof();

        let mut output = [0u8; 41];
        let (a, b) = output.split_at_mut(13);
        reader.read(a);
        reader.read(b);
        assert_eq!(output, expected);
    }
}
