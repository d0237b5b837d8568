//! Constant-time tag verification.
//!
//! Every family funnels its tag check through [`verify`]. The comparison looks at every tag
//! byte regardless of where the first difference is, collapses the accumulated difference into
//! a [`Choice`] without branching, and masks the candidate plaintext with the same `Choice`
//! before the result is ever turned into a `bool`.

use crate::error::{Error, InvalidParameter, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Compare two equal-length byte strings without early exit.
#[inline]
pub fn tags_match(computed: &[u8], supplied: &[u8]) -> Choice {
    let mut difference = 0u8;
    for (a, b) in computed.iter().zip(supplied) {
        difference |= a ^ b;
    }
    difference.ct_eq(&0)
}

/// Zero every byte of `buffer` unless `keep` is set.
#[inline]
pub fn clear_unless(keep: Choice, buffer: &mut [u8]) {
    for byte in buffer.iter_mut() {
        *byte = u8::conditional_select(&0, byte, keep);
    }
}

/// Check `supplied` against `computed` and release or destroy `plaintext` accordingly.
///
/// On mismatch the whole of `plaintext` is zeroed before [`Error::AuthenticationFailure`] is
/// returned. A length mismatch between the tags is a parameter error and is reported before
/// anything is compared.
pub fn verify(computed: &[u8], supplied: &[u8], plaintext: &mut [u8]) -> Result<()> {
    if computed.len() != supplied.len() {
        return Err(InvalidParameter::TagLength.into());
    }

    let matched = tags_match(computed, supplied);
    clear_unless(matched, plaintext);

    if bool::from(matched) {
        Ok(())
    } else {
        Err(Error::AuthenticationFailure)
    }
}
