//! Error types shared by every AEAD family and hash function.

use core::fmt;

/// Result type alias for suite operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by the AEAD entry points.
///
/// Both variants are ordinary values: nothing in the crate panics on bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A fixed-size input had the wrong length, or a variable-size input exceeded the
    /// family's processing ceiling. Detected before any cryptographic work starts.
    InvalidParameters(InvalidParameter),

    /// The authentication tag did not match. The plaintext buffer has been zeroed.
    AuthenticationFailure,
}

/// Which parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameter {
    /// Key slice does not match the family's key size.
    KeyLength,

    /// Nonce slice does not match the family's nonce size.
    NonceLength,

    /// Tag slice does not match the family's tag size.
    TagLength,

    /// Output buffer cannot hold the result, or the input is shorter than a tag.
    BufferTooSmall,

    /// Associated data exceeds the family's ceiling.
    AssociatedDataTooLong,

    /// Message exceeds the family's ceiling.
    MessageTooLong,
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidParameter::KeyLength => write!(f, "invalid key length"),
            InvalidParameter::NonceLength => write!(f, "invalid nonce length"),
            InvalidParameter::TagLength => write!(f, "invalid tag length"),
            InvalidParameter::BufferTooSmall => write!(f, "buffer too small"),
            InvalidParameter::AssociatedDataTooLong => write!(f, "associated data too long"),
            InvalidParameter::MessageTooLong => write!(f, "message too long"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameters(which) => write!(f, "invalid parameters: {which}"),
            Error::AuthenticationFailure => write!(f, "authentication tag verification failed"),
        }
    }
}

impl core::error::Error for Error {}

impl From<InvalidParameter> for Error {
    fn from(which: InvalidParameter) -> Self {
        Error::InvalidParameters(which)
    }
}

impl From<Error> for aead::Error {
    fn from(_: Error) -> Self {
        aead::Error
    }
}
