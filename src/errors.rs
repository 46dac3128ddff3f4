//! Error types.

use core::fmt;

/// Alias for [`core::result::Result`] with the `rsa32` error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Cipher input is zero or not below the modulus.
    InputOutOfRange,

    /// No modular inverse exists because the operands share a factor.
    NoInverse,

    /// Generated key components violate an RSA identity.
    InvalidKey,

    /// Bounded prime or exponent search was exhausted.
    NonConvergence,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputOutOfRange => write!(f, "input out of range of the modulus"),
            Error::NoInverse => write!(f, "no modular inverse exists"),
            Error::InvalidKey => write!(f, "generated key failed validation"),
            Error::NonConvergence => write!(f, "key generation failed to converge"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
