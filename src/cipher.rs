//! The raw RSA transform.

use crate::arithmetic::mod_pow;
use crate::errors::{Error, Result};

/// Raw RSA transform of `data` under `key`: `data^key mod n`.
///
/// Encryption and decryption are the same operation with different
/// exponents; `(data^e)^d mod n == data` whenever `(e * d)` is 1 modulo the
/// totient of `n`.
///
/// `data` must lie in `[1, n)`: zero maps to itself under any exponent and
/// anything at or above `n` is outside the residue ring, so both are
/// rejected with [`Error::InputOutOfRange`].
pub fn transform(data: u32, key: u32, n: u32) -> Result<u32> {
    if data == 0 || data >= n {
        return Err(Error::InputOutOfRange);
    }

    Ok(mod_pow(data, key, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_textbook_vector() {
        assert_eq!(transform(65, 17, 3233), Ok(2790));
        assert_eq!(transform(2790, 2753, 3233), Ok(65));
    }

    #[test]
    fn test_transform_rejects_out_of_range_input() {
        assert_eq!(transform(0, 17, 3233), Err(Error::InputOutOfRange));
        assert_eq!(transform(3233, 17, 3233), Err(Error::InputOutOfRange));
        assert_eq!(transform(4000, 17, 3233), Err(Error::InputOutOfRange));
    }

    #[test]
    fn test_transform_boundaries() {
        // 1 is a fixed point of every exponent but still a legal input.
        assert_eq!(transform(1, 17, 3233), Ok(1));
        assert_eq!(transform(3232, 2, 3233), Ok(1));
    }
}
