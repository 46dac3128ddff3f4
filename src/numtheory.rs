//! Euclidean number theory: division, gcd and modular inverses.
//!
//! Division is built from shift-and-subtract rather than the native divide
//! instruction, keeping every step expressible in terms of add, subtract,
//! compare and shift. At 32-bit scale the cost is negligible.

use crate::errors::{Error, Result};

/// Returns the quotient and remainder of `a / b` using binary long division.
///
/// Only shifts, subtractions and comparisons are used. `b` must be nonzero.
pub fn div_rem(a: u32, b: u32) -> (u32, u32) {
    debug_assert!(b != 0, "division by zero");

    let mut quot = 0u32;
    let mut rem = a;

    while rem >= b {
        // Largest b << s that still fits below rem.
        let mut chunk = b;
        let mut part = 1u32;
        while chunk <= rem >> 1 {
            chunk <<= 1;
            part <<= 1;
        }
        rem -= chunk;
        quot += part;
    }

    (quot, rem)
}

/// Integer quotient of `a / b`. `b` must be nonzero.
pub fn div(a: u32, b: u32) -> u32 {
    div_rem(a, b).0
}

/// Integer remainder of `a` modulo `b`. `b` must be nonzero.
pub fn rem(a: u32, b: u32) -> u32 {
    div_rem(a, b).1
}

/// Returns the greatest common divisor of `a` and `b`.
///
/// Iterative Euclidean algorithm; `gcd(a, 0) == a`.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = rem(a, b);
        a = b;
        b = r;
    }
    a
}

/// Computes the multiplicative inverse of `a` modulo `m`.
///
/// Runs the extended Euclidean algorithm, tracking the Bézout coefficient
/// of `a` so that on success the returned `d` satisfies `(a * d) mod m == 1`,
/// normalized into `[0, m)`. Returns [`Error::NoInverse`] when
/// `gcd(a, m) != 1`; an inverse of 0 is never used as a failure sentinel.
pub fn mod_inverse(a: u32, m: u32) -> Result<u32> {
    if m == 0 {
        return Err(Error::NoInverse);
    }

    let (mut old_r, mut r) = (a, m);
    // Coefficients of `a` in old_r = s*a + t*m; they stay below m in
    // magnitude, so i64 never overflows.
    let (mut old_s, mut s) = (1i64, 0i64);

    while r != 0 {
        let (q, next_r) = div_rem(old_r, r);
        let next_s = old_s - i64::from(q) * s;
        old_r = r;
        r = next_r;
        old_s = s;
        s = next_s;
    }

    if old_r != 1 {
        return Err(Error::NoInverse);
    }

    let m = i64::from(m);
    let mut inv = old_s % m;
    if inv < 0 {
        inv += m;
    }
    Ok(inv as u32)
}
