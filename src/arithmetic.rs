//! Overflow-safe modular arithmetic on `u32` residues.
//!
//! Operands near the modulus would wrap a native 32-bit add or multiply, so
//! every operation here is reduced back to conditional additions and
//! subtractions that provably stay in range: multiplication is binary
//! double-and-add over [`mod_add`], exponentiation is square-and-multiply
//! over [`mod_mul`].

use crate::numtheory::rem;

/// Computes `(a + b) mod n` without intermediate overflow.
///
/// Requires `a < n` and `b < n`. When the native sum wraps, the residue is
/// recovered as `a - (n - b)`, which equals `a + b - n` and cannot wrap
/// itself since the true sum exceeds `n`.
pub fn mod_add(a: u32, b: u32, n: u32) -> u32 {
    debug_assert!(n > 0 && a < n && b < n);

    let (sum, overflowed) = a.overflowing_add(b);
    if overflowed {
        a - (n - b)
    } else if sum >= n {
        sum - n
    } else {
        sum
    }
}

/// Computes `(a - b) mod n`.
///
/// Requires `a < n` and `b < n`; the borrow case is handled as `n - (b - a)`.
pub fn mod_sub(a: u32, b: u32, n: u32) -> u32 {
    debug_assert!(n > 0 && a < n && b < n);

    if a >= b {
        a - b
    } else {
        n - (b - a)
    }
}

/// Computes `(x * y) mod n` by binary double-and-add.
///
/// Requires `x < n`. Iterates the bits of `y` from least significant,
/// doubling an addend through [`mod_add`] and accumulating it whenever the
/// current bit is set, so no step ever forms a product wider than 32 bits.
pub fn mod_mul(x: u32, mut y: u32, n: u32) -> u32 {
    debug_assert!(n > 0 && x < n);

    let mut addend = x;
    let mut result = 0;

    while y > 0 {
        if y & 1 == 1 {
            result = mod_add(result, addend, n);
        }
        addend = mod_add(addend, addend, n);
        y >>= 1;
    }

    result
}

/// Computes `(base ^ exp) mod n` by binary square-and-multiply.
///
/// `exp == 0` yields the multiplicative identity 1; in the trivial ring
/// `n == 1` every residue is 0. `base` is reduced first, so any `u32` base
/// is accepted.
pub fn mod_pow(base: u32, mut exp: u32, n: u32) -> u32 {
    debug_assert!(n > 0);

    if n == 1 {
        return 0;
    }

    let mut base = if base < n { base } else { rem(base, n) };
    let mut result = 1;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base, n);
        }
        base = mod_mul(base, base, n);
        exp >>= 1;
    }

    result
}
