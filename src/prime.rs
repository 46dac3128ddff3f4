//! Probabilistic primality testing.

use rand_core::RngCore;

use crate::arithmetic::{mod_mul, mod_pow};
use crate::numtheory::gcd;

/// Reports whether `candidate` is probably prime, applying `reps` rounds of
/// the Miller-Rabin test with randomly chosen witnesses.
///
/// If `candidate` is prime, this always returns `true`. For composite
/// `candidate` the probability of returning `true` is at most `4^-reps`;
/// 7 rounds already push the error below 0.01%.
///
/// *Warning*: this is not suitable for judging candidates an adversary may
/// have crafted to fool the test, and the quality of the verdict depends on
/// the provided random number generator.
pub fn probably_prime<R: RngCore + ?Sized>(rng: &mut R, candidate: u32, reps: u32) -> bool {
    match candidate {
        0 | 1 => return false,
        2 | 3 => return true,
        _ => {}
    }

    if candidate & 1 == 0 {
        return false;
    }

    // candidate - 1 = 2^k * m with m odd
    let mut m = candidate - 1;
    let mut k = 0;
    while m & 1 == 0 {
        m >>= 1;
        k += 1;
    }

    'witness: for _ in 0..reps {
        let a = random_witness(rng, candidate);

        // A shared nontrivial factor already proves compositeness.
        if gcd(a, candidate) != 1 {
            return false;
        }

        let mut b = mod_pow(a, m, candidate);
        if b == 1 || b == candidate - 1 {
            continue;
        }

        for _ in 0..k - 1 {
            b = mod_mul(b, b, candidate);
            if b == candidate - 1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Draws a witness uniformly from `[2, candidate - 2]`.
///
/// `candidate` is at least 5 here, so the range is never empty. The slight
/// modulo bias is irrelevant for compositeness testing.
fn random_witness<R: RngCore + ?Sized>(rng: &mut R, candidate: u32) -> u32 {
    2 + rng.next_u32() % (candidate - 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    const REPS: u32 = 7;

    #[test]
    fn test_small_cases() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        assert!(!probably_prime(&mut rng, 0, REPS));
        assert!(!probably_prime(&mut rng, 1, REPS));
        assert!(probably_prime(&mut rng, 2, REPS));
        assert!(probably_prime(&mut rng, 3, REPS));
        assert!(!probably_prime(&mut rng, 4, REPS));
        assert!(probably_prime(&mut rng, 5, REPS));
    }

    #[test]
    fn test_known_primes() {
        let primes = [7, 61, 53, 97, 65_537, 104_729, 2_147_483_647];

        for seed in 0..20u8 {
            let mut rng = ChaCha8Rng::from_seed([seed; 32]);
            for &p in &primes {
                assert!(probably_prime(&mut rng, p, REPS), "{p} flagged composite");
            }
        }
    }

    #[test]
    fn test_known_composites() {
        // 561 and 41041 are Carmichael numbers, the hard case for Fermat-only
        // testing.
        let composites = [9, 15, 221, 561, 1_105, 41_041, 65_535, 4_294_967_295];

        for seed in 0..20u8 {
            let mut rng = ChaCha8Rng::from_seed([seed; 32]);
            for &c in &composites {
                assert!(!probably_prime(&mut rng, c, REPS), "{c} flagged prime");
            }
        }
    }

    #[test]
    fn test_exhaustive_below_1000() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let mut sieve = [true; 1000];
        sieve[0] = false;
        sieve[1] = false;
        for i in 2..1000 {
            let mut j = i * i;
            while j < 1000 {
                sieve[j] = false;
                j += i;
            }
        }

        for n in 0..1000 {
            assert_eq!(
                probably_prime(&mut rng, n as u32, REPS),
                sieve[n],
                "mismatch at {n}"
            );
        }
    }
}
