//! RSA key types and key generation.

use rand_core::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::arithmetic::mod_mul;
use crate::cipher::transform;
use crate::errors::{Error, Result};
use crate::numtheory::{gcd, mod_inverse};
use crate::prime::probably_prime;

/// Miller-Rabin rounds per prime candidate; error rate at most `4^-7`.
const MILLER_RABIN_ROUNDS: u32 = 7;

/// The modulus must reach this floor so a 4-byte plaintext always fits
/// below it.
const MODULUS_FLOOR: u64 = 1 << 31;

/// Retry budget for the prime pair search.
const MAX_PRIME_ATTEMPTS: usize = 10_000;

/// Retry budget for the public exponent search.
const MAX_EXPONENT_ATTEMPTS: usize = 50_000;

/// Represents the public part of an RSA key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RsaPublicKey {
    /// Modulus: product of the two key primes.
    n: u32,
    /// Public exponent: coprime to the totient.
    e: u32,
}

/// Represents a whole RSA key, public and private parts.
///
/// All components are fixed at construction; private material is wiped
/// on drop.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct RsaPrivateKey {
    /// First prime factor of the modulus.
    p: u32,
    /// Second prime factor of the modulus.
    q: u32,
    /// Modulus: `p * q`, computed without wraparound.
    n: u32,
    /// Public exponent.
    e: u32,
    /// Private exponent: `(e * d) mod totient == 1`.
    d: u32,
}

impl From<&RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: &RsaPrivateKey) -> Self {
        RsaPublicKey {
            n: private_key.n,
            e: private_key.e,
        }
    }
}

impl RsaPublicKey {
    /// Returns the modulus of the key.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Returns the public exponent of the key.
    pub fn e(&self) -> u32 {
        self.e
    }

    /// Encrypts `data` with the public exponent: `data^e mod n`.
    ///
    /// `data` must lie in `[1, n)`; zero is a degenerate fixed point of the
    /// transform and is rejected along with anything outside the residue
    /// ring.
    pub fn encrypt(&self, data: u32) -> Result<u32> {
        transform(data, self.e, self.n)
    }
}

impl RsaPrivateKey {
    /// Generates a fresh keypair from the given random source.
    ///
    /// Two distinct 16-bit primes are sampled and validated with
    /// Miller-Rabin, then a public exponent coprime to the totient is
    /// searched for and its inverse derived via extended Euclid. Both
    /// searches are iteration-bounded and report
    /// [`Error::NonConvergence`] on exhaustion rather than spinning
    /// forever. The returned key has been re-validated against the RSA
    /// identities; an inconsistent key is never returned.
    pub fn new<R: RngCore + ?Sized>(rng: &mut R) -> Result<RsaPrivateKey> {
        let (p, q) = sample_prime_pair(rng)?;

        let n = u64::from(p) * u64::from(q);
        debug_assert!(n >= MODULUS_FLOOR && n <= u64::from(u32::MAX));
        let totient = (p - 1) * (q - 1);

        let (e, d) = find_exponents(rng, totient)?;

        let key = RsaPrivateKey {
            p,
            q,
            n: n as u32,
            e,
            d,
        };
        key.validate()?;
        Ok(key)
    }

    /// Builds a key from known prime factors and public exponent.
    ///
    /// Derives the modulus and private exponent, then checks the same
    /// invariants as [`RsaPrivateKey::new`]. Primality of `p` and `q` is
    /// the caller's responsibility. Fails with [`Error::InvalidKey`] when
    /// the factors produce an unusable modulus and [`Error::NoInverse`]
    /// when `e` is not coprime to the totient.
    pub fn from_components(p: u32, q: u32, e: u32) -> Result<RsaPrivateKey> {
        if p < 3 || q < 3 || p == q {
            return Err(Error::InvalidKey);
        }

        let n = u64::from(p) * u64::from(q);
        if n > u64::from(u32::MAX) {
            return Err(Error::InvalidKey);
        }

        let totient = (p - 1) * (q - 1);
        let d = mod_inverse(e, totient)?;

        let key = RsaPrivateKey {
            p,
            q,
            n: n as u32,
            e,
            d,
        };
        key.validate()?;
        Ok(key)
    }

    /// Returns the modulus of the key.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Returns the public exponent of the key.
    pub fn e(&self) -> u32 {
        self.e
    }

    /// Returns the private exponent of the key.
    pub fn d(&self) -> u32 {
        self.d
    }

    /// Returns the prime factors of the modulus.
    pub fn primes(&self) -> (u32, u32) {
        (self.p, self.q)
    }

    /// Decrypts `data` with the private exponent: `data^d mod n`.
    pub fn decrypt(&self, data: u32) -> Result<u32> {
        transform(data, self.d, self.n)
    }

    /// Performs basic sanity checks on the key's defining identities.
    ///
    /// `n == p * q` with no wraparound, `gcd(e, totient) == 1`,
    /// `e < totient` and `(e * d) mod totient == 1`. A violation here is an
    /// internal-consistency fault of key generation, not a user error.
    pub fn validate(&self) -> Result<()> {
        if self.p < 3 || self.q < 3 || self.p == self.q {
            return Err(Error::InvalidKey);
        }

        if u64::from(self.p) * u64::from(self.q) != u64::from(self.n) {
            return Err(Error::InvalidKey);
        }

        let totient = (self.p - 1) * (self.q - 1);
        if self.e >= totient || self.d >= totient {
            return Err(Error::InvalidKey);
        }

        if gcd(self.e, totient) != 1 {
            return Err(Error::InvalidKey);
        }

        if mod_mul(self.e, self.d, totient) != 1 {
            return Err(Error::InvalidKey);
        }

        Ok(())
    }
}

/// Samples a pair of distinct probable primes whose product lands in
/// `[2^31, 2^32)`.
fn sample_prime_pair<R: RngCore + ?Sized>(rng: &mut R) -> Result<(u32, u32)> {
    for _ in 0..MAX_PRIME_ATTEMPTS {
        let p = random_candidate(rng);
        let q = random_candidate(rng);

        if p == q {
            continue;
        }

        if !probably_prime(rng, p, MILLER_RABIN_ROUNDS)
            || !probably_prime(rng, q, MILLER_RABIN_ROUNDS)
        {
            continue;
        }

        // Candidate shaping already pins the product into the window;
        // verify it on the widened product regardless.
        let n = u64::from(p) * u64::from(q);
        if n < MODULUS_FLOOR || n > u64::from(u32::MAX) {
            continue;
        }

        return Ok((p, q));
    }

    Err(Error::NonConvergence)
}

/// Draws an odd 16-bit candidate with the top two bits set, so that the
/// product of any two candidates has exactly 32 bits.
fn random_candidate<R: RngCore + ?Sized>(rng: &mut R) -> u32 {
    (rng.next_u32() & 0xFFFF) | 0xC001
}

/// Searches for a public exponent coprime to the totient, deriving the
/// private exponent for each candidate.
///
/// Starts from a random point in `[2, totient)` and increments, accepting
/// only a candidate `e` whose own inverse exists and verifies
/// `(e * d) mod totient == 1`.
fn find_exponents<R: RngCore + ?Sized>(rng: &mut R, totient: u32) -> Result<(u32, u32)> {
    let mut e = 2 + rng.next_u32() % (totient - 2);

    for _ in 0..MAX_EXPONENT_ATTEMPTS {
        if e >= totient {
            e = 3;
        }

        if gcd(e, totient) == 1 {
            if let Ok(d) = mod_inverse(e, totient) {
                if mod_mul(e, d, totient) == 1 {
                    return Ok((e, d));
                }
            }
        }

        e += 1;
    }

    Err(Error::NonConvergence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn test_key_generation() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);

        for _ in 0..10 {
            let key = RsaPrivateKey::new(&mut rng).unwrap();
            key.validate().unwrap();

            let (p, q) = key.primes();
            assert_ne!(p, q);
            assert_eq!(u64::from(p) * u64::from(q), u64::from(key.n()));
            assert!(u64::from(key.n()) >= MODULUS_FLOOR);

            let totient = (p - 1) * (q - 1);
            assert_eq!(gcd(key.e(), totient), 1);
            assert!(key.e() < totient);
            assert_eq!(mod_mul(key.e(), key.d(), totient), 1);
        }
    }

    #[test]
    fn test_generated_key_round_trips() {
        let mut rng = ChaCha8Rng::from_seed([7; 32]);
        let key = RsaPrivateKey::new(&mut rng).unwrap();
        let public_key = RsaPublicKey::from(&key);

        for data in [1, 2, 65, 0x1234_5678, key.n() - 1] {
            let ciphertext = public_key.encrypt(data).unwrap();
            assert_eq!(key.decrypt(ciphertext).unwrap(), data);
        }
    }

    #[test]
    fn test_from_components_textbook_vector() {
        // The classic worked example: p=61, q=53, e=17.
        let key = RsaPrivateKey::from_components(61, 53, 17).unwrap();
        assert_eq!(key.n(), 3233);
        assert_eq!(key.d(), 2753);

        let public_key = RsaPublicKey::from(&key);
        assert_eq!(public_key.n(), 3233);
        assert_eq!(public_key.e(), 17);
        assert_eq!(public_key.encrypt(65).unwrap(), 2790);
        assert_eq!(key.decrypt(2790).unwrap(), 65);
    }

    #[test]
    fn test_from_components_rejects_degenerate_input() {
        let err = RsaPrivateKey::from_components(61, 61, 17).unwrap_err();
        assert_eq!(err, Error::InvalidKey);

        let err = RsaPrivateKey::from_components(0, 53, 17).unwrap_err();
        assert_eq!(err, Error::InvalidKey);
    }

    #[test]
    fn test_from_components_rejects_shared_factor_exponent() {
        // totient of (61, 53) is 3120; e=6 shares a factor with it.
        let err = RsaPrivateKey::from_components(61, 53, 6).unwrap_err();
        assert_eq!(err, Error::NoInverse);
    }

    #[test]
    fn test_public_key_from_private() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let key = RsaPrivateKey::new(&mut rng).unwrap();
        let public_key = RsaPublicKey::from(&key);

        assert_eq!(public_key.n(), key.n());
        assert_eq!(public_key.e(), key.e());
    }
}
