// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::ciphertext::Ciphertext;
use crate::crypto::{Candidates, Decrypt, Encrypt};
use crate::error::{Error, Result};
use crate::prime::{self, PrimalityTest};

use num_bigint_dig::BigUint;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public key of the cryptosystem: the modulus `n = p·q`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) bit_length: usize,
}

impl PublicKey {
    /// Construct a public key from its modulus.
    pub fn new(n: BigUint) -> Result<Self> {
        if n.is_zero() {
            return Err(Error::InvalidKeyMaterial("modulus must be non-zero".into()));
        }
        let bit_length = n.bits();

        Ok(Self { n, bit_length })
    }

    /// Return the public modulus `n`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Return the bit length of the modulus.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }
}

/// Secret key material: the Blum primes `p` and `q`.
///
/// Both factors are zeroized on drop.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) public_key: PublicKey,
    pub(crate) p: BigUint,
    pub(crate) q: BigUint,
}

/// Both factors `≡ 3 (mod 4)`, prime under `test`, and distinct.
fn check_factors(p: &BigUint, q: &BigUint, test: PrimalityTest) -> Result<()> {
    for (name, factor) in [("p", p), ("q", q)] {
        if factor % 4u32 != BigUint::from(3u32) {
            return Err(Error::InvalidKeyMaterial(format!("{name} must be congruent to 3 mod 4")));
        }
        if !test.is_prime(factor) {
            return Err(Error::InvalidKeyMaterial(format!("{name} is not prime")));
        }
    }
    if p == q {
        return Err(Error::InvalidKeyMaterial("p and q must be distinct".into()));
    }

    Ok(())
}

impl PrivateKey {
    /// Construct a private key from its factors.
    ///
    /// The factors must be distinct Blum primes under the default primality
    /// test and must reconstruct the public modulus.
    pub fn new(public_key: PublicKey, p: BigUint, q: BigUint) -> Result<Self> {
        check_factors(&p, &q, PrimalityTest::default())?;
        if &p * &q != public_key.n {
            return Err(Error::InvalidKeyMaterial("p·q does not match the modulus".into()));
        }

        Ok(Self { public_key, p, q })
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Return a reference to the associated public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

/// A complete key pair consisting of public and private components.
///
/// Secret material is zeroized when dropped.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct KeyPair {
    #[zeroize(skip)]
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Generate a key pair with default parameters (512-bit modulus).
    pub fn generate() -> Result<Self> {
        KeyPairBuilder::new().build()
    }

    /// Generate a key pair with a custom modulus size.
    pub fn generate_with_size(bit_length: usize) -> Result<Self> {
        KeyPairBuilder::new().bit_length(bit_length).build()
    }

    /// Derive a key pair from caller-supplied primes.
    ///
    /// Both primes must be distinct, `≡ 3 (mod 4)` and pass the Fermat test.
    pub fn from_primes(p: BigUint, q: BigUint) -> Result<Self> {
        KeyPairBuilder::new().derive(p, q)
    }

    /// Return the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }

    /// Factors are already checked by the builder.
    fn assemble(p: BigUint, q: BigUint) -> Result<Self> {
        let public = PublicKey::new(&p * &q)?;
        let secret = PrivateKey { public_key: public.clone(), p, q };

        Ok(Self { public, secret })
    }
}

impl Encrypt for KeyPair {
    fn encrypt(&self, plaintext: &BigUint) -> Ciphertext {
        self.public.encrypt(plaintext)
    }

    fn encrypt_checked(&self, plaintext: &BigUint) -> Result<Ciphertext> {
        self.public.encrypt_checked(plaintext)
    }
}

impl Decrypt for KeyPair {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Candidates {
        self.secret.decrypt(ciphertext)
    }
}

/// Builder for generating or deriving key pairs with configurable parameters.
#[derive(Debug, Clone, Copy)]
pub struct KeyPairBuilder {
    bit_length: usize,
    primality: PrimalityTest,
}

impl KeyPairBuilder {
    /// Default modulus size.
    pub const DEFAULT_BITS: usize = 512;

    /// Sizes below this draw a warning.
    pub const RECOMMENDED_BITS: usize = 512;

    #[cfg(not(feature = "allow-weak-keys"))]
    pub const MIN_BITS: usize = 32;

    #[cfg(feature = "allow-weak-keys")]
    pub const MIN_BITS: usize = 8;

    /// Redraws of `q` allowed while it collides with `p`.
    const MAX_DISTINCT_ATTEMPTS: usize = 16;

    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self { bit_length: Self::DEFAULT_BITS, primality: PrimalityTest::default() }
    }

    /// Set the desired modulus bit length. Each prime gets half of it.
    pub fn bit_length(mut self, bits: usize) -> Self {
        self.bit_length = bits;
        self
    }

    /// Set the primality test used for generated and supplied primes.
    pub fn primality(mut self, test: PrimalityTest) -> Self {
        self.primality = test;
        self
    }

    /// Generate the key pair, drawing both primes in parallel.
    pub fn build(self) -> Result<KeyPair> {
        self.check_bit_length()?;
        let prime_bits = self.bit_length / 2;

        let (p, q) = rayon::join(
            || prime::generate_blum_prime_with(prime_bits, self.primality, &mut StdRng::from_entropy()),
            || prime::generate_blum_prime_with(prime_bits, self.primality, &mut StdRng::from_entropy()),
        );
        let p = p?;
        let q = q?;

        let mut rng = StdRng::from_entropy();
        self.finish(p, q, &mut rng)
    }

    /// Generate the key pair, drawing both primes from `rng`.
    pub fn build_with_rng<R: Rng>(self, rng: &mut R) -> Result<KeyPair> {
        self.check_bit_length()?;
        let prime_bits = self.bit_length / 2;

        let p = prime::generate_blum_prime_with(prime_bits, self.primality, rng)?;
        let q = prime::generate_blum_prime_with(prime_bits, self.primality, rng)?;

        self.finish(p, q, rng)
    }

    /// Derive a key pair from caller-supplied primes.
    pub fn derive(self, p: BigUint, q: BigUint) -> Result<KeyPair> {
        check_factors(&p, &q, self.primality)?;

        let keypair = KeyPair::assemble(p, q)?;
        tracing::info!(bits = keypair.public.bit_length, "derived key pair from supplied primes");

        Ok(keypair)
    }

    fn check_bit_length(&self) -> Result<()> {
        if self.bit_length < Self::MIN_BITS {
            return Err(Error::InvalidKeySize { min: Self::MIN_BITS, actual: self.bit_length });
        }
        if self.bit_length < Self::RECOMMENDED_BITS {
            tracing::warn!(bits = self.bit_length, "key size below {} bits is weak", Self::RECOMMENDED_BITS);
        }

        Ok(())
    }

    fn finish<R: Rng>(self, p: BigUint, mut q: BigUint, rng: &mut R) -> Result<KeyPair> {
        let prime_bits = self.bit_length / 2;
        let mut redraws = 0;

        while p == q {
            if redraws == Self::MAX_DISTINCT_ATTEMPTS {
                return Err(Error::KeyGenerationFailed("Primes must be distinct".into()));
            }
            q = prime::generate_blum_prime_with(prime_bits, self.primality, rng)?;
            redraws += 1;
        }

        let keypair = KeyPair::assemble(p, q)?;
        tracing::info!(bits = keypair.public.bit_length, "generated key pair");

        Ok(keypair)
    }
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}
