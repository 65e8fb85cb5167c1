// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Primality testing and Blum prime generation.
//!
//! The default test is a single Fermat round with base 2. It accepts every
//! prime, but it also accepts base-2 Fermat pseudoprimes such as
//! `1387 = 19 · 73`. [`PrimalityTest::MillerRabin`] is available where that
//! matters.

use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use rand::Rng;

use crate::arith::square_and_multiply;
use crate::{Error, Result};

/// Primality test applied to generated and caller-supplied primes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimalityTest {
    /// One Fermat round with base 2.
    #[default]
    Fermat,
    /// Miller-Rabin with the given number of random bases.
    MillerRabin { rounds: usize },
}

impl PrimalityTest {
    /// Run this test on `n`.
    pub fn is_prime(&self, n: &BigUint) -> bool {
        match *self {
            Self::Fermat => is_probable_prime(n),
            Self::MillerRabin { rounds } => probably_prime(n, rounds.max(1)),
        }
    }
}

/// Fermat test with base 2: `2^(n-1) mod n == 1`.
///
/// `n ≤ 1` is rejected, 2 and 3 are accepted, other even numbers are rejected.
pub fn is_probable_prime(n: &BigUint) -> bool {
    match n.to_u8() {
        Some(0 | 1) => return false,
        Some(2 | 3) => return true,
        _ => {}
    }
    if n.is_even() {
        return false;
    }

    let n_minus_1 = n - BigUint::one();
    square_and_multiply(&BigUint::from(2u32), &n_minus_1, n).is_one()
}

/// Generates a prime `p ≡ 3 (mod 4)` of exactly `bits` bits using the Fermat test.
///
/// The search has no attempt ceiling. Very short bit lengths have few or no
/// Blum primes to find and may take long to return.
///
/// # Errors
///
/// Returns [`Error::BitLengthTooShort`] if `bits < 2`.
pub fn generate_blum_prime<R: Rng>(bits: usize, rng: &mut R) -> Result<BigUint> {
    generate_blum_prime_with(bits, PrimalityTest::Fermat, rng)
}

/// Like [`generate_blum_prime`] with an explicit primality test.
pub fn generate_blum_prime_with<R: Rng>(
    bits: usize,
    test: PrimalityTest,
    rng: &mut R,
) -> Result<BigUint> {
    if bits < 2 {
        return Err(Error::BitLengthTooShort(bits));
    }

    let four = BigUint::from(4u32);
    let three = BigUint::from(3u32);
    let mut attempts = 0u64;

    loop {
        attempts += 1;
        let candidate = random_odd(bits, rng);

        if candidate.mod_floor(&four) != three {
            continue;
        }
        if test.is_prime(&candidate) {
            tracing::debug!(bits, attempts, "found Blum prime");
            return Ok(candidate);
        }
    }
}

/// Random odd integer with exactly `bits` bits (MSB and LSB set).
fn random_odd<R: Rng>(bits: usize, rng: &mut R) -> BigUint {
    let mut candidate = rng.gen_biguint(bits);
    candidate |= BigUint::one() << (bits - 1);
    candidate |= BigUint::one();
    candidate
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn small_values() {
        assert!(!is_probable_prime(&BigUint::from(0u32)));
        assert!(!is_probable_prime(&BigUint::from(1u32)));
        assert!(is_probable_prime(&BigUint::from(2u32)));
        assert!(is_probable_prime(&BigUint::from(3u32)));
        assert!(!is_probable_prime(&BigUint::from(4u32)));
        assert!(is_probable_prime(&BigUint::from(7u32)));
        assert!(!is_probable_prime(&BigUint::from(9u32)));
        assert!(!is_probable_prime(&BigUint::from(1024u32)));
    }

    #[test]
    fn fermat_accepts_base_two_pseudoprimes() {
        // 341 = 11·31 and 1387 = 19·73 both satisfy 2^(n-1) ≡ 1 (mod n)
        assert!(is_probable_prime(&BigUint::from(341u32)));
        assert!(is_probable_prime(&BigUint::from(1387u32)));

        let strong = PrimalityTest::MillerRabin { rounds: 20 };
        assert!(!strong.is_prime(&BigUint::from(341u32)));
        assert!(!strong.is_prime(&BigUint::from(1387u32)));
    }

    #[test]
    fn two_bit_blum_prime_is_three() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_blum_prime(2, &mut rng).unwrap(), BigUint::from(3u32));
    }

    #[test]
    fn rejects_degenerate_bit_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_blum_prime(0, &mut rng), Err(Error::BitLengthTooShort(0)));
        assert_eq!(generate_blum_prime(1, &mut rng), Err(Error::BitLengthTooShort(1)));
    }

    #[test]
    fn random_odd_has_exact_bit_length() {
        let mut rng = StdRng::seed_from_u64(99);
        for bits in 2..200 {
            let n = random_odd(bits, &mut rng);
            assert_eq!(n.bits(), bits);
            assert!(n.is_odd());
        }
    }

    #[test]
    fn miller_rabin_blum_prime_256() {
        let mut rng = StdRng::seed_from_u64(2025);
        let test = PrimalityTest::MillerRabin { rounds: 20 };
        let p = generate_blum_prime_with(256, test, &mut rng).unwrap();

        assert_eq!(p.bits(), 256);
        assert_eq!(&p % 4u32, BigUint::from(3u32));
        assert!(probably_prime(&p, 20));
    }

    fn strategy_for_odd_integer(upper_bound: usize) -> impl Strategy<Value = (usize, bool)> {
        let sieve = primal::Sieve::new(upper_bound);
        (5..upper_bound)
            .prop_filter("is_odd", |n| n % 2 == 1)
            .prop_map(move |n| (n, sieve.is_prime(n)))
    }

    proptest! {
        #[test]
        fn fermat_never_rejects_a_prime((n, is_prime) in strategy_for_odd_integer(100_000)) {
            if is_prime {
                prop_assert!(is_probable_prime(&BigUint::from(n)));
            }
        }

        #[test]
        fn blum_primes_satisfy_constraint(bits in 8usize..96, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = generate_blum_prime(bits, &mut rng).unwrap();

            prop_assert_eq!(p.bits(), bits);
            prop_assert_eq!(&p % 4u32, BigUint::from(3u32));
            prop_assert!(is_probable_prime(&p));
        }
    }
}
