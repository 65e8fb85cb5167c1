// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Modular arithmetic on arbitrary-precision integers.

use num_bigint_dig::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::{Error, Result};

/// Computes `base^exponent mod modulus` by binary square-and-multiply.
///
/// A modulus of one yields zero.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `modulus` is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidModulus);
    }

    Ok(square_and_multiply(base, exponent, modulus))
}

/// Exponentiation core shared with callers that already hold a non-zero modulus.
pub(crate) fn square_and_multiply(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    debug_assert!(!modulus.is_zero(), "modulus must be nonzero");

    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exponent = exponent >> 1usize;
    }

    result
}

/// Iterative extended Euclidean algorithm.
///
/// Returns `(d, x, y)` with `d = gcd(a, b)` and `a·x + b·y = d`.
pub fn extended_gcd(a: &BigUint, b: &BigUint) -> (BigUint, BigInt, BigInt) {
    let mut old_r = signed(a);
    let mut r = signed(b);
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_x = &old_x - &quotient * &x;
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = &old_y - &quotient * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    // Remainders stay non-negative for non-negative inputs.
    let gcd = old_r.to_biguint().unwrap_or_else(BigUint::zero);
    (gcd, old_x, old_y)
}

/// Euler's criterion: whether `a` is a non-zero square modulo the odd prime `p`.
pub fn is_quadratic_residue(a: &BigUint, p: &BigUint) -> bool {
    if p.is_zero() {
        return false;
    }
    let exponent = (p - BigUint::one()) >> 1usize;
    square_and_multiply(a, &exponent, p).is_one()
}

/// Reduces a signed value into `[0, modulus)`.
pub(crate) fn reduce(value: &BigInt, modulus: &BigUint) -> BigUint {
    value
        .mod_floor(&signed(modulus))
        .to_biguint()
        .unwrap_or_else(BigUint::zero)
}

#[inline]
pub(crate) fn signed(value: &BigUint) -> BigInt {
    BigInt::from_biguint(Sign::Plus, value.clone())
}
