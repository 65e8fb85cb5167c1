// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::{One, Zero};

use super::Decrypt;
use crate::arith::{extended_gcd, reduce, signed, square_and_multiply};
use crate::ciphertext::Ciphertext;
use crate::codec;
use crate::error::{Error, Result};
use crate::keypair::PrivateKey;

impl Decrypt for PrivateKey {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Candidates {
        crt_roots(ciphertext.value(), &self.p, &self.q)
    }
}

/// Square roots of `c` modulo `p·q` from the raw factors.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyMaterial`] if either factor is zero or the
/// factors share a common divisor.
pub fn square_roots(c: &BigUint, p: &BigUint, q: &BigUint) -> Result<Candidates> {
    if p.is_zero() || q.is_zero() {
        return Err(Error::InvalidKeyMaterial("factors must be non-zero".into()));
    }
    if !extended_gcd(p, q).0.is_one() {
        return Err(Error::InvalidKeyMaterial("p and q must be coprime".into()));
    }

    Ok(crt_roots(c, p, q))
}

/// Rabin decryption for Blum primes `p` and `q`.
///
/// With `p ≡ 3 (mod 4)`, `c^((p+1)/4)` is a square root of `c` mod `p`
/// whenever `c` is a residue. The roots mod `p` and mod `q` are combined
/// through `yp·p + yq·q = 1`.
fn crt_roots(c: &BigUint, p: &BigUint, q: &BigUint) -> Candidates {
    let n = p * q;

    let r_p = square_and_multiply(c, &((p + BigUint::one()) >> 2usize), p);
    let r_q = square_and_multiply(c, &((q + BigUint::one()) >> 2usize), q);
    let roots_p = [r_p.clone(), p - &r_p];
    let roots_q = [r_q.clone(), q - &r_q];

    let (_, yp, yq) = extended_gcd(p, q);
    // yp·p ≡ 1 (mod q) and ≡ 0 (mod p); yq·q the other way round
    let selects_q = reduce(&(yp * signed(p)), &n);
    let selects_p = reduce(&(yq * signed(q)), &n);

    let combine = |root_p: &BigUint, root_q: &BigUint| (&selects_q * root_q + &selects_p * root_p) % &n;

    Candidates([
        combine(&roots_p[0], &roots_q[0]),
        combine(&roots_p[0], &roots_q[1]),
        combine(&roots_p[1], &roots_q[0]),
        combine(&roots_p[1], &roots_q[1]),
    ])
}

/// The four square roots produced by decryption.
///
/// Order follows the root choices `(+p, +q), (+p, −q), (−p, +q), (−p, −q)`.
/// Callers must try all four.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates(pub(crate) [BigUint; 4]);

impl Candidates {
    pub fn iter(&self) -> std::slice::Iter<'_, BigUint> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[BigUint] {
        &self.0
    }

    pub fn into_inner(self) -> [BigUint; 4] {
        self.0
    }

    pub fn contains(&self, value: &BigUint) -> bool {
        self.0.contains(value)
    }

    /// Decode every candidate as text. Failures stay local to their slot.
    pub fn decode_all(&self) -> [Result<String>; 4] {
        [
            codec::decode(&self.0[0]),
            codec::decode(&self.0[1]),
            codec::decode(&self.0[2]),
            codec::decode(&self.0[3]),
        ]
    }

    /// Index and text of the first candidate that decodes to `expected`.
    pub fn find_text(&self, expected: &str) -> Option<(usize, String)> {
        self.decode_all()
            .into_iter()
            .enumerate()
            .find_map(|(index, decoded)| match decoded {
                Ok(text) if text == expected => Some((index, text)),
                _ => None,
            })
    }
}

impl<'a> IntoIterator for &'a Candidates {
    type Item = &'a BigUint;
    type IntoIter = std::slice::Iter<'a, BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Candidates {
    type Item = BigUint;
    type IntoIter = std::array::IntoIter<BigUint, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
