// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::Zero;

use super::Encrypt;
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::PublicKey;

/// `plaintext² mod n`.
///
/// # Errors
///
/// [`Error::InvalidModulus`] if `n` is zero.
pub fn encrypt(plaintext: &BigUint, n: &BigUint) -> Result<BigUint> {
    if n.is_zero() {
        return Err(Error::InvalidModulus);
    }

    Ok(square_mod(plaintext, n))
}

/// `n` must be non-zero, which every [`PublicKey`] guarantees.
fn square_mod(plaintext: &BigUint, n: &BigUint) -> BigUint {
    (plaintext * plaintext) % n
}

impl Encrypt for PublicKey {
    fn encrypt(&self, plaintext: &BigUint) -> Ciphertext {
        Ciphertext::new(square_mod(plaintext, &self.n))
    }

    fn encrypt_checked(&self, plaintext: &BigUint) -> Result<Ciphertext> {
        if plaintext >= &self.n {
            return Err(Error::PlaintextTooLarge);
        }

        Ok(self.encrypt(plaintext))
    }
}
