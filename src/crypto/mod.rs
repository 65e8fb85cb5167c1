// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod decrypt;
mod encrypt;

pub use decrypt::{Candidates, square_roots};
pub use encrypt::encrypt;

use num_bigint_dig::BigUint;

use crate::ciphertext::Ciphertext;
use crate::error::Result;

/// Encrypts a plaintext integer by squaring it modulo the public modulus.
pub trait Encrypt {
    /// Compute `c = m² mod n`.
    ///
    /// No range check is made. Only plaintexts strictly below `n` can be
    /// recovered by decryption.
    fn encrypt(&self, plaintext: &BigUint) -> Ciphertext;

    /// Like [`Encrypt::encrypt`], but rejects plaintexts `≥ n`.
    fn encrypt_checked(&self, plaintext: &BigUint) -> Result<Ciphertext>;
}

/// Recovers the four square roots of a ciphertext.
pub trait Decrypt {
    /// Return every `m` in `[0, n)` with `m² ≡ c (mod n)`.
    ///
    /// Exactly one of them is the original plaintext when `c` was produced
    /// from a plaintext below `n`. Which one cannot be told from the integers
    /// alone; see [`Candidates::find_text`].
    fn decrypt(&self, ciphertext: &Ciphertext) -> Candidates;
}
