// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

use crate::ciphertext::Ciphertext;
use crate::codec;
use crate::crypto::{Candidates, Decrypt, Encrypt};
use crate::error::Result;
use crate::keypair::{KeyPair, PrivateKey, PublicKey};

/// Entry points for callers that only need the six basic operations.
pub struct Rabin;

impl Rabin {
    /// Generate a fresh key pair with a modulus of `bit_length` bits.
    pub fn generate_key_pair(bit_length: usize) -> Result<KeyPair> {
        KeyPair::generate_with_size(bit_length)
    }

    /// Build a key pair from two Blum primes.
    pub fn derive_keys(p: BigUint, q: BigUint) -> Result<KeyPair> {
        KeyPair::from_primes(p, q)
    }

    /// `c = m² mod n`.
    pub fn encrypt(pub_key: &PublicKey, plaintext: &BigUint) -> Ciphertext {
        pub_key.encrypt(plaintext)
    }

    /// The four square roots of `c` modulo `n`.
    pub fn decrypt(priv_key: &PrivateKey, ciphertext: &Ciphertext) -> Candidates {
        priv_key.decrypt(ciphertext)
    }

    pub fn encode(text: &str) -> BigUint {
        codec::encode(text)
    }

    pub fn decode(value: &BigUint) -> Result<String> {
        codec::decode(value)
    }
}
