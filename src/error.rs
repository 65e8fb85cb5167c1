// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::string::FromUtf8Error;

/// Errors that can occur during cryptographic operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("Invalid key size: must be at least {min} bits, got {actual}")]
    InvalidKeySize { min: usize, actual: usize },

    #[error("Bit length too short for prime generation: {0}")]
    BitLengthTooShort(usize),

    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    #[error("Modulus must be positive")]
    InvalidModulus,

    /// The integer does not decode to valid UTF-8. Three of the four
    /// decryption candidates routinely end up here.
    #[error("Candidate is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    #[error("Invalid hex digits: {0}")]
    InvalidHex(String),

    #[error("Plaintext exceeds maximum allowed value")]
    PlaintextTooLarge,

    #[error("Message must not be empty")]
    EmptyMessage,
}

pub type Result<T> = std::result::Result<T, Error>;
