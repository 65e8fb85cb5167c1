// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Rabin Cryptosystem
//!
//! Public-key encryption by modular squaring, `c = m² mod n` with
//! `n = p·q` for Blum primes `p ≡ q ≡ 3 (mod 4)`. Decryption needs the
//! factorization and yields four square roots; the plaintext is one of them.
//!
//! Reference: M. O. Rabin, "Digitalized Signatures and Public-Key Functions
//! as Intractable as Factorization", MIT/LCS/TR-212 (1979).
//!
//! ## Security
//!
//! This crate is a teaching implementation. Prime candidates are checked with
//! a single Fermat round by default, which accepts Fermat pseudoprimes, and no
//! redundancy is added to the plaintext, so the four roots can only be told
//! apart by inspecting them. The private key is zeroized on drop.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rabin::{Decrypt, Encrypt, KeyPair, codec};
//!
//! let keypair = KeyPair::generate_with_size(512).expect("key generation failed");
//! let message = "hello world";
//!
//! let ciphertext = keypair.encrypt(&codec::encode(message));
//! let candidates = keypair.decrypt(&ciphertext);
//!
//! let (_, text) = candidates.find_text(message).expect("plaintext among the roots");
//! assert_eq!(text, message);
//! ```

pub mod arith;
mod ciphertext;
pub mod codec;
mod crypto;
mod error;
mod keypair;
pub mod messenger;
pub mod prime;
mod rabin;

pub use ciphertext::*;
pub use crypto::*;
pub use error::*;
pub use keypair::*;
pub use messenger::{CandidateOutcome, Message, Messenger};
pub use prime::PrimalityTest;
pub use rabin::*;
