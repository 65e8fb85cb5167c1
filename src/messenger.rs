// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message exchange over a single key pair.
//!
//! Each sent message is encoded, encrypted, decrypted again and matched
//! against the four candidates. The whole exchange is kept in the history so
//! a front end can render it.

use std::time::SystemTime;

use num_bigint_dig::BigUint;

use crate::ciphertext::Ciphertext;
use crate::codec;
use crate::crypto::{Candidates, Decrypt, Encrypt};
use crate::error::{Error, Result};
use crate::keypair::KeyPair;

/// How one decryption candidate decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// Decoded to the original message.
    Matches,
    /// Valid UTF-8, but some other text.
    Differs(String),
    /// Not valid UTF-8.
    Undecodable(Error),
}

/// A sent message together with every intermediate value.
#[derive(Debug, Clone)]
pub struct Message {
    pub original: String,
    pub encoded: BigUint,
    pub ciphertext: Ciphertext,
    pub candidates: Candidates,
    pub outcomes: [CandidateOutcome; 4],
    /// Index of the candidate that reproduced the original, if any.
    pub recovered: Option<usize>,
    pub timestamp: SystemTime,
}

impl Message {
    /// The recovered text, if one of the candidates matched.
    pub fn decrypted_text(&self) -> Option<&str> {
        self.recovered.map(|_| self.original.as_str())
    }
}

/// Session state: the active key pair and the messages sent with it.
#[allow(missing_debug_implementations)]
pub struct Messenger {
    keypair: KeyPair,
    history: Vec<Message>,
}

impl Messenger {
    pub fn new(keypair: KeyPair) -> Self {
        tracing::info!(bits = keypair.public_key().bit_length(), "messenger ready");
        Self { keypair, history: Vec::new() }
    }

    pub fn keypair(&self) -> &KeyPair {
        &self.keypair
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Swap in a new key pair. Earlier messages stay in the history.
    pub fn rekey(&mut self, keypair: KeyPair) {
        tracing::info!(bits = keypair.public_key().bit_length(), "keys replaced");
        self.keypair = keypair;
    }

    /// Encrypt `text`, decrypt it again and record which candidate matched.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyMessage`] for blank text, [`Error::PlaintextTooLarge`]
    /// if the encoded message does not fit below the modulus.
    pub fn send(&mut self, text: &str) -> Result<&Message> {
        if text.trim().is_empty() {
            return Err(Error::EmptyMessage);
        }
        tracing::info!(text, "sending message");

        let encoded = codec::encode(text);
        tracing::debug!(%encoded, "message encoded");

        let ciphertext = self.keypair.encrypt_checked(&encoded)?;
        tracing::debug!(%ciphertext, "message encrypted");

        let candidates = self.keypair.decrypt(&ciphertext);
        tracing::debug!(
            candidates = ?candidates.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "message decrypted"
        );

        let outcomes = candidates.decode_all().map(|decoded| match decoded {
            Ok(candidate) if candidate == text => CandidateOutcome::Matches,
            Ok(candidate) => CandidateOutcome::Differs(candidate),
            Err(err) => CandidateOutcome::Undecodable(err),
        });
        for (index, outcome) in outcomes.iter().enumerate() {
            tracing::debug!(index, ?outcome, "candidate checked");
        }

        let recovered = outcomes.iter().position(|outcome| *outcome == CandidateOutcome::Matches);
        match recovered {
            Some(index) => tracing::info!(index, "original message found"),
            None => tracing::warn!("original message not found among candidates"),
        }

        self.history.push(Message {
            original: text.to_owned(),
            encoded,
            ciphertext,
            candidates,
            outcomes,
            recovered,
            timestamp: SystemTime::now(),
        });

        Ok(&self.history[self.history.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::keypair::KeyPairBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn messenger(bits: usize) -> Messenger {
        let mut rng = StdRng::seed_from_u64(42);
        Messenger::new(KeyPairBuilder::new().bit_length(bits).build_with_rng(&mut rng).unwrap())
    }

    #[test]
    fn send_recovers_original() {
        let mut messenger = messenger(512);

        let message = messenger.send("Привет").unwrap();
        let index = message.recovered.unwrap();

        assert_eq!(message.outcomes[index], CandidateOutcome::Matches);
        assert_eq!(message.decrypted_text(), Some("Привет"));
        assert_eq!(&message.candidates.as_slice()[index], &message.encoded);
        assert_eq!(messenger.history().len(), 1);
    }

    #[test]
    fn spurious_roots_fail_to_decode() {
        let mut messenger = messenger(512);
        let message = messenger.send("Hello from the other side").unwrap();

        let undecodable = message
            .outcomes
            .iter()
            .filter(|outcome| matches!(outcome, CandidateOutcome::Undecodable(Error::Decode(_))))
            .count();
        assert!(undecodable >= 1);
    }

    #[test]
    fn blank_messages_are_rejected() {
        let mut messenger = messenger(64);

        assert_eq!(messenger.send("").unwrap_err(), Error::EmptyMessage);
        assert_eq!(messenger.send("  \n").unwrap_err(), Error::EmptyMessage);
        assert!(messenger.history().is_empty());
    }

    #[test]
    fn oversized_message_is_rejected() {
        let mut messenger = messenger(64);
        let err = messenger.send("far too long for a 64-bit modulus").unwrap_err();

        assert_eq!(err, Error::PlaintextTooLarge);
        assert!(messenger.history().is_empty());
    }

    #[test]
    fn rekey_keeps_history() {
        let mut messenger = messenger(256);
        messenger.send("first").unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        messenger.rekey(KeyPairBuilder::new().bit_length(256).build_with_rng(&mut rng).unwrap());
        messenger.send("second").unwrap();

        let originals: Vec<&str> = messenger.history().iter().map(|m| m.original.as_str()).collect();
        assert_eq!(originals, ["first", "second"]);
        assert!(messenger.history().iter().all(|m| m.recovered.is_some()));
    }
}
