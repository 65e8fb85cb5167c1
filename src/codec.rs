// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text ↔ integer conversion through big-endian hex.
//!
//! Leading zero bytes do not survive the trip: the integer has no way to
//! remember them. Decoding restores a single missing zero nibble so that
//! every byte is two digits again, nothing more. The empty string encodes to
//! zero, and zero decodes to a single NUL byte.

use num_bigint_dig::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Interprets the UTF-8 bytes of `text` as a big-endian integer.
pub fn encode(text: &str) -> BigUint {
    let digits = hex::encode(text.as_bytes());
    BigUint::parse_bytes(digits.as_bytes(), 16).unwrap_or_else(BigUint::zero)
}

/// Renders `value` as bytes and decodes them as UTF-8.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not valid UTF-8.
pub fn decode(value: &BigUint) -> Result<String> {
    let bytes = decode_bytes(value)?;
    Ok(String::from_utf8(bytes)?)
}

/// Byte form of `value`, with a zero nibble prepended to odd-length hex.
pub fn decode_bytes(value: &BigUint) -> Result<Vec<u8>> {
    let mut digits = value.to_str_radix(16);
    if digits.len() % 2 != 0 {
        digits.insert(0, '0');
    }

    hex::decode(&digits).map_err(|e| Error::InvalidHex(e.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encodes_hi() {
        assert_eq!(encode("Hi"), BigUint::from(18537u32));
        assert_eq!(decode(&BigUint::from(18537u32)).unwrap(), "Hi");
    }

    #[test]
    fn odd_digit_count_is_padded() {
        // 0x0a41 renders as "a41"
        assert_eq!(decode(&BigUint::from(0x0a41u32)).unwrap(), "\nA");
    }

    #[test]
    fn multibyte_text() {
        for text in ["Привет", "こんにちは世界", "Hello, 世界!", "🦀"] {
            assert_eq!(decode(&encode(text)).unwrap(), text);
        }
    }

    #[test]
    fn zero_decodes_to_nul() {
        assert!(encode("").is_zero());
        assert_eq!(decode_bytes(&BigUint::zero()).unwrap(), [0u8]);
        assert_eq!(decode(&BigUint::zero()).unwrap(), "\0");
        assert_eq!(decode(&encode("\0")).unwrap(), "\0");
    }

    #[test]
    fn leading_nul_bytes_are_lost() {
        assert_eq!(decode(&encode("\0\0ab")).unwrap(), "ab");
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let err = decode(&BigUint::from(0xfffeu32)).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    proptest! {
        #[test]
        fn round_trip(text in "[^\\x00].*") {
            prop_assert_eq!(decode(&encode(&text)).unwrap(), text);
        }

        #[test]
        fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = decode(&BigUint::from_bytes_be(&bytes));
        }
    }
}
