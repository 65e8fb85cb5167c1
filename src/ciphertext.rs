// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::ops::Deref;

use num_bigint_dig::BigUint;

/// A Rabin ciphertext `c = m² mod n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    value: BigUint,
}

impl Ciphertext {
    /// Wrap a value already reduced modulo the public key.
    pub fn new(value: BigUint) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_inner(self) -> BigUint {
        self.value
    }
}

impl Deref for Ciphertext {
    type Target = BigUint;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_the_squared_value() {
        let c = Ciphertext::new(BigUint::from(18537u32));

        assert_eq!(c.value(), &BigUint::from(18537u32));
        assert_eq!(c.bits(), 15);
        assert_eq!(c.to_string(), "18537");
        assert_eq!(c.into_inner(), BigUint::from(18537u32));
    }
}
