#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use rabin::{Decrypt, Encrypt, KeyPair};
use std::sync::OnceLock;

static KEYPAIR: OnceLock<Option<KeyPair>> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let Some(key_pair) = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(256).ok()).as_ref() else {
        return;
    };
    let n = key_pair.public_key().n();

    // Limit input to modulus size
    let len = n.to_bytes_be().len();
    let truncated = if data.len() > len { &data[..len] } else { data };
    let plaintext = BigUint::from_bytes_be(truncated) % n;

    let ciphertext = key_pair.encrypt(&plaintext);
    let candidates = key_pair.decrypt(&ciphertext);

    assert!(
        candidates.contains(&plaintext),
        "plaintext {plaintext} missing from candidates {:?}",
        candidates.as_slice()
    );
});
