#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use rabin::codec;

fuzz_target!(|data: &[u8]| {
    // Arbitrary integers must decode or fail cleanly
    let _ = codec::decode(&BigUint::from_bytes_be(data));

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.is_empty() || text.starts_with('\0') {
        return;
    }

    let decoded = codec::decode(&codec::encode(text)).unwrap();
    assert_eq!(decoded, text);
});
