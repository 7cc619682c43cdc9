#![no_main]

use libfuzzer_sys::fuzz_target;
use nbt_wire::mutf8;

// Fuzz target: modified UTF-8 encode->decode roundtrip.
//
// Any Rust string must survive encoding, and the encoded form must never
// contain a raw NUL or a 4-byte sequence.
fuzz_target!(|s: String| {
    let encoded = mutf8::encode(&s);
    assert!(!encoded.contains(&0));
    assert!(encoded.iter().all(|&b| b < 0xF0));
    let decoded = mutf8::decode(&encoded).expect("encoded string must decode");
    assert_eq!(decoded, s);
});
