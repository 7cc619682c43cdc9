#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: NbtDecoder::decode_slice on arbitrary bytes.
//
// Catches bugs in:
// - Negative or oversized length prefixes
// - Truncated payloads at any position
// - Invalid tag bytes in root, member and list-child positions
// - Unbounded recursion
fuzz_target!(|data: &[u8]| {
    let _ = nbt_decoder::NbtDecoder::decode_slice(data);
});
