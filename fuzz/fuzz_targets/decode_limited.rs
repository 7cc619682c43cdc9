#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nbt_decoder::{DecodeError, DecoderConfig, NbtDecoder};
use nbt_wire::WireReader;

/// Limits and payload for one streaming decode.
#[derive(Debug, Arbitrary)]
struct LimitedInput {
    max_depth: u8,
    allocation_kib: u8,
    payload: Vec<u8>,
}

// Fuzz target: streaming decode under tight limits.
//
// The limits must be reported as errors, never exceeded.
fuzz_target!(|input: LimitedInput| {
    let config = DecoderConfig {
        max_depth: usize::from(input.max_depth),
        allocation_limit: usize::from(input.allocation_kib) * 1024,
    };
    let mut reader = WireReader::new(input.payload.as_slice());
    match NbtDecoder::decode_with_config(&mut reader, &config) {
        Err(DecodeError::NestingTooDeep { limit }) => assert_eq!(limit, config.max_depth),
        Err(DecodeError::AllocationFailure { limit, .. }) => {
            assert_eq!(limit, config.allocation_limit)
        }
        _ => {}
    }
});
