/// Default cap on the bytes one decode may reserve: 256 MiB.
pub const DEFAULT_ALLOCATION_LIMIT: usize = 256 * 1024 * 1024;

/// Default cap on list/compound nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Limits applied to a single decode.
///
/// ```text
/// ┌──────────────────┬──────────┬─────────────────────────────────────────┐
/// │ Field            │ Default  │ Guards against                          │
/// ├──────────────────┼──────────┼─────────────────────────────────────────┤
/// │ allocation_limit │ 256 MiB  │ forged length prefixes reserving memory │
/// │                  │          │ long before the short read shows up     │
/// │ max_depth        │ 256      │ deeply nested containers exhausting the │
/// │                  │          │ stack of the recursive decoder          │
/// └──────────────────┴──────────┴─────────────────────────────────────────┘
/// ```
///
/// `allocation_limit` counts payload storage: array elements, string and
/// name bytes, list slots and compound slots. It is checked before each
/// reservation, so a payload is rejected as soon as a declared length would
/// cross it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub allocation_limit: usize,
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            allocation_limit: DEFAULT_ALLOCATION_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
