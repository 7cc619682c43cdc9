use nbt_wire::WireError;

/// Errors raised by the value model itself.
///
/// ```text
/// ┌─────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                              │
/// │   ├── InvalidTag for tag bytes outside 0..=12       │
/// │   └── wraps WireError for string decoding failures  │
/// └─────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// A byte that should have been a tag is not one of the 13 known tags.
    #[error("invalid tag byte: {value:#04X}")]
    InvalidTag { value: u8 },

    /// A string payload could not be decoded as modified UTF-8.
    #[error(transparent)]
    Wire(#[from] WireError),
}
