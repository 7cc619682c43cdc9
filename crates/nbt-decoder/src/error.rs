use nbt_types::Tag;
use nbt_wire::WireError;

/// Errors that can occur while decoding a payload.
///
/// Any of these aborts the whole decode: no partial tree is returned, since
/// bytes after a bad length or tag cannot be interpreted reliably.
///
/// ```text
///   DecodeError
///   ├── InvalidTag           ← byte in a tag position is not 0..=12
///   ├── MalformedLength      ← negative array / list length
///   ├── Truncated            ← source ended in the middle of a value
///   ├── AllocationFailure    ← allocation limit exceeded or reservation failed
///   ├── NestingTooDeep       ← lists/compounds nested beyond the depth limit
///   ├── MissingRootName      ← decode_as_compound on an unnamed root
///   ├── TrailingData         ← bytes left after the root (slice input only)
///   └── Wire(WireError)      ← I/O failure from the byte source
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A byte read where a tag was expected is not a known tag.
    #[error("invalid tag byte {value:#04X} at offset {offset}")]
    InvalidTag { value: u8, offset: u64 },

    /// A declared length is structurally impossible.
    ///
    /// `kind` is the tag whose length prefix was being read.
    #[error("malformed {kind} length {length} at offset {offset}")]
    MalformedLength { kind: Tag, length: i32, offset: u64 },

    /// The source ran out of bytes in the middle of a value.
    #[error("input truncated at offset {offset}")]
    Truncated { offset: u64 },

    /// A declared length would exceed the allocation limit, or the
    /// allocator refused the reservation.
    #[error("cannot allocate {requested} bytes (limit {limit})")]
    AllocationFailure { requested: usize, limit: usize },

    /// Containers are nested deeper than the configured limit.
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    /// The root entry has no name, so it cannot be wrapped into a compound.
    ///
    /// Only a bare `End` tag at the root produces this.
    #[error("root entry has no name")]
    MissingRootName,

    /// Bytes remain after the root entry of an in-memory payload.
    #[error("unexpected data after root entry ({extra_bytes} bytes)")]
    TrailingData { extra_bytes: usize },

    /// Failure of the underlying byte source other than end of stream.
    #[error(transparent)]
    Wire(WireError),
}

impl From<WireError> for DecodeError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::UnexpectedEof { offset } => Self::Truncated { offset },
            other => Self::Wire(other),
        }
    }
}

impl DecodeError {
    /// Whether the input simply ended too early.
    #[must_use]
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}
