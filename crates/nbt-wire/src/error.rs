/// Errors raised by the byte-level layer: short reads, I/O failures, and
/// malformed modified UTF-8.
///
/// Each variant carries the position where things went wrong. For
/// `UnexpectedEof` that is the absolute stream offset at which the read
/// started; for `InvalidModifiedUtf8` it is the index inside the string
/// payload being decoded.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The source ran out of bytes before a complete value could be read.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: u64 },

    /// A string payload is not valid Java modified UTF-8.
    #[error("invalid modified UTF-8 at byte {index}")]
    InvalidModifiedUtf8 { index: usize },

    /// I/O error from the underlying reader, other than end of stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
