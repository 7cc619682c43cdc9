use std::{fmt, io};

/// Errors that can occur while rendering a value tree.
///
/// Every [`Entry`](nbt_types::Entry) variant has a defined rendering, so the
/// tree itself can never make a render fail. Only the output can:
///
/// ```text
/// ┌─────────────┬───────────────────────────────────────────────────┐
/// │ Variant     │ Cause                                             │
/// ├─────────────┼───────────────────────────────────────────────────┤
/// │ SinkFailure │ The `fmt::Write` sink returned `fmt::Error`       │
/// │ Io          │ The `io::Write` sink behind `render_to_io` failed │
/// └─────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("output sink failed")]
    SinkFailure(#[from] fmt::Error),

    #[error("output I/O failed: {0}")]
    Io(#[from] io::Error),
}
