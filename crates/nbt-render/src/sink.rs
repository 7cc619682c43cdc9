use std::{fmt, io};

use crate::error::RenderError;

/// Bridges an `io::Write` into the `fmt::Write` the printer renders to.
///
/// `fmt::Error` carries no payload, so the real I/O error is parked here and
/// recovered by [`finish`](Self::finish).
pub(crate) struct IoSink<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// Turn the outcome of a render into the error that actually happened.
    pub(crate) fn finish(mut self, result: fmt::Result) -> Result<(), RenderError> {
        match (result, self.error.take()) {
            (Ok(()), _) => Ok(self.inner.flush()?),
            (Err(_), Some(err)) => Err(RenderError::Io(err)),
            (Err(err), None) => Err(RenderError::SinkFailure(err)),
        }
    }
}

impl<W: io::Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}
