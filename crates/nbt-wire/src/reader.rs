use std::io::{self, Read};

use crate::error::WireError;

/// A blocking source of bytes the decoder pulls from.
///
/// Only two things are required of an implementation: fill a buffer
/// completely or fail, and report how many bytes have been consumed so far.
/// Every fixed-width read is built on top of `read_exact` and interprets the
/// bytes as big-endian, which is the byte order of every multi-byte integer
/// in the format (length prefixes included).
///
/// A short read must surface as [`WireError::UnexpectedEof`]. It is never
/// padded or silently truncated.
///
/// Wrap a source in your own implementation to add cancellation, timeouts
/// or progress reporting; the decoder has no such hooks of its own.
pub trait ByteSource {
    /// Fill `buf` entirely from the source.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if the source ends first.
    /// - [`WireError::Io`] for any other failure of the underlying reader.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), WireError>;

    /// Number of bytes consumed from the source so far.
    fn offset(&self) -> u64;

    fn read_u8(&mut self) -> Result<u8, WireError> {
        let mut b = [0u8; 1];
        self.read_exact(&mut b)?;
        Ok(b[0])
    }

    fn read_i8(&mut self) -> Result<i8, WireError> {
        Ok(i8::from_be_bytes([self.read_u8()?]))
    }

    fn read_be_u16(&mut self) -> Result<u16, WireError> {
        let mut b = [0u8; 2];
        self.read_exact(&mut b)?;
        Ok(u16::from_be_bytes(b))
    }

    fn read_be_i16(&mut self) -> Result<i16, WireError> {
        let mut b = [0u8; 2];
        self.read_exact(&mut b)?;
        Ok(i16::from_be_bytes(b))
    }

    fn read_be_u32(&mut self) -> Result<u32, WireError> {
        let mut b = [0u8; 4];
        self.read_exact(&mut b)?;
        Ok(u32::from_be_bytes(b))
    }

    fn read_be_i32(&mut self) -> Result<i32, WireError> {
        let mut b = [0u8; 4];
        self.read_exact(&mut b)?;
        Ok(i32::from_be_bytes(b))
    }

    fn read_be_u64(&mut self) -> Result<u64, WireError> {
        let mut b = [0u8; 8];
        self.read_exact(&mut b)?;
        Ok(u64::from_be_bytes(b))
    }

    fn read_be_i64(&mut self) -> Result<i64, WireError> {
        let mut b = [0u8; 8];
        self.read_exact(&mut b)?;
        Ok(i64::from_be_bytes(b))
    }

    /// Read a binary32 float as the bit pattern of a big-endian `u32`.
    ///
    /// The bits are reinterpreted, not converted, so NaN payloads and
    /// signed zeros come through unchanged.
    fn read_be_f32(&mut self) -> Result<f32, WireError> {
        Ok(f32::from_bits(self.read_be_u32()?))
    }

    /// Read a binary64 float as the bit pattern of a big-endian `u64`.
    fn read_be_f64(&mut self) -> Result<f64, WireError> {
        Ok(f64::from_bits(self.read_be_u64()?))
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), WireError> {
        (**self).read_exact(buf)
    }

    fn offset(&self) -> u64 {
        (**self).offset()
    }
}

/// [`ByteSource`] over any [`std::io::Read`], tracking the stream offset.
///
/// ```text
///   &[u8] / File / TcpStream ──► WireReader ──► decoder
///                                  offset: bytes consumed so far
/// ```
///
/// The offset is what ends up in `UnexpectedEof { offset }`, pointing at
/// the start of the read that could not be satisfied.
#[derive(Debug)]
pub struct WireReader<R> {
    inner: R,
    offset: u64,
}

impl<R: Read> WireReader<R> {
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for WireReader<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), WireError> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.offset += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(WireError::UnexpectedEof {
                offset: self.offset,
            }),
            Err(e) => Err(WireError::Io(e)),
        }
    }

    fn offset(&self) -> u64 {
        self.offset
    }
}
