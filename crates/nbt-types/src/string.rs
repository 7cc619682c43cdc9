use std::borrow::{Borrow, Cow};
use std::fmt;

use nbt_wire::mutf8;

use crate::error::TypeError;

/// A string payload or name exactly as it appeared on the wire.
///
/// The bytes are Java modified UTF-8 and are kept as-is: lengths and
/// truncation points are counted in bytes, and a name that is not valid
/// modified UTF-8 still works as a compound key. Decoding to a Rust string
/// happens on request:
///
/// - [`to_str`](Self::to_str) is strict and fails on malformed input;
/// - [`to_string_lossy`](Self::to_string_lossy) substitutes U+FFFD.
///
/// Construction from `&str` goes the other way and encodes to modified
/// UTF-8, so `NbtString::from("\0")` holds `C0 80`.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NbtString(Vec<u8>);

impl NbtString {
    /// Wrap raw modified UTF-8 bytes without checking them.
    #[must_use]
    pub fn from_raw(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length in bytes of the encoded form.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode with exact modified UTF-8 semantics.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::Wire`] if the bytes are not valid modified UTF-8.
    pub fn to_str(&self) -> Result<Cow<'_, str>, TypeError> {
        Ok(mutf8::decode(&self.0)?)
    }

    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        mutf8::decode_lossy(&self.0)
    }
}

impl From<&str> for NbtString {
    fn from(s: &str) -> Self {
        Self(mutf8::encode(s).into_owned())
    }
}

impl From<String> for NbtString {
    fn from(s: String) -> Self {
        let encoded = match mutf8::encode(&s) {
            Cow::Borrowed(_) => None,
            Cow::Owned(bytes) => Some(bytes),
        };
        Self(encoded.unwrap_or_else(|| s.into_bytes()))
    }
}

impl Borrow<[u8]> for NbtString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<str> for NbtString {
    fn eq(&self, other: &str) -> bool {
        self.0 == *mutf8::encode(other)
    }
}

impl PartialEq<&str> for NbtString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Debug for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str() {
            Ok(s) => fmt::Debug::fmt(&*s, f),
            Err(_) => write!(f, "NbtString({:02X?})", self.0),
        }
    }
}

impl fmt::Display for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_encodes_modified_utf8() {
        let s = NbtString::from("a\0");
        assert_eq!(s.as_bytes(), &[b'a', 0xC0, 0x80]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.to_str().unwrap(), "a\0");
    }

    #[test]
    fn compares_against_str() {
        let s = NbtString::from_raw(b"Bananrama".to_vec());
        assert_eq!(s, "Bananrama");
        assert_ne!(s, "Banana");
    }

    #[test]
    fn invalid_bytes_fail_strictly_but_render_lossy() {
        let s = NbtString::from_raw(vec![b'o', 0xFF, b'k']);
        assert!(matches!(s.to_str(), Err(TypeError::Wire(_))));
        assert_eq!(s.to_string_lossy(), "o\u{FFFD}k");
        assert_eq!(format!("{s:?}"), "NbtString([6F, FF, 6B])");
    }

    #[test]
    fn debug_quotes_valid_text() {
        assert_eq!(format!("{:?}", NbtString::from("hi")), "\"hi\"");
    }

    #[test]
    fn owned_string_conversion_keeps_plain_bytes() {
        let s = NbtString::from(String::from("plain"));
        assert_eq!(s.into_bytes(), b"plain".to_vec());
    }
}
