//! Java "modified UTF-8", the encoding of every string payload and name.
//!
//! It differs from standard UTF-8 in two places:
//!
//! ```text
//! ┌──────────────────────┬──────────────────────┬──────────────────────────┐
//! │ Character            │ UTF-8                │ Modified UTF-8           │
//! ├──────────────────────┼──────────────────────┼──────────────────────────┤
//! │ U+0000 (NUL)         │ 00                   │ C0 80                    │
//! │ U+1F600 (😀)         │ F0 9F 98 80          │ ED A0 BD ED B8 80        │
//! │                      │ (one 4-byte seq)     │ (surrogate pair, 2 × 3)  │
//! └──────────────────────┴──────────────────────┴──────────────────────────┘
//! ```
//!
//! Decoding accepts what `java.io.DataInput::readUTF` accepts: 1-, 2- and
//! 3-byte sequences, each yielding one UTF-16 code unit. A raw `00` byte is
//! tolerated. Surrogate pairs are recombined; 4-byte sequences and unpaired
//! surrogates are rejected since neither can come out of a Java writer.

use std::borrow::Cow;

use crate::error::WireError;

/// Decode modified UTF-8 into a Rust string.
///
/// Input that is also plain UTF-8 without 4-byte sequences is returned
/// borrowed; both encodings agree on it byte for byte.
///
/// # Errors
///
/// Returns [`WireError::InvalidModifiedUtf8`] with the index of the first
/// byte of the offending sequence.
pub fn decode(bytes: &[u8]) -> Result<Cow<'_, str>, WireError> {
    if let Some(s) = as_plain_utf8(bytes) {
        return Ok(Cow::Borrowed(s));
    }
    decode_units(bytes, false)
        .map(Cow::Owned)
        .map_err(|index| WireError::InvalidModifiedUtf8 { index })
}

/// Decode modified UTF-8, replacing every malformed sequence with U+FFFD.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Some(s) = as_plain_utf8(bytes) {
        return Cow::Borrowed(s);
    }
    // The lossy walk never reports an error.
    Cow::Owned(decode_units(bytes, true).unwrap_or_default())
}

/// Encode a Rust string as modified UTF-8.
///
/// Only strings containing NUL or supplementary characters need a copy.
pub fn encode(s: &str) -> Cow<'_, [u8]> {
    if !s.bytes().any(|b| b == 0x00 || b >= 0xF0) {
        return Cow::Borrowed(s.as_bytes());
    }

    let mut out = Vec::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\0' => out.extend_from_slice(&[0xC0, 0x80]),
            c if u32::from(c) < 0x1_0000 => {
                let mut buf = [0u8; 3];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
            c => {
                let mut units = [0u16; 2];
                for &unit in c.encode_utf16(&mut units).iter() {
                    push_three_byte_unit(&mut out, unit);
                }
            }
        }
    }
    Cow::Owned(out)
}

#[allow(clippy::cast_possible_truncation)]
fn push_three_byte_unit(out: &mut Vec<u8>, unit: u16) {
    out.push(0xE0 | (unit >> 12) as u8);
    out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
    out.push(0x80 | (unit & 0x3F) as u8);
}

fn as_plain_utf8(bytes: &[u8]) -> Option<&str> {
    if bytes.iter().any(|&b| b >= 0xF0) {
        return None;
    }
    std::str::from_utf8(bytes).ok()
}

/// Walk the input one UTF-16 code unit at a time.
///
/// On failure in strict mode the error is the byte index where the
/// offending sequence starts.
fn decode_units(bytes: &[u8], lossy: bool) -> Result<String, usize> {
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let Some((unit, width)) = read_unit(bytes, i) else {
            if !lossy {
                return Err(start);
            }
            out.push(char::REPLACEMENT_CHARACTER);
            i += 1;
            continue;
        };
        i += width;

        let decoded = match unit {
            0xD800..=0xDBFF => match read_unit(bytes, i) {
                Some((low @ 0xDC00..=0xDFFF, low_width)) => {
                    i += low_width;
                    let high = u32::from(unit) - 0xD800;
                    let low = u32::from(low) - 0xDC00;
                    char::from_u32(0x1_0000 + (high << 10) + low)
                }
                _ => None,
            },
            // Lone low surrogates map to None here.
            _ => char::from_u32(u32::from(unit)),
        };

        match decoded {
            Some(c) => out.push(c),
            None if lossy => out.push(char::REPLACEMENT_CHARACTER),
            None => return Err(start),
        }
    }

    Ok(out)
}

/// Decode the single code unit starting at `i`, with its byte width.
fn read_unit(bytes: &[u8], i: usize) -> Option<(u16, usize)> {
    let b0 = *bytes.get(i)?;
    match b0 {
        0x00..=0x7F => Some((u16::from(b0), 1)),
        0xC0..=0xDF => {
            let b1 = continuation(bytes, i + 1)?;
            Some(((u16::from(b0 & 0x1F) << 6) | u16::from(b1), 2))
        }
        0xE0..=0xEF => {
            let b1 = continuation(bytes, i + 1)?;
            let b2 = continuation(bytes, i + 2)?;
            Some((
                (u16::from(b0 & 0x0F) << 12) | (u16::from(b1) << 6) | u16::from(b2),
                3,
            ))
        }
        _ => None,
    }
}

/// The six payload bits of a continuation byte `10xxxxxx`.
fn continuation(bytes: &[u8], i: usize) -> Option<u8> {
    let b = *bytes.get(i)?;
    (b & 0xC0 == 0x80).then_some(b & 0x3F)
}
