use std::mem::size_of;

use nbt_types::{Compound, Entry, List, NamedEntry, NbtString, Tag};
use nbt_wire::{ByteSource, WireReader};

use crate::budget::AllocationBudget;
use crate::config::DecoderConfig;
use crate::error::DecodeError;

/// Bytes charged per compound member on top of its name and payload.
const COMPOUND_SLOT: usize = size_of::<NbtString>() + size_of::<Entry>();

/// Recursive-descent NBT decoder.
///
/// Reads exactly one root entry from a [`ByteSource`] and builds the value
/// tree for it. Wire layout of a root (and of every compound member):
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │ tag          (u8)                                │
/// │ name_len     (u16, absent when tag = End)        │
/// │ name         [name_len bytes, modified UTF-8]    │
/// │ payload      (per tag)                           │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// List elements have no tag byte and no name; they are decoded with the
/// list's declared child tag. Compounds are read member by member until an
/// `End` tag. All multi-byte integers are big-endian.
///
/// Decoding is synchronous and holds no state between calls, so separate
/// sources can be decoded on separate threads.
///
/// # Example
///
/// ```rust
/// use nbt_decoder::NbtDecoder;
///
/// // {"": {"name": "Bananrama"}}
/// let payload = [
///     0x0A, 0x00, 0x00,
///     0x08, 0x00, 0x04, b'n', b'a', b'm', b'e',
///     0x00, 0x09, b'B', b'a', b'n', b'a', b'n', b'r', b'a', b'm', b'a',
///     0x00,
/// ];
/// let root = NbtDecoder::decode_slice(&payload).unwrap();
/// let compound = root.entry.as_compound().unwrap();
/// assert_eq!(compound.len(), 1);
/// ```
pub struct NbtDecoder;

impl NbtDecoder {
    /// Decode one named root entry with the default limits.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Truncated`] if the source ends mid-value.
    /// - [`DecodeError::InvalidTag`] if a tag byte is not 0..=12.
    /// - [`DecodeError::MalformedLength`] for a negative array or list length.
    /// - [`DecodeError::AllocationFailure`] / [`DecodeError::NestingTooDeep`]
    ///   when the default [`DecoderConfig`] limits are exceeded.
    /// - [`DecodeError::Wire`] for other failures of the source.
    pub fn decode<S: ByteSource + ?Sized>(source: &mut S) -> Result<NamedEntry, DecodeError> {
        Self::decode_with_config(source, &DecoderConfig::default())
    }

    /// Decode one named root entry under explicit limits.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode).
    pub fn decode_with_config<S: ByteSource + ?Sized>(
        source: &mut S,
        config: &DecoderConfig,
    ) -> Result<NamedEntry, DecodeError> {
        let start = source.offset();
        log::debug!("decoding root at offset {start}");
        let mut session = Session::new(source, config);
        let root = session.decode_value(true, None)?;

        log::debug!(
            "decoded {} root {:?}: {} bytes read, {} bytes reserved",
            root.entry.tag(),
            root.name,
            session.source.offset() - start,
            session.budget.used(),
        );
        Ok(root)
    }

    /// Decode the root and wrap it in a one-member compound keyed by its
    /// name, for callers that always want a compound at the top.
    ///
    /// # Errors
    ///
    /// All errors from [`decode`](Self::decode), plus
    /// [`DecodeError::MissingRootName`] when the root is a bare `End` tag.
    pub fn decode_as_compound<S: ByteSource + ?Sized>(source: &mut S) -> Result<Entry, DecodeError> {
        Self::decode_as_compound_with_config(source, &DecoderConfig::default())
    }

    /// [`decode_as_compound`](Self::decode_as_compound) under explicit limits.
    ///
    /// # Errors
    ///
    /// Same as [`decode_as_compound`](Self::decode_as_compound).
    pub fn decode_as_compound_with_config<S: ByteSource + ?Sized>(
        source: &mut S,
        config: &DecoderConfig,
    ) -> Result<Entry, DecodeError> {
        let root = Self::decode_with_config(source, config)?;
        let name = root.name.ok_or(DecodeError::MissingRootName)?;

        let mut compound = Compound::with_capacity(1);
        compound.insert(name, root.entry);
        Ok(Entry::Compound(compound))
    }

    /// Decode a complete in-memory payload.
    ///
    /// Unlike [`decode`](Self::decode), this also checks that the root entry
    /// spans the whole slice.
    ///
    /// # Errors
    ///
    /// All errors from [`decode`](Self::decode), plus
    /// [`DecodeError::TrailingData`] if bytes remain after the root.
    pub fn decode_slice(payload: &[u8]) -> Result<NamedEntry, DecodeError> {
        let mut reader = WireReader::new(payload);
        let root = Self::decode(&mut reader)?;

        // `Read for &[u8]` advances the slice, so what is left is unread.
        let extra_bytes = reader.get_ref().len();
        if extra_bytes > 0 {
            return Err(DecodeError::TrailingData { extra_bytes });
        }
        Ok(root)
    }
}

/// State of one decode: the source, the allocation account and the current
/// container depth.
struct Session<'a, S: ?Sized> {
    source: &'a mut S,
    budget: AllocationBudget,
    depth: usize,
    max_depth: usize,
}

impl<'a, S: ByteSource + ?Sized> Session<'a, S> {
    fn new(source: &'a mut S, config: &DecoderConfig) -> Self {
        Self {
            source,
            budget: AllocationBudget::new(config.allocation_limit),
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Decode one value.
    ///
    /// `named` is true for the root and for compound members, which carry a
    /// name unless they are the `End` terminator. `forced` is the declared
    /// child tag when decoding a list element, which has no tag byte.
    fn decode_value(&mut self, named: bool, forced: Option<Tag>) -> Result<NamedEntry, DecodeError> {
        let tag = match forced {
            Some(tag) => tag,
            None => self.read_tag()?,
        };

        let name = if named && tag != Tag::End {
            Some(self.read_string()?)
        } else {
            None
        };

        let entry = self.decode_payload(tag)?;
        Ok(NamedEntry { name, entry })
    }

    // Every nesting level recurses through this frame; array and string
    // reads stay in out-of-line helpers.
    fn decode_payload(&mut self, tag: Tag) -> Result<Entry, DecodeError> {
        let entry = match tag {
            Tag::End => Entry::End,
            Tag::Byte => Entry::Byte(self.source.read_i8()?),
            Tag::Short => Entry::Short(self.source.read_be_i16()?),
            Tag::Int => Entry::Int(self.source.read_be_i32()?),
            Tag::Long => Entry::Long(self.source.read_be_i64()?),
            Tag::Float => Entry::Float(self.source.read_be_f32()?),
            Tag::Double => Entry::Double(self.source.read_be_f64()?),
            Tag::ByteArray => Entry::ByteArray(self.read_byte_array()?),
            Tag::String => Entry::String(self.read_string()?),
            Tag::List => Entry::List(self.read_list()?),
            Tag::Compound => Entry::Compound(self.read_compound()?),
            Tag::IntArray => Entry::IntArray(self.read_int_array()?),
            Tag::LongArray => Entry::LongArray(self.read_long_array()?),
        };
        Ok(entry)
    }

    fn read_tag(&mut self) -> Result<Tag, DecodeError> {
        let offset = self.source.offset();
        let value = self.source.read_u8()?;
        Tag::from_byte(value).map_err(|_| DecodeError::InvalidTag { value, offset })
    }

    /// Read a signed 32-bit length prefix; negative values are rejected.
    fn read_length(&mut self, kind: Tag) -> Result<usize, DecodeError> {
        let offset = self.source.offset();
        let length = self.source.read_be_i32()?;
        usize::try_from(length).map_err(|_| DecodeError::MalformedLength {
            kind,
            length,
            offset,
        })
    }

    /// Names and string payloads: u16 length, then raw modified UTF-8.
    #[inline(never)]
    fn read_string(&mut self) -> Result<NbtString, DecodeError> {
        let len = usize::from(self.source.read_be_u16()?);
        Ok(NbtString::from_raw(self.read_bytes(len)?))
    }

    #[inline(never)]
    fn read_byte_array(&mut self) -> Result<Vec<i8>, DecodeError> {
        let len = self.read_length(Tag::ByteArray)?;
        let bytes = self.read_bytes(len)?;
        // Same layout, so the collect reuses the allocation.
        Ok(bytes.into_iter().map(|b| i8::from_be_bytes([b])).collect())
    }

    #[inline(never)]
    fn read_int_array(&mut self) -> Result<Vec<i32>, DecodeError> {
        let len = self.read_length(Tag::IntArray)?;
        let mut values = self.budget.reserve_vec::<i32>(len)?;
        for _ in 0..len {
            values.push(self.source.read_be_i32()?);
        }
        Ok(values)
    }

    #[inline(never)]
    fn read_long_array(&mut self) -> Result<Vec<i64>, DecodeError> {
        let len = self.read_length(Tag::LongArray)?;
        let mut values = self.budget.reserve_vec::<i64>(len)?;
        for _ in 0..len {
            values.push(self.source.read_be_i64()?);
        }
        Ok(values)
    }

    /// `len` raw bytes, charged and reserved before the read.
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, DecodeError> {
        let mut bytes = self.budget.reserve_vec::<u8>(len)?;
        bytes.resize(len, 0);
        self.source.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    fn read_list(&mut self) -> Result<List, DecodeError> {
        let child = self.read_tag()?;
        let len = self.read_length(Tag::List)?;
        log::trace!("list of {len} {child} at depth {}", self.depth);

        self.enter()?;
        let mut items = self.budget.reserve_vec::<Entry>(len)?;
        for _ in 0..len {
            items.push(self.decode_value(false, Some(child))?.entry);
        }
        self.leave();

        Ok(List { tag: child, items })
    }

    fn read_compound(&mut self) -> Result<Compound, DecodeError> {
        log::trace!("compound at depth {}", self.depth);

        self.enter()?;
        let mut compound = Compound::new();
        // Only the End terminator comes back without a name.
        while let NamedEntry {
            name: Some(name),
            entry,
        } = self.decode_value(true, None)?
        {
            self.budget.charge(COMPOUND_SLOT)?;
            compound.insert(name, entry);
        }
        self.leave();

        Ok(compound)
    }

    fn enter(&mut self) -> Result<(), DecodeError> {
        if self.depth >= self.max_depth {
            return Err(DecodeError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbt_wire::WireError;

    /// Root compound named "hello world" holding {"name": "Bananrama"}.
    const BANANRAMA: &str = concat!(
        "0a000b68656c6c6f20776f726c64", // compound "hello world"
        "0800046e616d65",               //   string "name"
        "000942616e616e72616d61",       //     "Bananrama"
        "00",                           // end
    );

    fn bytes(hex_str: &str) -> Vec<u8> {
        hex::decode(hex_str).unwrap()
    }

    fn decode_hex(hex_str: &str) -> Result<NamedEntry, DecodeError> {
        NbtDecoder::decode_slice(&bytes(hex_str))
    }

    // ── Acceptance scenarios ──────────────────────────────────────────────

    #[test]
    fn decodes_single_string_compound() {
        let payload = bytes(BANANRAMA);
        let mut reader = WireReader::new(payload.as_slice());
        let root = NbtDecoder::decode(&mut reader).unwrap();

        assert_eq!(root.name.as_ref().unwrap(), "hello world");
        let compound = root.entry.as_compound().expect("root should be a compound");
        assert_eq!(compound.len(), 1);
        assert_eq!(compound.get("name"), Some(&Entry::from("Bananrama")));

        // The terminating End byte was consumed and nothing else remains.
        assert_eq!(reader.offset(), payload.len() as u64);
    }

    #[test]
    fn decodes_int_list_in_order() {
        // root list "l" of 3 ints
        let root = decode_hex("0900016c0300000003000000010000000200000003").unwrap();
        let list = root.entry.as_list().unwrap();
        assert_eq!(list.tag, Tag::Int);
        assert_eq!(list.items, vec![Entry::Int(1), Entry::Int(2), Entry::Int(3)]);
    }

    #[test]
    fn empty_list_keeps_declared_tag() {
        for child in [Tag::End, Tag::Int, Tag::Compound, Tag::LongArray] {
            let payload = [0x09, 0x00, 0x00, child.to_byte(), 0x00, 0x00, 0x00, 0x00];
            let root = NbtDecoder::decode_slice(&payload).unwrap();
            let list = root.entry.as_list().unwrap();
            assert!(list.is_empty());
            assert_eq!(list.tag, child);
        }
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let root = decode_hex(concat!(
            "0a0000",
            "010001610a", // byte "a" = 10
            "010001620b", // byte "b" = 11
            "010001610c", // byte "a" = 12
            "00",
        ))
        .unwrap();
        let compound = root.entry.as_compound().unwrap();
        assert_eq!(compound.len(), 2);
        assert_eq!(compound.get("a"), Some(&Entry::Byte(12)));
        assert_eq!(compound.get("b"), Some(&Entry::Byte(11)));
    }

    #[test]
    fn scalars_and_arrays() {
        let root = decode_hex(concat!(
            "0a0000",
            "02000173fffe",                                     // short -2
            "04000167", "8000000000000000",                     // long i64::MIN
            "0500016640490fdb",                                 // float pi
            "060001643ff0000000000000",                         // double 1.0
            "07000162", "00000003", "01ff80",                   // [B;1,-1,-128]
            "0b000169", "00000002", "7fffffff80000000",         // [I;max,min]
            "0c00016c", "00000001", "0000000000000005",         // [L;5]
            "00",
        ))
        .unwrap();
        let c = root.entry.as_compound().unwrap();
        assert_eq!(c.get("s"), Some(&Entry::Short(-2)));
        assert_eq!(c.get("g"), Some(&Entry::Long(i64::MIN)));
        assert_eq!(c.get("f"), Some(&Entry::Float(f32::from_bits(0x4049_0FDB))));
        assert_eq!(c.get("d"), Some(&Entry::Double(1.0)));
        assert_eq!(c.get("b"), Some(&Entry::ByteArray(vec![1, -1, -128])));
        assert_eq!(c.get("i"), Some(&Entry::IntArray(vec![i32::MAX, i32::MIN])));
        assert_eq!(c.get("l"), Some(&Entry::LongArray(vec![5])));
    }

    #[test]
    fn nan_payload_survives() {
        let root = decode_hex("050000 7fc00123".replace(' ', "").as_str()).unwrap();
        match root.entry {
            Entry::Float(f) => assert_eq!(f.to_bits(), 0x7FC0_0123),
            other => panic!("expected Float, got {other:?}"),
        }
    }

    #[test]
    fn large_byte_array() {
        let len = 2 * 4096 + 17;
        let mut payload = vec![0x07, 0x00, 0x00];
        payload.extend_from_slice(&u32::try_from(len).unwrap().to_be_bytes());
        payload.extend((0..len).map(|i| (i % 251) as u8));

        let root = NbtDecoder::decode_slice(&payload).unwrap();
        match root.entry {
            Entry::ByteArray(values) => {
                assert_eq!(values.len(), len);
                assert_eq!(values[4099], (4099 % 251) as u8 as i8);
            }
            other => panic!("expected ByteArray, got {other:?}"),
        }
    }

    // ── Nested containers ─────────────────────────────────────────────────

    #[test]
    fn list_of_lists() {
        // root list of 2 lists: [[1b], []]
        let root = decode_hex(concat!(
            "090000", "09", "00000002",
            "01", "00000001", "01",
            "00", "00000000",
        ))
        .unwrap();
        let outer = root.entry.as_list().unwrap();
        assert_eq!(outer.tag, Tag::List);
        assert_eq!(
            outer.items,
            vec![
                Entry::List(List { tag: Tag::Byte, items: vec![Entry::Byte(1)] }),
                Entry::List(List::new(Tag::End)),
            ]
        );
    }

    #[test]
    fn list_of_compounds() {
        // root list of 2 compounds: [{"x": 1s}, {}]
        let root = decode_hex(concat!(
            "090000", "0a", "00000002",
            "020001780001", "00",
            "00",
        ))
        .unwrap();
        let list = root.entry.as_list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.items[0].as_compound().unwrap().get("x"),
            Some(&Entry::Short(1))
        );
        assert!(list.items[1].as_compound().unwrap().is_empty());
    }

    #[test]
    fn nested_compounds() {
        let root = decode_hex(concat!(
            "0a0000",
            "0a00016f",         // "o": {
            "0a000169",         //   "i": {
            "03000176000000ff", //     "v": 255
            "00", "00", "00",
        ))
        .unwrap();
        let inner = root.entry.as_compound().unwrap()
            .get("o").and_then(Entry::as_compound).unwrap()
            .get("i").and_then(Entry::as_compound).unwrap();
        assert_eq!(inner.get("v"), Some(&Entry::Int(255)));
    }

    // ── decode_as_compound ────────────────────────────────────────────────

    #[test]
    fn as_compound_wraps_root_by_name() {
        let payload = bytes(BANANRAMA);
        let wrapped = NbtDecoder::decode_as_compound(&mut WireReader::new(payload.as_slice())).unwrap();
        let outer = wrapped.as_compound().unwrap();
        assert_eq!(outer.len(), 1);
        let inner = outer.get("hello world").and_then(Entry::as_compound).unwrap();
        assert_eq!(inner.get("name"), Some(&Entry::from("Bananrama")));
    }

    #[test]
    fn as_compound_wraps_non_compound_root() {
        let wrapped =
            NbtDecoder::decode_as_compound(&mut WireReader::new(&[0x01, 0x00, 0x01, b'k', 0x07][..]))
                .unwrap();
        assert_eq!(wrapped.as_compound().unwrap().get("k"), Some(&Entry::Byte(7)));
    }

    #[test]
    fn as_compound_rejects_unnamed_root() {
        let result = NbtDecoder::decode_as_compound(&mut WireReader::new(&[0x00][..]));
        assert!(matches!(result, Err(DecodeError::MissingRootName)));
    }

    #[test]
    fn bare_end_root_decodes_unnamed() {
        let root = NbtDecoder::decode_slice(&[0x00]).unwrap();
        assert_eq!(root, NamedEntry::unnamed(Entry::End));
    }

    // ── Failure modes ─────────────────────────────────────────────────────

    #[test]
    fn every_prefix_is_truncated() {
        let payload = bytes(BANANRAMA);
        for cut in 0..payload.len() {
            let result = NbtDecoder::decode(&mut WireReader::new(&payload[..cut]));
            assert!(
                matches!(result, Err(ref e) if e.is_truncation()),
                "prefix of {cut} bytes gave {result:?}"
            );
        }
    }

    #[test]
    fn invalid_root_tag() {
        let result = decode_hex("0d0000");
        assert!(matches!(
            result,
            Err(DecodeError::InvalidTag { value: 0x0D, offset: 0 })
        ));
    }

    #[test]
    fn invalid_member_tag_reports_offset() {
        let result = decode_hex("0a0000ff");
        assert!(matches!(
            result,
            Err(DecodeError::InvalidTag { value: 0xFF, offset: 3 })
        ));
    }

    #[test]
    fn invalid_list_child_tag() {
        let result = decode_hex("0900002000000000");
        assert!(matches!(
            result,
            Err(DecodeError::InvalidTag { value: 0x20, offset: 3 })
        ));
    }

    #[test]
    fn negative_byte_array_length() {
        let result = decode_hex("070000ffffffff");
        assert!(matches!(
            result,
            Err(DecodeError::MalformedLength { kind: Tag::ByteArray, length: -1, offset: 3 })
        ));
    }

    #[test]
    fn negative_list_count() {
        let result = decode_hex("09000003 80000000".replace(' ', "").as_str());
        assert!(matches!(
            result,
            Err(DecodeError::MalformedLength { kind: Tag::List, length: i32::MIN, offset: 4 })
        ));
    }

    #[test]
    fn negative_long_array_length() {
        let result = decode_hex("0c0000fffffffe");
        assert!(matches!(
            result,
            Err(DecodeError::MalformedLength { kind: Tag::LongArray, length: -2, .. })
        ));
    }

    #[test]
    fn huge_length_hits_allocation_limit() {
        // [I; 0x7fffffff] declares 8 GiB of ints in a 7-byte payload.
        let result = decode_hex("0b00007fffffff");
        assert!(matches!(result, Err(DecodeError::AllocationFailure { .. })));
    }

    #[test]
    fn allocation_limit_is_configurable() {
        let payload = bytes(BANANRAMA);
        let config = DecoderConfig {
            allocation_limit: 8,
            ..DecoderConfig::default()
        };
        let result = NbtDecoder::decode_with_config(&mut WireReader::new(payload.as_slice()), &config);
        assert!(matches!(
            result,
            Err(DecodeError::AllocationFailure { limit: 8, .. })
        ));
    }

    #[test]
    fn nesting_limit() {
        let payload = bytes(concat!(
            "0a0000",
            "0a000161", "0a000161", "0a000161",
            "00", "00", "00", "00",
        ));
        let config = DecoderConfig {
            max_depth: 3,
            ..DecoderConfig::default()
        };
        let result = NbtDecoder::decode_with_config(&mut WireReader::new(payload.as_slice()), &config);
        assert!(matches!(result, Err(DecodeError::NestingTooDeep { limit: 3 })));

        let config = DecoderConfig {
            max_depth: 4,
            ..DecoderConfig::default()
        };
        assert!(NbtDecoder::decode_with_config(&mut WireReader::new(payload.as_slice()), &config).is_ok());
    }

    #[test]
    fn trailing_data_reported_for_slices() {
        let mut payload = bytes(BANANRAMA);
        payload.extend_from_slice(&[0xDE, 0xAD]);
        let result = NbtDecoder::decode_slice(&payload);
        assert!(matches!(result, Err(DecodeError::TrailingData { extra_bytes: 2 })));
    }

    #[test]
    fn io_failure_is_not_truncation() {
        struct Failing;
        impl std::io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk on fire"))
            }
        }

        let result = NbtDecoder::decode(&mut WireReader::new(Failing));
        assert!(matches!(result, Err(DecodeError::Wire(WireError::Io(_)))));
    }

    /// Collects debug records from every thread of the test binary.
    struct Capture(std::sync::Mutex<Vec<String>>);

    impl log::Log for Capture {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.level() <= log::Level::Debug
        }

        fn log(&self, record: &log::Record<'_>) {
            if self.enabled(record.metadata()) {
                if let Ok(mut lines) = self.0.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(std::sync::Mutex::new(Vec::new()));

    #[test]
    fn decode_logs_start_and_end() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Debug);

        let mut payload = bytes("0000");
        payload.extend_from_slice(&bytes(BANANRAMA));
        let mut reader = WireReader::new(payload.as_slice());
        reader.read_be_u16().unwrap();
        NbtDecoder::decode(&mut reader).unwrap();

        let lines = CAPTURE.0.lock().unwrap();
        assert!(lines.iter().any(|l| l == "decoding root at offset 2"), "{lines:?}");
        assert!(
            lines.iter().any(|l| l.starts_with("decoded TAG_Compound root")),
            "{lines:?}"
        );
    }
}
