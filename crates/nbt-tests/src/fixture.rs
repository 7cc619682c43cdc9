use std::path::{Path, PathBuf};

use nbt_types::Tag;
use nbt_wire::mutf8;

/// Hand-encodes NBT byte sequences for tests.
///
/// This is a byte-level writer, not a serializer: it emits exactly the
/// headers and payload pieces it is told to, in order, so tests can build
/// both well-formed payloads and deliberately broken ones (negative lengths,
/// bad tags, missing terminators).
///
/// ```
/// use nbt_tests::PayloadBuilder;
/// use nbt_types::Tag;
///
/// // {"name": "Bananrama"} under a root compound named "hello world"
/// let payload = PayloadBuilder::new()
///     .named(Tag::Compound, "hello world")
///     .named(Tag::String, "name")
///     .string("Bananrama")
///     .end()
///     .finish();
/// assert_eq!(payload.len(), 33);
/// ```
#[derive(Default)]
pub struct PayloadBuilder {
    buf: Vec<u8>,
}

impl PayloadBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag byte followed by a name: a root header or a compound member.
    #[must_use]
    pub fn named(self, tag: Tag, name: &str) -> Self {
        self.tag(tag).string(name)
    }

    #[must_use]
    pub fn tag(self, tag: Tag) -> Self {
        self.u8(tag.to_byte())
    }

    /// Compound terminator.
    #[must_use]
    pub fn end(self) -> Self {
        self.tag(Tag::End)
    }

    /// List header: child tag and element count.
    #[must_use]
    pub fn list(self, child: Tag, count: i32) -> Self {
        self.tag(child).int(count)
    }

    #[must_use]
    pub fn u8(mut self, v: u8) -> Self {
        self.buf.push(v);
        self
    }

    #[must_use]
    pub fn byte(self, v: i8) -> Self {
        self.raw(&v.to_be_bytes())
    }

    #[must_use]
    pub fn short(self, v: i16) -> Self {
        self.raw(&v.to_be_bytes())
    }

    #[must_use]
    pub fn int(self, v: i32) -> Self {
        self.raw(&v.to_be_bytes())
    }

    #[must_use]
    pub fn long(self, v: i64) -> Self {
        self.raw(&v.to_be_bytes())
    }

    #[must_use]
    pub fn float(self, v: f32) -> Self {
        self.raw(&v.to_be_bytes())
    }

    #[must_use]
    pub fn double(self, v: f64) -> Self {
        self.raw(&v.to_be_bytes())
    }

    /// u16 length prefix plus the modified UTF-8 bytes of `s`.
    ///
    /// # Panics
    ///
    /// If the encoded string is longer than `u16::MAX` bytes.
    #[must_use]
    pub fn string(self, s: &str) -> Self {
        let bytes = mutf8::encode(s);
        self.raw_string(&bytes)
    }

    /// u16 length prefix plus `bytes` exactly as given.
    ///
    /// # Panics
    ///
    /// If `bytes` is longer than `u16::MAX`.
    #[must_use]
    pub fn raw_string(self, bytes: &[u8]) -> Self {
        let len = u16::try_from(bytes.len()).expect("string longer than u16::MAX");
        self.raw(&len.to_be_bytes()).raw(bytes)
    }

    /// Length prefix and elements of a byte array.
    #[must_use]
    pub fn byte_array(self, values: &[i8]) -> Self {
        values.iter().fold(self.int(len_i32(values.len())), |b, &v| b.byte(v))
    }

    #[must_use]
    pub fn int_array(self, values: &[i32]) -> Self {
        values.iter().fold(self.int(len_i32(values.len())), |b, &v| b.int(v))
    }

    #[must_use]
    pub fn long_array(self, values: &[i64]) -> Self {
        values.iter().fold(self.int(len_i32(values.len())), |b, &v| b.long(v))
    }

    #[must_use]
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

fn len_i32(len: usize) -> i32 {
    i32::try_from(len).expect("array longer than i32::MAX")
}

// ── Golden fixtures ───────────────────────────────────────────────────────────

/// Directory holding the committed `.nbt` fixtures.
#[must_use]
pub fn golden_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

/// Every golden fixture as `(file name, payload)`.
#[must_use]
pub fn golden_fixtures() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("bananrama.nbt", bananrama()),
        ("int_list.nbt", int_list()),
        ("all_types.nbt", all_types()),
        ("nested.nbt", nested()),
        ("long_string.nbt", long_string()),
        ("mutf8.nbt", mutf8_names()),
    ]
}

/// `hello world: {name: "Bananrama"}`.
#[must_use]
pub fn bananrama() -> Vec<u8> {
    PayloadBuilder::new()
        .named(Tag::Compound, "hello world")
        .named(Tag::String, "name")
        .string("Bananrama")
        .end()
        .finish()
}

/// A root list of the ints 1, 2, 3.
#[must_use]
pub fn int_list() -> Vec<u8> {
    PayloadBuilder::new()
        .named(Tag::List, "numbers")
        .list(Tag::Int, 3)
        .int(1)
        .int(2)
        .int(3)
        .finish()
}

/// One member of every tag, plus an empty list.
#[must_use]
pub fn all_types() -> Vec<u8> {
    PayloadBuilder::new()
        .named(Tag::Compound, "Level")
        .named(Tag::Byte, "byte")
        .byte(i8::MAX)
        .named(Tag::Short, "short")
        .short(i16::MIN)
        .named(Tag::Int, "int")
        .int(i32::MAX)
        .named(Tag::Long, "long")
        .long(i64::MAX)
        .named(Tag::Float, "float")
        .float(0.5)
        .named(Tag::Double, "double")
        .double(-3.25)
        .named(Tag::ByteArray, "bytes")
        .byte_array(&[0, 1, -1, 127, -128])
        .named(Tag::String, "string")
        .string("hello")
        .named(Tag::List, "list")
        .list(Tag::Long, 2)
        .long(10)
        .long(20)
        .named(Tag::Compound, "compound")
        .named(Tag::String, "nested")
        .string("yes")
        .end()
        .named(Tag::IntArray, "ints")
        .int_array(&[1, -1])
        .named(Tag::LongArray, "longs")
        .long_array(&[0, i64::MIN])
        .named(Tag::List, "empty")
        .list(Tag::End, 0)
        .end()
        .finish()
}

/// Lists of lists, lists of compounds and three levels of compounds.
#[must_use]
pub fn nested() -> Vec<u8> {
    PayloadBuilder::new()
        .named(Tag::Compound, "root")
        // matrix: [[1, 2], []]
        .named(Tag::List, "matrix")
        .list(Tag::List, 2)
        .list(Tag::Int, 2)
        .int(1)
        .int(2)
        .list(Tag::End, 0)
        // entities: [{id: "pig", health: 10s}, {}]
        .named(Tag::List, "entities")
        .list(Tag::Compound, 2)
        .named(Tag::String, "id")
        .string("pig")
        .named(Tag::Short, "health")
        .short(10)
        .end()
        .end()
        // a: {b: {c: {depth: 3b}}}
        .named(Tag::Compound, "a")
        .named(Tag::Compound, "b")
        .named(Tag::Compound, "c")
        .named(Tag::Byte, "depth")
        .byte(3)
        .end()
        .end()
        .end()
        .end()
        .finish()
}

/// A 78-byte string next to a short one.
#[must_use]
pub fn long_string() -> Vec<u8> {
    PayloadBuilder::new()
        .named(Tag::Compound, "long")
        .named(Tag::String, "motd")
        .string(&"abcdefghijklmnopqrstuvwxyz".repeat(3))
        .named(Tag::String, "short")
        .string("fits")
        .end()
        .finish()
}

/// Names and values outside ASCII, including a supplementary character.
#[must_use]
pub fn mutf8_names() -> Vec<u8> {
    PayloadBuilder::new()
        .named(Tag::Compound, "")
        .named(Tag::String, "emoji")
        .string("\u{1F600}")
        .named(Tag::Byte, "ключ")
        .byte(1)
        .end()
        .finish()
}
