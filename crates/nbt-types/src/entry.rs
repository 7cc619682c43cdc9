use crate::compound::Compound;
use crate::string::NbtString;
use crate::tag::Tag;

/// One decoded value. There is exactly one variant per [`Tag`].
///
/// Entries are plain owned data: the root returned by a decode owns the
/// whole tree, and dropping the root releases every node, string and array
/// in one go.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    /// Compound terminator. Only ever produced as a bare root or as the
    /// element of a list declared with the `End` child tag.
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(NbtString),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Entry {
    /// The tag this entry is encoded with.
    #[must_use]
    pub fn tag(&self) -> Tag {
        match self {
            Self::End => Tag::End,
            Self::Byte(_) => Tag::Byte,
            Self::Short(_) => Tag::Short,
            Self::Int(_) => Tag::Int,
            Self::Long(_) => Tag::Long,
            Self::Float(_) => Tag::Float,
            Self::Double(_) => Tag::Double,
            Self::ByteArray(_) => Tag::ByteArray,
            Self::String(_) => Tag::String,
            Self::List(_) => Tag::List,
            Self::Compound(_) => Tag::Compound,
            Self::IntArray(_) => Tag::IntArray,
            Self::LongArray(_) => Tag::LongArray,
        }
    }

    #[must_use]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Self::Compound(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_string(&self) -> Option<&NbtString> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Widen any integer variant to `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Byte(v) => Some(i64::from(v)),
            Self::Short(v) => Some(i64::from(v)),
            Self::Int(v) => Some(i64::from(v)),
            Self::Long(v) => Some(v),
            _ => None,
        }
    }

    /// Widen either floating-point variant to `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(f64::from(v)),
            Self::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Self::String(NbtString::from(s))
    }
}

impl From<Compound> for Entry {
    fn from(c: Compound) -> Self {
        Self::Compound(c)
    }
}

impl From<List> for Entry {
    fn from(l: List) -> Self {
        Self::List(l)
    }
}

/// Homogeneous sequence of untagged values, the body of a `TAG_List`.
///
/// `tag` is the declared child tag. It is meaningful even when `items` is
/// empty: writers commonly declare `End` for empty lists, but any tag is
/// accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct List {
    pub tag: Tag,
    pub items: Vec<Entry>,
}

impl List {
    #[must_use]
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.items.iter()
    }
}

/// An entry paired with its optional name.
///
/// The name is present for the root of a payload and for direct members of
/// a compound; list elements carry none.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedEntry {
    pub name: Option<NbtString>,
    pub entry: Entry,
}

impl NamedEntry {
    #[must_use]
    pub fn new(name: Option<NbtString>, entry: Entry) -> Self {
        Self { name, entry }
    }

    #[must_use]
    pub fn unnamed(entry: Entry) -> Self {
        Self { name: None, entry }
    }
}
