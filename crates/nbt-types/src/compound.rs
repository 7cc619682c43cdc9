use indexmap::IndexMap;
use indexmap::map::{Iter, Keys};
use nbt_wire::mutf8;

use crate::entry::Entry;
use crate::string::NbtString;

/// Name → value mapping, the body of a `TAG_Compound`.
///
/// Keys are unique. Inserting an existing key replaces its value and keeps
/// the position of the first insertion, which is the "put" behaviour the
/// decoder relies on when a payload repeats a name.
///
/// Iteration follows insertion order so that rendered output is stable.
/// Equality ignores order: two compounds are equal when they hold the same
/// keys with equal values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Compound {
    entries: IndexMap<NbtString, Entry>,
}

impl Compound {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<NbtString>, value: Entry) -> Option<Entry> {
        self.entries.insert(key.into(), value)
    }

    /// Look up a value by its textual name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(&*mutf8::encode(key))
    }

    /// Look up a value by the raw modified UTF-8 bytes of its name.
    #[must_use]
    pub fn get_raw(&self, key: &[u8]) -> Option<&Entry> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, NbtString, Entry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> Keys<'_, NbtString, Entry> {
        self.entries.keys()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a NbtString, &'a Entry);
    type IntoIter = Iter<'a, NbtString, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<NbtString>> FromIterator<(K, Entry)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, Entry)>>(iter: I) -> Self {
        let mut compound = Self::new();
        for (key, value) in iter {
            compound.insert(key, value);
        }
        compound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut compound = Compound::new();
        assert!(compound.insert("a", Entry::Int(1)).is_none());
        compound.insert("b", Entry::Int(2));
        assert_eq!(compound.insert("a", Entry::Int(3)), Some(Entry::Int(1)));

        assert_eq!(compound.len(), 2);
        assert_eq!(compound.get("a"), Some(&Entry::Int(3)));
    }

    #[test]
    fn replaced_key_keeps_first_position() {
        let compound: Compound = [
            ("x", Entry::Byte(1)),
            ("y", Entry::Byte(2)),
            ("x", Entry::Byte(3)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<String> = compound.keys().map(ToString::to_string).collect();
        assert_eq!(keys, ["x", "y"]);
    }

    #[test]
    fn equality_ignores_order() {
        let a: Compound = [("p", Entry::Short(1)), ("q", Entry::Short(2))]
            .into_iter()
            .collect();
        let b: Compound = [("q", Entry::Short(2)), ("p", Entry::Short(1))]
            .into_iter()
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn lookup_by_modified_utf8_name() {
        let mut compound = Compound::new();
        compound.insert(NbtString::from_raw(vec![0xC0, 0x80]), Entry::End);
        assert!(compound.contains_key("\0"));
        assert!(compound.get_raw(&[0xC0, 0x80]).is_some());
        assert!(compound.get_raw(&[0x00]).is_none());
    }
}
