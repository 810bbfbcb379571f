//! The ordered, immutable name table handed to callers.

use core::fmt;
use core::ops::{Deref, Index};

/// Names of an enum's members, element `i` naming member `i`.
///
/// A `NameTable` is a `Copy` view over `'static` storage that is never mutated. Equality compares
/// contents; [`NameTable::ptr_eq`] compares storage.
///
/// ## Examples
/// ```rust
/// use enum_names::NameTable;
///
/// static NAMES: [&str; 2] = ["low", "high"];
/// const TABLE: NameTable = NameTable::new(&NAMES);
/// assert_eq!(TABLE.len(), 2);
/// assert_eq!(TABLE[1], "high");
/// ```
#[derive(Clone, Copy)]
pub struct NameTable {
    names: &'static [&'static str],
}

impl NameTable {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    /// Move runtime-built names into leaked storage that lives for the rest of the process.
    pub(crate) fn leak(names: Vec<Box<str>>) -> Self {
        let names: Vec<&'static str> = names.into_iter().map(|name| &*Box::leak(name)).collect();
        Self::new(Box::leak(names.into_boxed_slice()))
    }

    pub const fn as_slice(&self) -> &'static [&'static str] {
        self.names
    }

    pub const fn len(&self) -> usize {
        self.names.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.names.get(index).copied()
    }

    /// Index of the member spelled `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| *candidate == name)
    }

    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'static, &'static str>> {
        self.names.iter().copied()
    }

    /// True when both tables share the same storage.
    pub fn ptr_eq(&self, other: &NameTable) -> bool {
        core::ptr::eq(self.names, other.names)
    }
}

impl Deref for NameTable {
    type Target = [&'static str];

    fn deref(&self) -> &Self::Target {
        self.names
    }
}

impl Index<usize> for NameTable {
    type Output = &'static str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.names[index]
    }
}

impl IntoIterator for NameTable {
    type Item = &'static str;
    type IntoIter = core::iter::Copied<core::slice::Iter<'static, &'static str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter().copied()
    }
}

impl PartialEq for NameTable {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for NameTable {}

impl<const N: usize> PartialEq<[&str; N]> for NameTable {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.names == other.as_slice()
    }
}

impl fmt::Debug for NameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TONES: [&str; 3] = ["low", "mid", "high"];

    #[test]
    fn lookups() {
        let table = NameTable::new(&TONES);
        assert_eq!(table.get(2), Some("high"));
        assert_eq!(table.get(3), None);
        assert_eq!(table.position("mid"), Some(1));
        assert_eq!(table.position("loud"), None);
        assert_eq!(table.iter().collect::<Vec<_>>(), ["low", "mid", "high"]);
    }

    #[test]
    fn equality_is_by_content() {
        let leaked = NameTable::leak(vec!["low".into(), "mid".into(), "high".into()]);
        let baked = NameTable::new(&TONES);
        assert_eq!(leaked, baked);
        assert!(!leaked.ptr_eq(&baked));
        assert!(baked.ptr_eq(&NameTable::new(&TONES)));
        assert_eq!(baked, ["low", "mid", "high"]);
    }

    #[test]
    fn empty_table() {
        let table = NameTable::leak(Vec::new());
        assert!(table.is_empty());
        assert_eq!(format!("{table:?}"), "[]");
    }
}
