//! Exact-length name storage that can be built in `const` context.
//!
//! A [`FixedName<L>`] owns exactly `L` bytes with no terminator. Derived tables size each buffer with the
//! extracted name's length, so the binary carries the names and nothing else.
//!
//! ## Examples
//! ```rust
//! use enum_names::FixedName;
//!
//! const NAME: FixedName<4> = FixedName::new("name");
//! assert_eq!(NAME, "name");
//!
//! // Only the first `L` bytes are copied.
//! const TEST: FixedName<4> = FixedName::new("testing");
//! assert_eq!(TEST.as_str(), "test");
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

/// Immutable UTF-8 buffer of exactly `L` bytes.
#[derive(Clone, Copy)]
pub struct FixedName<const L: usize> {
    bytes: [u8; L],
}

impl<const L: usize> FixedName<L> {
    /// Copy the first `L` bytes of `src`.
    ///
    /// Fails (at compile time when used in a `const`) if `src` is shorter than `L` or if byte `L` falls
    /// inside a multi-byte character.
    pub const fn new(src: &str) -> Self {
        let src = src.as_bytes();
        assert!(src.len() >= L, "FixedName source is shorter than the buffer");
        // UTF-8 continuation bytes are 0b10xx_xxxx.
        assert!(
            src.len() == L || (src[L] & 0xC0) != 0x80,
            "FixedName length splits a character"
        );

        let mut bytes = [0u8; L];
        let mut i = 0;
        while i < L {
            bytes[i] = src[i];
            i += 1;
        }
        Self { bytes }
    }

    pub const fn as_str(&self) -> &str {
        match core::str::from_utf8(&self.bytes) {
            Ok(s) => s,
            Err(_) => panic!("INVARIANT: FixedName holds a char-aligned prefix of a str"),
        }
    }

    pub const fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub const fn len(&self) -> usize {
        L
    }

    pub const fn is_empty(&self) -> bool {
        L == 0
    }
}

impl<const L: usize, const M: usize> PartialEq<FixedName<M>> for FixedName<L> {
    fn eq(&self, other: &FixedName<M>) -> bool {
        self.bytes[..] == other.bytes[..]
    }
}

impl<const L: usize> Eq for FixedName<L> {}

impl<const L: usize> PartialEq<str> for FixedName<L> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const L: usize> PartialEq<&str> for FixedName<L> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const L: usize> PartialEq<FixedName<L>> for str {
    fn eq(&self, other: &FixedName<L>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const L: usize> PartialEq<FixedName<L>> for &str {
    fn eq(&self, other: &FixedName<L>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const L: usize> Hash for FixedName<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<const L: usize> Deref for FixedName<L> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const L: usize> AsRef<str> for FixedName<L> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const L: usize> fmt::Debug for FixedName<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedName").field(&self.as_str()).finish()
    }
}

impl<const L: usize> fmt::Display for FixedName<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_name;

    #[test]
    fn compares_by_content() {
        assert_eq!(FixedName::<4>::new("name"), "name");
        assert_eq!("test", FixedName::<4>::new(&"retested"[2..]));
        assert_eq!(FixedName::<3>::new("abc"), FixedName::<3>::new("abcdef"));
        assert_ne!(FixedName::<3>::new("abc"), FixedName::<4>::new("abcd"));
    }

    #[test]
    fn empty_buffer() {
        let empty = FixedName::<0>::new("anything");
        assert!(empty.is_empty());
        assert_eq!(empty.as_str(), "");
    }

    #[test]
    fn sized_from_extracted_name() {
        const SIGNATURE: &str = "enum_names::probe<demo::Fruit::grapefruit>()";
        const NAME: &FixedName<{ extract_name(SIGNATURE).len() }> = &FixedName::new(extract_name(SIGNATURE));
        assert_eq!(NAME.len(), "grapefruit".len());
        assert_eq!(NAME.as_str(), "grapefruit");
        assert_eq!(format!("{NAME}"), "grapefruit");
        assert_eq!(format!("{NAME:?}"), "FixedName(\"grapefruit\")");
    }

    #[test]
    fn derefs_to_str() {
        let name = FixedName::<5>::new("lemon");
        assert!(name.starts_with("le"));
        assert_eq!(name.to_uppercase(), "LEMON");
    }

    #[test]
    #[should_panic(expected = "shorter than the buffer")]
    fn short_source_is_rejected() {
        let _ = FixedName::<8>::new("plum");
    }

    #[test]
    #[should_panic(expected = "splits a character")]
    fn split_character_is_rejected() {
        let _ = FixedName::<1>::new("Ä");
    }
}
