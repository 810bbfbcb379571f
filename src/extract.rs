//! Pull a member identifier out of a probe signature.
//!
//! The identifier sits between the last scope separator (`:`) and the first generic close (`>`) after
//! it. Given `enum_names::probe<demo::Fruit::apple>()` the result is `apple`.
//!
//! Both functions are `const fn`, so derived tables run them during const evaluation. A malformed
//! signature then fails the build instead of producing a bad table.
//!
//! ## Notes
//! - An identifier that itself contains `:` or `>` cannot be extracted. Rust identifiers never do.

use crate::errors::ExtractError;

/// Byte that ends the qualification of a member path.
pub const SCOPE_SEPARATOR: u8 = b':';

/// Byte that closes the generic argument list around the member path.
pub const GENERIC_CLOSE: u8 = b'>';

/// Extract the member identifier from `signature`.
///
/// ## Examples
/// ```rust
/// use enum_names::try_extract_name;
///
/// assert_eq!(try_extract_name("enum_names::probe<demo::Fruit::apple>()"), Ok("apple"));
/// assert!(try_extract_name("no separators here").is_err());
/// ```
pub const fn try_extract_name(signature: &str) -> Result<&str, ExtractError> {
    let bytes = signature.as_bytes();

    let mut start = bytes.len();
    loop {
        if start == 0 {
            return Err(ExtractError::MissingScopeSeparator);
        }
        if bytes[start - 1] == SCOPE_SEPARATOR {
            break;
        }
        start -= 1;
    }

    let mut end = start;
    loop {
        if end == bytes.len() {
            return Err(ExtractError::MissingGenericClose);
        }
        if bytes[end] == GENERIC_CLOSE {
            break;
        }
        end += 1;
    }

    if start == end {
        return Err(ExtractError::EmptyName);
    }

    let (head, _) = bytes.split_at(end);
    let (_, name) = head.split_at(start);
    match core::str::from_utf8(name) {
        Ok(name) => Ok(name),
        // Unreachable for `&str` input: both delimiters are ASCII, so the cut is on char boundaries.
        Err(_) => Err(ExtractError::InvalidUtf8),
    }
}

/// Like [`try_extract_name`], but panics on a malformed signature.
///
/// Inside a `const` initializer the panic is a compile error, which is how derived tables report a
/// broken probe.
///
/// ## Examples
/// ```rust
/// use enum_names::extract_name;
///
/// const NAME: &str = extract_name("enum_names::probe<crate::Axis::X>()");
/// assert_eq!(NAME, "X");
/// ```
pub const fn extract_name(signature: &str) -> &str {
    match try_extract_name(signature) {
        Ok(name) => name,
        Err(ExtractError::MissingScopeSeparator) => panic!("probe signature has no `:` scope separator"),
        Err(ExtractError::MissingGenericClose) => panic!("probe signature has no `>` after the member name"),
        Err(ExtractError::EmptyName) => panic!("probe signature has an empty member name"),
        Err(ExtractError::InvalidUtf8) => panic!("probe signature was cut inside a character"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_last_segment() {
        assert_eq!(extract_name("enum_names::probe<demo::Fruit::apple>()"), "apple");
        assert_eq!(extract_name("enum_names::probe<Fruit::strawberry>()"), "strawberry");
    }

    #[test]
    fn stops_at_first_close_after_separator() {
        assert_eq!(extract_name("probe<a::B::c>() -> x::y>"), "y");
        assert_eq!(extract_name("probe<a::Wrapper<u8>::Red>()"), "Red");
    }

    #[test]
    fn unqualified_member_needs_a_separator() {
        assert_eq!(try_extract_name("probe<apple>()"), Err(ExtractError::MissingScopeSeparator));
    }

    #[test]
    fn missing_close_is_reported() {
        assert_eq!(try_extract_name("probe<a::b"), Err(ExtractError::MissingGenericClose));
    }

    #[test]
    fn empty_name_is_reported() {
        assert_eq!(try_extract_name("probe<a::>()"), Err(ExtractError::EmptyName));
    }

    #[test]
    fn non_ascii_names_survive() {
        assert_eq!(extract_name("probe<fruit::Äpfel>()"), "Äpfel");
    }

    const CONST_NAME: &str = extract_name("enum_names::probe<crate::Fruit::kiwi>()");

    #[test]
    fn usable_in_const_context() {
        assert_eq!(CONST_NAME, "kiwi");
        assert_eq!(CONST_NAME.len(), 4);
    }
}
