//! Error types for runtime name-table construction and lookup.
//!
//! Derived tables cannot fail at runtime: every problem they could hit is a compile error. These types only
//! surface for enums probed at runtime (see [`crate::registry`]) and for reverse lookups.

use core::fmt::Display;

use thiserror::Error;

/// Why a signature did not yield a member name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("signature has no `:` scope separator")]
    MissingScopeSeparator,
    #[error("signature has no `>` after the member name")]
    MissingGenericClose,
    #[error("signature has an empty member name")]
    EmptyName,
    #[error("signature was cut inside a character")]
    InvalidUtf8,
}

/// Errors from building or querying a name table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// `from_index` returned `None` for an index below the member count.
    #[error("`{type_name}` has no member at index {index}")]
    MissingMember { type_name: &'static str, index: usize },

    /// `from_index(index).index()` did not round-trip, so members are not contiguous.
    #[error("`{type_name}` member at index {index} reports index {found}")]
    IndexMismatch {
        type_name: &'static str,
        index: usize,
        found: usize,
    },

    /// The probe for a member produced a malformed signature.
    #[error("cannot extract the name of `{type_name}` member {index}: {source}")]
    Extract {
        type_name: &'static str,
        index: usize,
        #[source]
        source: ExtractError,
    },

    /// No member of the enum is spelled `name`.
    #[error("`{type_name}` has no member named `{name}`")]
    UnknownName { type_name: &'static str, name: String },
}

/// Raise an error as a panic where the signature leaves no room for a `Result`.
#[cold]
#[track_caller]
pub fn raise(err: impl Display) -> ! {
    panic!("{err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_type_and_member() {
        let err = NameError::Extract {
            type_name: "demo::Fruit",
            index: 3,
            source: ExtractError::EmptyName,
        };
        assert_eq!(
            err.to_string(),
            "cannot extract the name of `demo::Fruit` member 3: signature has an empty member name"
        );

        let err = NameError::UnknownName {
            type_name: "demo::Fruit",
            name: "durian".to_string(),
        };
        assert_eq!(err.to_string(), "`demo::Fruit` has no member named `durian`");
    }

    #[test]
    #[should_panic(expected = "has no member at index 2")]
    fn raise_panics_with_display_text() {
        raise(NameError::MissingMember {
            type_name: "demo::Fruit",
            index: 2,
        });
    }
}
