//! The closed, sized enumeration contract.
//!
//! [`SizedEnum`] is the type-level gate: every entry point in this crate is bounded by it, so asking for
//! the names of a type that is not a sized enum fails to compile at the call site. `#[derive(EnumNames)]`
//! implements it only after checking the declaration (unit members, implicit values, trailing sentinel).
//!
//! ## Examples
//!
//! A plain enum without the derive is rejected:
//! ```compile_fail
//! #[derive(Clone, Copy)]
//! enum Plain { A, B }
//!
//! let _ = enum_names::make_enum_string::<Plain>();
//! ```
//!
//! So is an enum without the trailing sentinel:
//! ```compile_fail
//! #[derive(Clone, Copy, enum_names::EnumNames)]
//! enum Fruit { Apple, Banana }
//! ```
//!
//! Explicit values are not allowed, even contiguous ones:
//! ```compile_fail
//! #[derive(Clone, Copy, enum_names::EnumNames)]
//! enum Fruit { Apple = 0, Banana = 1, EnumSize }
//! ```
//!
//! Members cannot carry data:
//! ```compile_fail
//! #[derive(Clone, Copy, enum_names::EnumNames)]
//! enum Shape { Circle(u8), EnumSize }
//! ```
//!
//! Structs are not enumerations:
//! ```compile_fail
//! #[derive(Clone, Copy, enum_names::EnumNames)]
//! struct Fruit { apple: u8 }
//! ```

/// A fieldless enum with members `0..COUNT` followed by a count sentinel valued `COUNT`.
///
/// Derive it with `#[derive(EnumNames)]`. Manual impls must keep `from_index` and `index` inverse on
/// `0..COUNT`; the runtime builder checks this and reports [`crate::NameError::IndexMismatch`].
pub trait SizedEnum: Copy + 'static {
    /// Number of real members; also the sentinel's value.
    const COUNT: usize;

    /// Spelling of the sentinel member.
    const SENTINEL: &'static str;

    /// Member valued `index`, or `None` for `index >= COUNT`.
    fn from_index(index: usize) -> Option<Self>;

    /// Integer value of this member. The sentinel reports `COUNT`.
    fn index(self) -> usize;

    /// Real members in ascending index order.
    fn members() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }

    fn is_sentinel(self) -> bool {
        self.index() == Self::COUNT
    }
}
