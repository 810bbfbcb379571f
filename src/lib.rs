#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
//! Compile-time member names for closed, sized enums.
//!
//! Declare a fieldless enum whose members use the implicit values `0, 1, 2, ...` and end with an `EnumSize`
//! count sentinel, derive [`EnumNames`], and read the names back with [`make_enum_string`]:
//!
//! ```rust
//! use enum_names::{EnumNames, make_enum_string};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumNames)]
//! enum Fruit { Apple, Banana, Cherry, EnumSize }
//!
//! let names = make_enum_string::<Fruit>();
//! assert_eq!(names.len(), 3);
//! assert_eq!(names[0], "Apple");
//! assert_eq!(Fruit::Cherry.name(), Some("Cherry"));
//! assert_eq!(Fruit::from_name("Banana"), Ok(Fruit::Banana));
//! ```
//!
//! ## How the table is built
//!
//! The derive checks the declaration and rejects anything that is not a sized enum with `compile_error!`.
//! For each member it emits a probe signature (`enum_names::probe<{path}::{member}>()`), then extracts the
//! identifier with the `const fn` [`extract_name`] into an exact-length [`FixedName`]. It assembles a
//! `static` table in member order. All of this is const evaluation. At runtime [`make_enum_string`]
//! returns a view of that static.
//!
//! Enums that implement [`SizedEnum`] and [`SignatureProbe`] by hand (for example with
//! [`probe::debug_signature`]) get the same pipeline at runtime. It runs once per type and is cached by
//! [`registry`].
//!
//! ## Panic Policy
//!
//! - **Production code**: `Result`/`Option` with `?`. `clippy::unwrap_used` is denied crate-wide.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Const evaluation**: malformed signatures and short buffers panic inside `const fn`s, which surfaces as a
//!   compile error for derived tables.

extern crate self as enum_names;

pub mod builder;
pub mod eligibility;
pub mod errors;
pub mod extract;
pub mod fixed_name;
pub mod listing;
pub mod names;
pub mod probe;
pub mod registry;
pub mod table;

pub use eligibility::SizedEnum;
pub use errors::{ExtractError, NameError};
pub use extract::{extract_name, try_extract_name};
pub use fixed_name::FixedName;
pub use names::{EnumNames, make_enum_string, try_make_enum_string};
pub use probe::{Signature, SignatureProbe};
pub use table::NameTable;

pub use enum_names_derive::EnumNames;
