//! Derive macro for the `enum_names` crate.
//!
//! `#[derive(EnumNames)]` accepts a fieldless enum whose members use the implicit values `0, 1, 2, ...` and whose
//! last member is a count sentinel (`EnumSize` unless renamed with `#[enum_names(sentinel = "...")]`). It generates:
//! - `SizedEnum`: member count and index conversions,
//! - `SignatureProbe`: one build-time signature per member,
//! - `EnumNames`: a `static` name table assembled during const evaluation.
//!
//! Declarations that do not qualify are rejected with a `compile_error!` pointing at the offending token.

mod attrs;
mod eligibility;
mod expand;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Bakes the member names of a sized enum into a static table.
///
/// # Example
/// ```ignore
/// #[derive(Clone, Copy, EnumNames)]
/// enum Fruit { Apple, Banana, EnumSize }
///
/// assert_eq!(enum_names::make_enum_string::<Fruit>().as_slice(), ["Apple", "Banana"]);
/// ```
#[proc_macro_derive(EnumNames, attributes(enum_names))]
pub fn derive_enum_names(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::derive_enum_names(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
