//! Signature probes: where member identifiers come from.
//!
//! A probe maps a member to a text that embeds its qualified path between a `::` and a `>`, shaped as
//! `enum_names::probe<{type path}::{member}>()`. Downstream code only relies on that shape, so the source of
//! the text can change without touching extraction or table assembly.
//!
//! Two sources exist:
//! - `#[derive(EnumNames)]` bakes one `&'static str` per member from `module_path!()` and the declared
//!   identifiers.
//! - [`debug_signature`] formats `core::any::type_name` and the derived `Debug` spelling at runtime, for
//!   enums that implement [`SizedEnum`] by hand.

use core::any;
use core::fmt;
use std::borrow::Cow;

use crate::eligibility::SizedEnum;

/// Opening text of every probe signature.
pub const PROBE_OPEN: &str = "enum_names::probe<";

/// Closing text of every probe signature.
pub const PROBE_CLOSE: &str = ">()";

/// Probe output; borrowed for derived enums, owned for runtime probes.
pub type Signature = Cow<'static, str>;

/// Produces the signature for a member.
pub trait SignatureProbe: SizedEnum {
    /// Signature embedding this member's qualified identifier. Must be deterministic.
    fn probe(self) -> Signature;
}

/// Build a signature from the type path and the `Debug` spelling of `member`.
///
/// Only meaningful for unit members with a derived `Debug`, whose output is the bare identifier.
///
/// ## Examples
/// ```rust
/// use enum_names::probe::debug_signature;
///
/// #[derive(Debug)]
/// enum Axis { X }
///
/// let signature = debug_signature(Axis::X);
/// assert!(signature.starts_with("enum_names::probe<"));
/// assert!(signature.ends_with("::Axis::X>()"));
/// ```
pub fn debug_signature<T: fmt::Debug + 'static>(member: T) -> Signature {
    Cow::Owned(format!(
        "{PROBE_OPEN}{}::{member:?}{PROBE_CLOSE}",
        any::type_name::<T>()
    ))
}
