//! Public entry points for obtaining member names.

use core::any;

use crate::errors::{self, NameError};
use crate::probe::SignatureProbe;
use crate::registry;
use crate::table::NameTable;

/// An enum whose members' names are available as a memoized [`NameTable`].
///
/// `#[derive(EnumNames)]` overrides both table methods with a table baked at build time. A hand-written
/// `impl EnumNames for T {}` keeps the defaults, which build the table from [`SignatureProbe`] once and
/// cache it in [`crate::registry`].
pub trait EnumNames: SignatureProbe {
    /// The table, or why it could not be built.
    fn try_name_table() -> Result<NameTable, NameError> {
        registry::get_or_build::<Self>()
    }

    /// The table. Panics only if a hand-written probe is malformed.
    fn name_table() -> NameTable {
        Self::try_name_table().unwrap_or_else(|err| errors::raise(err))
    }

    /// Name of this member, or `None` for the sentinel.
    fn name(self) -> Option<&'static str> {
        Self::name_table().get(self.index())
    }

    /// Member spelled exactly `name`.
    fn from_name(name: &str) -> Result<Self, NameError> {
        Self::name_table()
            .position(name)
            .and_then(Self::from_index)
            .ok_or_else(|| NameError::UnknownName {
                type_name: any::type_name::<Self>(),
                name: name.to_string(),
            })
    }
}

/// Names of `T`'s members in index order.
///
/// Repeated calls return the same storage.
///
/// ## Examples
/// ```rust
/// use enum_names::{EnumNames, make_enum_string};
///
/// #[derive(Clone, Copy, EnumNames)]
/// enum Fruit { Apple, Banana, EnumSize }
///
/// let names = make_enum_string::<Fruit>();
/// assert_eq!(names, ["Apple", "Banana"]);
/// assert!(names.ptr_eq(&make_enum_string::<Fruit>()));
/// ```
pub fn make_enum_string<T: EnumNames>() -> NameTable {
    T::name_table()
}

/// Fallible form of [`make_enum_string`] for enums probed at runtime.
pub fn try_make_enum_string<T: EnumNames>() -> Result<NameTable, NameError> {
    T::try_name_table()
}
