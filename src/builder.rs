//! Runtime table assembly for enums without a baked table.
//!
//! Runs the same pipeline the derive runs during const evaluation: for every index in `0..COUNT`, take the
//! member, probe it, and extract the name. Each name is copied into an exact-length `Box<str>`.

use core::any;

use crate::errors::NameError;
use crate::extract::try_extract_name;
use crate::probe::SignatureProbe;

/// Build the names of `T`'s members in index order.
pub fn build_names<T: SignatureProbe>() -> Result<Vec<Box<str>>, NameError> {
    let type_name = any::type_name::<T>();

    (0..T::COUNT)
        .map(|index| {
            let member = T::from_index(index).ok_or(NameError::MissingMember { type_name, index })?;
            let found = member.index();
            if found != index {
                return Err(NameError::IndexMismatch {
                    type_name,
                    index,
                    found,
                });
            }

            let signature = member.probe();
            let name = try_extract_name(&signature).map_err(|source| NameError::Extract {
                type_name,
                index,
                source,
            })?;
            Ok(Box::<str>::from(name))
        })
        .collect()
}
