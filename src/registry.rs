//! Process-wide cache of runtime-built name tables, keyed by type.
//!
//! Derived enums never reach this module; their table is a `static`. Enums that implement
//! [`SignatureProbe`] by hand get their table built here on first request and reused afterwards.
//!
//! ## Notes
//! - The lock only guards lookup and publication. Building happens outside it, so a probe that asks for
//!   another enum's names cannot deadlock.
//! - Two threads racing on a cold type may both build; the first to publish wins and everyone returns the
//!   published table. Callers never see a partial table.
//! - Failed builds are not cached.

use core::any::{self, TypeId};
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::builder;
use crate::errors::NameError;
use crate::probe::SignatureProbe;
use crate::table::NameTable;

static TABLES: Lazy<Mutex<FxHashMap<TypeId, NameTable>>> = Lazy::new(|| Mutex::new(FxHashMap::default()));

/// The cached table for `T`, building and publishing it on first use.
pub fn get_or_build<T: SignatureProbe>() -> Result<NameTable, NameError> {
    let key = TypeId::of::<T>();

    {
        let tables = TABLES.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = tables.get(&key) {
            return Ok(*table);
        }
    }

    let names = builder::build_names::<T>()?;

    let mut tables = TABLES.lock().unwrap_or_else(PoisonError::into_inner);
    let table = *tables.entry(key).or_insert_with(|| {
        let table = NameTable::leak(names);
        tracing::debug!(
            type_name = any::type_name::<T>(),
            count = table.len(),
            "published enum name table"
        );
        table
    });
    Ok(table)
}

/// True once a table for `T` has been published.
pub fn is_cached<T: 'static>() -> bool {
    let key = TypeId::of::<T>();
    TABLES
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(&key)
}

/// Number of published tables.
pub fn len() -> usize {
    TABLES.lock().unwrap_or_else(PoisonError::into_inner).len()
}
