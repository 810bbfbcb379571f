//! Plain-text rendering of a name table, one `index: name` line per member.

use std::io::{self, Write};

use crate::table::NameTable;

/// Write `header`, then one line per member with the index right-aligned to two columns.
///
/// ## Examples
/// ```rust
/// use enum_names::{NameTable, listing::write_listing};
///
/// static NAMES: [&str; 2] = ["low", "high"];
/// let mut out = Vec::new();
/// write_listing(&mut out, "Tones:", NameTable::new(&NAMES)).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Tones:\n 0: low\n 1: high\n");
/// ```
pub fn write_listing<W: Write>(out: &mut W, header: &str, table: NameTable) -> io::Result<()> {
    writeln!(out, "{header}")?;
    for (index, name) in table.iter().enumerate() {
        writeln!(out, "{index:>2}: {name}")?;
    }
    out.flush()
}

/// [`write_listing`] into a `String`.
pub fn render_listing(header: &str, table: NameTable) -> String {
    let mut out = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_listing(&mut out, header, table);
    String::from_utf8_lossy(&out).into_owned()
}
