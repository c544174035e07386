use std::io::{self, Write};

use crate::schema::TableSchema;
use crate::sql::full_table;
use crate::store::{Cursor, Store};

/// Enumerates a cursor into line-oriented text: a `Columns:` header, one
/// `Row N:` line per row with comma-separated values, and a trailing blank
/// line. Prints the no-rows sentinel when the result is empty. Returns
/// whether any row existed.
///
/// No table-specific logic: whatever column metadata and rows the store
/// hands back is what gets printed.
pub fn project(cursor: &mut dyn Cursor, out: &mut dyn Write) -> io::Result<bool> {
    if !cursor.has_rows() {
        writeln!(out, "Your query returned no rows.")?;
        return Ok(false);
    }

    writeln!(out, "Columns: {}", cursor.column_names().join(", "))?;
    writeln!(out)?;

    let mut row_num = 1;
    loop {
        match cursor.next_row() {
            Ok(Some(row)) => {
                writeln!(out, "Row {}: {}", row_num, row.join(", "))?;
                row_num += 1;
            }
            Ok(None) => break,
            Err(e) => {
                writeln!(out, "Err: store failure while reading rows: {e}")?;
                break;
            }
        }
    }
    writeln!(out)?;
    Ok(true)
}

/// Runs a fixed, parameter-free query and projects the result. Store
/// failures are absorbed here and printed with the action label, so a bad
/// report query never unwinds past the current menu iteration.
pub fn print_query(
    store: &mut dyn Store,
    sql: &str,
    label: &str,
    out: &mut dyn Write,
) -> io::Result<()> {
    match store.query(sql, &[]) {
        Ok(mut cursor) => {
            project(cursor.as_mut(), out)?;
        }
        Err(e) => {
            writeln!(out, "Err: store failure while {label}: {e}")?;
        }
    }
    Ok(())
}

/// Dumps an entire table, used as post-mutation confirmation
pub fn print_table(store: &mut dyn Store, schema: &TableSchema, out: &mut dyn Write) -> io::Result<()> {
    let sql = full_table(schema);
    let label = format!("printing table {}", schema.name());
    print_query(store, &sql, &label, out)
}
