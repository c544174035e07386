use std::collections::VecDeque;
use std::path::Path;

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use tracing::debug;

use crate::error::StoreError;
use crate::store::{Cursor, Store};
use crate::types::Row;
use crate::types::value::BindValue;

/// SQLite-backed store. The connection is opened once and lives as long as
/// the store; each statement is scoped to the `execute`/`query` call that
/// prepared it and is released when that scope ends, error paths included.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }
}

impl Store for SqliteStore {
    fn execute(&mut self, sql: &str, params: &[Option<BindValue>]) -> Result<usize, StoreError> {
        debug!(sql, "execute");
        let mut stmt = self.conn.prepare(sql)?;
        bind_params(&mut stmt, params)?;
        let n = stmt.raw_execute()?;
        Ok(n)
    }

    fn query(
        &mut self,
        sql: &str,
        params: &[Option<BindValue>],
    ) -> Result<Box<dyn Cursor + '_>, StoreError> {
        debug!(sql, "query");
        let mut stmt = self.conn.prepare(sql)?;
        bind_params(&mut stmt, params)?;

        let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
        let ncols = columns.len();

        // rusqlite rows borrow their statement, so the cursor fetches up
        // front and replays one-pass. Result sets here are interactive-scale.
        let mut fetched = VecDeque::new();
        let mut rows = stmt.raw_query();
        while let Some(row) = rows.next()? {
            fetched.push_back(read_row(row, ncols)?);
        }

        Ok(Box::new(SqliteCursor {
            columns,
            rows: fetched,
        }))
    }
}

struct SqliteCursor {
    columns: Vec<String>,
    rows: VecDeque<Row>,
}

impl Cursor for SqliteCursor {
    fn column_names(&self) -> &[String] {
        &self.columns
    }

    fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    fn next_row(&mut self) -> Result<Option<Row>, StoreError> {
        Ok(self.rows.pop_front())
    }
}

/// Binds the prepared params positionally (1-based). `None` positions are
/// skipped and stay at SQLite's default for unbound parameters, NULL.
fn bind_params(
    stmt: &mut rusqlite::Statement<'_>,
    params: &[Option<BindValue>],
) -> Result<(), StoreError> {
    for (i, param) in params.iter().enumerate() {
        match param {
            Some(BindValue::Int(n)) => stmt.raw_bind_parameter(i + 1, n)?,
            Some(BindValue::Text(s)) => stmt.raw_bind_parameter(i + 1, s.as_str())?,
            None => {}
        }
    }
    Ok(())
}

fn read_row(row: &rusqlite::Row<'_>, ncols: usize) -> Result<Row, StoreError> {
    let mut out = Vec::with_capacity(ncols);
    for i in 0..ncols {
        let cell = match row.get_ref(i)? {
            ValueRef::Null => "null".to_string(),
            ValueRef::Integer(n) => n.to_string(),
            ValueRef::Real(f) => f.to_string(),
            ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
            ValueRef::Blob(b) => format!("0x{}", hex::encode_upper(b)),
        };
        out.push(cell);
    }
    Ok(out)
}
