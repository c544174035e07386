use tracing::debug;

use crate::error::EngineError;
use crate::schema::TableSchema;
use crate::sql::{StatementKind, bind, build};
use crate::store::Store;
use crate::types::Row;

/// Result of a primary-key existence check
#[derive(Debug)]
pub struct LocateOutcome {
    pub found: bool,
    /// First matching row, available to callers that want to show it
    pub row: Option<Row>,
}

/// Runs a primary-key equality query and reports whether at least one row
/// matches. The check peeks the cursor's before-first position, so finding
/// a row does not destroy it: the outcome carries it for immediate use.
///
/// Update and Delete must call this first and abort on `found == false`
/// before any mutating statement is built.
pub fn locate(
    store: &mut dyn Store,
    schema: &TableSchema,
    pk_values: &[String],
) -> Result<LocateOutcome, EngineError> {
    let sql = build(schema, StatementKind::SearchExact);
    let report = bind(schema, StatementKind::SearchExact, pk_values)?;

    let mut cursor = store
        .query(&sql, &report.params)
        .map_err(|e| EngineError::store(format!("locating a row in {}", schema.name()), e))?;

    let found = cursor.has_rows();
    debug!(table = schema.name(), found, "locate");
    let row = if found {
        cursor
            .next_row()
            .map_err(|e| EngineError::store(format!("reading located row from {}", schema.name()), e))?
    } else {
        None
    };
    Ok(LocateOutcome { found, row })
}
