use crate::schema::TableSchema;

/// The five parameterized statement shapes this front end issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Insert,
    /// Equality on every primary-key column. Used for exact retrieval and
    /// for the existence pre-check before update/delete.
    SearchExact,
    /// LIKE on every primary-key column; the wildcard wrapping lives in
    /// the bound value, not in the statement text.
    SearchPrefixMatch,
    Update,
    Delete,
}

/// Builds the parameterized statement text for (schema, kind).
/// Pure: the same inputs always yield byte-identical text.
pub fn build(schema: &TableSchema, kind: StatementKind) -> String {
    match kind {
        StatementKind::Insert => {
            let marks = vec!["?"; schema.column_count()].join(", ");
            format!("INSERT INTO {} VALUES({});", schema.name(), marks)
        }
        StatementKind::SearchExact => {
            format!(
                "SELECT * FROM {} WHERE {};",
                schema.name(),
                key_predicates(schema, "=")
            )
        }
        StatementKind::SearchPrefixMatch => {
            format!(
                "SELECT * FROM {} WHERE {};",
                schema.name(),
                key_predicates(schema, "LIKE")
            )
        }
        StatementKind::Update => {
            let set_block = schema
                .update_columns()
                .iter()
                .map(|c| format!("{} = ?", c.name))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "UPDATE {} SET {} WHERE {};",
                schema.name(),
                set_block,
                key_predicates(schema, "=")
            )
        }
        StatementKind::Delete => {
            format!(
                "DELETE FROM {} WHERE {};",
                schema.name(),
                key_predicates(schema, "=")
            )
        }
    }
}

/// Number of placeholders `build` emits for (schema, kind). The binder's
/// value slice must cover exactly this many positions.
pub fn placeholder_count(schema: &TableSchema, kind: StatementKind) -> usize {
    match kind {
        StatementKind::Insert => schema.column_count(),
        StatementKind::SearchExact | StatementKind::SearchPrefixMatch | StatementKind::Delete => {
            schema.pk_len
        }
        StatementKind::Update => schema.update_columns().len() + schema.pk_len,
    }
}

/// The parameterless full-table dump, used for post-mutation confirmation
pub fn full_table(schema: &TableSchema) -> String {
    format!("SELECT * FROM {};", schema.name())
}

fn key_predicates(schema: &TableSchema, op: &str) -> String {
    schema
        .pk_columns()
        .iter()
        .map(|c| format!("{} {} ?", c.name, op))
        .collect::<Vec<_>>()
        .join(" AND ")
}
