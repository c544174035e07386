use tracing::warn;

use crate::error::{CoercionFailure, EngineError};
use crate::schema::{Column, TableSchema};
use crate::sql::build::{StatementKind, placeholder_count};
use crate::types::datatype::DataType;
use crate::types::value::{BindValue, coerce};

/// The positional bind plan for one statement execution. A `None` position
/// is left unbound, which the store executes as SQL NULL.
#[derive(Debug)]
pub struct BindReport {
    pub params: Vec<Option<BindValue>>,
    pub failures: Vec<CoercionFailure>,
}

impl BindReport {
    fn with_capacity(n: usize) -> Self {
        Self {
            params: Vec::with_capacity(n),
            failures: Vec::new(),
        }
    }

    /// True when every placeholder received a value
    pub fn fully_bound(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Binds raw string values positionally for (schema, kind).
///
/// For `Update`, `values` must be the two contiguous blocks in builder
/// order: the update values first, then the primary-key values. Integer
/// columns are coerced before binding; a coercion failure is recorded and
/// binding continues with that position unbound. This mirrors the behavior
/// the program has always had, and is pinned by tests rather than fixed.
pub fn bind(
    schema: &TableSchema,
    kind: StatementKind,
    values: &[String],
) -> Result<BindReport, EngineError> {
    let expected = placeholder_count(schema, kind);
    if values.len() != expected {
        return Err(EngineError::ParamCount {
            expected,
            got: values.len(),
        });
    }

    let mut report = BindReport::with_capacity(expected);
    match kind {
        StatementKind::Insert => {
            bind_block(&mut report, schema.columns.as_slice(), values);
        }
        StatementKind::SearchExact | StatementKind::Delete => {
            // Primary keys in this schema set are always text: bind raw.
            for v in values {
                report.params.push(Some(BindValue::Text(v.clone())));
            }
        }
        StatementKind::SearchPrefixMatch => {
            for v in values {
                report
                    .params
                    .push(Some(BindValue::Text(format!("%{v}%"))));
            }
        }
        StatementKind::Update => {
            let set_cols = schema.update_columns();
            let (set_vals, key_vals) = values.split_at(set_cols.len());
            bind_block(&mut report, set_cols, set_vals);
            for v in key_vals {
                report.params.push(Some(BindValue::Text(v.clone())));
            }
        }
    }
    Ok(report)
}

/// Binds one contiguous block of values against its column definitions,
/// coercing per column type
fn bind_block(report: &mut BindReport, columns: &[Column], values: &[String]) {
    for (col, raw) in columns.iter().zip(values) {
        match col.dtype {
            DataType::Text => report.params.push(Some(BindValue::Text(raw.clone()))),
            DataType::Int => match coerce(col.dtype, raw) {
                Ok(v) => report.params.push(Some(v)),
                Err(_) => {
                    let failure = CoercionFailure {
                        column: col.name.to_string(),
                        raw: raw.clone(),
                    };
                    warn!(column = col.name, raw = %raw, "coercion failed; leaving position unbound");
                    report.failures.push(failure);
                    report.params.push(None);
                }
            },
        }
    }
}
