use thiserror::Error;

/// Failure from the underlying relational store. Doubles in tests use
/// `Other`; the real driver maps through `Sqlite`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("{0}")]
    Other(String),
}

/// A per-column coercion failure. Reported alongside the bind plan, never
/// fatal to the binder (see `sql::bind`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot coerce '{raw}' into integer column '{column}'")]
pub struct CoercionFailure {
    pub column: String,
    pub raw: String,
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// Name is not one of the four recognized tables.
    #[error("unknown table '{0}'")]
    UnknownTable(String),

    /// Operation kind with no statement shape. Unreachable through the
    /// closed `StatementKind` enum; kept for callers mapping external input.
    #[error("unsupported operation '{0}'")]
    UnsupportedOperation(String),

    #[error(transparent)]
    CoercionFailed(#[from] CoercionFailure),

    /// Primary-key lookup matched no row. Expected outcome, not a crash.
    #[error("no matching row")]
    NotFound,

    /// The supplied values do not cover the statement's placeholders.
    #[error("expected {expected} values but got {got}")]
    ParamCount { expected: usize, got: usize },

    #[error("store error while {label}: {source}")]
    Store {
        label: String,
        #[source]
        source: StoreError,
    },
}

impl EngineError {
    /// Wraps a store failure with a label describing the attempted action.
    pub fn store(label: impl Into<String>, source: StoreError) -> Self {
        EngineError::Store {
            label: label.into(),
            source,
        }
    }
}
