pub mod engine;
pub mod error;
pub mod schema;
pub mod sql;
pub mod store;
pub mod types;

pub use engine::Dispatcher;
pub use error::{CoercionFailure, EngineError, StoreError};
pub use schema::{Registry, Table, TableSchema, registry};
pub use sql::{BindReport, StatementKind};
pub use store::{Cursor, SqliteStore, Store};
