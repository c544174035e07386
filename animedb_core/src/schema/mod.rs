pub mod registry;

pub use registry::{Registry, Table, registry};

use crate::types::datatype::DataType;

/// A single column in a table schema
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub dtype: DataType,
}

impl Column {
    pub const fn new(name: &'static str, dtype: DataType) -> Self {
        Self { name, dtype }
    }
}

/// Ordered column list plus the length of the leading primary-key prefix.
/// Built once into the registry at startup and never mutated.
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub table: Table,
    pub columns: Vec<Column>,
    pub pk_len: usize,
}

impl TableSchema {
    pub fn new(table: Table, columns: Vec<Column>, pk_len: usize) -> Self {
        assert!(pk_len >= 1 && pk_len <= columns.len());
        Self {
            table,
            columns,
            pk_len,
        }
    }

    pub fn name(&self) -> &'static str {
        self.table.name()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The leading columns that form the primary key
    pub fn pk_columns(&self) -> &[Column] {
        &self.columns[..self.pk_len]
    }

    /// Columns listed in an UPDATE's SET block. Normally the non-key
    /// suffix; when the key spans the whole relation (CREATOR) an update
    /// replaces the key pair itself, so every column is settable.
    pub fn update_columns(&self) -> &[Column] {
        if self.pk_len < self.columns.len() {
            &self.columns[self.pk_len..]
        } else {
            &self.columns
        }
    }
}
