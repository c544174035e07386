pub mod datatype;
pub mod value;

/// A row materialized from a query result: one string per column,
/// positionally aligned with the schema's column order
pub type Row = Vec<String>;
