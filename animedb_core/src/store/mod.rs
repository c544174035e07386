pub mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::StoreError;
use crate::types::Row;
use crate::types::value::BindValue;

/// Store trait - abstraction over the relational backend. Every statement
/// is prepared, bound, executed, and released within one call; nothing is
/// pooled or shared across calls.
pub trait Store {
    /// Runs a mutating statement, binding `params` positionally.
    /// Returns the affected row count. A `None` param stays unbound (NULL).
    fn execute(&mut self, sql: &str, params: &[Option<BindValue>]) -> Result<usize, StoreError>;

    /// Runs a query, binding `params` positionally, and hands back a
    /// one-pass cursor over the result
    fn query(
        &mut self,
        sql: &str,
        params: &[Option<BindValue>],
    ) -> Result<Box<dyn Cursor + '_>, StoreError>;
}

/// A finite, one-pass result cursor. Not restartable: once `next_row`
/// returns `None`, only re-executing the query yields the rows again.
pub trait Cursor {
    fn column_names(&self) -> &[String];

    /// True while the cursor still sits before an unread row. Peeks only;
    /// an existence check through this does not consume the result.
    fn has_rows(&self) -> bool;

    fn next_row(&mut self) -> Result<Option<Row>, StoreError>;
}
