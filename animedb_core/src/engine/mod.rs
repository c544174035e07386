pub mod dispatch;
pub mod locate;
pub mod project;
pub mod reports;

pub use dispatch::Dispatcher;
pub use locate::{LocateOutcome, locate};
pub use project::{print_query, print_table, project};
