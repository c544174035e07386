pub mod bind;
pub mod build;

pub use bind::{BindReport, bind};
pub use build::{StatementKind, build, full_table, placeholder_count};
