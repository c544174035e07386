use std::sync::LazyLock;

use crate::error::EngineError;
use crate::schema::{Column, TableSchema};
use crate::types::datatype::DataType::{Int, Text};

/// The four tables this front end knows about. Closed set: adding a table
/// means adding a variant, and every match below is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Customer,
    Anime,
    Studio,
    Creator,
}

impl Table {
    pub const ALL: [Table; 4] = [Table::Customer, Table::Anime, Table::Studio, Table::Creator];

    /// Canonical upper-case name as it appears in the database
    pub fn name(self) -> &'static str {
        match self {
            Table::Customer => "CUSTOMER",
            Table::Anime => "ANIME",
            Table::Studio => "STUDIO",
            Table::Creator => "CREATOR",
        }
    }

    /// Exact, case-sensitive match against the canonical names
    pub fn parse(name: &str) -> Option<Table> {
        Table::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Read-only registry of all table schemas. One instance per process,
/// constructed on first use and alive until exit.
#[derive(Debug)]
pub struct Registry {
    schemas: [TableSchema; 4],
}

impl Registry {
    fn build() -> Self {
        let customer = TableSchema::new(
            Table::Customer,
            vec![
                Column::new("Username", Text),
                Column::new("Password", Text),
                Column::new("First_name", Text),
                Column::new("Last_name", Text),
                Column::new("Email", Text),
                Column::new("Creation_date", Text),
                Column::new("Billing_info", Text),
                Column::new("DOB", Text),
            ],
            1,
        );
        let anime = TableSchema::new(
            Table::Anime,
            vec![
                Column::new("Title", Text),
                Column::new("Description", Text),
                Column::new("Genre", Text),
                Column::new("Price", Int),
                Column::new("Release_year", Int),
            ],
            1,
        );
        let studio = TableSchema::new(
            Table::Studio,
            vec![
                Column::new("Name", Text),
                Column::new("Description", Text),
                Column::new("Website", Text),
                Column::new("Address", Text),
            ],
            1,
        );
        let creator = TableSchema::new(
            Table::Creator,
            vec![
                Column::new("Anime_title", Text),
                Column::new("Studio_name", Text),
            ],
            2,
        );
        Self {
            schemas: [customer, anime, studio, creator],
        }
    }

    pub fn schema(&self, table: Table) -> &TableSchema {
        &self.schemas[table as usize]
    }

    /// Resolves a table name to its schema, or `UnknownTable`
    pub fn lookup(&self, name: &str) -> Result<&TableSchema, EngineError> {
        Table::parse(name)
            .map(|t| self.schema(t))
            .ok_or_else(|| EngineError::UnknownTable(name.to_string()))
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::build);

/// The process-wide schema registry
pub fn registry() -> &'static Registry {
    &REGISTRY
}
