use std::io;

use animedb_core::{Dispatcher, SqliteStore, Store};
use anyhow::Context;
use tracing::info;

const DEFAULT_DB_PATH: &str = "AllRecords.db";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
    let mut store =
        SqliteStore::open(&path).with_context(|| format!("opening database at '{path}'"))?;
    info!(path = %path, "database connection established");

    println!();
    println!("Connection to database successfully established.");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let store: &mut dyn Store = &mut store;
    let mut dispatcher = Dispatcher::new(store, stdin.lock(), stdout.lock());
    dispatcher.run()?;

    Ok(())
}
