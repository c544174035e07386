use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::engine::locate::locate;
use crate::engine::project::{print_table, project};
use crate::engine::reports;
use crate::error::EngineError;
use crate::schema::{Column, TableSchema, registry};
use crate::sql::{StatementKind, bind, build};
use crate::store::Store;

/// Operations reachable from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOp {
    Insert,
    Search,
    Update,
    Delete,
    Report,
}

impl MenuOp {
    fn purpose(self) -> &'static str {
        match self {
            MenuOp::Insert => "insert into",
            MenuOp::Search => "search from",
            MenuOp::Update => "update",
            MenuOp::Delete => "delete from",
            MenuOp::Report => "report on",
        }
    }
}

/// Dispatcher states. One menu iteration walks MainMenu -> AwaitingTable
/// -> Executing and back; Report skips table selection; Exit is terminal.
enum State {
    MainMenu,
    AwaitingTable(MenuOp),
    Executing {
        op: MenuOp,
        schema: Option<&'static TableSchema>,
    },
    Exit,
}

/// Top-level request/response loop. Owns the pre-check -> mutate ->
/// confirm protocol for update and delete. No error leaves a menu
/// iteration: store failures are printed with a label describing the
/// attempted action and the loop returns to the main menu.
pub struct Dispatcher<'s, R, W> {
    store: &'s mut dyn Store,
    input: R,
    out: W,
}

impl<'s, R: BufRead, W: Write> Dispatcher<'s, R, W> {
    pub fn new(store: &'s mut dyn Store, input: R, out: W) -> Self {
        Self { store, input, out }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let mut state = State::MainMenu;
        loop {
            state = match state {
                State::MainMenu => self.main_menu()?,
                State::AwaitingTable(op) => self.await_table(op)?,
                State::Executing { op, schema } => {
                    self.execute_op(op, schema)?;
                    writeln!(self.out, "Returning to Main Menu.")?;
                    writeln!(self.out)?;
                    State::MainMenu
                }
                State::Exit => break,
            };
        }
        writeln!(self.out)?;
        writeln!(self.out, "Thank you for using the animedb frontend. Goodbye.")?;
        Ok(())
    }

    fn main_menu(&mut self) -> io::Result<State> {
        writeln!(self.out)?;
        writeln!(self.out, "[Main Menu]")?;
        writeln!(self.out)?;
        writeln!(self.out, "Select an option by entering the corresponding index below:")?;
        writeln!(self.out)?;
        writeln!(self.out, "0. Insert a new record.")?;
        writeln!(self.out, "1. Search for existing records.")?;
        writeln!(self.out, "2. Update an existing record.")?;
        writeln!(self.out, "3. Delete an existing record.")?;
        writeln!(self.out, "4. Print a list of useful reports.")?;
        writeln!(self.out)?;
        writeln!(self.out, "5. Exit.")?;
        writeln!(self.out)?;

        let Some(selection) = self.prompt("Enter your selection: ")? else {
            return Ok(State::Exit);
        };

        // Anything outside the listed options exits, by design of the menu.
        let next = match selection.trim() {
            "0" => State::AwaitingTable(MenuOp::Insert),
            "1" => State::AwaitingTable(MenuOp::Search),
            "2" => State::AwaitingTable(MenuOp::Update),
            "3" => State::AwaitingTable(MenuOp::Delete),
            "4" => State::Executing {
                op: MenuOp::Report,
                schema: None,
            },
            _ => State::Exit,
        };
        Ok(next)
    }

    fn await_table(&mut self, op: MenuOp) -> io::Result<State> {
        writeln!(self.out)?;
        writeln!(self.out, "Select a table to {}", op.purpose())?;
        writeln!(self.out, "by entering the corresponding index below:")?;
        writeln!(self.out)?;
        writeln!(self.out, "0. CUSTOMER")?;
        writeln!(self.out, "1. ANIME")?;
        writeln!(self.out, "2. STUDIO")?;
        writeln!(self.out, "3. CREATOR")?;
        writeln!(self.out)?;
        writeln!(self.out, "4. Cancel.")?;
        writeln!(self.out)?;

        let Some(selection) = self.prompt("Enter your selection: ")? else {
            return Ok(State::Exit);
        };

        let name = match selection.trim() {
            "0" => "CUSTOMER",
            "1" => "ANIME",
            "2" => "STUDIO",
            "3" => "CREATOR",
            _ => {
                writeln!(self.out, "Returning to Main Menu.")?;
                writeln!(self.out)?;
                return Ok(State::MainMenu);
            }
        };

        match registry().lookup(name) {
            Ok(schema) => Ok(State::Executing {
                op,
                schema: Some(schema),
            }),
            Err(e) => {
                writeln!(self.out, "Err: {e}")?;
                writeln!(self.out, "Returning to Main Menu.")?;
                writeln!(self.out)?;
                Ok(State::MainMenu)
            }
        }
    }

    fn execute_op(&mut self, op: MenuOp, schema: Option<&TableSchema>) -> io::Result<()> {
        debug!(?op, table = schema.map(|s| s.name()), "executing operation");
        match (op, schema) {
            (MenuOp::Insert, Some(schema)) => self.do_insert(schema),
            (MenuOp::Search, Some(schema)) => self.do_search(schema),
            (MenuOp::Update, Some(schema)) => self.do_update(schema),
            (MenuOp::Delete, Some(schema)) => self.do_delete(schema),
            (MenuOp::Report, _) => reports::print_all(self.store, &mut self.out),
            // Table ops never reach Executing without a schema.
            _ => {
                writeln!(self.out, "Err: {}", EngineError::UnsupportedOperation(format!("{op:?}")))
            }
        }
    }

    fn do_insert(&mut self, schema: &TableSchema) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Please enter the new column values for row in table: {}",
            schema.name()
        )?;
        writeln!(self.out)?;
        let Some(values) = self.collect_values(&schema.columns)? else {
            return Ok(());
        };

        let sql = build(schema, StatementKind::Insert);
        match bind(schema, StatementKind::Insert, &values) {
            Ok(report) => {
                self.print_bind_failures(&report.failures)?;
                match self.store.execute(&sql, &report.params) {
                    Ok(_) => {
                        writeln!(
                            self.out,
                            "New data successfully inserted into table: {}.",
                            schema.name()
                        )?;
                        writeln!(self.out, "...Printing updated table content as confirmation.")?;
                        writeln!(self.out)?;
                        print_table(self.store, schema, &mut self.out)?;
                    }
                    Err(e) => {
                        writeln!(self.out, "Err: store failure while inserting a new record: {e}")?;
                    }
                }
            }
            Err(e) => writeln!(self.out, "Err: {e}")?,
        }
        Ok(())
    }

    fn do_search(&mut self, schema: &TableSchema) -> io::Result<()> {
        let Some(pk_values) = self.collect_pk_values(schema)? else {
            return Ok(());
        };

        let sql = build(schema, StatementKind::SearchPrefixMatch);
        match bind(schema, StatementKind::SearchPrefixMatch, &pk_values) {
            Ok(report) => match self.store.query(&sql, &report.params) {
                Ok(mut cursor) => {
                    project(cursor.as_mut(), &mut self.out)?;
                }
                Err(e) => {
                    writeln!(self.out, "Err: store failure while searching records: {e}")?;
                }
            },
            Err(e) => writeln!(self.out, "Err: {e}")?,
        }
        Ok(())
    }

    fn do_update(&mut self, schema: &TableSchema) -> io::Result<()> {
        let Some(pk_values) = self.collect_pk_values(schema)? else {
            return Ok(());
        };

        // Locate gate: no UPDATE statement is built unless the row exists.
        match locate(self.store, schema, &pk_values) {
            Ok(outcome) if !outcome.found => {
                writeln!(
                    self.out,
                    "No row in {} matches the given primary key; nothing to update.",
                    schema.name()
                )?;
                return Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                writeln!(self.out, "Err: {e}")?;
                return Ok(());
            }
        }

        writeln!(self.out)?;
        writeln!(
            self.out,
            "Please enter the updated values for your chosen row in table: {}",
            schema.name()
        )?;
        writeln!(self.out)?;
        let Some(update_values) = self.collect_values(schema.update_columns())? else {
            return Ok(());
        };

        // Bind in the builder's two-block order: update values, then keys.
        let mut values = update_values;
        values.extend(pk_values);

        let sql = build(schema, StatementKind::Update);
        match bind(schema, StatementKind::Update, &values) {
            Ok(report) => {
                self.print_bind_failures(&report.failures)?;
                match self.store.execute(&sql, &report.params) {
                    Ok(_) => {
                        writeln!(
                            self.out,
                            "Record successfully updated in table: {}.",
                            schema.name()
                        )?;
                        writeln!(self.out, "...Printing updated table content as confirmation.")?;
                        writeln!(self.out)?;
                        print_table(self.store, schema, &mut self.out)?;
                    }
                    Err(e) => {
                        writeln!(self.out, "Err: store failure while updating a record: {e}")?;
                    }
                }
            }
            Err(e) => writeln!(self.out, "Err: {e}")?,
        }
        Ok(())
    }

    fn do_delete(&mut self, schema: &TableSchema) -> io::Result<()> {
        let Some(pk_values) = self.collect_pk_values(schema)? else {
            return Ok(());
        };

        // Locate gate, same as update.
        match locate(self.store, schema, &pk_values) {
            Ok(outcome) if !outcome.found => {
                writeln!(
                    self.out,
                    "No row in {} matches the given primary key; nothing to delete.",
                    schema.name()
                )?;
                return Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                writeln!(self.out, "Err: {e}")?;
                return Ok(());
            }
        }

        let sql = build(schema, StatementKind::Delete);
        match bind(schema, StatementKind::Delete, &pk_values) {
            Ok(report) => match self.store.execute(&sql, &report.params) {
                Ok(_) => {
                    writeln!(
                        self.out,
                        "Record successfully deleted from table: {}.",
                        schema.name()
                    )?;
                    writeln!(self.out, "...Printing updated table content as confirmation.")?;
                    writeln!(self.out)?;
                    print_table(self.store, schema, &mut self.out)?;
                }
                Err(e) => {
                    writeln!(self.out, "Err: store failure while deleting a record: {e}")?;
                }
            },
            Err(e) => writeln!(self.out, "Err: {e}")?,
        }
        Ok(())
    }

    /// Prompts for one value per column. `None` means end-of-input.
    fn collect_values(&mut self, columns: &[Column]) -> io::Result<Option<Vec<String>>> {
        let mut values = Vec::with_capacity(columns.len());
        for col in columns {
            let prompt = format!("{} (type {}): ", col.name, col.dtype.label());
            let Some(value) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            values.push(value);
        }
        writeln!(self.out)?;
        Ok(Some(values))
    }

    fn collect_pk_values(&mut self, schema: &TableSchema) -> io::Result<Option<Vec<String>>> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "In order to locate the row you need in table: {}",
            schema.name()
        )?;
        writeln!(self.out, "...Please enter its primary key value(s):")?;
        writeln!(self.out)?;
        self.collect_values(schema.pk_columns())
    }

    fn print_bind_failures(&mut self, failures: &[crate::error::CoercionFailure]) -> io::Result<()> {
        for failure in failures {
            writeln!(self.out, "Err: {failure}")?;
        }
        Ok(())
    }

    /// Prints a prompt and reads one line; `None` on end-of-input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
