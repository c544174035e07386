use animedb_core::{Dispatcher, Store};

use crate::common::{insert_anime, query_rows, store_with_schema};
use crate::engine_test::RecordingStore;

fn run_session(store: &mut dyn Store, input: &str) -> String {
    let mut out = Vec::new();
    let mut dispatcher = Dispatcher::new(store, input.as_bytes(), &mut out);
    dispatcher.run().unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn insert_scenario_binds_types_and_confirms_with_a_dump() {
    let mut store = store_with_schema();
    let output = run_session(
        &mut store,
        "0\n1\nBleach\nShinigami power\nAction\n999\n2004\n5\n",
    );

    assert!(output.contains("New data successfully inserted into table: ANIME."));
    assert!(output.contains("Row 1: Bleach, Shinigami power, Action, 999, 2004"));

    let rows = query_rows(&mut store, "SELECT * FROM ANIME;");
    assert_eq!(
        rows,
        vec![vec![
            "Bleach".to_string(),
            "Shinigami power".to_string(),
            "Action".to_string(),
            "999".to_string(),
            "2004".to_string()
        ]]
    );
}

#[test]
fn insert_with_bad_integer_reports_coercion_and_stores_null() {
    // Inherited behavior, preserved deliberately: the failing position is
    // left unbound and the insert still runs, so NULL lands in the column.
    let mut store = store_with_schema();
    let output = run_session(
        &mut store,
        "0\n1\nBleach\nd\nAction\n999\nnot-a-year\n5\n",
    );

    assert!(output.contains("cannot coerce 'not-a-year' into integer column 'Release_year'"));
    let rows = query_rows(&mut store, "SELECT Release_year FROM ANIME;");
    assert_eq!(rows, vec![vec!["null".to_string()]]);
}

#[test]
fn search_uses_substring_matching() {
    let mut store = store_with_schema();
    insert_anime(&mut store, "Madoka Magica", "Drama", 499, 2011);
    insert_anime(&mut store, "Bleach", "Action", 999, 2004);

    let output = run_session(&mut store, "1\n1\nmad\n5\n");
    assert!(output.contains("Madoka Magica"));
    assert!(!output.contains("Bleach,"));
}

#[test]
fn search_with_no_match_prints_the_sentinel() {
    let mut store = store_with_schema();
    let output = run_session(&mut store, "1\n2\nghibli\n5\n");
    assert!(output.contains("Your query returned no rows."));
}

#[test]
fn update_miss_never_builds_a_mutating_statement() {
    // CREATOR pair that does not exist: the locate gate must stop the
    // operation before any UPDATE reaches the store.
    let mut store = RecordingStore::new();
    let output = run_session(&mut store, "2\n3\nTitleX\nStudioY\n5\n");

    assert!(output.contains("No row in CREATOR matches the given primary key; nothing to update."));
    assert!(store.executed.is_empty());
    assert_eq!(
        store.queried,
        vec!["SELECT * FROM CREATOR WHERE Anime_title = ? AND Studio_name = ?;".to_string()]
    );
    assert!(output.contains("Returning to Main Menu."));
}

#[test]
fn delete_miss_never_builds_a_mutating_statement() {
    let mut store = RecordingStore::new();
    let output = run_session(&mut store, "3\n1\nGhost\n5\n");

    assert!(output.contains("No row in ANIME matches the given primary key; nothing to delete."));
    assert!(store.executed.is_empty());
}

#[test]
fn update_hit_rewrites_the_row() {
    let mut store = store_with_schema();
    insert_anime(&mut store, "Madoka Magica", "Drama", 499, 2011);

    let output = run_session(
        &mut store,
        "2\n1\nMadoka Magica\nA contract with Kyubey\nTragedy\n599\n2011\n5\n",
    );
    assert!(output.contains("Record successfully updated in table: ANIME."));

    let rows = query_rows(&mut store, "SELECT Genre, Price FROM ANIME;");
    assert_eq!(rows, vec![vec!["Tragedy".to_string(), "599".to_string()]]);
}

#[test]
fn delete_hit_removes_the_row() {
    let mut store = store_with_schema();
    insert_anime(&mut store, "Bleach", "Action", 999, 2004);

    let output = run_session(&mut store, "3\n1\nBleach\n5\n");
    assert!(output.contains("Record successfully deleted from table: ANIME."));

    let rows = query_rows(&mut store, "SELECT * FROM ANIME;");
    assert!(rows.is_empty());
}

#[test]
fn unrecognized_menu_selection_exits() {
    let mut store = store_with_schema();
    let output = run_session(&mut store, "9\n");
    assert!(output.contains("Goodbye."));
    // Never reached the table menu.
    assert!(!output.contains("0. CUSTOMER"));
}

#[test]
fn end_of_input_exits() {
    let mut store = store_with_schema();
    let output = run_session(&mut store, "");
    assert!(output.contains("Goodbye."));
}

#[test]
fn invalid_table_selection_returns_to_main_menu() {
    let mut store = store_with_schema();
    let output = run_session(&mut store, "0\n7\n5\n");
    assert_eq!(output.matches("[Main Menu]").count(), 2);
    assert!(output.contains("Goodbye."));
}

#[test]
fn cancelling_table_selection_at_end_of_input_exits() {
    let mut store = store_with_schema();
    let output = run_session(&mut store, "0\n");
    assert!(output.contains("Goodbye."));
}

#[test]
fn store_failure_during_insert_is_reported_and_loop_survives() {
    // No tables exist, so the INSERT fails at the store; the dispatcher
    // must print the failure and come back to the main menu.
    let mut store = crate::common::empty_store();
    let output = run_session(&mut store, "0\n2\nGhibli\nd\nw\na\n5\n");

    assert!(output.contains("Err: store failure while inserting a new record"));
    assert!(output.contains("Returning to Main Menu."));
    assert!(output.contains("Goodbye."));
}
