use animedb_core::sql::bind;
use animedb_core::types::value::BindValue;
use animedb_core::{EngineError, StatementKind, Table, registry};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn insert_coerces_integer_columns() {
    let anime = registry().schema(Table::Anime);
    let values = strings(&["Bleach", "Shinigami", "Action", "999", "2004"]);
    let report = bind(anime, StatementKind::Insert, &values).unwrap();

    assert!(report.fully_bound());
    assert_eq!(report.params[0], Some(BindValue::Text("Bleach".into())));
    assert_eq!(report.params[3], Some(BindValue::Int(999)));
    assert_eq!(report.params[4], Some(BindValue::Int(2004)));
}

#[test]
fn coercion_failure_is_reported_and_binding_continues() {
    let anime = registry().schema(Table::Anime);
    let values = strings(&["Bleach", "Shinigami", "Action", "999", "not-a-year"]);
    let report = bind(anime, StatementKind::Insert, &values).unwrap();

    assert!(!report.fully_bound());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].column, "Release_year");
    assert_eq!(report.failures[0].raw, "not-a-year");

    // The failing position stays unbound; everything after it still binds.
    assert_eq!(report.params[3], Some(BindValue::Int(999)));
    assert_eq!(report.params[4], None);
}

#[test]
fn coercion_failure_mid_row_still_binds_later_columns() {
    let anime = registry().schema(Table::Anime);
    let values = strings(&["Bleach", "Shinigami", "Action", "cheap", "2004"]);
    let report = bind(anime, StatementKind::Insert, &values).unwrap();

    assert_eq!(report.failures[0].column, "Price");
    assert_eq!(report.params[3], None);
    assert_eq!(report.params[4], Some(BindValue::Int(2004)));
}

#[test]
fn prefix_match_wraps_key_values_in_wildcards() {
    let anime = registry().schema(Table::Anime);
    let report = bind(anime, StatementKind::SearchPrefixMatch, &strings(&["mad"])).unwrap();
    assert_eq!(report.params[0], Some(BindValue::Text("%mad%".into())));
}

#[test]
fn exact_search_binds_key_values_unmodified() {
    let anime = registry().schema(Table::Anime);
    let report = bind(anime, StatementKind::SearchExact, &strings(&["mad"])).unwrap();
    assert_eq!(report.params[0], Some(BindValue::Text("mad".into())));
}

#[test]
fn delete_binds_key_values_unmodified() {
    let creator = registry().schema(Table::Creator);
    let report = bind(
        creator,
        StatementKind::Delete,
        &strings(&["Madoka", "Shaft"]),
    )
    .unwrap();
    assert_eq!(report.params[0], Some(BindValue::Text("Madoka".into())));
    assert_eq!(report.params[1], Some(BindValue::Text("Shaft".into())));
}

#[test]
fn update_binds_set_block_then_key_block() {
    let anime = registry().schema(Table::Anime);
    let values = strings(&["New desc", "Drama", "499", "2011", "Madoka"]);
    let report = bind(anime, StatementKind::Update, &values).unwrap();

    assert!(report.fully_bound());
    assert_eq!(report.params[0], Some(BindValue::Text("New desc".into())));
    assert_eq!(report.params[2], Some(BindValue::Int(499)));
    assert_eq!(report.params[3], Some(BindValue::Int(2011)));
    // Key block comes last and is never coerced.
    assert_eq!(report.params[4], Some(BindValue::Text("Madoka".into())));
}

#[test]
fn whole_key_update_binds_new_pair_then_old_pair() {
    let creator = registry().schema(Table::Creator);
    let values = strings(&["NewTitle", "NewStudio", "OldTitle", "OldStudio"]);
    let report = bind(creator, StatementKind::Update, &values).unwrap();

    let bound: Vec<_> = report
        .params
        .iter()
        .map(|p| match p {
            Some(BindValue::Text(s)) => s.as_str(),
            other => panic!("unexpected param {other:?}"),
        })
        .collect();
    assert_eq!(bound, vec!["NewTitle", "NewStudio", "OldTitle", "OldStudio"]);
}

#[test]
fn wrong_value_count_errors() {
    let anime = registry().schema(Table::Anime);
    let err = bind(anime, StatementKind::Insert, &strings(&["only", "four", "values", "here"]))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::ParamCount { expected: 5, got: 4 }
    ));
}

#[test]
fn binding_integer_year_succeeds() {
    let anime = registry().schema(Table::Anime);
    let values = strings(&["T", "D", "G", "1", "2011"]);
    let report = bind(anime, StatementKind::Insert, &values).unwrap();
    assert_eq!(report.params[4], Some(BindValue::Int(2011)));
}
