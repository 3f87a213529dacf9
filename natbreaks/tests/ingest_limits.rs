use natbreaks::json::table_from_json;
use natbreaks::limits;
use natbreaks::{compute_breaks, BreaksError, PriceTable, TableError};
use serde_json::json;

#[test]
fn csv_caps_exceeded_rows() {
    let mut csv = String::from("id,State,2000\n");
    for i in 0..=limits::MAX_TABLE_ROWS {
        csv.push_str(&format!("{},S{},1\n", i, i));
    }
    assert_eq!(
        PriceTable::parse_csv(&csv).unwrap_err(),
        TableError::TooManyRows { max: limits::MAX_TABLE_ROWS }
    );
}

#[test]
fn csv_caps_exceeded_columns() {
    let header: Vec<String> = (0..limits::MAX_TABLE_COLUMNS + 1).map(|i| format!("c{}", i)).collect();
    let csv = format!("{}\n", header.join(","));
    assert_eq!(
        PriceTable::parse_csv(&csv).unwrap_err(),
        TableError::TooManyColumns { max: limits::MAX_TABLE_COLUMNS }
    );
}

#[test]
fn overlong_entity_rejected() {
    let csv = format!("id,State,2000\n1,{},5\n", "x".repeat(limits::MAX_LABEL_LEN + 1));
    assert_eq!(PriceTable::parse_csv(&csv).unwrap_err(), TableError::EmptyEntity { line: 2 });
}

#[test]
fn json_rows_must_match_periods() {
    let v = json!({ "periods": ["2000"], "rows": [{ "entity": "Ohio", "values": [1.0] }] });
    let t = table_from_json(v).unwrap();
    assert_eq!(t.value("Ohio", "2000"), Some(1.0));
    let short = json!({ "periods": ["2000", "2005"], "rows": [{ "entity": "Ohio", "values": [1.0] }] });
    assert!(matches!(
        table_from_json(short),
        Err(TableError::RowShape { got: 1, expected: 2, .. })
    ));
}

#[test]
fn class_cap() {
    let values: Vec<f64> = (0..200).map(f64::from).collect();
    assert!(compute_breaks(&values, limits::MAX_CLASSES).is_ok());
    assert_eq!(
        compute_breaks(&values, limits::MAX_CLASSES + 1),
        Err(BreaksError::InvalidClassCount {
            classes: limits::MAX_CLASSES + 1,
            max: limits::MAX_CLASSES
        })
    );
}

#[test]
fn thousands_of_values_complete() {
    let values: Vec<f64> = (0..2_000).map(|i| ((i * 7919) % 2003) as f64).collect();
    let b = compute_breaks(&values, 6).unwrap();
    assert_eq!(b.len(), 6);
    assert_eq!(b[0], 0.0);
}
