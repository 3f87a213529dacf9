use crate::error::TableError;
use crate::state::Frame;
use crate::table::{EntityRow, PriceTable};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
struct RowSer<'a> {
    entity: &'a str,
    values: &'a [Option<f64>],
}

#[derive(Serialize)]
struct TableSer<'a> {
    periods: &'a [String],
    rows: Vec<RowSer<'a>>,
}

#[derive(Deserialize)]
struct RowDe {
    entity: String,
    values: Vec<Option<f64>>,
}

#[derive(Deserialize)]
struct TableDe {
    periods: Vec<String>,
    rows: Vec<RowDe>,
}

/// `{ "periods": [..], "rows": [{ "entity": "..", "values": [number|null, ..] }] }`
pub fn table_to_json(t: &PriceTable) -> Value {
    let doc = TableSer {
        periods: t.periods(),
        rows: t
            .rows()
            .iter()
            .map(|r| RowSer { entity: &r.entity, values: &r.values })
            .collect(),
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

pub fn table_from_json(v: Value) -> Result<PriceTable, TableError> {
    let doc: TableDe = serde_json::from_value(v).map_err(|e| TableError::Json(e.to_string()))?;
    let rows = doc
        .rows
        .into_iter()
        .map(|r| EntityRow { entity: r.entity, values: r.values })
        .collect();
    PriceTable::from_rows(doc.periods, rows)
}

pub fn frame_to_json(f: &Frame) -> Value { serde_json::to_value(f).unwrap_or(Value::Null) }

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_json_round_trip_keeps_missing() {
        let t = PriceTable::parse_csv("id,State,2000,2005\n0,Ohio,100,\n1,Iowa,90,95\n").unwrap();
        let v = table_to_json(&t);
        assert_eq!(v["rows"][0]["values"], json!([100.0, null]));
        let back = table_from_json(v).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn malformed_document() {
        let e = table_from_json(json!({ "periods": "2000" })).unwrap_err();
        assert_eq!(e.code(), "json_parse");
    }
}
