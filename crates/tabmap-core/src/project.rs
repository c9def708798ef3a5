use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::TabmapError;
use crate::frame::TabularFrame;
use crate::mapping::FieldMapping;

/// One output record: alias -> string-or-null.
///
/// `serde_json::Map` preserves insertion order (the `preserve_order`
/// feature), so serialized records list aliases the way the mapping did.
pub type Record = serde_json::Map<String, Value>;

/// The message shape handed back to callers: `{"result": [ <record>, ... ]}`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractOutput {
    pub result: Vec<Record>,
}

/// Select the mapped columns from `frame`, rename them to their aliases,
/// and emit one record per row in original row order.
///
/// Columns outside the mapping are dropped. An empty or absent cell becomes
/// JSON `null`, never an empty string.
pub fn project(frame: &TabularFrame, mapping: &FieldMapping) -> Result<Vec<Record>, TabmapError> {
    // Resolve each mapped source to a column index up front. First
    // occurrence wins when the file has duplicate column names.
    let mut selected = Vec::with_capacity(mapping.len());
    let mut missing = Vec::new();
    for (source, alias) in mapping.iter() {
        match frame.columns.iter().position(|c| c == source) {
            Some(idx) => selected.push((idx, alias)),
            None => missing.push(source.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(TabmapError::MissingColumns {
            missing,
            available: frame.columns.clone(),
        });
    }

    let records: Vec<Record> = frame
        .rows
        .iter()
        .map(|row| {
            let mut record = Record::new();
            for &(idx, alias) in &selected {
                let value = match row.get(idx).and_then(|cell| cell.as_deref()) {
                    Some(cell) => Value::String(cell.to_string()),
                    None => Value::Null,
                };
                record.insert(alias.to_string(), value);
            }
            record
        })
        .collect();

    debug!(
        "projected {} record(s) with {} field(s) each",
        records.len(),
        selected.len()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::parse_field_mapping;

    fn frame() -> TabularFrame {
        TabularFrame {
            columns: vec!["id".into(), "name".into(), "age".into()],
            rows: vec![
                vec![Some("1".into()), Some("Alice".into()), Some("30".into())],
                vec![Some("2".into()), None, Some("41".into())],
            ],
        }
    }

    #[test]
    fn selects_renames_and_drops_unmapped_columns() {
        let mapping = parse_field_mapping(r#"{"name": "full_name", "id": "ID"}"#).unwrap();
        let records = project(&frame(), &mapping).unwrap();

        assert_eq!(records.len(), 2);
        let keys: Vec<_> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["full_name", "ID"]);
        assert_eq!(records[0]["full_name"], Value::String("Alice".into()));
        assert_eq!(records[0]["ID"], Value::String("1".into()));
        assert!(!records[0].contains_key("age"));
    }

    #[test]
    fn empty_cells_become_null_not_empty_string() {
        let mapping = parse_field_mapping(r#"{"name": "n"}"#).unwrap();
        let records = project(&frame(), &mapping).unwrap();
        assert_eq!(records[1]["n"], Value::Null);
    }

    #[test]
    fn missing_sources_are_listed_with_available_columns() {
        let mapping = parse_field_mapping(r#"{"id": "ID", "email": "mail"}"#).unwrap();
        let err = project(&frame(), &mapping).unwrap_err();
        match err {
            TabmapError::MissingColumns { missing, available } => {
                assert_eq!(missing, vec!["email"]);
                assert_eq!(available, vec!["id", "name", "age"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_frame_columns_use_first_occurrence() {
        let frame = TabularFrame {
            columns: vec!["x".into(), "x".into()],
            rows: vec![vec![Some("first".into()), Some("second".into())]],
        };
        let mapping = parse_field_mapping(r#"{"x": "out"}"#).unwrap();
        let records = project(&frame, &mapping).unwrap();
        assert_eq!(records[0]["out"], Value::String("first".into()));
    }

    #[test]
    fn empty_mapping_yields_empty_records_per_row() {
        let mapping = parse_field_mapping("{}").unwrap();
        let records = project(&frame(), &mapping).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_empty());
    }
}
