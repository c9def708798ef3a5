use std::io::Cursor;

use calamine::Reader;
use tracing::debug;

use crate::error::TabmapError;
use crate::frame::TabularFrame;

/// Parse xlsx/xls bytes into a frame, reading the first sheet only.
///
/// The first row becomes the column names. Every cell is read as a string:
/// numeric, boolean and date cells are stringified, empty cells become
/// `None`. The workbook format is sniffed from the bytes, so a `.xls`
/// extension on xlsx content still parses.
pub fn read_spreadsheet(content: &[u8]) -> Result<TabularFrame, TabmapError> {
    let cursor = Cursor::new(content);
    let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| TabmapError::FileParse(format!("failed to open spreadsheet: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TabmapError::FileParse("no worksheet found".into()))?
        .map_err(|e| TabmapError::FileParse(format!("failed to read worksheet: {e}")))?;

    let mut rows_iter = range.rows();
    let columns: Vec<String> = match rows_iter.next() {
        Some(header) => header
            .iter()
            .map(|cell| cell_as_string(cell).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    };

    let rows: Vec<Vec<Option<String>>> = rows_iter
        .map(|row| row.iter().map(cell_as_string).collect())
        .collect();

    debug!(
        "parsed spreadsheet: {} columns, {} data rows",
        columns.len(),
        rows.len()
    );
    Ok(TabularFrame { columns, rows })
}

fn cell_as_string(cell: &calamine::Data) -> Option<String> {
    match cell {
        calamine::Data::Empty => None,
        calamine::Data::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        calamine::Data::Float(f) => Some(f.to_string()),
        calamine::Data::Int(i) => Some(i.to_string()),
        calamine::Data::Bool(b) => Some(b.to_string()),
        calamine::Data::DateTime(dt) => Some(dt.to_string()),
        _ => Some(format!("{cell}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = read_spreadsheet(b"definitely not a workbook").unwrap_err();
        match err {
            TabmapError::FileParse(msg) => assert!(msg.contains("failed to open spreadsheet")),
            other => panic!("expected FileParse, got {other:?}"),
        }
    }

    #[test]
    fn cell_stringification_covers_non_text_types() {
        assert_eq!(cell_as_string(&calamine::Data::Empty), None);
        assert_eq!(cell_as_string(&calamine::Data::String(String::new())), None);
        assert_eq!(
            cell_as_string(&calamine::Data::Float(2.0)),
            Some("2".to_string())
        );
        assert_eq!(
            cell_as_string(&calamine::Data::Int(7)),
            Some("7".to_string())
        );
        assert_eq!(
            cell_as_string(&calamine::Data::Bool(true)),
            Some("true".to_string())
        );
    }
}
