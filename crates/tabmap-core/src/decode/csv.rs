use encoding_rs::Encoding;
use tracing::debug;

use crate::error::TabmapError;
use crate::frame::TabularFrame;

/// Decode CSV bytes, trying each candidate encoding in order.
///
/// A candidate is rejected on any malformed byte sequence or CSV structural
/// error and the next one is tried. Cell values are kept as raw strings,
/// with empty fields mapped to `None`.
pub fn read_csv_with_encodings(
    content: &[u8],
    encodings: &[&'static Encoding],
) -> Result<TabularFrame, TabmapError> {
    if content.is_empty() {
        return Err(TabmapError::FileParse(
            "no columns to parse from file".into(),
        ));
    }

    for encoding in encodings {
        let (text, _, had_errors) = encoding.decode(content);
        if had_errors {
            debug!("{} decode failed, trying next encoding", encoding.name());
            continue;
        }

        match parse_csv_text(&text) {
            Ok(frame) => {
                debug!(
                    "decoded CSV as {} ({} data rows)",
                    encoding.name(),
                    frame.rows.len()
                );
                return Ok(frame);
            }
            Err(e) => {
                debug!("CSV parse under {} failed: {e}", encoding.name());
                continue;
            }
        }
    }

    Err(TabmapError::UnreadableFile {
        attempted: encodings.iter().map(|e| e.name().to_string()).collect(),
    })
}

/// Parse decoded CSV text into a frame.
///
/// Rows shorter than the header are padded with `None`; a row wider than
/// the header is a structural error.
fn parse_csv_text(text: &str) -> Result<TabularFrame, TabmapError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| TabmapError::FileParse(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| TabmapError::FileParse(e.to_string()))?;
        if record.len() > columns.len() {
            return Err(TabmapError::FileParse(format!(
                "row {} has {} fields, expected {}",
                idx + 2,
                record.len(),
                columns.len()
            )));
        }

        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect();
        row.resize(columns.len(), None);
        rows.push(row);
    }

    Ok(TabularFrame { columns, rows })
}
