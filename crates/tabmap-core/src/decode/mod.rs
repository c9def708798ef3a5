pub mod csv;
pub mod spreadsheet;

use encoding_rs::{Encoding, UTF_8};

use crate::error::TabmapError;
use crate::frame::TabularFrame;
use crate::ExtractOptions;

/// Decode raw file bytes into a [`TabularFrame`], dispatching on the file
/// extension (matched case-insensitively).
///
/// `.csv` goes through the encoding-fallback text path; `.xlsx` and `.xls`
/// are handed to the spreadsheet reader. Anything else is rejected.
pub fn decode_file(
    content: &[u8],
    extension: &str,
    options: &ExtractOptions,
) -> Result<TabularFrame, TabmapError> {
    match extension.to_lowercase().as_str() {
        ".csv" => {
            let candidates: [&'static Encoding; 2] = [UTF_8, options.fallback_encoding];
            csv::read_csv_with_encodings(content, &candidates)
        }
        ".xlsx" | ".xls" => spreadsheet::read_spreadsheet(content),
        _ => Err(TabmapError::UnsupportedFormat {
            extension: extension.to_string(),
        }),
    }
}
