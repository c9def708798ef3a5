pub mod decode;
pub mod error;
pub mod frame;
pub mod mapping;
pub mod project;

use encoding_rs::Encoding;

use error::TabmapError;
use project::Record;

/// Knobs for a single extraction call.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Encoding tried for CSV content after UTF-8 fails. Defaults to GBK,
    /// matching the legacy exports this tool most often sees; pass any
    /// other `encoding_rs` encoding for a different locale.
    pub fallback_encoding: &'static Encoding,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            fallback_encoding: encoding_rs::GBK,
        }
    }
}

/// Main API entry point: extract field-mapped records from a tabular file.
///
/// Runs the full pipeline: parse and validate the `table_fields` JSON spec,
/// decode the file bytes into a frame, canonicalize the column names, then
/// project the mapped columns into one record per row.
///
/// `content` is only borrowed for the duration of the call; nothing is
/// retained between invocations.
pub fn extract_records(
    content: &[u8],
    extension: &str,
    table_fields: &str,
    options: &ExtractOptions,
) -> Result<Vec<Record>, TabmapError> {
    let field_mapping = mapping::parse_field_mapping(table_fields)?;
    let frame = decode::decode_file(content, extension, options)?;
    let frame = frame.normalize_columns();
    project::project(&frame, &field_mapping)
}
