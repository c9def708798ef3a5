use std::path::PathBuf;

use tabmap_core::error::TabmapError;
use tabmap_core::project::ExtractOutput;

use crate::commands::{file_extension, options_for};
use crate::output;

pub fn run(
    input_file: PathBuf,
    fields: Option<String>,
    fields_file: Option<PathBuf>,
    output_format: &str,
    output_file: Option<PathBuf>,
    fallback_encoding: &str,
) -> Result<(), TabmapError> {
    let options = options_for(fallback_encoding)?;

    let table_fields = match (fields, fields_file) {
        (Some(spec), _) => spec,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            return Err(TabmapError::InvalidInput(
                "no field mapping given (use --fields or --fields-file)".into(),
            ))
        }
    };

    let content = std::fs::read(&input_file)?;
    let extension = file_extension(&input_file);
    let records = tabmap_core::extract_records(&content, &extension, &table_fields, &options)?;
    let result = ExtractOutput { result: records };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} record(s), written to {}",
                result.result.len(),
                path.display()
            );
        }
        None => match output_format {
            "table" => output::table::print_records(&result.result),
            _ => output::json::print(&result)?,
        },
    }

    Ok(())
}
