use std::path::PathBuf;

use tabmap_core::decode;
use tabmap_core::error::TabmapError;

use crate::commands::{file_extension, options_for};
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    fallback_encoding: &str,
) -> Result<(), TabmapError> {
    let options = options_for(fallback_encoding)?;
    let content = std::fs::read(&input_file)?;
    let extension = file_extension(&input_file);

    let frame = decode::decode_file(&content, &extension, &options)?.normalize_columns();

    match output_format {
        "json" => output::json::print_columns(&frame)?,
        _ => {
            for name in &frame.columns {
                println!("{name}");
            }
            eprintln!(
                "{} column(s), {} data row(s)",
                frame.columns.len(),
                frame.rows.len()
            );
        }
    }

    Ok(())
}
