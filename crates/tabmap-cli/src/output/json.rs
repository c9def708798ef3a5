use tabmap_core::error::TabmapError;
use tabmap_core::frame::TabularFrame;
use tabmap_core::project::ExtractOutput;

pub fn print(output: &ExtractOutput) -> Result<(), TabmapError> {
    let json = serde_json::to_string_pretty(output)?;
    println!("{json}");
    Ok(())
}

pub fn print_columns(frame: &TabularFrame) -> Result<(), TabmapError> {
    let json = serde_json::to_string_pretty(&serde_json::json!({
        "columns": frame.columns,
        "rows": frame.rows.len(),
    }))?;
    println!("{json}");
    Ok(())
}
