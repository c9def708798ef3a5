pub mod columns;
pub mod extract;

use std::ffi::OsStr;
use std::path::Path;

use encoding_rs::Encoding;
use tabmap_core::error::TabmapError;
use tabmap_core::ExtractOptions;

/// Build extraction options from a CLI encoding label (e.g. "gbk").
pub fn options_for(fallback_label: &str) -> Result<ExtractOptions, TabmapError> {
    let encoding = Encoding::for_label(fallback_label.as_bytes()).ok_or_else(|| {
        TabmapError::InvalidInput(format!("unknown encoding label '{fallback_label}'"))
    })?;
    Ok(ExtractOptions {
        fallback_encoding: encoding,
    })
}

/// Dotted extension of `path` (".csv"), or empty if the path has none.
/// Case is preserved; the decoder matches extensions case-insensitively
/// and rejects the empty string as unsupported.
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
