#[derive(Debug, thiserror::Error)]
pub enum TabmapError {
    #[error("invalid field mapping: {0}")]
    InvalidInput(String),

    #[error("unsupported file format: {extension}. Only .csv, .xlsx, and .xls are supported.")]
    UnsupportedFormat { extension: String },

    #[error("failed to decode CSV with encodings: {}", .attempted.join(", "))]
    UnreadableFile { attempted: Vec<String> },

    #[error("failed to parse file: {0}")]
    FileParse(String),

    #[error("missing columns in file: {}. Available: {}", .missing.join(", "), .available.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
