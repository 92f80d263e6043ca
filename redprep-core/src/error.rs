use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("Dataset format error: {0}")]
    Format(#[from] FormatError),

    #[error("Cannot compute {operation} over an empty dataset")]
    EmptyDataset { operation: &'static str },

    #[error("Batch length mismatch: {records} records but {cleaned} cleaned texts")]
    LengthMismatch { records: usize, cleaned: usize },

    #[error("Unsupported dataset format: '{extension}'")]
    UnsupportedFormat { extension: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Expected a JSON array of post records")]
    NotAnArray,

    #[error("Record at index {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("CSV source has no header line")]
    EmptyCsv,

    #[error("JSON parse error: {0}")]
    Json(#[source] serde_json::Error),
}
