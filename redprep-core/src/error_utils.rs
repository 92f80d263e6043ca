use crate::error::*;
use tracing::error;

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn error_code(&self) -> &'static str;
    fn user_friendly_message(&self) -> String;
}

impl ErrorExt for PreprocessError {
    fn log_error(&self) -> &Self {
        error!("PreprocessError: {}", self);
        if let PreprocessError::Format(e) = self {
            error!("Format error details: {:?}", e);
        }
        self
    }

    fn error_code(&self) -> &'static str {
        match self {
            PreprocessError::Format(_) => "FORMAT",
            PreprocessError::EmptyDataset { .. } => "EMPTY_DATASET",
            PreprocessError::LengthMismatch { .. } => "LENGTH_MISMATCH",
            PreprocessError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            PreprocessError::Io(_) => "IO",
            PreprocessError::Serialization(_) => "SERIALIZATION",
        }
    }

    fn user_friendly_message(&self) -> String {
        match self {
            PreprocessError::Format(FormatError::NotAnArray) => {
                "The dataset file must contain a JSON array of post records.".to_string()
            }
            PreprocessError::Format(FormatError::MissingField { index, field }) => {
                format!(
                    "Record {} is missing the required '{}' field. Every post needs post_id, title, text and subreddit.",
                    index, field
                )
            }
            PreprocessError::Format(FormatError::EmptyCsv) => {
                "The CSV file is empty; the first line must name the columns.".to_string()
            }
            PreprocessError::Format(FormatError::Json(_)) => {
                "The dataset file is not valid JSON.".to_string()
            }
            PreprocessError::EmptyDataset { operation } => {
                format!("Cannot compute {} without any records.", operation)
            }
            PreprocessError::LengthMismatch { records, cleaned } => {
                format!(
                    "Got {} records but {} cleaned texts; the inputs must line up one-to-one.",
                    records, cleaned
                )
            }
            PreprocessError::UnsupportedFormat { extension } => {
                format!(
                    "'{}' datasets are not supported. Use a .json or .csv file.",
                    extension
                )
            }
            PreprocessError::Io(_) => "Could not read the dataset file.".to_string(),
            PreprocessError::Serialization(_) => {
                "Failed to serialize the extracted features.".to_string()
            }
        }
    }
}
