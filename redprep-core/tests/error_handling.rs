use redprep_core::{ErrorExt, FormatError, PreprocessError};

#[test]
fn test_error_codes() {
    let format_error = PreprocessError::Format(FormatError::NotAnArray);
    assert_eq!(format_error.error_code(), "FORMAT");

    let empty_error = PreprocessError::EmptyDataset {
        operation: "dataset stats",
    };
    assert_eq!(empty_error.error_code(), "EMPTY_DATASET");

    let mismatch_error = PreprocessError::LengthMismatch {
        records: 3,
        cleaned: 2,
    };
    assert_eq!(mismatch_error.error_code(), "LENGTH_MISMATCH");

    let format_error = PreprocessError::UnsupportedFormat {
        extension: "parquet".to_string(),
    };
    assert_eq!(format_error.error_code(), "UNSUPPORTED_FORMAT");
}

#[test]
fn test_missing_field_carries_index() {
    let error = PreprocessError::Format(FormatError::MissingField {
        index: 2,
        field: "subreddit",
    });

    let message = error.to_string();
    assert!(message.contains("index 2"));
    assert!(message.contains("subreddit"));
}

#[test]
fn test_user_friendly_messages() {
    let error = PreprocessError::Format(FormatError::MissingField {
        index: 5,
        field: "title",
    });
    let message = error.user_friendly_message();
    assert!(!message.is_empty());
    assert!(message.contains("title"));

    let error = PreprocessError::UnsupportedFormat {
        extension: "parquet".to_string(),
    };
    let message = error.user_friendly_message();
    assert!(message.contains("parquet"));
    assert!(message.contains(".json"));
}

#[test]
fn test_length_mismatch_message() {
    let error = PreprocessError::LengthMismatch {
        records: 10,
        cleaned: 7,
    };
    let message = error.to_string();
    assert!(message.contains("10"));
    assert!(message.contains("7"));
}
