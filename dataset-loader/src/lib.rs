use std::collections::HashSet;
use std::path::Path;

use redprep_core::{DatasetStats, FormatError, PreprocessError, RedditRecord};
use serde_json::Value;
use tracing::{debug, info};


/// Fields every record must carry with a non-empty value.
const REQUIRED_FIELDS: [&str; 4] = ["post_id", "title", "text", "subreddit"];

/// Read a dataset file and dispatch on its extension: `.json` and `.csv`
/// are supported, anything else fails with `UnsupportedFormat` before any
/// IO happens.
pub async fn load_path(path: impl AsRef<Path>) -> Result<Vec<RedditRecord>, PreprocessError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if extension != "json" && extension != "csv" {
        return Err(PreprocessError::UnsupportedFormat { extension });
    }

    debug!("Reading dataset file {}", path.display());
    let source = tokio::fs::read_to_string(path).await?;

    let records = if extension == "json" {
        load_json(&source)?
    } else {
        load_csv(&source)?
    };

    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a JSON array of post objects into validated records.
pub fn load_json(source: &str) -> Result<Vec<RedditRecord>, PreprocessError> {
    let parsed: Value = serde_json::from_str(source).map_err(FormatError::Json)?;
    let items = parsed.as_array().ok_or(FormatError::NotAnArray)?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        records.push(record_from_value(index, item)?);
    }
    Ok(records)
}

/// Parse CSV by literal comma-splitting: the first line names the columns,
/// every following non-blank line is split positionally and zipped with the
/// header. There is no quoting or escaping support, so fields containing
/// commas or embedded newlines corrupt column alignment. Known limitation.
pub fn load_csv(source: &str) -> Result<Vec<RedditRecord>, PreprocessError> {
    let mut lines = source.lines();
    let header_line = lines.next().ok_or(FormatError::EmptyCsv)?;
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let mut records = Vec::new();
    let mut index = 0usize;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        // Extra cells beyond the header are dropped; missing cells leave the
        // column absent and surface through required-field validation.
        let mut row = serde_json::Map::new();
        for (header, cell) in headers.iter().zip(line.split(',')) {
            row.insert((*header).to_string(), Value::String(cell.to_string()));
        }

        records.push(record_from_value(index, &Value::Object(row))?);
        index += 1;
    }
    Ok(records)
}

/// Aggregate snapshot of a loaded batch.
pub fn dataset_stats(records: &[RedditRecord]) -> Result<DatasetStats, PreprocessError> {
    if records.is_empty() {
        return Err(PreprocessError::EmptyDataset {
            operation: "dataset stats",
        });
    }

    let unique_subreddits = records
        .iter()
        .map(|record| record.subreddit.as_str())
        .collect::<HashSet<_>>()
        .len();

    let total_length: usize = records
        .iter()
        .map(|record| record.text.chars().count())
        .sum();
    let avg_text_length = (total_length as f64 / records.len() as f64).round() as i64;

    Ok(DatasetStats {
        total_posts: records.len(),
        unique_subreddits,
        avg_text_length,
    })
}

/// Build one record from a JSON-shaped row, validating required fields.
/// Columns outside the known schema are ignored.
fn record_from_value(index: usize, value: &Value) -> Result<RedditRecord, PreprocessError> {
    for field in REQUIRED_FIELDS {
        if !has_usable_value(value, field) {
            return Err(FormatError::MissingField { index, field }.into());
        }
    }

    Ok(RedditRecord {
        post_id: text_field(value, "post_id"),
        title: text_field(value, "title"),
        text: text_field(value, "text"),
        subreddit: text_field(value, "subreddit"),
        author: match value.get("author") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        },
        created_utc: number_field(value, "created_utc"),
        score: number_field(value, "score"),
        num_comments: number_field(value, "num_comments"),
    })
}

/// Required fields accept non-empty strings or plain numbers.
fn has_usable_value(value: &Value, field: &str) -> bool {
    match value.get(field) {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(_)) => true,
        _ => false,
    }
}

fn text_field(value: &Value, field: &str) -> String {
    match value.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Optional numeric field; CSV cells arrive as strings and are parsed.
fn number_field(value: &Value, field: &str) -> Option<i64> {
    match value.get(field) {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}
