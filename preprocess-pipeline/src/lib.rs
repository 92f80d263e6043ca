use std::path::Path;

use redprep_core::{
    CleanOptions, FeatureVector, FilterStats, PreprocessError, RunStats,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};


/// Minimum word count a record needs to survive the low-signal filter.
pub const MIN_WORD_COUNT: usize = 3;

/// Features plus the stats bundle of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub features: Vec<FeatureVector>,
    pub stats: RunStats,
}

/// Batch preprocessing pipeline: load, clean, extract, filter. Holds only
/// the cleaning configuration; no state survives a run.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: CleanOptions,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            options: CleanOptions::default(),
        }
    }

    pub fn with_options(options: CleanOptions) -> Self {
        Self { options }
    }

    /// Run the full pipeline over one dataset file. Any failure aborts the
    /// whole batch; there is no partial output.
    pub async fn run(&self, path: impl AsRef<Path>) -> Result<PipelineOutput, PreprocessError> {
        let records = dataset_loader::load_path(path).await?;
        let dataset = dataset_loader::dataset_stats(&records)?;

        let combined: Vec<String> = records
            .iter()
            .map(|record| record.combined_text())
            .collect();
        let cleaned = text_cleaner::clean_batch(&combined, &self.options);
        debug!("Cleaned {} combined texts", cleaned.len());

        let extracted = feature_extractor::extract_batch(&records, &cleaned)?;

        let original_count = extracted.len();
        let features: Vec<FeatureVector> = extracted
            .into_iter()
            .filter(|f| f.word_count >= MIN_WORD_COUNT)
            .collect();
        let filter = FilterStats {
            original_count,
            filtered_count: features.len(),
            removed_count: original_count - features.len(),
        };
        info!(
            "Filtered {} low-signal records, {} remain",
            filter.removed_count, filter.filtered_count
        );

        let feature_summary = feature_extractor::feature_stats(&features)?;

        Ok(PipelineOutput {
            features,
            stats: RunStats {
                dataset,
                features: feature_summary,
                filter,
            },
        })
    }

    /// Run the pipeline and write the surviving features to `output`,
    /// picking the export format from the output path's extension.
    pub async fn run_to_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<PipelineOutput, PreprocessError> {
        let outcome = self.run(input).await?;

        let output = output.as_ref();
        let extension = output
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let serialized = match extension.as_str() {
            "json" => export_json(&outcome.features)?,
            "csv" => export_csv(&outcome.features),
            _ => return Err(PreprocessError::UnsupportedFormat { extension }),
        };

        tokio::fs::write(output, serialized).await?;
        info!(
            "Wrote {} feature vectors to {}",
            outcome.features.len(),
            output.display()
        );
        Ok(outcome)
    }
}

/// Pretty-printed JSON array of feature vectors.
pub fn export_json(features: &[FeatureVector]) -> Result<String, PreprocessError> {
    Ok(serde_json::to_string_pretty(features)?)
}

/// CSV export: header row from the feature vector's field names, one
/// comma-joined row per vector. Values are not escaped, so embedded commas
/// in `post_id` or `subreddit` would corrupt the output the same way they
/// corrupt loading. Limitation symmetric with the loader.
pub fn export_csv(features: &[FeatureVector]) -> String {
    let mut out = FeatureVector::FIELD_NAMES.join(",");
    out.push('\n');
    for feature in features {
        out.push_str(&feature.csv_cells().join(","));
        out.push('\n');
    }
    out
}
