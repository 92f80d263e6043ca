use std::sync::LazyLock;

use redprep_core::{FeatureStats, FeatureVector, PreprocessError, RedditRecord};
use regex::Regex;
use tracing::debug;


static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid URL pattern"));

/// Compute the feature vector for one record.
///
/// Lexical counts come from `cleaned_text`; `has_url` and the punctuation
/// counts come from the record's raw combined text, since cleaning strips
/// exactly the URLs and punctuation they measure.
pub fn extract_features(record: &RedditRecord, cleaned_text: &str) -> FeatureVector {
    let raw_combined = record.combined_text();

    let word_count = cleaned_text.split_whitespace().count();
    let avg_word_length = if word_count == 0 {
        // Explicit guard: an empty text has an average word length of zero,
        // never NaN.
        0.0
    } else {
        let total_chars: usize = cleaned_text
            .split_whitespace()
            .map(|word| word.chars().count())
            .sum();
        total_chars as f64 / word_count as f64
    };

    let sentence_count = cleaned_text
        .split(['.', '!', '?'])
        .filter(|segment| !segment.is_empty())
        .count();

    FeatureVector {
        post_id: record.post_id.clone(),
        text_length: cleaned_text.chars().count(),
        word_count,
        sentence_count,
        avg_word_length,
        has_url: URL_RE.is_match(&raw_combined),
        question_marks: raw_combined.matches('?').count(),
        exclamation_marks: raw_combined.matches('!').count(),
        subreddit: record.subreddit.clone(),
        score: record.score,
        num_comments: record.num_comments,
    }
}

/// Extract features for a whole batch. The cleaned texts must line up
/// one-to-one with the records; output order mirrors input order.
pub fn extract_batch(
    records: &[RedditRecord],
    cleaned_texts: &[String],
) -> Result<Vec<FeatureVector>, PreprocessError> {
    if records.len() != cleaned_texts.len() {
        return Err(PreprocessError::LengthMismatch {
            records: records.len(),
            cleaned: cleaned_texts.len(),
        });
    }

    let features: Vec<FeatureVector> = records
        .iter()
        .zip(cleaned_texts)
        .map(|(record, cleaned)| extract_features(record, cleaned))
        .collect();

    debug!("Extracted {} feature vectors", features.len());
    Ok(features)
}

/// Aggregate snapshot over a batch of feature vectors.
pub fn feature_stats(features: &[FeatureVector]) -> Result<FeatureStats, PreprocessError> {
    if features.is_empty() {
        return Err(PreprocessError::EmptyDataset {
            operation: "feature stats",
        });
    }

    let count = features.len() as f64;
    let mean = |total: usize| (total as f64 / count).round() as i64;

    let avg_question_marks =
        features.iter().map(|f| f.question_marks).sum::<usize>() as f64 / count;

    Ok(FeatureStats {
        avg_text_length: mean(features.iter().map(|f| f.text_length).sum()),
        avg_word_count: mean(features.iter().map(|f| f.word_count).sum()),
        avg_sentence_count: mean(features.iter().map(|f| f.sentence_count).sum()),
        posts_with_urls: features.iter().filter(|f| f.has_url).count(),
        // Two-decimal precision, kept as a number rather than a formatted
        // string.
        avg_question_marks: (avg_question_marks * 100.0).round() / 100.0,
    })
}
