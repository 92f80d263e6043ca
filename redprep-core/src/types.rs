use serde::{Deserialize, Serialize};

/// One ingested Reddit post. Immutable once loaded; the loader guarantees
/// that `post_id`, `title`, `text` and `subreddit` are non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditRecord {
    pub post_id: String,
    pub title: String,
    pub text: String,
    pub subreddit: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_utc: Option<i64>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub num_comments: Option<i64>,
}

impl RedditRecord {
    /// Title and body joined with a single space. This is the input to
    /// cleaning and the text that URL/punctuation counts are measured
    /// against; it is recomputed per use and never stored.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.text)
    }
}

/// Lexical feature summary of one record, keyed by `post_id`.
///
/// `has_url`, `question_marks` and `exclamation_marks` are measured against
/// the raw combined text, not the cleaned text: cleaning strips URLs and
/// punctuation, which would make post-cleaning detection vacuous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub post_id: String,
    pub text_length: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_word_length: f64,
    pub has_url: bool,
    pub question_marks: usize,
    pub exclamation_marks: usize,
    pub subreddit: String,
    pub score: Option<i64>,
    pub num_comments: Option<i64>,
}

impl FeatureVector {
    /// Field names in declaration order; the CSV exporter's header row.
    pub const FIELD_NAMES: [&'static str; 11] = [
        "post_id",
        "text_length",
        "word_count",
        "sentence_count",
        "avg_word_length",
        "has_url",
        "question_marks",
        "exclamation_marks",
        "subreddit",
        "score",
        "num_comments",
    ];

    /// Values as CSV cells, aligned with `FIELD_NAMES`. Missing optional
    /// fields serialize as empty cells. No escaping is applied.
    pub fn csv_cells(&self) -> Vec<String> {
        vec![
            self.post_id.clone(),
            self.text_length.to_string(),
            self.word_count.to_string(),
            self.sentence_count.to_string(),
            self.avg_word_length.to_string(),
            self.has_url.to_string(),
            self.question_marks.to_string(),
            self.exclamation_marks.to_string(),
            self.subreddit.clone(),
            self.score.map(|s| s.to_string()).unwrap_or_default(),
            self.num_comments.map(|n| n.to_string()).unwrap_or_default(),
        ]
    }
}

/// Cleaning step toggles. Whitespace normalization is not listed because it
/// always runs, unconditionally, as the final step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    pub remove_urls: bool,
    pub remove_markdown: bool,
    pub remove_special_chars: bool,
    pub to_lowercase: bool,
    pub remove_mentions: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            remove_urls: true,
            remove_markdown: true,
            remove_special_chars: true,
            to_lowercase: true,
            remove_mentions: true,
        }
    }
}

/// Aggregate snapshot of a loaded batch, recomputed every run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_posts: usize,
    pub unique_subreddits: usize,
    /// Mean raw body length in characters, rounded to nearest integer.
    pub avg_text_length: i64,
}

/// Aggregate snapshot over extracted feature vectors.
///
/// `avg_question_marks` is kept at two-decimal precision as a plain number,
/// while the other averages stay integer-rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    pub avg_text_length: i64,
    pub avg_word_count: i64,
    pub avg_sentence_count: i64,
    pub posts_with_urls: usize,
    pub avg_question_marks: f64,
}

/// Record counts around the low-signal filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    pub original_count: usize,
    pub filtered_count: usize,
    pub removed_count: usize,
}

/// Stats bundle returned alongside the features of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub dataset: DatasetStats,
    pub features: FeatureStats,
    pub filter: FilterStats,
}
