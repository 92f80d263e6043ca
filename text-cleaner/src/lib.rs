use std::sync::LazyLock;

use redprep_core::CleanOptions;
use regex::Regex;


static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid URL pattern"));
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("valid italic pattern"));
static STRIKETHROUGH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.*?)~~").expect("valid strikethrough pattern"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("valid link pattern"));
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+\s*").expect("valid header pattern"));
static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>\s*").expect("valid quote pattern"));
static USER_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bu/[A-Za-z0-9_-]+").expect("valid user mention pattern"));
static SUBREDDIT_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\br/[A-Za-z0-9_-]+").expect("valid subreddit mention pattern"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Strip http/https URL tokens.
pub fn remove_urls(text: &str) -> String {
    URL_RE.replace_all(text, "").into_owned()
}

/// Unwrap bold/italic/strikethrough/link markup and strip line-anchored
/// header and quote markers. Single-pass non-greedy matching; nested markup
/// is not guaranteed to come out clean. Known limitation.
pub fn remove_markdown(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    let text = STRIKETHROUGH_RE.replace_all(&text, "$1");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = HEADER_RE.replace_all(&text, "");
    QUOTE_RE.replace_all(&text, "").into_owned()
}

/// Strip `u/<name>` tokens.
pub fn remove_user_mentions(text: &str) -> String {
    USER_MENTION_RE.replace_all(text, "").into_owned()
}

/// Strip `r/<name>` tokens.
pub fn remove_subreddit_mentions(text: &str) -> String {
    SUBREDDIT_MENTION_RE.replace_all(text, "").into_owned()
}

/// Keep ASCII alphanumerics, whitespace and the punctuation set
/// `. , ! ? ; : ' -`; drop everything else. The word class is ASCII-only,
/// so non-Latin script content is stripped.
pub fn remove_special_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || c.is_whitespace()
                || matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '-')
        })
        .collect()
}

pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Collapse whitespace runs to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Apply the cleaning steps in their fixed order: URLs, markdown, user
/// mentions, subreddit mentions, special characters, lowercase, whitespace
/// normalization. Each step except the last is gated by its option flag;
/// whitespace normalization always runs, regardless of configuration.
pub fn clean_text(text: &str, options: &CleanOptions) -> String {
    let mut text = text.to_string();

    if options.remove_urls {
        text = remove_urls(&text);
    }
    if options.remove_markdown {
        text = remove_markdown(&text);
    }
    if options.remove_mentions {
        text = remove_user_mentions(&text);
        text = remove_subreddit_mentions(&text);
    }
    if options.remove_special_chars {
        text = remove_special_chars(&text);
    }
    if options.to_lowercase {
        text = to_lowercase(&text);
    }

    normalize_whitespace(&text)
}

/// Clean a batch of texts, preserving order.
pub fn clean_batch(texts: &[String], options: &CleanOptions) -> Vec<String> {
    texts.iter().map(|text| clean_text(text, options)).collect()
}
