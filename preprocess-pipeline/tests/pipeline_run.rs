use std::io::Write;

use preprocess_pipeline::{Pipeline, MIN_WORD_COUNT};
use redprep_core::{FormatError, PreprocessError};

fn dataset_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("failed to create temp dataset");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp dataset");
    file
}

const JSON_DATASET: &str = r#"[
    {
        "post_id": "long1",
        "title": "Check **this** out",
        "text": "u/alice r/funny http://x.co !!",
        "subreddit": "funny",
        "score": 12,
        "num_comments": 4
    },
    {
        "post_id": "short1",
        "title": "ok",
        "text": "http://gone.example",
        "subreddit": "askreddit"
    },
    {
        "post_id": "long2",
        "title": "A question",
        "text": "Does anyone else see this? I do.",
        "subreddit": "funny",
        "score": 3
    }
]"#;

#[tokio::test]
async fn test_run_filters_low_signal_records() {
    let file = dataset_file(".json", JSON_DATASET);
    let output = Pipeline::new().run(file.path()).await.unwrap();

    // "short1" cleans down to "ok" (word_count 1) and is filtered out.
    assert_eq!(output.stats.filter.original_count, 3);
    assert_eq!(output.stats.filter.filtered_count, 2);
    assert_eq!(output.stats.filter.removed_count, 1);
    assert!(output.features.iter().all(|f| f.post_id != "short1"));
    assert!(output.features.iter().all(|f| f.word_count >= MIN_WORD_COUNT));
}

#[tokio::test]
async fn test_run_feature_values() {
    let file = dataset_file(".json", JSON_DATASET);
    let output = Pipeline::new().run(file.path()).await.unwrap();

    let first = output
        .features
        .iter()
        .find(|f| f.post_id == "long1")
        .expect("long1 must survive filtering");

    // Combined text "Check **this** out u/alice r/funny http://x.co !!"
    // cleans to "check this out !!".
    assert_eq!(first.word_count, 4);
    assert!(first.has_url);
    assert_eq!(first.exclamation_marks, 2);
    assert_eq!(first.subreddit, "funny");
    assert_eq!(first.score, Some(12));
    assert_eq!(first.num_comments, Some(4));
}

#[tokio::test]
async fn test_run_stats_bundle() {
    let file = dataset_file(".json", JSON_DATASET);
    let output = Pipeline::new().run(file.path()).await.unwrap();

    // Dataset stats cover every loaded record, pre-filter.
    assert_eq!(output.stats.dataset.total_posts, 3);
    assert_eq!(output.stats.dataset.unique_subreddits, 2);

    // Feature stats cover only the surviving records.
    assert_eq!(output.stats.features.posts_with_urls, 1);
}

#[tokio::test]
async fn test_run_csv_dataset() {
    let file = dataset_file(
        ".csv",
        "post_id,title,text,subreddit\n\
         c1,Some title here,and a body with words,rust\n",
    );
    let output = Pipeline::new().run(file.path()).await.unwrap();
    assert_eq!(output.features.len(), 1);
    assert_eq!(output.features[0].post_id, "c1");
}

#[tokio::test]
async fn test_run_fails_when_every_record_is_filtered() {
    // Both records clean down to fewer than three words, so nothing
    // survives the filter and feature stats have no input. The run fails
    // as a whole rather than returning an empty batch.
    let file = dataset_file(
        ".json",
        r#"[
            {"post_id": "s1", "title": "ok", "text": "http://gone.example", "subreddit": "a"},
            {"post_id": "s2", "title": "hi", "text": "there", "subreddit": "b"}
        ]"#,
    );

    let result = Pipeline::new().run(file.path()).await;
    assert!(matches!(result, Err(PreprocessError::EmptyDataset { .. })));
}

#[tokio::test]
async fn test_run_rejects_unknown_extension() {
    let file = dataset_file(".parquet", "whatever");
    let result = Pipeline::new().run(file.path()).await;
    assert!(matches!(
        result,
        Err(PreprocessError::UnsupportedFormat { .. })
    ));
}

#[tokio::test]
async fn test_run_fails_fast_on_malformed_record() {
    let file = dataset_file(
        ".json",
        r#"[{"post_id": "a", "title": "t", "text": "missing subreddit"}]"#,
    );
    let result = Pipeline::new().run(file.path()).await;
    assert!(matches!(
        result,
        Err(PreprocessError::Format(FormatError::MissingField {
            index: 0,
            field: "subreddit"
        }))
    ));
}

#[tokio::test]
async fn test_run_to_file_json_round_trips() {
    let input = dataset_file(".json", JSON_DATASET);
    let output_path = std::env::temp_dir().join(format!(
        "redprep_test_{}.json",
        std::process::id()
    ));

    let outcome = Pipeline::new()
        .run_to_file(input.path(), &output_path)
        .await
        .unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    let parsed: Vec<redprep_core::FeatureVector> = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, outcome.features);

    std::fs::remove_file(&output_path).ok();
}

#[tokio::test]
async fn test_run_to_file_rejects_unknown_output_extension() {
    let input = dataset_file(".json", JSON_DATASET);
    let result = Pipeline::new()
        .run_to_file(input.path(), "features.xml")
        .await;
    match result {
        Err(PreprocessError::UnsupportedFormat { extension }) => {
            assert_eq!(extension, "xml")
        }
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}
