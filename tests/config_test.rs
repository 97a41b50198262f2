mod common;

use std::io::Write;

use common::*;
use tempfile::NamedTempFile;
use yomi::analysis::morphology::{DictionaryKind, SegmentMode};
use yomi::analysis::tokenizer::japanese::JapaneseTokenizer;
use yomi::config::JapaneseTokenizerConfig;
use yomi::error::YomiError;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_file() {
    let file = write_temp(
        r#"{
            "dict": "uni",
            "mode": "normal",
            "base_form": true,
            "stop_tags": true,
            "sentence": {"max_rune_len": 0, "double_line_feed_split": false}
        }"#,
    );

    let config = JapaneseTokenizerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.dict, Some(DictionaryKind::Unidic));
    assert_eq!(config.mode, SegmentMode::Normal);
    assert_eq!(config.sentence.max_rune_len, 0);
    assert!(!config.sentence.double_line_feed_split);
    assert!(!config.sentence.delimiters.is_empty());

    let filters = config.filters().unwrap();
    assert_eq!(filters.name(), "drop+rewrite");
}

#[test]
fn test_stop_tags_file() {
    let table = write_temp("# nouns only\n名詞-代名詞\n\n名詞-一般\n");
    let config = JapaneseTokenizerConfig {
        stop_tags: true,
        stop_tags_file: Some(table.path().to_path_buf()),
        ..Default::default()
    };

    let tokens = tokenizer(&config).tokenize_str(MY_CAT).unwrap();
    let terms: Vec<_> = tokens.iter().map(|t| (t.text.as_str(), t.position)).collect();
    assert_eq!(terms, vec![("は", 2), ("の", 4)]);
}

#[test]
fn test_invalid_stop_tags_file_names_the_line() {
    let table = write_temp("名詞\n名詞--一般\n");
    let config = JapaneseTokenizerConfig {
        stop_tags: true,
        stop_tags_file: Some(table.path().to_path_buf()),
        ..Default::default()
    };

    let err = config.filters().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_base_form_tags() {
    let config = JapaneseTokenizerConfig {
        base_form: true,
        base_form_tags: Some(vec!["助動詞".to_string()]),
        stop_tags: true,
        ..Default::default()
    };
    let tokenizer = tokenizer(&config);

    // Auxiliaries are dropped before they could be rewritten, and verbs are
    // no longer rewritten.
    let tokens = tokenizer.tokenize_str(EEL).unwrap();
    let terms: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(terms, vec!["私", "鰻", "食べ", "猫", "見"]);
}

#[test]
fn test_missing_dict_is_rejected() {
    let config = JapaneseTokenizerConfig::from_json(r#"{"base_form": true}"#).unwrap();

    let err = JapaneseTokenizer::from_config(&config).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("dict"));
}

#[test]
fn test_unknown_dict_is_rejected() {
    let err = JapaneseTokenizerConfig::from_json(r#"{"dict": "jumandic"}"#).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_unknown_option_is_rejected() {
    let err = JapaneseTokenizerConfig::from_json(r#"{"dict": "ipa", "stop_words": true}"#)
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_missing_file() {
    let err = JapaneseTokenizerConfig::from_file("/nonexistent/yomi.json").unwrap_err();
    assert!(matches!(err, YomiError::Io(_)));
}

#[cfg(not(feature = "lindera"))]
#[test]
fn test_dictionary_requires_feature() {
    let config = JapaneseTokenizerConfig::new(DictionaryKind::Ipadic);
    let err = JapaneseTokenizer::from_config(&config).unwrap_err();
    assert!(err.is_configuration());
}
