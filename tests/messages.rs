//! 메시지 카탈로그 로드/검증 테스트.
use std::io::Write;

use mortgage_calculator::messages::{
    keys, resolve_language, CatalogError, Language, MessageCatalog, MessageProvider,
};

fn full_catalog(language: &str) -> String {
    let mut src = format!("[meta]\nlanguage = \"{language}\"\n\n[messages]\n");
    for key in keys::REQUIRED {
        src.push_str(&format!("{key} = \"custom {key}\"\n"));
    }
    src
}

#[test]
fn built_in_packs_cover_every_key() {
    for lang in [Language::En, Language::Ko] {
        let catalog = MessageCatalog::built_in(lang).expect("built-in pack");
        assert_eq!(catalog.language(), lang.as_code());
        for key in keys::REQUIRED {
            assert!(!catalog.lookup(key).is_empty(), "{key} in {lang:?}");
        }
    }
}

#[test]
fn external_file_replaces_built_in_messages() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(full_catalog("en").as_bytes()).expect("write");

    let catalog = MessageCatalog::load("ko", Some(file.path())).expect("load");
    assert_eq!(catalog.lookup(keys::WELCOME), "custom welcome");
    assert_eq!(catalog.lookup(keys::FINISHED), "custom finished");
}

#[test]
fn missing_key_is_fatal() {
    let src = full_catalog("en").replace("run_again = \"custom run_again\"\n", "");
    let err = MessageCatalog::from_toml_str(&src).expect_err("missing key");
    assert!(matches!(err, CatalogError::MissingKey("run_again")), "{err}");
}

#[test]
fn blank_message_counts_as_missing() {
    let src = full_catalog("en").replace("\"custom result\"", "\"  \"");
    let err = MessageCatalog::from_toml_str(&src).expect_err("blank message");
    assert!(matches!(err, CatalogError::MissingKey("result")));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = MessageCatalog::from_toml_str("[messages\nwelcome = ").expect_err("parse");
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = MessageCatalog::from_file(&path).expect_err("io");
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn unknown_keys_fall_back_to_marker() {
    let catalog = MessageCatalog::built_in(Language::En).expect("pack");
    assert_eq!(catalog.lookup("no_such_key"), "[missing message]");
}

#[test]
fn explicit_language_wins() {
    assert_eq!(resolve_language(Some("ko-KR")), "ko");
    assert_eq!(resolve_language(Some("EN_us")), "en");
    assert_eq!(Language::from_code("de"), Language::En);
    assert_eq!(Language::from_code("ko"), Language::Ko);
}
