//! 명령행 인자 → 실행 설정 변환 테스트.
use std::path::PathBuf;

use clap::Parser;
use mortgage_calculator::app;
use mortgage_calculator::config::{Cli, Config};
use mortgage_calculator::messages::MessageProvider;

#[test]
fn flags_map_to_config() {
    let cli = Cli::try_parse_from([
        "mortgage_calculator",
        "--lang",
        "ko-KR",
        "--messages",
        "custom.toml",
        "--clear",
    ])
    .expect("parse");
    let cfg = Config::from(cli);
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.messages_path, Some(PathBuf::from("custom.toml")));
    assert!(cfg.clear_screen);
}

#[test]
fn default_config_loads_english_pack() {
    let cfg = Config::default();
    let messages = app::load_messages(&cfg).expect("messages");
    assert_eq!(messages.language(), "en");
    assert!(messages.lookup("welcome").starts_with("Welcome"));
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["mortgage_calculator", "--years", "30"]).is_err());
}
