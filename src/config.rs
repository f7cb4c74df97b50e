use std::path::PathBuf;

use clap::Parser;

use crate::messages;

/// 명령행 인자. 각 옵션은 환경 변수로도 지정할 수 있다.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Mortgage / car loan monthly payment calculator", long_about = None)]
pub struct Cli {
    /// Message language (en, ko, auto)
    #[arg(long, short = 'L', env = "MORTGAGE_CALC_LANG")]
    pub lang: Option<String>,

    /// External TOML message catalog to use instead of the built-in packs
    #[arg(long, env = "MORTGAGE_CALC_MESSAGES")]
    pub messages: Option<PathBuf>,

    /// Clear the screen after every answer (only when stdout is a terminal)
    #[arg(long)]
    pub clear: bool,
}

/// 실행 설정. 설정 파일 없이 명령행/환경 변수에서만 결정된다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 해석이 끝난 언어 코드 (en/ko)
    pub language: String,
    /// 외부 메시지 카탈로그 경로
    pub messages_path: Option<PathBuf>,
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            messages_path: None,
            clear_screen: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            language: messages::resolve_language(cli.lang.as_deref()),
            messages_path: cli.messages,
            clear_screen: cli.clear,
        }
    }
}
