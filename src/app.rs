use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::console::Console;
use crate::messages::{CatalogError, MessageCatalog};
use crate::session::{self, SessionError, SessionSummary};

/// 애플리케이션 실행 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum AppError {
    /// 메시지 카탈로그를 불러오지 못함 (시작 단계에서 치명적)
    #[error("message catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// 대화 세션 오류
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

/// 설정에 맞는 메시지 카탈로그를 로드한다.
pub fn load_messages(config: &Config) -> Result<MessageCatalog, AppError> {
    Ok(MessageCatalog::load(
        &config.language,
        config.messages_path.as_deref(),
    )?)
}

/// 표준 입출력으로 계산기를 실행한다.
pub fn run(config: &Config) -> Result<SessionSummary, AppError> {
    let messages = load_messages(config)?;
    let mut console = Console::stdio(config.clear_screen);
    run_with(&mut console, &messages)
}

/// 주어진 콘솔과 카탈로그로 계산기를 실행한다.
pub fn run_with<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    messages: &MessageCatalog,
) -> Result<SessionSummary, AppError> {
    info!(language = messages.language(), "starting calculator");
    Ok(session::run(console, messages)?)
}
