//! 대출 계산 핵심 로직을 라이브러리로 분리하여 콘솔 외의 입출력에서도 재사용한다.

pub mod app;
pub mod config;
pub mod console;
pub mod loan;
pub mod messages;
pub mod prompt;
pub mod session;
pub mod validation;
