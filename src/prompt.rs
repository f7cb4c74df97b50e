//! 안내 → 입력 → 검증 → 재입력 요청을 반복하는 공용 입력 루틴.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::Console;
use crate::messages::{keys, MessageProvider};
use crate::session::SessionError;
use crate::validation;

/// 다시 계산할지 여부.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationChoice {
    Continue,
    Stop,
}

/// `prompt_key` 문구를 한 번 출력한 뒤, `accept`가 값을 돌려줄 때까지 읽기를 반복한다.
/// 거부될 때마다 `invalid_key` 문구를 출력한다. 재시도 횟수 제한은 없다.
pub fn prompt_until<R, W, M, T, F>(
    console: &mut Console<R, W>,
    messages: &M,
    prompt_key: &str,
    invalid_key: &str,
    mut accept: F,
) -> Result<T, SessionError>
where
    R: BufRead,
    W: Write,
    M: MessageProvider + ?Sized,
    F: FnMut(&str) -> Option<T>,
{
    console.prompt(messages.lookup(prompt_key))?;
    loop {
        let line = console.read_line()?.ok_or(SessionError::InputClosed)?;
        if let Some(value) = accept(&line) {
            return Ok(value);
        }
        debug!(field = prompt_key, input = %line, "rejected input");
        console.prompt(messages.lookup(invalid_key))?;
    }
}

/// 숫자 입력 칸 하나를 읽는다. `allow_zero`면 0도 허용한다.
pub fn read_field<R, W, M>(
    console: &mut Console<R, W>,
    messages: &M,
    prompt_key: &str,
    invalid_key: &str,
    allow_zero: bool,
) -> Result<f64, SessionError>
where
    R: BufRead,
    W: Write,
    M: MessageProvider + ?Sized,
{
    let value = prompt_until(console, messages, prompt_key, invalid_key, |text| {
        validation::parse_number(text, allow_zero)
    })?;
    debug!(field = prompt_key, value, "accepted input");
    Ok(value)
}

/// yes/y/no/n (대소문자 무시)만 인정한다.
pub fn parse_continuation(text: &str) -> Option<ContinuationChoice> {
    match text.to_lowercase().as_str() {
        "yes" | "y" => Some(ContinuationChoice::Continue),
        "no" | "n" => Some(ContinuationChoice::Stop),
        _ => None,
    }
}

/// 계속 계산할지 묻는다.
pub fn read_continuation<R, W, M>(
    console: &mut Console<R, W>,
    messages: &M,
) -> Result<ContinuationChoice, SessionError>
where
    R: BufRead,
    W: Write,
    M: MessageProvider + ?Sized,
{
    prompt_until(
        console,
        messages,
        keys::RUN_AGAIN,
        keys::INVALID_YES_NO,
        parse_continuation,
    )
}
