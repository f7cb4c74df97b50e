use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::console::Console;
use crate::loan::{LoanError, LoanTerms, MonthlyPayment};
use crate::messages::{keys, MessageProvider};
use crate::prompt::{self, ContinuationChoice};

/// 대화 세션 중 발생 가능한 오류. 잘못된 입력은 오류가 아니라 재입력으로 처리된다.
#[derive(Debug, Error)]
pub enum SessionError {
    /// 콘솔 입출력 오류
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 입력이 끝나 더 읽을 수 없음
    #[error("input closed before the session finished")]
    InputClosed,
    /// 검증을 통과한 값으로 대출 조건을 만들 수 없음
    #[error(transparent)]
    Loan(#[from] LoanError),
}

/// 세션 상태.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    AwaitingLoanAmount,
    AwaitingApr {
        principal: f64,
    },
    AwaitingDuration {
        principal: f64,
        annual_rate_percent: f64,
    },
    Computing {
        terms: LoanTerms,
    },
    Displaying {
        payment: MonthlyPayment,
    },
    AwaitingContinuation,
    Terminated,
}

/// 종료된 세션 요약.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// 계산해서 보여 준 월 납입액 수
    pub calculations: usize,
}

/// 환영 문구부터 종료 문구까지 계산 루프를 실행한다.
pub fn run<R, W, M>(
    console: &mut Console<R, W>,
    messages: &M,
) -> Result<SessionSummary, SessionError>
where
    R: BufRead,
    W: Write,
    M: MessageProvider + ?Sized,
{
    info!("session started");
    console.prompt(messages.lookup(keys::WELCOME))?;

    let mut summary = SessionSummary::default();
    let mut state = SessionState::AwaitingLoanAmount;
    loop {
        state = match state {
            SessionState::AwaitingLoanAmount => {
                let principal = prompt::read_field(
                    console,
                    messages,
                    keys::LOAN_AMOUNT,
                    keys::INVALID_LOAN_AMOUNT,
                    false,
                )?;
                SessionState::AwaitingApr { principal }
            }
            SessionState::AwaitingApr { principal } => {
                let annual_rate_percent =
                    prompt::read_field(console, messages, keys::APR, keys::INVALID_APR, true)?;
                SessionState::AwaitingDuration {
                    principal,
                    annual_rate_percent,
                }
            }
            SessionState::AwaitingDuration {
                principal,
                annual_rate_percent,
            } => {
                let duration_years = prompt::read_field(
                    console,
                    messages,
                    keys::LOAN_DURATION,
                    keys::INVALID_LOAN_DURATION,
                    false,
                )?;
                let terms = LoanTerms::new(principal, annual_rate_percent, duration_years)?;
                SessionState::Computing { terms }
            }
            SessionState::Computing { terms } => match terms.monthly_payment() {
                Ok(payment) => {
                    debug!(
                        ?terms,
                        inputs = ?terms.formula_inputs(),
                        payment = payment.value(),
                        "computed payment"
                    );
                    SessionState::Displaying { payment }
                }
                Err(err) => {
                    // 납입액이 범위를 넘으면 원금부터 다시 받는다.
                    debug!(?terms, %err, "payment out of range");
                    console.prompt(messages.lookup(keys::INVALID_LOAN_AMOUNT))?;
                    SessionState::AwaitingLoanAmount
                }
            },
            SessionState::Displaying { payment } => {
                console.prompt(messages.lookup(keys::RESULT))?;
                console.say(&payment.to_string())?;
                summary.calculations += 1;
                SessionState::AwaitingContinuation
            }
            SessionState::AwaitingContinuation => {
                match prompt::read_continuation(console, messages)? {
                    ContinuationChoice::Continue => SessionState::AwaitingLoanAmount,
                    ContinuationChoice::Stop => SessionState::Terminated,
                }
            }
            SessionState::Terminated => break,
        };
    }

    console.prompt(messages.lookup(keys::FINISHED))?;
    info!(calculations = summary.calculations, "session finished");
    Ok(summary)
}
