use std::fmt;

use thiserror::Error;

/// 대출 조건이 허용 범위를 벗어났을 때의 오류.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoanError {
    /// 대출 원금은 0보다 커야 한다.
    #[error("loan amount must be a positive number, got {0}")]
    Principal(f64),
    /// 연이율은 0 이상이어야 한다.
    #[error("annual percentage rate must be zero or positive, got {0}")]
    Rate(f64),
    /// 대출 기간은 0보다 커야 한다.
    #[error("loan duration must be a positive number of years, got {0}")]
    Duration(f64),
    /// 입력은 유효하지만 월 납입액이 f64 범위를 넘음
    #[error("monthly payment is out of range for these terms")]
    PaymentOverflow,
}

/// 사용자가 입력한 대출 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    /// 대출 원금
    pub principal: f64,
    /// 연이율 [%] (6이면 6%)
    pub annual_rate_percent: f64,
    /// 대출 기간 [년]
    pub duration_years: f64,
}

/// 공식에 바로 넣을 수 있도록 단위를 환산한 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaInputs {
    pub principal: f64,
    /// 월 이율 (분수, 0.005 = 0.5%)
    pub monthly_rate: f64,
    /// 상환 개월 수
    pub duration_months: f64,
}

impl LoanTerms {
    /// 범위를 확인한 뒤 대출 조건을 만든다.
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        duration_years: f64,
    ) -> Result<Self, LoanError> {
        if !(principal.is_finite() && principal > 0.0) {
            return Err(LoanError::Principal(principal));
        }
        if !(annual_rate_percent.is_finite() && annual_rate_percent >= 0.0) {
            return Err(LoanError::Rate(annual_rate_percent));
        }
        if !(duration_years.is_finite() && duration_years > 0.0) {
            return Err(LoanError::Duration(duration_years));
        }
        Ok(Self {
            principal,
            annual_rate_percent,
            duration_years,
        })
    }

    /// 연이율 % → 월 이율, 년 → 개월로 환산한다.
    pub fn formula_inputs(&self) -> FormulaInputs {
        FormulaInputs {
            principal: self.principal,
            monthly_rate: self.annual_rate_percent / 100.0 / 12.0,
            duration_months: self.duration_years * 12.0,
        }
    }

    /// 환산과 상환액 계산을 한 번에 수행한다. 결과가 유한하지 않으면 오류.
    pub fn monthly_payment(&self) -> Result<MonthlyPayment, LoanError> {
        let inputs = self.formula_inputs();
        let payment = compute_monthly_payment(
            inputs.principal,
            inputs.monthly_rate,
            inputs.duration_months,
        );
        if payment.is_finite() {
            Ok(MonthlyPayment(payment))
        } else {
            Err(LoanError::PaymentOverflow)
        }
    }
}

/// 원리금 균등 상환 월 납입액을 계산한다.
///
/// m = p * (j / (1 - (1 + j)^(-n)))
///
/// 월 이율이 0이면 원금을 개월 수로 나눈다.
pub fn compute_monthly_payment(principal: f64, monthly_rate: f64, duration_months: f64) -> f64 {
    if monthly_rate == 0.0 {
        return principal / duration_months;
    }
    principal * (monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-duration_months)))
}

/// 계산된 월 납입액.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MonthlyPayment(pub f64);

impl MonthlyPayment {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for MonthlyPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_payment(self.0))
    }
}

/// 금액을 `$1234.56` 형식으로 표시한다.
pub fn format_payment(payment: f64) -> String {
    format!("${payment:.2}")
}
