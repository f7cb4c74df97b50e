//! 월 납입액 공식 및 단위 환산 테스트.
use mortgage_calculator::loan::{
    compute_monthly_payment, format_payment, LoanError, LoanTerms, MonthlyPayment,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn zero_rate_is_straight_line() {
    assert_eq!(compute_monthly_payment(12_000.0, 0.0, 12.0), 1000.0);
    assert_eq!(compute_monthly_payment(5_000.0, 0.0, 7.5), 5_000.0 / 7.5);
}

#[test]
fn closed_form_amortization() {
    let cases: [(f64, f64, f64); 3] = [
        (200_000.0, 0.005, 360.0),
        (18_500.0, 0.0325 / 12.0, 60.0),
        (1_000.0, 0.01, 2.5),
    ];
    for (p, j, n) in cases {
        let expected = p * j / (1.0 - (1.0 + j).powf(-n));
        assert_close("payment", compute_monthly_payment(p, j, n), expected, 1e-9);
    }
}

#[test]
fn thirty_year_mortgage_at_six_percent() {
    let terms = LoanTerms::new(200_000.0, 6.0, 30.0).expect("terms");
    let inputs = terms.formula_inputs();
    assert_close("monthly_rate", inputs.monthly_rate, 0.005, 1e-12);
    assert_close("duration_months", inputs.duration_months, 360.0, 1e-12);

    let payment = terms.monthly_payment().expect("payment");
    assert_close("payment", payment.value(), 1199.10, 1e-5);
    assert_eq!(payment.to_string(), "$1199.10");
}

#[test]
fn interest_free_one_year_loan() {
    let terms = LoanTerms::new(12_000.0, 0.0, 1.0).expect("terms");
    assert_eq!(terms.formula_inputs().duration_months, 12.0);
    let payment = terms.monthly_payment().expect("payment");
    assert_eq!(payment, MonthlyPayment(1000.0));
    assert_eq!(payment.to_string(), "$1000.00");
}

#[test]
fn terms_reject_out_of_range_values() {
    assert_eq!(LoanTerms::new(0.0, 5.0, 1.0), Err(LoanError::Principal(0.0)));
    assert_eq!(LoanTerms::new(100.0, -1.0, 1.0), Err(LoanError::Rate(-1.0)));
    assert_eq!(LoanTerms::new(100.0, 5.0, 0.0), Err(LoanError::Duration(0.0)));
    assert!(LoanTerms::new(f64::INFINITY, 5.0, 1.0).is_err());
}

#[test]
fn overflowing_payment_is_an_error() {
    let terms = LoanTerms::new(f64::MAX, 0.0, 1.0e-5).expect("finite terms");
    assert_eq!(terms.monthly_payment(), Err(LoanError::PaymentOverflow));
}

#[test]
fn payment_display_has_two_decimals() {
    assert_eq!(format_payment(1000.0), "$1000.00");
    assert_eq!(format_payment(87.456), "$87.46");
    assert_eq!(format_payment(0.1), "$0.10");
}
