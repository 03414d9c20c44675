use mortgage_calculator::mortgage::{
    compute, InputError, LoanField, LoanInput, RawLoanInput, RepaymentType,
};

fn loan(amount: f64, term_years: u32, rate: f64, repayment_type: RepaymentType) -> LoanInput {
    LoanInput {
        amount,
        term_years,
        annual_rate_percent: rate,
        repayment_type,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-6, "expected {expected}, got {actual}");
}

#[test]
fn repayment_scenario() {
    let res = compute(loan(100_000.0, 25, 5.0, RepaymentType::Repayment));
    assert_close(res.monthly_payment, 584.59);
    // 총액은 반올림 전 월 상환액 × 300
    assert_close(res.total_repayment, 175_377.01);
    assert_eq!(res.number_of_months, 300);
    assert_eq!(res.repayment_type, RepaymentType::Repayment);
}

#[test]
fn interest_only_scenario() {
    let res = compute(loan(100_000.0, 25, 5.0, RepaymentType::InterestOnly));
    assert_close(res.monthly_payment, 416.67);
    assert_close(res.total_repayment, 125_000.0);
}

#[test]
fn same_input_same_result() {
    let input = loan(250_000.0, 30, 4.25, RepaymentType::Repayment);
    assert_eq!(compute(input), compute(input));
}

#[test]
fn interest_only_never_exceeds_repayment() {
    for amount in [1_000.0, 85_000.0, 350_000.0] {
        for term in [1u32, 5, 25, 40] {
            for rate in [0.1, 2.5, 5.0, 12.0] {
                let io = compute(loan(amount, term, rate, RepaymentType::InterestOnly));
                let rp = compute(loan(amount, term, rate, RepaymentType::Repayment));
                assert!(
                    io.monthly_payment <= rp.monthly_payment,
                    "amount={amount} term={term} rate={rate}"
                );
            }
        }
    }
}

#[test]
fn zero_rate_spreads_principal_evenly() {
    let res = compute(loan(120_000.0, 10, 0.0, RepaymentType::Repayment));
    assert_close(res.monthly_payment, 1_000.0);
    assert_close(res.total_repayment, 120_000.0);

    let res = compute(loan(100_000.0, 25, 0.0, RepaymentType::Repayment));
    assert_close(res.monthly_payment, 333.33);
    assert_close(res.total_repayment, 100_000.0);

    let io = compute(loan(120_000.0, 10, 0.0, RepaymentType::InterestOnly));
    assert_eq!(io.monthly_payment, 0.0);
    assert_eq!(io.total_repayment, 0.0);
}

#[test]
fn zero_term_is_not_finite() {
    let res = compute(loan(100_000.0, 0, 5.0, RepaymentType::Repayment));
    assert!(!res.monthly_payment.is_finite());
}

#[test]
fn parse_then_compute() {
    let raw = RawLoanInput::new("100000", " 25 ", "5", RepaymentType::InterestOnly);
    let input = LoanInput::parse(&raw).expect("valid input");
    assert_eq!(input, loan(100_000.0, 25, 5.0, RepaymentType::InterestOnly));
    assert_close(compute(input).monthly_payment, 416.67);
}

#[test]
fn parse_collects_missing_fields() {
    let raw = RawLoanInput::new("", "abc", "", RepaymentType::Repayment);
    match LoanInput::parse(&raw) {
        Err(InputError::Missing(errors)) => {
            assert_eq!(errors.len(), 2);
            assert!(errors.contains(LoanField::Amount));
            assert!(errors.contains(LoanField::Rate));
        }
        other => panic!("expected missing fields, got {other:?}"),
    }
}

#[test]
fn parse_reports_first_malformed_field() {
    let raw = RawLoanInput::new("100000", "2.5", "five", RepaymentType::Repayment);
    assert_eq!(
        LoanInput::parse(&raw),
        Err(InputError::MalformedNumber {
            field: LoanField::Term,
            value: "2.5".to_string(),
        })
    );

    let raw = RawLoanInput::new("100000", "25", "five", RepaymentType::Repayment);
    assert!(matches!(
        LoanInput::parse(&raw),
        Err(InputError::MalformedNumber { field: LoanField::Rate, .. })
    ));

    let raw = RawLoanInput::new("   ", "25", "5", RepaymentType::Repayment);
    assert!(matches!(
        LoanInput::parse(&raw),
        Err(InputError::MalformedNumber { field: LoanField::Amount, .. })
    ));
}

#[test]
fn raw_fields_are_read_by_name() {
    let raw = RawLoanInput::new("", "25", "5", RepaymentType::Repayment);
    assert_eq!(raw.field(LoanField::Term), "25");
    match LoanInput::parse(&raw) {
        Err(InputError::Missing(errors)) => {
            assert_eq!(errors.get(LoanField::Amount), Some(LoanField::Amount.required_message()));
            assert_eq!(errors.len(), 1);
        }
        other => panic!("expected missing amount, got {other:?}"),
    }
}
