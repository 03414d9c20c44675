use mortgage_calculator::app::{calculate_once, OneShotStatus};
use mortgage_calculator::config::Config;
use mortgage_calculator::i18n::Translator;
use mortgage_calculator::mortgage::{InputError, LoanField, RepaymentType};
use mortgage_calculator::{money::format_money, ui_cli};

#[test]
fn absent_flags_are_reported_together() {
    let (form, status) =
        calculate_once(Some("100000".to_string()), None, None, RepaymentType::Repayment);
    assert_eq!(status, OneShotStatus::Rejected);
    assert_eq!(status.exit_code(), 2);
    match form.error() {
        Some(InputError::Missing(errors)) => {
            assert_eq!(errors.len(), 2);
            assert!(errors.contains(LoanField::Term));
            assert!(errors.contains(LoanField::Rate));
        }
        other => panic!("expected missing term and rate, got {other:?}"),
    }
    assert!(form.result().is_none());
    ui_cli::print_outcome(&Translator::new("en"), &Config::default(), &form);
}

#[test]
fn malformed_flag_exits_with_two() {
    let (form, status) = calculate_once(
        Some("100000".to_string()),
        Some("-3".to_string()),
        Some("5".to_string()),
        RepaymentType::Repayment,
    );
    assert_eq!(status.exit_code(), 2);
    assert_eq!(
        form.field_error(LoanField::Term),
        Some("Mortgage term must be a non-negative whole number of years.")
    );
}

#[test]
fn full_flags_calculate() {
    let (form, status) = calculate_once(
        Some("100000".to_string()),
        Some("25".to_string()),
        Some("5".to_string()),
        RepaymentType::InterestOnly,
    );
    assert_eq!(status, OneShotStatus::Calculated);
    assert_eq!(status.exit_code(), 0);
    let result = form.result().expect("calculated");
    assert_eq!(format_money("£", result.monthly_payment), "£416.67");
    assert_eq!(format_money("£", result.total_repayment), "£125000.00");
    ui_cli::print_outcome(&Translator::new("en"), &Config::default(), &form);
}

#[test]
fn tiny_negative_figure_shows_plain_zero() {
    let (form, _) = calculate_once(
        Some("-0.0001".to_string()),
        Some("1".to_string()),
        Some("5".to_string()),
        RepaymentType::InterestOnly,
    );
    let result = form.result().expect("calculated");
    assert_eq!(format_money("£", result.monthly_payment), "£0.00");
    assert_eq!(format_money("£", result.total_repayment), "£0.00");
}
