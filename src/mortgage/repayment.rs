use super::loan_input::{LoanInput, RepaymentType};

/// 월 상환액 계산 결과. 매 계산마다 새로 만들어진다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepaymentResult {
    /// 월 상환액 (소수 둘째 자리 반올림)
    pub monthly_payment: f64,
    /// 총 상환액 (소수 둘째 자리 반올림)
    pub total_repayment: f64,
    /// 상환 개월 수
    pub number_of_months: u64,
    pub repayment_type: RepaymentType,
}

/// 대출 조건으로 월 상환액과 총 상환액을 계산한다.
///
/// - Repayment: 원리금 균등(annuity) 공식 `P·r / (1 - (1+r)^-n)`.
///   월 이율이 0이면 `P / n`으로 나눈다.
/// - InterestOnly: `P·r`.
///
/// 총 상환액은 반올림 전 월 상환액에 개월 수를 곱한 뒤 반올림한다.
/// 범위 검사는 하지 않으므로 기간이 0이면 결과가 유한하지 않을 수 있다.
pub fn compute(input: LoanInput) -> RepaymentResult {
    let monthly_rate = input.annual_rate_percent / 100.0 / 12.0;
    let number_of_months = u64::from(input.term_years) * 12;
    let months = number_of_months as f64;
    let principal = input.amount;

    let monthly_payment = match input.repayment_type {
        RepaymentType::Repayment if monthly_rate == 0.0 => {
            tracing::debug!("zero interest rate, spreading principal evenly");
            principal / months
        }
        RepaymentType::Repayment => {
            (principal * monthly_rate) / (1.0 - (1.0 + monthly_rate).powf(-months))
        }
        RepaymentType::InterestOnly => principal * monthly_rate,
    };

    RepaymentResult {
        monthly_payment: round_to_cents(monthly_payment),
        total_repayment: round_to_cents(monthly_payment * months),
        number_of_months,
        repayment_type: input.repayment_type,
    }
}

/// 소수 둘째 자리로 반올림한다 (0.5는 0에서 먼 쪽으로).
/// 음의 0은 0으로 맞춘다.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_cents(1.125), 1.13);
        assert_eq!(round_to_cents(-1.125), -1.13);
        assert_eq!(round_to_cents(416.666_666), 416.67);
    }

    #[test]
    fn tiny_negative_rounds_to_plain_zero() {
        let rounded = round_to_cents(-0.0001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_to_cents(f64::INFINITY).is_infinite());
        assert!(round_to_cents(f64::NAN).is_nan());
    }
}
