use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::validation::{validate, ValidationResult};

/// 상환 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepaymentType {
    /// 원리금 균등 상환 (원금 + 이자)
    #[default]
    Repayment,
    /// 이자만 상환
    InterestOnly,
}

impl RepaymentType {
    pub const ALL: [RepaymentType; 2] = [RepaymentType::Repayment, RepaymentType::InterestOnly];

    pub fn as_code(&self) -> &'static str {
        match self {
            RepaymentType::Repayment => "repayment",
            RepaymentType::InterestOnly => "interest-only",
        }
    }
}

impl fmt::Display for RepaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// 알 수 없는 상환 방식 문자열.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown repayment type `{0}` (expected `repayment` or `interest-only`)")]
pub struct ParseRepaymentTypeError(pub String);

impl FromStr for RepaymentType {
    type Err = ParseRepaymentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "repayment" | "r" => Ok(RepaymentType::Repayment),
            "interest-only" | "interest_only" | "interestonly" | "i" => {
                Ok(RepaymentType::InterestOnly)
            }
            other => Err(ParseRepaymentTypeError(other.to_string())),
        }
    }
}

/// 입력 폼의 필드 이름.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoanField {
    Amount,
    Term,
    Rate,
}

impl LoanField {
    pub const ALL: [LoanField; 3] = [LoanField::Amount, LoanField::Term, LoanField::Rate];

    /// 오류 맵의 키로 쓰이는 필드 이름.
    pub fn key(&self) -> &'static str {
        match self {
            LoanField::Amount => "amount",
            LoanField::Term => "term",
            LoanField::Rate => "rate",
        }
    }

    /// 필드가 비어 있을 때 보여줄 고정 메시지.
    pub fn required_message(&self) -> &'static str {
        match self {
            LoanField::Amount => "Mortgage amount is required.",
            LoanField::Term => "Mortgage term is required.",
            LoanField::Rate => "Interest rate is required.",
        }
    }

    /// 값이 숫자로 해석되지 않을 때의 메시지.
    pub fn malformed_message(&self) -> &'static str {
        match self {
            LoanField::Amount => "Mortgage amount must be a number.",
            LoanField::Term => "Mortgage term must be a non-negative whole number of years.",
            LoanField::Rate => "Interest rate must be a number.",
        }
    }
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 사용자가 입력한 그대로의 필드 값.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLoanInput {
    pub amount: String,
    pub term: String,
    pub rate: String,
    pub repayment_type: RepaymentType,
}

impl RawLoanInput {
    pub fn new(
        amount: impl Into<String>,
        term: impl Into<String>,
        rate: impl Into<String>,
        repayment_type: RepaymentType,
    ) -> Self {
        Self {
            amount: amount.into(),
            term: term.into(),
            rate: rate.into(),
            repayment_type,
        }
    }

    pub fn field(&self, field: LoanField) -> &str {
        match field {
            LoanField::Amount => &self.amount,
            LoanField::Term => &self.term,
            LoanField::Rate => &self.rate,
        }
    }

    pub fn field_mut(&mut self, field: LoanField) -> &mut String {
        match field {
            LoanField::Amount => &mut self.amount,
            LoanField::Term => &mut self.term,
            LoanField::Rate => &mut self.rate,
        }
    }
}

/// 계산 한 번에 쓰이는 불변 대출 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanInput {
    /// 대출 원금
    pub amount: f64,
    /// 대출 기간 [년]
    pub term_years: u32,
    /// 연 명목 이자율 [%]
    pub annual_rate_percent: f64,
    pub repayment_type: RepaymentType,
}

/// 원시 입력을 `LoanInput`으로 바꾸는 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// 필수 필드 누락. 누락된 필드를 모두 담는다.
    #[error("missing fields: {0}")]
    Missing(ValidationResult),
    /// 값은 있으나 숫자로 해석할 수 없음
    #[error("{field} is not a valid number: `{value}`")]
    MalformedNumber { field: LoanField, value: String },
}

impl LoanInput {
    /// 누락 검사 후 각 필드를 숫자로 변환한다.
    pub fn parse(raw: &RawLoanInput) -> Result<Self, InputError> {
        let errors = validate(
            raw.field(LoanField::Amount),
            raw.field(LoanField::Term),
            raw.field(LoanField::Rate),
        );
        if !errors.is_empty() {
            return Err(InputError::Missing(errors));
        }
        let input = LoanInput {
            amount: parse_decimal(LoanField::Amount, &raw.amount)?,
            term_years: parse_whole(LoanField::Term, &raw.term)?,
            annual_rate_percent: parse_decimal(LoanField::Rate, &raw.rate)?,
            repayment_type: raw.repayment_type,
        };
        tracing::debug!(?input, "parsed loan input");
        Ok(input)
    }
}

fn parse_decimal(field: LoanField, raw: &str) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(malformed(field, raw)),
    }
}

fn parse_whole(field: LoanField, raw: &str) -> Result<u32, InputError> {
    raw.trim().parse::<u32>().map_err(|_| malformed(field, raw))
}

fn malformed(field: LoanField, raw: &str) -> InputError {
    InputError::MalformedNumber {
        field,
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_rejects_non_finite() {
        assert!(parse_decimal(LoanField::Amount, "inf").is_err());
        assert!(parse_decimal(LoanField::Amount, "NaN").is_err());
        assert_eq!(parse_decimal(LoanField::Rate, " 4.5 ").ok(), Some(4.5));
    }

    #[test]
    fn whole_rejects_fraction_and_sign() {
        assert!(parse_whole(LoanField::Term, "2.5").is_err());
        assert!(parse_whole(LoanField::Term, "-3").is_err());
        assert_eq!(parse_whole(LoanField::Term, "30").ok(), Some(30));
    }

    #[test]
    fn repayment_type_codes() {
        assert_eq!("interest-only".parse::<RepaymentType>().ok(), Some(RepaymentType::InterestOnly));
        assert_eq!("Repayment".parse::<RepaymentType>().ok(), Some(RepaymentType::Repayment));
        assert!("balloon".parse::<RepaymentType>().is_err());
    }
}
