use std::collections::BTreeMap;
use std::fmt;

use super::loan_input::LoanField;

/// 필드별 오류 메시지 맵. 비어 있으면 입력이 유효하다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<LoanField, &'static str>,
}

impl ValidationResult {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// 해당 필드의 오류 메시지.
    pub fn get(&self, field: LoanField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: LoanField) -> bool {
        self.errors.contains_key(&field)
    }

    /// 필드 순서(amount, term, rate)대로 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = (LoanField, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }

    fn insert(&mut self, field: LoanField, message: &'static str) {
        self.errors.insert(field, message);
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// 필수 필드가 비었는지만 검사한다. 숫자 형식은 여기서 보지 않는다.
///
/// 비어 있는 필드를 모두 모아 한 번에 돌려준다.
pub fn validate(raw_amount: &str, raw_term: &str, raw_rate: &str) -> ValidationResult {
    let mut result = ValidationResult::default();
    for (field, raw) in LoanField::ALL.into_iter().zip([raw_amount, raw_term, raw_rate]) {
        if raw.is_empty() {
            result.insert(field, field.required_message());
        }
    }
    result
}
