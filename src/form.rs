//! 프런트엔드가 소유하는 폼 상태. 제출할 때마다 검증과 계산을 새로 수행한다.

use crate::mortgage::{
    self, InputError, LoanField, LoanInput, RawLoanInput, RepaymentResult, RepaymentType,
};

/// 필드 오류 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    Malformed,
}

/// 입력 필드, 현재 오류, 최근 결과를 담는 폼.
#[derive(Debug, Clone, Default)]
pub struct CalculatorForm {
    pub raw: RawLoanInput,
    error: Option<InputError>,
    result: Option<RepaymentResult>,
}

impl CalculatorForm {
    pub fn new(repayment_type: RepaymentType) -> Self {
        Self {
            raw: RawLoanInput {
                repayment_type,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// 폼을 제출한다.
    ///
    /// 성공하면 오류를 지우고 결과를 통째로 교체한다. 실패하면 오류만 교체하고
    /// 이전 결과는 그대로 둔다.
    pub fn submit(&mut self) -> Result<RepaymentResult, InputError> {
        match LoanInput::parse(&self.raw) {
            Ok(input) => {
                let result = mortgage::compute(input);
                tracing::info!(
                    repayment_type = %input.repayment_type,
                    monthly = result.monthly_payment,
                    total = result.total_repayment,
                    "calculated repayments"
                );
                self.error = None;
                self.result = Some(result);
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(%err, "form submission rejected");
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn result(&self) -> Option<&RepaymentResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }

    /// 해당 필드에 걸린 오류 종류.
    pub fn field_error_kind(&self, field: LoanField) -> Option<FieldErrorKind> {
        match self.error.as_ref()? {
            InputError::Missing(errors) if errors.contains(field) => {
                Some(FieldErrorKind::Required)
            }
            InputError::MalformedNumber { field: bad, .. } if *bad == field => {
                Some(FieldErrorKind::Malformed)
            }
            _ => None,
        }
    }

    /// 해당 필드 아래에 보여줄 오류 메시지.
    pub fn field_error(&self, field: LoanField) -> Option<&'static str> {
        self.field_error_kind(field).map(|kind| match kind {
            FieldErrorKind::Required => field.required_message(),
            FieldErrorKind::Malformed => field.malformed_message(),
        })
    }

    /// 입력과 결과를 모두 비운다. 선택된 상환 방식은 유지한다.
    pub fn clear(&mut self) {
        *self = Self::new(self.raw.repayment_type);
    }
}
