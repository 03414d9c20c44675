//! 대출 입력 검증과 월 상환액 계산.
//! 화면 구성은 다루지 않고, 프런트엔드가 원시 입력을 넘겨 결과를 받아간다.

pub mod loan_input;
pub mod repayment;
pub mod validation;

pub use loan_input::*;
pub use repayment::*;
pub use validation::*;
