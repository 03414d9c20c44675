use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::form::CalculatorForm;
use crate::i18n::{self, Translator};
use crate::mortgage::RepaymentType;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 표준 입력이 닫힘
    #[error("input closed")]
    InputClosed,
}

/// 한 번 실행 모드의 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShotStatus {
    Calculated,
    /// 누락 또는 숫자 형식 오류
    Rejected,
}

impl OneShotStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            OneShotStatus::Calculated => 0,
            OneShotStatus::Rejected => 2,
        }
    }
}

/// 플래그로 받은 값으로 한 번 계산한다. 지정하지 않은 필드는 빈 값으로 제출되어
/// 누락 오류가 함께 보고된다.
pub fn calculate_once(
    amount: Option<String>,
    term: Option<String>,
    rate: Option<String>,
    repayment_type: RepaymentType,
) -> (CalculatorForm, OneShotStatus) {
    let mut form = CalculatorForm::new(repayment_type);
    form.raw.amount = amount.unwrap_or_default();
    form.raw.term = term.unwrap_or_default();
    form.raw.rate = rate.unwrap_or_default();
    let status = match form.submit() {
        Ok(_) => OneShotStatus::Calculated,
        Err(_) => OneShotStatus::Rejected,
    };
    (form, status)
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu(tr) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        match choice {
            MenuChoice::Calculate => match ui_cli::handle_calculate(tr, config) {
                Err(AppError::InputClosed) => return finish(config, tr),
                other => other?,
            },
            MenuChoice::Settings => {
                match ui_cli::handle_settings(tr, config) {
                    Err(AppError::InputClosed) => return finish(config, tr),
                    other => other?,
                }
                config.save()?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => return finish(config, tr),
        }
    }
}

fn finish(config: &Config, tr: &Translator) -> Result<(), AppError> {
    config.save()?;
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}
