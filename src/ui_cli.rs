use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::form::CalculatorForm;
use crate::i18n::{keys, Translator};
use crate::money::format_money;
use crate::mortgage::{LoanField, RepaymentType};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 네 개의 입력을 받아 계산하고 결과 또는 오류를 출력한다.
/// 빈 입력도 그대로 제출되므로 누락 메시지가 한 번에 표시된다.
pub fn handle_calculate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let mut form = CalculatorForm::new(cfg.default_repayment_type);
    println!("\n-- {} --", tr.t(keys::FORM_TITLE));
    for field in LoanField::ALL {
        let prompt = format!("{}: ", field_label(tr, cfg, field));
        *form.raw.field_mut(field) = read_line(&prompt)?.trim().to_string();
    }
    form.raw.repayment_type = read_repayment_type(tr, cfg.default_repayment_type)?;
    // 오류는 print_outcome이 필드별로 출력하므로 여기서는 무시한다
    let _ = form.submit();
    print_outcome(tr, cfg, &form);
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.t_with(keys::SETTINGS_CURRENT_CURRENCY, &[("symbol", cfg.currency_symbol.as_str())])
    );
    let symbol = read_line(tr.t(keys::SETTINGS_PROMPT_CURRENCY))?;
    if !symbol.trim().is_empty() {
        cfg.currency_symbol = symbol.trim().to_string();
    }

    let current = tr.repayment_type(cfg.default_repayment_type);
    println!("{}", tr.t_with(keys::SETTINGS_CURRENT_TYPE, &[("type", current)]));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_TYPE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.default_repayment_type = RepaymentType::Repayment,
        "2" => cfg.default_repayment_type = RepaymentType::InterestOnly,
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

/// 폼의 현재 상태(오류 또는 결과)를 출력한다.
pub fn print_outcome(tr: &Translator, cfg: &Config, form: &CalculatorForm) {
    if form.error().is_some() {
        for field in LoanField::ALL {
            if let Some(kind) = form.field_error_kind(field) {
                println!(
                    "{}: {} - {}",
                    tr.t(keys::ERROR_PREFIX),
                    field_label(tr, cfg, field),
                    tr.field_error(field, kind)
                );
            }
        }
        return;
    }
    match form.result() {
        Some(result) => {
            println!("\n{}", tr.t(keys::RESULTS_TITLE));
            println!(
                "{}: {}",
                tr.t(keys::RESULTS_MONTHLY),
                format_money(&cfg.currency_symbol, result.monthly_payment)
            );
            println!(
                "{}: {}",
                tr.t(keys::RESULTS_TOTAL),
                format_money(&cfg.currency_symbol, result.total_repayment)
            );
        }
        None => {
            println!("{}", tr.t(keys::RESULTS_EMPTY_TITLE));
            println!("{}", tr.t(keys::RESULTS_EMPTY_BODY));
        }
    }
}

pub fn field_label(tr: &Translator, cfg: &Config, field: LoanField) -> String {
    match field {
        LoanField::Amount => tr.t_with(keys::FORM_AMOUNT, &[("symbol", cfg.currency_symbol.as_str())]),
        LoanField::Term => tr.t(keys::FORM_TERM).to_string(),
        LoanField::Rate => tr.t(keys::FORM_RATE).to_string(),
    }
}

fn read_repayment_type(tr: &Translator, default: RepaymentType) -> Result<RepaymentType, AppError> {
    let prompt = tr.t_with(keys::PROMPT_TYPE, &[("default", tr.repayment_type(default))]);
    loop {
        let sel = read_line(&prompt)?;
        match sel.trim() {
            "" => return Ok(default),
            "1" => return Ok(RepaymentType::Repayment),
            "2" => return Ok(RepaymentType::InterestOnly),
            other => match other.parse::<RepaymentType>() {
                Ok(ty) => return Ok(ty),
                Err(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
            },
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}
