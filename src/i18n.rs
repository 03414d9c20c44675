use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::form::FieldErrorKind;
use crate::mortgage::{LoanField, RepaymentType};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const FORM_TITLE: &str = "form.title";
    pub const FORM_AMOUNT: &str = "form.amount";
    pub const FORM_TERM: &str = "form.term";
    pub const FORM_RATE: &str = "form.rate";
    pub const FORM_TYPE: &str = "form.type";
    pub const FORM_TYPE_REPAYMENT: &str = "form.type_repayment";
    pub const FORM_TYPE_INTEREST_ONLY: &str = "form.type_interest_only";
    pub const FORM_SUBMIT: &str = "form.submit";
    pub const FORM_CLEAR: &str = "form.clear";
    pub const PROMPT_TYPE: &str = "prompt.type";

    pub const ERROR_AMOUNT_REQUIRED: &str = "error.amount_required";
    pub const ERROR_TERM_REQUIRED: &str = "error.term_required";
    pub const ERROR_RATE_REQUIRED: &str = "error.rate_required";
    pub const ERROR_AMOUNT_MALFORMED: &str = "error.amount_malformed";
    pub const ERROR_TERM_MALFORMED: &str = "error.term_malformed";
    pub const ERROR_RATE_MALFORMED: &str = "error.rate_malformed";

    pub const RESULTS_TITLE: &str = "results.title";
    pub const RESULTS_DESCRIPTION: &str = "results.description";
    pub const RESULTS_MONTHLY: &str = "results.monthly";
    pub const RESULTS_TOTAL: &str = "results.total";
    pub const RESULTS_EMPTY_TITLE: &str = "results.empty_title";
    pub const RESULTS_EMPTY_BODY: &str = "results.empty_body";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_CURRENCY: &str = "settings.current_currency";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_CURRENT_TYPE: &str = "settings.current_type";
    pub const SETTINGS_PROMPT_TYPE: &str = "settings.prompt_type";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 > 내장 번역 > 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let builtin = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        builtin.unwrap_or("")
    }

    /// `{name}` 자리표시자를 채운 번역.
    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        fill_template(self.t(key), vars)
    }

    pub fn repayment_type(&self, ty: RepaymentType) -> &str {
        match ty {
            RepaymentType::Repayment => self.t(keys::FORM_TYPE_REPAYMENT),
            RepaymentType::InterestOnly => self.t(keys::FORM_TYPE_INTEREST_ONLY),
        }
    }

    /// 필드 오류 메시지를 현재 언어로 돌려준다.
    pub fn field_error(&self, field: LoanField, kind: FieldErrorKind) -> &str {
        use keys::*;
        let key = match (field, kind) {
            (LoanField::Amount, FieldErrorKind::Required) => ERROR_AMOUNT_REQUIRED,
            (LoanField::Term, FieldErrorKind::Required) => ERROR_TERM_REQUIRED,
            (LoanField::Rate, FieldErrorKind::Required) => ERROR_RATE_REQUIRED,
            (LoanField::Amount, FieldErrorKind::Malformed) => ERROR_AMOUNT_MALFORMED,
            (LoanField::Term, FieldErrorKind::Malformed) => ERROR_TERM_MALFORMED,
            (LoanField::Rate, FieldErrorKind::Malformed) => ERROR_RATE_MALFORMED,
        };
        self.t(key)
    }
}

pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // en-gb -> en
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    tracing::debug!(dir, lang, "no language pack found");
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.clone());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }
    Some(map)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Goodbye.",
        MAIN_MENU_TITLE => "\n=== Mortgage Calculator ===",
        MAIN_MENU_CALCULATE => "1) Calculate repayments",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        FORM_TITLE => "Mortgage Calculator",
        FORM_AMOUNT => "Mortgage Amount ({symbol})",
        FORM_TERM => "Mortgage Term (years)",
        FORM_RATE => "Interest Rate (%)",
        FORM_TYPE => "Mortgage Type",
        FORM_TYPE_REPAYMENT => "Repayment",
        FORM_TYPE_INTEREST_ONLY => "Interest Only",
        FORM_SUBMIT => "Calculate Repayments",
        FORM_CLEAR => "Clear All",
        PROMPT_TYPE => "Mortgage Type (1=Repayment, 2=Interest Only) [{default}]: ",
        ERROR_AMOUNT_REQUIRED => "Mortgage amount is required.",
        ERROR_TERM_REQUIRED => "Mortgage term is required.",
        ERROR_RATE_REQUIRED => "Interest rate is required.",
        ERROR_AMOUNT_MALFORMED => "Mortgage amount must be a number.",
        ERROR_TERM_MALFORMED => "Mortgage term must be a non-negative whole number of years.",
        ERROR_RATE_MALFORMED => "Interest rate must be a number.",
        RESULTS_TITLE => "Your results",
        RESULTS_DESCRIPTION => "Your results are shown below based on the information you provided. To adjust the results, edit the form and click \"calculate repayments\" again.",
        RESULTS_MONTHLY => "Your monthly repayments",
        RESULTS_TOTAL => "Total you'll repay over the term",
        RESULTS_EMPTY_TITLE => "Results shown here",
        RESULTS_EMPTY_BODY => "Complete the form and click \"calculate repayments\" to see what your monthly repayments would be.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_CURRENCY => "Current currency symbol: {symbol}",
        SETTINGS_PROMPT_CURRENCY => "New currency symbol (Enter to keep): ",
        SETTINGS_CURRENT_TYPE => "Current default mortgage type: {type}",
        SETTINGS_PROMPT_TYPE => "New default (1=Repayment, 2=Interest Only, Enter to keep): ",
        SETTINGS_INVALID => "Invalid input; keeping the current value.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_LANGUAGE => "Language",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 주택담보대출 계산기 ===",
        MAIN_MENU_CALCULATE => "1) 상환액 계산",
        MAIN_MENU_SETTINGS => "2) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        FORM_TITLE => "주택담보대출 계산기",
        FORM_AMOUNT => "대출 금액 ({symbol})",
        FORM_TERM => "대출 기간 (년)",
        FORM_RATE => "이자율 (%)",
        FORM_TYPE => "상환 방식",
        FORM_TYPE_REPAYMENT => "원리금 상환",
        FORM_TYPE_INTEREST_ONLY => "이자만 상환",
        FORM_SUBMIT => "상환액 계산",
        FORM_CLEAR => "모두 지우기",
        PROMPT_TYPE => "상환 방식 (1=원리금, 2=이자만) [{default}]: ",
        ERROR_AMOUNT_REQUIRED => "대출 금액을 입력하세요.",
        ERROR_TERM_REQUIRED => "대출 기간을 입력하세요.",
        ERROR_RATE_REQUIRED => "이자율을 입력하세요.",
        ERROR_AMOUNT_MALFORMED => "대출 금액은 숫자여야 합니다.",
        ERROR_TERM_MALFORMED => "대출 기간은 0 이상의 정수(년)여야 합니다.",
        ERROR_RATE_MALFORMED => "이자율은 숫자여야 합니다.",
        RESULTS_TITLE => "계산 결과",
        RESULTS_DESCRIPTION => "입력한 정보로 계산한 결과입니다. 값을 바꾸려면 폼을 수정한 뒤 다시 계산하세요.",
        RESULTS_MONTHLY => "월 상환액",
        RESULTS_TOTAL => "전체 기간 총 상환액",
        RESULTS_EMPTY_TITLE => "결과가 여기에 표시됩니다",
        RESULTS_EMPTY_BODY => "폼을 채우고 계산 버튼을 누르면 월 상환액을 볼 수 있습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_CURRENCY => "현재 통화 기호: {symbol}",
        SETTINGS_PROMPT_CURRENCY => "새 통화 기호 (유지하려면 엔터): ",
        SETTINGS_CURRENT_TYPE => "현재 기본 상환 방식: {type}",
        SETTINGS_PROMPT_TYPE => "새 기본값 (1=원리금, 2=이자만, 유지하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        SETTINGS_LANGUAGE => "언어",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_pack_keys_flatten() {
        let map = parse_toml_to_map("[results]\nmonthly = \"Monthly\"\n").unwrap_or_default();
        assert_eq!(map.get("results.monthly").map(String::as_str), Some("Monthly"));
    }

    #[test]
    fn locale_strings_normalize() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(normalize_locale_string("en-GB").as_deref(), Some("en"));
        assert_eq!(normalize_locale_string("fr_FR"), None);
    }
}
