use std::fs;
use std::path::PathBuf;

use mortgage_calculator::config::{self, Config};
use mortgage_calculator::i18n::{self, keys, Language, Translator};
use mortgage_calculator::mortgage::RepaymentType;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mortgage_calculator_{}_{name}", std::process::id()))
}

#[test]
fn missing_file_writes_defaults() {
    let path = temp_path("defaults.toml");
    let _ = fs::remove_file(&path);
    let cfg = config::load_from(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.currency_symbol, "£");
    assert!(path.exists());
    let _ = fs::remove_file(&path);
}

#[test]
fn saved_settings_load_back() {
    let path = temp_path("saved.toml");
    let cfg = Config {
        currency_symbol: "$".to_string(),
        default_repayment_type: RepaymentType::InterestOnly,
        ..Config::default()
    };
    cfg.save_to(&path).expect("save");
    let content = fs::read_to_string(&path).expect("read");
    assert!(content.contains("interest-only"));
    assert_eq!(config::load_from(&path).expect("load"), cfg);
    let _ = fs::remove_file(&path);
}

#[test]
fn partial_file_fills_defaults() {
    let path = temp_path("partial.toml");
    fs::write(&path, "currency_symbol = \"€\"\n").expect("write");
    let cfg = config::load_from(&path).expect("load");
    assert_eq!(cfg.currency_symbol, "€");
    assert_eq!(cfg.default_repayment_type, RepaymentType::Repayment);
    assert_eq!(cfg.language, "auto");
    let _ = fs::remove_file(&path);
}

#[test]
fn explicit_language_wins() {
    assert_eq!(i18n::resolve_language("ko", Some("en")), "ko");
    assert_eq!(i18n::resolve_language("auto", Some("en-GB")), "en");
}

#[test]
fn korean_falls_back_to_english_keys() {
    let tr = Translator::new("ko");
    assert_eq!(tr.language(), Language::Ko);
    assert_eq!(tr.t(keys::RESULTS_MONTHLY), "월 상환액");
    assert_eq!(Translator::new("fr").t(keys::FORM_SUBMIT), "Calculate Repayments");
}

#[test]
fn language_pack_overrides_builtin() {
    let dir = temp_path("locales");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("en.toml"), "[results]\nmonthly = \"Per month\"\n").expect("write");
    let tr = Translator::new_with_pack("en-gb", dir.to_str());
    assert_eq!(tr.t(keys::RESULTS_MONTHLY), "Per month");
    assert_eq!(tr.t(keys::RESULTS_TOTAL), "Total you'll repay over the term");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn amount_label_shows_currency() {
    let tr = Translator::new("en");
    assert_eq!(tr.t_with(keys::FORM_AMOUNT, &[("symbol", "£")]), "Mortgage Amount (£)");
}
