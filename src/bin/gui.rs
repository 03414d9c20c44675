#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use mortgage_calculator::{
    config,
    form::CalculatorForm,
    i18n::{self, keys, Language, Translator},
    money::format_money,
    mortgage::{LoanField, RepaymentType},
};
use std::{env, fs, path::Path};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0xd7, 0xda, 0x2f);
const RESULTS_BG: egui::Color32 = egui::Color32::from_rgb(0x13, 0x30, 0x41);
const RESULTS_CARD: egui::Color32 = egui::Color32::from_rgb(0x0e, 0x24, 0x31);
const MUTED: egui::Color32 = egui::Color32::from_rgb(0x9a, 0xbe, 0xd5);

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // --lang xx 또는 --lang=xx (auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([900.0, 620.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!(%e, "falling back to default config");
        config::Config::default()
    });
    let lang = i18n::resolve_language(cli_lang.as_deref().unwrap_or("auto"), Some(app_cfg.language.as_str()));
    eframe::run_native(
        "Mortgage Calculator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(app_cfg, &lang))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    // 기본 폰트 뒤에 두어 한글 글리프만 대체한다
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾아 등록한다. 못 찾으면 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        "assets/fonts/NanumGothic.ttf".to_string(),
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf".to_string(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".to_string(),
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc".to_string(),
        "/System/Library/Fonts/AppleSDGothicNeo.ttc".to_string(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(cand).display().to_string());
        }
    }
    for cand in &candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("failed to read font {cand}: {e}"))?;
            apply_font_bytes(ctx, bytes, "hangul");
            return Ok(());
        }
    }
    Err("no Hangul font found; Korean labels may not render".into())
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    lang_choice: String,
    form: CalculatorForm,
}

impl GuiApp {
    fn new(config: config::Config, lang: &str) -> Self {
        let tr = Translator::new_with_pack(lang, config.language_pack_dir.as_deref());
        tracing::info!(lang, "GUI language resolved");
        Self {
            form: CalculatorForm::new(config.default_repayment_type),
            lang_choice: config.language.clone(),
            config,
            tr,
        }
    }

    fn set_language(&mut self, choice: String) {
        let resolved = i18n::resolve_language(&choice, None);
        self.tr = Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.config.language = choice;
        if let Err(e) = self.config.save() {
            tracing::error!(%e, "failed to save config");
        }
    }

    fn field_label(&self, field: LoanField) -> String {
        match field {
            LoanField::Amount => self
                .tr
                .t_with(keys::FORM_AMOUNT, &[("symbol", self.config.currency_symbol.as_str())]),
            LoanField::Term => self.tr.t(keys::FORM_TERM).to_string(),
            LoanField::Rate => self.tr.t(keys::FORM_RATE).to_string(),
        }
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.tr.t(keys::FORM_TITLE));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.link(self.tr.t(keys::FORM_CLEAR)).clicked() {
                    self.form.clear();
                }
            });
        });
        ui.add_space(12.0);

        let mut submit = false;
        for field in LoanField::ALL {
            ui.label(self.field_label(field));
            let response = ui.add(
                egui::TextEdit::singleline(self.form.raw.field_mut(field))
                    .desired_width(f32::INFINITY),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            if let Some(kind) = self.form.field_error_kind(field) {
                ui.colored_label(ui.visuals().error_fg_color, self.tr.field_error(field, kind));
            }
            ui.add_space(8.0);
        }

        ui.label(self.tr.t(keys::FORM_TYPE));
        for ty in RepaymentType::ALL {
            let text = self.tr.repayment_type(ty).to_string();
            ui.radio_value(&mut self.form.raw.repayment_type, ty, text);
        }
        ui.add_space(16.0);

        let button = egui::Button::new(
            egui::RichText::new(self.tr.t(keys::FORM_SUBMIT))
                .strong()
                .color(egui::Color32::BLACK),
        )
        .fill(ACCENT)
        .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add(button).clicked() {
            submit = true;
        }

        if submit {
            // 오류는 필드 아래에 표시되므로 여기서는 무시한다
            let _ = self.form.submit();
        }
    }

    fn ui_results(&self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        match self.form.result() {
            Some(result) => {
                ui.label(
                    egui::RichText::new(tr.t(keys::RESULTS_TITLE))
                        .size(20.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.label(egui::RichText::new(tr.t(keys::RESULTS_DESCRIPTION)).color(MUTED));
                ui.add_space(16.0);
                egui::Frame::none()
                    .fill(RESULTS_CARD)
                    .rounding(8.0)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(tr.t(keys::RESULTS_MONTHLY)).color(MUTED));
                        ui.label(
                            egui::RichText::new(format_money(
                                &self.config.currency_symbol,
                                result.monthly_payment,
                            ))
                            .size(36.0)
                            .strong()
                            .color(ACCENT),
                        );
                        ui.separator();
                        ui.label(egui::RichText::new(tr.t(keys::RESULTS_TOTAL)).color(MUTED));
                        ui.label(
                            egui::RichText::new(format_money(
                                &self.config.currency_symbol,
                                result.total_repayment,
                            ))
                            .size(20.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                        );
                    });
            }
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(80.0);
                    ui.label(
                        egui::RichText::new(tr.t(keys::RESULTS_EMPTY_TITLE))
                            .size(20.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(egui::RichText::new(tr.t(keys::RESULTS_EMPTY_BODY)).color(MUTED));
                });
            }
        }
    }

    fn ui_language(&mut self, ui: &mut egui::Ui) {
        let before = self.lang_choice.clone();
        egui::ComboBox::from_label(self.tr.t(keys::SETTINGS_LANGUAGE))
            .selected_text(self.lang_choice.clone())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.lang_choice, "auto".to_string(), "auto");
                ui.selectable_value(&mut self.lang_choice, Language::En.as_code().to_string(), "English");
                ui.selectable_value(&mut self.lang_choice, Language::Ko.as_code().to_string(), "한국어");
            });
        if self.lang_choice != before {
            self.set_language(self.lang_choice.clone());
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.ui_language(ui);
        });

        egui::SidePanel::right("results")
            .resizable(false)
            .exact_width(ctx.screen_rect().width() * 0.5)
            .frame(egui::Frame::none().fill(RESULTS_BG).inner_margin(24.0))
            .show(ctx, |ui| {
                self.ui_results(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.ui_form(ui));
        });
    }
}
