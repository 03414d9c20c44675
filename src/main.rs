use std::process::ExitCode;

use clap::Parser;
use mortgage_calculator::{app, config, i18n, mortgage::RepaymentType, ui_cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "mortgage_calculator")]
#[command(version)]
#[command(about = "Monthly mortgage repayment calculator")]
struct Args {
    /// Mortgage amount (principal)
    #[arg(short, long)]
    amount: Option<String>,

    /// Mortgage term in years
    #[arg(short, long)]
    term: Option<String>,

    /// Annual interest rate in percent
    #[arg(short, long)]
    rate: Option<String>,

    /// Repayment type: repayment | interest-only
    #[arg(long = "type")]
    repayment_type: Option<RepaymentType>,

    /// UI language: auto | en | ko
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match try_run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: Args) -> Result<ExitCode, app::AppError> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    if args.amount.is_none() && args.term.is_none() && args.rate.is_none() {
        app::run(&mut cfg, &tr)?;
        return Ok(ExitCode::SUCCESS);
    }

    let (form, status) = app::calculate_once(
        args.amount,
        args.term,
        args.rate,
        args.repayment_type.unwrap_or(cfg.default_repayment_type),
    );
    ui_cli::print_outcome(&tr, &cfg, &form);
    Ok(ExitCode::from(status.exit_code()))
}
