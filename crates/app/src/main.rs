use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{parse_sample_size, parse_seed, parse_timer};
use services::{AppServices, BankSource, Clock, ConfigError, QuizConfig, QuizSession};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const ENV_BANK_PATH: &str = "QUIZ_BANK_PATH";
const ENV_SAMPLE_SIZE: &str = "QUIZ_SAMPLE_SIZE";
const ENV_TIMER_SECS: &str = "QUIZ_TIMER_SECS";
const ENV_SEED: &str = "QUIZ_SEED";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyBankPath { source: &'static str },
    Invalid(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyBankPath { source } => write!(f, "{source} cannot be empty"),
            ArgsError::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        ArgsError::Invalid(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn bank_source(raw: String, source: &'static str) -> Result<BankSource, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::EmptyBankPath { source });
    }
    Ok(BankSource::File(PathBuf::from(raw)))
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn new_session(&self) -> QuizSession {
        self.services.new_session()
    }

    fn bank_size(&self) -> usize {
        self.services.bank().len()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(QuizConfig),
    Help,
}

fn usage() -> String {
    format!(
        "Usage:
  cargo run -p app -- [--bank <path>] [--sample-size <n>] [--timer <secs|off>] [--seed <u64>]

Defaults:
  --bank         built-in question bank
  --sample-size  20
  --timer        off
  --seed         random

Environment:
  {ENV_BANK_PATH}, {ENV_SAMPLE_SIZE}, {ENV_TIMER_SECS}, {ENV_SEED}, RUST_LOG
"
    )
}

/// What `main` prints for a failed run. Argument errors also get the usage text.
fn error_report(err: &(dyn std::error::Error + 'static)) -> String {
    if err.downcast_ref::<ArgsError>().is_some() {
        format!("{err}\n{}", usage())
    } else {
        format!("{err}\n")
    }
}

/// Flags win over environment variables, which win over defaults.
fn parse_args(
    args: &mut impl Iterator<Item = String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Command, ArgsError> {
    let mut config = QuizConfig::default();

    if let Some(raw) = env(ENV_BANK_PATH) {
        config.bank = bank_source(raw, ENV_BANK_PATH)?;
    }
    if let Some(raw) = env(ENV_SAMPLE_SIZE) {
        config.sample_size = parse_sample_size(ENV_SAMPLE_SIZE, &raw)?;
    }
    if let Some(raw) = env(ENV_TIMER_SECS) {
        config.timer = parse_timer(ENV_TIMER_SECS, &raw)?;
    }
    if let Some(raw) = env(ENV_SEED) {
        config.seed = Some(parse_seed(ENV_SEED, &raw)?);
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bank" => {
                let value = require_value(args, "--bank")?;
                config.bank = bank_source(value, "--bank")?;
            }
            "--sample-size" => {
                let value = require_value(args, "--sample-size")?;
                config.sample_size = parse_sample_size("--sample-size", &value)?;
            }
            "--timer" => {
                let value = require_value(args, "--timer")?;
                config.timer = parse_timer("--timer", &value)?;
            }
            "--seed" => {
                let value = require_value(args, "--seed")?;
                config.seed = Some(parse_seed("--seed", &value)?);
            }
            "--help" | "-h" => return Ok(Command::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Command::Run(config.validate()?))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,app=info,services=info,ui=info"));
    // Another subscriber may already be installed; keep it.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let command = parse_args(&mut argv, |key| std::env::var(key).ok())?;
    let config = match command {
        Command::Help => {
            eprint!("{}", usage());
            return Ok(());
        }
        Command::Run(config) => config,
    };

    let services = AppServices::new(config, Clock::default())?;
    info!(bank = services.bank().len(), "launching quiz window");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Some tao setups default to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Grammar Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprint!("{}", error_report(err.as_ref()));
        std::process::exit(2);
    }
}
