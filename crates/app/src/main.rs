use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{QuizSettings, SettingsError};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, Parser)]
#[command(name = "pair-recall", version, about = "Timed word-pair recall quiz")]
struct Args {
    /// Milliseconds each pair stays on screen while studying.
    #[arg(long = "study-ms", env = "RECALL_STUDY_MS", default_value_t = 3000)]
    study_ms: u64,

    /// Pre-fills the week input.
    #[arg(long, env = "RECALL_WEEK")]
    week: Option<String>,

    /// Tracing filter, e.g. `info` or `services=debug`.
    #[arg(long = "log", env = "RUST_LOG", default_value = "info")]
    log: String,
}

impl Args {
    fn quiz_settings(&self) -> Result<QuizSettings, StartupError> {
        Ok(QuizSettings::from_millis(self.study_ms)?)
    }

    fn initial_week(&self) -> Option<String> {
        self.week
            .as_deref()
            .map(str::trim)
            .filter(|week| !week.is_empty())
            .map(str::to_string)
    }
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("invalid --study-ms value: {0}")]
    Settings(#[from] SettingsError),
    #[error("invalid --log filter {raw:?}: {source}")]
    LogFilter {
        raw: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to install the log subscriber: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

struct DesktopApp {
    settings: QuizSettings,
    initial_week: Option<String>,
}

impl UiApp for DesktopApp {
    fn quiz_settings(&self) -> QuizSettings {
        self.settings
    }

    fn initial_week(&self) -> Option<String> {
        self.initial_week.clone()
    }
}

fn init_tracing(filter: &str) -> Result<(), StartupError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|source| StartupError::LogFilter {
        raw: filter.to_string(),
        source,
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(StartupError::Logging)
}

fn run(args: &Args) -> Result<(), StartupError> {
    init_tracing(&args.log)?;
    let settings = args.quiz_settings()?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        settings,
        initial_week: args.initial_week(),
    });
    let context = build_app_context(&app);
    info!(
        study_interval = ?settings.study_interval(),
        week = ?args.initial_week(),
        "launching pair recall"
    );

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Pair Recall")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
