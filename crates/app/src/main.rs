use std::path::Path;
use std::process;
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use elara_core::catalog::QuizCatalog;
use elara_core::model::QuizError;
use services::{GameSettings, load_question_bank};
use tracing_subscriber::EnvFilter;
use ui::{App, StartPage, UiApp, build_app_context};

mod config;

use config::{Action, Cli, LaunchConfig};

struct DesktopApp {
    quiz_catalog: Arc<QuizCatalog>,
    initial_subject: Option<String>,
    game_settings: GameSettings,
    start_page: StartPage,
}

impl UiApp for DesktopApp {
    fn quiz_catalog(&self) -> Arc<QuizCatalog> {
        Arc::clone(&self.quiz_catalog)
    }

    fn initial_subject(&self) -> Option<String> {
        self.initial_subject.clone()
    }

    fn game_settings(&self) -> GameSettings {
        self.game_settings
    }

    fn start_page(&self) -> StartPage {
        self.start_page
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Built-in subjects unless a question bank was given.
fn resolve_catalog(path: Option<&Path>) -> Result<QuizCatalog, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(load_question_bank(path)?),
        None => Ok(QuizCatalog::builtin()),
    }
}

/// One line per subject: name and question count.
fn describe_catalog(catalog: &QuizCatalog) -> Vec<String> {
    catalog
        .subjects()
        .map(|subject| format!("{}: {} questions", subject.name(), subject.questions().len()))
        .collect()
}

fn check_bank(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_question_bank(path)?;
    println!("{} is valid ({} subjects)", path.display(), catalog.len());
    for line in describe_catalog(&catalog) {
        println!("  {line}");
    }
    Ok(())
}

fn launch(config: LaunchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = resolve_catalog(config.question_bank.as_deref())?;
    if let Some(subject) = config.subject.as_deref() {
        if !catalog.contains(subject) {
            return Err(QuizError::UnknownSubject(subject.to_string()).into());
        }
    }

    tracing::info!(
        subjects = catalog.len(),
        start = ?config.start_page,
        seeded = config.game_settings.random.is_seeded(),
        "launching desktop window"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_catalog: Arc::new(catalog),
        initial_subject: config.subject,
        game_settings: config.game_settings,
        start_page: config.start_page,
    });
    let context = build_app_context(&app);

    // Some dev setups default the window to always-on-top; turn it off explicitly.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("ELARA Interactive Learning")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.into_action() {
        Action::CheckBank(path) => check_bank(&path),
        Action::Launch(config) => launch(config),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        process::exit(2);
    }
}
