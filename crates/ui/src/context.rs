use std::sync::Arc;

use elara_core::catalog::{GameCatalog, QuizCatalog};
use services::{GameService, GameServiceError, GameSettings, QuizService, QuizServiceError};

/// Page the window opens on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartPage {
    #[default]
    Home,
    Quiz,
    Games,
}

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn quiz_catalog(&self) -> Arc<QuizCatalog>;
    fn initial_subject(&self) -> Option<String>;
    fn game_settings(&self) -> GameSettings;

    fn start_page(&self) -> StartPage {
        StartPage::Home
    }
}

/// Shared, read-only inputs for every view. Each view builds its own session from it.
#[derive(Clone)]
pub struct AppContext {
    quiz_catalog: Arc<QuizCatalog>,
    game_catalog: GameCatalog,
    initial_subject: Option<String>,
    game_settings: GameSettings,
    start_page: StartPage,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_catalog: app.quiz_catalog(),
            game_catalog: GameCatalog::builtin(),
            initial_subject: app.initial_subject(),
            game_settings: app.game_settings(),
            start_page: app.start_page(),
        }
    }

    #[must_use]
    pub fn quiz_catalog(&self) -> Arc<QuizCatalog> {
        Arc::clone(&self.quiz_catalog)
    }

    #[must_use]
    pub fn game_catalog(&self) -> GameCatalog {
        self.game_catalog
    }

    #[must_use]
    pub fn initial_subject(&self) -> Option<&str> {
        self.initial_subject.as_deref()
    }

    #[must_use]
    pub fn game_settings(&self) -> GameSettings {
        self.game_settings
    }

    #[must_use]
    pub fn start_page(&self) -> StartPage {
        self.start_page
    }

    /// Open a fresh quiz session for one view.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError` if the configured subject is unknown.
    pub fn start_quiz(&self) -> Result<QuizService, QuizServiceError> {
        QuizService::new(self.quiz_catalog(), self.initial_subject())
    }

    /// Open a fresh games session for one view.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError` if a memory board cannot be dealt.
    pub fn start_games(&self) -> Result<GameService, GameServiceError> {
        GameService::new(self.game_catalog, self.game_settings)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
