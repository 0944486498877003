use std::path::PathBuf;

use clap::{Parser, Subcommand};

use elara_core::RandomSource;
use elara_core::model::MemoryScoring;
use services::GameSettings;
use ui::StartPage;

#[derive(Debug, Parser)]
#[command(name = "elara", version, about = "ELARA interactive learning: quizzes and games")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Question-bank JSON that replaces the built-in quiz subjects
    #[arg(long, env = "ELARA_QUESTION_BANK", global = true)]
    pub question_bank: Option<PathBuf>,

    /// Subject the quiz opens on (default: first subject)
    #[arg(long, env = "ELARA_SUBJECT", global = true)]
    pub subject: Option<String>,

    /// Seed for reproducible game boards and math questions
    #[arg(long, env = "ELARA_SEED", global = true)]
    pub seed: Option<u64>,

    /// Score memory match by matched pairs instead of reveals
    #[arg(long, env = "ELARA_PAIR_MATCHING", global = true)]
    pub pair_matching: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the window on the quiz (default)
    Quiz,

    /// Open the window on the games
    Games,

    /// Validate a question-bank file and list its subjects
    CheckBank {
        /// Path to the question-bank JSON
        path: PathBuf,
    },
}

/// Settings for one desktop launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub start_page: StartPage,
    pub question_bank: Option<PathBuf>,
    pub subject: Option<String>,
    pub game_settings: GameSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Launch(LaunchConfig),
    CheckBank(PathBuf),
}

impl Cli {
    #[must_use]
    pub fn into_action(self) -> Action {
        let start_page = match self.command {
            None | Some(Command::Quiz) => StartPage::Quiz,
            Some(Command::Games) => StartPage::Games,
            Some(Command::CheckBank { path }) => return Action::CheckBank(path),
        };

        let random = self.seed.map_or_else(RandomSource::entropy, RandomSource::seeded);
        let memory_scoring = if self.pair_matching {
            MemoryScoring::PairMatch
        } else {
            MemoryScoring::RevealCount
        };

        Action::Launch(LaunchConfig {
            start_page,
            question_bank: self.question_bank,
            subject: self.subject,
            game_settings: GameSettings {
                random,
                memory_scoring,
            },
        })
    }
}
