use crate::models::QuizMode;
use std::path::PathBuf;

pub const DEFAULT_QUIZ_DIR: &str = "quizzes";
pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";
pub const DEFAULT_TIME_LIMIT_MINUTES: u32 = 10;

/// Time limits offered in the menu, in minutes.
pub const TIME_LIMIT_PRESETS: [u32; 9] = [1, 2, 5, 10, 15, 20, 30, 45, 60];

#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    pub quiz_dir: PathBuf,
    pub time_limit_minutes: u32,
    pub mode: QuizMode,
    pub log_file: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            quiz_dir: PathBuf::from(DEFAULT_QUIZ_DIR),
            time_limit_minutes: DEFAULT_TIME_LIMIT_MINUTES,
            mode: QuizMode::MultipleChoice,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl QuizConfig {
    /// Read `QUIZ_DIR`, `QUIZ_TIME_LIMIT`, `QUIZ_MODE` and `QUIZ_LOG_FILE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let quiz_dir = lookup("QUIZ_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.quiz_dir);

        let time_limit_minutes = lookup("QUIZ_TIME_LIMIT")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|minutes| *minutes > 0)
            .unwrap_or(defaults.time_limit_minutes);

        let mode = lookup("QUIZ_MODE")
            .and_then(|raw| QuizMode::from_name(&raw))
            .unwrap_or(defaults.mode);

        let log_file = lookup("QUIZ_LOG_FILE")
            .filter(|file| !file.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);

        Self {
            quiz_dir,
            time_limit_minutes,
            mode,
            log_file,
        }
    }

    /// A positional command line argument overrides the quiz directory.
    pub fn with_args<I: IntoIterator<Item = String>>(mut self, args: I) -> Self {
        if let Some(dir) = args.into_iter().nth(1) {
            self.quiz_dir = PathBuf::from(dir);
        }
        self
    }
}

pub fn next_time_limit(current: u32) -> u32 {
    TIME_LIMIT_PRESETS
        .iter()
        .copied()
        .find(|preset| *preset > current)
        .unwrap_or(current)
}

pub fn previous_time_limit(current: u32) -> u32 {
    TIME_LIMIT_PRESETS
        .iter()
        .rev()
        .copied()
        .find(|preset| *preset < current)
        .unwrap_or(current)
}
