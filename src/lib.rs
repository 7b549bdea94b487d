pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod logger;
pub mod models;
pub mod scorer;
pub mod session;
pub mod shuffle;
pub mod timer;
pub mod ui;
pub mod utils;
pub mod validator;
pub mod view;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use app::App;
pub use config::QuizConfig;
pub use error::{QuizError, Result};
pub use input::handle_key;
pub use loader::{get_quiz_files, load_quiz_file, parse_document};
pub use models::{
    AnswerRecord, AppState, Question, QuestionResult, QuestionSet, QuizMode, ScoreReport,
    SessionState, TimerEvent,
};
pub use scorer::score;
pub use session::{Session, TickOutcome};
pub use shuffle::{build_word_bank, shuffle};
pub use timer::Timer;
pub use ui::{draw, draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
pub use validator::validate;
pub use view::QuizView;
