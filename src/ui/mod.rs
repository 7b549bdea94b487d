pub mod layout;
mod menu;
mod quiz;
mod summary;

pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;

use crate::app::App;
use crate::models::AppState;
use ratatui::Frame;

/// Draw whichever screen `app.state` selects. Scroll offsets in `app` are
/// clamped to what the screen can show.
pub fn draw(f: &mut Frame, app: &mut App) {
    match app.state {
        AppState::Menu => draw_menu(f, app),
        AppState::Quiz => draw_quiz(f, app),
        AppState::QuizQuitConfirm => draw_quit_confirmation(f),
        AppState::Summary => {
            if let Some(report) = app.session.report() {
                draw_summary(f, report, &mut app.results_scroll);
            }
        }
    }
}
