use crate::app::App;
use crate::models::{AppState, QuizMode};
use crate::utils::{insert_char_at, remove_char_at, remove_char_before};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by PgUp/PgDn.
pub const SCROLL_PAGE: u16 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.state {
        AppState::Menu => handle_menu_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::QuizQuitConfirm => handle_quit_confirm_input(app, key),
        AppState::Summary => handle_summary_input(app, key),
    }
}

pub fn handle_menu_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.menu.select_previous(),
        KeyCode::Down => app.menu.select_next(),
        KeyCode::Char('m') | KeyCode::Tab => app.menu.toggle_mode(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            app.menu.increase_time_limit()
        }
        KeyCode::Char('-') | KeyCode::Left => app.menu.decrease_time_limit(),
        KeyCode::Char('r') => {
            app.clear_error();
            app.refresh_files();
        }
        KeyCode::Enter => {
            app.start_selected();
        }
        KeyCode::Esc | KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

pub fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('s') {
            app.submit();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.state = AppState::QuizQuitConfirm,
        KeyCode::Down | KeyCode::Tab => app.next_question(),
        KeyCode::Up | KeyCode::BackTab => app.previous_question(),
        KeyCode::PageDown => app.word_bank_scroll = app.word_bank_scroll.saturating_add(SCROLL_PAGE),
        KeyCode::PageUp => app.word_bank_scroll = app.word_bank_scroll.saturating_sub(SCROLL_PAGE),
        _ => match app.session.mode() {
            Some(QuizMode::MultipleChoice) => handle_choice_key(app, key),
            Some(QuizMode::FillInBlank) => handle_text_key(app, key),
            None => {}
        },
    }
}

fn handle_choice_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right => app.cycle_option(true),
        KeyCode::Left => app.cycle_option(false),
        KeyCode::Char(c @ '1'..='4') => {
            let option = c as usize - '1' as usize;
            app.choose_option(option);
        }
        KeyCode::Enter => app.next_question(),
        _ => {}
    }
}

fn handle_text_key(app: &mut App, key: KeyEvent) {
    let mut text = app.current_answer().to_string();
    let len = text.chars().count();
    let cursor = app.cursor_position.min(len);

    match key.code {
        KeyCode::Char(c) => {
            app.cursor_position = insert_char_at(&mut text, cursor, c);
            app.record_current_answer(text);
        }
        KeyCode::Backspace => {
            if cursor > 0 {
                app.cursor_position = remove_char_before(&mut text, cursor);
                app.record_current_answer(text);
            }
        }
        KeyCode::Delete => {
            if cursor < len {
                remove_char_at(&mut text, cursor);
                app.record_current_answer(text);
            }
        }
        KeyCode::Left => app.cursor_position = cursor.saturating_sub(1),
        KeyCode::Right => app.cursor_position = (cursor + 1).min(len),
        KeyCode::Home => app.cursor_position = 0,
        KeyCode::End => app.cursor_position = len,
        KeyCode::Enter => app.next_question(),
        _ => {}
    }
}

pub fn handle_quit_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.go_home(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            // the countdown kept running underneath
            if app.session.is_active() {
                app.state = AppState::Quiz;
            } else {
                app.state = AppState::Summary;
            }
        }
        _ => {}
    }
}

pub fn handle_summary_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.retry(),
        KeyCode::Char('m') => app.go_home(),
        KeyCode::Esc | KeyCode::Char('q') => app.quit(),
        KeyCode::Down => app.results_scroll = app.results_scroll.saturating_add(1),
        KeyCode::Up => app.results_scroll = app.results_scroll.saturating_sub(1),
        KeyCode::PageDown => app.results_scroll = app.results_scroll.saturating_add(SCROLL_PAGE),
        KeyCode::PageUp => app.results_scroll = app.results_scroll.saturating_sub(SCROLL_PAGE),
        _ => {}
    }
}
