#[cfg(test)]
mod ui_integration_tests {
    use crate::config::QuizConfig;
    use crate::input::handle_key;
    use crate::models::{sample_set, QuizMode, TimerEvent};
    use crate::session::{Session, TickOutcome};
    use crate::timer::Timer;
    use crate::{draw, App, AppState};
    use crossbeam_channel::unbounded;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    const CAPITALS: &str = r#"{
        "results": [
            {
                "question": "What is the capital of France?",
                "correct_answer": "Paris",
                "incorrect_answers": ["Lyon", "Marseille", "Nice"]
            },
            {
                "question": "What is the capital of Japan?",
                "correct_answer": "Tokyo",
                "incorrect_answers": ["Osaka", "Kyoto", "Nagoya"]
            }
        ]
    }"#;

    fn app_for_dir(dir: &Path) -> App {
        let config = QuizConfig {
            quiz_dir: dir.to_path_buf(),
            ..QuizConfig::default()
        };
        App::with_timer(config, Timer::with_interval(Duration::from_secs(3600)))
    }

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_menu_lists_files_and_settings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("capitals.json"), CAPITALS).unwrap();
        fs::write(dir.path().join("ignored.txt"), "nope").unwrap();
        let mut app = app_for_dir(dir.path());

        let screen = render(&mut app);
        assert!(screen.contains("Quiz Runner"));
        assert!(screen.contains("capitals.json"));
        assert!(!screen.contains("ignored.txt"));
        assert!(screen.contains("Multiple Choice"));
        assert!(screen.contains("10 min"));
    }

    #[test]
    fn test_full_multiple_choice_round() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("capitals.json"), CAPITALS).unwrap();
        let mut app = app_for_dir(dir.path());

        assert!(app.start_selected());
        assert_eq!(app.state, AppState::Quiz);
        let screen = render(&mut app);
        assert!(screen.contains("What is the capital of France?"));
        assert!(screen.contains("10:00"));
        assert!(screen.contains("Paris"));

        let paris = app.view.as_ref().unwrap().option_index(0, Some("Paris")).unwrap();
        app.choose_option(paris);
        app.next_question();
        let osaka = app.view.as_ref().unwrap().option_index(1, Some("Osaka")).unwrap();
        app.choose_option(osaka);
        app.submit();

        assert_eq!(app.state, AppState::Summary);
        let report = app.session.report().unwrap();
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.total, 2);
        assert_eq!(report.percentage, 50.0);

        let screen = render(&mut app);
        assert!(screen.contains("1/2"));
        assert!(screen.contains("50.0% correct"));
        assert!(screen.contains("Correct answer: Tokyo"));
    }

    #[test]
    fn test_fill_in_blank_shows_word_bank() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("capitals.json"), CAPITALS).unwrap();
        let mut app = app_for_dir(dir.path());
        app.menu.mode = QuizMode::FillInBlank;
        assert!(app.start_selected());

        let screen = render(&mut app);
        assert!(screen.contains("Word Bank"));
        assert!(screen.contains("Marseille"));
        assert!(screen.contains("[Type your answer here...]"));

        app.record_current_answer("  Paris  ".to_string());
        app.submit();
        let screen = render(&mut app);
        assert!(screen.contains("Not answered"));
        assert_eq!(app.session.report().unwrap().correct_count, 1);
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::empty()));
    }

    /// Words on screen, split on everything but letters and digits.
    fn screen_words(screen: &str) -> Vec<String> {
        screen
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_long_results_scroll_to_the_last_question() {
        let mut app = app_for_dir(&PathBuf::from("no/such/dir"));
        app.start_with(sample_set(20)).unwrap();
        app.submit();
        assert_eq!(app.state, AppState::Summary);

        let first_page = render(&mut app);
        assert!(first_page.contains("Question 1. "));
        assert!(!first_page.contains("Question 20. "));

        let mut seen = vec![false; 20];
        loop {
            let screen = render(&mut app);
            for (i, flag) in seen.iter_mut().enumerate() {
                if screen.contains(&format!("Question {}. ", i + 1)) {
                    *flag = true;
                }
            }
            let before = app.results_scroll;
            press(&mut app, KeyCode::PageDown);
            render(&mut app);
            if app.results_scroll == before {
                break;
            }
        }
        assert!(seen.iter().all(|flag| *flag), "{:?}", seen);

        let last_page = render(&mut app);
        assert!(last_page.contains("Question 20. "));
        assert!(last_page.contains("Correct answer: right19"));

        // the offset is clamped, so one step up moves the view at once
        let bottom = app.results_scroll;
        press(&mut app, KeyCode::Up);
        assert_eq!(app.results_scroll, bottom - 1);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.results_scroll, 0);
    }

    #[test]
    fn test_word_bank_shows_every_entry() {
        let mut app = app_for_dir(&PathBuf::from("no/such/dir"));
        app.menu.mode = QuizMode::FillInBlank;
        app.start_with(sample_set(20)).unwrap();
        let bank = app.view.as_ref().unwrap().word_bank.clone().unwrap();
        assert_eq!(bank.len(), 80);

        let mut shown = Vec::new();
        loop {
            shown.extend(screen_words(&render(&mut app)));
            let before = app.word_bank_scroll;
            press(&mut app, KeyCode::PageDown);
            render(&mut app);
            if app.word_bank_scroll == before {
                break;
            }
        }
        for word in &bank {
            assert!(shown.contains(word), "{} missing from the word bank", word);
        }
    }

    #[test]
    fn test_invalid_file_reports_error_in_menu() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("broken.json"),
            r#"{"results": [{"question": "Q", "correct_answer": "A", "incorrect_answers": ["x"]}]}"#,
        )
        .unwrap();
        let mut app = app_for_dir(dir.path());

        assert!(!app.start_selected());
        assert_eq!(app.state, AppState::Menu);
        assert!(app.session.is_idle());
        let screen = render(&mut app);
        assert!(screen.contains("Question 1 needs exactly 3 incorrect_answers."));

        // fixing the file and retrying clears the error
        fs::write(dir.path().join("broken.json"), CAPITALS).unwrap();
        assert!(app.start_selected());
        assert!(app.error.is_none());
    }

    #[test]
    fn test_malformed_json_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "{ nope").unwrap();
        let mut app = app_for_dir(dir.path());
        assert!(!app.start_selected());
        assert!(app.error.as_deref().unwrap().starts_with("Could not parse JSON file"));
    }

    #[test]
    fn test_quit_confirmation_screen() {
        let mut app = app_for_dir(&PathBuf::from("no/such/dir"));
        app.start_with(sample_set(1)).unwrap();
        app.state = AppState::QuizQuitConfirm;
        let screen = render(&mut app);
        assert!(screen.contains("Return to main menu?"));
    }

    #[test]
    fn test_timer_warning_is_rendered() {
        let mut app = app_for_dir(&PathBuf::from("no/such/dir"));
        app.menu.time_limit_minutes = 1;
        app.start_with(sample_set(1)).unwrap();
        app.handle_timer_event(TimerEvent::Tick(59));
        assert_eq!(app.session.seconds_remaining(), Some(59));
        assert!(render(&mut app).contains("0:59"));
    }

    #[test]
    fn test_one_second_quiz_expires_after_first_timer_tick() {
        let mut session = Session::new();
        session
            .start(sample_set(3), QuizMode::MultipleChoice, 1)
            .unwrap();
        session.record_answer(2, "right2");

        let (tx, rx) = unbounded();
        let expire_tx = tx.clone();
        let mut timer = Timer::with_interval(Duration::from_millis(10));
        timer.start(
            1,
            move |remaining| {
                let _ = tx.send(TimerEvent::Tick(remaining));
            },
            move || {
                let _ = expire_tx.send(TimerEvent::Expired);
            },
        );

        let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(first, TimerEvent::Tick(0));
        assert_eq!(session.tick(), TickOutcome::Expired);
        assert!(session.is_finished());
        assert_eq!(session.report().unwrap().correct_count, 1);

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(2)).unwrap(),
            TimerEvent::Expired
        );
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn test_live_timer_drives_app_through_events() {
        let config = QuizConfig {
            quiz_dir: PathBuf::from("no/such/dir"),
            ..QuizConfig::default()
        };
        let mut app = App::with_timer(config, Timer::with_interval(Duration::from_millis(5)));
        app.menu.time_limit_minutes = 1;
        app.start_with(sample_set(2)).unwrap();

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while app.state == AppState::Quiz && std::time::Instant::now() < deadline {
            app.process_timer_events();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(app.state, AppState::Summary);
        assert!(app.session.is_finished());
        assert!(!app.timer_running());
    }
}
