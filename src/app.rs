use crate::config::{next_time_limit, previous_time_limit, QuizConfig};
use crate::error::Result;
use crate::loader::{get_quiz_files, load_quiz_file};
use crate::logger;
use crate::models::{AppState, QuestionSet, QuizMode, TimerEvent};
use crate::session::{Session, TickOutcome};
use crate::timer::Timer;
use crate::view::QuizView;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::path::PathBuf;

#[derive(Debug)]
pub struct MenuState {
    pub files: Vec<PathBuf>,
    pub selected: usize,
    pub mode: QuizMode,
    pub time_limit_minutes: u32,
}

impl MenuState {
    pub fn select_next(&mut self) {
        if self.selected < self.files.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn increase_time_limit(&mut self) {
        self.time_limit_minutes = next_time_limit(self.time_limit_minutes);
    }

    pub fn decrease_time_limit(&mut self) {
        self.time_limit_minutes = previous_time_limit(self.time_limit_minutes);
    }
}

/// Controller owning the session, its countdown and everything the screens
/// need. Timer callbacks only post `TimerEvent`s; the UI loop applies them
/// through `process_timer_events`, so session state is touched from one
/// thread only.
pub struct App {
    pub state: AppState,
    pub config: QuizConfig,
    pub menu: MenuState,
    pub session: Session,
    pub view: Option<QuizView>,
    pub current_index: usize,
    pub cursor_position: usize,
    /// Scroll offsets; the screens clamp them to their content.
    pub word_bank_scroll: u16,
    pub results_scroll: u16,
    pub error: Option<String>,
    pub should_quit: bool,
    timer: Timer,
    timer_tx: Sender<TimerEvent>,
    timer_rx: Receiver<TimerEvent>,
}

impl App {
    pub fn new(config: QuizConfig) -> Self {
        Self::with_timer(config, Timer::new())
    }

    pub fn with_timer(config: QuizConfig, timer: Timer) -> Self {
        let (timer_tx, timer_rx) = unbounded();
        let menu = MenuState {
            files: get_quiz_files(&config.quiz_dir),
            selected: 0,
            mode: config.mode,
            time_limit_minutes: config.time_limit_minutes,
        };
        Self {
            state: AppState::Menu,
            config,
            menu,
            session: Session::new(),
            view: None,
            current_index: 0,
            cursor_position: 0,
            word_bank_scroll: 0,
            results_scroll: 0,
            error: None,
            should_quit: false,
            timer,
            timer_tx,
            timer_rx,
        }
    }

    pub fn refresh_files(&mut self) {
        self.menu.files = get_quiz_files(&self.config.quiz_dir);
        if self.menu.selected >= self.menu.files.len() {
            self.menu.selected = self.menu.files.len().saturating_sub(1);
        }
    }

    pub fn display_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        logger::log(&format!("Error: {}", message));
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn selected_file(&self) -> Option<&PathBuf> {
        self.menu.files.get(self.menu.selected)
    }

    /// Load the highlighted file and start a quiz with it. Any failure is
    /// shown in the menu and leaves the session idle.
    pub fn start_selected(&mut self) -> bool {
        self.clear_error();
        let Some(path) = self.selected_file().cloned() else {
            let message = format!(
                "Please choose a JSON file! Put .json files in {}.",
                self.config.quiz_dir.display()
            );
            self.display_error(message);
            return false;
        };

        let started = load_quiz_file(&path).and_then(|questions| self.start_with(questions));
        match started {
            Ok(()) => true,
            Err(e) => {
                self.display_error(e.to_string());
                false
            }
        }
    }

    pub fn start_with(&mut self, questions: QuestionSet) -> Result<()> {
        self.stop_timer();
        let duration = self.menu.time_limit_minutes.saturating_mul(60);
        self.session.start(questions, self.menu.mode, duration)?;
        self.begin_attempt();
        Ok(())
    }

    fn begin_attempt(&mut self) {
        let (Some(questions), Some(mode), Some(seconds)) = (
            self.session.questions(),
            self.session.mode(),
            self.session.seconds_remaining(),
        ) else {
            return;
        };

        self.view = Some(QuizView::build(questions, mode, &mut rand::thread_rng()));
        self.current_index = 0;
        self.cursor_position = 0;
        self.word_bank_scroll = 0;
        self.results_scroll = 0;
        self.start_timer(seconds);
        self.state = AppState::Quiz;
    }

    fn start_timer(&mut self, seconds: u32) {
        let tick_tx = self.timer_tx.clone();
        let expire_tx = self.timer_tx.clone();
        self.timer.start(
            seconds,
            move |remaining| {
                let _ = tick_tx.send(TimerEvent::Tick(remaining));
            },
            move || {
                let _ = expire_tx.send(TimerEvent::Expired);
            },
        );
    }

    /// Cancel the countdown and drop any events it already queued.
    fn stop_timer(&mut self) {
        self.timer.stop();
        while self.timer_rx.try_recv().is_ok() {}
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn process_timer_events(&mut self) {
        while let Ok(event) = self.timer_rx.try_recv() {
            self.handle_timer_event(event);
        }
    }

    pub fn handle_timer_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick(_) => {
                if self.session.tick() == TickOutcome::Expired {
                    self.show_results();
                }
            }
            TimerEvent::Expired => {
                if self.session.is_active() {
                    logger::log("Timer expired before the session ran out");
                    self.session.submit();
                    self.show_results();
                }
            }
        }
    }

    pub fn submit(&mut self) {
        self.stop_timer();
        if self.session.submit().is_some() {
            self.state = AppState::Summary;
        }
    }

    fn show_results(&mut self) {
        self.stop_timer();
        if self.session.is_finished() {
            self.state = AppState::Summary;
        }
    }

    pub fn retry(&mut self) {
        if self.session.retry() {
            self.begin_attempt();
        }
    }

    /// Back to the menu. The timer is cancelled before the session is
    /// discarded so no tick can land on cleared state.
    pub fn go_home(&mut self) {
        self.stop_timer();
        self.session.reset();
        self.view = None;
        self.current_index = 0;
        self.cursor_position = 0;
        self.word_bank_scroll = 0;
        self.results_scroll = 0;
        self.clear_error();
        self.refresh_files();
        self.state = AppState::Menu;
    }

    pub fn quit(&mut self) {
        self.stop_timer();
        self.should_quit = true;
    }

    pub fn question_count(&self) -> usize {
        self.view.as_ref().map(QuizView::len).unwrap_or(0)
    }

    pub fn current_answer(&self) -> &str {
        self.session.answer(self.current_index).unwrap_or("")
    }

    pub fn go_to_question(&mut self, index: usize) {
        if index < self.question_count() {
            self.current_index = index;
            self.cursor_position = self.current_answer().chars().count();
        }
    }

    pub fn next_question(&mut self) {
        self.go_to_question(self.current_index + 1);
    }

    pub fn previous_question(&mut self) {
        if self.current_index > 0 {
            self.go_to_question(self.current_index - 1);
        }
    }

    pub fn record_current_answer(&mut self, value: String) -> bool {
        self.session.record_answer(self.current_index, value)
    }

    /// Choose option `option` of the current multiple-choice question.
    pub fn choose_option(&mut self, option: usize) -> bool {
        let Some(choice) = self
            .view
            .as_ref()
            .and_then(|view| view.questions.get(self.current_index))
            .and_then(|question| question.options.get(option))
            .cloned()
        else {
            return false;
        };
        self.record_current_answer(choice)
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.view.as_ref().and_then(|view| {
            view.option_index(self.current_index, self.session.answer(self.current_index))
        })
    }

    pub fn cycle_option(&mut self, forward: bool) {
        let count = self
            .view
            .as_ref()
            .and_then(|view| view.questions.get(self.current_index))
            .map(|question| question.options.len())
            .unwrap_or(0);
        if count == 0 {
            return;
        }
        let next = match (self.selected_option(), forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(current), true) => (current + 1) % count,
            (Some(current), false) => (current + count - 1) % count,
        };
        self.choose_option(next);
    }
}
