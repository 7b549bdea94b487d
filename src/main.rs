use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quiz_runner::{draw, handle_key, logger, App, QuizConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let config = QuizConfig::from_env().with_args(std::env::args());
    logger::init(&config.log_file);
    logger::log(&format!(
        "quiz-runner starting, quiz dir {}",
        config.quiz_dir.display()
    ));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exiting with error: {}", e));
    }
    result
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.process_timer_events();
        terminal.draw(|f| draw(f, app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            handle_key(app, key);
        }

        if app.should_quit {
            logger::log("quiz-runner exiting");
            return Ok(());
        }
    }
}
