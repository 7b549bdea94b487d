use crate::app::App;
use crate::models::QuizMode;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{calculate_max_scroll, cursor_column};
use crate::view::{format_remaining, is_time_warning, pack_word_bank, QuizView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key_hint(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_quiz(f: &mut Frame, app: &mut App) {
    let Some(view) = app.view.as_ref() else {
        return;
    };
    let Some(question) = view.questions.get(app.current_index) else {
        return;
    };
    let layout = calculate_quiz_chunks(f.area(), view.word_bank.is_some());

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(layout.header_area);

    let answered = app.session.answers().map(|a| a.len()).unwrap_or(0);
    let progress = format!(
        "Question {} / {} - {} ({} answered)",
        question.number,
        view.len(),
        view.mode.label(),
        answered
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, header_chunks[0]);

    let remaining = app.session.seconds_remaining().unwrap_or(0);
    let timer_style = if remaining <= 10 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if is_time_warning(remaining) {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let timer = Paragraph::new(format_remaining(remaining))
        .style(timer_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Time"));
    f.render_widget(timer, header_chunks[1]);

    let question_text = Text::from(question.text.as_str());
    let question_block = Paragraph::new(question_text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Question {}", question.number)),
        );
    f.render_widget(question_block, layout.question_area);

    if let (Some(area), Some(words)) = (layout.word_bank_area, view.word_bank.as_ref()) {
        let rows = pack_word_bank(words, area.width.saturating_sub(2) as usize);
        let visible_height = area.height.saturating_sub(2) as usize;
        let max_scroll = calculate_max_scroll(rows.len(), visible_height);
        let scroll = app.word_bank_scroll.min(max_scroll);
        app.word_bank_scroll = scroll;

        let title = if max_scroll > 0 {
            "Word Bank (PgUp/PgDn)"
        } else {
            "Word Bank"
        };
        let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
        let bank = Paragraph::new(lines)
            .style(Style::default().fg(Color::Gray))
            .scroll((scroll, 0))
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(bank, area);
    }

    match view.mode {
        QuizMode::MultipleChoice => draw_options(f, app, view, layout.answer_area),
        QuizMode::FillInBlank => {
            let answer = app.current_answer();
            let content = if answer.is_empty() {
                Text::from(Span::styled(
                    "[Type your answer here...]",
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                Text::from(answer)
            };
            let input = Paragraph::new(content)
                .block(Block::default().borders(Borders::ALL).title("Your Answer"));
            f.render_widget(input, layout.answer_area);

            let column = cursor_column(answer, app.cursor_position) as u16;
            let max_x = layout.answer_area.width.saturating_sub(2);
            let cursor_x = layout.answer_area.x + 1 + column.min(max_x);
            f.set_cursor_position((cursor_x, layout.answer_area.y + 1));
        }
    }

    let mut basic_spans = vec![key_hint("↑/↓"), Span::from(" Question  ")];
    match view.mode {
        QuizMode::MultipleChoice => basic_spans.extend([
            key_hint("←/→ 1-4"),
            Span::from(" Choose  "),
        ]),
        QuizMode::FillInBlank => basic_spans.extend([
            key_hint("Type"),
            Span::from(" Answer  "),
        ]),
    }
    basic_spans.extend([key_hint("Esc"), Span::from(" Quit to Menu")]);

    let help_text = vec![
        Line::from(basic_spans),
        Line::from(vec![
            key_hint("Ctrl+S"),
            Span::from(" Submit  "),
            key_hint("Ctrl+C"),
            Span::from(" Exit App"),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_options(f: &mut Frame, app: &App, view: &QuizView, area: ratatui::layout::Rect) {
    let selected = app.selected_option();
    let Some(question) = view.questions.get(app.current_index) else {
        return;
    };

    let lines: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let chosen = selected == Some(i);
            let marker = if chosen { "(•)" } else { "( )" };
            let style = if chosen {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{} {}. {}", marker, i + 1, option), style))
        })
        .collect();

    let options = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Return to main menu? Your answers will be discarded.")
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        key_hint("Ctrl+C"),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
