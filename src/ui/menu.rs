use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
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

pub fn draw_menu(f: &mut Frame, app: &App) {
    let area = f.area();
    let error_height = if app.error.is_some() { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
            Constraint::Length(error_height),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Quiz Runner v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let file_items: Vec<ListItem> = if app.menu.files.is_empty() {
        vec![ListItem::new(format!(
            "No .json files found in {}",
            app.config.quiz_dir.display()
        ))
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        app.menu
            .files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default();
                let style = if i == app.menu.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(name).style(style)
            })
            .collect()
    };

    let file_list = List::new(file_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Question Sets"),
    );
    f.render_widget(file_list, chunks[1]);

    let settings = vec![
        Line::from(vec![
            Span::from("Quiz type:  "),
            Span::styled(
                app.menu.mode.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::from("Time limit: "),
            Span::styled(
                format!("{} min", app.menu.time_limit_minutes),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let settings = Paragraph::new(settings)
        .block(Block::default().borders(Borders::ALL).title("Settings"));
    f.render_widget(settings, chunks[2]);

    if let Some(error) = &app.error {
        let error = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title("Error"),
            );
        f.render_widget(error, chunks[3]);
    }

    let help_text = vec![Line::from(vec![
        key_hint("↑/↓"),
        Span::from(" Select  "),
        key_hint("m"),
        Span::from(" Quiz Type  "),
        key_hint("+/-"),
        Span::from(" Time  "),
        key_hint("r"),
        Span::from(" Rescan  "),
        key_hint("Enter"),
        Span::from(" Start  "),
        key_hint("Esc"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);
}
