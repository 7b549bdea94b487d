use crate::models::ScoreReport;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::{calculate_max_scroll, truncate_string};
use crate::view::{answer_line, format_percentage, format_score};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_summary(f: &mut Frame, report: &ScoreReport, scroll: &mut u16) {
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new("Quiz Results")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let score_color = if report.percentage >= 80.0 {
        Color::Green
    } else if report.percentage >= 50.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    let score_text = vec![
        Line::from(Span::styled(
            format_score(report),
            Style::default()
                .fg(score_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format_percentage(report)),
    ];
    let score = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(score, layout.score_area);

    // no wrapping: every line is one row, cut to the inner width
    let inner_width = layout.results_area.width.saturating_sub(2) as usize;
    let fit = |lead: &str, prefix: &str, text: &str| {
        let budget = inner_width.saturating_sub(lead.width() + prefix.width());
        format!("{}{}", prefix, truncate_string(text, budget))
    };

    let mut results_text = Text::default();
    for (i, result) in report.results.iter().enumerate() {
        let (status, color) = if result.is_correct {
            ("✓ Correct", Color::Green)
        } else {
            ("✗ Incorrect", Color::Red)
        };
        let heading = format!("  Question {}. ", i + 1);
        results_text.push_line(Line::from(vec![
            Span::styled(
                status,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::from(fit(status, &heading, &result.question)),
        ]));
        results_text.push_line(Line::from(fit(
            "",
            "   Your answer: ",
            &answer_line(result),
        )));
        if !result.is_correct {
            results_text.push_line(Line::from(Span::styled(
                fit("", "   Correct answer: ", &result.correct_answer),
                Style::default().fg(Color::Green),
            )));
        }
        results_text.push_line(Line::from(""));
    }

    let visible_height = layout.results_area.height.saturating_sub(2) as usize;
    let max_scroll = calculate_max_scroll(results_text.lines.len(), visible_height);
    *scroll = (*scroll).min(max_scroll);

    let results = Paragraph::new(results_text)
        .scroll((*scroll, 0))
        .block(Block::default().borders(Borders::ALL).title("Answers"));
    f.render_widget(results, layout.results_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Retry  "),
        Span::styled(
            "↑/↓ PgUp/PgDn",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Scroll  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Main Menu  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
