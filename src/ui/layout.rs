use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub word_bank_area: Option<Rect>,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub score_area: Rect,
    pub results_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect, with_word_bank: bool) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(6),
            Constraint::Length(4),
        ])
        .split(area);

    let (question_area, word_bank_area) = if with_word_bank {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);
        (rows[0], Some(rows[1]))
    } else {
        (chunks[1], None)
    };

    QuizLayout {
        header_area: chunks[0],
        question_area,
        answer_area: chunks[2],
        word_bank_area,
        help_area: chunks[3],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        score_area: chunks[1],
        results_area: chunks[2],
        footer_area: chunks[3],
    }
}
