use crate::models::{QuestionResult, QuestionSet, QuizMode, ScoreReport};
use crate::shuffle::{build_word_bank, shuffled_options};
use crate::utils::truncate_string;
use rand::Rng;
use unicode_width::UnicodeWidthStr;

pub const WARNING_THRESHOLD_SECONDS: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub number: usize,
    pub text: String,
    /// Shuffled choices; empty in fill-in-the-blank mode.
    pub options: Vec<String>,
}

/// Display-ready projection of an attempt. Built once per start or retry so
/// the option order stays put while the quiz is running.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub mode: QuizMode,
    pub questions: Vec<QuestionView>,
    pub word_bank: Option<Vec<String>>,
}

impl QuizView {
    pub fn build<R: Rng + ?Sized>(questions: &QuestionSet, mode: QuizMode, rng: &mut R) -> Self {
        let question_views = questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionView {
                number: index + 1,
                text: question.question.clone(),
                options: match mode {
                    QuizMode::MultipleChoice => shuffled_options(question, rng),
                    QuizMode::FillInBlank => Vec::new(),
                },
            })
            .collect();

        let word_bank = match mode {
            QuizMode::FillInBlank => Some(build_word_bank(questions, rng)),
            QuizMode::MultipleChoice => None,
        };

        Self {
            mode,
            questions: question_views,
            word_bank,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Position of `answer` among the options of question `index`.
    pub fn option_index(&self, index: usize, answer: Option<&str>) -> Option<usize> {
        let answer = answer?;
        self.questions
            .get(index)?
            .options
            .iter()
            .position(|option| option == answer)
    }
}

const WORD_BANK_SEPARATOR: &str = " • ";

/// Lay word bank entries out in rows at most `width` columns wide. An entry
/// is never split across rows; one wider than a whole row is truncated.
pub fn pack_word_bank(words: &[String], width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    for word in words {
        let word = truncate_string(word, width);
        if row.is_empty() {
            row = word;
        } else if row.width() + WORD_BANK_SEPARATOR.width() + word.width() <= width {
            row.push_str(WORD_BANK_SEPARATOR);
            row.push_str(&word);
        } else {
            rows.push(std::mem::replace(&mut row, word));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

pub fn format_remaining(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn is_time_warning(seconds: u32) -> bool {
    seconds <= WARNING_THRESHOLD_SECONDS
}

pub fn format_score(report: &ScoreReport) -> String {
    format!("{}/{}", report.correct_count, report.total)
}

pub fn format_percentage(report: &ScoreReport) -> String {
    format!("{:.1}% correct", report.percentage)
}

pub fn answer_line(result: &QuestionResult) -> String {
    match result.user_answer.as_deref() {
        Some(answer) if !answer.is_empty() => answer.to_string(),
        _ => "Not answered".to_string(),
    }
}
