use crate::error::{QuizError, Result};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: [String; 3],
    /// False when the document held a non-string correct answer; such a
    /// question is shown but can never be answered correctly.
    pub answer_is_string: bool,
}

/// Validated, non-empty list of questions for one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizMode {
    #[default]
    MultipleChoice,
    FillInBlank,
}

impl QuizMode {
    pub fn label(self) -> &'static str {
        match self {
            QuizMode::MultipleChoice => "Multiple Choice",
            QuizMode::FillInBlank => "Fill in the Blank",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            QuizMode::MultipleChoice => QuizMode::FillInBlank,
            QuizMode::FillInBlank => QuizMode::MultipleChoice,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "multiple" | "multiple-choice" | "mc" => Some(QuizMode::MultipleChoice),
            "fill" | "fill-in-blank" | "blank" => Some(QuizMode::FillInBlank),
            _ => None,
        }
    }
}

/// Sparse map of question index to the raw text the user supplied.
pub type AnswerRecord = BTreeMap<usize, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionResult {
    pub question: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub results: Vec<QuestionResult>,
    pub correct_count: usize,
    pub total: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Active {
        questions: QuestionSet,
        mode: QuizMode,
        answers: AnswerRecord,
        seconds_remaining: u32,
    },
    Finished {
        questions: QuestionSet,
        mode: QuizMode,
        answers: AnswerRecord,
        report: ScoreReport,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick(u32),
    Expired,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Quiz,
    QuizQuitConfirm,
    Summary,
}

#[cfg(test)]
pub(crate) fn sample_question(n: usize) -> Question {
    Question {
        question: format!("Question {}?", n),
        correct_answer: format!("right{}", n),
        incorrect_answers: [
            format!("wrong{}a", n),
            format!("wrong{}b", n),
            format!("wrong{}c", n),
        ],
        answer_is_string: true,
    }
}

#[cfg(test)]
pub(crate) fn sample_set(count: usize) -> QuestionSet {
    QuestionSet::new((0..count).map(sample_question).collect()).unwrap()
}
