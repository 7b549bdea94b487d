use crate::models::{AnswerRecord, QuestionResult, QuestionSet, QuizMode, ScoreReport};

pub fn is_correct(mode: QuizMode, user_answer: Option<&str>, correct_answer: &str) -> bool {
    match (mode, user_answer) {
        (_, None) => false,
        (QuizMode::MultipleChoice, Some(answer)) => answer == correct_answer,
        // case-sensitive, only the outer whitespace is ignored
        (QuizMode::FillInBlank, Some(answer)) => answer.trim() == correct_answer,
    }
}

pub fn score(questions: &QuestionSet, mode: QuizMode, answers: &AnswerRecord) -> ScoreReport {
    let results: Vec<QuestionResult> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let user_answer = answers.get(&index).cloned();
            QuestionResult {
                is_correct: question.answer_is_string
                    && is_correct(mode, user_answer.as_deref(), &question.correct_answer),
                question: question.question.clone(),
                user_answer,
                correct_answer: question.correct_answer.clone(),
            }
        })
        .collect();

    let correct_count = results.iter().filter(|r| r.is_correct).count();
    let total = results.len();

    ScoreReport {
        results,
        correct_count,
        total,
        percentage: percentage(correct_count, total),
    }
}

/// Percentage rounded half-up to one decimal place.
pub fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let tenths = (correct as f64 * 1000.0) / total as f64;
    (tenths + 0.5).floor() / 10.0
}
