use crate::error::{QuizError, Result};
use crate::models::{Question, QuestionSet};
use serde_json::Value;

/// Check an untrusted document and build a `QuestionSet` from it.
///
/// Rules are applied in order and the first failure is returned; nothing is
/// accepted partially.
pub fn validate(raw: &Value) -> Result<QuestionSet> {
    let results = raw
        .get("results")
        .and_then(Value::as_array)
        .ok_or(QuizError::MissingResultsField)?;

    if results.is_empty() {
        return Err(QuizError::EmptyQuestionSet);
    }

    let mut questions = Vec::with_capacity(results.len());
    for (index, entry) in results.iter().enumerate() {
        let question = field(entry, "question");
        let correct = field(entry, "correct_answer");
        let incorrect = field(entry, "incorrect_answers");

        let (Some(question), Some(correct), Some(incorrect)) = (question, correct, incorrect)
        else {
            return Err(QuizError::IncompleteQuestion(index));
        };

        let distractors = match incorrect.as_array() {
            Some(items) if items.len() == 3 => items,
            _ => return Err(QuizError::WrongDistractorCount(index)),
        };

        questions.push(Question {
            question: text_of(question),
            correct_answer: text_of(correct),
            incorrect_answers: [
                text_of(&distractors[0]),
                text_of(&distractors[1]),
                text_of(&distractors[2]),
            ],
            answer_is_string: correct.is_string(),
        });
    }

    QuestionSet::new(questions)
}

fn field<'a>(entry: &'a Value, name: &str) -> Option<&'a Value> {
    entry.get(name).filter(|value| is_truthy(value))
}

/// Truthiness as JSON producers from the browser world understand it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
