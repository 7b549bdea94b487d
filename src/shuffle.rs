use crate::models::{Question, QuestionSet};
use rand::Rng;

/// Return a uniformly shuffled copy of `items` (Fisher-Yates).
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// The correct answer and its three distractors in random order.
pub fn shuffled_options<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<String> {
    let options: Vec<String> = std::iter::once(&question.correct_answer)
        .chain(question.incorrect_answers.iter())
        .cloned()
        .collect();
    shuffle(&options, rng)
}

/// Every correct answer followed by every distractor, shuffled together.
pub fn build_word_bank<R: Rng + ?Sized>(questions: &QuestionSet, rng: &mut R) -> Vec<String> {
    let words: Vec<String> = questions
        .iter()
        .map(|q| q.correct_answer.clone())
        .chain(
            questions
                .iter()
                .flat_map(|q| q.incorrect_answers.iter().cloned()),
        )
        .collect();
    shuffle(&words, rng)
}
