use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("File is too large ({size} bytes). Please choose a file smaller than 50MB.")]
    FileTooLarge { size: u64 },
    #[error("Please choose a file with the .json extension.")]
    WrongExtension,
    #[error("Could not read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse JSON file: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("Wrong JSON format: a \"results\" array is required.")]
    MissingResultsField,
    #[error("The JSON file does not contain any questions.")]
    EmptyQuestionSet,
    #[error("Question {} is missing required fields.", .0 + 1)]
    IncompleteQuestion(usize),
    #[error("Question {} needs exactly 3 incorrect_answers.", .0 + 1)]
    WrongDistractorCount(usize),
    #[error("Time limit must be greater than zero.")]
    EmptyDuration,
}

pub type Result<T> = std::result::Result<T, QuizError>;
