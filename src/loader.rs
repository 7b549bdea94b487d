use crate::error::{QuizError, Result};
use crate::logger;
use crate::models::QuestionSet;
use crate::validator::validate;
use std::fs;
use std::path::{Path, PathBuf};

pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

pub fn get_quiz_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && has_json_name(&path.to_string_lossy()) {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

fn has_json_name(name: &str) -> bool {
    name.ends_with(".json")
}

/// Boundary checks applied before any bytes are parsed: size, then name.
pub fn check_file(name: &str, size: u64) -> Result<()> {
    if size > MAX_FILE_SIZE {
        return Err(QuizError::FileTooLarge { size });
    }
    if !has_json_name(name) {
        return Err(QuizError::WrongExtension);
    }
    Ok(())
}

pub fn parse_document(bytes: &[u8]) -> Result<QuestionSet> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    validate(&value)
}

pub fn load_quiz_file(path: &Path) -> Result<QuestionSet> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let size = fs::metadata(path)?.len();
    check_file(&name, size)?;

    let bytes = fs::read(path)?;
    let questions = parse_document(&bytes)?;
    logger::log(&format!(
        "Loaded {} questions from {}",
        questions.len(),
        path.display()
    ));
    Ok(questions)
}
