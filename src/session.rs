use crate::error::{QuizError, Result};
use crate::logger;
use crate::models::{AnswerRecord, QuestionSet, QuizMode, ScoreReport, SessionState};
use crate::scorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No quiz was running.
    Ignored,
    Running(u32),
    /// Time ran out and the quiz was submitted.
    Expired,
}

/// Owner of the single `SessionState`. Every mutation goes through one of
/// the transition methods below.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    duration_seconds: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            duration_seconds: 0,
        }
    }

    /// Begin a new attempt. Any attempt in progress is discarded.
    pub fn start(
        &mut self,
        questions: QuestionSet,
        mode: QuizMode,
        duration_seconds: u32,
    ) -> Result<()> {
        if duration_seconds == 0 {
            return Err(QuizError::EmptyDuration);
        }
        logger::log(&format!(
            "Starting quiz: {} questions, {}, {}s",
            questions.len(),
            mode.label(),
            duration_seconds
        ));
        self.duration_seconds = duration_seconds;
        self.state = SessionState::Active {
            questions,
            mode,
            answers: AnswerRecord::new(),
            seconds_remaining: duration_seconds,
        };
        Ok(())
    }

    /// Store `value` as the answer for `index`. Returns false when no quiz
    /// is running or the index is outside the question set.
    pub fn record_answer(&mut self, index: usize, value: impl Into<String>) -> bool {
        match &mut self.state {
            SessionState::Active {
                questions, answers, ..
            } if index < questions.len() => {
                answers.insert(index, value.into());
                true
            }
            _ => false,
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        let remaining = match &mut self.state {
            SessionState::Active {
                seconds_remaining, ..
            } => {
                *seconds_remaining = seconds_remaining.saturating_sub(1);
                *seconds_remaining
            }
            _ => return TickOutcome::Ignored,
        };

        if remaining == 0 {
            logger::log("Time is up, submitting quiz");
            self.submit();
            TickOutcome::Expired
        } else {
            TickOutcome::Running(remaining)
        }
    }

    pub fn submit(&mut self) -> Option<&ScoreReport> {
        if !self.is_active() {
            return None;
        }
        let SessionState::Active {
            questions,
            mode,
            answers,
            ..
        } = std::mem::replace(&mut self.state, SessionState::Idle)
        else {
            return None;
        };

        let report = scorer::score(&questions, mode, &answers);
        logger::log(&format!(
            "Quiz submitted: {}/{} ({:.1}%)",
            report.correct_count, report.total, report.percentage
        ));
        self.state = SessionState::Finished {
            questions,
            mode,
            answers,
            report,
        };
        self.report()
    }

    /// Run the same questions again with a fresh answer record.
    pub fn retry(&mut self) -> bool {
        if !self.is_finished() {
            return false;
        }
        let SessionState::Finished {
            questions, mode, ..
        } = std::mem::replace(&mut self.state, SessionState::Idle)
        else {
            return false;
        };

        logger::log("Retrying quiz with the same questions");
        self.state = SessionState::Active {
            questions,
            mode,
            answers: AnswerRecord::new(),
            seconds_remaining: self.duration_seconds,
        };
        true
    }

    pub fn reset(&mut self) {
        if !self.is_idle() {
            logger::log("Session reset to idle");
        }
        self.state = SessionState::Idle;
        self.duration_seconds = 0;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished { .. })
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn questions(&self) -> Option<&QuestionSet> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Active { questions, .. } | SessionState::Finished { questions, .. } => {
                Some(questions)
            }
        }
    }

    pub fn mode(&self) -> Option<QuizMode> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Active { mode, .. } | SessionState::Finished { mode, .. } => Some(*mode),
        }
    }

    pub fn answers(&self) -> Option<&AnswerRecord> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Active { answers, .. } | SessionState::Finished { answers, .. } => {
                Some(answers)
            }
        }
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers()
            .and_then(|answers| answers.get(&index))
            .map(String::as_str)
    }

    pub fn seconds_remaining(&self) -> Option<u32> {
        match &self.state {
            SessionState::Active {
                seconds_remaining, ..
            } => Some(*seconds_remaining),
            _ => None,
        }
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        match &self.state {
            SessionState::Finished { report, .. } => Some(report),
            _ => None,
        }
    }
}
