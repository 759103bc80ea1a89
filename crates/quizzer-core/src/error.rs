//! Quiz error types.
//!
//! A wrong answer is not an error: `check_answer` returns `Ok(false)` for it.
//! These variants cover input that cannot be checked at all and failures of
//! the console streams the run loop reads from.

use thiserror::Error;

/// Errors that can occur while checking answers or running a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The user submitted nothing for a multiple-choice question.
    #[error("empty selection, expected an option letter")]
    EmptySelection,

    /// The selected letter does not map to any option.
    #[error("selection '{selection}' is out of range, expected A-{last}")]
    SelectionOutOfRange { selection: char, last: char },

    /// Input ended while an answer was still pending.
    #[error("input closed before question {question} was answered")]
    InputClosed { question: usize },

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Returns `true` if the user's input could not be mapped to an option.
    ///
    /// Only these errors are affected by the invalid-input policy; stream
    /// errors always abort the run.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            QuizError::EmptySelection | QuizError::SelectionOutOfRange { .. }
        )
    }
}
