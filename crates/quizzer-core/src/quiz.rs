//! The quiz aggregate and its interactive run loop.
//!
//! A run walks the questions strictly in insertion order: present, read one
//! line, check, score, next. The line read is the only point where a run
//! blocks. The score lives in the run, not on the `Quiz`, so a quiz can be
//! run any number of times.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::question::Question;

/// Text written before each answer is read.
pub const DEFAULT_ANSWER_PROMPT: &str = "Your answer: ";

/// What the run loop does when a multiple-choice answer is not a valid letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    /// Abort the run with the invalid-input error. No score is reported.
    #[default]
    Fail,
    /// Count the answer as incorrect, say why, and move on.
    Incorrect,
}

impl fmt::Display for InvalidInputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputPolicy::Fail => write!(f, "fail"),
            InvalidInputPolicy::Incorrect => write!(f, "incorrect"),
        }
    }
}

impl FromStr for InvalidInputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail" | "error" => Ok(InvalidInputPolicy::Fail),
            "incorrect" | "wrong" => Ok(InvalidInputPolicy::Incorrect),
            other => Err(format!(
                "unknown invalid-input policy: {other} (expected fail or incorrect)"
            )),
        }
    }
}

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub invalid_input: InvalidInputPolicy,
    pub answer_prompt: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            invalid_input: InvalidInputPolicy::default(),
            answer_prompt: DEFAULT_ANSWER_PROMPT.to_string(),
        }
    }
}

/// Number of correct answers out of the number of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// How a single answer was judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// The answer could not be mapped to an option and was counted as
    /// incorrect under [`InvalidInputPolicy::Incorrect`].
    Invalid { reason: String },
}

/// The result of a completed run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub score: Score,
    /// One verdict per question, in presentation order.
    pub verdicts: Vec<Verdict>,
}

/// An ordered collection of questions.
#[derive(Debug, Clone)]
pub struct Quiz {
    title: String,
    questions: Vec<Question>,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new("Quiz")
    }
}

impl Quiz {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            questions: Vec::new(),
        }
    }

    /// Append a question. Consistency of the question is not checked.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Run the quiz on the process console.
    pub fn start(&self, options: &RunOptions) -> Result<Outcome, QuizError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock(), options)
    }

    /// Run the quiz, reading answers from `input` and writing the transcript
    /// to `output`.
    ///
    /// Fails with [`QuizError::InputClosed`] if `input` ends before every
    /// question is answered, and with the invalid-input error itself when a
    /// selection is invalid under [`InvalidInputPolicy::Fail`].
    pub fn run<R, W>(
        &self,
        mut input: R,
        mut output: W,
        options: &RunOptions,
    ) -> Result<Outcome, QuizError>
    where
        R: BufRead,
        W: Write,
    {
        let mut correct = 0;
        let mut verdicts = Vec::with_capacity(self.questions.len());
        let mut line = Vec::new();

        for (i, question) in self.questions.iter().enumerate() {
            let number = i + 1;
            tracing::debug!(question = number, kind = question.kind(), "presenting question");

            writeln!(output, "{question}")?;
            write!(output, "{}", options.answer_prompt)?;
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                return Err(QuizError::InputClosed { question: number });
            }
            // Undecodable bytes become U+FFFD and are judged like any other text.
            let decoded = String::from_utf8_lossy(&line);
            let candidate = decoded.trim();

            let verdict = match question.check_answer(candidate) {
                Ok(true) => Verdict::Correct,
                Ok(false) => Verdict::Incorrect,
                Err(e)
                    if e.is_invalid_input()
                        && options.invalid_input == InvalidInputPolicy::Incorrect =>
                {
                    tracing::warn!(question = number, error = %e, "invalid selection counted as incorrect");
                    Verdict::Invalid {
                        reason: e.to_string(),
                    }
                }
                Err(e) => return Err(e),
            };

            match &verdict {
                Verdict::Correct => {
                    correct += 1;
                    writeln!(output, "Correct!\n")?;
                }
                Verdict::Incorrect => writeln!(output, "Incorrect!\n")?,
                Verdict::Invalid { reason } => writeln!(output, "Incorrect! ({reason})\n")?,
            }
            tracing::debug!(question = number, ?verdict, "answer scored");
            verdicts.push(verdict);
        }

        let score = Score {
            correct,
            total: self.questions.len(),
        };
        writeln!(output, "Quiz completed. Your score: {score}")?;
        output.flush()?;
        tracing::info!(title = %self.title, %score, "quiz completed");

        Ok(Outcome { score, verdicts })
    }
}
