//! TOML quiz file parser.
//!
//! Loads quizzes from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::question::{eq_ignore_case, Question, MAX_OPTIONS};
use crate::quiz::Quiz;

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    #[serde(default)]
    quiz: Option<TomlQuizHeader>,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    title: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TomlQuestion {
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        answer: String,
    },
    TrueFalse {
        prompt: String,
        answer: TomlBoolAnswer,
    },
}

/// True/false answers may be written as a TOML boolean or a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlBoolAnswer {
    Bool(bool),
    Text(String),
}

impl TomlBoolAnswer {
    fn into_text(self) -> String {
        match self {
            TomlBoolAnswer::Bool(b) => b.to_string(),
            TomlBoolAnswer::Text(s) => s,
        }
    }
}

/// Parse a single TOML file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz`.
///
/// `source_path` is used for error messages and, when the file has no
/// `[quiz]` table, for the quiz title.
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let title = match parsed.quiz {
        Some(header) => header.title,
        None => source_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Quiz".to_string()),
    };

    let mut quiz = Quiz::new(title);
    for q in parsed.questions {
        quiz.add_question(match q {
            TomlQuestion::MultipleChoice {
                prompt,
                options,
                answer,
            } => Question::multiple_choice(prompt, options, answer),
            TomlQuestion::TrueFalse { prompt, answer } => {
                Question::true_false(prompt, answer.into_text())
            }
        });
    }

    tracing::debug!(
        path = %source_path.display(),
        questions = quiz.len(),
        "parsed quiz file"
    );

    Ok(quiz)
}

/// Recursively load all `.toml` quiz files from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// One-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for questions whose answers can never be judged correct
/// or whose input cannot be labelled.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "quiz has no questions".into(),
        });
    }

    let mut seen_prompts = HashSet::new();
    for (i, question) in quiz.questions().iter().enumerate() {
        let number = Some(i + 1);
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                question: number,
                message,
            })
        };

        if question.prompt().trim().is_empty() {
            warn("prompt is empty".into());
        } else if !seen_prompts.insert(question.prompt()) {
            warn(format!("duplicate prompt: {}", question.prompt()));
        }

        match question {
            Question::MultipleChoice {
                options, answer, ..
            } => {
                if options.is_empty() {
                    warn("multiple-choice question has no options".into());
                } else if options.len() > MAX_OPTIONS {
                    warn(format!(
                        "{} options given, only {MAX_OPTIONS} can be labelled A-Z",
                        options.len()
                    ));
                }

                let matches = options
                    .iter()
                    .filter(|option| eq_ignore_case(option, answer))
                    .count();
                match matches {
                    0 => warn(format!("answer '{answer}' is not one of the options")),
                    1 => {}
                    n => warn(format!("answer '{answer}' matches {n} options")),
                }
            }
            Question::TrueFalse { answer, .. } => {
                if !eq_ignore_case(answer, "true") && !eq_ignore_case(answer, "false") {
                    warn(format!("true/false answer '{answer}' is neither true nor false"));
                }
            }
        }
    }

    warnings
}
