//! Running a quiz, the default `quizzer` command.

use std::path::PathBuf;

use anyhow::Result;

use quizzer_core::parser::{parse_quiz, validate_quiz};
use quizzer_core::{load_config_from, sample_quiz, InvalidInputPolicy};

pub fn execute(
    quiz_file: Option<PathBuf>,
    invalid_input: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let mut options = config.run_options();
    if let Some(policy) = &invalid_input {
        options.invalid_input = policy
            .parse::<InvalidInputPolicy>()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
    }

    let quiz = match quiz_file.or(config.default_quiz) {
        Some(path) => parse_quiz(&path)?,
        None => sample_quiz(),
    };

    for w in validate_quiz(&quiz) {
        match w.question {
            Some(n) => tracing::warn!("question {n}: {}", w.message),
            None => tracing::warn!("{}", w.message),
        }
    }

    tracing::info!(
        title = quiz.title(),
        questions = quiz.len(),
        invalid_input = %options.invalid_input,
        "starting quiz"
    );

    quiz.start(&options)?;

    Ok(())
}
