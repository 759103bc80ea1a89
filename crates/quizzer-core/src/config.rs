//! quizzer configuration loading.

use std::env::{self, VarError};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::quiz::{InvalidInputPolicy, RunOptions, DEFAULT_ANSWER_PROMPT};

/// Environment variable that overrides the configured invalid-input policy.
pub const INVALID_INPUT_ENV: &str = "QUIZZER_INVALID_INPUT";

/// Top-level quizzer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizzerConfig {
    /// What to do with answers that are not a valid option letter.
    #[serde(default)]
    pub invalid_input: InvalidInputPolicy,
    /// Text shown before each answer is read.
    #[serde(default = "default_answer_prompt")]
    pub answer_prompt: String,
    /// Quiz file to run when none is given on the command line.
    #[serde(default)]
    pub default_quiz: Option<PathBuf>,
}

fn default_answer_prompt() -> String {
    DEFAULT_ANSWER_PROMPT.to_string()
}

impl Default for QuizzerConfig {
    fn default() -> Self {
        Self {
            invalid_input: InvalidInputPolicy::default(),
            answer_prompt: default_answer_prompt(),
            default_quiz: None,
        }
    }
}

impl QuizzerConfig {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            invalid_input: self.invalid_input,
            answer_prompt: self.answer_prompt.clone(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `quizzer.toml` in the current directory
/// 2. `~/.config/quizzer/config.toml`
///
/// `QUIZZER_INVALID_INPUT` overrides the policy from either source.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizzerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizzer.toml");
        if local.exists() {
            Some(local)
        } else {
            global_config_dir()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizzerConfig::default(),
    };

    if let Some(policy) = invalid_input_from_env()? {
        config.invalid_input = policy;
    }

    Ok(config)
}

/// Read the policy override. Unset is `None`; a value that is not valid
/// Unicode or not a known policy is an error.
fn invalid_input_from_env() -> Result<Option<InvalidInputPolicy>> {
    parse_policy_var(env::var(INVALID_INPUT_ENV))
}

fn parse_policy_var(
    value: std::result::Result<String, VarError>,
) -> Result<Option<InvalidInputPolicy>> {
    match value {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|e: String| anyhow::anyhow!("{INVALID_INPUT_ENV}: {e}")),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => {
            anyhow::bail!("{INVALID_INPUT_ENV} is not valid unicode: {raw:?}")
        }
    }
}

/// Parse a config file's contents.
pub fn parse_config_str(content: &str) -> Result<QuizzerConfig> {
    Ok(toml::from_str(content)?)
}

fn global_config_dir() -> Option<PathBuf> {
    env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizzer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizzerConfig::default();
        assert_eq!(config.invalid_input, InvalidInputPolicy::Fail);
        assert_eq!(config.answer_prompt, "Your answer: ");
        assert!(config.default_quiz.is_none());
    }

    #[test]
    fn parse_full_config() {
        let config = parse_config_str(
            r#"
invalid_input = "incorrect"
answer_prompt = "> "
default_quiz = "quizzes/geography.toml"
"#,
        )
        .unwrap();
        assert_eq!(config.invalid_input, InvalidInputPolicy::Incorrect);
        assert_eq!(config.answer_prompt, "> ");
        assert_eq!(
            config.default_quiz,
            Some(PathBuf::from("quizzes/geography.toml"))
        );
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        assert_eq!(parse_config_str("").unwrap(), QuizzerConfig::default());
    }

    #[test]
    fn parse_unknown_policy() {
        assert!(parse_config_str(r#"invalid_input = "ignore""#).is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("no/such/quizzer.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn policy_var_values() {
        assert_eq!(parse_policy_var(Err(VarError::NotPresent)).unwrap(), None);
        assert_eq!(
            parse_policy_var(Ok("incorrect".into())).unwrap(),
            Some(InvalidInputPolicy::Incorrect)
        );
        let err = parse_policy_var(Ok("ignore".into())).unwrap_err();
        assert!(err.to_string().contains("unknown invalid-input policy"));
    }

    #[cfg(unix)]
    #[test]
    fn policy_var_not_unicode_is_rejected() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"incorrect\xFF".to_vec());
        let err = parse_policy_var(Err(VarError::NotUnicode(raw))).unwrap_err();
        assert!(err.to_string().contains("not valid unicode"));
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizzer.toml");
        std::fs::write(&path, "answer_prompt = \"? \"\n").unwrap();

        let config = load_config_from(Some(path.as_path())).unwrap();
        assert_eq!(config.answer_prompt, "? ");
        assert_eq!(config.run_options().answer_prompt, "? ");
    }
}
