//! quizzer-core: question model, quiz run loop, and quiz file parsing.
//!
//! This crate holds everything the `quizzer` binary needs apart from argument
//! parsing: the [`Question`] kinds and their answer checking, the [`Quiz`]
//! aggregate with its console run loop, TOML quiz files, and configuration.

pub mod config;
pub mod error;
pub mod parser;
pub mod question;
pub mod quiz;
pub mod sample;

pub use config::{load_config_from, QuizzerConfig};
pub use error::QuizError;
pub use question::Question;
pub use quiz::{InvalidInputPolicy, Outcome, Quiz, RunOptions, Score, Verdict};
pub use sample::sample_quiz;
