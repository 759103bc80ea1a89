//! The `quizzer validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizzer_core::parser::{load_quiz_directory, parse_quiz, validate_quiz};
use quizzer_core::Quiz;

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let quizzes = if quiz_path.is_dir() {
        load_quiz_directory(&quiz_path)?
    } else {
        vec![parse_quiz(&quiz_path)?]
    };

    let mut total_warnings = 0;

    for quiz in &quizzes {
        println!("Quiz: {} ({} questions)", quiz.title(), quiz.len());
        if !quiz.is_empty() {
            println!("{}", question_table(quiz));
        }

        let warnings = validate_quiz(quiz);
        for w in &warnings {
            let prefix = w
                .question
                .map(|n| format!("  [question {n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All quizzes valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

fn question_table(quiz: &Quiz) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Kind", "Prompt", "Answer"]);

    for (i, question) in quiz.questions().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(question.kind()),
            Cell::new(question.prompt()),
            Cell::new(question.answer()),
        ]);
    }

    table
}
