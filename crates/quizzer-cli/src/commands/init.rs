//! The `quizzer init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    if Path::new("quizzer.toml").exists() {
        println!("quizzer.toml already exists, skipping.");
    } else {
        std::fs::write("quizzer.toml", SAMPLE_CONFIG)?;
        println!("Created quizzer.toml");
    }

    std::fs::create_dir_all("quizzes")?;
    let example_path = Path::new("quizzes/example.toml");
    if example_path.exists() {
        println!("quizzes/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add your own questions to quizzes/example.toml");
    println!("  2. Run: quizzer validate --quiz-file quizzes/example.toml");
    println!("  3. Run: quizzer --quiz-file quizzes/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizzer configuration

# What to do when a multiple-choice answer is not a valid option letter:
#   "fail"      stop the quiz with an error
#   "incorrect" count the answer as wrong and continue
invalid_input = "fail"

answer_prompt = "Your answer: "

# Quiz to run when --quiz-file is not given.
# default_quiz = "quizzes/example.toml"
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
title = "Example Quiz"

[[questions]]
kind = "multiple_choice"
prompt = "Which planet is closest to the Sun?"
options = ["Venus", "Mercury", "Mars", "Earth"]
answer = "Mercury"

[[questions]]
kind = "true_false"
prompt = "Light travels faster than sound."
answer = true

[[questions]]
kind = "multiple_choice"
prompt = "How many continents are there?"
options = ["Five", "Six", "Seven"]
answer = "Seven"
"#;
