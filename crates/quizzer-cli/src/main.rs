//! quizzer CLI: runs interactive quizzes in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "quizzer",
    version,
    about = "Interactive terminal quiz runner",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

/// Options for running a quiz (the default when no command is given).
#[derive(Args)]
struct RunArgs {
    /// Path to a .toml quiz file (default: the built-in sample quiz)
    #[arg(long)]
    quiz_file: Option<PathBuf>,

    /// What to do with an invalid multiple-choice selection: fail, incorrect
    #[arg(long)]
    invalid_input: Option<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate quiz TOML files
    Validate {
        /// Path to a quiz file or a directory of quiz files
        #[arg(long)]
        quiz_file: PathBuf,
    },

    /// Create a starter config and an example quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizzer=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Validate { quiz_file }) => commands::validate::execute(quiz_file),
        Some(Commands::Init) => commands::init::execute(),
        None => {
            let RunArgs {
                quiz_file,
                invalid_input,
                config,
            } = cli.run;
            commands::run::execute(quiz_file, invalid_input, config)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
