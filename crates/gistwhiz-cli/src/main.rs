//! gistwhiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gistwhiz", version, about = "Free-text answer grading")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether an answer matches a reference answer
    Check {
        /// Reference answer
        original: String,

        /// Answer to grade
        candidate: String,

        /// Print {"match": bool} instead of text
        #[arg(long)]
        json: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show every pipeline stage for a comparison
    Explain {
        /// Reference answer
        original: String,

        /// Answer to grade
        candidate: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade answer sets against their expected verdicts
    Grade {
        /// Path to .toml answer set or directory
        #[arg(long)]
        answer_set: PathBuf,

        /// Write the JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Exit code 1 if any verdict disagrees with its expectation
        #[arg(long)]
        fail_on_mismatch: bool,

        /// Filter by tags (comma-separated)
        #[arg(long)]
        filter: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate answer set TOML files
    Validate {
        /// Path to answer set file or directory
        #[arg(long)]
        answer_set: PathBuf,
    },

    /// Create starter config and example answer set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gistwhiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            original,
            candidate,
            json,
            config,
        } => commands::check::execute(original, candidate, json, config),
        Commands::Explain {
            original,
            candidate,
            config,
        } => commands::explain::execute(original, candidate, config),
        Commands::Grade {
            answer_set,
            output,
            fail_on_mismatch,
            filter,
            config,
        } => commands::grade::execute(answer_set, output, fail_on_mismatch, filter, config),
        Commands::Validate { answer_set } => commands::validate::execute(answer_set),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
