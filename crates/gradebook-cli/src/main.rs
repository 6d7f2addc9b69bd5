//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Grade calculator and semester report tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a semester report
    Report {
        /// Path to a .toml semester file
        #[arg(long)]
        semester: PathBuf,

        /// Override the student name from the semester file
        #[arg(long)]
        student: Option<String>,

        /// Output format: text, json, html, all (comma-separated)
        #[arg(long)]
        format: Option<String>,

        /// Output directory for json/html files
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show semester statistics as a table
    Stats {
        /// Path to a .toml semester file
        #[arg(long)]
        semester: PathBuf,
    },

    /// Compute a weighted average
    Average {
        /// Scores (comma-separated)
        #[arg(long, allow_hyphen_values = true)]
        scores: String,

        /// Weights aligned with the scores (comma-separated, must sum to 1.0)
        #[arg(long)]
        weights: String,
    },

    /// Compute the final-assessment score needed for a target average
    Simulate {
        /// Current scores (comma-separated)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        scores: String,

        /// Weights of the current scores (comma-separated)
        #[arg(long, default_value = "")]
        weights: String,

        /// Desired overall average (defaults to the configured target)
        #[arg(long)]
        desired: Option<f64>,

        /// Weight of the final assessment
        #[arg(long)]
        final_weight: f64,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Convert scores to GPA points
    Gpa {
        /// Scores (comma-separated)
        #[arg(long, allow_hyphen_values = true)]
        scores: String,
    },

    /// Validate semester TOML files
    Validate {
        /// Path to semester file or directory
        #[arg(long)]
        semester: PathBuf,
    },

    /// Create starter config and example semester
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report {
            semester,
            student,
            format,
            output,
            config,
        } => commands::report::execute(semester, student, format, output, config),
        Commands::Stats { semester } => commands::stats::execute(semester),
        Commands::Average { scores, weights } => commands::average::execute(scores, weights),
        Commands::Simulate {
            scores,
            weights,
            desired,
            final_weight,
            config,
        } => commands::simulate::execute(scores, weights, desired, final_weight, config),
        Commands::Gpa { scores } => commands::gpa::execute(scores),
        Commands::Validate { semester } => commands::validate::execute(semester),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
