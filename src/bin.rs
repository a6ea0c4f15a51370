//! Binary entry point for `endoscopy-triage`.
//!
//! This module provides the command-line interface with options for the
//! configuration file path, logging verbosity, language and questionnaire
//! variant. It initializes logging, loads configuration, and runs the
//! requested command.

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use endoscopy_triage::{
    base::{
        config::Config,
        types::{Locale, Variant, Void},
    },
    interaction::{
        form::{self, Submission},
        present::{PresentOptions, present},
        report,
    },
    runtime::Runtime,
};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Endoscopy-triage – a colonoscopy / EGD self-screening questionnaire.
///
/// Configuration can come from `config.toml` or environment variables.
/// The tool asks yes/no questions about symptoms and risk factors, shows a
/// triage recommendation, and can export a printable letter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the tool will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: WARN level
    /// - -v: INFO level
    /// - -vv: DEBUG level
    /// - -vvv or more: TRACE level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Language of questions and results (overrides the config).
    #[arg(short, long, global = true, value_enum)]
    locale: Option<Locale>,
    /// Questionnaire variant (overrides the config).
    #[arg(long, global = true, value_enum)]
    variant: Option<Variant>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the questionnaire with question ids and tiers.
    Questions,
    /// Evaluate a TOML or JSON answers file.
    Evaluate {
        /// Path to the answers file.
        answers: std::path::PathBuf,
        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
        /// Also export the printable letter into the output directory.
        #[arg(long)]
        letter: bool,
    },
    /// Answer the questionnaire interactively.
    Ask {
        /// Also export the printable letter into the output directory.
        #[arg(long)]
        letter: bool,
    },
}

/// Main entry point for the endoscopy-triage binary.
///
/// Sets up logging based on verbosity, loads configuration, and runs the command.
fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer. Logs go to stderr so stdout stays clean for results.

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry().with(level_filter).with(stderr).init();

    let config = Config::load(args.config.as_deref())?.with_overrides(args.locale, args.variant);
    let variant = config.variant;
    let runtime = Runtime::new(config)?;
    let today = chrono::Local::now().date_naive();
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Questions => {
            write!(stdout, "{}", report::render_questions(variant, runtime.config.locale))?;
        }
        Command::Evaluate { answers, json, letter } => {
            let submission = Submission::load(&answers, variant)?;
            present(&runtime, &submission, variant, PresentOptions { json, letter }, today, &mut stdout)?;
        }
        Command::Ask { letter } => {
            let mut input = io::stdin().lock();
            let submission = form::ask(variant, runtime.config.locale, &mut input, &mut stdout)?;
            present(&runtime, &submission, variant, PresentOptions { json: false, letter }, today, &mut stdout)?;
        }
    }

    Ok(())
}
