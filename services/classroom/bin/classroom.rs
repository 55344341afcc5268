//! Main Entrypoint for the Classroom Service
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Parsing the command line.
//! 3. Running a teaching session over stdin, or printing chapters and progress.

use anyhow::Context;
use clap::{Parser, Subcommand};
use classroom_core::{
    ResponseSelector, SelectorConfig, Subject,
    curriculum::{CurriculumService, StaticCurriculum},
    random::RngSource,
    rewards::{SESSION_LENGTHS, SessionLength},
};
use classroom_service::{
    config::Config,
    presenter::{ConsolePresenter, render_chapters, render_progress},
    session::{ClassroomSession, SessionOutcome, SessionSettings},
    store::ProgressStore,
};
use tokio::io::BufReader;
use tracing::info;

/// Teach a simulated class of students.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start a timed session; each line on stdin is one spoken phrase
    Teach {
        /// physics, chemistry or mathematics
        #[arg(short, long)]
        subject: Subject,

        /// Chapter key (see the `chapters` command)
        #[arg(short, long)]
        chapter: Option<String>,

        /// Session length in minutes: 15, 30, 45, 60 or 90
        #[arg(short, long, default_value_t = 30)]
        minutes: u32,

        /// Seed for reproducible student behavior
        #[arg(long)]
        seed: Option<u64>,

        /// Let one or two students answer instead of two or three
        #[arg(long)]
        compact: bool,

        /// Emit JSON lines instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the chapters of a subject
    Chapters {
        #[arg(short, long)]
        subject: Subject,
    },

    /// Show coins, experience and title
    Progress,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = ProgressStore::new(&config.progress_path);

    match cli.command {
        Commands::Chapters { subject } => {
            println!("{}", render_chapters(subject));
        }
        Commands::Progress => {
            let progress = store.load().await.context("Failed to load progress")?;
            println!("{}", render_progress(&progress));
        }
        Commands::Teach {
            subject,
            chapter,
            minutes,
            seed,
            compact,
            json,
        } => {
            // --- 3. Validate the lesson ---
            if let Some(key) = &chapter {
                StaticCurriculum.chapter(subject, key)?;
            }
            let length = SessionLength::for_minutes(minutes).with_context(|| {
                let options: Vec<_> = SESSION_LENGTHS.iter().map(|l| l.minutes).collect();
                format!("Unsupported session length {minutes}; choose one of {options:?}")
            })?;

            let rng = match seed {
                Some(seed) => RngSource::seeded(seed),
                None => RngSource::from_entropy(),
            };
            let selector_config = if compact {
                SelectorConfig::compact()
            } else {
                SelectorConfig::default()
            };
            let selector = ResponseSelector::new(rng).with_config(selector_config);

            // --- 4. Run the session ---
            let settings = SessionSettings {
                subject,
                chapter,
                length,
                pacing: config.response_pacing,
                silence: config.silence,
            };
            info!(progress_path = %config.progress_path.display(), "Starting classroom session");
            let session = ClassroomSession::new(
                settings,
                selector,
                ConsolePresenter::new(tokio::io::stdout(), json),
                store,
            );
            match session.run(BufReader::new(tokio::io::stdin())).await? {
                SessionOutcome::Completed { progress, .. } => {
                    info!(coins = progress.total_coins, "Progress saved");
                }
                SessionOutcome::EndedEarly { .. } => {}
            }
        }
    }

    Ok(())
}
