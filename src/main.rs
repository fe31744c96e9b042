//! spelldeck CLI
//!
//! Validate word lists, print the daily challenge and drive the review queue.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use spelldeck_lib::config::settings::get_settings;
use spelldeck_lib::logging::init_logging;
use spelldeck_lib::review::BASE_INTERVAL_MS;
use spelldeck_lib::words::{corpus, ingest_file};
use spelldeck_lib::{challenge, FileStore, ReviewOutcome, ReviewScheduler};

#[derive(Parser)]
#[command(name = "spelldeck", version, about = "Word curriculum tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a JSON or CSV/TSV word list
    Ingest { file: PathBuf },
    /// Print the daily challenge drawn from a word list
    Daily {
        file: PathBuf,
        /// Challenge date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Manage the spaced-repetition queue
    #[command(subcommand)]
    Review(ReviewCommand),
}

#[derive(Subcommand)]
enum ReviewCommand {
    /// Flag a word for review
    Add { word: String },
    /// List words due now
    Due,
    /// Record a recall result
    Record(RecordArgs),
    /// Clear the whole queue
    Reset,
}

#[derive(Args)]
struct RecordArgs {
    word: String,
    result: Recall,
}

#[derive(Clone, Copy, ValueEnum)]
enum Recall {
    Correct,
    Wrong,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = get_settings();
    init_logging(settings.log_format);

    match cli.command {
        Command::Ingest { file } => {
            let records = ingest_file(&file)?;
            println!("{} valid word records in {}", records.len(), file.display());
        }
        Command::Daily { file, date } => {
            let words = corpus(&ingest_file(&file)?);
            let date = date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            let today = challenge::select_challenge_sized(&words, &date, settings.challenge_size)
                .with_context(|| format!("selecting challenge for {}", date))?;
            println!("Challenge for {}:", today.date);
            for (i, word) in today.words.iter().enumerate() {
                println!("{:>2}. {}", i + 1, word);
            }
        }
        Command::Review(cmd) => {
            let store = FileStore::new(settings.data_dir.clone());
            let scheduler = ReviewScheduler::new(store);
            run_review(&scheduler, cmd);
        }
    }

    Ok(())
}

fn run_review(scheduler: &ReviewScheduler<FileStore>, cmd: ReviewCommand) {
    match cmd {
        ReviewCommand::Add { word } => {
            scheduler.add_review_word(&word);
            println!("{} queued for review", word);
        }
        ReviewCommand::Due => {
            let due = scheduler.due_now();
            if due.is_empty() {
                println!("Nothing due");
            }
            for item in due {
                println!("{} (streak {})", item.word, item.success_count);
            }
        }
        ReviewCommand::Record(args) => {
            match scheduler.record_outcome(&args.word, matches!(args.result, Recall::Correct)) {
                ReviewOutcome::Untracked => println!("{} is not in the review queue", args.word),
                ReviewOutcome::Rescheduled(item) => {
                    println!("{} next due in {} day(s)", item.word, item.interval / BASE_INTERVAL_MS)
                }
                ReviewOutcome::Reset(item) => println!("{} reset, due again tomorrow", item.word),
                ReviewOutcome::Graduated(word) => println!("{} graduated", word),
            }
        }
        ReviewCommand::Reset => {
            scheduler.reset();
            println!("Review queue cleared");
        }
    }
}
