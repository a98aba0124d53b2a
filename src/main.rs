//! Wordle Ranker - CLI
//!
//! Filters the possible answers against the known clues and ranks every
//! vocabulary word by the number of candidates it is expected to leave.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordle_ranker::{
    constraint::clues::Clues,
    feedback::FeedbackMode,
    logging::{default_level, init_logger},
    output::{print_candidates, print_ranking, print_summary},
    ranker::{RankConfig, Ranker},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_ranker",
    about = "Filter Wordle candidates by known clues and rank guesses by expected remaining candidates",
    version,
    author
)]
struct Cli {
    /// Guess vocabulary to rank (JSON array or one word per line)
    #[arg(long, value_name = "FILE")]
    vocabulary: PathBuf,

    /// Possible answers (JSON array or one word per line)
    #[arg(long, value_name = "FILE")]
    answers: PathBuf,

    /// Known letters by position, '_' for unknown (e.g. "__a_t")
    #[arg(short, long)]
    correct: Option<String>,

    /// Letters present but not at each position, comma separated (e.g. "e,,,tl,es")
    #[arg(short, long)]
    misplaced: Option<String>,

    /// Letters not in the word (e.g. "roncby")
    #[arg(short, long)]
    wrong: Option<String>,

    /// A played guess and its feedback, G/Y/- per letter (e.g. "crane=--G-Y"); repeatable
    #[arg(short, long = "guess", value_name = "WORD=PATTERN")]
    guesses: Vec<String>,

    /// Number of ranked guesses to print
    #[arg(short = 'n', long, default_value_t = 100)]
    top: usize,

    /// Feedback rules: presence (each letter on its own) or exact (Wordle's
    /// duplicate-letter handling)
    #[arg(short, long, default_value_t = FeedbackMode::Presence)]
    feedback: FeedbackMode,

    /// Worker threads (default: one per CPU)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Hide the progress bar, summary and informational logging
    #[arg(short, long)]
    quiet: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn clues(&self) -> Clues {
        Clues {
            correct: self.correct.clone(),
            misplaced: self.misplaced.clone(),
            wrong: self.wrong.clone(),
            observations: self.guesses.clone(),
        }
    }

    const fn rank_config(&self) -> RankConfig {
        RankConfig {
            top: self.top,
            feedback: self.feedback,
            show_progress: !self.quiet,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(default_level(cli.verbose, cli.quiet));

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let vocabulary = load_from_file(&cli.vocabulary)
        .with_context(|| format!("Failed to load vocabulary {}", cli.vocabulary.display()))?;
    let answers = load_from_file(&cli.answers)
        .with_context(|| format!("Failed to load answers {}", cli.answers.display()))?;
    info!(
        "Loaded {} vocabulary words and {} possible answers",
        vocabulary.len(),
        answers.len()
    );

    let constraint = cli.clues().to_constraint().context("Invalid clues")?;
    let config = cli.rank_config();
    let ranker = Ranker::new(config, &vocabulary, &answers);

    let mut out = BufWriter::new(io::stdout().lock());

    let report = match ranker.run(&constraint) {
        Ok(report) => report,
        Err(err) => {
            print_candidates(&mut out, &[], vocabulary.len())?;
            out.flush()?;
            return Err(err.into());
        }
    };

    print_candidates(&mut out, &report.candidates, report.vocabulary_size)?;
    print_ranking(&mut out, report.top(config.top))?;
    out.flush()?;

    if !cli.quiet {
        print_summary(&report, config.top);
    }

    Ok(())
}
