//! Command line argument parsing for the spellscore CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Spellscore - dictionary-based OCR correction and error-rate scoring
#[derive(Parser, Debug, Clone)]
#[command(name = "spellscore")]
#[command(about = "Correct OCR text against frequency dictionaries and score WER/CER")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellscoreArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(flatten)]
    pub index: IndexArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellscoreArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Where the dictionaries come from and how the index is built.
#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG", env = "SPELLSCORE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Dictionary file, loaded after the configured ones (repeatable)
    #[arg(short, long = "dictionary", value_name = "DICT", global = true)]
    pub dictionaries: Vec<PathBuf>,

    /// Term column of --dictionary files
    #[arg(long, default_value = "0", global = true)]
    pub term_index: usize,

    /// Count column of --dictionary files
    #[arg(long, default_value = "1", global = true)]
    pub count_index: usize,

    /// Field separator of --dictionary files (default: any whitespace)
    #[arg(long, global = true)]
    pub separator: Option<char>,

    /// Maximum edit distance of the index
    #[arg(long, global = true)]
    pub max_edit_distance: Option<usize>,

    /// Prefix length used for delete generation
    #[arg(long, global = true)]
    pub prefix_length: Option<usize>,
}

impl Default for IndexArgs {
    fn default() -> Self {
        IndexArgs {
            config: None,
            dictionaries: Vec::new(),
            term_index: 0,
            count_index: 1,
            separator: None,
            max_edit_distance: None,
            prefix_length: None,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct OCR text
    Correct(CorrectArgs),

    /// Look up a single term
    Lookup(LookupArgs),

    /// Word error rate between a reference and a hypothesis
    Wer(ScoreArgs),

    /// Character error rate between a reference and a hypothesis
    Cer(ScoreArgs),

    /// Compare error rates before and after correction
    Evaluate(EvaluateArgs),

    /// Show index statistics
    Stats,
}

/// Arguments for correcting text
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Text to correct
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Correct each line of a file instead
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// List every replaced token
    #[arg(long)]
    pub details: bool,
}

/// Arguments for a single lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Term to look up
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Return every candidate instead of the closest
    #[arg(long)]
    pub all: bool,

    /// Lookup distance (default: the index's)
    #[arg(long)]
    pub max_distance: Option<usize>,
}

/// Arguments for WER and CER
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Reference text
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Hypothesis text
    #[arg(value_name = "HYPOTHESIS")]
    pub hypothesis: String,
}

/// Arguments for the before/after report
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Reference text
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Raw OCR text
    #[arg(value_name = "ORIGINAL")]
    pub original: String,

    /// Corrected text (default: correct ORIGINAL with the index)
    #[arg(value_name = "HYPOTHESIS")]
    pub hypothesis: Option<String>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
