//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellscoreArgs};
use crate::error::Result;
use crate::scoring::alignment::AlignmentResult;
use crate::scoring::report::{CorrectionReport, format_rate};
use crate::spelling::corrector::CorrectionResult;
use crate::spelling::index::IndexStats;
use crate::spelling::suggest::Candidate;

/// Result structure for text correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionOutput {
    pub results: Vec<CorrectionResult>,
    #[serde(skip)]
    pub details: bool,
}

impl fmt::Display for CorrectionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", result.corrected)?;

            if self.details {
                for correction in &result.corrections {
                    write!(
                        f,
                        "\n  [{}] {} -> {} (distance {})",
                        correction.position,
                        correction.original,
                        correction.corrected,
                        correction.distance
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// Result structure for a term lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupOutput {
    pub term: String,
    pub max_distance: usize,
    pub candidates: Vec<Candidate>,
}

impl fmt::Display for LookupOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.candidates.is_empty() {
            return write!(
                f,
                "No match for '{}' within distance {}",
                self.term, self.max_distance
            );
        }

        for (i, candidate) in self.candidates.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{candidate}")?;
        }
        Ok(())
    }
}

/// Result structure for WER and CER.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreOutput {
    pub metric: String,
    pub rate: f64,
    pub alignment: AlignmentResult,
}

impl fmt::Display for ScoreOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.alignment;
        write!(
            f,
            "{}: {} ({} hits, {} edits over {}: {} substitutions, {} deletions, {} insertions)",
            self.metric,
            format_rate(self.rate),
            a.hits(),
            a.edit_count,
            a.reference_length,
            a.substitutions,
            a.deletions,
            a.insertions
        )
    }
}

/// Result structure for a before/after evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationOutput {
    pub reference: String,
    pub original: String,
    pub corrected: String,
    pub report: CorrectionReport,
}

impl fmt::Display for EvaluationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reference: {}", self.reference)?;
        writeln!(f, "Original:  {}", self.original)?;
        writeln!(f, "Corrected: {}", self.corrected)?;
        writeln!(f)?;
        write!(f, "{}", self.report)
    }
}

/// Index statistics together with the dictionaries they came from.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsOutput {
    pub dictionaries: Vec<String>,
    pub stats: IndexStats,
}

impl fmt::Display for StatsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dictionaries: {}", self.dictionaries.join(", "))?;
        writeln!(f, "Terms: {}", self.stats.term_count)?;
        writeln!(f, "Delete keys: {}", self.stats.delete_key_count)?;
        writeln!(f, "Postings: {}", self.stats.posting_count)?;
        writeln!(f, "Longest term: {} chars", self.stats.max_term_length)?;
        writeln!(f, "Max edit distance: {}", self.stats.max_edit_distance)?;
        write!(f, "Prefix length: {}", self.stats.prefix_length)
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + fmt::Display>(result: &T, args: &SpellscoreArgs) -> Result<()> {
    println!("{}", render(result, args.output_format, args.pretty)?);
    Ok(())
}

/// Render a result to a string.
pub fn render<T: Serialize + fmt::Display>(
    result: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(result.to_string()),
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}
