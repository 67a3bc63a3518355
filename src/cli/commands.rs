//! Command implementations for the spellscore CLI.

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::info;
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{DictionarySourceConfig, SpellscoreConfig};
use crate::scoring::alignment::AlignmentResult;
use crate::scoring::error_rate::{character_alignment, word_alignment};
use crate::scoring::report::CorrectionReport;
use crate::spelling::corrector::{CorrectionResult, Corrector};
use crate::spelling::index::LexiconIndex;
use crate::spelling::suggest::Verbosity;

/// Execute a CLI command.
pub fn execute_command(args: SpellscoreArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_text(correct_args, &args),
        Command::Lookup(lookup_args) => lookup_term(lookup_args, &args),
        Command::Wer(score_args) => score(score_args, "WER", word_alignment, &args),
        Command::Cer(score_args) => score(score_args, "CER", character_alignment, &args),
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args, &args),
        Command::Stats => show_stats(&args),
    }
}

/// Merge the configuration file with command line dictionaries and overrides.
pub fn resolve_config(index_args: &IndexArgs) -> Result<SpellscoreConfig> {
    let mut config = match &index_args.config {
        Some(path) => SpellscoreConfig::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => SpellscoreConfig::default(),
    };

    config
        .dictionaries
        .extend(index_args.dictionaries.iter().map(|path| DictionarySourceConfig {
            path: path.clone(),
            term_index: index_args.term_index,
            count_index: index_args.count_index,
            separator: index_args.separator,
        }));

    if let Some(max_edit_distance) = index_args.max_edit_distance {
        config.index.max_edit_distance = max_edit_distance;
    }
    if let Some(prefix_length) = index_args.prefix_length {
        config.index.prefix_length = prefix_length;
    }
    config.index.validate()?;

    if config.dictionaries.is_empty() {
        bail!("no dictionaries configured, pass --dictionary or --config");
    }

    Ok(config)
}

/// Resolve the configuration and build the index.
fn load_index(index_args: &IndexArgs) -> Result<(SpellscoreConfig, LexiconIndex)> {
    let config = resolve_config(index_args)?;

    let start_time = Instant::now();
    let index = config
        .build_index()
        .context("failed to build lexicon index")?;
    info!(
        "[CLI] Index ready in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok((config, index))
}

/// Correct the given text, a file line by line, or stdin.
fn correct_text(args: &CorrectArgs, cli_args: &SpellscoreArgs) -> Result<()> {
    let (_, index) = load_index(&cli_args.index)?;
    let corrector = Corrector::new(&index);

    let results: Vec<CorrectionResult> = match (&args.text, &args.file) {
        (Some(text), _) => vec![corrector.correct_detailed(text)],
        (None, Some(path)) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let lines: Vec<&str> = content.lines().collect();
            lines
                .par_iter()
                .map(|line| corrector.correct_detailed(line))
                .collect()
        }
        (None, None) => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            vec![corrector.correct_detailed(&content)]
        }
    };

    output_result(
        &CorrectionOutput {
            results,
            details: args.details,
        },
        cli_args,
    )?;
    Ok(())
}

/// Look up one term.
fn lookup_term(args: &LookupArgs, cli_args: &SpellscoreArgs) -> Result<()> {
    let (_, index) = load_index(&cli_args.index)?;

    let verbosity = if args.all {
        Verbosity::All
    } else {
        Verbosity::Closest
    };
    let max_distance = args
        .max_distance
        .unwrap_or(index.max_edit_distance())
        .min(index.max_edit_distance());
    let term = args.term.to_lowercase();
    let candidates = index.lookup(&term, max_distance, verbosity);

    output_result(
        &LookupOutput {
            term,
            max_distance,
            candidates,
        },
        cli_args,
    )?;
    Ok(())
}

/// Compute WER or CER. No dictionary is needed.
fn score(
    args: &ScoreArgs,
    metric: &str,
    align: fn(&str, &str) -> AlignmentResult,
    cli_args: &SpellscoreArgs,
) -> Result<()> {
    let alignment = align(&args.reference, &args.hypothesis);

    output_result(
        &ScoreOutput {
            metric: metric.to_string(),
            rate: alignment.rate(),
            alignment,
        },
        cli_args,
    )?;
    Ok(())
}

/// Report error rates before and after correction.
fn evaluate(args: &EvaluateArgs, cli_args: &SpellscoreArgs) -> Result<()> {
    let corrected = match &args.hypothesis {
        Some(hypothesis) => hypothesis.clone(),
        None => {
            let (_, index) = load_index(&cli_args.index)?;
            Corrector::new(&index).correct(&args.original)
        }
    };

    let report = CorrectionReport::evaluate(&args.reference, &args.original, &corrected);

    output_result(
        &EvaluationOutput {
            reference: args.reference.clone(),
            original: args.original.clone(),
            corrected,
            report,
        },
        cli_args,
    )?;
    Ok(())
}

/// Show index statistics.
fn show_stats(cli_args: &SpellscoreArgs) -> Result<()> {
    let (config, index) = load_index(&cli_args.index)?;

    output_result(
        &StatsOutput {
            dictionaries: config
                .dictionaries
                .iter()
                .map(|d| d.path.display().to_string())
                .collect(),
            stats: index.stats(),
        },
        cli_args,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_config_requires_dictionaries() {
        let err = resolve_config(&IndexArgs::default()).unwrap_err();
        assert!(err.to_string().contains("no dictionaries"), "{err}");
    }

    #[test]
    fn test_resolve_config_appends_cli_dictionaries() {
        let mut config_file = NamedTempFile::new().unwrap();
        write!(
            config_file,
            r#"{{"index": {{"max_edit_distance": 1}}, "dictionaries": [{{"path": "general.txt"}}]}}"#
        )
        .unwrap();
        config_file.flush().unwrap();

        let index_args = IndexArgs {
            config: Some(config_file.path().to_path_buf()),
            dictionaries: vec![PathBuf::from("medical.csv")],
            term_index: 1,
            count_index: 0,
            separator: Some(','),
            max_edit_distance: None,
            prefix_length: Some(5),
        };
        let config = resolve_config(&index_args).unwrap();

        assert_eq!(config.index.max_edit_distance, 1);
        assert_eq!(config.index.prefix_length, 5);
        assert_eq!(config.dictionaries.len(), 2);
        assert_eq!(config.dictionaries[0].path, PathBuf::from("general.txt"));
        assert_eq!(config.dictionaries[1].separator, Some(','));
        assert_eq!(config.dictionaries[1].term_index, 1);
    }

    #[test]
    fn test_resolve_config_rejects_bad_overrides() {
        let index_args = IndexArgs {
            dictionaries: vec![PathBuf::from("d.txt")],
            max_edit_distance: Some(3),
            prefix_length: Some(3),
            ..IndexArgs::default()
        };
        assert!(resolve_config(&index_args).is_err());
    }

    #[test]
    fn test_load_index_from_dictionary_flag() {
        let mut dictionary = NamedTempFile::new().unwrap();
        writeln!(dictionary, "hospital 100").unwrap();
        writeln!(dictionary, "hospitals 50").unwrap();
        dictionary.flush().unwrap();

        let index_args = IndexArgs {
            dictionaries: vec![dictionary.path().to_path_buf()],
            count_index: 1,
            ..IndexArgs::default()
        };
        let (_, index) = load_index(&index_args).unwrap();
        assert_eq!(index.closest("hosptal").unwrap().term, "hospital");
    }
}
