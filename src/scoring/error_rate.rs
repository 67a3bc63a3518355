//! Word and character error rates.
//!
//! Both sides are normalized first (see [`crate::analysis::normalizer`]), so
//! case and spacing differences are never counted. WER aligns whitespace
//! tokens, CER aligns chars of the normalized string. Each substitution,
//! deletion and insertion costs one edit, and the edit count is divided by
//! the reference length. An empty reference yields 1.0.
//!
//! # Examples
//!
//! ```
//! use spellscore::scoring::error_rate::{character_error_rate, word_error_rate};
//!
//! assert!((word_error_rate("the cat sat", "the cat sit") - 1.0 / 3.0).abs() < 1e-9);
//! assert!((character_error_rate("cat", "cats") - 1.0 / 3.0).abs() < 1e-9);
//! assert_eq!(word_error_rate("A  B", "a b"), 0.0);
//! ```

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{normalize_text, normalized_words};
use crate::scoring::alignment::{AlignmentResult, align};

/// Word-level alignment of two texts.
pub fn word_alignment(reference: &str, hypothesis: &str) -> AlignmentResult {
    let reference = normalized_words(reference);
    let hypothesis = normalized_words(hypothesis);
    align(&reference, &hypothesis)
}

/// Character-level alignment of two texts.
pub fn character_alignment(reference: &str, hypothesis: &str) -> AlignmentResult {
    let reference: Vec<char> = normalize_text(reference).chars().collect();
    let hypothesis: Vec<char> = normalize_text(hypothesis).chars().collect();
    align(&reference, &hypothesis)
}

/// Word error rate of `hypothesis` against `reference`.
pub fn word_error_rate(reference: &str, hypothesis: &str) -> f64 {
    word_alignment(reference, hypothesis).rate()
}

/// Character error rate of `hypothesis` against `reference`.
pub fn character_error_rate(reference: &str, hypothesis: &str) -> f64 {
    character_alignment(reference, hypothesis).rate()
}

/// Micro-averaged scores over many documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusScore {
    /// Number of scored pairs.
    pub documents: usize,
    /// Summed word alignment.
    pub word: AlignmentResult,
    /// Summed character alignment.
    pub character: AlignmentResult,
}

impl CorpusScore {
    /// Total word edits over total reference words.
    pub fn word_error_rate(&self) -> f64 {
        self.word.rate()
    }

    /// Total char edits over total reference chars.
    pub fn character_error_rate(&self) -> f64 {
        self.character.rate()
    }
}

/// Score `(reference, hypothesis)` pairs in parallel and sum the alignments.
///
/// Long documents weigh more than short ones, unlike a mean of per-document
/// rates.
pub fn score_corpus<R, H>(pairs: &[(R, H)]) -> CorpusScore
where
    R: AsRef<str> + Sync,
    H: AsRef<str> + Sync,
{
    let score = pairs
        .par_iter()
        .map(|(reference, hypothesis)| CorpusScore {
            documents: 1,
            word: word_alignment(reference.as_ref(), hypothesis.as_ref()),
            character: character_alignment(reference.as_ref(), hypothesis.as_ref()),
        })
        .reduce(CorpusScore::default, |a, b| CorpusScore {
            documents: a.documents + b.documents,
            word: a.word + b.word,
            character: a.character + b.character,
        });

    debug!(
        "[Scoring] Corpus of {} documents: {} word edits over {} words",
        score.documents, score.word.edit_count, score.word.reference_length
    );

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_word_error_rate() {
        assert_close(word_error_rate("the cat sat", "the cat sit"), 1.0 / 3.0);
        assert_close(word_error_rate("the cat sat", "the cat sat"), 0.0);
        assert_close(word_error_rate("the cat sat", "cat sat"), 1.0 / 3.0);
        assert_close(word_error_rate("the cat", "the black cat sat"), 1.0);
    }

    #[test]
    fn test_word_error_rate_can_exceed_one() {
        assert_close(word_error_rate("a", "b c d"), 3.0);
    }

    #[test]
    fn test_character_error_rate() {
        assert_close(character_error_rate("cat", "cats"), 1.0 / 3.0);
        assert_close(character_error_rate("cat", "cat"), 0.0);
        assert_close(character_error_rate("hospital", "hosptal"), 1.0 / 8.0);
    }

    #[test]
    fn test_rates_ignore_case_and_spacing() {
        assert_eq!(word_error_rate("A B", "a b"), 0.0);
        assert_eq!(word_error_rate("  A\n\nB ", "a b"), 0.0);
        assert_eq!(character_error_rate("Hello  World", "hello world"), 0.0);
    }

    #[test]
    fn test_empty_reference() {
        assert_eq!(word_error_rate("", "anything"), 1.0);
        assert_eq!(character_error_rate("", "anything"), 1.0);
        assert_eq!(character_error_rate("", ""), 1.0);
        assert_eq!(word_error_rate("   ", ""), 1.0);
    }

    #[test]
    fn test_self_rate_is_zero() {
        for text in ["x", "patient", "He was admitted to the hospital."] {
            assert_eq!(character_error_rate(text, text), 0.0);
            assert_eq!(word_error_rate(text, text), 0.0);
        }
    }

    #[test]
    fn test_alignment_breakdown() {
        let result = word_alignment("the cat sat on the mat", "the cat sit on mat now");
        assert_eq!(result.reference_length, 6);
        assert_eq!(result.edit_count, 3);
        assert_eq!(result.substitutions + result.deletions + result.insertions, 3);
    }

    #[test]
    fn test_score_corpus() {
        let pairs = vec![
            ("the cat sat", "the cat sit"),
            ("hello world", "hello world"),
            ("a b c d e", "a b"),
        ];
        let score = score_corpus(&pairs);

        assert_eq!(score.documents, 3);
        assert_eq!(score.word.reference_length, 10);
        assert_eq!(score.word.edit_count, 4);
        assert_close(score.word_error_rate(), 0.4);

        let expected_chars: usize = pairs.iter().map(|(r, _)| r.chars().count()).sum();
        assert_eq!(score.character.reference_length, expected_chars);
    }

    #[test]
    fn test_score_empty_corpus() {
        let pairs: Vec<(String, String)> = Vec::new();
        let score = score_corpus(&pairs);
        assert_eq!(score.documents, 0);
        assert_eq!(score.word_error_rate(), 1.0);
    }
}
