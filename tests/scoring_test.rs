//! Integration tests for word and character error rates.

use spellscore::scoring::*;
use spellscore::{character_error_rate, word_error_rate};

fn assert_rate(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_word_error_rate_one_substitution() {
    assert_rate(word_error_rate("the cat sat", "the cat sit"), 1.0 / 3.0);

    let alignment = word_alignment("the cat sat", "the cat sit");
    assert_eq!(alignment.substitutions, 1);
    assert_eq!(alignment.deletions, 0);
    assert_eq!(alignment.insertions, 0);
}

#[test]
fn test_character_error_rate_one_insertion() {
    assert_rate(character_error_rate("cat", "cats"), 1.0 / 3.0);
    assert_eq!(character_alignment("cat", "cats").insertions, 1);
}

#[test]
fn test_empty_reference_rates_one() {
    assert_eq!(character_error_rate("", "anything"), 1.0);
    assert_eq!(word_error_rate("", "anything"), 1.0);
    assert_eq!(character_error_rate("", ""), 1.0);
    assert_eq!(word_error_rate("", ""), 1.0);
}

#[test]
fn test_normalization_hides_case_and_spacing() {
    assert_eq!(word_error_rate("A B", "a b"), 0.0);
    assert_eq!(
        character_error_rate("He was  admitted\nto the hospital", "he was admitted to the HOSPITAL"),
        0.0
    );
}

#[test]
fn test_identical_text_scores_zero() {
    let text = "Patient suffers from hypertension and diabetes.";
    assert_eq!(word_error_rate(text, text), 0.0);
    assert_eq!(character_error_rate(text, text), 0.0);
}

#[test]
fn test_punctuation_counts_as_characters() {
    assert_rate(word_error_rate("chest pain.", "chest pain"), 0.5);
    assert_rate(character_error_rate("pain.", "pain"), 0.2);
}

#[test]
fn test_corpus_is_micro_averaged() {
    let pairs = vec![
        ("the cat sat".to_string(), "the cat sit".to_string()),
        (
            "one two three four five six seven".to_string(),
            "one two three four five six seven".to_string(),
        ),
    ];
    let score = score_corpus(&pairs);

    // One edit over ten words, not the mean of 1/3 and 0.
    assert_rate(score.word_error_rate(), 0.1);
    assert_eq!(score.documents, 2);

    let total_edits: usize = pairs
        .iter()
        .map(|(r, h)| word_alignment(r, h).edit_count)
        .sum();
    assert_eq!(score.word.edit_count, total_edits);
}

#[test]
fn test_report_on_scored_text() {
    let report = CorrectionReport::evaluate("the cat sat", "teh cta sat", "the cat sat");

    assert_rate(report.wer_before, 2.0 / 3.0);
    assert_eq!(report.wer_after, 0.0);
    assert_rate(report.wer_improvement(), 2.0 / 3.0);
    assert!(report.cer_before > report.cer_after);
}
