//! Before/after comparison of OCR text and its corrected form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::alignment::AlignmentResult;
use crate::scoring::error_rate::{character_alignment, word_alignment};

/// Error rates of the raw OCR text and of the corrected text, both measured
/// against the same reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub wer_before: f64,
    pub wer_after: f64,
    pub cer_before: f64,
    pub cer_after: f64,
    pub word_before: AlignmentResult,
    pub word_after: AlignmentResult,
    pub character_before: AlignmentResult,
    pub character_after: AlignmentResult,
}

impl CorrectionReport {
    /// Score `original` and `corrected` against `reference`.
    ///
    /// ```
    /// use spellscore::scoring::report::CorrectionReport;
    ///
    /// let report = CorrectionReport::evaluate("the cat sat", "teh cat sat", "the cat sat");
    /// assert!(report.wer_improvement() > 0.0);
    /// assert_eq!(report.wer_after, 0.0);
    /// ```
    pub fn evaluate(reference: &str, original: &str, corrected: &str) -> Self {
        let word_before = word_alignment(reference, original);
        let word_after = word_alignment(reference, corrected);
        let character_before = character_alignment(reference, original);
        let character_after = character_alignment(reference, corrected);

        CorrectionReport {
            wer_before: word_before.rate(),
            wer_after: word_after.rate(),
            cer_before: character_before.rate(),
            cer_after: character_after.rate(),
            word_before,
            word_after,
            character_before,
            character_after,
        }
    }

    /// Drop in WER. Negative when correction made things worse.
    pub fn wer_improvement(&self) -> f64 {
        self.wer_before - self.wer_after
    }

    /// Drop in CER.
    pub fn cer_improvement(&self) -> f64 {
        self.cer_before - self.cer_after
    }
}

/// Format a rate as a percentage with two decimals.
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

impl fmt::Display for CorrectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WER before correction: {}", format_rate(self.wer_before))?;
        writeln!(f, "WER after correction:  {}", format_rate(self.wer_after))?;
        writeln!(f, "WER improvement:       {}", format_rate(self.wer_improvement()))?;
        writeln!(f, "CER before correction: {}", format_rate(self.cer_before))?;
        writeln!(f, "CER after correction:  {}", format_rate(self.cer_after))?;
        write!(f, "CER improvement:       {}", format_rate(self.cer_improvement()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        let report = CorrectionReport::evaluate(
            "the patient was admitted",
            "teh patint was admited",
            "the patient was admitted",
        );

        assert_eq!(report.wer_before, 0.75);
        assert_eq!(report.wer_after, 0.0);
        assert_eq!(report.wer_improvement(), 0.75);
        assert_eq!(report.word_before.substitutions, 3);
        assert!(report.cer_before > 0.0);
        assert_eq!(report.cer_after, 0.0);
        assert!(report.cer_improvement() > 0.0);
    }

    #[test]
    fn test_negative_improvement() {
        let report = CorrectionReport::evaluate("a b", "a b", "a c");
        assert_eq!(report.wer_improvement(), -0.5);
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(1.0 / 3.0), "33.33%");
        assert_eq!(format_rate(0.0), "0.00%");
        assert_eq!(format_rate(1.0), "100.00%");
    }

    #[test]
    fn test_display() {
        let report = CorrectionReport::evaluate("the cat", "teh cat", "the cat");
        let text = report.to_string();

        assert!(text.contains("WER before correction: 50.00%"), "{text}");
        assert!(text.contains("WER after correction:  0.00%"), "{text}");
        assert!(text.lines().count() == 6);
    }
}
