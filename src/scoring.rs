//! Alignment-based accuracy metrics for recognized text.
//!
//! Scoring is independent of the lexicon index: it only compares a reference
//! transcription with a hypothesis.

pub mod alignment;
pub mod error_rate;
pub mod report;

pub use alignment::{AlignmentResult, align};
pub use error_rate::{
    CorpusScore, character_alignment, character_error_rate, score_corpus, word_alignment,
    word_error_rate,
};
pub use report::CorrectionReport;
