//! Text analysis for correction and scoring.
//!
//! Holds the tokenizer seam used by the corrector and the normalization
//! contract applied before word and character error rates are computed.

pub mod normalizer;
pub mod token;
pub mod tokenizer;
