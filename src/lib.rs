//! # Spellscore
//!
//! Vocabulary-driven correction of noisy OCR text, and word/character error
//! rate scoring of the result.
//!
//! ## Features
//!
//! - Symmetric-delete lexicon index with bounded edit-distance lookup
//! - Ordered merging of general and domain dictionaries
//! - Token-by-token text correction, sequential or batched with rayon
//! - WER and CER with substitution/deletion/insertion breakdown
//! - Before/after correction reports and corpus-level scoring
//!
//! ## Example
//!
//! ```
//! use spellscore::{build_index, character_error_rate, correct, word_error_rate};
//! use spellscore::spelling::{DictionarySource, IndexConfig};
//!
//! let source = DictionarySource::from_pairs("general", [("this", 500), ("is", 900), ("simple", 40)])?;
//! let index = build_index(&[source], IndexConfig::default())?;
//!
//! let corrected = correct("Ths is smple", &index);
//! assert_eq!(corrected, "this is simple");
//! assert_eq!(word_error_rate("this is simple", &corrected), 0.0);
//! assert!(character_error_rate("this is simple", "Ths is smple") > 0.0);
//! # Ok::<(), spellscore::error::SpellscoreError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod scoring;
pub mod spelling;
pub mod util;

pub use error::{Result, SpellscoreError};
pub use scoring::error_rate::{character_error_rate, word_error_rate};
pub use spelling::corrector::correct;
pub use spelling::index::build_index;

pub mod prelude {
    pub use crate::config::SpellscoreConfig;
    pub use crate::error::{Result, SpellscoreError};
    pub use crate::scoring::{
        AlignmentResult, CorpusScore, CorrectionReport, character_error_rate, score_corpus,
        word_error_rate,
    };
    pub use crate::spelling::{
        Candidate, CorrectionResult, Corrector, DictionaryFormat, DictionarySource, IndexConfig,
        LexiconIndex, Verbosity, build_index, correct,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
