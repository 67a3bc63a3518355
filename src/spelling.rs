//! Dictionary-driven spelling correction for OCR output.
//!
//! Frequency dictionaries are loaded into [`dictionary::DictionarySource`]s,
//! merged into a symmetric-delete [`index::LexiconIndex`], and applied to text
//! token by token by a [`corrector::Corrector`].

pub mod corrector;
pub mod dictionary;
pub mod index;
pub mod suggest;

pub use corrector::{CorrectionResult, Corrector, TokenCorrection, correct};
pub use dictionary::{DictionaryEntry, DictionaryFormat, DictionarySource};
pub use index::{IndexConfig, IndexStats, LexiconIndex, LexiconIndexBuilder, build_index};
pub use suggest::{Candidate, Verbosity};
