//! Token-by-token correction of OCR text against a lexicon index.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::spelling::index::LexiconIndex;
use crate::spelling::suggest::Verbosity;

/// One token that the corrector replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCorrection {
    /// Position of the token in the input (0-based).
    pub position: usize,
    /// The token as it appeared in the input.
    pub original: String,
    /// The dictionary term that replaced it.
    pub corrected: String,
    /// Edit distance between the lower-cased token and the replacement.
    pub distance: usize,
}

/// Corrected text together with the individual replacements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Input text.
    pub original: String,
    /// Output text, tokens joined by single spaces.
    pub corrected: String,
    /// Tokens whose output differs from their input.
    pub corrections: Vec<TokenCorrection>,
}

impl CorrectionResult {
    /// Whether any token was changed.
    pub fn has_corrections(&self) -> bool {
        !self.corrections.is_empty()
    }
}

/// Replaces each token with its closest dictionary term.
///
/// Tokens are lower-cased before lookup. A token with no candidate within
/// the distance is emitted unchanged, case and punctuation included.
#[derive(Clone)]
pub struct Corrector<'a> {
    index: &'a LexiconIndex,
    max_edit_distance: usize,
    tokenizer: Arc<dyn Tokenizer>,
}

impl<'a> Corrector<'a> {
    /// Create a corrector that uses the index's build distance and splits on
    /// whitespace.
    pub fn new(index: &'a LexiconIndex) -> Self {
        Corrector {
            index,
            max_edit_distance: index.max_edit_distance(),
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
        }
    }

    /// Lower the lookup distance. Values above the index's build distance
    /// are clamped by the index.
    pub fn with_max_edit_distance(mut self, max_edit_distance: usize) -> Self {
        self.max_edit_distance = max_edit_distance;
        self
    }

    /// Use a different tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Lookup distance in use.
    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    /// Correct a text and return only the output string.
    pub fn correct(&self, text: &str) -> String {
        self.correct_detailed(text).corrected
    }

    /// Correct a text and report every replaced token.
    pub fn correct_detailed(&self, text: &str) -> CorrectionResult {
        let tokens = self.tokenizer.tokenize(text);
        let mut output: Vec<String> = Vec::with_capacity(tokens.len());
        let mut corrections = Vec::new();

        for token in &tokens {
            if token.text.is_empty() {
                continue;
            }
            let query = token.text.to_lowercase();
            let best = self
                .index
                .lookup(&query, self.max_edit_distance, Verbosity::Closest)
                .into_iter()
                .next();

            match best {
                Some(candidate) => {
                    if candidate.term != token.text {
                        corrections.push(TokenCorrection {
                            position: token.position,
                            original: token.text.to_string(),
                            corrected: candidate.term.clone(),
                            distance: candidate.distance,
                        });
                    }
                    output.push(candidate.term);
                }
                None => output.push(token.text.to_string()),
            }
        }

        debug!(
            "[Corrector] {} tokens ({}), {} replaced",
            tokens.len(),
            self.tokenizer.name(),
            corrections.len()
        );

        CorrectionResult {
            original: text.to_string(),
            corrected: output.join(" "),
            corrections,
        }
    }

    /// Correct many texts in parallel. Output order matches input order.
    pub fn correct_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.correct(text.as_ref()))
            .collect()
    }
}

/// Correct `text` with a default [`Corrector`] over `index`.
///
/// ```
/// use spellscore::spelling::corrector::correct;
/// use spellscore::spelling::dictionary::DictionarySource;
/// use spellscore::spelling::index::{build_index, IndexConfig};
///
/// let source = DictionarySource::from_pairs(
///     "general",
///     [("the", 1000), ("patient", 80), ("was", 900), ("admitted", 25)],
/// )?;
/// let index = build_index(&[source], IndexConfig::default())?;
///
/// assert_eq!(correct("The patint was admited", &index), "the patient was admitted");
/// # Ok::<(), spellscore::error::SpellscoreError>(())
/// ```
pub fn correct(text: &str, index: &LexiconIndex) -> String {
    Corrector::new(index).correct(text)
}
