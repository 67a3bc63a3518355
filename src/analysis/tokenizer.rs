//! Tokenizers that split text into tokens for correction and scoring.
//!
//! Only whitespace tokenization is provided. Punctuation stays attached to the
//! neighbouring word, so `"pain."` is looked up as a single token.
//!
//! # Examples
//!
//! ```
//! use spellscore::analysis::tokenizer::Tokenizer;
//! use spellscore::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens = tokenizer.tokenize("Ths is  smple");
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].text, "smple");
//! ```

pub mod whitespace;

use crate::analysis::token::Token;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a corrector holding a tokenizer can be
/// shared across worker threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text. Tokenization never fails.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}
