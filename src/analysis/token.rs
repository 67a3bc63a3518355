//! Token type produced by tokenizers.
//!
//! A [`Token`] borrows its text from the input, so tokenizing a line of OCR
//! output allocates only the token vector.
//!
//! ```
//! use spellscore::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.position, 1);
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

/// A single unit of text after tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token's text, a slice of the tokenized input.
    pub text: &'a str,
    /// Position in the token stream (0-based).
    pub position: usize,
    /// Byte offset of the first byte in the input.
    pub start_offset: usize,
    /// Byte offset one past the last byte in the input.
    pub end_offset: usize,
}

impl<'a> Token<'a> {
    /// Create a token with explicit byte offsets.
    pub fn with_offsets(text: &'a str, position: usize, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text,
            position,
            start_offset,
            end_offset,
        }
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} [{}..{}]",
            self.text, self.position, self.start_offset, self.end_offset
        )
    }
}
