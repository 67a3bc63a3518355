//! Error types for the spellscore library.
//!
//! All fallible operations return [`SpellscoreError`] through the crate-wide
//! [`Result`] alias. Only index construction and dictionary loading can fail;
//! lookups, correction and scoring are total.
//!
//! # Examples
//!
//! ```
//! use spellscore::error::{Result, SpellscoreError};
//!
//! fn check_distance(max_edit_distance: usize) -> Result<()> {
//!     if max_edit_distance < 1 {
//!         return Err(SpellscoreError::invalid_input("max_edit_distance must be >= 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_distance(0).is_err());
//! assert!(check_distance(2).is_ok());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spellscore operations.
#[derive(Error, Debug)]
pub enum SpellscoreError {
    /// Malformed build parameters or dictionary records.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors while reading dictionaries or configuration.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON configuration errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SpellscoreError.
pub type Result<T> = std::result::Result<T, SpellscoreError>;

impl SpellscoreError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SpellscoreError::InvalidInput(msg.into())
    }

    /// Whether this error reports untrustworthy build input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SpellscoreError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = SpellscoreError::invalid_input("prefix_length must be >= 1");
        assert_eq!(
            error.to_string(),
            "Invalid input: prefix_length must be >= 1"
        );
        assert!(error.is_invalid_input());

        let error = SpellscoreError::from(io::Error::other("disk gone"));
        assert_eq!(error.to_string(), "I/O error: disk gone");
        assert!(!error.is_invalid_input());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SpellscoreError::from(io_error);

        match error {
            SpellscoreError::Io(_) => {} // Expected
            _ => panic!("Expected IO error"),
        }
    }
}
