//! Text normalization shared by the scorers.
//!
//! Normalizing collapses every whitespace run to a single space, trims both
//! ends and lower-cases the result. Reference and hypothesis go through the
//! same function, so case and spacing differences never count as errors.

/// Collapse whitespace runs, trim and lower-case.
///
/// ```
/// use spellscore::analysis::normalizer::normalize_text;
///
/// assert_eq!(normalize_text("  Patient\n suffers   FROM "), "patient suffers from");
/// ```
pub fn normalize_text(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());

    for word in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(&word.to_lowercase());
    }

    normalized
}

/// Normalize and split into words.
pub fn normalized_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
