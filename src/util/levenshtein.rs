//! Bounded edit distance for candidate verification.
//!
//! The lexicon index verifies candidates with the optimal string alignment
//! variant of Damerau-Levenshtein, which also counts an adjacent transposition
//! as a single edit. Plain Levenshtein distance for the error rates is computed
//! with an operation breakdown in [`crate::scoring::alignment`].
//!
//! Distances are counted over Unicode scalar values, never bytes.

use std::cmp::min;

/// Thresholded distance over char slices.
///
/// Every cell of row `i + 1` is at least the minimum of row `i`, including
/// cells reached through a transposition, so the scan stops as soon as a
/// whole row exceeds the threshold.
fn bounded_distance(s1: &[char], s2: &[char], threshold: usize) -> Option<usize> {
    let len1 = s1.len();
    let len2 = s2.len();

    if len1.abs_diff(len2) > threshold {
        return None;
    }
    if len1 == 0 {
        return Some(len2);
    }
    if len2 == 0 {
        return Some(len1);
    }

    // Row i - 2 feeds transpositions.
    let mut before_prev_row = vec![0; len2 + 1];
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = usize::from(s1[i - 1] != s2[j - 1]);

            let mut value = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            if i > 1 && j > 1 && s1[i - 1] == s2[j - 2] && s1[i - 2] == s2[j - 1] {
                value = min(value, before_prev_row[j - 2] + 1); // transposition
            }

            curr_row[j] = value;
            min_in_row = min(min_in_row, value);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut before_prev_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

/// Optimal string alignment distance from one query to many candidates.
///
/// The query is decoded into chars once and reused for every comparison.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: &str) -> Self {
        LevenshteinMatcher {
            query_chars: query.chars().collect(),
        }
    }

    /// Distance to `candidate`, or `None` once it exceeds `threshold`.
    pub fn distance_threshold(&self, candidate: &str, threshold: usize) -> Option<usize> {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        bounded_distance(&self.query_chars, &candidate_chars, threshold)
    }
}

/// Unbounded Levenshtein distance over any sequence.
#[cfg(test)]
pub(crate) fn sequence_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, a_item) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_item) in b.iter().enumerate() {
            let cost = usize::from(a_item != b_item);
            curr_row[j + 1] = min(min(prev_row[j + 1] + 1, curr_row[j] + 1), prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Unbounded optimal string alignment distance, computed on the full matrix.
#[cfg(test)]
pub(crate) fn osa_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        d[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = min(min(d[i - 1][j] + 1, d[i][j - 1] + 1), d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = min(d[i][j], d[i - 2][j - 2] + 1);
            }
        }
    }

    d[a.len()][b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
        LevenshteinMatcher::new(s1).distance_threshold(s2, threshold)
    }

    #[test]
    fn test_basic_edits() {
        assert_eq!(bounded("", "", 0), Some(0));
        assert_eq!(bounded("", "a", 1), Some(1));
        assert_eq!(bounded("kitten", "sitting", 3), Some(3));
        assert_eq!(bounded("kitten", "sitting", 2), None);
        assert_eq!(bounded("a", "abc", 1), None);
        assert_eq!(bounded("a", "ab", 1), Some(1));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(bounded("café", "cafe", 1), Some(1));
        assert_eq!(bounded("naïve", "naive", 1), Some(1));
    }

    #[test]
    fn test_transpositions() {
        assert_eq!(bounded("ab", "ba", 1), Some(1));
        assert_eq!(bounded("search", "serach", 2), Some(1));
        assert_eq!(bounded("teh", "the", 1), Some(1));
        assert_eq!(bounded("hosptal", "hospital", 2), Some(1));
        assert_eq!(bounded("hospital", "capital", 2), None);
        // Optimal string alignment never edits a substring twice.
        assert_eq!(bounded("ca", "abc", 3), Some(3));
        assert_eq!(bounded("ca", "abc", 2), None);
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(bounded("", "ab", 2), Some(2));
        assert_eq!(bounded("", "abc", 2), None);
        assert_eq!(bounded("abc", "", 3), Some(3));
    }

    #[test]
    fn test_threshold_agrees_with_full_distance() {
        let words = ["smple", "simple", "sample", "ths", "this", "is", "his", "hte", "the"];
        for a in words {
            for b in words {
                let full = osa_distance(a, b);
                for threshold in 0..4 {
                    let expected = (full <= threshold).then_some(full);
                    assert_eq!(bounded(a, b, threshold), expected, "{a} -> {b} at {threshold}");
                }
            }
        }
    }

    #[test]
    fn test_sequence_distance_over_tokens() {
        assert_eq!(sequence_distance(&["the", "cat", "sat"], &["the", "cat", "sit"]), 1);
        assert_eq!(sequence_distance::<&str>(&[], &["a", "b"]), 2);
    }
}
