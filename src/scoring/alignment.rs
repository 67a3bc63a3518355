//! Minimal edit alignment between a reference and a hypothesis sequence.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Edit counts of a minimal alignment.
///
/// `edit_count` is always `substitutions + deletions + insertions`. Deletions
/// are reference items missing from the hypothesis, insertions are
/// hypothesis items with no counterpart in the reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// Total number of edits.
    pub edit_count: usize,
    /// Number of items in the reference.
    pub reference_length: usize,
    /// Reference items replaced by a different hypothesis item.
    pub substitutions: usize,
    /// Reference items dropped by the hypothesis.
    pub deletions: usize,
    /// Extra hypothesis items.
    pub insertions: usize,
}

impl AlignmentResult {
    /// Edits per reference item. An empty reference rates 1.0 whatever the
    /// hypothesis is.
    pub fn rate(&self) -> f64 {
        if self.reference_length == 0 {
            1.0
        } else {
            self.edit_count as f64 / self.reference_length as f64
        }
    }

    /// Reference items aligned to an identical hypothesis item.
    pub fn hits(&self) -> usize {
        self.reference_length - self.substitutions - self.deletions
    }
}

impl Add for AlignmentResult {
    type Output = AlignmentResult;

    fn add(self, other: AlignmentResult) -> AlignmentResult {
        AlignmentResult {
            edit_count: self.edit_count + other.edit_count,
            reference_length: self.reference_length + other.reference_length,
            substitutions: self.substitutions + other.substitutions,
            deletions: self.deletions + other.deletions,
            insertions: self.insertions + other.insertions,
        }
    }
}

impl AddAssign for AlignmentResult {
    fn add_assign(&mut self, other: AlignmentResult) {
        *self = *self + other;
    }
}

impl Sum for AlignmentResult {
    fn sum<I: Iterator<Item = AlignmentResult>>(iter: I) -> Self {
        iter.fold(AlignmentResult::default(), Add::add)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    substitutions: usize,
    deletions: usize,
    insertions: usize,
}

impl Cell {
    fn cost(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }
}

/// Align two sequences with unit-cost substitution, deletion and insertion.
///
/// Each cell of the dynamic programming rows carries its operation counts, so
/// the breakdown comes out without a backtrace matrix. On equal cost the
/// diagonal move is preferred, then deletion.
///
/// ```
/// use spellscore::scoring::alignment::align;
///
/// let result = align(&["the", "cat", "sat"], &["the", "cat", "sit"]);
/// assert_eq!(result.edit_count, 1);
/// assert_eq!(result.substitutions, 1);
/// assert_eq!(result.reference_length, 3);
/// ```
pub fn align<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> AlignmentResult {
    let mut prev_row: Vec<Cell> = (0..=hypothesis.len())
        .map(|j| Cell {
            insertions: j,
            ..Cell::default()
        })
        .collect();
    let mut curr_row = vec![Cell::default(); hypothesis.len() + 1];

    for (i, ref_item) in reference.iter().enumerate() {
        curr_row[0] = Cell {
            deletions: i + 1,
            ..Cell::default()
        };

        for (j, hyp_item) in hypothesis.iter().enumerate() {
            let mut diagonal = prev_row[j];
            if ref_item != hyp_item {
                diagonal.substitutions += 1;
            }

            let mut deletion = prev_row[j + 1];
            deletion.deletions += 1;

            let mut insertion = curr_row[j];
            insertion.insertions += 1;

            let mut best = diagonal;
            if deletion.cost() < best.cost() {
                best = deletion;
            }
            if insertion.cost() < best.cost() {
                best = insertion;
            }
            curr_row[j + 1] = best;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let last = prev_row[hypothesis.len()];
    AlignmentResult {
        edit_count: last.cost(),
        reference_length: reference.len(),
        substitutions: last.substitutions,
        deletions: last.deletions,
        insertions: last.insertions,
    }
}
