//! Lookup results and result-size policy.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpellscoreError;

/// A dictionary term found within the lookup distance of a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// The dictionary term.
    pub term: String,
    /// Edit distance between the query and the term.
    pub distance: usize,
    /// Frequency of the term in the dictionary.
    pub frequency: u64,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new<S: Into<String>>(term: S, distance: usize, frequency: u64) -> Self {
        Candidate {
            term: term.into(),
            distance,
            frequency,
        }
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closest first, then the more common word, then alphabetical so the
        // order never depends on hash iteration.
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.frequency.cmp(&self.frequency))
            .then_with(|| self.term.cmp(&other.term))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (distance {}, frequency {})",
            self.term, self.distance, self.frequency
        )
    }
}

/// How many candidates a lookup returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Only the single best candidate.
    #[default]
    Closest,
    /// Every candidate within the distance, best first.
    All,
}

impl FromStr for Verbosity {
    type Err = SpellscoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "closest" => Ok(Verbosity::Closest),
            "all" => Ok(Verbosity::All),
            other => Err(SpellscoreError::invalid_input(format!(
                "unknown verbosity '{other}', expected 'closest' or 'all'"
            ))),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::Closest => write!(f, "closest"),
            Verbosity::All => write!(f, "all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_ordering() {
        let mut candidates = vec![
            Candidate::new("hospitals", 2, 50),
            Candidate::new("hospital", 1, 100),
            Candidate::new("hostel", 2, 80),
            Candidate::new("capital", 2, 80),
        ];
        candidates.sort();

        assert_eq!(candidates[0].term, "hospital");
        assert_eq!(candidates[1].term, "capital"); // tie on frequency, alphabetical
        assert_eq!(candidates[2].term, "hostel");
        assert_eq!(candidates[3].term, "hospitals");
    }

    #[test]
    fn test_verbosity_parsing() {
        assert_eq!("closest".parse::<Verbosity>().unwrap(), Verbosity::Closest);
        assert_eq!("ALL".parse::<Verbosity>().unwrap(), Verbosity::All);
        assert!("top".parse::<Verbosity>().unwrap_err().is_invalid_input());
        assert_eq!(Verbosity::default(), Verbosity::Closest);
        assert_eq!(Verbosity::All.to_string(), "all");
    }

    #[test]
    fn test_candidate_display() {
        let candidate = Candidate::new("hospital", 1, 100);
        assert_eq!(
            candidate.to_string(),
            "hospital (distance 1, frequency 100)"
        );
    }
}
