//! Dictionary records and the frequency-file loader.
//!
//! A dictionary source is an ordered list of `(term, frequency)` records.
//! Sources are usually read from text files with one record per line, for
//! example `hospital 2412`. The column layout and separator are configurable
//! through [`DictionaryFormat`].

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellscoreError};

/// A single vocabulary term with its corpus frequency.
///
/// The term is always lower-cased, non-empty and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    term: String,
    frequency: u64,
}

impl DictionaryEntry {
    /// Create a validated entry. The term is lower-cased.
    pub fn new(term: &str, frequency: u64) -> Result<Self> {
        match term_problem(term) {
            Some(problem) => Err(SpellscoreError::invalid_input(problem)),
            None => Ok(DictionaryEntry {
                term: term.to_lowercase(),
                frequency,
            }),
        }
    }

    /// The lower-cased term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The term's frequency.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }
}

/// Describe why a term cannot enter a dictionary, if it cannot.
fn term_problem(term: &str) -> Option<String> {
    if term.is_empty() {
        Some("dictionary term is empty".to_string())
    } else if term.chars().any(char::is_whitespace) {
        Some(format!("dictionary term {term:?} contains whitespace"))
    } else {
        None
    }
}

/// Column layout of a frequency file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryFormat {
    /// Column holding the term.
    pub term_index: usize,
    /// Column holding the frequency.
    pub count_index: usize,
    /// Field separator. `None` splits on any whitespace run.
    pub separator: Option<char>,
}

impl Default for DictionaryFormat {
    fn default() -> Self {
        DictionaryFormat {
            term_index: 0,
            count_index: 1,
            separator: None,
        }
    }
}

impl DictionaryFormat {
    /// Parse one non-blank line into an entry.
    fn parse_line(&self, line: &str) -> std::result::Result<DictionaryEntry, String> {
        let fields: Vec<&str> = match self.separator {
            Some(separator) => line.split(separator).map(str::trim).collect(),
            None => line.split_whitespace().collect(),
        };

        let term = fields
            .get(self.term_index)
            .ok_or_else(|| format!("missing term column {}", self.term_index))?;
        let count = fields
            .get(self.count_index)
            .ok_or_else(|| format!("missing count column {}", self.count_index))?;
        let frequency = count
            .parse::<u64>()
            .map_err(|e| format!("invalid frequency {count:?}: {e}"))?;

        match term_problem(term) {
            Some(problem) => Err(problem),
            None => Ok(DictionaryEntry {
                term: term.to_lowercase(),
                frequency,
            }),
        }
    }
}

/// An ordered list of dictionary entries from one origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DictionarySource {
    name: String,
    entries: Vec<DictionaryEntry>,
}

impl DictionarySource {
    /// Create an empty source. The name only appears in logs and errors.
    pub fn new<S: Into<String>>(name: S) -> Self {
        DictionarySource {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Build a source from in-memory `(term, frequency)` pairs.
    ///
    /// ```
    /// use spellscore::spelling::dictionary::DictionarySource;
    ///
    /// let source = DictionarySource::from_pairs("medical", [("hospital", 100), ("hospitals", 50)])?;
    /// assert_eq!(source.len(), 2);
    /// # Ok::<(), spellscore::error::SpellscoreError>(())
    /// ```
    pub fn from_pairs<N, I, S>(name: N, pairs: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut source = DictionarySource::new(name);
        for (term, frequency) in pairs {
            source.push(term.as_ref(), frequency)?;
        }
        Ok(source)
    }

    /// Append a record.
    pub fn push(&mut self, term: &str, frequency: u64) -> Result<()> {
        if let Some(problem) = term_problem(term) {
            return Err(SpellscoreError::invalid_input(format!(
                "source '{}': {problem}",
                self.name
            )));
        }

        self.entries.push(DictionaryEntry {
            term: term.to_lowercase(),
            frequency,
        });
        Ok(())
    }

    /// Load a frequency file.
    pub fn load_from_file<P: AsRef<Path>>(path: P, format: &DictionaryFormat) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::load_from_reader(path.display().to_string(), file, format)
    }

    /// Load records from any reader, one per line.
    ///
    /// Blank lines are skipped. Any other line that cannot be parsed aborts
    /// the load: a partially read dictionary is never returned.
    pub fn load_from_reader<N: Into<String>, R: Read>(
        name: N,
        reader: R,
        format: &DictionaryFormat,
    ) -> Result<Self> {
        let mut source = DictionarySource::new(name);
        let reader = BufReader::new(reader);

        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let entry = format.parse_line(&line).map_err(|reason| {
                SpellscoreError::invalid_input(format!(
                    "source '{}' line {}: {reason}",
                    source.name,
                    line_number + 1
                ))
            })?;
            source.entries.push(entry);
        }

        debug!(
            "[Dictionary] Loaded {} records from '{}'",
            source.entries.len(),
            source.name
        );

        Ok(source)
    }

    /// Name of this source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records in load order.
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the source has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
