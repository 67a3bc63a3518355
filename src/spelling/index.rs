//! Symmetric-delete lexicon index for approximate term lookup.
//!
//! At build time every term is reduced to its first `prefix_length` chars and
//! all strings obtainable by deleting up to `max_edit_distance` chars from that
//! prefix are registered as keys pointing back at the term. A query is reduced
//! the same way, so a lookup probes a number of keys that depends only on the
//! query length and the distance, never on the dictionary size. Every term
//! reached through a key is then verified with the optimal string alignment
//! distance against the full query.
//!
//! Deletes are enough on both sides because a substitution or an adjacent
//! transposition can be undone by deleting one char from each string, and an
//! insertion by deleting from the longer one.
//!
//! Mutation lives on [`LexiconIndexBuilder`]. [`LexiconIndexBuilder::build`]
//! consumes the builder and returns a [`LexiconIndex`] that only exposes
//! `&self` methods, so a built index can be shared across threads without
//! locking.
//!
//! # Examples
//!
//! ```
//! use spellscore::spelling::dictionary::DictionarySource;
//! use spellscore::spelling::index::{build_index, IndexConfig};
//! use spellscore::spelling::suggest::Verbosity;
//!
//! let source = DictionarySource::from_pairs("medical", [("hospital", 100), ("hospitals", 50)])?;
//! let index = build_index(&[source], IndexConfig::default())?;
//!
//! let candidates = index.lookup("hosptal", 2, Verbosity::Closest);
//! assert_eq!(candidates[0].term, "hospital");
//! assert_eq!(candidates[0].distance, 1);
//! # Ok::<(), spellscore::error::SpellscoreError>(())
//! ```

use ahash::{AHashMap, AHashSet};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellscoreError};
use crate::spelling::dictionary::{DictionaryEntry, DictionarySource};
use crate::spelling::suggest::{Candidate, Verbosity};
use crate::util::levenshtein::LevenshteinMatcher;

/// Position of a term in the index's term table.
type TermId = u32;

/// Build parameters of a lexicon index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Largest edit distance a lookup may use.
    pub max_edit_distance: usize,
    /// Number of leading chars of each term that deletes are generated from.
    pub prefix_length: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            max_edit_distance: 2,
            prefix_length: 7,
        }
    }
}

impl IndexConfig {
    /// Create a configuration.
    pub fn new(max_edit_distance: usize, prefix_length: usize) -> Self {
        IndexConfig {
            max_edit_distance,
            prefix_length,
        }
    }

    /// Check the parameters.
    pub fn validate(&self) -> Result<()> {
        if self.max_edit_distance < 1 {
            return Err(SpellscoreError::invalid_input(
                "max_edit_distance must be at least 1",
            ));
        }
        if self.prefix_length < 1 {
            return Err(SpellscoreError::invalid_input(
                "prefix_length must be at least 1",
            ));
        }
        // Otherwise every term would collapse onto the empty key.
        if self.prefix_length <= self.max_edit_distance {
            return Err(SpellscoreError::invalid_input(format!(
                "prefix_length ({}) must be greater than max_edit_distance ({})",
                self.prefix_length, self.max_edit_distance
            )));
        }
        Ok(())
    }
}

/// Outcome of adding one dictionary source to a builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    /// Terms that were new to the index.
    pub inserted: usize,
    /// Terms ignored because an earlier source already provided them.
    pub duplicates: usize,
}

/// Size figures of a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of distinct terms.
    pub term_count: usize,
    /// Number of distinct delete-variant keys.
    pub delete_key_count: usize,
    /// Number of (key, term) registrations.
    pub posting_count: usize,
    /// Length in chars of the longest term.
    pub max_term_length: usize,
    /// Build-time maximum edit distance.
    pub max_edit_distance: usize,
    /// Build-time prefix length.
    pub prefix_length: usize,
}

/// Mutable construction phase of a [`LexiconIndex`].
#[derive(Debug)]
pub struct LexiconIndexBuilder {
    config: IndexConfig,
    terms: Vec<DictionaryEntry>,
    term_ids: AHashMap<String, TermId>,
    deletes: AHashMap<String, Vec<TermId>>,
    max_term_length: usize,
}

impl LexiconIndexBuilder {
    /// Create a builder. Fails if the configuration is invalid.
    pub fn new(config: IndexConfig) -> Result<Self> {
        config.validate()?;

        Ok(LexiconIndexBuilder {
            config,
            terms: Vec::new(),
            term_ids: AHashMap::new(),
            deletes: AHashMap::new(),
            max_term_length: 0,
        })
    }

    /// Add an entry unless its term is already present.
    ///
    /// Returns `true` when the term was inserted. The first frequency seen
    /// for a term is kept.
    pub fn add_entry(&mut self, entry: &DictionaryEntry) -> Result<bool> {
        if self.term_ids.contains_key(entry.term()) {
            return Ok(false);
        }

        let id = TermId::try_from(self.terms.len())
            .map_err(|_| SpellscoreError::invalid_input("too many dictionary terms"))?;

        let chars: Vec<char> = entry.term().chars().collect();
        self.max_term_length = self.max_term_length.max(chars.len());

        let prefix = &chars[..chars.len().min(self.config.prefix_length)];
        let mut keys = AHashSet::new();
        keys.insert(prefix.iter().collect::<String>());
        collect_deletes(prefix, self.config.max_edit_distance, &mut keys);

        for key in keys {
            self.deletes.entry(key).or_default().push(id);
        }

        self.term_ids.insert(entry.term().to_string(), id);
        self.terms.push(entry.clone());
        Ok(true)
    }

    /// Validate and add a raw term.
    pub fn add_term(&mut self, term: &str, frequency: u64) -> Result<bool> {
        let entry = DictionaryEntry::new(term, frequency)?;
        self.add_entry(&entry)
    }

    /// Add every entry of a source in order.
    pub fn add_source(&mut self, source: &DictionarySource) -> Result<SourceSummary> {
        let mut summary = SourceSummary::default();

        for entry in source.entries() {
            if self.add_entry(entry)? {
                summary.inserted += 1;
            } else {
                summary.duplicates += 1;
            }
        }

        info!(
            "[LexiconIndex] Source '{}': {} new terms, {} already present",
            source.name(),
            summary.inserted,
            summary.duplicates
        );

        Ok(summary)
    }

    /// Number of terms added so far.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no term has been added yet.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Finish the build phase.
    pub fn build(self) -> LexiconIndex {
        let index = LexiconIndex {
            config: self.config,
            terms: self.terms,
            term_ids: self.term_ids,
            deletes: self.deletes,
            max_term_length: self.max_term_length,
        };

        info!(
            "[LexiconIndex] Built index: {} terms, {} delete keys",
            index.terms.len(),
            index.deletes.len()
        );

        index
    }
}

/// Read-only approximate-match index over a vocabulary.
#[derive(Debug)]
pub struct LexiconIndex {
    config: IndexConfig,
    terms: Vec<DictionaryEntry>,
    term_ids: AHashMap<String, TermId>,
    deletes: AHashMap<String, Vec<TermId>>,
    max_term_length: usize,
}

impl LexiconIndex {
    /// Start building an index.
    pub fn builder(config: IndexConfig) -> Result<LexiconIndexBuilder> {
        LexiconIndexBuilder::new(config)
    }

    /// Find dictionary terms within `max_edit_distance` of `query`.
    ///
    /// Candidates are ordered by distance, then by descending frequency.
    /// The query is matched as given; callers fold case beforehand. A
    /// distance above the build-time maximum is clamped to it.
    pub fn lookup(
        &self,
        query: &str,
        max_edit_distance: usize,
        verbosity: Verbosity,
    ) -> Vec<Candidate> {
        let max_distance = if max_edit_distance > self.config.max_edit_distance {
            warn!(
                "[LexiconIndex] Lookup distance {} exceeds build distance {}, clamping",
                max_edit_distance, self.config.max_edit_distance
            );
            self.config.max_edit_distance
        } else {
            max_edit_distance
        };

        let mut candidates = Vec::new();
        let query_chars: Vec<char> = query.chars().collect();

        if query_chars.len().saturating_sub(max_distance) > self.max_term_length {
            return candidates;
        }

        let mut considered: AHashSet<TermId> = AHashSet::new();

        if let Some(&id) = self.term_ids.get(query) {
            let entry = &self.terms[id as usize];
            candidates.push(Candidate::new(entry.term(), 0, entry.frequency()));
            if verbosity == Verbosity::Closest {
                return candidates;
            }
            considered.insert(id);
        }

        if max_distance == 0 {
            return candidates;
        }

        let prefix = &query_chars[..query_chars.len().min(self.config.prefix_length)];
        let mut keys = AHashSet::new();
        keys.insert(prefix.iter().collect::<String>());
        collect_deletes(prefix, max_distance, &mut keys);

        let matcher = LevenshteinMatcher::new(query);

        for key in &keys {
            let Some(ids) = self.deletes.get(key) else {
                continue;
            };

            for &id in ids {
                if !considered.insert(id) {
                    continue;
                }

                let entry = &self.terms[id as usize];
                if let Some(distance) = matcher.distance_threshold(entry.term(), max_distance) {
                    candidates.push(Candidate::new(entry.term(), distance, entry.frequency()));
                }
            }
        }

        candidates.sort_unstable();
        if verbosity == Verbosity::Closest {
            candidates.truncate(1);
        }

        debug!(
            "[LexiconIndex] Lookup '{}' probed {} keys, {} candidates",
            query,
            keys.len(),
            candidates.len()
        );

        candidates
    }

    /// Best candidate at the build-time distance, if any.
    pub fn closest(&self, query: &str) -> Option<Candidate> {
        self.lookup(query, self.config.max_edit_distance, Verbosity::Closest)
            .into_iter()
            .next()
    }

    /// Whether the exact term is in the vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        self.term_ids.contains_key(term)
    }

    /// Frequency of an exact term.
    pub fn frequency(&self, term: &str) -> Option<u64> {
        self.term_ids
            .get(term)
            .map(|&id| self.terms[id as usize].frequency())
    }

    /// Terms in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.terms.iter()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the index has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Build-time maximum edit distance.
    pub fn max_edit_distance(&self) -> usize {
        self.config.max_edit_distance
    }

    /// Build-time prefix length.
    pub fn prefix_length(&self) -> usize {
        self.config.prefix_length
    }

    /// The configuration the index was built with.
    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Size figures.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            term_count: self.terms.len(),
            delete_key_count: self.deletes.len(),
            posting_count: self.deletes.values().map(Vec::len).sum(),
            max_term_length: self.max_term_length,
            max_edit_distance: self.config.max_edit_distance,
            prefix_length: self.config.prefix_length,
        }
    }
}

/// Build an index from ordered sources. Earlier sources win per term.
pub fn build_index(sources: &[DictionarySource], config: IndexConfig) -> Result<LexiconIndex> {
    let mut builder = LexiconIndexBuilder::new(config)?;

    for source in sources {
        builder.add_source(source)?;
    }

    Ok(builder.build())
}

/// Insert every string reachable from `word` by deleting 1 to `max_distance`
/// chars.
///
/// A variant's depth equals the number of chars removed, so a key already in
/// the set was reached at the same depth and its own deletes are already
/// present.
fn collect_deletes(word: &[char], max_distance: usize, keys: &mut AHashSet<String>) {
    if max_distance == 0 || word.is_empty() {
        return;
    }

    let mut variant = Vec::with_capacity(word.len() - 1);
    for skip in 0..word.len() {
        variant.clear();
        variant.extend_from_slice(&word[..skip]);
        variant.extend_from_slice(&word[skip + 1..]);

        if keys.insert(variant.iter().collect()) {
            collect_deletes(&variant, max_distance - 1, keys);
        }
    }
}
