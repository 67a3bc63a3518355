//! JSON configuration for building a lexicon index from dictionary files.
//!
//! ```json
//! {
//!   "index": { "max_edit_distance": 2, "prefix_length": 7 },
//!   "dictionaries": [
//!     { "path": "corpus/frequency_dictionary_en_82_765.txt" },
//!     { "path": "corpus/medical_dictionary.txt", "separator": " " }
//!   ]
//! }
//! ```
//!
//! Dictionaries are loaded in the listed order. When two files contain the
//! same term, the earlier file's frequency is kept.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::dictionary::{DictionaryFormat, DictionarySource};
use crate::spelling::index::{IndexConfig, LexiconIndex, build_index};

/// One dictionary file and its column layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySourceConfig {
    /// Path of the frequency file.
    pub path: PathBuf,

    /// Column holding the term.
    #[serde(default)]
    pub term_index: usize,

    /// Column holding the frequency.
    #[serde(default = "default_count_index")]
    pub count_index: usize,

    /// Field separator. Absent means any whitespace run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<char>,
}

fn default_count_index() -> usize {
    1
}

impl DictionarySourceConfig {
    /// A source with the default `term count` layout.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        DictionarySourceConfig {
            path: path.into(),
            term_index: 0,
            count_index: default_count_index(),
            separator: None,
        }
    }

    /// The column layout as a loader format.
    pub fn format(&self) -> DictionaryFormat {
        DictionaryFormat {
            term_index: self.term_index,
            count_index: self.count_index,
            separator: self.separator,
        }
    }

    /// Load the file.
    pub fn load(&self) -> Result<DictionarySource> {
        DictionarySource::load_from_file(&self.path, &self.format())
    }
}

/// Index parameters plus the ordered dictionary list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellscoreConfig {
    pub index: IndexConfig,
    pub dictionaries: Vec<DictionarySourceConfig>,
}

impl SpellscoreConfig {
    /// Read a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SpellscoreConfig = serde_json::from_str(json)?;
        config.index.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load every dictionary in order.
    pub fn load_sources(&self) -> Result<Vec<DictionarySource>> {
        self.dictionaries
            .iter()
            .map(|dictionary| {
                info!("[Config] Loading dictionary {}", dictionary.path.display());
                dictionary.load()
            })
            .collect()
    }

    /// Load the dictionaries and build the index.
    pub fn build_index(&self) -> Result<LexiconIndex> {
        let sources = self.load_sources()?;
        build_index(&sources, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dictionary_file(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = SpellscoreConfig::from_json("{}").unwrap();
        assert_eq!(config.index, IndexConfig::default());
        assert!(config.dictionaries.is_empty());

        let config =
            SpellscoreConfig::from_json(r#"{"dictionaries": [{"path": "d.txt"}]}"#).unwrap();
        assert_eq!(config.dictionaries[0], DictionarySourceConfig::new("d.txt"));
        assert_eq!(config.dictionaries[0].format(), DictionaryFormat::default());
    }

    #[test]
    fn test_partial_index_section() {
        let config = SpellscoreConfig::from_json(r#"{"index": {"max_edit_distance": 1}}"#).unwrap();
        assert_eq!(config.index, IndexConfig::new(1, 7));
    }

    #[test]
    fn test_invalid_index_section() {
        let err = SpellscoreConfig::from_json(r#"{"index": {"max_edit_distance": 0}}"#).unwrap_err();
        assert!(err.is_invalid_input());

        let err = SpellscoreConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::error::SpellscoreError::Json(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SpellscoreConfig {
            index: IndexConfig::new(3, 8),
            dictionaries: vec![DictionarySourceConfig {
                path: PathBuf::from("medical.csv"),
                term_index: 1,
                count_index: 0,
                separator: Some(','),
            }],
        };
        let json = config.to_json().unwrap();
        assert_eq!(SpellscoreConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_build_index_in_order() {
        let general = dictionary_file(&["dose 900", "hospital 500"]);
        let medical = dictionary_file(&["3,dose", "40,hypertension"]);

        let json = serde_json::json!({
            "dictionaries": [
                { "path": general.path() },
                { "path": medical.path(), "term_index": 1, "count_index": 0, "separator": "," }
            ]
        });
        let mut config_file = NamedTempFile::new().unwrap();
        write!(config_file, "{json}").unwrap();
        config_file.flush().unwrap();

        let config = SpellscoreConfig::from_file(config_file.path()).unwrap();
        let index = config.build_index().unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.frequency("dose"), Some(900));
        assert_eq!(index.frequency("hypertension"), Some(40));
    }

    #[test]
    fn test_bad_dictionary_fails_build() {
        let broken = dictionary_file(&["hospital 500", "broken"]);
        let config = SpellscoreConfig {
            index: IndexConfig::default(),
            dictionaries: vec![DictionarySourceConfig::new(broken.path())],
        };
        assert!(config.build_index().unwrap_err().is_invalid_input());
    }
}
