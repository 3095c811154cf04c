//! Runtime configuration
//!
//! Read from an optional JSON file; every field falls back to a default so an
//! empty object (or no file at all) is a valid configuration.

use crate::data::{bounded_text, MAX_TEXT_LEN};
use crate::{QuestError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides [`QuestConfig::log_dir`]
pub const LOG_DIR_ENV: &str = "DETECTIVE_QUEST_LOG_DIR";

/// One suspect and the clues that point at them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseEntry {
    pub name: String,
    #[serde(default)]
    pub clues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestConfig {
    /// Shown in the header
    pub player_name: String,

    /// Clue texts and suspect names are cut to this many characters
    pub max_text_len: usize,

    /// Where log files go. Without one the terminal UI does not log.
    pub log_dir: Option<PathBuf>,

    /// Replaces the built-in suspect associations
    pub casebook: Option<Vec<CaseEntry>>,
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self {
            player_name: "Detective".to_string(),
            max_text_len: MAX_TEXT_LEN,
            log_dir: None,
            casebook: None,
        }
    }
}

impl QuestConfig {
    /// Load from `path` if given, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(dir) = std::env::var_os(LOG_DIR_ENV) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    fn validate(&self) -> Result<()> {
        if self.max_text_len == 0 {
            return Err(QuestError::Config("max_text_len must be at least 1".to_string()).into());
        }
        Ok(())
    }

    /// The configured casebook with every name and clue bounded.
    ///
    /// Blank names drop the whole entry; blank clues are skipped.
    pub fn bounded_casebook(&self) -> Option<Vec<CaseEntry>> {
        let entries = self.casebook.as_ref()?;
        let max = self.max_text_len;
        let bounded = entries
            .iter()
            .filter_map(|entry| {
                let name = match bounded_text(&entry.name, max) {
                    Ok(name) => name,
                    Err(err) => {
                        tracing::warn!(%err, "skipping casebook entry without a name");
                        return None;
                    }
                };
                let clues = entry
                    .clues
                    .iter()
                    .filter_map(|clue| bounded_text(clue, max).ok())
                    .collect();
                Some(CaseEntry { name, clues })
            })
            .collect();
        Some(bounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = QuestConfig::from_json("{}").unwrap();
        assert_eq!(config, QuestConfig::default());
        assert_eq!(config.max_text_len, 49);
    }

    #[test]
    fn casebook_is_bounded() {
        let config = QuestConfig::from_json(
            r#"{
                "max_text_len": 5,
                "casebook": [
                    { "name": "  Professor Black ", "clues": ["Candlestick", "  "] },
                    { "name": "   ", "clues": ["ignored"] }
                ]
            }"#,
        )
        .unwrap();

        let casebook = config.bounded_casebook().unwrap();
        assert_eq!(casebook.len(), 1);
        assert_eq!(casebook[0].name, "Profe");
        assert_eq!(casebook[0].clues, vec!["Candl".to_string()]);
    }

    #[test]
    fn zero_length_bound_is_rejected() {
        let config = QuestConfig {
            max_text_len: 0,
            ..QuestConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(QuestConfig::from_json("{ not json").is_err());
    }
}
