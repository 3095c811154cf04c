//! Data structures for the case
//!
//! Defines the mansion, the clue index and the suspect registry.

pub mod clue_index;
pub mod mansion;
pub mod suspects;

pub use clue_index::*;
pub use mansion::*;
pub use suspects::*;

use crate::QuestError;
use serde::{Deserialize, Serialize};

/// Longest clue or suspect name the fixture was written for
pub const MAX_TEXT_LEN: usize = 49;

/// How a message should stand out in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tone {
    Info,
    Clue,
    Lead,
    Warning,
}

impl Tone {
    pub fn symbol(&self) -> &'static str {
        match self {
            Tone::Info => "·",
            Tone::Clue => "◆",
            Tone::Lead => "●",
            Tone::Warning => "▲",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Info => write!(f, "INFO"),
            Tone::Clue => write!(f, "CLUE"),
            Tone::Lead => write!(f, "LEAD"),
            Tone::Warning => write!(f, "WARN"),
        }
    }
}

/// Clean up a clue or name coming from outside the index.
///
/// Surrounding whitespace is trimmed, empty text is rejected and anything
/// past `max` characters is cut off.
pub fn bounded_text(raw: &str, max: usize) -> Result<String, QuestError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QuestError::EmptyText);
    }
    Ok(match trimmed.char_indices().nth(max) {
        Some((cut, _)) => trimmed[..cut].trim_end().to_string(),
        None => trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_text_trims_and_truncates() {
        assert_eq!(bounded_text("  Toalha molhada.  ", MAX_TEXT_LEN).unwrap(), "Toalha molhada.");
        assert_eq!(bounded_text("Diário", 3).unwrap(), "Diá");
        assert_eq!(bounded_text("abc", 3).unwrap(), "abc");
    }

    #[test]
    fn bounded_text_rejects_blank() {
        assert!(matches!(bounded_text("   ", MAX_TEXT_LEN), Err(QuestError::EmptyText)));
    }
}
