//! Casebook: who each clue points at
//!
//! Loaded into the suspect registry before the exploration starts.

use crate::config::CaseEntry;
use crate::data::SuspectRegistry;

/// The built-in associations for the demo mansion
pub fn default_casebook() -> Vec<CaseEntry> {
    let entry = |name: &str, clues: &[&str]| CaseEntry {
        name: name.to_string(),
        clues: clues.iter().map(|c| c.to_string()).collect(),
    };

    vec![
        entry(
            "Sr. Verde",
            &[
                "Diário faltando páginas.",
                "Faca com manchas de sangue.",
                "Bilhete encontrado: 'Libro azul na estante.'",
            ],
        ),
        entry("Sra. Rosa", &["Telefone quebrado.", "Toalha molhada."]),
        entry("Cel. Mostarda", &["Garrafas de produtos de limpeza abertas."]),
    ]
}

/// Fill a registry from casebook entries, in order
pub fn load_registry(entries: &[CaseEntry]) -> SuspectRegistry {
    let mut registry = SuspectRegistry::new();
    for entry in entries {
        for clue in &entry.clues {
            registry.associate(&entry.name, clue);
        }
    }
    tracing::info!(suspects = registry.len(), "casebook loaded");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_casebook_has_three_suspects() {
        let registry = load_registry(&default_casebook());
        assert_eq!(registry.len(), 3);
        let top = registry.most_cited().unwrap();
        assert_eq!(top.name, "Sr. Verde");
        assert_eq!(top.clue_count(), 3);
    }

    #[test]
    fn entry_without_clues_registers_nobody() {
        let entries = vec![CaseEntry {
            name: "Ghost".to_string(),
            clues: Vec::new(),
        }];
        assert!(load_registry(&entries).is_empty());
    }
}
