//! Ordering and membership properties of the clue index.

use detective_quest::ClueIndex;
use proptest::prelude::*;
use std::collections::BTreeSet;

#[test]
fn zebra_apple_mango_come_out_sorted() {
    let mut index = ClueIndex::new();
    index.insert("Zebra");
    index.insert("Apple");
    index.insert("Mango");
    assert_eq!(
        index.in_order().collect::<Vec<_>>(),
        vec!["Apple", "Mango", "Zebra"]
    );
}

#[test]
fn fixture_clues_sort_bytewise() {
    let index: ClueIndex = [
        "Diário faltando páginas.",
        "Faca com manchas de sangue.",
        "Telefone quebrado.",
        "Toalha molhada.",
        "Garrafas de produtos de limpeza abertas.",
        "Bilhete encontrado: 'Libro azul na estante.'",
    ]
    .into_iter()
    .collect();

    assert_eq!(
        index.in_order().collect::<Vec<_>>(),
        vec![
            "Bilhete encontrado: 'Libro azul na estante.'",
            "Diário faltando páginas.",
            "Faca com manchas de sangue.",
            "Garrafas de produtos de limpeza abertas.",
            "Telefone quebrado.",
            "Toalha molhada.",
        ]
    );
}

#[test]
fn missing_clue_is_not_contained() {
    let index: ClueIndex = ["b", "a", "c"].into_iter().collect();
    assert!(!index.contains("d"));
    assert!(!index.contains(""));
    assert!(!index.contains("a "));
}

proptest! {
    #[test]
    fn in_order_is_strictly_ascending(clues in prop::collection::vec("[a-zA-Z ]{0,12}", 0..64)) {
        let index: ClueIndex = clues.iter().collect();
        let walked: Vec<&str> = index.in_order().collect();
        prop_assert!(walked.windows(2).all(|w| w[0] < w[1]));

        let expected: Vec<&str> = clues
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(walked, expected);
    }

    #[test]
    fn inserted_clues_stay_contained(
        first in prop::collection::vec("[a-z]{1,8}", 1..32),
        later in prop::collection::vec("[a-z]{1,8}", 0..32),
    ) {
        let mut index = ClueIndex::new();
        for clue in &first {
            index.insert(clue);
            prop_assert!(index.contains(clue));
        }
        for clue in &later {
            index.insert(clue);
        }
        for clue in first.iter().chain(later.iter()) {
            prop_assert!(index.contains(clue));
        }
    }

    #[test]
    fn count_matches_distinct_inserts(clues in prop::collection::vec("[a-d]{1,3}", 0..64)) {
        let mut index = ClueIndex::new();
        let mut fresh = 0;
        for clue in &clues {
            if index.insert(clue) {
                fresh += 1;
            }
        }
        let distinct: BTreeSet<&String> = clues.iter().collect();
        prop_assert_eq!(index.count(), distinct.len());
        prop_assert_eq!(index.count(), fresh);
        prop_assert_eq!(index.is_empty(), clues.is_empty());
    }
}
