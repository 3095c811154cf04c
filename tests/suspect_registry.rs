//! Suspect registry behavior through the public API.

use detective_quest::{bucket_of, SuspectRegistry, TABLE_SIZE};

const DIARIO: &str = "Diário faltando páginas.";
const FACA: &str = "Faca com manchas de sangue.";
const TELEFONE: &str = "Telefone quebrado.";

#[test]
fn verde_and_rosa_scenario() {
    let mut registry = SuspectRegistry::new();
    registry.associate("Sr. Verde", DIARIO);
    registry.associate("Sr. Verde", FACA);
    registry.associate("Sra. Rosa", TELEFONE);

    let owner = registry.find_suspect_by_clue(FACA).unwrap();
    assert_eq!(owner.name, "Sr. Verde");

    let top = registry.most_cited().unwrap();
    assert_eq!(top.name, "Sr. Verde");
    assert_eq!(top.clue_count(), 2);

    assert_eq!(registry.find_suspect_by_clue(TELEFONE).unwrap().name, "Sra. Rosa");
    assert!(registry.find_suspect_by_clue("Toalha molhada.").is_none());
}

#[test]
fn repeated_association_is_idempotent() {
    let mut registry = SuspectRegistry::new();
    registry.associate("Sr. Verde", DIARIO);
    registry.associate("Sr. Verde", DIARIO);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.find_suspect("Sr. Verde").unwrap().clue_count(), 1);
}

#[test]
fn colliding_names_keep_separate_clue_sets() {
    // Both names land in bucket 7.
    assert_eq!(bucket_of("Sr. Verde"), bucket_of("Sra. Rosa"));

    let mut registry = SuspectRegistry::new();
    registry.associate("Sr. Verde", DIARIO);
    registry.associate("Sra. Rosa", TELEFONE);
    registry.associate("Sr. Verde", FACA);

    let verde = registry.find_suspect("Sr. Verde").unwrap();
    let rosa = registry.find_suspect("Sra. Rosa").unwrap();
    assert_eq!(verde.clues.in_order().collect::<Vec<_>>(), vec![DIARIO, FACA]);
    assert_eq!(rosa.clues.in_order().collect::<Vec<_>>(), vec![TELEFONE]);

    let chain: Vec<&str> = registry
        .bucket(bucket_of("Sr. Verde"))
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(chain, vec!["Sra. Rosa", "Sr. Verde"]);
}

#[test]
fn anagrams_collide_but_stay_distinct() {
    let mut registry = SuspectRegistry::new();
    registry.associate("Amor", "a");
    registry.associate("Roma", "b");
    registry.associate("Mora", "c");

    assert_eq!(bucket_of("Amor"), bucket_of("Roma"));
    assert_eq!(registry.len(), 3);
    for (name, clue) in [("Amor", "a"), ("Roma", "b"), ("Mora", "c")] {
        let suspect = registry.find_suspect(name).unwrap();
        assert_eq!(suspect.clue_count(), 1);
        assert!(suspect.clues.contains(clue));
    }
}

#[test]
fn most_cited_on_empty_registry_is_none() {
    let registry = SuspectRegistry::new();
    assert!(registry.most_cited().is_none());
    assert!(registry.find_suspect_by_clue(DIARIO).is_none());
}

#[test]
fn most_cited_prefers_larger_set() {
    let mut registry = SuspectRegistry::new();
    // "A" is scanned first but "C" has more clues.
    registry.associate("A", "x");
    registry.associate("C", "y");
    registry.associate("C", "z");
    assert_eq!(registry.most_cited().unwrap().name, "C");
}

#[test]
fn most_cited_tie_keeps_first_in_bucket_order() {
    // 'A' = 65 -> bucket 5, 'C' = 67 -> bucket 7
    let mut registry = SuspectRegistry::new();
    registry.associate("C", "x");
    registry.associate("A", "y");
    assert_eq!(registry.most_cited().unwrap().name, "A");

    // Within one chain the newest suspect comes first.
    let mut registry = SuspectRegistry::new();
    registry.associate("ab", "x");
    registry.associate("ba", "y");
    assert_eq!(registry.most_cited().unwrap().name, "ba");
}

#[test]
fn shared_clue_belongs_to_first_suspect_scanned() {
    let mut registry = SuspectRegistry::new();
    registry.associate("C", FACA);
    registry.associate("A", FACA);
    assert_eq!(registry.find_suspect_by_clue(FACA).unwrap().name, "A");
}

#[test]
fn iteration_visits_every_bucket_in_order() {
    let mut registry = SuspectRegistry::new();
    for name in ["Alice", "Bob", "Ana", "Cel. Mostarda", "Sr. Verde"] {
        registry.associate(name, "clue");
    }
    let buckets: Vec<usize> = registry.iter().map(|s| bucket_of(&s.name)).collect();
    assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
    assert!(buckets.iter().all(|&b| b < TABLE_SIZE));
    assert_eq!(buckets.len(), 5);
}

#[test]
fn report_lists_suspects_clues_and_verdict() {
    let mut registry = SuspectRegistry::new();
    registry.associate("Sr. Verde", FACA);
    registry.associate("Sr. Verde", DIARIO);
    registry.associate("Sra. Rosa", TELEFONE);

    let report = registry.report();
    let expected = "\
Suspect: Sra. Rosa
  - Telefone quebrado.
  Clues: 1
Suspect: Sr. Verde
  - Diário faltando páginas.
  - Faca com manchas de sangue.
  Clues: 2
Most cited suspect: Sr. Verde (2 clues)
";
    assert_eq!(report, expected);
}
