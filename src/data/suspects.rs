//! Suspect registry
//!
//! A fixed-size hash table from suspect name to the clues tied to that
//! suspect. Collisions are resolved by chaining: each bucket holds a singly
//! linked list of suspects, newest first. Nodes live in an arena and chain to
//! each other by index.

use super::ClueIndex;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Number of buckets in the registry
pub const TABLE_SIZE: usize = 10;

/// Additive hash: the sum of the name's bytes, modulo [`TABLE_SIZE`].
///
/// Anagrams always land in the same bucket.
pub fn bucket_of(name: &str) -> usize {
    name.bytes()
        .fold(0usize, |sum, b| sum.wrapping_add(usize::from(b)))
        % TABLE_SIZE
}

/// A named suspect and the clues pointing at them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspect {
    pub name: String,
    pub clues: ClueIndex,
}

impl Suspect {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            clues: ClueIndex::new(),
        }
    }

    pub fn clue_count(&self) -> usize {
        self.clues.count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChainNode {
    suspect: Suspect,
    next: Option<usize>,
}

/// Hash table of suspects, chained per bucket
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuspectRegistry {
    buckets: [Option<usize>; TABLE_SIZE],
    nodes: Vec<ChainNode>,
}

impl SuspectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tie a clue to a suspect, creating the suspect on first mention.
    ///
    /// New suspects become the head of their bucket's chain.
    pub fn associate(&mut self, name: &str, clue: &str) {
        let bucket = bucket_of(name);

        if let Some(idx) = self.position_in_bucket(bucket, name) {
            let suspect = &mut self.nodes[idx].suspect;
            if suspect.clues.insert(clue) {
                tracing::debug!(suspect = name, clue, "clue associated");
            }
            return;
        }

        let mut suspect = Suspect::new(name);
        suspect.clues.insert(clue);

        let idx = self.nodes.len();
        self.nodes.push(ChainNode {
            suspect,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(idx);
        tracing::debug!(suspect = name, bucket, clue, "suspect registered");
    }

    /// Look a suspect up by exact name
    pub fn find_suspect(&self, name: &str) -> Option<&Suspect> {
        self.position_in_bucket(bucket_of(name), name)
            .map(|idx| &self.nodes[idx].suspect)
    }

    fn position_in_bucket(&self, bucket: usize, name: &str) -> Option<usize> {
        self.chain(bucket)
            .find(|&idx| self.nodes[idx].suspect.name == name)
    }

    fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            nodes: &self.nodes,
            cursor: self.buckets[bucket],
        }
    }

    /// First suspect, in bucket then chain order, whose clues include `clue`
    pub fn find_suspect_by_clue(&self, clue: &str) -> Option<&Suspect> {
        self.iter().find(|suspect| suspect.clues.contains(clue))
    }

    /// The suspect with the most clues. On a tie the first one met keeps
    /// the title.
    pub fn most_cited(&self) -> Option<&Suspect> {
        let mut best: Option<(&Suspect, usize)> = None;
        for suspect in self.iter() {
            let count = suspect.clue_count();
            let replace = match best {
                Some((_, top)) => count > top,
                None => true,
            };
            if replace {
                best = Some((suspect, count));
            }
        }
        best.map(|(suspect, _)| suspect)
    }

    /// All suspects, bucket by bucket, each chain newest first
    pub fn iter(&self) -> impl Iterator<Item = &Suspect> + '_ {
        (0..TABLE_SIZE)
            .flat_map(move |bucket| self.chain(bucket))
            .map(move |idx| &self.nodes[idx].suspect)
    }

    /// Suspects sitting in one bucket, newest first
    pub fn bucket(&self, bucket: usize) -> impl Iterator<Item = &Suspect> + '_ {
        let cursor = if bucket < TABLE_SIZE { self.buckets[bucket] } else { None };
        Chain {
            nodes: &self.nodes,
            cursor,
        }
        .map(move |idx| &self.nodes[idx].suspect)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Write the evidence analysis: every suspect with their clues in
    /// order, then the most cited suspect.
    pub fn write_report<W: Write>(&self, out: &mut W) -> fmt::Result {
        if self.is_empty() {
            writeln!(out, "No suspects on file.")?;
            return Ok(());
        }

        for suspect in self.iter() {
            writeln!(out, "Suspect: {}", suspect.name)?;
            for clue in suspect.clues.in_order() {
                writeln!(out, "  - {}", clue)?;
            }
            writeln!(out, "  Clues: {}", suspect.clue_count())?;
        }

        match self.most_cited() {
            Some(top) => writeln!(
                out,
                "Most cited suspect: {} ({} clues)",
                top.name,
                top.clue_count()
            )?,
            None => writeln!(out, "No suspect stands out.")?,
        }
        Ok(())
    }

    /// The evidence analysis as text
    pub fn report(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_report(&mut out);
        tracing::debug!(suspects = self.len(), "evidence report produced");
        out
    }
}

/// Walks one bucket's chain by arena index
struct Chain<'a> {
    nodes: &'a [ChainNode],
    cursor: Option<usize>,
}

impl Iterator for Chain<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let idx = self.cursor?;
        self.cursor = self.nodes[idx].next;
        Some(idx)
    }
}
