//! Ordered set of clue descriptions
//!
//! A plain (unbalanced) binary search tree keyed by the clue text. Nodes live
//! in an arena and link to their children by index, so the tree shape depends
//! only on insertion order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Index of a node inside a [`ClueIndex`] arena
type NodeIdx = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ClueNode {
    text: String,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

impl ClueNode {
    fn leaf(text: &str) -> Self {
        Self {
            text: text.to_string(),
            left: None,
            right: None,
        }
    }
}

/// Which child slot a descent ended on
#[derive(Debug, Clone, Copy)]
enum Slot {
    Root,
    Left(NodeIdx),
    Right(NodeIdx),
}

/// A set of unique clue texts, enumerable in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueIndex {
    nodes: Vec<ClueNode>,
    root: Option<NodeIdx>,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue unless an identical one is already present.
    ///
    /// Returns `true` when a new node was created.
    pub fn insert(&mut self, text: &str) -> bool {
        let mut slot = Slot::Root;
        let mut cursor = self.root;

        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            match text.cmp(node.text.as_str()) {
                Ordering::Less => {
                    slot = Slot::Left(idx);
                    cursor = node.left;
                }
                Ordering::Greater => {
                    slot = Slot::Right(idx);
                    cursor = node.right;
                }
                Ordering::Equal => return false,
            }
        }

        let new_idx = self.nodes.len();
        self.nodes.push(ClueNode::leaf(text));
        match slot {
            Slot::Root => self.root = Some(new_idx),
            Slot::Left(parent) => self.nodes[parent].left = Some(new_idx),
            Slot::Right(parent) => self.nodes[parent].right = Some(new_idx),
        }
        true
    }

    /// Check whether a clue with exactly this text has been inserted
    pub fn contains(&self, text: &str) -> bool {
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            cursor = match text.cmp(node.text.as_str()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Number of clues, counted subtree by subtree
    pub fn count(&self) -> usize {
        self.count_from(self.root)
    }

    fn count_from(&self, node: Option<NodeIdx>) -> usize {
        match node {
            Some(idx) => {
                let node = &self.nodes[idx];
                1 + self.count_from(node.left) + self.count_from(node.right)
            }
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Walk the clues in ascending lexicographic order.
    ///
    /// The walk is lazy; every call starts a fresh traversal from the root.
    pub fn in_order(&self) -> InOrder<'_> {
        let mut walk = InOrder {
            index: self,
            stack: Vec::new(),
        };
        walk.push_left_spine(self.root);
        walk
    }

    /// Height of the tree (0 when empty). Degenerates to `count()` when
    /// clues arrive already sorted.
    pub fn depth(&self) -> usize {
        self.depth_from(self.root)
    }

    fn depth_from(&self, node: Option<NodeIdx>) -> usize {
        match node {
            Some(idx) => {
                let node = &self.nodes[idx];
                1 + self.depth_from(node.left).max(self.depth_from(node.right))
            }
            None => 0,
        }
    }
}

/// In-order traversal over a [`ClueIndex`], driven by an explicit stack
pub struct InOrder<'a> {
    index: &'a ClueIndex,
    stack: Vec<NodeIdx>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut cursor: Option<NodeIdx>) {
        while let Some(idx) = cursor {
            self.stack.push(idx);
            cursor = self.index.nodes[idx].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let index = self.index;
        let node = &index.nodes[idx];
        self.push_left_spine(node.right);
        Some(node.text.as_str())
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<S: AsRef<str>> Extend<S> for ClueIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for text in iter {
            self.insert(text.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClueIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = ClueIndex::new();
        index.extend(iter);
        index
    }
}
