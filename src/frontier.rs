//! Layered breadth-first expansion from the start word.
//!
//! Each layer holds the words first reached after the same number of
//! substitutions. While expanding a layer we record, for every word, the
//! successors that live in the next layer. Those are exactly the edges that
//! can appear on a shortest ladder, so the resulting [`EdgeMap`] is all the
//! enumerator needs.

use crate::dictionary::Lexicon;
use crate::word::substitutions;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, trace};

/// Successors of `current` that belong to the next layer.
///
/// A candidate qualifies when it is a dictionary word not yet visited, or
/// when it is `end`. The end word is always eligible, even if it is missing
/// from the dictionary.
pub fn successors<L>(
    current: &str,
    end: &str,
    lexicon: &L,
    visited: &HashSet<String>,
) -> BTreeSet<String>
where
    L: Lexicon + ?Sized,
{
    substitutions(current)
        .filter(|candidate| {
            candidate == end || (lexicon.contains(candidate) && !visited.contains(candidate))
        })
        .collect()
}

/// Forward edges restricted to shortest paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeMap {
    edges: HashMap<String, BTreeSet<String>>,
}

impl EdgeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: String, successors: BTreeSet<String>) {
        self.edges.insert(word, successors);
    }

    pub fn successors_of(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.edges.get(word)
    }

    /// Number of words with at least one recorded successor.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of recorded edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Entries sorted by source word.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        let mut entries: Vec<_> = self.edges.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries.into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierState {
    /// The frontier is non-empty and does not hold the end word yet.
    Expanding,
    /// The end word was reached.
    Found,
    /// The frontier ran dry without reaching the end word.
    Exhausted,
}

/// Outcome of [`build_layers`].
#[derive(Debug, Clone)]
pub struct LayeredFrontier {
    pub edges: EdgeMap,
    /// Edges on a shortest ladder when `state` is `Found`. After exhaustion
    /// this is one less than the number of layers attempted and does not
    /// describe any ladder.
    pub layers: usize,
    pub state: FrontierState,
    /// Words discovered, start word included.
    pub visited: usize,
}

/// Expand layer by layer from `start` until `end` shows up in the frontier
/// or the frontier empties.
///
/// With `parallel` set, successors for a whole layer are generated on the
/// rayon pool against the same snapshot of the visited set. Results are
/// merged only after the layer is complete, so the edge map is identical to
/// a sequential run.
pub fn build_layers<L>(start: &str, end: &str, lexicon: &L, parallel: bool) -> LayeredFrontier
where
    L: Lexicon + Sync + ?Sized,
{
    let mut edges = EdgeMap::new();
    let mut visited: HashSet<String> = HashSet::from([start.to_string()]);
    let mut frontier: BTreeSet<String> = BTreeSet::from([start.to_string()]);
    let mut layers = 0usize;
    let mut state = classify(&frontier, end);

    while state == FrontierState::Expanding {
        layers += 1;

        let expanded: Vec<(&String, BTreeSet<String>)> = if parallel {
            frontier
                .par_iter()
                .map(|word| (word, successors(word, end, lexicon, &visited)))
                .collect()
        } else {
            frontier
                .iter()
                .map(|word| (word, successors(word, end, lexicon, &visited)))
                .collect()
        };

        let mut next = BTreeSet::new();
        for (word, found) in expanded {
            if found.is_empty() {
                continue;
            }
            trace!(layer = layers, word = %word, successors = found.len(), "expanded");
            next.extend(found.iter().cloned());
            edges.insert(word.clone(), found);
        }

        visited.extend(next.iter().cloned());
        debug!(
            layer = layers,
            frontier = next.len(),
            visited = visited.len(),
            edges = edges.len(),
            "layer complete"
        );
        frontier = next;

        state = classify(&frontier, end);
    }

    if state == FrontierState::Exhausted {
        layers = layers.saturating_sub(1);
    }

    LayeredFrontier {
        edges,
        layers,
        state,
        visited: visited.len(),
    }
}

fn classify(frontier: &BTreeSet<String>, end: &str) -> FrontierState {
    if frontier.contains(end) {
        FrontierState::Found
    } else if frontier.is_empty() {
        FrontierState::Exhausted
    } else {
        FrontierState::Expanding
    }
}
