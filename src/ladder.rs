//! Ladders and their reconstruction from an [`EdgeMap`].

use crate::dictionary::Lexicon;
use crate::frontier::EdgeMap;
use crate::word::is_one_substitution_apart;
use std::collections::BTreeSet;
use std::fmt;

/// A sequence of words from start to end.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ladder(Vec<String>);

impl Ladder {
    pub fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Number of words on the ladder.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of substitutions, one less than the number of words.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Check that every rung is a single substitution and that every word
    /// after the first is known to `lexicon`, or is the final word.
    ///
    /// The first word is never looked up: a ladder may start from a word the
    /// dictionary does not know.
    pub fn is_valid<L: Lexicon + ?Sized>(&self, lexicon: &L) -> bool {
        let Some(last) = self.0.last() else {
            return false;
        };
        self.0
            .windows(2)
            .all(|pair| is_one_substitution_apart(&pair[0], &pair[1]))
            && self.0[1..]
                .iter()
                .all(|w| w == last || lexicon.contains(w))
    }

    pub fn into_words(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Every path through `edges` that starts at `start`, takes
/// `remaining_depth` intermediate steps, then finishes with an edge to `end`.
///
/// Fed the layer count minus one from a successful [`build_layers`] run,
/// this yields every shortest ladder. A word with no recorded successors,
/// or whose successors at the last step do not include `end`, simply ends
/// that branch.
///
/// [`build_layers`]: crate::frontier::build_layers
pub fn enumerate_ladders(
    edges: &EdgeMap,
    remaining_depth: usize,
    start: &str,
    end: &str,
) -> BTreeSet<Ladder> {
    let mut ladders = BTreeSet::new();
    let mut path = vec![start.to_string()];
    extend(edges, remaining_depth, &mut path, end, &mut ladders);
    ladders
}

fn extend(
    edges: &EdgeMap,
    remaining_depth: usize,
    path: &mut Vec<String>,
    end: &str,
    ladders: &mut BTreeSet<Ladder>,
) {
    let Some(next) = path.last().and_then(|word| edges.successors_of(word)) else {
        return;
    };

    if remaining_depth == 0 {
        if next.contains(end) {
            let mut words = path.clone();
            words.push(end.to_string());
            ladders.insert(Ladder(words));
        }
        return;
    }

    for successor in next {
        path.push(successor.clone());
        extend(edges, remaining_depth - 1, path, end, ladders);
        path.pop();
    }
}
