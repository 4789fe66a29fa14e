//! Shortest word ladder search.
//!
//! The search runs in two phases. A layered breadth-first expansion records
//! only the edges that advance one layer, then a depth-bounded backtracking
//! pass walks those edges to list every shortest ladder.

use crate::dictionary::Lexicon;
use crate::frontier::{build_layers, FrontierState};
use crate::ladder::{enumerate_ladders, Ladder};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a single search, with the statistics behind it.
#[derive(Debug, Clone)]
pub struct LadderReport {
    pub ladders: BTreeSet<Ladder>,
    /// Substitutions per ladder when found.
    pub layers: usize,
    pub state: FrontierState,
    /// Edges recorded by the breadth-first phase.
    pub edges: usize,
    /// Words discovered by the breadth-first phase.
    pub visited: usize,
    pub elapsed: Duration,
}

impl LadderReport {
    pub fn is_found(&self) -> bool {
        !self.ladders.is_empty()
    }

    /// Words per ladder, if any ladder exists.
    pub fn shortest_length(&self) -> Option<usize> {
        self.ladders.first().map(Ladder::len)
    }

    fn empty(state: FrontierState, started: Instant) -> Self {
        Self {
            ladders: BTreeSet::new(),
            layers: 0,
            state,
            edges: 0,
            visited: 0,
            elapsed: started.elapsed(),
        }
    }
}

/// Find every shortest ladder from `start` to `end`.
///
/// Words of different lengths have no ladder. Identical words yield the
/// one-word ladder. The start word does not need to be in the dictionary;
/// the end word is always accepted as a final rung.
pub fn find_all_shortest_ladders<L>(start: &str, end: &str, lexicon: &L) -> BTreeSet<Ladder>
where
    L: Lexicon + Sync + ?Sized,
{
    search(start, end, lexicon, true).ladders
}

fn search<L>(start: &str, end: &str, lexicon: &L, parallel: bool) -> LadderReport
where
    L: Lexicon + Sync + ?Sized,
{
    let started = Instant::now();

    if start.len() != end.len() {
        debug!(start, end, "length mismatch, no ladder");
        return LadderReport::empty(FrontierState::Exhausted, started);
    }

    if start == end {
        debug!(start, "identical words");
        let mut report = LadderReport::empty(FrontierState::Found, started);
        report.ladders.insert(Ladder::new(vec![start.to_string()]));
        report.visited = 1;
        return report;
    }

    let frontier = build_layers(start, end, lexicon, parallel);
    let ladders = match (frontier.state, frontier.layers.checked_sub(1)) {
        (FrontierState::Found, Some(depth)) => {
            enumerate_ladders(&frontier.edges, depth, start, end)
        }
        _ => BTreeSet::new(),
    };

    let report = LadderReport {
        ladders,
        layers: frontier.layers,
        state: frontier.state,
        edges: frontier.edges.edge_count(),
        visited: frontier.visited,
        elapsed: started.elapsed(),
    };
    info!(
        start,
        end,
        ladders = report.ladders.len(),
        steps = report.layers,
        visited = report.visited,
        elapsed = ?report.elapsed,
        "search finished"
    );
    report
}

/// A reusable solver bound to one dictionary.
#[derive(Debug, Clone)]
pub struct LadderSolver<L> {
    lexicon: L,
    parallel: bool,
}

impl<L: Lexicon + Sync> LadderSolver<L> {
    pub fn new(lexicon: L) -> Self {
        Self {
            lexicon,
            parallel: true,
        }
    }

    /// Toggle rayon expansion of each layer. On by default.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn solve(&self, start: &str, end: &str) -> LadderReport {
        search(start, end, &self.lexicon, self.parallel)
    }

    pub fn find_ladders(&self, start: &str, end: &str) -> BTreeSet<Ladder> {
        self.solve(start, end).ladders
    }
}
