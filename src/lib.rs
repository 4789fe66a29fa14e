//! # Word Ladder
//!
//! Finds every shortest word ladder between two words of equal length.
//! Each rung of a ladder is a dictionary word that differs from the previous
//! one in exactly one position.
//!
//! The word graph is implicit: neighbors are generated by substituting each
//! letter in turn and asking the dictionary. A layered breadth-first search
//! keeps only the edges that move one layer closer to the target, and a
//! backtracking pass over those edges lists every shortest ladder.

pub mod dictionary;
pub mod error;
pub mod frontier;
pub mod ladder;
pub mod solver;
pub mod word;

pub use dictionary::{Dictionary, Lexicon};
pub use error::{LadderError, Result};
pub use frontier::{build_layers, EdgeMap, FrontierState, LayeredFrontier};
pub use ladder::{enumerate_ladders, Ladder};
pub use solver::{find_all_shortest_ladders, LadderReport, LadderSolver};
pub use word::ALPHABET;

/// Load the dictionary bundled with the crate.
pub fn load_dictionary() -> Dictionary {
    Dictionary::embedded()
}
