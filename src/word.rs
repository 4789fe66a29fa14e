//! Single-letter substitutions over lowercase words.
//!
//! The word graph is never stored. Neighbors are produced on demand by
//! rewriting one position at a time across the alphabet.

use crate::error::{LadderError, Result};

/// Letters tried at every position, in lexicographic order.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Every word one substitution away from `word`.
///
/// Candidates come out position by position, and within a position in
/// alphabet order. The input word itself is never produced.
pub fn substitutions(word: &str) -> impl Iterator<Item = String> + '_ {
    let bytes = word.as_bytes();
    (0..bytes.len()).flat_map(move |i| {
        ALPHABET
            .iter()
            .copied()
            .filter(move |&c| c != bytes[i])
            .filter_map(move |c| {
                let mut candidate = bytes.to_vec();
                candidate[i] = c;
                // Rewriting part of a multi-byte character is not a word.
                String::from_utf8(candidate).ok()
            })
    })
}

/// Returns true when `a` and `b` have the same length and differ at
/// exactly one position.
pub fn is_one_substitution_apart(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .filter(|(x, y)| x != y)
            .count()
            == 1
}

/// Trim and lowercase user input, rejecting anything outside a-z.
pub fn normalize(raw: &str) -> Result<String> {
    let word = raw.trim();
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(LadderError::InvalidWord(word.to_string()));
    }
    Ok(word.to_ascii_lowercase())
}

/// Normalize both ends of a ladder request and check that their lengths
/// agree.
pub fn normalize_pair(start: &str, end: &str) -> Result<(String, String)> {
    let start = normalize(start)?;
    let end = normalize(end)?;
    if start.len() != end.len() {
        return Err(LadderError::LengthMismatch { start, end });
    }
    Ok((start, end))
}
