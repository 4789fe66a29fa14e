//! Error types for the dictionary loader and the command-line front end.
//!
//! The ladder search itself never fails: an empty result means no ladder
//! exists. Errors only arise where the crate touches the outside world.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LadderError {
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary {} contains no usable words", .path.display())]
    EmptyDictionary { path: PathBuf },
    #[error("invalid word {0:?}: only the letters a-z are allowed")]
    InvalidWord(String),
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("words must have the same length: {start:?} has {}, {end:?} has {}", .start.len(), .end.len())]
    LengthMismatch { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, LadderError>;
