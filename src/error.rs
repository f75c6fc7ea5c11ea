use thiserror::Error;

use crate::id::Id;

/// Failures reported by [`Tree`](crate::Tree) operations.
/// A failed operation never modifies the tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("id {0} is already present")]
    DuplicateKey(Id),
    #[error("id {0} not found")]
    NotFound(Id),
    #[error("rank {rank} is out of range for a tree of {len} entries")]
    RankOutOfRange { rank: usize, len: usize },
}

/// Malformed command input, rejected before it reaches the tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid id {0:?}: expected exactly 8 ascii digits")]
    InvalidId(String),
    #[error("invalid name {0:?}")]
    InvalidName(String),
    #[error("invalid rank {0:?}")]
    InvalidRank(String),
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("missing argument for {0}")]
    MissingArgument(&'static str),
    #[error("unterminated quote in {0:?}")]
    UnterminatedQuote(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
    #[error("first line must be the number of commands, got {0:?}")]
    MissingCommandCount(String),
}

/// Failures that abort a [`Shell`](crate::Shell) run.
/// Rejected commands are reported on the output instead.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
