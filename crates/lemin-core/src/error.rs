//! Core error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `SimError`, …) and
//! wrap `CoreError` as one variant where configuration can fail.

use thiserror::Error;

/// Errors produced while interpreting run configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown strategy {0:?}: expected \"dfs\", \"bfs\", or \"best\"")]
    UnknownStrategy(String),

    #[error("unknown neighbor order {0:?}: expected \"declared\" or \"lexicographic\"")]
    UnknownOrder(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lemin-core`.
pub type CoreResult<T> = Result<T, CoreError>;
