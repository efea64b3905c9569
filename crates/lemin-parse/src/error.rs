//! Error types for lemin-parse.

use thiserror::Error;

use lemin_graph::GraphError;

/// Errors raised while reading or validating a farm.  Line numbers are
/// 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input holds no ant count")]
    MissingAntCount,

    #[error("invalid number of ants at line {line}: {text:?}")]
    InvalidAntCount { line: usize, text: String },

    #[error("invalid room definition at line {line}: {text:?}")]
    InvalidRoom { line: usize, text: String },

    #[error("invalid link definition at line {line}: {text:?}")]
    InvalidLink { line: usize, text: String },

    #[error("{command} at line {line} is not followed by a room")]
    MissingRoomAfter { command: &'static str, line: usize },

    #[error("start room not defined")]
    StartUndefined,

    #[error("end room not defined")]
    EndUndefined,

    #[error("invalid number of ants: {0}")]
    NonPositiveAnts(i64),

    #[error("too many ants: {0}")]
    TooManyAnts(i64),

    #[error("{role} room {name:?} does not exist")]
    UnknownTerminal { role: &'static str, name: String },

    #[error("start and end are the same room {0:?}")]
    SameStartEnd(String),

    #[error("room {name:?} at line {line} has invalid coordinates ({x}, {y})")]
    NegativeCoord { name: String, line: usize, x: i64, y: i64 },

    #[error("room {name:?} at line {line} was already defined at line {first}")]
    DuplicateRoom { name: String, line: usize, first: usize },

    #[error("link at line {line} refers to non-existent room {name:?}")]
    UnknownLinkRoom { name: String, line: usize },

    #[error("link at line {line} connects room {name:?} to itself")]
    SelfLink { name: String, line: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type ParseResult<T> = Result<T, ParseError>;
