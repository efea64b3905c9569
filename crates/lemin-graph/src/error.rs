//! Graph-subsystem error type.

use thiserror::Error;

use lemin_core::RoomId;

/// Errors produced by `lemin-graph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("room {0:?} is defined more than once")]
    DuplicateRoom(String),

    #[error("room {0:?} does not exist")]
    UnknownRoom(String),

    #[error("room {0:?} cannot be linked to itself")]
    SelfLink(String),

    #[error("start and end are the same room {0:?}")]
    SameStartEnd(String),

    #[error("ant count must be greater than zero")]
    NoAnts,

    #[error("no route exists between source {start:?} and sink {end:?}")]
    NoRoute { start: String, end: String },

    #[error("path has {0} room(s); at least 2 are required")]
    DegeneratePath(usize),

    #[error("path visits room {0} more than once")]
    RepeatedRoom(RoomId),

    #[error("path {index} does not run from the source to the sink")]
    EndpointMismatch { index: usize },

    #[error("paths {first} and {second} both pass through room {room}")]
    SharedRoom { room: RoomId, first: usize, second: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;
