use lemin_core::AntId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("no path is available to receive ants")]
    NoPaths,

    #[error("ant count must be greater than zero")]
    NoAnts,

    #[error("ant {0} is not assigned to any path")]
    MissingAnt(AntId),

    #[error("ant {0} is assigned more than once")]
    DuplicateAnt(AntId),

    #[error("ant {0} is outside the expected range")]
    UnexpectedAnt(AntId),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
