use lemin_core::{CoreError, Tick};
use lemin_graph::GraphError;
use lemin_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("assignment has {queues} queue(s) but there are {paths} path(s)")]
    PathCountMismatch {
        paths:  usize,
        queues: usize,
    },

    #[error("no ant moved at {tick} although {remaining} ant(s) have not arrived")]
    Stalled {
        tick:      Tick,
        remaining: usize,
    },

    #[error("tick limit {limit} reached with {remaining} ant(s) still in the farm")]
    TickLimit {
        limit:     u64,
        remaining: usize,
    },
}

impl SimError {
    /// `true` when the farm has no source→sink route at all.
    pub fn is_no_route(&self) -> bool {
        matches!(self, SimError::Graph(GraphError::NoRoute { .. }))
    }
}

pub type SimResult<T> = Result<T, SimError>;
