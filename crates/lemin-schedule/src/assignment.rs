//! `Assignment` — which ants take which path, and in what order.

use lemin_core::AntId;
use lemin_graph::PathSet;

use crate::{ScheduleError, ScheduleResult};

/// Per-path admission queues, indexed by path index.
///
/// The first ant of `queue(i)` is the first to enter path `i`.  A complete
/// assignment lists every ant `1..=N` exactly once across all queues.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    queues: Vec<Vec<AntId>>,
}

impl Assignment {
    /// Wrap pre-built queues (one per path, possibly empty).
    pub fn new(queues: Vec<Vec<AntId>>) -> Self {
        Self { queues }
    }

    /// `path_count` empty queues.
    pub fn empty(path_count: usize) -> Self {
        Self { queues: vec![Vec::new(); path_count] }
    }

    pub(crate) fn push(&mut self, path: usize, ant: AntId) {
        self.queues[path].push(ant);
    }

    /// Admission queue of `path`.  Empty for an out-of-range index.
    pub fn queue(&self, path: usize) -> &[AntId] {
        self.queues.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn queues(&self) -> &[Vec<AntId>] {
        &self.queues
    }

    pub fn path_count(&self) -> usize {
        self.queues.len()
    }

    /// Total number of assigned ants.
    pub fn ant_count(&self) -> usize {
        self.queues.iter().map(Vec::len).sum()
    }

    /// Number of ants queued on each path.
    pub fn loads(&self) -> Vec<usize> {
        self.queues.iter().map(Vec::len).collect()
    }

    /// The path `ant` is queued on.
    pub fn path_of(&self, ant: AntId) -> Option<usize> {
        self.queues.iter().position(|q| q.contains(&ant))
    }

    /// Number of ticks the simulation will take to drain.
    ///
    /// `max over loaded paths of (rooms - 2) + ants`: the first ant reaches
    /// the sink after `rooms - 1` ticks and each later ant one tick behind
    /// its predecessor.  Paths beyond the end of `paths` are ignored.
    pub fn makespan(&self, paths: &PathSet) -> u64 {
        self.queues
            .iter()
            .zip(paths.iter())
            .filter(|(queue, _)| !queue.is_empty())
            .map(|(queue, path)| (path.len() - 2 + queue.len()) as u64)
            .max()
            .unwrap_or(0)
    }

    /// Verify that ants `1..=ants` each appear exactly once.
    pub fn check_complete(&self, ants: u32) -> ScheduleResult<()> {
        let mut seen = vec![false; ants as usize + 1];
        for &ant in self.queues.iter().flatten() {
            if ant.0 == 0 || ant.0 > ants {
                return Err(ScheduleError::UnexpectedAnt(ant));
            }
            if std::mem::replace(&mut seen[ant.index()], true) {
                return Err(ScheduleError::DuplicateAnt(ant));
            }
        }
        match AntId::range(ants).find(|a| !seen[a.index()]) {
            Some(missing) => Err(ScheduleError::MissingAnt(missing)),
            None          => Ok(()),
        }
    }
}
