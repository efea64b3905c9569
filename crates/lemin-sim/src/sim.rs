//! The `Simulation` state machine and its tick loop.

use lemin_core::{AntId, RoomId, Tick};
use lemin_graph::{Farm, PathSet};
use lemin_schedule::Assignment;
use tracing::{info, trace};

use crate::{Move, SimError, SimObserver, SimResult, TickMoves};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Advancing,
    Drained,
    Failed,
}

/// Totals reported when a run drains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Number of ticks emitted (the makespan).
    pub ticks: u64,
    /// Number of ants moved from source to sink.
    pub ants:  usize,
    /// Number of paths in the plan (loaded or not).
    pub paths: usize,
}

/// Streams the ticks of one run, from `Tick(1)` until every ant has arrived.
///
/// Paths and assignment are fixed at construction.  The per-ant state is an
/// offset into the ant's path; ants on one path arrive in admission order, so
/// the arrived ants of a path are always a prefix of its queue.
///
/// `Simulation` is an [`Iterator`] over `SimResult<TickMoves>`; after an error
/// or once drained it yields `None`.  Create via
/// [`SimBuilder`][crate::SimBuilder] or [`Simulation::new`].
pub struct Simulation<'f> {
    farm:       &'f Farm,
    paths:      PathSet,
    assignment: Assignment,
    tick_limit: Option<u64>,

    /// `offsets[p][k]` = current room offset of the `k`-th ant admitted to
    /// path `p`.  `offsets[p].len()` is the path's admitted count.
    offsets:    Vec<Vec<usize>>,
    /// Index into `offsets[p]` of the first ant not yet at the sink.
    in_flight:  Vec<usize>,
    completed:  usize,
    total:      usize,
    clock:      Tick,
    phase:      Phase,
}

impl<'f> Simulation<'f> {
    /// Set up a run.  No consistency checks are made here beyond what the
    /// types guarantee; [`SimBuilder`][crate::SimBuilder] validates its
    /// inputs, and an inconsistent assignment surfaces as
    /// [`SimError::Stalled`] while stepping.
    pub fn new(farm: &'f Farm, paths: PathSet, assignment: Assignment) -> Self {
        let total = assignment.ant_count();
        let count = paths.len();
        Self {
            farm,
            paths,
            assignment,
            tick_limit: None,
            offsets:    vec![Vec::new(); count],
            in_flight:  vec![0; count],
            completed:  0,
            total,
            clock:      Tick::ZERO,
            phase:      Phase::Advancing,
        }
    }

    /// Fail with [`SimError::TickLimit`] instead of emitting tick `limit + 1`.
    ///
    /// [`SimBuilder`][crate::SimBuilder] already refuses plans that cannot
    /// finish in time; this check covers simulations built by hand.
    pub fn with_tick_limit(mut self, limit: Option<u64>) -> Self {
        self.tick_limit = limit;
        self
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Drive the run to completion, reporting every tick to `observer`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        observer.on_plan(&self.paths, &self.assignment, self.farm);
        while let Some(moves) = self.step()? {
            observer.on_tick(&moves, self.farm);
        }
        let summary = self.summary();
        info!(
            ticks = summary.ticks,
            ants  = summary.ants,
            paths = summary.paths,
            "all ants reached the sink"
        );
        observer.on_finish(&summary);
        Ok(summary)
    }

    /// Compute the next tick.
    ///
    /// Returns `Ok(None)` once every ant has arrived (and after any error).
    pub fn step(&mut self) -> SimResult<Option<TickMoves>> {
        if self.phase != Phase::Advancing {
            return Ok(None);
        }
        if self.completed == self.total {
            self.phase = Phase::Drained;
            return Ok(None);
        }

        let tick = self.clock.next();
        if let Some(limit) = self.tick_limit.filter(|&limit| tick.0 > limit) {
            self.phase = Phase::Failed;
            return Err(SimError::TickLimit { limit, remaining: self.remaining() });
        }

        let mut moves = Vec::new();
        self.advance_phase(&mut moves);
        self.admission_phase(&mut moves);

        if moves.is_empty() {
            self.phase = Phase::Failed;
            return Err(SimError::Stalled { tick, remaining: self.remaining() });
        }

        self.clock = tick;
        if self.completed == self.total {
            self.phase = Phase::Drained;
        }
        trace!(%tick, moves = moves.len(), completed = self.completed, "tick");
        Ok(Some(TickMoves { tick, moves }))
    }

    // ── State accessors ───────────────────────────────────────────────────

    pub fn farm(&self) -> &'f Farm {
        self.farm
    }

    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// The last tick emitted (`Tick::ZERO` before the first step).
    pub fn tick(&self) -> Tick {
        self.clock
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    pub fn is_drained(&self) -> bool {
        self.completed == self.total
    }

    /// Admitted ants not yet at the sink, with the room each occupies.
    pub fn in_flight(&self) -> Vec<(AntId, RoomId)> {
        let mut out = Vec::new();
        for (p, path) in self.paths.iter().enumerate() {
            let queue = self.assignment.queue(p);
            for k in self.in_flight[p]..self.offsets[p].len() {
                out.push((queue[k], path.room(self.offsets[p][k])));
            }
        }
        out
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.clock.0,
            ants:  self.total,
            paths: self.paths.len(),
        }
    }

    // ── Phases ────────────────────────────────────────────────────────────

    /// Move every in-flight ant one room forward.
    fn advance_phase(&mut self, moves: &mut Vec<Move>) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let paths      = &self.paths;
        let assignment = &self.assignment;
        let offsets    = &mut self.offsets;
        let in_flight  = &mut self.in_flight;
        let completed  = &mut self.completed;

        for (p, path) in paths.iter().enumerate() {
            let queue = assignment.queue(p);
            let last  = path.len() - 1;
            for k in in_flight[p]..offsets[p].len() {
                let offset = &mut offsets[p][k];
                *offset += 1;
                moves.push(Move::new(queue[k], path.room(*offset)));
                if *offset == last {
                    in_flight[p] = k + 1;
                    *completed += 1;
                }
            }
        }
    }

    /// Admit the next queued ant of every path into the path's second room.
    fn admission_phase(&mut self, moves: &mut Vec<Move>) {
        let paths      = &self.paths;
        let assignment = &self.assignment;
        let offsets    = &mut self.offsets;
        let in_flight  = &mut self.in_flight;
        let completed  = &mut self.completed;

        for (p, path) in paths.iter().enumerate() {
            let admitted = offsets[p].len();
            let Some(&ant) = assignment.queue(p).get(admitted) else {
                continue;
            };
            offsets[p].push(1);
            moves.push(Move::new(ant, path.room(1)));
            // A two-room path delivers the ant at admission.
            if path.len() == 2 {
                in_flight[p] = admitted + 1;
                *completed += 1;
            }
        }
    }
}

impl Iterator for Simulation<'_> {
    type Item = SimResult<TickMoves>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}
