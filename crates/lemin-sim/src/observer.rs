//! Simulation observer trait for output and progress reporting.

use lemin_graph::{Farm, PathSet};
use lemin_schedule::Assignment;

use crate::{RunSummary, TickMoves};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — line printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_tick(&mut self, moves: &TickMoves, farm: &Farm) {
///         println!("{}", moves.render(farm));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick with the chosen paths and queues.
    fn on_plan(&mut self, _paths: &PathSet, _assignment: &Assignment, _farm: &Farm) {}

    /// Called once per tick, in tick order.  `moves` is never empty.
    fn on_tick(&mut self, _moves: &TickMoves, _farm: &Farm) {}

    /// Called once after the last ant has arrived.  Not called on error.
    fn on_finish(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
