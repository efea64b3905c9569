//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lemin_graph::Farm;
use lemin_sim::{RunSummary, SimObserver, TickMoves};

use crate::row::MoveRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that forwards every tick to an [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].  Once a write has failed no further
/// ticks are written.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       Vec<MoveRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick(&mut self, moves: &TickMoves, farm: &Farm) {
        if self.last_error.is_some() {
            return;
        }
        let tick = moves.tick.0;
        self.rows.clear();
        self.rows.extend(moves.iter().map(|mv| MoveRow::from_move(tick, mv, farm)));
        let result = self.writer.write_tick(tick, &self.rows);
        self.store_err(result);
    }

    fn on_finish(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
