//! The `OutputWriter` trait implemented by all backend writers.

use crate::{MoveRow, OutputResult};

/// Trait implemented by the line and CSV writers.
///
/// Errors are returned here and stored by
/// [`SimOutputObserver`][crate::SimOutputObserver], whose hooks cannot fail.
pub trait OutputWriter {
    /// Write the moves of one tick, in the order given.
    fn write_tick(&mut self, tick: u64, rows: &[MoveRow]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_tick(&mut self, tick: u64, rows: &[MoveRow]) -> OutputResult<()> {
        (**self).write_tick(tick, rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// A disabled writer.
impl<W: OutputWriter> OutputWriter for Option<W> {
    fn write_tick(&mut self, tick: u64, rows: &[MoveRow]) -> OutputResult<()> {
        match self {
            Some(w) => w.write_tick(tick, rows),
            None    => Ok(()),
        }
    }

    fn finish(&mut self) -> OutputResult<()> {
        match self {
            Some(w) => w.finish(),
            None    => Ok(()),
        }
    }
}

/// Both writers, first then second.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_tick(&mut self, tick: u64, rows: &[MoveRow]) -> OutputResult<()> {
        self.0.write_tick(tick, rows)?;
        self.1.write_tick(tick, rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}
