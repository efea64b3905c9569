//! Move-line backend: the solver's standard output format.

use std::io::Write;

use crate::writer::OutputWriter;
use crate::{MoveRow, OutputResult};

/// Writes one line per tick: `L<ant>-<room>` tokens separated by a single
/// space, no trailing space.
///
/// The inner writer is not buffered here; wrap it in a `BufWriter` when it
/// is a raw file or stdout.
pub struct LineWriter<W: Write> {
    inner:    W,
    lines:    u64,
    finished: bool,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, lines: 0, finished: false }
    }

    /// Number of lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputWriter for LineWriter<W> {
    fn write_tick(&mut self, _tick: u64, rows: &[MoveRow]) -> OutputResult<()> {
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                self.inner.write_all(b" ")?;
            }
            write!(self.inner, "{}", row.token())?;
        }
        self.inner.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
