//! CSV output backend.
//!
//! Creates `moves.csv` in the configured output directory, one row per move.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MoveRow, OutputResult};

/// File name created by [`CsvWriter::new`].
pub const MOVES_FILE: &str = "moves.csv";

/// Writes every move as a `tick,ant,room` row.
pub struct CsvWriter {
    moves:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `moves.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut moves = Writer::from_path(dir.join(MOVES_FILE))?;
        moves.write_record(["tick", "ant", "room"])?;
        Ok(Self { moves, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick(&mut self, _tick: u64, rows: &[MoveRow]) -> OutputResult<()> {
        for row in rows {
            self.moves.write_record(&[
                row.tick.to_string(),
                row.ant.to_string(),
                row.room.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        Ok(())
    }
}
