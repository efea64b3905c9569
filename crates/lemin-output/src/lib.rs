//! `lemin-output` — writers for simulation output.
//!
//! | Writer          | Output                                              |
//! |-----------------|-----------------------------------------------------|
//! | [`LineWriter`]  | one `L<ant>-<room>` line per tick to any `io::Write` |
//! | [`CsvWriter`]   | `moves.csv` (`tick,ant,room`) in a directory        |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `lemin_sim::SimObserver`.  A pair `(A, B)` of writers and
//! an `Option<W>` are writers too, so several sinks can share one run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lemin_output::{LineWriter, SimOutputObserver};
//!
//! let mut obs = SimOutputObserver::new(LineWriter::new(std::io::stdout().lock()));
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::MoveRow;
pub use text::LineWriter;
pub use writer::OutputWriter;
