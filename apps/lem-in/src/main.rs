//! lem-in — moves every ant from the source room to the sink room.
//!
//! Reads a farm file, picks vertex-disjoint paths, spreads the ants over
//! them and prints one line of `L<ant>-<room>` moves per turn on stdout.
//! Logs go to stderr.
//!
//! ```text
//! lem-in farms/diamond.txt --strategy best -v
//! ```

mod args;


use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::fmt::SubscriberBuilder;

use lemin_output::{CsvWriter, LineWriter, SimOutputObserver};
use lemin_parse::load_farm;
use lemin_sim::{SimBuilder, SimError};

use args::Args;

const NO_ROUTE: &str = "ERROR: no route exists between source and sink";

fn main() -> ExitCode {
    let args = Args::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    match run(&args, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// `true` when the run failed because the farm has no source→sink route.
fn is_no_route(e: &anyhow::Error) -> bool {
    e.chain()
        .any(|cause| cause.downcast_ref::<SimError>().is_some_and(SimError::is_no_route))
}

/// The stderr line for a failed run.
fn failure_message(e: &anyhow::Error) -> String {
    if is_no_route(e) {
        NO_ROUTE.to_owned()
    } else {
        format!("error: {e:#}")
    }
}

/// Solve the farm named by `args` and write the move lines to `out`.
///
/// Nothing is written to `out` unless planning succeeds.
fn run<W: Write>(args: &Args, out: W) -> Result<()> {
    let config = args.run_config()?;
    let farm = load_farm(&args.file)
        .with_context(|| format!("loading farm {}", args.file.display()))?;
    info!(
        file  = %args.file.display(),
        rooms = farm.room_count(),
        links = farm.link_count(),
        ants  = farm.ants,
        strategy = %config.strategy,
        "farm loaded"
    );

    let mut sim = SimBuilder::new(&farm, config).build()?;

    let csv = match &args.csv {
        Some(dir) => Some(
            CsvWriter::new(dir).with_context(|| format!("creating CSV output in {}", dir.display()))?,
        ),
        None => None,
    };
    let lines = LineWriter::new(BufWriter::new(out));
    let mut observer = SimOutputObserver::new((lines, csv));

    let summary = sim.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(anyhow::Error::new(e).context("writing moves"));
    }

    info!(turns = summary.ticks, ants = summary.ants, paths = summary.paths, "done");
    Ok(())
}
