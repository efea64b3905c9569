//! Command-line arguments and their merge into a `RunConfig`.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use lemin_core::{NeighborOrder, RunConfig, Strategy};

#[derive(Parser, Debug)]
#[command(name = "lem-in")]
#[command(about = "Move an ant colony from ##start to ##end in as few turns as possible")]
pub struct Args {
    /// Farm description file
    pub file: PathBuf,

    /// Disjoint-path search: dfs, bfs or best
    #[arg(long)]
    pub strategy: Option<Strategy>,

    /// Neighbor visiting order: declared or lexicographic
    #[arg(long)]
    pub order: Option<NeighborOrder>,

    /// Stop depth-first enumeration after N simple paths
    #[arg(long, value_name = "N")]
    pub enumeration_limit: Option<usize>,

    /// Abort if the run has not finished after N turns
    #[arg(long, value_name = "N")]
    pub tick_limit: Option<u64>,

    /// Also write every move to DIR/moves.csv
    #[arg(long, value_name = "DIR")]
    pub csv: Option<PathBuf>,

    /// JSON run configuration; flags given on the command line win
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// The run configuration: the `--config` file (or defaults), then flags.
    pub fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening config {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => RunConfig::default(),
        };

        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(order) = self.order {
            config.neighbor_order = order;
        }
        if self.enumeration_limit.is_some() {
            config.enumeration_limit = self.enumeration_limit;
        }
        if self.tick_limit.is_some() {
            config.tick_limit = self.tick_limit;
        }

        config.validate().context("invalid run configuration")?;
        Ok(config)
    }

    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
