//! Run configuration.
//!
//! Typically built from command-line flags by the application crate, or
//! loaded from a JSON file (with the `serde` feature) and then overridden
//! field by field.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

// ── Strategy ──────────────────────────────────────────────────────────────────

/// Which disjoint-path search to run.
///
/// The graph does not describe which search suits it better; picking one is
/// a caller-level policy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Enumerate every simple path depth-first, then keep a first-fit
    /// disjoint subset.  Exponential; suited to small, low-branching farms.
    #[default]
    Dfs,
    /// Repeatedly extract a shortest path breadth-first and retire its rooms.
    Bfs,
    /// Run both and keep whichever path set schedules to fewer ticks.
    Best,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Dfs  => "dfs",
            Strategy::Bfs  => "bfs",
            Strategy::Best => "best",
        }
    }
}

impl FromStr for Strategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs"  => Ok(Strategy::Dfs),
            "bfs"  => Ok(Strategy::Bfs),
            "best" => Ok(Strategy::Best),
            _      => Err(CoreError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── NeighborOrder ─────────────────────────────────────────────────────────────

/// The order in which a room's neighbors are visited by the path searches.
///
/// Path discovery order, and therefore which disjoint paths get selected,
/// depends on this.  Fixing it makes every run reproducible.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NeighborOrder {
    /// The order in which links were declared in the input.
    #[default]
    Declared,
    /// Ascending by room name (byte-wise).
    Lexicographic,
}

impl NeighborOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            NeighborOrder::Declared      => "declared",
            NeighborOrder::Lexicographic => "lexicographic",
        }
    }
}

impl FromStr for NeighborOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "declared"                => Ok(NeighborOrder::Declared),
            "lexicographic" | "lex"   => Ok(NeighborOrder::Lexicographic),
            _                         => Err(CoreError::UnknownOrder(s.to_owned())),
        }
    }
}

impl fmt::Display for NeighborOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one solver run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Disjoint-path search to use.  Default: [`Strategy::Dfs`].
    pub strategy: Strategy,

    /// Neighbor visiting order for both searches.
    pub neighbor_order: NeighborOrder,

    /// Stop depth-first enumeration after this many simple paths.
    /// `None` enumerates exhaustively.
    pub enumeration_limit: Option<usize>,

    /// Abort the simulation if it has not drained after this many ticks.
    /// `None` relies on the natural bound of the schedule.
    pub tick_limit: Option<u64>,
}

impl RunConfig {
    /// Reject limits that could never let a run succeed.
    pub fn validate(&self) -> CoreResult<()> {
        if self.enumeration_limit == Some(0) {
            return Err(CoreError::Config("enumeration_limit must be at least 1".into()));
        }
        if self.tick_limit == Some(0) {
            return Err(CoreError::Config("tick_limit must be at least 1".into()));
        }
        Ok(())
    }
}
