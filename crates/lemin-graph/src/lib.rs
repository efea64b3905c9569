//! `lemin-graph` — ant-farm graph model and disjoint path search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`farm`]   | `Farm` (rooms + symmetric adjacency), `FarmBuilder`, `Coord` |
//! | [`path`]   | `Path`, `PathSet` (vertex-disjoint source→sink paths)        |
//! | [`finder`] | `PathFinder` trait                                           |
//! | [`dfs`]    | `DfsPathFinder` — enumerate all simple paths, first-fit pick |
//! | [`bfs`]    | `BfsPathFinder` — repeated shortest path with room retirement |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the room-name index.                            |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.         |

pub mod bfs;
pub mod dfs;
pub mod error;
pub mod farm;
pub mod finder;
pub mod path;

#[cfg(test)]
mod tests;

pub use bfs::BfsPathFinder;
pub use dfs::{DfsPathFinder, enumerate_simple_paths};
pub use error::{GraphError, GraphResult};
pub use farm::{Coord, Farm, FarmBuilder};
pub use finder::{PathFinder, finders_for};
pub use path::{Path, PathSet};
