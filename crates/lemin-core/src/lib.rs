//! `lemin-core` — foundational types for the lem-in ant-farm solver.
//!
//! This crate is a dependency of every other `lemin-*` crate.  It has no
//! `lemin-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `AntId`, `RoomId`                                      |
//! | [`time`]   | `Tick`                                                 |
//! | [`config`] | `RunConfig`, `Strategy`, `NeighborOrder`               |
//! | [`error`]  | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `RunConfig` from a JSON file.             |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{NeighborOrder, RunConfig, Strategy};
pub use error::{CoreError, CoreResult};
pub use ids::{AntId, RoomId};
pub use time::Tick;
