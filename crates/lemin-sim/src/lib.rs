//! `lemin-sim` — tick loop for the lem-in solver.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 1..:
//!   ① Advance   — every admitted, not-yet-arrived ant moves one room along
//!                 its path (path index ascending, admission order within a
//!                 path).  Reaching the sink marks the ant arrived.
//!   ② Admit     — every path with queued ants admits exactly one, straight
//!                 into the path's second room.
//!   ③ Drain     — stop once every ant has arrived.  A tick with no moves
//!                 while ants remain is an error, not a silent success.
//! ```
//!
//! Paths are vertex-disjoint and each admits one ant per tick while every
//! ant advances one room per tick, so no two ants ever share a non-terminal
//! room.  Nothing is checked at runtime; the property holds by construction.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lemin_core::RunConfig;
//! use lemin_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(&farm, RunConfig::default()).build()?;
//! for tick in &mut sim {
//!     println!("{}", tick?.render(&farm));
//! }
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod sim;


pub use builder::{Plan, SimBuilder};
pub use error::{SimError, SimResult};
pub use event::{Move, TickMoves, Token};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunSummary, Simulation};
