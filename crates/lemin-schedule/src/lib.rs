//! `lemin-schedule` — distribute ants over disjoint paths.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`assignment`] | `Assignment` — per-path admission queues, makespan     |
//! | [`scheduler`]  | `AntScheduler` trait, `GreedyScheduler`                |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                   |
//!
//! # Cost model
//!
//! A path admits one ant per tick and every ant advances one room per tick,
//! so the `k`-th ant on a path of `len` rooms reaches the sink at tick
//! `(len - 2) + k`.  The greedy scheduler hands each ant, in id order, to the
//! path with the smallest `len + already_assigned`.

pub mod assignment;
pub mod error;
pub mod scheduler;


pub use assignment::Assignment;
pub use error::{ScheduleError, ScheduleResult};
pub use scheduler::{AntScheduler, GreedyScheduler};
