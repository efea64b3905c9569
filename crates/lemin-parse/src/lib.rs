//! `lemin-parse` — reads the ant-farm text format into a validated [`Farm`].
//!
//! Loading is two-staged: [`parse_farm_reader`] turns text into a
//! [`RawFarm`] (syntax only, line numbers kept), then [`validate`] checks the
//! semantic rules and builds the graph.  [`load_farm`] runs both on a file.
//!
//! # Format
//!
//! ```text
//! 3            <- ant count, first non-comment line
//! ##start      <- the next line is the source room
//! S 0 0        <- room: name x y
//! A 1 0
//! ##end        <- the next line is the sink room
//! E 2 0
//! S-A          <- link; every later line must be a link too
//! A-E
//! ```
//!
//! Empty lines and any other line starting with `#` are ignored.
//!
//! [`Farm`]: lemin_graph::Farm

pub mod error;
pub mod parser;
pub mod raw;
pub mod validator;


pub use error::{ParseError, ParseResult};
pub use parser::{parse_farm_file, parse_farm_reader, parse_farm_str};
pub use raw::{LinkDef, RawFarm, RoomDef};
pub use validator::validate;

use std::path::Path;

use lemin_graph::Farm;

/// Parse and validate the farm in `path`.
pub fn load_farm(path: &Path) -> ParseResult<Farm> {
    let raw = parse_farm_file(path)?;
    validate(&raw)
}
