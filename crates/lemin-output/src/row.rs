//! Plain data row written by output backends.

use lemin_core::AntId;
use lemin_graph::Farm;
use lemin_sim::{Move, Token};

/// One ant entering one room, with the room resolved to its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    pub tick: u64,
    pub ant:  u32,
    pub room: String,
}

impl MoveRow {
    pub fn from_move(tick: u64, mv: &Move, farm: &Farm) -> Self {
        Self {
            tick,
            ant:  mv.ant.0,
            room: farm.room_name(mv.room).to_owned(),
        }
    }

    /// The `L<ant>-<room>` token for this row.
    pub fn token(&self) -> Token<'_> {
        Token::new(AntId(self.ant), &self.room)
    }
}
