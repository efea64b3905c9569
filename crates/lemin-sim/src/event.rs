//! Move events and their text rendering.
//!
//! The rendered form is the external protocol: one line per tick, tokens
//! `L<ant>-<room>` separated by single spaces, in canonical order (path index
//! ascending, admission order within a path, advances before admissions).

use std::fmt::{self, Write as _};

use lemin_core::{AntId, RoomId, Tick};
use lemin_graph::Farm;

/// One ant entering one room during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub ant:  AntId,
    pub room: RoomId,
}

impl Move {
    pub fn new(ant: AntId, room: RoomId) -> Self {
        Self { ant, room }
    }

    /// This move as a protocol token, room resolved through `farm`.
    pub fn token<'a>(&self, farm: &'a Farm) -> Token<'a> {
        Token::new(self.ant, farm.room_name(self.room))
    }
}

/// `L<ant>-<room>`, the unit of the move-line protocol.
///
/// Every writer of the protocol formats through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub ant:  AntId,
    pub room: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(ant: AntId, room: &'a str) -> Self {
        Self { ant, room }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}-{}", self.ant.0, self.room)
    }
}

/// All moves of one tick, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickMoves {
    pub tick:  Tick,
    pub moves: Vec<Move>,
}

impl TickMoves {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// The protocol line for this tick, without a trailing newline.
    pub fn render(&self, farm: &Farm) -> String {
        let mut line = String::with_capacity(self.moves.len() * 6);
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = write!(line, "{}", mv.token(farm));
        }
        line
    }
}

impl<'a> IntoIterator for &'a TickMoves {
    type Item     = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
