//! Syntax-level farm description, before any semantic check.

/// One room line.  `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDef {
    pub name: String,
    pub x:    i64,
    pub y:    i64,
    pub line: usize,
}

/// One `a-b` link line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDef {
    pub a:    String,
    pub b:    String,
    pub line: usize,
}

/// A farm as written in the input.
///
/// Rooms and links are kept in input order, duplicates included; the
/// validator decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFarm {
    pub ants:  i64,
    pub rooms: Vec<RoomDef>,
    pub links: Vec<LinkDef>,
    /// Name of the room following `##start`.
    pub start: Option<String>,
    /// Name of the room following `##end`.
    pub end:   Option<String>,
}

impl RawFarm {
    pub fn room(&self, name: &str) -> Option<&RoomDef> {
        self.rooms.iter().find(|r| r.name == name)
    }
}
