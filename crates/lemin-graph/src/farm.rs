//! Ant-farm graph representation and builder.
//!
//! # Data layout
//!
//! Rooms are addressed by `RoomId`, assigned sequentially in declaration
//! order.  Names, coordinates and adjacency lists are parallel `Vec`s indexed
//! by `RoomId`.  Each room keeps two adjacency lists: one in link declaration
//! order and one sorted by neighbor name, so both [`NeighborOrder`]s are a
//! plain slice borrow on the search hot path.
//!
//! A `Farm` is immutable once built.  The path searches keep their own
//! visited/excluded sets and never write to the graph, so one `Farm` can be
//! searched any number of times, from any number of threads.

use lemin_core::{NeighborOrder, RoomId};

use crate::{GraphError, GraphResult};

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, RoomId>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<String, RoomId>;

// ── Coord ─────────────────────────────────────────────────────────────────────

/// Room position from the input file.  Only kept for rendering; the solver
/// never reads it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

// ── Farm ──────────────────────────────────────────────────────────────────────

/// Undirected room graph with a designated source (`start`), sink (`end`) and
/// ant count.
///
/// Do not construct directly; use [`FarmBuilder`].
#[derive(Debug, Clone)]
pub struct Farm {
    /// Name of each room.  Indexed by `RoomId`.
    pub room_names: Vec<String>,

    /// Input coordinates of each room.  Indexed by `RoomId`.
    pub room_pos: Vec<Coord>,

    /// Source room; every path starts here.
    pub start: RoomId,

    /// Sink room; every path ends here.
    pub end: RoomId,

    /// Number of ants to move from `start` to `end`.  Always > 0.
    pub ants: u32,

    declared: Vec<Vec<RoomId>>,
    sorted:   Vec<Vec<RoomId>>,
    index:    NameIndex,
}

impl Farm {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.room_names.len()
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.declared.iter().map(Vec::len).sum::<usize>() / 2
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Resolve a room name to its id.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    /// The name of `room`, exactly as it appeared in the input.
    #[inline]
    pub fn room_name(&self, room: RoomId) -> &str {
        &self.room_names[room.index()]
    }

    #[inline]
    pub fn coord(&self, room: RoomId) -> Coord {
        self.room_pos[room.index()]
    }

    pub fn start_name(&self) -> &str {
        self.room_name(self.start)
    }

    pub fn end_name(&self) -> &str {
        self.room_name(self.end)
    }

    /// `true` for the source and the sink.
    #[inline]
    pub fn is_terminal(&self, room: RoomId) -> bool {
        room == self.start || room == self.end
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `room` in the requested visiting order.
    #[inline]
    pub fn neighbors(&self, room: RoomId, order: NeighborOrder) -> &[RoomId] {
        match order {
            NeighborOrder::Declared      => &self.declared[room.index()],
            NeighborOrder::Lexicographic => &self.sorted[room.index()],
        }
    }

    #[inline]
    pub fn degree(&self, room: RoomId) -> usize {
        self.declared[room.index()].len()
    }

    pub fn are_linked(&self, a: RoomId, b: RoomId) -> bool {
        self.declared[a.index()].contains(&b)
    }
}

// ── FarmBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`Farm`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use lemin_graph::{Coord, FarmBuilder};
///
/// let mut b = FarmBuilder::new();
/// b.add_room("start", Coord::new(0, 0)).unwrap();
/// b.add_room("mid", Coord::new(1, 0)).unwrap();
/// b.add_room("end", Coord::new(2, 0)).unwrap();
/// b.add_link("start", "mid").unwrap();
/// b.add_link("mid", "end").unwrap();
/// let farm = b.build("start", "end", 3).unwrap();
/// assert_eq!(farm.room_count(), 3);
/// assert_eq!(farm.link_count(), 2);
/// ```
#[derive(Default)]
pub struct FarmBuilder {
    names:     Vec<String>,
    positions: Vec<Coord>,
    adjacency: Vec<Vec<RoomId>>,
    index:     NameIndex,
}

impl FarmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(&mut self, name: impl Into<String>, pos: Coord) -> GraphResult<RoomId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateRoom(name));
        }
        let id = RoomId(self.names.len() as u32);
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.positions.push(pos);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Link two rooms by name in both directions.
    ///
    /// Linking an already linked pair is a no-op.
    pub fn add_link(&mut self, a: &str, b: &str) -> GraphResult<()> {
        let ia = self.lookup(a)?;
        let ib = self.lookup(b)?;
        self.link_ids(ia, ib)
    }

    /// Link two rooms by id in both directions.
    pub fn link_ids(&mut self, a: RoomId, b: RoomId) -> GraphResult<()> {
        if a == b {
            return Err(GraphError::SelfLink(self.names[a.index()].clone()));
        }
        if !self.adjacency[a.index()].contains(&b) {
            self.adjacency[a.index()].push(b);
            self.adjacency[b.index()].push(a);
        }
        Ok(())
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    pub fn room_count(&self) -> usize {
        self.names.len()
    }

    /// Consume the builder and produce a [`Farm`].
    pub fn build(self, start: &str, end: &str, ants: u32) -> GraphResult<Farm> {
        let start_id = self.lookup(start)?;
        let end_id   = self.lookup(end)?;
        if start_id == end_id {
            return Err(GraphError::SameStartEnd(start.to_owned()));
        }
        if ants == 0 {
            return Err(GraphError::NoAnts);
        }

        let names = &self.names;
        let sorted: Vec<Vec<RoomId>> = self
            .adjacency
            .iter()
            .map(|list| {
                let mut list = list.clone();
                list.sort_by(|a, b| names[a.index()].cmp(&names[b.index()]));
                list
            })
            .collect();

        Ok(Farm {
            room_names: self.names,
            room_pos:   self.positions,
            start:      start_id,
            end:        end_id,
            ants,
            declared:   self.adjacency,
            sorted,
            index:      self.index,
        })
    }

    fn lookup(&self, name: &str) -> GraphResult<RoomId> {
        self.room_id(name)
            .ok_or_else(|| GraphError::UnknownRoom(name.to_owned()))
    }
}
