//! Source-to-sink paths and disjoint path sets.

use lemin_core::RoomId;

use crate::{Farm, GraphError, GraphResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered, cycle-free sequence of rooms from the source to the sink.
///
/// Always holds at least two rooms, so `rooms[1]` (the admission room) exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    rooms: Vec<RoomId>,
}

impl Path {
    /// Wrap a room sequence, rejecting sequences shorter than two rooms or
    /// visiting any room twice.
    pub fn new(rooms: Vec<RoomId>) -> GraphResult<Self> {
        if rooms.len() < 2 {
            return Err(GraphError::DegeneratePath(rooms.len()));
        }
        for (i, room) in rooms.iter().enumerate() {
            if rooms[..i].contains(room) {
                return Err(GraphError::RepeatedRoom(*room));
            }
        }
        Ok(Self { rooms })
    }

    #[inline]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Number of rooms, source and sink included.
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Never true; a `Path` holds at least two rooms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of hops from source to sink.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.rooms.len() - 1
    }

    #[inline]
    pub fn first(&self) -> RoomId {
        self.rooms[0]
    }

    #[inline]
    pub fn last(&self) -> RoomId {
        self.rooms[self.rooms.len() - 1]
    }

    /// The room at `offset` (0 = source).
    #[inline]
    pub fn room(&self, offset: usize) -> RoomId {
        self.rooms[offset]
    }

    /// Rooms strictly between source and sink.
    #[inline]
    pub fn intermediates(&self) -> &[RoomId] {
        &self.rooms[1..self.rooms.len() - 1]
    }

    /// Room names joined with `->`, for logs.
    pub fn describe(&self, farm: &Farm) -> String {
        self.rooms
            .iter()
            .map(|&r| farm.room_name(r))
            .collect::<Vec<_>>()
            .join("->")
    }
}

// ── PathSet ───────────────────────────────────────────────────────────────────

/// An ordered collection of source→sink paths sharing no intermediate room.
///
/// Path order is significant: it is the path index used by the scheduler and
/// the canonical per-tick output order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    /// Build a set, checking that every path runs `start → end` and that no
    /// intermediate room is shared.
    ///
    /// An empty set is accepted; the finders themselves never return one.
    pub fn new(start: RoomId, end: RoomId, paths: Vec<Path>) -> GraphResult<Self> {
        for (index, path) in paths.iter().enumerate() {
            if path.first() != start || path.last() != end {
                return Err(GraphError::EndpointMismatch { index });
            }
        }
        let set = Self { paths };
        set.check_disjoint()?;
        Ok(set)
    }

    /// Verify pairwise disjointness of intermediate rooms.
    pub fn check_disjoint(&self) -> GraphResult<()> {
        let rooms = self
            .paths
            .iter()
            .flat_map(|p| p.intermediates())
            .map(|r| r.index() + 1)
            .max()
            .unwrap_or(0);

        // owner[r] = index of the first path through room r.
        let mut owner: Vec<Option<usize>> = vec![None; rooms];
        for (index, path) in self.paths.iter().enumerate() {
            for &room in path.intermediates() {
                if let Some(first) = owner[room.index()].replace(index) {
                    return Err(GraphError::SharedRoom { room, first, second: index });
                }
            }
        }
        Ok(())
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    /// Node count of each path, in path order.
    pub fn lengths(&self) -> Vec<usize> {
        self.paths.iter().map(Path::len).collect()
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item     = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
