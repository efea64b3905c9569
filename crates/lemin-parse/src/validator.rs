//! Semantic checks on a [`RawFarm`] and conversion to a [`Farm`].

use std::collections::HashMap;

use lemin_graph::{Coord, Farm, FarmBuilder};
use tracing::debug;

use crate::{ParseError, ParseResult, RawFarm};

/// Check `raw` and build the graph.
///
/// Checks run in this order and the first failure is returned:
///
/// 1. the ant count is positive (and fits a `u32`);
/// 2. start and end are defined, exist and differ;
/// 3. room names are unique;
/// 4. no coordinate is negative;
/// 5. every link joins two distinct, existing rooms.
///
/// Repeated links are accepted and collapse into one.
pub fn validate(raw: &RawFarm) -> ParseResult<Farm> {
    if raw.ants <= 0 {
        return Err(ParseError::NonPositiveAnts(raw.ants));
    }
    let ants = u32::try_from(raw.ants).map_err(|_| ParseError::TooManyAnts(raw.ants))?;

    let start = raw.start.as_deref().ok_or(ParseError::StartUndefined)?;
    let end   = raw.end.as_deref().ok_or(ParseError::EndUndefined)?;

    let mut first_line: HashMap<&str, usize> = HashMap::with_capacity(raw.rooms.len());
    for room in &raw.rooms {
        if let Some(&first) = first_line.get(room.name.as_str()) {
            return Err(ParseError::DuplicateRoom {
                name: room.name.clone(),
                line: room.line,
                first,
            });
        }
        first_line.insert(&room.name, room.line);
    }

    for (role, name) in [("start", start), ("end", end)] {
        if !first_line.contains_key(name) {
            return Err(ParseError::UnknownTerminal { role, name: name.to_owned() });
        }
    }
    if start == end {
        return Err(ParseError::SameStartEnd(start.to_owned()));
    }

    if let Some(room) = raw.rooms.iter().find(|r| r.x < 0 || r.y < 0) {
        return Err(ParseError::NegativeCoord {
            name: room.name.clone(),
            line: room.line,
            x:    room.x,
            y:    room.y,
        });
    }

    let mut builder = FarmBuilder::new();
    for room in &raw.rooms {
        builder.add_room(room.name.as_str(), Coord::new(room.x, room.y))?;
    }
    for link in &raw.links {
        let (Some(a), Some(b)) = (builder.room_id(&link.a), builder.room_id(&link.b)) else {
            let name = if builder.room_id(&link.a).is_none() { &link.a } else { &link.b };
            return Err(ParseError::UnknownLinkRoom { name: name.clone(), line: link.line });
        };
        if a == b {
            return Err(ParseError::SelfLink { name: link.a.clone(), line: link.line });
        }
        builder.link_ids(a, b)?;
    }

    let farm = builder.build(start, end, ants)?;
    debug!(
        rooms = farm.room_count(),
        links = farm.link_count(),
        ants,
        "farm validated"
    );
    Ok(farm)
}
