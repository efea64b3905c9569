//! Line-oriented reader for the farm text format.
//!
//! The reader only checks syntax.  Semantic rules (positive ant count, known
//! rooms, unique names, …) live in [`validate`][crate::validate].

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::Path;

use tracing::debug;

use crate::{LinkDef, ParseError, ParseResult, RawFarm, RoomDef};

const START: &str = "##start";
const END: &str = "##end";

/// Parse the farm in `path`.
pub fn parse_farm_file(path: &Path) -> ParseResult<RawFarm> {
    let file = File::open(path).map_err(ParseError::Io)?;
    parse_farm_reader(file)
}

/// Parse a farm held in memory.
pub fn parse_farm_str(text: &str) -> ParseResult<RawFarm> {
    parse_farm_reader(Cursor::new(text))
}

/// Like [`parse_farm_file`] but accepts any `Read` source.
pub fn parse_farm_reader<R: Read>(reader: R) -> ParseResult<RawFarm> {
    let mut lines = BufReader::new(reader).lines().enumerate();

    let mut ants: Option<i64> = None;
    let mut in_links = false;
    let mut farm = RawFarm::default();

    while let Some((index, text)) = lines.next() {
        let text = text?;
        let line = index + 1;
        let trimmed = text.trim();

        if trimmed.is_empty() {
            continue;
        }

        if trimmed == START || trimmed == END {
            if ants.is_none() {
                return Err(ParseError::InvalidAntCount { line, text: trimmed.to_owned() });
            }
            let command = if trimmed == START { START } else { END };
            let Some((next_index, next)) = lines.next() else {
                return Err(ParseError::MissingRoomAfter { command, line });
            };
            let room = parse_room(next?.trim(), next_index + 1)?;
            if command == START {
                farm.start = Some(room.name.clone());
            } else {
                farm.end = Some(room.name.clone());
            }
            farm.rooms.push(room);
            continue;
        }

        if trimmed.starts_with('#') {
            continue;
        }

        if ants.is_none() {
            let count = trimmed
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidAntCount { line, text: trimmed.to_owned() })?;
            ants = Some(count);
            continue;
        }

        // The first line with a dash switches to the link section for good.
        if trimmed.contains('-') {
            in_links = true;
        }
        if in_links {
            farm.links.push(parse_link(trimmed, line)?);
        } else {
            farm.rooms.push(parse_room(trimmed, line)?);
        }
    }

    farm.ants = ants.ok_or(ParseError::MissingAntCount)?;
    if farm.start.is_none() {
        return Err(ParseError::StartUndefined);
    }
    if farm.end.is_none() {
        return Err(ParseError::EndUndefined);
    }

    debug!(
        ants  = farm.ants,
        rooms = farm.rooms.len(),
        links = farm.links.len(),
        "farm parsed"
    );
    Ok(farm)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `<name> <x> <y>`
fn parse_room(text: &str, line: usize) -> ParseResult<RoomDef> {
    let invalid = || ParseError::InvalidRoom { line, text: text.to_owned() };

    let mut fields = text.split_whitespace();
    let (Some(name), Some(x), Some(y), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid());
    };
    if name.starts_with('#') {
        return Err(invalid());
    }

    Ok(RoomDef {
        name: name.to_owned(),
        x:    x.parse().map_err(|_| invalid())?,
        y:    y.parse().map_err(|_| invalid())?,
        line,
    })
}

/// `<a>-<b>`
fn parse_link(text: &str, line: usize) -> ParseResult<LinkDef> {
    let invalid = || ParseError::InvalidLink { line, text: text.to_owned() };

    let (a, b) = text.split_once('-').ok_or_else(invalid)?;
    let well_formed = |name: &str| !name.is_empty() && !name.contains(['-', ' ', '\t']);
    if !well_formed(a) || !well_formed(b) {
        return Err(invalid());
    }

    Ok(LinkDef { a: a.to_owned(), b: b.to_owned(), line })
}
