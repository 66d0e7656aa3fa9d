//! Line-by-line map parser feeding a [`HubGraphBuilder`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::{Captures, Regex};
use rustc_hash::FxHashMap;
use tracing::debug;

use fl_core::{HubRole, ZoneKind};
use fl_graph::{HubGraph, HubGraphBuilder};

use crate::{MapError, MapResult};

/// Load a map file.  The graph is named after `path`.
pub fn load_map_file(path: impl AsRef<Path>) -> MapResult<HubGraph> {
    let path = path.as_ref();
    let file = File::open(path)?;
    load_map_reader(path.display().to_string(), BufReader::new(file))
}

/// Parse map text already in memory.
pub fn load_map_str(name: &str, text: &str) -> MapResult<HubGraph> {
    load_map_reader(name, text.as_bytes())
}

/// Parse a map from any buffered reader.
pub fn load_map_reader(name: impl Into<String>, reader: impl BufRead) -> MapResult<HubGraph> {
    let patterns = Patterns::new()?;
    let mut builder = HubGraphBuilder::new(name);

    for (i, raw) in reader.lines().enumerate() {
        let raw = raw?;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        parse_line(&patterns, &mut builder, line, i + 1)?;
    }

    debug!(
        hubs = builder.hub_count(),
        links = builder.link_count(),
        "map parsed"
    );
    Ok(builder.build()?)
}

// ── Line grammar ──────────────────────────────────────────────────────────────

struct Patterns {
    hub:        Regex,
    connection: Regex,
    field:      Regex,
}

impl Patterns {
    fn new() -> MapResult<Self> {
        Ok(Self {
            hub: Regex::new(
                r"^(hub|start_hub|end_hub):\s+(\S+)\s+(-?\d+)\s+(-?\d+)\s*(?:\[(.*?)\])?$",
            )?,
            connection: Regex::new(r"^connection:\s+([^\s-]+)-(\S+?)\s*(?:\[(.*?)\])?$")?,
            field:      Regex::new(r"^(\w+):\s+(.+)$")?,
        })
    }
}

fn parse_line(
    patterns: &Patterns,
    builder:  &mut HubGraphBuilder,
    line:     &str,
    number:   usize,
) -> MapResult<()> {
    let invalid = |source| MapError::Invalid { line: number, source };

    if let Some(caps) = patterns.hub.captures(line) {
        let role: HubRole = caps[1].parse().map_err(invalid)?;
        let name = &caps[2];
        let x = parse_number::<i64>(&caps[3], "x coordinate", number)?;
        let y = parse_number::<i64>(&caps[4], "y coordinate", number)?;
        let attrs = attributes(&caps, 5);

        let zone = match attrs.get("zone") {
            Some(z) => z.parse::<ZoneKind>().map_err(invalid)?,
            None => ZoneKind::default(),
        };
        let capacity = match attrs.get("max_drones") {
            Some(v) => parse_number::<u32>(v, "max_drones", number)?,
            None => 1,
        };

        let id = builder
            .add_hub(name, x, y, role, zone, capacity)
            .map_err(invalid)?;
        if let Some(color) = attrs.get("color") {
            builder.set_color(id, *color);
        }
        return Ok(());
    }

    if let Some(caps) = patterns.connection.captures(line) {
        let attrs = attributes(&caps, 3);
        let capacity = match attrs.get("max_link_capacity") {
            Some(v) => parse_number::<u32>(v, "max_link_capacity", number)?,
            None => 1,
        };
        builder
            .add_link(&caps[1], &caps[2], capacity)
            .map_err(invalid)?;
        return Ok(());
    }

    if let Some(caps) = patterns.field.captures(line) {
        if &caps[1] == "nb_drones" {
            let count = parse_number::<i64>(caps[2].trim(), "nb_drones", number)?;
            builder.set_drone_count(count);
        } else {
            debug!(line = number, key = &caps[1], "ignoring unknown field");
        }
        return Ok(());
    }

    Err(MapError::Parse {
        line:    number,
        message: format!("unrecognized line: {line:?}"),
    })
}

/// `key=value` pairs of the optional bracket group; bare words are skipped.
fn attributes<'t>(caps: &Captures<'t>, group: usize) -> FxHashMap<&'t str, &'t str> {
    caps.get(group)
        .map(|m| {
            m.as_str()
                .split_whitespace()
                .filter_map(|part| part.split_once('='))
                .collect()
        })
        .unwrap_or_default()
}

fn parse_number<T: std::str::FromStr>(text: &str, what: &str, line: usize) -> MapResult<T> {
    text.parse().map_err(|_| MapError::Parse {
        line,
        message: format!("{what} must be an integer, got {text:?}"),
    })
}
