//! Vertex identifier decoding
//!
//! A vertex id is a non-numeric prefix followed by a 1-based decimal number,
//! e.g. `I7` or `H12`. The number selects the adjacency matrix slot:
//! `I7` lives in slot 6. Ids with different prefixes but the same number share
//! a slot, so at most one of them can be registered in a network.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, RoadGraphError};

static VERTEX_ID_RE: OnceLock<Regex> = OnceLock::new();

fn vertex_id_re() -> &'static Regex {
    VERTEX_ID_RE.get_or_init(|| {
        Regex::new(r"^([^0-9]+)([0-9]+)$").expect("vertex id pattern is valid")
    })
}

/// Decode the zero-based slot of a vertex id.
pub fn decode_index(id: &str) -> Result<usize> {
    let invalid = || RoadGraphError::InvalidVertexId { id: id.to_string() };

    let caps = vertex_id_re().captures(id).ok_or_else(invalid)?;
    let number: usize = caps[2].parse().map_err(|_| invalid())?;

    // 1-based, so zero has no slot
    number.checked_sub(1).ok_or_else(invalid)
}
