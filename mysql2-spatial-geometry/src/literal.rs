//! SQL value literals for geometries.
//!
//! A geometry is sent to MySQL as a constructor call over a hex WKB literal:
//!
//! ```text
//! GeomFromWKB(0x0101000000000000000000F03F0000000000000040,4326)
//! ```

use crate::binary::{decode_wkb, encode_wkb};
use crate::config::{HexCase, LiteralConfig};
use crate::error::{GeometryError, Result};
use crate::geometry::SridGeometry;
use once_cell::sync::Lazy;
use regex::Regex;

static LITERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\(\s*0[xX]([0-9A-Fa-f]+)\s*,\s*(\d+)\s*\)\s*$")
        .expect("valid regex")
});

/// Render `value` as a SQL expression, e.g. `GeomFromWKB(0x<HEX>,<SRID>)`.
///
/// Deterministic for identical geometry, SRID and config.
pub fn encode_literal(value: &SridGeometry, config: &LiteralConfig) -> Result<String> {
    let bytes = encode_wkb(&value.geometry, config.byte_order)?;
    let hex = match config.hex_case {
        HexCase::Upper => hex::encode_upper(&bytes),
        HexCase::Lower => hex::encode(&bytes),
    };
    Ok(format!("{}(0x{},{})", config.constructor, hex, value.srid))
}

/// Parse a literal produced by [`encode_literal`] back into a geometry.
///
/// Any constructor name and either hex case are accepted.
pub fn decode_literal(literal: &str) -> Result<SridGeometry> {
    let caps = LITERAL_RE
        .captures(literal)
        .ok_or_else(|| GeometryError::InvalidLiteral(literal.to_string()))?;
    let bytes = hex::decode(&caps[2])?;
    let srid = caps[3]
        .parse::<u32>()
        .map_err(|e| GeometryError::InvalidLiteral(format!("SRID out of range: {}", e)))?;
    Ok(SridGeometry::new(decode_wkb(&bytes)?, srid))
}
