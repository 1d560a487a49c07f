//! WKB and MySQL internal geometry encoding.
//!
//! MySQL stores geometry columns as a 4-byte little-endian SRID followed by
//! standard WKB:
//!
//! ```text
//! srid: u32 (LE)
//! wkb:  [u8]      byte-order marker (0x01 LE / 0x00 BE), type code, coordinates
//! ```
//!
//! WKB itself is produced and parsed by the `wkb` crate. WKB has no codes for
//! geo-types' `Line`, `Rect` and `Triangle`; those are written as the
//! `LineString` / `Polygon` they describe and decode as such.

use crate::config::ByteOrder;
use crate::error::{GeometryError, Result};
use crate::geometry::SridGeometry;
use geo_traits::to_geo::ToGeoGeometry;
use geo_types::{Geometry, GeometryCollection, LineString};
use std::borrow::Cow;

/// Length of the SRID prefix in the internal format.
pub const SRID_PREFIX_LEN: usize = 4;

/// Rewrite `geom` using only WKB-representable variants.
///
/// `decode_wkb(encode_wkb(g))` equals `to_wkb_geometry(g)` for every `g`.
pub fn to_wkb_geometry(geom: &Geometry<f64>) -> Cow<'_, Geometry<f64>> {
    match geom {
        Geometry::Line(line) => Cow::Owned(Geometry::LineString(LineString::new(vec![
            line.start, line.end,
        ]))),
        Geometry::Rect(rect) => Cow::Owned(Geometry::Polygon(rect.to_polygon())),
        Geometry::Triangle(triangle) => Cow::Owned(Geometry::Polygon(triangle.to_polygon())),
        Geometry::GeometryCollection(collection) => {
            let members: Vec<_> = collection.0.iter().map(to_wkb_geometry).collect();
            if members.iter().all(|m| matches!(m, Cow::Borrowed(_))) {
                return Cow::Borrowed(geom);
            }
            Cow::Owned(Geometry::GeometryCollection(GeometryCollection(
                members.into_iter().map(Cow::into_owned).collect(),
            )))
        }
        other => Cow::Borrowed(other),
    }
}

/// Encode a geometry as WKB.
pub fn encode_wkb(geom: &Geometry<f64>, byte_order: ByteOrder) -> Result<Vec<u8>> {
    let geom = to_wkb_geometry(geom);
    let mut buf = Vec::with_capacity(64);
    let options = wkb::writer::WriteOptions {
        endianness: byte_order.to_wkb(),
    };
    wkb::writer::write_geometry(&mut buf, &*geom, &options)
        .map_err(|e| GeometryError::Wkb(e.to_string()))?;
    Ok(buf)
}

/// Decode WKB (either byte order) into a geo-types Geometry.
pub fn decode_wkb(data: &[u8]) -> Result<Geometry<f64>> {
    let parsed = wkb::reader::read_wkb(data).map_err(|e| GeometryError::Wkb(e.to_string()))?;
    parsed.try_to_geometry().ok_or(GeometryError::EmptyGeometry)
}

/// Encode to MySQL's internal storage format.
///
/// The WKB part is always little-endian, matching what the server stores.
pub fn encode_internal(value: &SridGeometry) -> Result<Vec<u8>> {
    let body = encode_wkb(&value.geometry, ByteOrder::LittleEndian)?;
    let mut buf = Vec::with_capacity(SRID_PREFIX_LEN + body.len());
    buf.extend_from_slice(&value.srid.to_le_bytes());
    buf.extend_from_slice(&body);
    Ok(buf)
}

/// Decode a value in MySQL's internal storage format.
pub fn decode_internal(data: &[u8]) -> Result<SridGeometry> {
    // 4-byte SRID + 1-byte order marker + 4-byte type code at minimum
    if data.len() < SRID_PREFIX_LEN + 5 {
        return Err(GeometryError::FormatError(format!(
            "internal geometry value too short: {} bytes",
            data.len()
        )));
    }
    let (prefix, body) = data.split_at(SRID_PREFIX_LEN);
    let srid = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]);
    Ok(SridGeometry::new(decode_wkb(body)?, srid))
}
