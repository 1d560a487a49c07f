//! Geometry values and type classification.
//!
//! This module provides:
//! - [`GeometryType`], the geometric type discriminator shared by values and
//!   column type names (`point`, `multipolygon`, ...)
//! - [`SridGeometry`], a `geo-types` geometry tagged with its SRID
//! - WKT parsing and rendering

use crate::error::{GeometryError, Result};
use geo_types::Geometry;
use serde::{Deserialize, Serialize};
use wkt::ToWkt;

/// Geometry type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GeometryType {
    Point = 0,
    LineString = 1,
    Polygon = 2,
    MultiPoint = 3,
    MultiLineString = 4,
    MultiPolygon = 5,
    GeometryCollection = 6,
}

impl GeometryType {
    /// Classify a geo-types Geometry.
    pub fn from_geometry(geom: &Geometry<f64>) -> Self {
        match geom {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) | Geometry::Line(_) => GeometryType::LineString,
            Geometry::Polygon(_) | Geometry::Rect(_) | Geometry::Triangle(_) => {
                GeometryType::Polygon
            }
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Classify a MySQL column type name.
    ///
    /// Only the leading word is considered, so `"polygon NOT NULL"` is a
    /// polygon. Returns `None` for the generic `geometry` type and for
    /// non-spatial names.
    pub fn from_sql_name(sql_type: &str) -> Option<Self> {
        let head = sql_type
            .trim_start()
            .split(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match head.as_str() {
            "point" => Some(GeometryType::Point),
            "linestring" => Some(GeometryType::LineString),
            "polygon" => Some(GeometryType::Polygon),
            "multipoint" => Some(GeometryType::MultiPoint),
            "multilinestring" => Some(GeometryType::MultiLineString),
            "multipolygon" => Some(GeometryType::MultiPolygon),
            "geometrycollection" | "geomcollection" => Some(GeometryType::GeometryCollection),
            _ => None,
        }
    }

    /// MySQL column type name for this geometric type.
    pub fn sql_name(&self) -> &'static str {
        match self {
            GeometryType::Point => "point",
            GeometryType::LineString => "linestring",
            GeometryType::Polygon => "polygon",
            GeometryType::MultiPoint => "multipoint",
            GeometryType::MultiLineString => "multilinestring",
            GeometryType::MultiPolygon => "multipolygon",
            GeometryType::GeometryCollection => "geometrycollection",
        }
    }
}

/// A geometry tagged with its spatial reference identifier.
///
/// SRID 0 means "unset" (MySQL's Cartesian default).
#[derive(Debug, Clone, PartialEq)]
pub struct SridGeometry {
    pub geometry: Geometry<f64>,
    pub srid: u32,
}

impl SridGeometry {
    /// Wrap a geometry with an explicit SRID.
    pub fn new(geometry: impl Into<Geometry<f64>>, srid: u32) -> Self {
        Self {
            geometry: geometry.into(),
            srid,
        }
    }

    /// Wrap a geometry with SRID 0.
    pub fn unset(geometry: impl Into<Geometry<f64>>) -> Self {
        Self::new(geometry, 0)
    }

    /// Parse a WKT string and tag it with `srid`.
    pub fn from_wkt(wkt: &str, srid: u32) -> Result<Self> {
        Ok(Self::new(parse_wkt(wkt)?, srid))
    }

    /// Render the geometry as WKT (SRID not included).
    pub fn to_wkt(&self) -> String {
        self.geometry.wkt_string()
    }

    /// Geometric type of the wrapped value.
    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::from_geometry(&self.geometry)
    }
}

impl std::fmt::Display for SridGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SRID={};{}", self.srid, self.to_wkt())
    }
}

/// Parse WKT string to geo-types Geometry.
pub fn parse_wkt(wkt: &str) -> Result<Geometry<f64>> {
    use std::str::FromStr;
    let parsed = wkt::Wkt::<f64>::from_str(wkt)
        .map_err(|e| GeometryError::WktParse(format!("{:?}", e)))?;
    Geometry::try_from(parsed).map_err(|e| GeometryError::WktParse(format!("{:?}", e)))
}
