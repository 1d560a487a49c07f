//! Geometry-aware value quoting.

use crate::base::BaseAdapter;
use crate::error::Result;
use crate::value::SqlValue;
use mysql2_spatial_geometry::{decode_internal, encode_literal, LiteralConfig, SridGeometry};

/// Encodes values into SQL literals, rendering geometries as
/// `GeomFromWKB(0x<HEX>,<SRID>)` and handing everything else to the base
/// adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeometryCodec {
    literal: LiteralConfig,
}

impl GeometryCodec {
    pub fn new(literal: LiteralConfig) -> Self {
        Self { literal }
    }

    pub fn literal_config(&self) -> &LiteralConfig {
        &self.literal
    }

    /// Encode `value` as a SQL literal.
    ///
    /// For a cast wrapper the innermost pre-cast value is checked for a
    /// geometry first; only when it is not one is the cast value encoded
    /// instead. Scalar errors from the base adapter propagate unchanged.
    pub fn encode(&self, value: &SqlValue, base: &dyn BaseAdapter) -> Result<String> {
        match value {
            SqlValue::Geometry(geom) => self.encode_geometry(geom),
            SqlValue::Cast(cast) => match raw_value(&cast.before_type_cast) {
                SqlValue::Geometry(geom) => self.encode_geometry(geom),
                _ => self.encode(&cast.cast, base),
            },
            SqlValue::Scalar(scalar) => base.quote_scalar(scalar),
        }
    }

    /// Encode a geometry as a SQL literal.
    pub fn encode_geometry(&self, geom: &SridGeometry) -> Result<String> {
        Ok(encode_literal(geom, &self.literal)?)
    }

    /// Decode a geometry column value as returned by the server
    /// (SRID prefix + WKB).
    pub fn decode_column_value(&self, data: &[u8]) -> Result<SridGeometry> {
        Ok(decode_internal(data)?)
    }
}

/// Unwrap nested casts down to the value the caller originally supplied.
fn raw_value(value: &SqlValue) -> &SqlValue {
    let mut value = value;
    while let SqlValue::Cast(cast) = value {
        value = cast.before_type_cast.as_ref();
    }
    value
}
