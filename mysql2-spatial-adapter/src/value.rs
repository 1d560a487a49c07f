//! Values passed to the quoting layer.

use mysql2_spatial_geometry::SridGeometry;

/// Plain (non-geometry) SQL value handled by the base adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

/// A framework-level typed attribute: the value as supplied by the caller
/// plus the value after type casting.
#[derive(Debug, Clone, PartialEq)]
pub struct CastValue {
    pub before_type_cast: Box<SqlValue>,
    pub cast: Box<SqlValue>,
}

impl CastValue {
    pub fn new(before_type_cast: impl Into<SqlValue>, cast: impl Into<SqlValue>) -> Self {
        Self {
            before_type_cast: Box::new(before_type_cast.into()),
            cast: Box::new(cast.into()),
        }
    }
}

/// Any value the adapter can be asked to quote.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Geometry(SridGeometry),
    Cast(CastValue),
    Scalar(ScalarValue),
}

impl From<SridGeometry> for SqlValue {
    fn from(value: SridGeometry) -> Self {
        SqlValue::Geometry(value)
    }
}

impl From<CastValue> for SqlValue {
    fn from(value: CastValue) -> Self {
        SqlValue::Cast(value)
    }
}

impl From<ScalarValue> for SqlValue {
    fn from(value: ScalarValue) -> Self {
        SqlValue::Scalar(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Scalar(ScalarValue::Text(value.to_string()))
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Scalar(ScalarValue::Text(value))
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Scalar(ScalarValue::Int(value))
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Scalar(ScalarValue::Float(value))
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Scalar(ScalarValue::Bool(value))
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Scalar(ScalarValue::Null), Into::into)
    }
}
