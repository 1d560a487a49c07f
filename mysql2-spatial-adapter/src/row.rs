//! Result rows returned by a [`Connection`](crate::Connection).
//!
//! Catalog statements (`SHOW FULL FIELDS`, `SHOW KEYS`) are read by field
//! name, so a row is an ordered list of `(name, value)` pairs.

use crate::error::{AdapterError, Result};

/// A single cell of a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValue {
    Null,
    Int(i64),
    Text(String),
}

impl RowValue {
    pub fn is_null(&self) -> bool {
        matches!(self, RowValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RowValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view of the cell; numeric text is accepted since drivers
    /// differ on how they type `SHOW` output.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RowValue::Int(v) => Some(*v),
            RowValue::Text(s) => s.trim().parse().ok(),
            RowValue::Null => None,
        }
    }
}

impl From<&str> for RowValue {
    fn from(value: &str) -> Self {
        RowValue::Text(value.to_string())
    }
}

impl From<String> for RowValue {
    fn from(value: String) -> Self {
        RowValue::Text(value)
    }
}

impl From<i64> for RowValue {
    fn from(value: i64) -> Self {
        RowValue::Int(value)
    }
}

impl<T: Into<RowValue>> From<Option<T>> for RowValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RowValue::Null, Into::into)
    }
}

/// A named-field result row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, RowValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field (builder style).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RowValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&RowValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field that must be present; NULL is allowed.
    pub fn require(&self, name: &str) -> Result<&RowValue> {
        self.get(name)
            .ok_or_else(|| AdapterError::catalog_format(format!("missing field `{}`", name)))
    }

    /// Field that must be present and non-NULL text.
    pub fn require_text(&self, name: &str) -> Result<&str> {
        match self.require(name)? {
            RowValue::Text(s) => Ok(s),
            other => Err(AdapterError::catalog_format(format!(
                "field `{}` expected text, got {:?}",
                name, other
            ))),
        }
    }

    /// Field that must be present; NULL maps to `None`.
    pub fn nullable_text(&self, name: &str) -> Result<Option<&str>> {
        match self.require(name)? {
            RowValue::Null => Ok(None),
            RowValue::Text(s) => Ok(Some(s)),
            other => Err(AdapterError::catalog_format(format!(
                "field `{}` expected text or NULL, got {:?}",
                name, other
            ))),
        }
    }

    /// Field that must be present and an integer (or numeric text).
    pub fn require_int(&self, name: &str) -> Result<i64> {
        let value = self.require(name)?;
        value.as_i64().ok_or_else(|| {
            AdapterError::catalog_format(format!(
                "field `{}` expected integer, got {:?}",
                name, value
            ))
        })
    }

    /// Field that must be present; NULL maps to `None`.
    pub fn nullable_u32(&self, name: &str) -> Result<Option<u32>> {
        let value = self.require(name)?;
        if value.is_null() {
            return Ok(None);
        }
        value
            .as_i64()
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| {
                AdapterError::catalog_format(format!(
                    "field `{}` expected non-negative integer or NULL, got {:?}",
                    name, value
                ))
            })
    }
}

impl<K: Into<String>, V: Into<RowValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        let row = Row::new()
            .with("Key_name", "idx_a")
            .with("Non_unique", "1")
            .with("Sub_part", RowValue::Null)
            .with("Seq_in_index", 2i64);

        assert_eq!(row.require_text("Key_name").unwrap(), "idx_a");
        assert_eq!(row.require_int("Non_unique").unwrap(), 1);
        assert_eq!(row.require_int("Seq_in_index").unwrap(), 2);
        assert_eq!(row.nullable_u32("Sub_part").unwrap(), None);
    }

    #[test]
    fn test_missing_field_is_catalog_error() {
        let row = Row::new().with("Field", "id");
        let err = row.require_text("Type").unwrap_err();
        assert!(matches!(err, AdapterError::CatalogFormat(_)));
    }

    #[test]
    fn test_null_where_text_required() {
        let row = Row::new().with("Field", RowValue::Null);
        assert!(row.require_text("Field").is_err());
        assert_eq!(row.nullable_text("Field").unwrap(), None);
    }

    #[test]
    fn test_negative_sub_part_rejected() {
        let row = Row::new().with("Sub_part", -1i64);
        assert!(row.nullable_u32("Sub_part").is_err());
    }

    #[test]
    fn test_from_iter() {
        let row: Row = [("Field", "geom"), ("Type", "point")].into_iter().collect();
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("Type"), Some(&RowValue::from("point")));
    }
}
