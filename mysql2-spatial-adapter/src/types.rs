//! Column type metadata and the native type table.

use mysql2_spatial_geometry::GeometryType;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

static LIMIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*(\d+)\s*(?:,\s*(\d+)\s*)?\)").expect("valid regex"));

/// Canonical type a column maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Geometry,
    Boolean,
    Integer,
    Float,
    Decimal,
    String,
    Text,
    Binary,
    Date,
    DateTime,
    Time,
    Json,
    Other,
}

impl TypeKind {
    /// Canonical type name, as used in the native type table.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Geometry => "geometry",
            TypeKind::Boolean => "boolean",
            TypeKind::Integer => "integer",
            TypeKind::Float => "float",
            TypeKind::Decimal => "decimal",
            TypeKind::String => "string",
            TypeKind::Text => "text",
            TypeKind::Binary => "binary",
            TypeKind::Date => "date",
            TypeKind::DateTime => "datetime",
            TypeKind::Time => "time",
            TypeKind::Json => "json",
            TypeKind::Other => "other",
        }
    }
}

/// Classified column type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeMetadata {
    /// Type string exactly as reported by the catalog.
    pub sql_type: String,
    pub kind: TypeKind,
    pub limit: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub unsigned: bool,
    pub auto_increment: bool,
    /// Concrete geometric type for spatial columns; `None` for generic
    /// `geometry` columns and non-spatial columns.
    pub geometric_type: Option<GeometryType>,
}

impl TypeMetadata {
    /// Metadata for a spatial column type.
    pub fn spatial(sql_type: &str, extra: &str) -> Self {
        Self {
            sql_type: sql_type.to_string(),
            kind: TypeKind::Geometry,
            limit: extract_limit(sql_type),
            precision: None,
            scale: None,
            unsigned: false,
            auto_increment: is_auto_increment(extra),
            geometric_type: GeometryType::from_sql_name(sql_type),
        }
    }

    pub fn is_spatial(&self) -> bool {
        self.kind == TypeKind::Geometry
    }
}

/// Leading type word, lower-cased (`"VARCHAR(255) BINARY"` → `"varchar"`).
pub fn base_type_name(sql_type: &str) -> String {
    sql_type
        .trim_start()
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// First parenthesized length, e.g. `255` in `varchar(255)`.
pub fn extract_limit(sql_type: &str) -> Option<u32> {
    LIMIT_RE
        .captures(sql_type)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// `(precision, scale)` from e.g. `decimal(10,2)`.
pub fn extract_precision_scale(sql_type: &str) -> (Option<u32>, Option<u32>) {
    match LIMIT_RE.captures(sql_type) {
        Some(caps) => (
            caps.get(1).and_then(|m| m.as_str().parse().ok()),
            caps.get(2).and_then(|m| m.as_str().parse().ok()),
        ),
        None => (None, None),
    }
}

pub(crate) fn is_auto_increment(extra: &str) -> bool {
    extra.to_ascii_lowercase().contains("auto_increment")
}

/// Entry of the native type table used for DDL generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl NativeType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limit: None,
        }
    }

    pub fn with_limit(name: impl Into<String>, limit: u32) -> Self {
        Self {
            name: name.into(),
            limit: Some(limit),
        }
    }
}

/// Abstract type name (`string`, `spatial`, ...) → native column type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NativeTypeTable(BTreeMap<String, NativeType>);

impl NativeTypeTable {
    /// Copy of `self` with `other`'s entries layered on top.
    pub fn merge(&self, other: impl IntoIterator<Item = (String, NativeType)>) -> Self {
        let mut merged = self.clone();
        merged.0.extend(other);
        merged
    }

    pub fn get(&self, key: &str) -> Option<&NativeType> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, NativeType)> for NativeTypeTable {
    fn from_iter<I: IntoIterator<Item = (String, NativeType)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
