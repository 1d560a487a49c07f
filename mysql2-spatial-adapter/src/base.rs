//! Base (non-spatial) adapter seam.
//!
//! [`BaseAdapter`] is the generic MySQL behaviour the spatial layer falls back
//! to: scalar quoting, identifier quoting, default index names, generic index
//! creation, type classification and the native type table.
//! [`Mysql2Adapter`] is the bundled implementation.

use crate::connection::Connection;
use crate::error::{AdapterError, Result};
use crate::types::{
    base_type_name, extract_limit, extract_precision_scale, is_auto_increment, NativeType,
    NativeTypeTable, TypeKind, TypeMetadata,
};
use crate::value::ScalarValue;
use crate::visitor::{MySqlVisitor, SqlVisitor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Options accepted by `add_index`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexOptions {
    /// Explicit index name; generated from table and columns when absent.
    pub name: Option<String>,
    pub unique: bool,
    pub spatial: bool,
}

impl IndexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a spatial index.
    pub fn spatial() -> Self {
        Self {
            spatial: true,
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// Generic adapter behaviour the spatial facade composes over.
pub trait BaseAdapter: std::fmt::Debug + Send + Sync {
    /// Identifier of this adapter.
    fn adapter_name(&self) -> &str;

    /// Native type table used for DDL generation.
    fn native_database_types(&self) -> NativeTypeTable;

    /// Classify a catalog column type.
    fn fetch_type_metadata(&self, sql_type: &str, extra: &str) -> TypeMetadata;

    /// Quote a scalar value as a SQL literal.
    fn quote_scalar(&self, value: &ScalarValue) -> Result<String>;

    /// Quote a (possibly schema-qualified) table name.
    fn quote_table_name(&self, name: &str) -> String;

    /// Quote a column name.
    fn quote_column_name(&self, name: &str) -> String;

    /// Default index name for `columns` on `table`.
    fn index_name(&self, table: &str, columns: &[&str]) -> String;

    /// Create a (non-spatial) index.
    fn add_index(
        &self,
        conn: &mut dyn Connection,
        table: &str,
        columns: &[&str],
        options: &IndexOptions,
    ) -> Result<()>;

    /// SQL-generation visitor, if this adapter provides one.
    fn visitor(&self) -> Option<Arc<dyn SqlVisitor>>;
}

/// Backtick-quote a MySQL identifier.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Escape a string the way the mysql2 client does and wrap it in quotes.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\0' => out.push_str("\\0"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\u{1a}' => out.push_str("\\Z"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Generic MySQL adapter.
#[derive(Debug, Clone)]
pub struct Mysql2Adapter {
    visitor: Option<Arc<dyn SqlVisitor>>,
}

impl Mysql2Adapter {
    pub const ADAPTER_NAME: &'static str = "Mysql2";

    /// Adapter with the generic MySQL visitor.
    pub fn new() -> Self {
        Self {
            visitor: Some(Arc::new(MySqlVisitor)),
        }
    }

    /// Adapter that builds no visitor (older framework versions).
    pub fn without_visitor() -> Self {
        Self { visitor: None }
    }

    /// Native types before any spatial additions.
    pub fn base_native_types() -> NativeTypeTable {
        [
            (
                "primary_key",
                NativeType::new("bigint auto_increment PRIMARY KEY"),
            ),
            ("string", NativeType::with_limit("varchar", 255)),
            ("text", NativeType::new("text")),
            ("integer", NativeType::with_limit("int", 4)),
            ("float", NativeType::new("float")),
            ("decimal", NativeType::new("decimal")),
            ("datetime", NativeType::new("datetime")),
            ("timestamp", NativeType::new("timestamp")),
            ("time", NativeType::new("time")),
            ("date", NativeType::new("date")),
            ("binary", NativeType::new("blob")),
            ("boolean", NativeType::with_limit("tinyint", 1)),
            ("json", NativeType::new("json")),
        ]
        .into_iter()
        .map(|(key, native)| (key.to_string(), native))
        .collect()
    }
}

impl Default for Mysql2Adapter {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseAdapter for Mysql2Adapter {
    fn adapter_name(&self) -> &str {
        Self::ADAPTER_NAME
    }

    fn native_database_types(&self) -> NativeTypeTable {
        Self::base_native_types()
    }

    fn fetch_type_metadata(&self, sql_type: &str, extra: &str) -> TypeMetadata {
        let base = base_type_name(sql_type);
        let limit = extract_limit(sql_type);
        let kind = match base.as_str() {
            "tinyint" if limit == Some(1) => TypeKind::Boolean,
            "bool" | "boolean" => TypeKind::Boolean,
            "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" | "year" => {
                TypeKind::Integer
            }
            "float" | "double" | "real" => TypeKind::Float,
            "decimal" | "numeric" => TypeKind::Decimal,
            "char" | "varchar" | "enum" | "set" => TypeKind::String,
            "tinytext" | "text" | "mediumtext" | "longtext" => TypeKind::Text,
            "binary" | "varbinary" | "bit" | "tinyblob" | "blob" | "mediumblob" | "longblob" => {
                TypeKind::Binary
            }
            "date" => TypeKind::Date,
            "datetime" | "timestamp" => TypeKind::DateTime,
            "time" => TypeKind::Time,
            "json" => TypeKind::Json,
            _ => TypeKind::Other,
        };
        let (precision, scale) = match kind {
            TypeKind::Decimal => extract_precision_scale(sql_type),
            _ => (None, None),
        };
        TypeMetadata {
            sql_type: sql_type.to_string(),
            kind,
            limit: if kind == TypeKind::Decimal { None } else { limit },
            precision,
            scale,
            unsigned: sql_type.to_ascii_lowercase().contains("unsigned"),
            auto_increment: is_auto_increment(extra),
            geometric_type: None,
        }
    }

    fn quote_scalar(&self, value: &ScalarValue) -> Result<String> {
        match value {
            ScalarValue::Null => Ok("NULL".to_string()),
            ScalarValue::Bool(true) => Ok("TRUE".to_string()),
            ScalarValue::Bool(false) => Ok("FALSE".to_string()),
            ScalarValue::Int(v) => Ok(v.to_string()),
            ScalarValue::Float(v) if v.is_finite() => Ok(format!("{:?}", v)),
            ScalarValue::Float(v) => Err(AdapterError::unsupported_value(format!(
                "non-finite float {} has no SQL literal",
                v
            ))),
            ScalarValue::Text(s) => Ok(quote_string(s)),
            ScalarValue::Bytes(b) => Ok(format!("x'{}'", hex::encode(b))),
        }
    }

    fn quote_table_name(&self, name: &str) -> String {
        name.split('.')
            .map(quote_identifier)
            .collect::<Vec<_>>()
            .join(".")
    }

    fn quote_column_name(&self, name: &str) -> String {
        quote_identifier(name)
    }

    fn index_name(&self, table: &str, columns: &[&str]) -> String {
        format!("index_{}_on_{}", table, columns.join("_and_"))
    }

    fn add_index(
        &self,
        conn: &mut dyn Connection,
        table: &str,
        columns: &[&str],
        options: &IndexOptions,
    ) -> Result<()> {
        if columns.is_empty() {
            return Err(AdapterError::invalid_index(format!(
                "no columns given for index on {}",
                table
            )));
        }
        let name = options
            .name
            .clone()
            .unwrap_or_else(|| self.index_name(table, columns));
        let column_list = columns
            .iter()
            .map(|c| self.quote_column_name(c))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "CREATE {}INDEX {} ON {} ({})",
            if options.unique { "UNIQUE " } else { "" },
            quote_identifier(&name),
            self.quote_table_name(table),
            column_list
        );
        tracing::debug!(sql = %sql, "creating index");
        conn.execute(&sql).map_err(AdapterError::Connection)?;
        Ok(())
    }

    fn visitor(&self) -> Option<Arc<dyn SqlVisitor>> {
        self.visitor.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_scalars() {
        let adapter = Mysql2Adapter::new();
        let q = |v: ScalarValue| adapter.quote_scalar(&v).unwrap();
        assert_eq!(q(ScalarValue::Null), "NULL");
        assert_eq!(q(ScalarValue::Bool(true)), "TRUE");
        assert_eq!(q(ScalarValue::Int(-42)), "-42");
        assert_eq!(q(ScalarValue::Float(1.0)), "1.0");
        assert_eq!(q(ScalarValue::Float(0.25)), "0.25");
        assert_eq!(q(ScalarValue::Bytes(vec![0xDE, 0xAD])), "x'dead'");
    }

    #[test]
    fn test_quote_string_escapes() {
        assert_eq!(quote_string("O'Brien"), r"'O\'Brien'");
        assert_eq!(quote_string("a\\b\n"), r"'a\\b\n'");
        assert_eq!(quote_string("say \"hi\""), r#"'say \"hi\"'"#);
    }

    #[test]
    fn test_non_finite_float_unsupported() {
        let adapter = Mysql2Adapter::new();
        let err = adapter
            .quote_scalar(&ScalarValue::Float(f64::NAN))
            .unwrap_err();
        assert!(matches!(err, AdapterError::UnsupportedValue(_)));
    }

    #[test]
    fn test_quote_identifiers() {
        let adapter = Mysql2Adapter::new();
        assert_eq!(adapter.quote_table_name("geo.places"), "`geo`.`places`");
        assert_eq!(adapter.quote_column_name("we`ird"), "`we``ird`");
    }

    #[test]
    fn test_index_name() {
        let adapter = Mysql2Adapter::new();
        assert_eq!(
            adapter.index_name("places", &["lat", "lng"]),
            "index_places_on_lat_and_lng"
        );
    }

    #[test]
    fn test_fetch_type_metadata() {
        let adapter = Mysql2Adapter::new();

        let flag = adapter.fetch_type_metadata("tinyint(1)", "");
        assert_eq!(flag.kind, TypeKind::Boolean);

        let id = adapter.fetch_type_metadata("int(11) unsigned", "auto_increment");
        assert_eq!(id.kind, TypeKind::Integer);
        assert_eq!(id.limit, Some(11));
        assert!(id.unsigned);
        assert!(id.auto_increment);

        let price = adapter.fetch_type_metadata("decimal(10,2)", "");
        assert_eq!(price.kind, TypeKind::Decimal);
        assert_eq!((price.precision, price.scale), (Some(10), Some(2)));
        assert_eq!(price.limit, None);
    }

    #[test]
    fn test_visitor_presence() {
        assert!(Mysql2Adapter::new().visitor().is_some());
        assert!(Mysql2Adapter::without_visitor().visitor().is_none());
    }
}
