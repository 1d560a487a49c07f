//! Shared test harness for mysql2-spatial-adapter integration tests.
//!
//! Provides a scripted in-memory connection and catalog row builders.

// Not every integration test crate uses every helper.
#![allow(dead_code)]

pub mod tracing;

use mysql2_spatial_adapter::{BoxError, Connection, Row, RowValue};
use std::collections::HashMap;

// =============================================================================
// MockConnection: scripted query results, recorded statements
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("mock connection failure: {0}")]
pub struct MockError(pub String);

#[derive(Debug, Default)]
pub struct MockConnection {
    responses: HashMap<String, Vec<Row>>,
    fail_with: Option<String>,
    /// Every statement passed to `query`, in order.
    pub queries: Vec<String>,
    /// Every statement passed to `execute`, in order.
    pub executed: Vec<String>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the rows returned for an exact SQL string.
    pub fn respond(mut self, sql: &str, rows: Vec<Row>) -> Self {
        self.responses.insert(sql.to_string(), rows);
        self
    }

    /// Make every call fail with `MockError(msg)`.
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::default()
        }
    }
}

impl Connection for MockConnection {
    fn query(&mut self, sql: &str) -> Result<Vec<Row>, BoxError> {
        self.queries.push(sql.to_string());
        if let Some(msg) = &self.fail_with {
            return Err(Box::new(MockError(msg.clone())));
        }
        self.responses
            .get(sql)
            .cloned()
            .ok_or_else(|| Box::new(MockError(format!("unscripted query: {}", sql))) as BoxError)
    }

    fn execute(&mut self, sql: &str) -> Result<u64, BoxError> {
        self.executed.push(sql.to_string());
        if let Some(msg) = &self.fail_with {
            return Err(Box::new(MockError(msg.clone())));
        }
        Ok(0)
    }
}

// =============================================================================
// Catalog row builders (shape of MySQL's SHOW output)
// =============================================================================

/// One `SHOW FULL FIELDS` row.
pub fn field_row(
    name: &str,
    sql_type: &str,
    null: &str,
    default: Option<&str>,
    collation: Option<&str>,
    extra: &str,
) -> Row {
    Row::new()
        .with("Field", name)
        .with("Type", sql_type)
        .with("Collation", collation)
        .with("Null", null)
        .with("Key", "")
        .with("Default", default)
        .with("Extra", extra)
        .with("Privileges", "select,insert,update,references")
        .with("Comment", "")
}

/// One `SHOW KEYS` row.
pub fn key_row(
    key_name: &str,
    non_unique: i64,
    seq: i64,
    column: &str,
    sub_part: Option<i64>,
    index_type: &str,
) -> Row {
    Row::new()
        .with("Table", "places")
        .with("Non_unique", non_unique)
        .with("Key_name", key_name)
        .with("Seq_in_index", seq)
        .with("Column_name", column)
        .with("Collation", if index_type == "SPATIAL" { None } else { Some("A") })
        .with("Cardinality", 0i64)
        .with("Sub_part", sub_part)
        .with("Packed", RowValue::Null)
        .with("Null", "")
        .with("Index_type", index_type)
        .with("Comment", "")
}

/// `places` table: PRIMARY(id), idx_a(name(10), city), idx_b SPATIAL(geom).
pub fn places_key_rows() -> Vec<Row> {
    vec![
        key_row("PRIMARY", 0, 1, "id", None, "BTREE"),
        key_row("idx_a", 1, 1, "name", Some(10), "BTREE"),
        key_row("idx_a", 1, 2, "city", None, "BTREE"),
        key_row("idx_b", 1, 1, "geom", None, "SPATIAL"),
    ]
}

/// `places` table columns.
pub fn places_field_rows() -> Vec<Row> {
    vec![
        field_row("id", "int(11)", "NO", None, None, "auto_increment"),
        field_row(
            "name",
            "varchar(255)",
            "YES",
            None,
            Some("utf8mb4_general_ci"),
            "",
        ),
        field_row("rating", "decimal(3,1)", "YES", Some("0.0"), None, ""),
        field_row("geom", "polygon NOT NULL", "NO", None, None, ""),
        field_row("center", "POINT", "YES", None, None, ""),
        field_row("area", "geometry", "YES", None, None, ""),
    ]
}
