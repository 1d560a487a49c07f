//! Catalog row parsing.
//!
//! Turns `SHOW FULL FIELDS` and `SHOW KEYS` result rows into typed
//! descriptors. Column rows map one-to-one onto [`ColumnDescriptor`]s.
//! Key rows arrive one per `(index, column)` pair and are folded into one
//! [`IndexDescriptor`] per index name.
//!
//! A row missing an expected field fails the whole parse with
//! [`AdapterError::CatalogFormat`]; no partial list is returned.

use crate::base::BaseAdapter;
use crate::error::{AdapterError, Result};
use crate::registry::SpatialTypeRegistry;
use crate::row::Row;
use crate::types::TypeMetadata;
use mysql2_spatial_geometry::GeometryType;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Key name MySQL reports for the primary key.
pub const PRIMARY_KEY_NAME: &str = "PRIMARY";

/// `Index_type` value of a spatial index.
pub const SPATIAL_INDEX_TYPE: &str = "SPATIAL";

/// A table column as described by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub default_value: Option<String>,
    pub type_metadata: TypeMetadata,
    pub nullable: bool,
    pub collation: Option<String>,
    /// e.g. `auto_increment`; empty when the catalog reports nothing.
    pub extra: String,
}

impl ColumnDescriptor {
    pub fn is_spatial(&self) -> bool {
        self.type_metadata.is_spatial()
    }

    /// Concrete geometric type (`None` for generic `geometry` columns).
    pub fn geometric_type(&self) -> Option<GeometryType> {
        self.type_metadata.geometric_type
    }
}

/// A secondary index as described by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDescriptor {
    pub table: String,
    pub name: String,
    pub unique: bool,
    pub columns: Vec<String>,
    /// Prefix lengths, parallel to `columns`. Always empty for spatial
    /// indexes, which never report a sub-part.
    pub lengths: Vec<Option<u32>>,
    /// Functional key parts (MySQL 8 `Expression`), which have no column.
    pub expressions: Vec<String>,
    pub spatial: bool,
}

impl IndexDescriptor {
    fn from_first_row(row: &Row, name: &str) -> Result<Self> {
        Ok(Self {
            table: row.require_text("Table")?.to_string(),
            name: name.to_string(),
            unique: row.require_int("Non_unique")? == 0,
            columns: Vec::new(),
            lengths: Vec::new(),
            expressions: Vec::new(),
            spatial: row.require_text("Index_type")? == SPATIAL_INDEX_TYPE,
        })
    }
}

/// Parses catalog rows, consulting the spatial registry for column types.
#[derive(Debug, Clone, Copy)]
pub struct CatalogRowParser<'a> {
    registry: &'a SpatialTypeRegistry,
    base: &'a dyn BaseAdapter,
}

impl<'a> CatalogRowParser<'a> {
    pub fn new(registry: &'a SpatialTypeRegistry, base: &'a dyn BaseAdapter) -> Self {
        Self { registry, base }
    }

    /// One descriptor per row, in catalog order.
    ///
    /// Expects `Field`, `Type`, `Null`, `Default`, `Collation` and `Extra`.
    pub fn parse_columns(&self, rows: &[Row]) -> Result<Vec<ColumnDescriptor>> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| self.parse_column(row).map_err(|e| at_row(i, e)))
            .collect()
    }

    fn parse_column(&self, row: &Row) -> Result<ColumnDescriptor> {
        let name = row.require_text("Field")?;
        let sql_type = row.require_text("Type")?;
        let extra = row.nullable_text("Extra")?.unwrap_or_default();
        let type_metadata = self.registry.classify(sql_type, extra, self.base);
        Ok(ColumnDescriptor {
            name: name.to_string(),
            default_value: row.nullable_text("Default")?.map(str::to_string),
            type_metadata,
            nullable: row.nullable_text("Null")? == Some("YES"),
            collation: row.nullable_text("Collation")?.map(str::to_string),
            extra: extra.to_string(),
        })
    }

    /// Fold key rows into index descriptors.
    ///
    /// See [`parse_indexes`].
    pub fn parse_indexes(&self, rows: &[Row]) -> Result<Vec<IndexDescriptor>> {
        parse_indexes(rows)
    }
}

/// Fold `SHOW KEYS` rows into index descriptors, in first-seen order.
///
/// Expects `Table`, `Key_name`, `Non_unique`, `Column_name`, `Index_type`,
/// and `Sub_part` for non-spatial column key parts. Rows of the primary key
/// are dropped. Rows of an index already seen are appended to it. A NULL
/// `Column_name` marks a functional key part; its `Expression`, when the
/// server reports one, goes to [`IndexDescriptor::expressions`].
pub fn parse_indexes(rows: &[Row]) -> Result<Vec<IndexDescriptor>> {
    let mut indexes: Vec<IndexDescriptor> = Vec::new();
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();

    for (i, row) in rows.iter().enumerate() {
        fold_key_row(row, &mut indexes, &mut positions).map_err(|e| at_row(i, e))?;
    }

    Ok(indexes)
}

fn fold_key_row(
    row: &Row,
    indexes: &mut Vec<IndexDescriptor>,
    positions: &mut FxHashMap<String, usize>,
) -> Result<()> {
    let key_name = row.require_text("Key_name")?;
    if key_name == PRIMARY_KEY_NAME {
        return Ok(());
    }

    let pos = match positions.get(key_name) {
        Some(&pos) => pos,
        None => {
            indexes.push(IndexDescriptor::from_first_row(row, key_name)?);
            positions.insert(key_name.to_string(), indexes.len() - 1);
            indexes.len() - 1
        }
    };

    let index = &mut indexes[pos];
    let Some(column) = row.nullable_text("Column_name")? else {
        let expression = match row.get("Expression") {
            Some(_) => row.nullable_text("Expression")?,
            None => None,
        };
        tracing::debug!(index = key_name, ?expression, "functional key part");
        index.expressions.extend(expression.map(str::to_string));
        return Ok(());
    };
    index.columns.push(column.to_string());
    if !index.spatial {
        index.lengths.push(row.nullable_u32("Sub_part")?);
    }
    Ok(())
}

fn at_row(i: usize, err: AdapterError) -> AdapterError {
    match err {
        AdapterError::CatalogFormat(msg) => {
            AdapterError::CatalogFormat(format!("row {}: {}", i, msg))
        }
        other => other,
    }
}
