//! Spatial column support for a MySQL client adapter.
//!
//! This crate layers geometry awareness over a generic MySQL adapter:
//!
//! - **Value quoting**: geometries become `GeomFromWKB(0x<HEX>,<SRID>)`
//!   literals; everything else is quoted by the base adapter
//! - **Catalog parsing**: `SHOW FULL FIELDS` / `SHOW KEYS` rows become typed
//!   column and index descriptors, with spatial columns and indexes flagged
//! - **Spatial DDL**: `CREATE SPATIAL INDEX` for spatial indexes
//! - **SQL generation**: a spatial-aware visitor replaces the base visitor
//!
//! Transport, statement execution and the generic adapter are external and
//! reached through the [`Connection`] and [`BaseAdapter`] traits.
//!
//! # Architecture
//!
//! ```text
//!                        SpatialAdapter
//!   ┌──────────────┬──────────────┬──────────────┬──────────────┐
//!   │ GeometryCodec│ CatalogRow-  │ SpatialType- │ SqlVisitor   │
//!   │              │ Parser       │ Registry     │ (spatial)    │
//!   └──────┬───────┴──────┬───────┴──────┬───────┴──────────────┘
//!          │              │              │
//!          ▼              ▼              ▼
//!     BaseAdapter    Connection     BaseAdapter
//!    (scalar quote) (query/execute) (generic types)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use mysql2_spatial_adapter::{IndexOptions, SpatialAdapter, SqlValue};
//! use mysql2_spatial_geometry::SridGeometry;
//!
//! let mut adapter = SpatialAdapter::mysql2(conn);
//!
//! for column in adapter.columns("places")? {
//!     if column.is_spatial() {
//!         println!("{} is {:?}", column.name, column.geometric_type());
//!     }
//! }
//!
//! adapter.add_index("places", &["geom"], &IndexOptions::spatial().named("sidx"))?;
//!
//! let point = SridGeometry::from_wkt("POINT(1 2)", 4326)?;
//! let literal = adapter.quote_value(&SqlValue::from(point))?;
//! ```
//!
//! # Modules
//!
//! - [`adapter`]: the [`SpatialAdapter`] facade
//! - [`base`]: [`BaseAdapter`] seam and the generic [`Mysql2Adapter`]
//! - [`catalog`]: column/index descriptors and row parsing
//! - [`codec`]: geometry-aware value quoting
//! - [`config`]: adapter configuration
//! - [`connection`]: [`Connection`] seam
//! - [`registry`]: spatial type registry
//! - [`row`]: named-field result rows
//! - [`types`]: type metadata and the native type table
//! - [`value`]: quotable values
//! - [`visitor`]: SQL-generation visitors
//! - [`error`]: Error types

pub mod adapter;
pub mod base;
pub mod catalog;
pub mod codec;
pub mod config;
pub mod connection;
pub mod error;
pub mod registry;
pub mod row;
pub mod types;
pub mod value;
pub mod visitor;

// Re-export key types
pub use adapter::SpatialAdapter;
pub use base::{BaseAdapter, IndexOptions, Mysql2Adapter};
pub use catalog::{parse_indexes, CatalogRowParser, ColumnDescriptor, IndexDescriptor};
pub use codec::GeometryCodec;
pub use config::SpatialAdapterConfig;
pub use connection::Connection;
pub use error::{AdapterError, BoxError, Result};
pub use registry::{SpatialTypeMapping, SpatialTypeRegistry};
pub use row::{Row, RowValue};
pub use types::{NativeType, NativeTypeTable, TypeKind, TypeMetadata};
pub use value::{CastValue, ScalarValue, SqlValue};
pub use visitor::{MySqlSpatialVisitor, MySqlVisitor, SqlExpr, SqlVisitor, ValueQuoter};

pub use mysql2_spatial_geometry as geometry;
