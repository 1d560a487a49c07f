//! Spatial adapter facade.
//!
//! [`SpatialAdapter`] composes a [`Connection`], a generic [`BaseAdapter`]
//! and the spatial pieces (type registry, catalog parser, geometry codec).
//! Non-spatial work is handed to the base adapter explicitly.

use crate::base::{BaseAdapter, IndexOptions, Mysql2Adapter};
use crate::catalog::{parse_indexes, CatalogRowParser, ColumnDescriptor, IndexDescriptor};
use crate::codec::GeometryCodec;
use crate::config::SpatialAdapterConfig;
use crate::connection::Connection;
use crate::error::{AdapterError, Result};
use crate::registry::SpatialTypeRegistry;
use crate::types::NativeTypeTable;
use crate::value::SqlValue;
use crate::visitor::{MySqlSpatialVisitor, SqlExpr, SqlVisitor, ValueQuoter};
use std::sync::Arc;

/// MySQL adapter with spatial column support.
#[derive(Debug)]
pub struct SpatialAdapter<C, B = Mysql2Adapter> {
    conn: C,
    base: B,
    registry: Arc<SpatialTypeRegistry>,
    codec: GeometryCodec,
    visitor: Option<Arc<dyn SqlVisitor>>,
    config: SpatialAdapterConfig,
}

impl<C: Connection> SpatialAdapter<C, Mysql2Adapter> {
    /// Wrap `conn` with the bundled generic MySQL adapter.
    pub fn mysql2(conn: C) -> Self {
        Self::new(conn, Mysql2Adapter::new())
    }
}

impl<C: Connection, B: BaseAdapter> SpatialAdapter<C, B> {
    /// Wrap `conn` and `base` with the default configuration.
    pub fn new(conn: C, base: B) -> Self {
        let registry = Arc::new(SpatialTypeRegistry::for_adapter(&base));
        Self::build(conn, base, registry, SpatialAdapterConfig::default())
    }

    /// Wrap `conn` and `base` with an explicit configuration.
    pub fn with_config(conn: C, base: B, config: SpatialAdapterConfig) -> Result<Self> {
        config.validate()?;
        let registry = Arc::new(SpatialTypeRegistry::for_adapter(&base));
        Ok(Self::build(conn, base, registry, config))
    }

    /// Wrap `conn` reusing a registry shared with other adapters (e.g. one
    /// per pooled connection).
    pub fn with_registry(
        conn: C,
        base: B,
        registry: Arc<SpatialTypeRegistry>,
        config: SpatialAdapterConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(conn, base, registry, config))
    }

    fn build(
        conn: C,
        base: B,
        registry: Arc<SpatialTypeRegistry>,
        config: SpatialAdapterConfig,
    ) -> Self {
        // Only replace a visitor the base adapter actually built.
        let visitor = base
            .visitor()
            .map(|_| Arc::new(MySqlSpatialVisitor) as Arc<dyn SqlVisitor>);
        Self {
            conn,
            base,
            registry,
            codec: GeometryCodec::new(config.literal.clone()),
            visitor,
            config,
        }
    }

    /// Identifier distinguishing this adapter from the base adapter.
    pub fn adapter_name(&self) -> &str {
        &self.config.adapter_name
    }

    /// Native type table, including `spatial -> geometry`.
    pub fn native_database_types(&self) -> &NativeTypeTable {
        self.registry.native_type_table()
    }

    pub fn registry(&self) -> &Arc<SpatialTypeRegistry> {
        &self.registry
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn codec(&self) -> &GeometryCodec {
        &self.codec
    }

    pub fn config(&self) -> &SpatialAdapterConfig {
        &self.config
    }

    pub fn connection(&mut self) -> &mut C {
        &mut self.conn
    }

    /// Release the underlying connection.
    pub fn into_connection(self) -> C {
        self.conn
    }

    /// The active SQL visitor, if any.
    pub fn visitor(&self) -> Option<&Arc<dyn SqlVisitor>> {
        self.visitor.as_ref()
    }

    /// Columns of `table`, in catalog order.
    pub fn columns(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let _span = tracing::debug_span!("spatial_columns", table).entered();

        let sql = format!("SHOW FULL FIELDS FROM {}", self.base.quote_table_name(table));
        let rows = self.conn.query(&sql).map_err(AdapterError::Connection)?;
        let columns = CatalogRowParser::new(&self.registry, &self.base).parse_columns(&rows)?;

        tracing::debug!(
            columns = columns.len(),
            spatial = columns.iter().filter(|c| c.is_spatial()).count(),
            "parsed columns"
        );
        Ok(columns)
    }

    /// Secondary indexes of `table` (primary key excluded).
    pub fn indexes(&mut self, table: &str) -> Result<Vec<IndexDescriptor>> {
        let _span = tracing::debug_span!("spatial_indexes", table).entered();

        let sql = format!("SHOW KEYS FROM {}", self.base.quote_table_name(table));
        let rows = self.conn.query(&sql).map_err(AdapterError::Connection)?;
        let indexes = parse_indexes(&rows)?;

        tracing::debug!(rows = rows.len(), indexes = indexes.len(), "parsed indexes");
        Ok(indexes)
    }

    /// Create an index on `columns` of `table`.
    ///
    /// Spatial indexes are created here; everything else goes through the
    /// base adapter.
    pub fn add_index(
        &mut self,
        table: &str,
        columns: &[&str],
        options: &IndexOptions,
    ) -> Result<()> {
        let _span =
            tracing::debug_span!("spatial_add_index", table, spatial = options.spatial).entered();

        if !options.spatial {
            return self.base.add_index(&mut self.conn, table, columns, options);
        }
        let sql = self.spatial_index_sql(table, columns, options)?;
        tracing::debug!(sql = %sql, "creating spatial index");
        self.conn.execute(&sql).map_err(AdapterError::Connection)?;
        Ok(())
    }

    /// DDL for a spatial index; names and columns are emitted unquoted.
    pub fn spatial_index_sql(
        &self,
        table: &str,
        columns: &[&str],
        options: &IndexOptions,
    ) -> Result<String> {
        if columns.is_empty() {
            return Err(AdapterError::invalid_index(format!(
                "no columns given for spatial index on {}",
                table
            )));
        }
        let name = match &options.name {
            Some(name) => name.clone(),
            None => self.base.index_name(table, columns),
        };
        Ok(format!(
            "CREATE SPATIAL INDEX {} ON {} ({})",
            name,
            table,
            columns.join(", ")
        ))
    }

    /// Quote a value, rendering geometries as WKB literals.
    pub fn quote_value(&self, value: &SqlValue) -> Result<String> {
        self.codec.encode(value, &self.base)
    }

    /// Compile `expr` with the active visitor.
    pub fn to_sql(&self, expr: &SqlExpr) -> Result<String> {
        let visitor = self
            .visitor
            .as_ref()
            .ok_or_else(|| AdapterError::MissingVisitor(self.config.adapter_name.clone()))?;
        visitor.compile(expr, self)
    }
}

impl<C: Connection, B: BaseAdapter> ValueQuoter for SpatialAdapter<C, B> {
    fn quote_value(&self, value: &SqlValue) -> Result<String> {
        SpatialAdapter::quote_value(self, value)
    }
}
