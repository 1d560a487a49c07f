//! Spatial type registry.
//!
//! Recognizes spatial column types and layers `spatial -> geometry` onto the
//! base adapter's native type table. Built once per adapter (or shared via
//! `Arc` across a pool) and read-only afterwards.

use crate::base::BaseAdapter;
use crate::types::{NativeType, NativeTypeTable, TypeMetadata};
use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical storage type every spatial column maps to.
pub const CANONICAL_SPATIAL_TYPE: &str = "geometry";

/// Native type table key for spatial columns.
pub const SPATIAL_NATIVE_KEY: &str = "spatial";

/// Case-insensitive type-name matcher mapping to the canonical spatial type.
#[derive(Debug)]
pub struct SpatialTypeMapping {
    pattern: Regex,
    /// Source name for aliases (`point` → `geometry`); `None` for the
    /// `geometry` class itself.
    alias: Option<&'static str>,
}

impl SpatialTypeMapping {
    fn new(name: &'static str, alias: bool) -> Self {
        Self {
            pattern: Regex::new(&format!("(?i){}", name)).expect("valid regex"),
            alias: alias.then_some(name),
        }
    }

    pub fn matches(&self, sql_type: &str) -> bool {
        self.pattern.is_match(sql_type)
    }

    pub fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    pub fn canonical(&self) -> &'static str {
        CANONICAL_SPATIAL_TYPE
    }
}

// `geometry` is registered with a limit; the rest alias onto it. All rules
// converge on the same type, so evaluation order is irrelevant.
static SPATIAL_MAPPINGS: Lazy<Vec<SpatialTypeMapping>> = Lazy::new(|| {
    vec![
        SpatialTypeMapping::new("geometry", false),
        SpatialTypeMapping::new("point", true),
        SpatialTypeMapping::new("linestring", true),
        SpatialTypeMapping::new("polygon", true),
    ]
});

/// Spatial-aware type registry.
#[derive(Debug, Clone)]
pub struct SpatialTypeRegistry {
    native_types: NativeTypeTable,
}

impl SpatialTypeRegistry {
    /// Build from the base adapter's native type table.
    pub fn new(base_native_types: NativeTypeTable) -> Self {
        let native_types = base_native_types.merge([(
            SPATIAL_NATIVE_KEY.to_string(),
            NativeType::new(CANONICAL_SPATIAL_TYPE),
        )]);
        Self { native_types }
    }

    /// Build from a base adapter.
    pub fn for_adapter(base: &dyn BaseAdapter) -> Self {
        Self::new(base.native_database_types())
    }

    /// Native type table: base entries plus `spatial -> geometry`.
    pub fn native_type_table(&self) -> &NativeTypeTable {
        &self.native_types
    }

    /// Registered spatial mappings.
    pub fn mappings(&self) -> &'static [SpatialTypeMapping] {
        &SPATIAL_MAPPINGS
    }

    /// Whether `sql_type` names a spatial type (substring match, any case).
    pub fn is_spatial(&self, sql_type: &str) -> bool {
        SPATIAL_MAPPINGS.iter().any(|m| m.matches(sql_type))
    }

    /// Canonical spatial type for `sql_type`, or `None` if it is not spatial.
    pub fn canonical_type(&self, sql_type: &str) -> Option<&'static str> {
        SPATIAL_MAPPINGS
            .iter()
            .find(|m| m.matches(sql_type))
            .map(SpatialTypeMapping::canonical)
    }

    /// Classify a catalog column type.
    ///
    /// Spatial types become [`TypeKind::Geometry`](crate::TypeKind::Geometry);
    /// anything else falls through to the base adapter's generic
    /// classification.
    pub fn classify(&self, sql_type: &str, extra: &str, base: &dyn BaseAdapter) -> TypeMetadata {
        if self.is_spatial(sql_type) {
            return TypeMetadata::spatial(sql_type, extra);
        }
        tracing::trace!(sql_type, "non-spatial type, using generic classification");
        base.fetch_type_metadata(sql_type, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Mysql2Adapter;
    use crate::types::TypeKind;
    use mysql2_spatial_geometry::GeometryType;

    fn registry() -> SpatialTypeRegistry {
        SpatialTypeRegistry::for_adapter(&Mysql2Adapter::new())
    }

    #[test]
    fn test_aliases_converge_on_geometry() {
        let registry = registry();
        for ty in ["geometry", "POINT", "LineString", "polygon NOT NULL", "multipolygon"] {
            assert_eq!(registry.canonical_type(ty), Some("geometry"), "{}", ty);
        }
        assert_eq!(registry.canonical_type("varchar(255)"), None);
    }

    #[test]
    fn test_classify_spatial() {
        let registry = registry();
        let base = Mysql2Adapter::new();
        let meta = registry.classify("polygon NOT NULL", "", &base);
        assert_eq!(meta.kind, TypeKind::Geometry);
        assert_eq!(meta.geometric_type, Some(GeometryType::Polygon));

        let generic = registry.classify("geometry", "", &base);
        assert_eq!(generic.kind, TypeKind::Geometry);
        assert_eq!(generic.geometric_type, None);
    }

    #[test]
    fn test_classify_falls_through() {
        let registry = registry();
        let base = Mysql2Adapter::new();
        let meta = registry.classify("varchar(64)", "", &base);
        assert_eq!(meta.kind, TypeKind::String);
        assert_eq!(meta.limit, Some(64));

        let unknown = registry.classify("vector(3)", "", &base);
        assert_eq!(unknown.kind, TypeKind::Other);
    }

    #[test]
    fn test_native_table_adds_spatial() {
        let registry = registry();
        let table = registry.native_type_table();
        assert_eq!(table.get("spatial").unwrap().name, "geometry");
        assert_eq!(table.get("string").unwrap().name, "varchar");
    }

    #[test]
    fn test_mappings_shape() {
        let registry = registry();
        let aliases: Vec<_> = registry.mappings().iter().filter_map(|m| m.alias()).collect();
        assert_eq!(aliases, vec!["point", "linestring", "polygon"]);
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpatialTypeRegistry>();
    }
}
