//! Error types for adapter operations.

use mysql2_spatial_geometry::GeometryError;
use thiserror::Error;

/// Boxed error produced by a [`Connection`](crate::Connection).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from adapter operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Catalog row is missing an expected field or has the wrong shape
    #[error("Catalog format error: {0}")]
    CatalogFormat(String),

    /// Error raised by the underlying connection, passed through untouched
    #[error(transparent)]
    Connection(BoxError),

    /// Geometry encoding/decoding error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Value the base quoting routine cannot render
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// Index definition cannot be turned into DDL
    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    /// SQL generation requested but the adapter has no visitor
    #[error("Adapter {0} has no SQL visitor")]
    MissingVisitor(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration JSON error
    #[error("Configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdapterError {
    pub fn catalog_format(msg: impl Into<String>) -> Self {
        Self::CatalogFormat(msg.into())
    }

    pub fn unsupported_value(msg: impl Into<String>) -> Self {
        Self::UnsupportedValue(msg.into())
    }

    pub fn invalid_index(msg: impl Into<String>) -> Self {
        Self::InvalidIndex(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Borrow the connection's original error as its concrete type.
    ///
    /// Returns `None` for non-connection errors or a different error type.
    pub fn connection_error<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Connection(err) => err.downcast_ref::<E>(),
            _ => None,
        }
    }
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("server has gone away")]
    struct GoneAway;

    #[test]
    fn test_connection_error_passes_through() {
        let err = AdapterError::Connection(Box::new(GoneAway));
        assert_eq!(err.to_string(), "server has gone away");
        assert!(err.connection_error::<GoneAway>().is_some());
        assert!(err.connection_error::<std::io::Error>().is_none());
    }

    #[test]
    fn test_catalog_format_message() {
        let err = AdapterError::catalog_format("row 0: missing field `Type`");
        assert_eq!(
            err.to_string(),
            "Catalog format error: row 0: missing field `Type`"
        );
    }
}
