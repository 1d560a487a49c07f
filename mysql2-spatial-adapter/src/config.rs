//! Adapter configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! {
//!   "adapter_name": "Mysql2Spatial",
//!   "literal": {
//!     "constructor": "ST_GeomFromWKB",
//!     "byte_order": "little_endian",
//!     "hex_case": "upper"
//!   }
//! }
//! ```

use crate::base::Mysql2Adapter;
use crate::error::{AdapterError, Result};
use mysql2_spatial_geometry::LiteralConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Adapter-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialAdapterConfig {
    /// Identifier reported by `adapter_name()`.
    pub adapter_name: String,

    /// Geometry literal rendering.
    pub literal: LiteralConfig,
}

impl Default for SpatialAdapterConfig {
    fn default() -> Self {
        Self {
            adapter_name: Self::DEFAULT_ADAPTER_NAME.to_string(),
            literal: LiteralConfig::default(),
        }
    }
}

impl SpatialAdapterConfig {
    pub const DEFAULT_ADAPTER_NAME: &'static str = "Mysql2Spatial";

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Set the literal configuration.
    pub fn with_literal(mut self, literal: LiteralConfig) -> Self {
        self.literal = literal;
        self
    }

    /// Reject values that would produce broken SQL or an adapter name that
    /// does not distinguish this adapter from the base one.
    pub fn validate(&self) -> Result<()> {
        if self.adapter_name.trim().is_empty() {
            return Err(AdapterError::config("adapter_name must not be empty"));
        }
        if self
            .adapter_name
            .trim()
            .eq_ignore_ascii_case(Mysql2Adapter::ADAPTER_NAME)
        {
            return Err(AdapterError::config(format!(
                "adapter_name must differ from the base adapter's '{}'",
                Mysql2Adapter::ADAPTER_NAME
            )));
        }
        let ctor = &self.literal.constructor;
        let valid_ident = ctor
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && ctor.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_ident {
            return Err(AdapterError::config(format!(
                "literal.constructor '{}' is not a SQL function name",
                ctor
            )));
        }
        Ok(())
    }
}
