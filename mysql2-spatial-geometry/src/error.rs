//! Error types for geometry encoding and decoding.

use thiserror::Error;

/// Geometry codec errors.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// WKT parsing error.
    #[error("WKT parse error: {0}")]
    WktParse(String),

    /// WKB read/write error reported by the `wkb` crate.
    #[error("WKB error: {0}")]
    Wkb(String),

    /// Text is not a recognizable geometry literal.
    #[error("Invalid geometry literal: {0}")]
    InvalidLiteral(String),

    /// Hex payload could not be decoded.
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Byte layout error (truncated or corrupt internal value).
    #[error("Format error: {0}")]
    FormatError(String),

    /// The geometry has no coordinates to convert (e.g. `POINT EMPTY`).
    #[error("Empty geometry cannot be converted")]
    EmptyGeometry,
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
