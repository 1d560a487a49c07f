//! Geometry values and wire formats for the MySQL spatial adapter.
//!
//! This crate owns everything that touches geometry bytes:
//!
//! - **SRID-tagged geometry values** built on `geo-types`
//! - **WKB encoding/decoding** via the `wkb` crate (little- or big-endian)
//! - **SQL literals** of the form `GeomFromWKB(0x<HEX>,<SRID>)`, both directions
//! - **MySQL internal storage format** (4-byte little-endian SRID + WKB), as
//!   returned when selecting a geometry column without a conversion function
//!
//! # Architecture
//!
//! ```text
//!  SridGeometry ──encode_wkb──► WKB bytes ──hex──► GeomFromWKB(0x..,srid)
//!       ▲                           │                        │
//!       │                           ▼                        │
//!       └──────decode_wkb──── [srid][WKB] (internal) ◄───────┘ decode_literal
//! ```
//!
//! # Modules
//!
//! - [`config`]: literal encoding options (constructor name, byte order, hex case)
//! - [`geometry`]: geometry type discriminator, `SridGeometry`, WKT parsing
//! - [`binary`]: WKB and MySQL internal format encode/decode
//! - [`literal`]: SQL literal encode/decode
//! - [`error`]: Error types

pub mod binary;
pub mod config;
pub mod error;
pub mod geometry;
pub mod literal;

// Re-export key types
pub use binary::{decode_internal, decode_wkb, encode_internal, encode_wkb, to_wkb_geometry};
pub use config::{ByteOrder, HexCase, LiteralConfig};
pub use error::{GeometryError, Result};
pub use geometry::{parse_wkt, GeometryType, SridGeometry};
pub use literal::{decode_literal, encode_literal};
