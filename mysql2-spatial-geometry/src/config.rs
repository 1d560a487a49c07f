//! Literal encoding configuration.
//!
//! Controls how a geometry is rendered into a SQL value expression.

use serde::{Deserialize, Serialize};

/// WKB byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// NDR, WKB byte-order marker `0x01`. MySQL stores this form.
    #[default]
    LittleEndian,
    /// XDR, WKB byte-order marker `0x00`.
    BigEndian,
}

impl ByteOrder {
    pub(crate) fn to_wkb(self) -> wkb::Endianness {
        match self {
            ByteOrder::LittleEndian => wkb::Endianness::LittleEndian,
            ByteOrder::BigEndian => wkb::Endianness::BigEndian,
        }
    }
}

/// Case of the hex digits in a `0x...` literal.
///
/// MySQL hex literals are case-insensitive; the choice only matters for
/// golden-value comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexCase {
    #[default]
    Upper,
    Lower,
}

/// Options for rendering a geometry value literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteralConfig {
    /// SQL function wrapping the WKB payload.
    /// Default: `GeomFromWKB` (MySQL 8 only accepts `ST_GeomFromWKB`)
    pub constructor: String,

    /// Byte order of the WKB payload.
    /// Default: little-endian
    pub byte_order: ByteOrder,

    /// Hex digit case.
    /// Default: upper
    pub hex_case: HexCase,
}

impl Default for LiteralConfig {
    fn default() -> Self {
        Self {
            constructor: Self::DEFAULT_CONSTRUCTOR.to_string(),
            byte_order: ByteOrder::LittleEndian,
            hex_case: HexCase::Upper,
        }
    }
}

impl LiteralConfig {
    /// Function name used when none is configured.
    pub const DEFAULT_CONSTRUCTOR: &'static str = "GeomFromWKB";

    /// Set the constructor function name.
    pub fn with_constructor(mut self, constructor: impl Into<String>) -> Self {
        self.constructor = constructor.into();
        self
    }

    /// Set the WKB byte order.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Set the hex digit case.
    pub fn with_hex_case(mut self, hex_case: HexCase) -> Self {
        self.hex_case = hex_case;
        self
    }
}
