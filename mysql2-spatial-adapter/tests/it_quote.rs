//! Value quoting through the spatial adapter.

mod support;

use geo_types::{line_string, point, polygon, Geometry};
use mysql2_spatial_adapter::geometry::{
    decode_literal, encode_internal, ByteOrder, HexCase, LiteralConfig, SridGeometry,
};
use mysql2_spatial_adapter::{
    AdapterError, CastValue, Mysql2Adapter, ScalarValue, SpatialAdapter, SpatialAdapterConfig,
    SqlValue,
};
use pretty_assertions::assert_eq;
use support::MockConnection;

fn adapter() -> SpatialAdapter<MockConnection> {
    SpatialAdapter::mysql2(MockConnection::new())
}

#[test]
fn point_literal_is_wkb_with_srid() {
    let point = SridGeometry::new(Geometry::Point(point!(x: 1.0, y: 2.0)), 4326);
    let literal = adapter().quote_value(&SqlValue::from(point)).unwrap();
    assert_eq!(
        literal,
        "GeomFromWKB(0x0101000000000000000000F03F0000000000000040,4326)"
    );
}

#[test]
fn cast_wrapper_quotes_like_raw_geometry() {
    let adapter = adapter();
    let line = SridGeometry::new(
        Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 3.0, y: 4.0)]),
        3857,
    );

    let raw = adapter.quote_value(&SqlValue::from(line.clone())).unwrap();
    let wrapped = adapter
        .quote_value(&SqlValue::from(CastValue::new(line, "ignored")))
        .unwrap();
    assert_eq!(wrapped, raw);
}

#[test]
fn cast_of_non_geometry_quotes_cast_value() {
    let value = SqlValue::from(CastValue::new("12", 12i64));
    assert_eq!(adapter().quote_value(&value).unwrap(), "12");
}

#[test]
fn literal_round_trips_through_decoder() {
    let square = polygon![
        (x: 0.0, y: 0.0),
        (x: 10.0, y: 0.0),
        (x: 10.0, y: 10.0),
        (x: 0.0, y: 10.0),
        (x: 0.0, y: 0.0),
    ];
    let geom = SridGeometry::new(Geometry::Polygon(square), 4326);

    let literal = adapter().quote_value(&SqlValue::from(geom.clone())).unwrap();
    assert_eq!(decode_literal(&literal).unwrap(), geom);
}

#[test]
fn srid_zero_is_emitted() {
    let point = SridGeometry::from_wkt("POINT(1 2)", 0).unwrap();
    let literal = adapter().quote_value(&SqlValue::from(point)).unwrap();
    assert!(literal.ends_with(",0)"), "{}", literal);
}

#[test]
fn scalars_fall_through_to_base() {
    let adapter = adapter();
    let q = |v: SqlValue| adapter.quote_value(&v).unwrap();

    assert_eq!(q(SqlValue::from("O'Brien")), r"'O\'Brien'");
    assert_eq!(q(SqlValue::from(7i64)), "7");
    assert_eq!(q(SqlValue::from(None::<i64>)), "NULL");
    assert_eq!(q(SqlValue::from(true)), "TRUE");
}

#[test]
fn base_quoting_errors_propagate() {
    let err = adapter()
        .quote_value(&SqlValue::Scalar(ScalarValue::Float(f64::INFINITY)))
        .unwrap_err();
    assert!(matches!(err, AdapterError::UnsupportedValue(_)));
}

#[test]
fn configured_literal_format() {
    let literal = LiteralConfig::default()
        .with_constructor("ST_GeomFromWKB")
        .with_byte_order(ByteOrder::BigEndian)
        .with_hex_case(HexCase::Lower);
    let config = SpatialAdapterConfig::default().with_literal(literal);
    let adapter =
        SpatialAdapter::with_config(MockConnection::new(), Mysql2Adapter::new(), config).unwrap();

    let point = SridGeometry::new(Geometry::Point(point!(x: 1.0, y: 2.0)), 4326);
    assert_eq!(
        adapter.quote_value(&SqlValue::from(point)).unwrap(),
        "ST_GeomFromWKB(0x00000000013ff00000000000004000000000000000,4326)"
    );
}

#[test]
fn column_value_decodes_server_format() {
    let geom = SridGeometry::from_wkt("POINT(-71.06 42.36)", 4326).unwrap();
    let bytes = encode_internal(&geom).unwrap();

    let decoded = adapter().codec().decode_column_value(&bytes).unwrap();
    assert_eq!(decoded, geom);
    assert_eq!(decoded.to_string(), "SRID=4326;POINT(-71.06 42.36)");
}
