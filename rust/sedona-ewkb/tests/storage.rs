// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Round trips through the hex storage representation used by PostGIS columns.

use rstest::rstest;
use sedona_ewkb::*;

const POINT_4326: &str = "0101000020E61000006FBBD05CA7AF404079E57ADB4C874140";

const POLYGON_4326: &str = "0103000020E610000001000000040000009A99999999C9524048E17A14AE873D4000000000004053400000000000003D4066666666666653400000000000803D409A99999999C9524048E17A14AE873D40";

fn sample_polygon() -> PolygonS {
    PolygonS::new(
        4326,
        vec![Line::new(vec![
            Point::new(75.15, 29.53),
            Point::new(77.0, 29.0),
            Point::new(77.6, 29.5),
            Point::new(75.15, 29.53),
        ])],
    )
}

#[rstest]
#[case::null(SourceValue::Null, PointS::default())]
#[case::little_endian(
    SourceValue::Bytes(POINT_4326.as_bytes()),
    PointS::new(4326, 33.372295, 35.057033)
)]
#[case::big_endian(
    SourceValue::Bytes(b"0020000001000010E64040AFA75CD0BB6F4041874CDB7AE579"),
    PointS::new(4326, 33.372295, 35.057033)
)]
fn point_s_scan(#[case] value: SourceValue<'static>, #[case] expected: PointS) {
    let mut point = PointS::default();
    point.scan(value).unwrap();
    assert_eq!(point.srid, expected.srid);
    assert_eq!(point.x.to_bits(), expected.x.to_bits());
    assert_eq!(point.y.to_bits(), expected.y.to_bits());
}

#[rstest]
#[case::wrong_type(SourceValue::Bytes(b"0102000020E61000006FBBD05CA7AF404079E57ADB4C874140"))]
#[case::wrong_byte_order(SourceValue::Bytes(b"0201000020E61000006FBBD05CA7AF404079E57ADB4C874140"))]
#[case::integer(SourceValue::Int(1))]
#[case::truncated(SourceValue::Bytes(b"0101000020E61000006FBBD05CA7AF4040"))]
fn point_s_scan_error(#[case] value: SourceValue<'static>) {
    let mut point = PointS::default();
    let err = point.scan(value).unwrap_err();

    match value {
        SourceValue::Int(_) => {
            assert!(matches!(err, SedonaEwkbError::UnsupportedSourceDataType(_)))
        }
        SourceValue::Bytes(text) if text.starts_with(b"02") => {
            assert!(matches!(err, SedonaEwkbError::UnsupportedByteOrder(0x02)))
        }
        SourceValue::Bytes(text) if text.starts_with(b"0102") => {
            assert!(matches!(
                err,
                SedonaEwkbError::UnexpectedGeometryType {
                    expected: 0x20000001,
                    found: 0x20000002
                }
            ))
        }
        _ => assert!(matches!(err, SedonaEwkbError::IO(_))),
    }

    assert_eq!(point, PointS::default());
}

#[test]
fn point_hex_into_polygon() {
    let mut polygon = PolygonS::default();
    let err = polygon.scan(POINT_4326.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        SedonaEwkbError::UnexpectedGeometryType {
            expected: 0x20000003,
            found: 0x20000001
        }
    ));
    assert_eq!(polygon, PolygonS::default());
}

#[test]
fn polygon_s_to_storage() {
    assert_eq!(sample_polygon().to_storage().unwrap(), POLYGON_4326);
}

#[test]
fn polygon_s_scan() {
    let text = "0103000020E61000000100000004000000C38366D7BD413E40BADBF5D214FD4D40E7FBA9F1D2413E40E2067C7E18FD4D4052B81E85EB413E40D237691A14FD4D40C38366D7BD413E40BADBF5D214FD4D40";

    let mut polygon = PolygonS::default();
    polygon.scan(text.as_bytes()).unwrap();

    assert_eq!(polygon.srid, 4326);
    assert_eq!(polygon.lines.len(), 1);
    assert_eq!(
        polygon.lines[0].points,
        vec![
            Point::new(30.256803, 59.977198),
            Point::new(30.257125, 59.97731),
            Point::new(30.2575, 59.977176),
            Point::new(30.256803, 59.977198),
        ]
    );
    assert!(polygon.check_rings().is_ok());
}

#[test]
fn polygon_s_scan_null() {
    let mut polygon = sample_polygon();
    polygon.scan(SourceValue::Null).unwrap();
    assert_eq!(polygon, sample_polygon());

    let loaded = PolygonS::from_storage(SourceValue::Null, &DecodeOptions::default()).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn polygon_s_ring_bound() {
    let options = DecodeOptions::with_max_elements(3);
    let err = PolygonS::from_storage(SourceValue::Bytes(POLYGON_4326.as_bytes()), &options)
        .unwrap_err();
    assert!(matches!(
        err,
        SedonaEwkbError::TooManyElements { count: 4, max: 3 }
    ));

    let loaded = PolygonS::from_storage(
        SourceValue::Bytes(POLYGON_4326.as_bytes()),
        &DecodeOptions::unbounded(),
    )
    .unwrap();
    assert_eq!(loaded, Some(sample_polygon()));
}

#[rstest]
fn storage_roundtrip(
    #[values(
        PolygonS::default(),
        sample_polygon(),
        PolygonS::new(-1, vec![Line::default(), Line::new(vec![Point::new(f64::MIN, f64::MAX)])])
    )]
    polygon: PolygonS,
) {
    let text = polygon.to_storage().unwrap();
    assert!(text.starts_with("0103000020"));
    let loaded = PolygonS::from_storage(SourceValue::Bytes(text.as_bytes()), &Default::default())
        .unwrap();
    assert_eq!(loaded, Some(polygon));
}

#[test]
fn point_s_storage_roundtrip() {
    for point in [
        PointS::default(),
        PointS::new(4326, 33.372295, 35.057033),
        PointS::new(i32::MIN, -0.0, f64::EPSILON),
    ] {
        let text = point.to_storage().unwrap();
        assert_eq!(text.len(), 2 * (1 + 4 + 20));
        let loaded = PointS::from_storage(SourceValue::Bytes(text.as_bytes()), &Default::default())
            .unwrap()
            .unwrap();
        assert_eq!(loaded.srid, point.srid);
        assert_eq!(loaded.x.to_bits(), point.x.to_bits());
        assert_eq!(loaded.y.to_bits(), point.y.to_bits());
    }
}
