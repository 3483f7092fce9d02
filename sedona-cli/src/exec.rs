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

//! Execution functions

use sedona_ewkb::{AnyGeometry, DecodeOptions, Endianness, SedonaEwkbError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Ewkb(#[from] SedonaEwkbError),
    #[error("Invalid geometry JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options controlling how hex input is decoded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeSettings {
    pub options: DecodeOptions,
    /// Run ring validation on every decoded polygon
    pub check_rings: bool,
}

/// Decode one hex EWKB value and render it as a line of JSON
pub fn decode_one(input: &str, settings: &DecodeSettings) -> Result<String, CliError> {
    let geom = AnyGeometry::from_hex(input, &settings.options)?;
    if settings.check_rings {
        if let AnyGeometry::PolygonS(polygon) = &geom {
            polygon.check_rings()?;
        }
    }

    log::debug!("Decoded {input} as type {:#010x}", geom.type_code());
    Ok(serde_json::to_string(&geom)?)
}

/// Encode one JSON geometry as upper-case hex EWKB
pub fn encode_one(input: &str, order: Endianness) -> Result<String, CliError> {
    let geom: AnyGeometry = serde_json::from_str(input)?;
    Ok(geom.to_hex(order)?)
}

/// Decode every input, stopping at the first failure
pub fn exec_decode(inputs: &[String], settings: &DecodeSettings) -> Result<Vec<String>, CliError> {
    inputs
        .iter()
        .map(|input| decode_one(input, settings))
        .collect()
}

/// Encode every input, stopping at the first failure
pub fn exec_encode(inputs: &[String], order: Endianness) -> Result<Vec<String>, CliError> {
    inputs
        .iter()
        .map(|input| encode_one(input, order))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const POINT_4326: &str = "0101000020E61000006FBBD05CA7AF404079E57ADB4C874140";

    #[test]
    fn decode_point() {
        let out = decode_one(POINT_4326, &DecodeSettings::default()).unwrap();
        assert_eq!(
            out,
            r#"{"type":"PointS","srid":4326,"x":33.372295,"y":35.057033}"#
        );
    }

    #[rstest]
    fn encode_decode(#[values(Endianness::LittleEndian, Endianness::BigEndian)] order: Endianness) {
        let json = r#"{"type":"PolygonS","srid":4326,"lines":[{"points":[{"x":0.0,"y":0.0},{"x":1.0,"y":0.0},{"x":0.0,"y":1.0},{"x":0.0,"y":0.0}]}]}"#;
        let encoded = exec_encode(&[json.to_string()], order).unwrap();
        assert_eq!(encoded.len(), 1);

        let decoded = exec_decode(&encoded, &DecodeSettings::default()).unwrap();
        assert_eq!(decoded, vec![json.to_string()]);
    }

    #[test]
    fn check_rings() {
        let open = r#"{"type":"PolygonS","srid":4326,"lines":[{"points":[{"x":0.0,"y":0.0},{"x":1.0,"y":1.0}]}]}"#;
        let hex_text = encode_one(open, Endianness::LittleEndian).unwrap();

        assert!(decode_one(&hex_text, &DecodeSettings::default()).is_ok());

        let settings = DecodeSettings {
            check_rings: true,
            ..Default::default()
        };
        let err = decode_one(&hex_text, &settings).unwrap_err();
        assert!(matches!(err, CliError::Ewkb(SedonaEwkbError::Invalid(_))));
    }

    #[test]
    fn max_elements() {
        let settings = DecodeSettings {
            options: DecodeOptions::with_max_elements(0),
            check_rings: false,
        };
        let polygon = r#"{"type":"PolygonS","srid":4326,"lines":[]}"#;
        let hex_text = encode_one(polygon, Endianness::LittleEndian).unwrap();
        assert!(decode_one(&hex_text, &settings).is_ok());

        let line = r#"{"type":"Line","points":[{"x":0.0,"y":0.0}]}"#;
        let hex_text = encode_one(line, Endianness::LittleEndian).unwrap();
        let err = decode_one(&hex_text, &settings).unwrap_err();
        assert!(matches!(
            err,
            CliError::Ewkb(SedonaEwkbError::TooManyElements { count: 1, max: 0 })
        ));
    }

    #[test]
    fn stops_at_first_error() {
        let inputs = vec![
            POINT_4326.to_string(),
            "not hex".to_string(),
            POINT_4326.to_string(),
        ];
        let err = exec_decode(&inputs, &DecodeSettings::default()).unwrap_err();
        assert!(matches!(err, CliError::Ewkb(SedonaEwkbError::Hex(_))));

        let err = encode_one("{\"type\":\"Circle\"}", Endianness::LittleEndian).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }
}
