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
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::endian::Endianness;
use crate::envelope::read_header;
use crate::error::SedonaEwkbError;
use crate::line::Line;
use crate::options::DecodeOptions;
use crate::point::{Point, PointS};
use crate::polygon::PolygonS;

/// WKB type code for a POINT
pub const POINT_TYPE: u32 = 1;

/// WKB type code for a LINESTRING
pub const LINESTRING_TYPE: u32 = 2;

/// WKB type code for a POLYGON
pub const POLYGON_TYPE: u32 = 3;

/// EWKB flag set in the type code when an SRID precedes the payload
pub const SRID_FLAG: u32 = 0x20000000;

/// A shape with a fixed WKB type code and a payload codec
///
/// `read` and `write` handle only the payload that follows the envelope
/// header. The byte order has already been resolved by the caller and
/// applies to every field of the payload.
pub trait Geometry: Sized {
    /// The type code written to (and expected in) the envelope header
    const TYPE_CODE: u32;

    fn type_code(&self) -> u32 {
        Self::TYPE_CODE
    }

    /// Decode the payload of this shape
    fn read<R: Read>(
        reader: &mut R,
        order: Endianness,
        options: &DecodeOptions,
    ) -> Result<Self, SedonaEwkbError>;

    /// Encode the payload of this shape
    fn write<W: Write>(&self, writer: &mut W, order: Endianness) -> Result<(), SedonaEwkbError>;
}

/// Any of the supported shapes
///
/// Used where the shape is only known once the type code has been read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnyGeometry {
    Point(Point),
    PointS(PointS),
    Line(Line),
    PolygonS(PolygonS),
}

impl AnyGeometry {
    pub fn type_code(&self) -> u32 {
        match self {
            Self::Point(geom) => geom.type_code(),
            Self::PointS(geom) => geom.type_code(),
            Self::Line(geom) => geom.type_code(),
            Self::PolygonS(geom) => geom.type_code(),
        }
    }

    /// Write the envelope header and payload of the wrapped shape
    pub fn write<W: Write>(&self, writer: &mut W, order: Endianness) -> Result<(), SedonaEwkbError> {
        writer.write_all(&[order.marker()])?;
        order.write_u32(writer, self.type_code())?;
        match self {
            Self::Point(geom) => geom.write(writer, order),
            Self::PointS(geom) => geom.write(writer, order),
            Self::Line(geom) => geom.write(writer, order),
            Self::PolygonS(geom) => geom.write(writer, order),
        }
    }

    /// Read an envelope and decode whichever shape its type code names
    pub fn read_envelope<R: Read>(
        reader: &mut R,
        options: &DecodeOptions,
    ) -> Result<Self, SedonaEwkbError> {
        let (order, type_code) = read_header(reader)?;
        match type_code {
            Point::TYPE_CODE => Ok(Self::Point(Point::read(reader, order, options)?)),
            PointS::TYPE_CODE => Ok(Self::PointS(PointS::read(reader, order, options)?)),
            Line::TYPE_CODE => Ok(Self::Line(Line::read(reader, order, options)?)),
            PolygonS::TYPE_CODE => Ok(Self::PolygonS(PolygonS::read(reader, order, options)?)),
            other => {
                log::debug!("Unsupported WKB geometry type code {other:#010x}");
                Err(SedonaEwkbError::UnsupportedGeometryType(other))
            }
        }
    }

    /// Upper-case hex text of the envelope and payload
    pub fn to_hex(&self, order: Endianness) -> Result<String, SedonaEwkbError> {
        let mut buf = Vec::new();
        self.write(&mut buf, order)?;
        Ok(hex::encode_upper(buf))
    }

    /// Decode hex text (either case) into whichever shape it contains
    pub fn from_hex(text: &str, options: &DecodeOptions) -> Result<Self, SedonaEwkbError> {
        let raw = hex::decode(text.trim())?;
        Self::read_envelope(&mut raw.as_slice(), options)
    }
}

impl From<Point> for AnyGeometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<PointS> for AnyGeometry {
    fn from(value: PointS) -> Self {
        Self::PointS(value)
    }
}

impl From<Line> for AnyGeometry {
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

impl From<PolygonS> for AnyGeometry {
    fn from(value: PolygonS) -> Self {
        Self::PolygonS(value)
    }
}
