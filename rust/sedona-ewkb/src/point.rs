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
use crate::error::SedonaEwkbError;
use crate::geometry::{Geometry, POINT_TYPE, SRID_FLAG};
use crate::options::DecodeOptions;

/// A raw XY coordinate pair
///
/// Encodes as a fixed 16 byte payload and is embedded in [Line] rings.
///
/// [Line]: crate::line::Line
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Attach a spatial reference identifier
    pub fn with_srid(self, srid: i32) -> PointS {
        PointS::new(srid, self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Geometry for Point {
    const TYPE_CODE: u32 = POINT_TYPE;

    fn read<R: Read>(
        reader: &mut R,
        order: Endianness,
        _options: &DecodeOptions,
    ) -> Result<Self, SedonaEwkbError> {
        let x = order.read_f64(reader)?;
        let y = order.read_f64(reader)?;
        Ok(Self { x, y })
    }

    fn write<W: Write>(&self, writer: &mut W, order: Endianness) -> Result<(), SedonaEwkbError> {
        order.write_f64(writer, self.x)?;
        order.write_f64(writer, self.y)
    }
}

/// A point with a spatial reference identifier
///
/// The SRID precedes the coordinates on the wire and is not interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointS {
    pub srid: i32,
    pub x: f64,
    pub y: f64,
}

impl PointS {
    pub fn new(srid: i32, x: f64, y: f64) -> Self {
        Self { srid, x, y }
    }

    /// The coordinates without the SRID
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Geometry for PointS {
    const TYPE_CODE: u32 = POINT_TYPE | SRID_FLAG;

    fn read<R: Read>(
        reader: &mut R,
        order: Endianness,
        options: &DecodeOptions,
    ) -> Result<Self, SedonaEwkbError> {
        let srid = order.read_i32(reader)?;
        let point = Point::read(reader, order, options)?;
        Ok(point.with_srid(srid))
    }

    fn write<W: Write>(&self, writer: &mut W, order: Endianness) -> Result<(), SedonaEwkbError> {
        order.write_i32(writer, self.srid)?;
        self.point().write(writer, order)
    }
}
