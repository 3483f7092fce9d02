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
use crate::geometry::{Geometry, POLYGON_TYPE, SRID_FLAG};
use crate::line::Line;
use crate::options::{sequence_with_capacity, DecodeOptions};

/// Minimum number of points in a valid closed ring
pub const MIN_RING_POINTS: usize = 4;

/// A polygon with a spatial reference identifier
///
/// The first line is the exterior ring and any following lines are holes.
/// Rings are written exactly as given: closure and orientation are left to
/// the caller, and [PolygonS::check_rings] is available as a separate step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonS {
    pub srid: i32,
    pub lines: Vec<Line>,
}

impl PolygonS {
    pub fn new(srid: i32, lines: Vec<Line>) -> Self {
        Self { srid, lines }
    }

    /// The exterior ring, or None for an empty polygon
    pub fn exterior(&self) -> Option<&Line> {
        self.lines.first()
    }

    /// The interior rings (holes)
    pub fn interiors(&self) -> &[Line] {
        self.lines.get(1..).unwrap_or_default()
    }

    /// Check that every ring is closed and has at least [MIN_RING_POINTS] points
    ///
    /// Never called by the codec itself.
    pub fn check_rings(&self) -> Result<(), SedonaEwkbError> {
        for (i, ring) in self.lines.iter().enumerate() {
            if ring.points.len() < MIN_RING_POINTS {
                return Err(SedonaEwkbError::Invalid(format!(
                    "Ring {i} has {} points but at least {MIN_RING_POINTS} are required",
                    ring.points.len()
                )));
            }

            if !ring.is_closed() {
                return Err(SedonaEwkbError::Invalid(format!("Ring {i} is not closed")));
            }
        }

        Ok(())
    }
}

impl Geometry for PolygonS {
    const TYPE_CODE: u32 = POLYGON_TYPE | SRID_FLAG;

    fn read<R: Read>(
        reader: &mut R,
        order: Endianness,
        options: &DecodeOptions,
    ) -> Result<Self, SedonaEwkbError> {
        let srid = order.read_i32(reader)?;
        let num_rings = order.read_u32(reader)?;
        let num_rings = options.check_count(num_rings.into())?;

        let mut lines = sequence_with_capacity(num_rings);
        for _ in 0..num_rings {
            lines.push(Line::read(reader, order, options)?);
        }

        Ok(Self { srid, lines })
    }

    fn write<W: Write>(&self, writer: &mut W, order: Endianness) -> Result<(), SedonaEwkbError> {
        let num_rings: u32 = self.lines.len().try_into().map_err(|_| {
            SedonaEwkbError::Invalid(format!(
                "Polygon contains too many rings for WKB format: {}",
                self.lines.len()
            ))
        })?;

        order.write_i32(writer, self.srid)?;
        order.write_u32(writer, num_rings)?;
        for line in &self.lines {
            line.write(writer, order)?;
        }

        Ok(())
    }
}
