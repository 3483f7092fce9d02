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
use crate::geometry::{Geometry, LINESTRING_TYPE};
use crate::options::{sequence_with_capacity, DecodeOptions};
use crate::point::Point;

/// An ordered sequence of points
///
/// Used as a polygon ring. Order is significant (it determines winding) and
/// closure is not enforced; see [Line::is_closed].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    pub points: Vec<Point>,
}

impl Line {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns true if the line is non-empty and ends where it starts
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

impl From<Vec<Point>> for Line {
    fn from(value: Vec<Point>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Point> for Line {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Geometry for Line {
    const TYPE_CODE: u32 = LINESTRING_TYPE;

    fn read<R: Read>(
        reader: &mut R,
        order: Endianness,
        options: &DecodeOptions,
    ) -> Result<Self, SedonaEwkbError> {
        let count = order.read_i32(reader)?;
        if count < 0 {
            log::debug!("Rejecting negative WKB point count {count}");
            return Err(SedonaEwkbError::InvalidElementCount(count.into()));
        }
        let count = options.check_count(count as u64)?;

        let mut points = sequence_with_capacity(count);
        for _ in 0..count {
            points.push(Point::read(reader, order, options)?);
        }

        Ok(Self { points })
    }

    fn write<W: Write>(&self, writer: &mut W, order: Endianness) -> Result<(), SedonaEwkbError> {
        let count: i32 = self.points.len().try_into().map_err(|_| {
            SedonaEwkbError::Invalid(format!(
                "Line contains too many points for WKB format: {}",
                self.points.len()
            ))
        })?;

        order.write_i32(writer, count)?;
        for point in &self.points {
            point.write(writer, order)?;
        }

        Ok(())
    }
}
