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
//! Reader and writer for SRID-tagged Well-Known Binary (EWKB) geometries.
//!
//! This crate encodes [PointS] and [PolygonS] values to the hex EWKB text a
//! PostGIS geometry column expects and decodes that text back into typed
//! values. Every persistable value is framed by an envelope: a byte order
//! marker followed by a type code in that byte order, followed by the
//! shape's payload in the same byte order.

pub mod endian;
pub mod envelope;
pub mod error;
pub mod geometry;
pub mod line;
pub mod options;
pub mod point;
pub mod polygon;
pub mod storage;

pub use endian::Endianness;
pub use envelope::{from_ewkb, read_envelope, read_header, to_ewkb, write_envelope};
pub use error::SedonaEwkbError;
pub use geometry::{AnyGeometry, Geometry};
pub use line::Line;
pub use options::DecodeOptions;
pub use point::{Point, PointS};
pub use polygon::PolygonS;
pub use storage::{Persistable, SourceValue};
