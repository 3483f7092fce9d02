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
//! Adapter between the codec and a database driver's column values
//!
//! Spatial columns travel as hex-encoded EWKB text. A driver calls
//! [Persistable::to_storage] when binding a parameter and
//! [Persistable::from_storage] (or [Persistable::scan]) when reading a row.

use crate::endian::Endianness;
use crate::envelope::{from_ewkb, to_ewkb};
use crate::error::SedonaEwkbError;
use crate::geometry::Geometry;
use crate::options::DecodeOptions;
use crate::point::PointS;
use crate::polygon::PolygonS;

/// A column value as handed over by a database driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceValue<'a> {
    Null,
    Bytes(&'a [u8]),
    Text(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl SourceValue<'_> {
    /// Short name of the value kind used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }
}

impl<'a> From<&'a [u8]> for SourceValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<Option<&'a [u8]>> for SourceValue<'a> {
    fn from(value: Option<&'a [u8]>) -> Self {
        match value {
            Some(bytes) => Self::Bytes(bytes),
            None => Self::Null,
        }
    }
}

impl<'a> From<&'a str> for SourceValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SourceValue<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for SourceValue<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for SourceValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A geometry that can be stored in and loaded from a spatial column
pub trait Persistable: Geometry + Default {
    /// Encode as upper-case hex of little-endian EWKB
    fn to_storage(&self) -> Result<String, SedonaEwkbError> {
        let buf = to_ewkb(self, Endianness::LittleEndian)?;
        Ok(hex::encode_upper(buf))
    }

    /// Decode a column value
    ///
    /// Returns `Ok(None)` for a null value. Only byte values holding hex
    /// EWKB text are accepted; every other kind of value is an error.
    fn from_storage(
        src: SourceValue<'_>,
        options: &DecodeOptions,
    ) -> Result<Option<Self>, SedonaEwkbError> {
        match src {
            SourceValue::Null => Ok(None),
            SourceValue::Bytes(text) => {
                let raw = hex::decode(text)?;
                from_ewkb(&raw, options).map(Some)
            }
            other => Err(SedonaEwkbError::UnsupportedSourceDataType(other.kind())),
        }
    }

    /// Decode a column value into `self` using the default [DecodeOptions]
    fn scan<'a>(&mut self, src: impl Into<SourceValue<'a>>) -> Result<(), SedonaEwkbError> {
        self.scan_with_options(src, &DecodeOptions::default())
    }

    /// Decode a column value into `self`
    ///
    /// `self` is only replaced when a value is successfully decoded. A null
    /// value or an error leaves it as it was.
    fn scan_with_options<'a>(
        &mut self,
        src: impl Into<SourceValue<'a>>,
        options: &DecodeOptions,
    ) -> Result<(), SedonaEwkbError> {
        if let Some(value) = Self::from_storage(src.into(), options)? {
            *self = value;
        }
        Ok(())
    }
}

impl Persistable for PointS {}

impl Persistable for PolygonS {}
