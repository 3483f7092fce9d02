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

use byteorder::{ReadBytesExt, WriteBytesExt, BE, LE};
use serde::{Deserialize, Serialize};

use crate::error::SedonaEwkbError;

/// Byte order marker for big-endian (XDR) WKB
pub const WKB_XDR: u8 = 0x00;

/// Byte order marker for little-endian (NDR) WKB
pub const WKB_NDR: u8 = 0x01;

/// Byte order of a WKB buffer
///
/// Declared once by the leading marker byte of every envelope and applied to
/// every multi-byte field that follows it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl Endianness {
    /// The marker byte written at the start of an envelope
    pub fn marker(&self) -> u8 {
        match self {
            Self::BigEndian => WKB_XDR,
            Self::LittleEndian => WKB_NDR,
        }
    }

    /// Resolve a marker byte read from an envelope
    pub fn try_from_marker(marker: u8) -> Result<Self, SedonaEwkbError> {
        match marker {
            WKB_XDR => Ok(Self::BigEndian),
            WKB_NDR => Ok(Self::LittleEndian),
            other => Err(SedonaEwkbError::UnsupportedByteOrder(other)),
        }
    }

    pub(crate) fn read_u32<R: Read>(&self, reader: &mut R) -> Result<u32, SedonaEwkbError> {
        let value = match self {
            Self::BigEndian => reader.read_u32::<BE>()?,
            Self::LittleEndian => reader.read_u32::<LE>()?,
        };
        Ok(value)
    }

    pub(crate) fn read_i32<R: Read>(&self, reader: &mut R) -> Result<i32, SedonaEwkbError> {
        let value = match self {
            Self::BigEndian => reader.read_i32::<BE>()?,
            Self::LittleEndian => reader.read_i32::<LE>()?,
        };
        Ok(value)
    }

    pub(crate) fn read_f64<R: Read>(&self, reader: &mut R) -> Result<f64, SedonaEwkbError> {
        let value = match self {
            Self::BigEndian => reader.read_f64::<BE>()?,
            Self::LittleEndian => reader.read_f64::<LE>()?,
        };
        Ok(value)
    }

    pub(crate) fn write_u32<W: Write>(
        &self,
        writer: &mut W,
        value: u32,
    ) -> Result<(), SedonaEwkbError> {
        match self {
            Self::BigEndian => writer.write_u32::<BE>(value)?,
            Self::LittleEndian => writer.write_u32::<LE>(value)?,
        }
        Ok(())
    }

    pub(crate) fn write_i32<W: Write>(
        &self,
        writer: &mut W,
        value: i32,
    ) -> Result<(), SedonaEwkbError> {
        match self {
            Self::BigEndian => writer.write_i32::<BE>(value)?,
            Self::LittleEndian => writer.write_i32::<LE>(value)?,
        }
        Ok(())
    }

    pub(crate) fn write_f64<W: Write>(
        &self,
        writer: &mut W,
        value: f64,
    ) -> Result<(), SedonaEwkbError> {
        match self {
            Self::BigEndian => writer.write_f64::<BE>(value)?,
            Self::LittleEndian => writer.write_f64::<LE>(value)?,
        }
        Ok(())
    }
}
