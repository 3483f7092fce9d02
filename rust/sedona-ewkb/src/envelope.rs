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

use crate::endian::Endianness;
use crate::error::SedonaEwkbError;
use crate::geometry::Geometry;
use crate::options::DecodeOptions;

/// Write the byte order marker, type code, and payload of a geometry
pub fn write_envelope<G: Geometry, W: Write>(
    writer: &mut W,
    geom: &G,
    order: Endianness,
) -> Result<(), SedonaEwkbError> {
    writer.write_all(&[order.marker()])?;
    order.write_u32(writer, geom.type_code())?;
    geom.write(writer, order)
}

/// Read the byte order marker and type code at the start of an envelope
pub fn read_header<R: Read>(reader: &mut R) -> Result<(Endianness, u32), SedonaEwkbError> {
    let mut marker = [0u8; 1];
    reader.read_exact(&mut marker)?;
    let order = Endianness::try_from_marker(marker[0]).inspect_err(|_| {
        log::debug!("Unsupported WKB byte order marker {:#04x}", marker[0]);
    })?;

    let type_code = order.read_u32(reader)?;
    log::trace!("Read WKB header: {order:?}, type code {type_code:#010x}");
    Ok((order, type_code))
}

/// Read an envelope whose type code must match `G`, then decode its payload
///
/// Bytes following the payload are left unread.
pub fn read_envelope<G: Geometry, R: Read>(
    reader: &mut R,
    options: &DecodeOptions,
) -> Result<G, SedonaEwkbError> {
    let (order, type_code) = read_header(reader)?;
    if type_code != G::TYPE_CODE {
        log::debug!(
            "Rejecting WKB type code {type_code:#010x} (expected {:#010x})",
            G::TYPE_CODE
        );
        return Err(SedonaEwkbError::UnexpectedGeometryType {
            expected: G::TYPE_CODE,
            found: type_code,
        });
    }

    G::read(reader, order, options)
}

/// Create an envelope in a new buffer
///
/// A convenience wrapper for [write_envelope].
pub fn to_ewkb<G: Geometry>(geom: &G, order: Endianness) -> Result<Vec<u8>, SedonaEwkbError> {
    let mut out = Vec::new();
    write_envelope(&mut out, geom, order)?;
    Ok(out)
}

/// Decode an envelope from a buffer
///
/// A convenience wrapper for [read_envelope].
pub fn from_ewkb<G: Geometry>(buf: &[u8], options: &DecodeOptions) -> Result<G, SedonaEwkbError> {
    let mut reader = buf;
    read_envelope(&mut reader, options)
}
