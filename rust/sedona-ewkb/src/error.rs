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
use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SedonaEwkbError {
    #[error("Unsupported WKB byte order marker: {0:#04x}")]
    UnsupportedByteOrder(u8),
    #[error("Unexpected geometry type: expected {expected:#010x} but found {found:#010x}")]
    UnexpectedGeometryType { expected: u32, found: u32 },
    #[error("Unsupported geometry type code: {0:#010x}")]
    UnsupportedGeometryType(u32),
    #[error("Unexpected source data type: {0}")]
    UnsupportedSourceDataType(&'static str),
    #[error("Invalid element count: {0}")]
    InvalidElementCount(i64),
    #[error("Element count {count} exceeds the configured maximum of {max}")]
    TooManyElements { count: u64, max: usize },
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Hex(hex::FromHexError),
    #[error("{0}")]
    IO(io::Error),
}

impl From<io::Error> for SedonaEwkbError {
    fn from(value: io::Error) -> Self {
        SedonaEwkbError::IO(value)
    }
}

impl From<hex::FromHexError> for SedonaEwkbError {
    fn from(value: hex::FromHexError) -> Self {
        SedonaEwkbError::Hex(value)
    }
}
