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

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sedona_ewkb::{DecodeOptions, Endianness};
use sedona_ewkb_cli::{
    exec::{self, CliError, DecodeSettings},
    SEDONA_EWKB_CLI_VERSION,
};

#[derive(Debug, Parser, PartialEq)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(
        short,
        long,
        help = "Reduce printing other than the results and work quietly"
    )]
    quiet: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
enum Command {
    /// Decode hex EWKB values and print each as a line of JSON
    Decode {
        #[clap(
            long,
            help = "Maximum number of points per ring or rings per polygon",
            conflicts_with = "unbounded"
        )]
        max_elements: Option<usize>,

        #[clap(long, help = "Accept any point or ring count")]
        unbounded: bool,

        #[clap(long, help = "Reject polygons with open or degenerate rings")]
        check_rings: bool,

        #[clap(required = true, value_parser(parse_non_empty))]
        values: Vec<String>,
    },
    /// Encode JSON geometries and print each as hex EWKB
    Encode {
        #[clap(long, help = "Write big-endian (XDR) instead of little-endian (NDR)")]
        big_endian: bool,

        #[clap(required = true, value_parser(parse_non_empty))]
        values: Vec<String>,
    },
}

/// Calls [`main_inner`], then handles printing errors and returning the correct exit code
pub fn main() -> ExitCode {
    if let Err(e) = main_inner() {
        println!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Main CLI entrypoint
fn main_inner() -> Result<(), CliError> {
    env_logger::init();

    let args = Args::parse();

    if !args.quiet {
        eprintln!("Sedona EWKB CLI v{SEDONA_EWKB_CLI_VERSION}");
    }

    let lines = match args.command {
        Command::Decode {
            max_elements,
            unbounded,
            check_rings,
            values,
        } => {
            let options = match (unbounded, max_elements) {
                (true, _) => DecodeOptions::unbounded(),
                (false, Some(max)) => DecodeOptions::with_max_elements(max),
                (false, None) => DecodeOptions::default(),
            };
            let settings = DecodeSettings {
                options,
                check_rings,
            };
            exec::exec_decode(&values, &settings)?
        }
        Command::Encode { big_endian, values } => {
            let order = if big_endian {
                Endianness::BigEndian
            } else {
                Endianness::LittleEndian
            };
            exec::exec_encode(&values, order)?
        }
    };

    for line in lines {
        println!("{line}");
    }

    Ok(())
}

fn parse_non_empty(value: &str) -> Result<String, String> {
    if !value.trim().is_empty() {
        Ok(value.to_string())
    } else {
        Err("expected a non empty value".to_string())
    }
}
