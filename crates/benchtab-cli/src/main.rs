// Benchtab - Benchmark Report Tabulation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Benchtab command line interface

use benchtab_cli::cli::{Commands, RunStatus};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code for a run in which some groups failed.
const EXIT_PARTIAL: u8 = 2;

/// Benchtab - benchmark report tabulation
///
/// Turns the text reports of the node benchmark harness into per-run CSV
/// and Feather/Parquet datasets and archives the processed inputs.
///
/// # Examples
///
/// ```bash
/// # Export everything under ./output
/// benchtab export
///
/// # Preview without writing anything
/// benchtab -v export --dry-run
///
/// # Check what one report parses to
/// benchtab inspect output/v1.0/host/2024-01-01/bench_official_run_1.txt
/// ```
#[derive(Parser)]
#[command(name = "benchtab")]
#[command(author, version, about = "Benchtab - benchmark report tabulation", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "benchtab_cli=debug"
    } else {
        "benchtab_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(RunStatus::Complete) => ExitCode::SUCCESS,
        Ok(RunStatus::Partial) => ExitCode::from(EXIT_PARTIAL),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
