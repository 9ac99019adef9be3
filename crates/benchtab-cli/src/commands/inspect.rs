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

//! Inspect command - single report debugging

use std::path::Path;

use benchtab_core::{parse_report, ReportMetrics};
use serde::Serialize;

use crate::collect::{GroupFile, RunCollector};
use crate::error::CliError;

#[derive(Serialize)]
struct InspectOutput<'a> {
    path: String,
    build: &'a str,
    run: u32,
    /// Seconds since the Unix epoch.
    modified: i64,
    /// `None` when the report has no results table.
    metrics: Option<ReportMetrics>,
}

/// Parse a report file and print what the exporter would extract, as
/// pretty JSON.
///
/// The build identifier and run number come from the file name when it
/// follows the `bench_<build>_run_<n>.txt` pattern; otherwise the file stem
/// and run `0` are shown.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, exceeds the report size limit,
/// or has a malformed results table.
pub fn inspect(path: &Path) -> Result<(), CliError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::invalid_input(format!("'{}' is not a file", path.display())))?;

    let (build, run) = match GroupFile::classify(name).map_err(|e| CliError::report(path, e))? {
        GroupFile::Report { build, run } => (build, run),
        _ => {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(name)
                .to_string();
            (stem, 0)
        }
    };

    let report = RunCollector::default()
        .read_report(path, build, run)
        .map_err(|e| CliError::report(path, e))?;
    let metrics = parse_report(&report.text).map_err(|e| CliError::report(path, e))?;

    let output = InspectOutput {
        path: path.display().to_string(),
        build: &report.build,
        run: report.run,
        modified: report.modified,
        metrics,
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::invalid_input(format!("cannot serialize report: {}", e)))?;
    println!("{}", json);
    Ok(())
}
