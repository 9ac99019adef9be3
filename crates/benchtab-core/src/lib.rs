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

//! Parsing core for benchmark report files.
//!
//! A report is free-form text written by the benchmarking harness. It holds
//! `CPU ...: <percent>` utilization samples and an ASCII results table whose
//! third column is a throughput score such as `1.02 GiB/s`. This crate turns
//! that text into numbers and lays records out as a [`Dataset`] for the
//! writers in `benchtab-csv` and `benchtab-columnar`.
//!
//! # Components
//!
//! - [`to_mib_per_sec`]: normalize a throughput cell to MiB/s
//! - [`pick_cpu_utilization`]: select the representative CPU sample
//! - [`parse_scores`]: extract the ordered table scores
//! - [`parse_report`]: all of the above for one report
//!
//! # Example
//!
//! ```
//! use benchtab_core::parse_report;
//!
//! let report = "\
//! CPU before: 3.5
//! | Category | Function       | Score        |
//! |==========+================+==============|
//! | CPU      | BLAKE2-256     | 1.02 GiB/s   |
//! | CPU      | SR25519-Verify | 683.20 KiB/s |
//! | Memory   | Copy           | 13.47 GiB/s  |
//! | Disk     | Seq Write      | 1.63 GiB/s   |
//! | Disk     | Rnd Write      | 712.24 MiB/s |
//! CPU after: 97.0
//! ";
//!
//! let metrics = parse_report(report).unwrap().expect("table present");
//! assert_eq!(metrics.cpu, Some(97.0));
//! assert_eq!(metrics.throughput.rnd_write, 712.24);
//! ```

mod cpu;
mod dataset;
mod error;
mod model;
mod table;
mod units;

pub use cpu::pick_cpu_utilization;
pub use dataset::{Dataset, Value, LEADING_COLUMNS};
pub use error::{ParseError, Result};
pub use model::{
    BuildOptions, BuildOptionsFile, MetricRecord, OptionValue, RawReport, ReportMetrics,
    ReservedBuilds, ThroughputMetrics, METRIC_COUNT, METRIC_NAMES,
};
pub use table::{parse_scores, SCORE_COLUMN};
pub use units::{to_mib_per_sec, RateUnit};

/// Extract the metrics of one report.
///
/// Returns `Ok(None)` when the report has no results table; callers skip
/// such reports.
///
/// # Errors
///
/// - [`ParseError::MalformedMetric`] for an unreadable score or CPU sample
/// - [`ParseError::MetricCountMismatch`] when the table does not have
///   exactly [`METRIC_COUNT`] data rows
pub fn parse_report(text: &str) -> Result<Option<ReportMetrics>> {
    let scores = parse_scores(text)?;
    if scores.is_empty() {
        return Ok(None);
    }

    let throughput = ThroughputMetrics::try_from(scores.as_slice())?;
    let cpu = pick_cpu_utilization(text)?;

    Ok(Some(ReportMetrics { cpu, throughput }))
}
