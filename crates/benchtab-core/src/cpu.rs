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

//! CPU utilization samples.
//!
//! The harness prints a `CPU ...: <percent>` line before and after the
//! benchmark run. The representative utilization is the larger of the two.

use crate::error::{ParseError, Result};

/// Pick the representative CPU utilization from a report.
///
/// Lines starting with `CPU` are samples; the value is the text after the
/// last `:`. The first sample is the "before" value and the last one the
/// "after" value.
///
/// Returns `Ok(None)` when the report carries no sample at all, and the
/// single value when there is only one.
///
/// # Errors
///
/// A `CPU` line whose trailing segment is not a number yields
/// [`ParseError::MalformedMetric`].
///
/// # Examples
///
/// ```
/// use benchtab_core::pick_cpu_utilization;
///
/// let text = "CPU start: 10.0\n| table |\nCPU end: 40.0\n";
/// assert_eq!(pick_cpu_utilization(text).unwrap(), Some(40.0));
/// assert_eq!(pick_cpu_utilization("no samples").unwrap(), None);
/// ```
pub fn pick_cpu_utilization(report: &str) -> Result<Option<f64>> {
    let mut before: Option<f64> = None;
    let mut after: Option<f64> = None;

    for line in report.split('\n').filter(|l| l.starts_with("CPU")) {
        let sample = parse_sample(line)?;
        if before.is_none() {
            before = Some(sample);
        } else {
            after = Some(sample);
        }
    }

    Ok(match (before, after) {
        (Some(b), Some(a)) => Some(b.max(a)),
        (Some(b), None) => Some(b),
        _ => None,
    })
}

fn parse_sample(line: &str) -> Result<f64> {
    let raw = line.rsplit(':').next().unwrap_or(line).trim();
    raw.parse::<f64>().map_err(|_| {
        ParseError::malformed(line.trim_end(), "CPU sample is not a number")
    })
}
