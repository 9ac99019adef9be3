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

//! ASCII results table extraction.
//!
//! The harness renders its results as a pipe-delimited table:
//!
//! ```text
//! +----------+-----------+-------------+
//! | Category | Function  | Score       |
//! +==========+===========+=============+
//! | CPU      | BLAKE2-256| 1.02 GiB/s  |
//! |----------+-----------+-------------|
//! | CPU      | SR25519   | 683.2 KiB/s |
//! ```
//!
//! Rows start with `|`; rows containing `-+-` or `===` are separators. The
//! first remaining row is the header and every later row is a data row whose
//! third cell holds the score.

use crate::error::{ParseError, Result};
use crate::units::to_mib_per_sec;

/// Zero-based index of the score cell inside a data row.
pub const SCORE_COLUMN: usize = 2;

/// Extract the scores of the results table, in row order, as MiB/s.
///
/// An empty vector means the report has no table (the harness emits none
/// when the architecture is not supported). A table with a header but no
/// data rows also yields an empty vector.
///
/// # Errors
///
/// Returns [`ParseError::MalformedMetric`] when a data row has fewer than
/// three cells or its score cell cannot be converted.
///
/// # Examples
///
/// ```
/// use benchtab_core::parse_scores;
///
/// let report = "\
/// | Category | Function | Score |
/// |==========+==========+=======|
/// | CPU      | Copy     | 2.0 GiB/s |
/// ";
/// assert_eq!(parse_scores(report).unwrap(), vec![2000.0]);
/// assert!(parse_scores("no table here").unwrap().is_empty());
/// ```
pub fn parse_scores(report: &str) -> Result<Vec<f64>> {
    let mut header_seen = false;
    let mut scores = Vec::new();

    for (idx, line) in report.split('\n').enumerate() {
        if !line.starts_with('|') || is_separator(line) {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }

        let cells = split_row(line);
        let cell = cells.get(SCORE_COLUMN).ok_or_else(|| {
            ParseError::malformed(
                line.trim_end(),
                format!(
                    "table row at line {} has {} cells, score column is {}",
                    idx + 1,
                    cells.len(),
                    SCORE_COLUMN + 1
                ),
            )
        })?;
        scores.push(to_mib_per_sec(cell)?);
    }

    Ok(scores)
}

fn is_separator(line: &str) -> bool {
    line.contains("-+-") || line.contains("===")
}

/// Split a table row on `|`, dropping the segment before the leading
/// delimiter and the one after the trailing delimiter.
fn split_row(line: &str) -> Vec<&str> {
    let line = line.trim_end_matches('\r');
    let mut cells: Vec<&str> = line.split('|').collect();
    if cells.len() >= 2 {
        cells.remove(0);
        cells.pop();
    } else {
        cells.clear();
    }
    cells
}
