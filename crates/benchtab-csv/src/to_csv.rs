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

//! Write datasets as CSV.

use crate::error::{CsvError, Result};
use benchtab_core::{Dataset, Value};
use std::io::Write;

/// Write a dataset as CSV: a header row, then one line per row.
///
/// # Example
/// ```
/// use benchtab_core::Dataset;
/// use benchtab_csv::to_csv_writer;
///
/// let mut out = Vec::new();
/// to_csv_writer(&Dataset::from_records(&[]), &mut out).unwrap();
/// assert!(out.starts_with(b"index,host,date,ver,nb_run,nb_build,cpu,"));
/// ```
pub fn to_csv_writer<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(&dataset.columns)?;

    for (row_idx, row) in dataset.rows.iter().enumerate() {
        if row.len() != dataset.columns.len() {
            return Err(CsvError::WidthMismatch {
                expected: dataset.columns.len(),
                actual: row.len(),
                row: row_idx,
            });
        }
        wtr.write_record(row.iter().map(Value::to_string))?;
    }

    wtr.flush()?;
    Ok(())
}
