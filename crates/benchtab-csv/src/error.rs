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

//! Error types for CSV dataset output.

use thiserror::Error;

/// CSV generation error types.
///
/// # Examples
///
/// ```
/// use benchtab_csv::CsvError;
///
/// let err = CsvError::WidthMismatch {
///     expected: 12,
///     actual: 11,
///     row: 3,
/// };
/// assert_eq!(
///     err.to_string(),
///     "Row width mismatch: expected 12 columns, got 11 in row 3"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// Row has wrong number of cells for the dataset header.
    #[error("Row width mismatch: expected {expected} columns, got {actual} in row {row}")]
    WidthMismatch {
        /// Number of columns in the header.
        expected: usize,
        /// Number of cells in the row.
        actual: usize,
        /// Row number (0-based, matches the `index` column).
        row: usize,
    },

    /// I/O error during CSV writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;
