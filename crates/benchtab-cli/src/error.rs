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

//! Structured error types for the benchtab CLI.
//!
//! All fallible operations return `Result<T, CliError>`. Errors raised
//! while handling one run group are caught at the group boundary by the
//! exporter; only errors outside group processing end the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use benchtab_columnar::ColumnarError;
use benchtab_core::ParseError;
use benchtab_csv::CsvError;

/// The main error type for benchtab CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchtab_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed (directory listing, file write, rename).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// A report could not be turned into a record.
    #[error("Report '{path}': {source}")]
    Report {
        /// The report file
        path: PathBuf,
        /// What went wrong while parsing it
        #[source]
        source: ParseError,
    },

    /// Build options or file-name decoding failed for a group.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Writing the row-oriented dataset failed.
    #[error("CSV output error: {0}")]
    Csv(#[from] CsvError),

    /// Writing the columnar dataset failed.
    #[error("Columnar output error: {0}")]
    Columnar(#[from] ColumnarError),

    /// Moving a processed group into the archive tree failed.
    #[error("Cannot archive '{from}' to '{to}': {message}")]
    Archive {
        /// Source group directory
        from: PathBuf,
        /// Archive destination
        to: PathBuf,
        /// The error message
        message: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Attach a report path to a parse error.
    pub fn report(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::Report {
            path: path.into(),
            source,
        }
    }

    /// Create an archive relocation error.
    pub fn archive(from: impl Into<PathBuf>, to: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Archive {
            from: from.into(),
            to: to.into(),
            message: message.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
