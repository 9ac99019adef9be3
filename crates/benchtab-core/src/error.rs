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

//! Error types for benchmark report parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning report text and build metadata into records.
///
/// A report without a results table is *not* an error: the parsers return an
/// empty result for it and callers skip the file. Every variant here aborts
/// processing of the enclosing run group.
///
/// # Examples
///
/// ```
/// use benchtab_core::ParseError;
///
/// let err = ParseError::MetricCountMismatch { expected: 5, actual: 4 };
/// assert_eq!(
///     err.to_string(),
///     "Metric count mismatch: expected 5 throughput rows, got 4"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ParseError {
    /// A throughput cell or CPU sample could not be read as a number with a unit.
    #[error("Malformed metric '{input}': {reason}")]
    MalformedMetric {
        /// The offending cell or line, as found in the report.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The results table did not hold exactly the expected number of rows.
    #[error("Metric count mismatch: expected {expected} throughput rows, got {actual}")]
    MetricCountMismatch {
        /// Number of rows the report format defines.
        expected: usize,
        /// Number of rows found.
        actual: usize,
    },

    /// A report references a build with no build-options entry.
    #[error("Unknown build identifier '{build}' (known: {known})")]
    UnknownBuildIdentifier {
        /// The build identifier taken from the report file name.
        build: String,
        /// Comma-separated known identifiers, for the error message.
        known: String,
    },

    /// A build-options file is not valid JSON or lacks `build_options`.
    #[error("Invalid build options file '{path}': {message}")]
    ConfigJson {
        /// The offending file.
        path: PathBuf,
        /// Parser or schema message.
        message: String,
    },

    /// A file matched a report or build-options pattern but its name could not be decoded.
    #[error("Invalid file name '{name}': {reason}")]
    InvalidFileName {
        /// The file name.
        name: String,
        /// What part could not be decoded.
        reason: String,
    },

    /// A report exceeds the size accepted for in-memory parsing.
    #[error("Report '{path}' is too large ({actual} bytes, maximum {max} bytes)")]
    ReportTooLarge {
        /// The report path.
        path: PathBuf,
        /// Size on disk.
        actual: u64,
        /// Accepted maximum.
        max: u64,
    },

    /// I/O error while reading a report or build-options file.
    #[error("I/O error for '{path}': {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedMetric {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config_json(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigJson {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_file_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFileName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
