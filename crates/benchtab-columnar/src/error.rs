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

//! Error types for columnar dataset output.

use thiserror::Error;

/// Columnar conversion and writing errors.
#[derive(Debug, Error)]
pub enum ColumnarError {
    /// Building the Arrow schema or record batch failed, or the IPC writer failed.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// The Parquet writer failed.
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// I/O error on the destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Row has wrong number of cells for the dataset columns.
    #[error("Row width mismatch: expected {expected} columns, got {actual} in row {row}")]
    WidthMismatch {
        expected: usize,
        actual: usize,
        row: usize,
    },
}

/// Convenience type alias for `Result` with `ColumnarError`.
pub type Result<T> = std::result::Result<T, ColumnarError>;
