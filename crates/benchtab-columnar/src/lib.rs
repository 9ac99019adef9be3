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

//! Columnar binary output for benchmark datasets.
//!
//! A [`Dataset`] is converted to a single Arrow
//! [`RecordBatch`](arrow::record_batch::RecordBatch) and written either as
//! Feather (Arrow IPC file format) or as Parquet.
//!
//! Feather is the default: it is what analysis notebooks load with
//! `pandas.read_feather`. Parquet is available for tools that prefer it.
//!
//! # Example
//!
//! ```
//! use benchtab_columnar::{to_columnar_bytes, ColumnarFormat};
//! use benchtab_core::Dataset;
//!
//! let bytes = to_columnar_bytes(&Dataset::from_records(&[]), ColumnarFormat::Feather).unwrap();
//! assert!(bytes.starts_with(b"ARROW1"));
//! ```

mod batch;
mod error;
mod to_feather;
mod to_parquet;

use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use benchtab_core::Dataset;

pub use batch::build_record_batch;
pub use error::{ColumnarError, Result};
pub use to_feather::write_feather;
pub use to_parquet::{write_parquet, ToParquetConfig};

/// Columnar file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnarFormat {
    #[default]
    Feather,
    Parquet,
}

impl ColumnarFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ColumnarFormat::Feather => "feather",
            ColumnarFormat::Parquet => "parquet",
        }
    }
}

impl fmt::Display for ColumnarFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ColumnarFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "feather" | "arrow" | "ipc" => Ok(ColumnarFormat::Feather),
            "parquet" => Ok(ColumnarFormat::Parquet),
            other => Err(format!(
                "unknown columnar format '{}' (expected 'feather' or 'parquet')",
                other
            )),
        }
    }
}

/// Write a dataset in the given format.
pub fn to_columnar_writer<W: Write + Send>(
    dataset: &Dataset,
    format: ColumnarFormat,
    metadata: &HashMap<String, String>,
    writer: W,
) -> Result<()> {
    let batch = build_record_batch(dataset, metadata)?;
    match format {
        ColumnarFormat::Feather => write_feather(&batch, writer),
        ColumnarFormat::Parquet => write_parquet(&batch, writer, &ToParquetConfig::default()),
    }
}

/// Convert a dataset to columnar bytes without metadata.
pub fn to_columnar_bytes(dataset: &Dataset, format: ColumnarFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(16 * 1024);
    to_columnar_writer(dataset, format, &HashMap::new(), &mut buffer)?;
    Ok(buffer)
}
