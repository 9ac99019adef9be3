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

//! Row-oriented CSV output for benchmark datasets.
//!
//! Writes a [`Dataset`](benchtab_core::Dataset) as comma-separated text with
//! a header row. Column order is the dataset's column order, which is stable
//! for a given record set.
//!
//! # Value Formatting
//!
//! - `Null` → empty field
//! - `Bool` → `true` / `false`
//! - `Float` → shortest round-trip form, whole numbers keep `.0`;
//!   `NaN`, `Infinity`, `-Infinity` for special values (the
//!   [`Display`](std::fmt::Display) form of [`Value`](benchtab_core::Value))
//!
//! # Example
//!
//! ```
//! use benchtab_core::{Dataset, Value};
//! use benchtab_csv::to_csv_writer;
//!
//! let ds = Dataset {
//!     columns: vec!["index".to_string(), "cpu".to_string()],
//!     rows: vec![vec![Value::Int(0), Value::Float(97.5)]],
//! };
//! let mut out = Vec::new();
//! to_csv_writer(&ds, &mut out).unwrap();
//! assert_eq!(out, b"index,cpu\n0,97.5\n");
//! ```

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::to_csv_writer;
