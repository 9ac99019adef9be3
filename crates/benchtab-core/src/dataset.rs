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

//! Tabular form of a record set, shared by the CSV and columnar writers.

use crate::model::{MetricRecord, OptionValue, METRIC_NAMES};
use std::collections::BTreeSet;
use std::fmt;

/// Columns every dataset starts with, before the metric columns.
pub const LEADING_COLUMNS: [&str; 7] = ["index", "host", "date", "ver", "nb_run", "nb_build", "cpu"];

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Text form used by every textual output.
///
/// Null is empty. Whole floats keep a `.0` so float columns stay float-typed
/// for readers that infer column types.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) if x.is_nan() => f.write_str("NaN"),
            Value::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            Value::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<&OptionValue> for Value {
    fn from(v: &OptionValue) -> Self {
        match v {
            OptionValue::Bool(b) => Value::Bool(*b),
            OptionValue::Int(n) => Value::Int(*n),
            OptionValue::Float(x) => Value::Float(*x),
            OptionValue::Text(s) => Value::String(s.clone()),
        }
    }
}

/// Column names plus rows; every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Lay out records as rows.
    ///
    /// Column order is fixed: the leading columns, the five metrics, then the
    /// union of all build-option names, sorted. A record without a given
    /// option gets a null cell.
    pub fn from_records(records: &[MetricRecord]) -> Self {
        let option_names: BTreeSet<&str> = records
            .iter()
            .flat_map(|r| r.options.keys().map(String::as_str))
            .collect();

        let columns: Vec<String> = LEADING_COLUMNS
            .iter()
            .chain(METRIC_NAMES.iter())
            .copied()
            .chain(option_names.iter().copied())
            .map(str::to_string)
            .collect();

        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let mut row = Vec::with_capacity(columns.len());
                row.push(Value::Int(index as i64));
                row.push(Value::String(record.host.clone()));
                row.push(Value::String(record.date.clone()));
                row.push(Value::String(record.version.clone()));
                row.push(Value::Int(i64::from(record.run)));
                row.push(Value::String(record.build.clone()));
                row.push(record.cpu.map_or(Value::Null, Value::Float));
                row.extend(record.throughput.values().into_iter().map(Value::Float));
                row.extend(
                    option_names
                        .iter()
                        .map(|name| record.options.get(*name).map_or(Value::Null, Value::from)),
                );
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BuildOptions, ThroughputMetrics};

    fn record(build: &str, run: u32, options: BuildOptions) -> MetricRecord {
        MetricRecord {
            host: "bench01".to_string(),
            date: "2022_06_01".to_string(),
            version: "v0.9.24".to_string(),
            run,
            build: build.to_string(),
            cpu: Some(12.5),
            throughput: ThroughputMetrics::try_from(&[1.0, 2.0, 3.0, 4.0, 5.0][..]).unwrap(),
            options,
        }
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Int(16).to_string(), "16");
        assert_eq!(Value::Float(40.0).to_string(), "40.0");
        assert_eq!(Value::Float(0.003).to_string(), "0.003");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_fixed_column_order() {
        let ds = Dataset::from_records(&[]);
        assert_eq!(
            ds.columns,
            vec![
                "index", "host", "date", "ver", "nb_run", "nb_build", "cpu", "BLAKE2-256",
                "SR25519-Verify", "Copy", "Seq_Write", "Rnd_Write"
            ]
        );
        assert!(ds.is_empty());
    }

    #[test]
    fn test_option_columns_union_sorted() {
        let a = BuildOptions::from([("toolchain".to_string(), OptionValue::from("stable"))]);
        let b = BuildOptions::from([("arch".to_string(), OptionValue::from("native"))]);
        let ds = Dataset::from_records(&[record("a", 1, a), record("b", 2, b)]);

        assert_eq!(ds.columns[12..], ["arch".to_string(), "toolchain".to_string()]);
        assert_eq!(ds.rows[0][12], Value::Null);
        assert_eq!(ds.rows[0][13], Value::String("stable".to_string()));
        assert_eq!(ds.rows[1][12], Value::String("native".to_string()));
        assert_eq!(ds.rows[1][13], Value::Null);
    }

    #[test]
    fn test_row_values() {
        let ds = Dataset::from_records(&[record("lto", 3, BuildOptions::new())]);
        let row = &ds.rows[0];
        assert_eq!(row.len(), ds.columns.len());
        assert_eq!(row[0], Value::Int(0));
        assert_eq!(row[4], Value::Int(3));
        assert_eq!(row[5], Value::String("lto".to_string()));
        assert_eq!(row[6], Value::Float(12.5));
        assert_eq!(row[ds.column_index("Rnd_Write").unwrap()], Value::Float(5.0));
    }

    #[test]
    fn test_missing_cpu_is_null() {
        let mut r = record("a", 1, BuildOptions::new());
        r.cpu = None;
        let ds = Dataset::from_records(&[r]);
        assert!(ds.rows[0][6].is_null());
    }
}
