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

//! Dataset → Arrow record batch.
//!
//! # Type Inference
//!
//! Each column gets one Arrow type, chosen from its non-null cells:
//!
//! - all `Bool` → `Boolean`
//! - all `Int` → `Int64`
//! - `Int` and `Float` mixed, or all `Float` → `Float64`
//! - anything else (strings, mixed kinds, all null) → `Utf8`
//!
//! Every column is nullable. Row order is preserved: dataset row `i` is
//! batch row `i`.

use std::collections::HashMap;
use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use benchtab_core::{Dataset, Value};

use crate::error::{ColumnarError, Result};

/// Build the Arrow schema and record batch for a dataset.
///
/// `metadata` is attached to the schema and ends up in the file footer.
pub fn build_record_batch(
    dataset: &Dataset,
    metadata: &HashMap<String, String>,
) -> Result<RecordBatch> {
    for (row_idx, row) in dataset.rows.iter().enumerate() {
        if row.len() != dataset.columns.len() {
            return Err(ColumnarError::WidthMismatch {
                expected: dataset.columns.len(),
                actual: row.len(),
                row: row_idx,
            });
        }
    }

    let mut fields = Vec::with_capacity(dataset.columns.len());
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(dataset.columns.len());

    for (col_idx, name) in dataset.columns.iter().enumerate() {
        let data_type = infer_column_type(dataset, col_idx);
        columns.push(build_array(dataset, col_idx, &data_type));
        fields.push(Field::new(name, data_type, true));
    }

    let schema = Arc::new(Schema::new(fields).with_metadata(metadata.clone()));
    Ok(RecordBatch::try_new(schema, columns)?)
}

fn infer_column_type(dataset: &Dataset, col_idx: usize) -> DataType {
    let mut inferred: Option<DataType> = None;

    for value in dataset.rows.iter().map(|row| &row[col_idx]) {
        let cell_type = match value {
            Value::Null => continue,
            Value::Bool(_) => DataType::Boolean,
            Value::Int(_) => DataType::Int64,
            Value::Float(_) => DataType::Float64,
            Value::String(_) => return DataType::Utf8,
        };

        inferred = Some(match (inferred, cell_type) {
            (None, t) => t,
            (Some(a), b) if a == b => a,
            (Some(DataType::Int64), DataType::Float64)
            | (Some(DataType::Float64), DataType::Int64) => DataType::Float64,
            _ => return DataType::Utf8,
        });
    }

    inferred.unwrap_or(DataType::Utf8)
}

fn build_array(dataset: &Dataset, col_idx: usize, data_type: &DataType) -> ArrayRef {
    let cells = dataset.rows.iter().map(|row| &row[col_idx]);

    match data_type {
        DataType::Boolean => Arc::new(
            cells
                .map(|v| match v {
                    Value::Bool(b) => Some(*b),
                    _ => None,
                })
                .collect::<BooleanArray>(),
        ),
        DataType::Int64 => Arc::new(
            cells
                .map(|v| match v {
                    Value::Int(n) => Some(*n),
                    _ => None,
                })
                .collect::<Int64Array>(),
        ),
        DataType::Float64 => Arc::new(
            cells
                .map(|v| match v {
                    Value::Float(f) => Some(*f),
                    Value::Int(n) => Some(*n as f64),
                    _ => None,
                })
                .collect::<Float64Array>(),
        ),
        _ => {
            let rows = dataset.rows.len();
            let mut builder = StringBuilder::with_capacity(rows, rows * 16);
            for value in cells {
                match value {
                    Value::Null => builder.append_null(),
                    Value::String(s) => builder.append_value(s),
                    other => builder.append_value(other.to_string()),
                }
            }
            Arc::new(builder.finish())
        }
    }
}
