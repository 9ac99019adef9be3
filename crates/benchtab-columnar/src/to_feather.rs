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

//! Feather (Arrow IPC file format, version 2) output.

use std::io::Write;

use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;

use crate::error::Result;

/// Write a record batch as an uncompressed Feather v2 file.
///
/// An empty batch still produces a valid file carrying the schema.
pub fn write_feather<W: Write>(batch: &RecordBatch, writer: W) -> Result<()> {
    let schema = batch.schema();
    let mut writer = FileWriter::try_new(writer, &schema)?;
    if batch.num_rows() > 0 {
        writer.write(batch)?;
    }
    writer.finish()?;
    Ok(())
}
