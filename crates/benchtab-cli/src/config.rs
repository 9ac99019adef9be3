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

//! Export configuration.

use std::path::{Path, PathBuf};

use benchtab_columnar::ColumnarFormat;

/// Where to read run groups from and where to put datasets and archives.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Root of the `<version>/<host>/<date>` tree produced by the harness.
    pub input_root: PathBuf,
    /// Dataset output root; CSV goes to `csv/`, columnar files to `todo/`.
    pub output_root: PathBuf,
    /// Destination root for processed run groups.
    pub archive_root: PathBuf,
    pub columnar_format: ColumnarFormat,
    /// Collect and log only; write and move nothing.
    pub dry_run: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("output"),
            output_root: PathBuf::from("processed"),
            archive_root: PathBuf::from("processed").join("old"),
            columnar_format: ColumnarFormat::default(),
            dry_run: false,
        }
    }
}

impl ExportConfig {
    /// Directory receiving the CSV datasets.
    pub fn csv_dir(&self) -> PathBuf {
        self.output_root.join("csv")
    }

    /// Directory receiving the columnar datasets awaiting upload.
    pub fn todo_dir(&self) -> PathBuf {
        self.output_root.join("todo")
    }

    /// Archive location of a group given its path relative to the input root.
    pub fn archive_path(&self, relative: &Path) -> PathBuf {
        self.archive_root.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.input_root, PathBuf::from("output"));
        assert_eq!(config.csv_dir(), PathBuf::from("processed/csv"));
        assert_eq!(config.todo_dir(), PathBuf::from("processed/todo"));
        assert_eq!(config.columnar_format, ColumnarFormat::Feather);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_archive_path() {
        let config = ExportConfig::default();
        assert_eq!(
            config.archive_path(Path::new("v1.0/host-a/2024-01-01")),
            PathBuf::from("processed/old/v1.0/host-a/2024-01-01")
        );
    }
}
