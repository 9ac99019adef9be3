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

//! The batch export pipeline.
//!
//! For every run group under the input root: collect its records, lay them
//! out as a dataset, write the CSV and columnar files, then move the group
//! into the archive tree. Both dataset files are written to temporary files
//! next to their final location, synced, and persisted only once both are
//! complete, and a group is archived only after that. A failing group is
//! logged and left where it was.
//!
//! A group whose archive directory already exists (new reports for a group
//! exported earlier) is exported from the union of the archived files and
//! the new ones, so the rewritten dataset keeps every archived row.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use benchtab_columnar::to_columnar_writer;
use benchtab_core::Dataset;
use benchtab_csv::to_csv_writer;
use tempfile::NamedTempFile;
use tracing::{error, info};

use crate::archive::{check_merge, relocate_group};
use crate::collect::RunCollector;
use crate::config::ExportConfig;
use crate::discover::{discover_groups, RunGroup};
use crate::error::CliError;
use crate::summary::{ExportSummary, GroupOutcome, GroupResult};

/// Drives discovery, collection, output and archiving.
#[derive(Debug, Clone)]
pub struct DatasetExporter {
    config: ExportConfig,
    collector: RunCollector,
}

impl DatasetExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            collector: RunCollector::default(),
        }
    }

    pub fn with_collector(mut self, collector: RunCollector) -> Self {
        self.collector = collector;
        self
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export every group under the input root.
    ///
    /// # Errors
    ///
    /// Only failures outside group processing are returned: an unreadable
    /// input root or output directories that cannot be created. Group
    /// failures are recorded in the summary.
    pub fn run(&self) -> Result<ExportSummary, CliError> {
        let start = Instant::now();
        let groups = discover_groups(&self.config.input_root)?;
        info!(
            groups = groups.len(),
            input_root = %self.config.input_root.display(),
            "discovered run groups"
        );

        if !self.config.dry_run {
            for dir in [self.config.csv_dir(), self.config.todo_dir()] {
                fs::create_dir_all(&dir).map_err(|e| CliError::io_error(&dir, e))?;
            }
        }

        let results = groups
            .into_iter()
            .map(|group| {
                let result = self.export_group(&group);
                match &result {
                    Ok(outcome) => info!(
                        group = %group.label(),
                        records = outcome.records,
                        "exported group"
                    ),
                    Err(e) => error!(group = %group.label(), error = %e, "group failed, left in place"),
                }
                GroupResult { group, result }
            })
            .collect();

        Ok(ExportSummary::new(results, start.elapsed().as_millis()))
    }

    /// Export a single group.
    pub fn export_group(&self, group: &RunGroup) -> Result<GroupOutcome, CliError> {
        let archive_path = self.config.archive_path(&group.relative_path());
        let records = if archive_path.is_dir() {
            check_merge(&group.path, &archive_path)?;
            info!(
                group = %group.label(),
                archive = %archive_path.display(),
                "group already archived, merging reports"
            );
            self.collector
                .collect_from(group, &[archive_path.as_path(), group.path.as_path()])?
        } else {
            self.collector.collect(group)?
        };
        let dataset = Dataset::from_records(&records);

        let label = group.label();
        let csv_path = self.config.csv_dir().join(format!("{}.csv", label));
        let columnar_path = self.config.todo_dir().join(format!(
            "{}.{}",
            label,
            self.config.columnar_format.extension()
        ));

        if self.config.dry_run {
            info!(
                group = %label,
                records = dataset.len(),
                csv = %csv_path.display(),
                columnar = %columnar_path.display(),
                archive = %archive_path.display(),
                "dry run, nothing written"
            );
            return Ok(GroupOutcome {
                records: dataset.len(),
                ..GroupOutcome::default()
            });
        }

        let csv_tmp = self.write_csv(&dataset, &csv_path)?;
        let columnar_tmp = self.write_columnar(&dataset, group, &columnar_path)?;
        persist(csv_tmp, &csv_path)?;
        persist(columnar_tmp, &columnar_path)?;

        relocate_group(&group.path, &archive_path)?;

        Ok(GroupOutcome {
            records: dataset.len(),
            csv_path: Some(csv_path),
            columnar_path: Some(columnar_path),
            archived_to: Some(archive_path),
        })
    }

    fn write_csv(&self, dataset: &Dataset, target: &Path) -> Result<NamedTempFile, CliError> {
        let mut tmp = temp_file_for(target)?;
        to_csv_writer(dataset, tmp.as_file_mut())?;
        Ok(tmp)
    }

    fn write_columnar(
        &self,
        dataset: &Dataset,
        group: &RunGroup,
        target: &Path,
    ) -> Result<NamedTempFile, CliError> {
        let metadata = HashMap::from([
            ("benchtab:version".to_string(), group.version.clone()),
            ("benchtab:host".to_string(), group.host.clone()),
            ("benchtab:date".to_string(), group.date.clone()),
        ]);

        let mut tmp = temp_file_for(target)?;
        to_columnar_writer(
            dataset,
            self.config.columnar_format,
            &metadata,
            tmp.as_file_mut(),
        )?;
        Ok(tmp)
    }
}

/// Temporary file in the directory of `target`, so the final rename stays
/// on one filesystem.
fn temp_file_for(target: &Path) -> Result<NamedTempFile, CliError> {
    let dir = target.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    tempfile::Builder::new()
        .prefix(".benchtab-")
        .suffix(".tmp")
        .tempfile_in(&dir)
        .map_err(|e| CliError::io_error(&dir, e))
}

fn persist(tmp: NamedTempFile, target: &Path) -> Result<(), CliError> {
    tmp.as_file()
        .sync_all()
        .map_err(|e| CliError::io_error(tmp.path(), e))?;
    tmp.persist(target)
        .map(|_| ())
        .map_err(|e| CliError::io_error(target, e.error))
}
