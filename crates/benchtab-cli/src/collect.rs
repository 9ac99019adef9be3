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

//! Per-group record collection.
//!
//! A run group directory holds build-options files (`bench_<build>.json`)
//! and report files (`bench_<build>_run_<n>.txt`). The collector resolves
//! every report against the group's build catalog and turns it into a
//! [`MetricRecord`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use benchtab_core::{
    parse_report, BuildOptions, BuildOptionsFile, MetricRecord, ParseError, RawReport,
    ReservedBuilds,
};
use tracing::{debug, warn};

use crate::discover::RunGroup;
use crate::error::CliError;

/// Largest report accepted for in-memory parsing (64 MiB).
pub const DEFAULT_MAX_REPORT_SIZE: u64 = 64 * 1024 * 1024;

const FILE_PREFIX: &str = "bench_";
const RUN_MARKER: &str = "_run_";

/// What a file inside a run group is, judging by its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupFile {
    /// `bench_<build>.json`
    BuildOptions { build: String },
    /// `bench_<build>_run_<n>.txt`
    Report { build: String, run: u32 },
    /// Anything else; ignored.
    Other,
}

impl GroupFile {
    /// Classify a file name.
    ///
    /// Build identifiers may contain underscores; the run number follows the
    /// last `_run_`.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidFileName`] when a report name carries a run
    /// number that is not a non-negative integer.
    pub fn classify(name: &str) -> Result<Self, ParseError> {
        let Some(rest) = name.strip_prefix(FILE_PREFIX) else {
            return Ok(GroupFile::Other);
        };

        if let Some(build) = rest.strip_suffix(".json") {
            if build.is_empty() {
                return Ok(GroupFile::Other);
            }
            return Ok(GroupFile::BuildOptions {
                build: build.to_string(),
            });
        }

        let Some(stem) = rest.strip_suffix(".txt") else {
            return Ok(GroupFile::Other);
        };
        let Some((build, run)) = stem.rsplit_once(RUN_MARKER) else {
            return Ok(GroupFile::Other);
        };
        if build.is_empty() {
            return Err(ParseError::invalid_file_name(name, "empty build identifier"));
        }

        let run = run.parse::<u32>().map_err(|_| {
            ParseError::invalid_file_name(name, format!("run number '{}' is not an integer", run))
        })?;

        Ok(GroupFile::Report {
            build: build.to_string(),
            run,
        })
    }
}

/// Turns run group directories into metric records.
#[derive(Debug, Clone)]
pub struct RunCollector {
    reserved: ReservedBuilds,
    max_report_size: u64,
}

impl Default for RunCollector {
    fn default() -> Self {
        Self {
            reserved: ReservedBuilds::default(),
            max_report_size: DEFAULT_MAX_REPORT_SIZE,
        }
    }
}

impl RunCollector {
    pub fn new(reserved: ReservedBuilds) -> Self {
        Self {
            reserved,
            ..Self::default()
        }
    }

    /// Override the report size limit.
    pub fn with_max_report_size(mut self, max: u64) -> Self {
        self.max_report_size = max;
        self
    }

    /// Collect the records of one group, ordered by build then run.
    ///
    /// Reports without a results table are skipped. Any other problem fails
    /// the whole group.
    ///
    /// # Errors
    ///
    /// - [`CliError::Io`] if the directory cannot be listed
    /// - [`CliError::Parse`] for an unreadable build-options file or an
    ///   undecodable file name
    /// - [`CliError::Report`] for a malformed report or one naming an unknown
    ///   build
    pub fn collect(&self, group: &RunGroup) -> Result<Vec<MetricRecord>, CliError> {
        self.collect_from(group, &[group.path.as_path()])
    }

    /// Collect the records of a group whose files are spread over several
    /// directories, such as an archived group and its new reports.
    ///
    /// A file in a later directory shadows the same-named file of an earlier
    /// one. Errors are those of [`collect`](Self::collect).
    pub fn collect_from(
        &self,
        group: &RunGroup,
        dirs: &[&Path],
    ) -> Result<Vec<MetricRecord>, CliError> {
        let mut listing = BTreeMap::new();
        for dir in dirs {
            listing.extend(list_group(dir)?);
        }
        let catalog = self.load_build_catalog(listing.values())?;

        let mut reports = Vec::new();
        for (path, kind) in listing.into_values() {
            if let GroupFile::Report { build, run } = kind {
                reports.push((build, run, path));
            }
        }
        reports.sort();

        let mut records = Vec::with_capacity(reports.len());
        for (build, run, path) in reports {
            let report = self
                .read_report(&path, build, run)
                .map_err(|e| CliError::report(&path, e))?;

            if let Some(record) = self
                .to_record(group, &catalog, report)
                .map_err(|e| CliError::report(&path, e))?
            {
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Build-options catalog of a group, with the reserved builds applied.
    fn load_build_catalog<'a>(
        &self,
        listing: impl Iterator<Item = &'a (PathBuf, GroupFile)>,
    ) -> Result<BTreeMap<String, BuildOptions>, ParseError> {
        let mut catalog = BTreeMap::new();

        for (path, kind) in listing {
            if let GroupFile::BuildOptions { build } = kind {
                debug!(path = %path.display(), build = %build, "loading build options");
                catalog.insert(build.clone(), load_build_options(path)?);
            }
        }

        self.reserved.apply(&mut catalog);
        Ok(catalog)
    }

    /// Read one report, refusing files over the size limit.
    pub fn read_report(&self, path: &Path, build: String, run: u32) -> Result<RawReport, ParseError> {
        let metadata = fs::metadata(path).map_err(|e| ParseError::io(path, e))?;
        if metadata.len() > self.max_report_size {
            return Err(ParseError::ReportTooLarge {
                path: path.to_path_buf(),
                actual: metadata.len(),
                max: self.max_report_size,
            });
        }

        let modified = metadata
            .modified()
            .map_err(|e| ParseError::io(path, e))?
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs() as i64);

        let text = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "read report");

        Ok(RawReport {
            build,
            run,
            modified,
            text,
        })
    }

    fn to_record(
        &self,
        group: &RunGroup,
        catalog: &BTreeMap<String, BuildOptions>,
        report: RawReport,
    ) -> Result<Option<MetricRecord>, ParseError> {
        let Some(metrics) = parse_report(&report.text)? else {
            warn!(
                group = %group.label(),
                build = %report.build,
                run = report.run,
                "report has no results table, skipping"
            );
            return Ok(None);
        };

        if metrics.cpu.is_none() {
            warn!(
                group = %group.label(),
                build = %report.build,
                run = report.run,
                "report has no CPU samples"
            );
        }

        let options = catalog
            .get(&report.build)
            .cloned()
            .ok_or_else(|| ParseError::UnknownBuildIdentifier {
                build: report.build.clone(),
                known: catalog.keys().cloned().collect::<Vec<_>>().join(", "),
            })?;

        Ok(Some(MetricRecord {
            host: group.host.clone(),
            date: group.date.clone(),
            version: group.version.clone(),
            run: report.run,
            build: report.build,
            cpu: metrics.cpu,
            throughput: metrics.throughput,
            options,
        }))
    }
}

/// Parse a `bench_<build>.json` file.
pub fn load_build_options(path: &Path) -> Result<BuildOptions, ParseError> {
    let content = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
    let file: BuildOptionsFile =
        serde_json::from_str(&content).map_err(|e| ParseError::config_json(path, e.to_string()))?;
    Ok(file.build_options)
}

/// Classified files of a group directory, keyed by file name.
fn list_group(dir: &Path) -> Result<BTreeMap<String, (PathBuf, GroupFile)>, CliError> {
    let entries = fs::read_dir(dir).map_err(|e| CliError::io_error(dir, e))?;

    let mut listing = BTreeMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| CliError::io_error(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            debug!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };

        match GroupFile::classify(&name)? {
            GroupFile::Other => debug!(path = %path.display(), "ignoring unrecognized file"),
            kind => {
                listing.insert(name, (path, kind));
            }
        }
    }

    Ok(listing)
}
