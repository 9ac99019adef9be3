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

//! Run group discovery.
//!
//! The harness writes one directory per `<version>/<host>/<date>` triple
//! under the input root. Only directories at exactly depth three count as
//! run groups; stray files and shallower directories are ignored.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::CliError;

/// Depth of a run group directory below the input root.
const GROUP_DEPTH: usize = 3;

/// One `<version>/<host>/<date>` directory of reports.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunGroup {
    pub version: String,
    pub host: String,
    pub date: String,
    /// Full path of the group directory.
    pub path: PathBuf,
}

impl RunGroup {
    /// Output file stem: `{version}_{host}_{date}`.
    pub fn label(&self) -> String {
        format!("{}_{}_{}", self.version, self.host, self.date)
    }

    /// Path of the group relative to the input root.
    pub fn relative_path(&self) -> PathBuf {
        [&self.version, &self.host, &self.date].iter().collect()
    }
}

impl fmt::Display for RunGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.version,
            self.host,
            self.date,
            self.path.display()
        )
    }
}

/// List every run group under `root`, sorted by version, host and date.
///
/// # Errors
///
/// - [`CliError::InvalidInput`] if `root` is not a directory
/// - [`CliError::Io`] if the tree cannot be walked
pub fn discover_groups(root: &Path) -> Result<Vec<RunGroup>, CliError> {
    if !root.is_dir() {
        return Err(CliError::invalid_input(format!(
            "input root '{}' is not a directory",
            root.display()
        )));
    }

    let mut groups = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(GROUP_DEPTH)
        .max_depth(GROUP_DEPTH)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            CliError::Io {
                path,
                message: e.to_string(),
            }
        })?;

        if !entry.file_type().is_dir() {
            debug!(path = %entry.path().display(), "skipping non-directory entry");
            continue;
        }

        match group_from_path(root, entry.path()) {
            Some(group) => groups.push(group),
            None => debug!(path = %entry.path().display(), "skipping non UTF-8 group path"),
        }
    }

    Ok(groups)
}

fn group_from_path(root: &Path, path: &Path) -> Option<RunGroup> {
    let relative = path.strip_prefix(root).ok()?;
    let mut parts = relative.iter().map(|c| c.to_str());
    let version = parts.next()??.to_string();
    let host = parts.next()??.to_string();
    let date = parts.next()??.to_string();

    Some(RunGroup {
        version,
        host,
        date,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discovers_depth_three_directories_only() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("v2/host-b/2024-02-01")).unwrap();
        fs::create_dir_all(root.join("v1/host-a/2024-01-01")).unwrap();
        fs::create_dir_all(root.join("v1/host-a/2024-01-02")).unwrap();
        fs::create_dir_all(root.join("v3/lonely")).unwrap();
        fs::write(root.join("v1/host-a/notes.txt"), "x").unwrap();
        fs::write(root.join("v1/host-a/2024-01-01/bench_a_run_1.txt"), "").unwrap();

        let groups = discover_groups(root).unwrap();
        let labels: Vec<_> = groups.iter().map(RunGroup::label).collect();
        assert_eq!(
            labels,
            vec![
                "v1_host-a_2024-01-01",
                "v1_host-a_2024-01-02",
                "v2_host-b_2024-02-01"
            ]
        );
        assert_eq!(groups[0].path, root.join("v1/host-a/2024-01-01"));
    }

    #[test]
    fn test_empty_root() {
        let dir = tempdir().unwrap();
        assert!(discover_groups(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root() {
        let dir = tempdir().unwrap();
        let err = discover_groups(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn test_relative_path() {
        let group = RunGroup {
            version: "v1".into(),
            host: "h".into(),
            date: "d".into(),
            path: PathBuf::from("output/v1/h/d"),
        };
        assert_eq!(group.relative_path(), PathBuf::from("v1/h/d"));
    }
}
