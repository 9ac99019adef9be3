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

//! Moving processed run groups into the archive tree.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::CliError;

/// Move `source` to `destination`.
///
/// A missing destination is created with a single rename. An existing one
/// (a group that was archived before) receives the source entries one by
/// one, replacing same-named files, and the emptied source is removed.
/// Every entry is checked with [`check_merge`] before the first one moves.
///
/// # Errors
///
/// [`CliError::Archive`] if a rename fails or a file and a directory would
/// swap places.
pub fn relocate_group(source: &Path, destination: &Path) -> Result<(), CliError> {
    if !destination.exists() {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| CliError::archive(source, destination, e))?;
        }
        fs::rename(source, destination).map_err(|e| CliError::archive(source, destination, e))?;
        debug!(from = %source.display(), to = %destination.display(), "archived group");
        return Ok(());
    }

    check_merge(source, destination)?;
    merge_into(source, destination)?;
    debug!(from = %source.display(), to = %destination.display(), "merged group into archive");
    Ok(())
}

/// Check that `source` can be merged into `destination` without moving
/// anything.
///
/// A missing destination always passes. Otherwise no source file may land
/// on an archived directory and no source directory on an archived file.
///
/// # Errors
///
/// [`CliError::Archive`] naming the first clashing pair.
pub fn check_merge(source: &Path, destination: &Path) -> Result<(), CliError> {
    if !destination.exists() {
        return Ok(());
    }

    let entries = fs::read_dir(source).map_err(|e| CliError::archive(source, destination, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| CliError::archive(source, destination, e))?;
        let from = entry.path();
        let to = destination.join(entry.file_name());

        match (from.is_dir(), to.is_dir()) {
            (true, true) => check_merge(&from, &to)?,
            (true, false) if to.exists() => {
                return Err(CliError::archive(&from, &to, "destination is an archived file"));
            }
            (false, true) => {
                return Err(CliError::archive(
                    &from,
                    &to,
                    "destination is an archived directory",
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

fn merge_into(source: &Path, destination: &Path) -> Result<(), CliError> {
    let entries = fs::read_dir(source).map_err(|e| CliError::archive(source, destination, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| CliError::archive(source, destination, e))?;
        let from = entry.path();
        let to = destination.join(entry.file_name());

        if from.is_dir() && to.is_dir() {
            merge_into(&from, &to)?;
        } else {
            fs::rename(&from, &to).map_err(|e| CliError::archive(&from, &to, e))?;
        }
    }

    fs::remove_dir(source).map_err(|e| CliError::archive(source, destination, e))
}
