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

//! Discover command - list run groups

use std::path::Path;

use colored::Colorize;

use crate::discover::discover_groups;
use crate::error::CliError;

/// Print every run group under `input_root`, one per line.
///
/// Each line is `<version> <host> <date> <path>`.
pub fn discover(input_root: &Path) -> Result<(), CliError> {
    let groups = discover_groups(input_root)?;

    if groups.is_empty() {
        eprintln!(
            "{} no run groups under '{}'",
            "Note:".yellow(),
            input_root.display()
        );
    }

    for group in &groups {
        println!("{}", group);
    }
    Ok(())
}
