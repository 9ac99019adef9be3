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

//! Per-group outcomes of an export run.
//!
//! Every discovered group gets a [`GroupResult`], whether it was exported or
//! failed. Failures never stop the run; they are collected here and
//! reported at the end.

use std::path::PathBuf;

use colored::Colorize;

use crate::discover::RunGroup;
use crate::error::CliError;

/// What exporting one group produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupOutcome {
    /// Number of dataset rows.
    pub records: usize,
    /// Written CSV file; `None` on a dry run.
    pub csv_path: Option<PathBuf>,
    /// Written columnar file; `None` on a dry run.
    pub columnar_path: Option<PathBuf>,
    /// Archive location; `None` on a dry run.
    pub archived_to: Option<PathBuf>,
}

/// Result of processing a single group.
#[derive(Debug)]
pub struct GroupResult {
    pub group: RunGroup,
    pub result: Result<GroupOutcome, CliError>,
}

impl GroupResult {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Aggregated results of an export run.
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub results: Vec<GroupResult>,
    /// Total processing time in milliseconds
    pub elapsed_ms: u128,
}

impl ExportSummary {
    pub fn new(results: Vec<GroupResult>, elapsed_ms: u128) -> Self {
        Self { results, elapsed_ms }
    }

    pub fn total_groups(&self) -> usize {
        self.results.len()
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(GroupResult::is_failure)
    }

    /// Rows written across all exported groups.
    pub fn records_written(&self) -> usize {
        self.results
            .iter()
            .filter_map(|r| r.result.as_ref().ok())
            .map(|o| o.records)
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &GroupResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Print a colored summary to stdout.
    pub fn print_summary(&self, dry_run: bool) {
        let title = if dry_run { "Export (dry run)" } else { "Export" };

        println!();
        println!("{}", "═".repeat(60).bright_blue());
        println!(
            "{} {}",
            "Benchmark Export:".bright_blue().bold(),
            title.bright_white()
        );
        println!("{}", "═".repeat(60).bright_blue());
        println!(
            "  {} {}",
            "Groups:".bright_cyan(),
            self.total_groups().to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Exported:".green().bold(),
            self.success_count().to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Failed:".red().bold(),
            self.failure_count().to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Records:".bright_cyan(),
            self.records_written().to_string().bright_white()
        );
        println!(
            "  {} {:.2}s",
            "Elapsed:".bright_cyan(),
            self.elapsed_ms as f64 / 1000.0
        );

        if self.has_failures() {
            println!();
            println!("{}", "Failed groups:".red().bold());
            for failure in self.failures() {
                if let Err(e) = &failure.result {
                    println!("  {} {}", failure.group.label().yellow(), e);
                }
            }
        }
        println!("{}", "═".repeat(60).bright_blue());
    }
}
