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

//! Benchtab CLI library: run group discovery, collection, export and archiving.
//!
//! The benchmark harness leaves one directory per
//! `<version>/<host>/<date>` under an input root, each holding text reports
//! (`bench_<build>_run_<n>.txt`) and build-options files
//! (`bench_<build>.json`). This crate turns each such run group into one CSV
//! file and one columnar file, then moves the group into an archive tree.
//!
//! # Pipeline
//!
//! - [`discover`]: find run groups
//! - [`collect`]: read a group's reports and build options into records
//! - [`export`]: write the datasets atomically and archive the group
//! - [`archive`]: relocate a group, merging into an existing archive entry
//!
//! # Commands
//!
//! - **export**: full batch run; exit code `2` if any group failed
//! - **discover**: list run groups
//! - **inspect**: print the metrics of a single report as JSON
//!
//! # Examples
//!
//! ```no_run
//! use benchtab_cli::config::ExportConfig;
//! use benchtab_cli::export::DatasetExporter;
//!
//! # fn main() -> Result<(), benchtab_cli::error::CliError> {
//! let summary = DatasetExporter::new(ExportConfig::default()).run()?;
//! println!("{} groups exported", summary.success_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Errors inside a run group are recorded per group and never abort the
//! run. Only a missing input root or unwritable output directories end a
//! run early.

pub mod archive;
pub mod cli;
pub mod collect;
pub mod commands;
pub mod config;
pub mod discover;
pub mod error;
pub mod export;
pub mod summary;
