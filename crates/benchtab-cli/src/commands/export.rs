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

//! Export command - batch dataset export

use crate::cli::RunStatus;
use crate::config::ExportConfig;
use crate::error::CliError;
use crate::export::DatasetExporter;

/// Run a full export and print the summary.
///
/// # Errors
///
/// Returns `Err` if the input root cannot be read or the output directories
/// cannot be created. Failed groups produce [`RunStatus::Partial`].
///
/// # Examples
///
/// ```no_run
/// use benchtab_cli::commands::export;
/// use benchtab_cli::config::ExportConfig;
///
/// # fn main() -> Result<(), benchtab_cli::error::CliError> {
/// export(ExportConfig::default())?;
/// # Ok(())
/// # }
/// ```
pub fn export(config: ExportConfig) -> Result<RunStatus, CliError> {
    let dry_run = config.dry_run;
    let summary = DatasetExporter::new(config).run()?;
    summary.print_summary(dry_run);

    if summary.has_failures() {
        Ok(RunStatus::Partial)
    } else {
        Ok(RunStatus::Complete)
    }
}
