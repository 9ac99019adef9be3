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

//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use benchtab_columnar::ColumnarFormat;
use clap::{Args, Subcommand};

use crate::commands;
use crate::config::ExportConfig;
use crate::error::CliError;

/// How a successful command run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Everything that was attempted succeeded.
    Complete,
    /// At least one run group failed; others may have been exported.
    Partial,
}

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use benchtab_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Export every run group to CSV and columnar datasets
    ///
    /// Walks `<input-root>/<version>/<host>/<date>`, writes
    /// `<output-root>/csv/<version>_<host>_<date>.csv` and the columnar file
    /// under `<output-root>/todo/`, then moves each exported group to the
    /// archive root. Groups that fail are left in place.
    Export(ExportArgs),

    /// List the run groups found under the input root
    Discover {
        /// Root of the benchmark output tree
        #[arg(long, value_name = "DIR", default_value = "output")]
        input_root: PathBuf,
    },

    /// Parse one report file and print its metrics as JSON
    Inspect {
        /// Report file (`bench_<build>_run_<n>.txt`)
        #[arg(value_name = "REPORT")]
        report: PathBuf,
    },
}

/// Arguments of the `export` command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Root of the benchmark output tree
    #[arg(long, value_name = "DIR", default_value = "output")]
    pub input_root: PathBuf,

    /// Dataset output root (receives csv/ and todo/)
    #[arg(long, value_name = "DIR", default_value = "processed")]
    pub output_root: PathBuf,

    /// Archive root for exported run groups
    #[arg(long, value_name = "DIR", default_value = "processed/old")]
    pub archive_root: PathBuf,

    /// Columnar output format (feather, parquet)
    #[arg(short, long, default_value = "feather")]
    pub format: ColumnarFormat,

    /// Log what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

impl From<ExportArgs> for ExportConfig {
    fn from(args: ExportArgs) -> Self {
        Self {
            input_root: args.input_root,
            output_root: args.output_root,
            archive_root: args.archive_root,
            columnar_format: args.format,
            dry_run: args.dry_run,
        }
    }
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` for failures that stop the command as a whole. Group
    /// failures during `export` yield [`RunStatus::Partial`] instead.
    pub fn execute(self) -> Result<RunStatus, CliError> {
        match self {
            Commands::Export(args) => commands::export(args.into()),
            Commands::Discover { input_root } => {
                commands::discover(&input_root)?;
                Ok(RunStatus::Complete)
            }
            Commands::Inspect { report } => {
                commands::inspect(&report)?;
                Ok(RunStatus::Complete)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_export_defaults_match_config() {
        let cli = TestCli::parse_from(["benchtab", "export"]);
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(ExportConfig::from(args), ExportConfig::default());
    }

    #[test]
    fn test_export_flags() {
        let cli = TestCli::parse_from([
            "benchtab",
            "export",
            "--input-root",
            "in",
            "--format",
            "parquet",
            "--dry-run",
        ]);
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        let config = ExportConfig::from(args);
        assert_eq!(config.input_root, PathBuf::from("in"));
        assert_eq!(config.columnar_format, ColumnarFormat::Parquet);
        assert!(config.dry_run);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(TestCli::try_parse_from(["benchtab", "export", "--format", "orc"]).is_err());
    }
}
