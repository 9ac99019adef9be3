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

//! Report, build-options and record types.

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Number of throughput rows the report format defines.
pub const METRIC_COUNT: usize = 5;

/// Dataset column names of the throughput metrics, in table row order.
pub const METRIC_NAMES: [&str; METRIC_COUNT] =
    ["BLAKE2-256", "SR25519-Verify", "Copy", "Seq_Write", "Rnd_Write"];

/// A scalar value of a build option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(n) => write!(f, "{}", n),
            OptionValue::Float(x) => write!(f, "{}", x),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

/// How a build was compiled: toolchain, architecture, codegen, LTO, profile...
pub type BuildOptions = BTreeMap<String, OptionValue>;

/// Shape of a `bench_<build>.json` file.
#[derive(Debug, Deserialize)]
pub struct BuildOptionsFile {
    pub build_options: BuildOptions,
}

/// Defaults for the build identifiers that never get a build-options file.
///
/// Both `official` and `docker` resolve to the same options. These entries
/// replace any parsed file of the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservedBuilds {
    options: BuildOptions,
}

impl ReservedBuilds {
    /// Identifiers that always resolve to the reserved options.
    pub const IDENTIFIERS: [&'static str; 2] = ["official", "docker"];

    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Insert the reserved entries into `catalog`, overwriting existing ones.
    pub fn apply(&self, catalog: &mut BTreeMap<String, BuildOptions>) {
        for id in Self::IDENTIFIERS {
            catalog.insert(id.to_string(), self.options.clone());
        }
    }
}

impl Default for ReservedBuilds {
    fn default() -> Self {
        let options = BuildOptions::from([
            ("toolchain".to_string(), OptionValue::from("nightly")),
            ("arch".to_string(), OptionValue::from("none")),
            ("codegen".to_string(), OptionValue::from(true)),
            ("lto_ldd".to_string(), OptionValue::from(false)),
            ("profile".to_string(), OptionValue::from("production")),
        ]);
        Self { options }
    }
}

/// The five throughput metrics of one report, in MiB/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThroughputMetrics {
    pub hash: f64,
    pub sig_verify: f64,
    pub copy: f64,
    pub seq_write: f64,
    pub rnd_write: f64,
}

impl ThroughputMetrics {
    /// Values in table row order.
    pub fn values(&self) -> [f64; METRIC_COUNT] {
        [self.hash, self.sig_verify, self.copy, self.seq_write, self.rnd_write]
    }
}

impl TryFrom<&[f64]> for ThroughputMetrics {
    type Error = ParseError;

    fn try_from(scores: &[f64]) -> Result<Self> {
        match *scores {
            [hash, sig_verify, copy, seq_write, rnd_write] => Ok(Self {
                hash,
                sig_verify,
                copy,
                seq_write,
                rnd_write,
            }),
            _ => Err(ParseError::MetricCountMismatch {
                expected: METRIC_COUNT,
                actual: scores.len(),
            }),
        }
    }
}

/// Raw content of one report file.
#[derive(Debug, Clone)]
pub struct RawReport {
    pub build: String,
    pub run: u32,
    /// Modification time, seconds since the Unix epoch.
    pub modified: i64,
    pub text: String,
}

/// Metrics extracted from a single report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetrics {
    /// `None` when the report has no `CPU` sample line.
    pub cpu: Option<f64>,
    pub throughput: ThroughputMetrics,
}

/// One row of the output dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub host: String,
    pub date: String,
    pub version: String,
    pub run: u32,
    pub build: String,
    pub cpu: Option<f64>,
    pub throughput: ThroughputMetrics,
    pub options: BuildOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_from_five_scores() {
        let m = ThroughputMetrics::try_from(&[1.0, 2.0, 3.0, 4.0, 5.0][..]).unwrap();
        assert_eq!(m.hash, 1.0);
        assert_eq!(m.rnd_write, 5.0);
        assert_eq!(m.values(), [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_metrics_count_mismatch() {
        for scores in [&[1.0, 2.0, 3.0, 4.0][..], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0][..]] {
            let err = ThroughputMetrics::try_from(scores).unwrap_err();
            assert!(matches!(
                err,
                ParseError::MetricCountMismatch { expected: 5, actual } if actual == scores.len()
            ));
        }
    }

    #[test]
    fn test_reserved_builds_override() {
        let mut catalog = BTreeMap::new();
        catalog.insert(
            "official".to_string(),
            BuildOptions::from([("profile".to_string(), OptionValue::from("release"))]),
        );

        let reserved = ReservedBuilds::default();
        reserved.apply(&mut catalog);

        assert_eq!(catalog["official"], *reserved.options());
        assert_eq!(catalog["docker"], *reserved.options());
        assert_eq!(catalog["official"]["profile"], OptionValue::from("production"));
    }

    #[test]
    fn test_build_options_file_parses_mixed_scalars() {
        let json = r#"{"build_options": {"toolchain": "stable", "codegen": false, "jobs": 8}}"#;
        let file: BuildOptionsFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.build_options["toolchain"], OptionValue::from("stable"));
        assert_eq!(file.build_options["codegen"], OptionValue::Bool(false));
        assert_eq!(file.build_options["jobs"], OptionValue::Int(8));
    }

    #[test]
    fn test_build_options_file_requires_field() {
        assert!(serde_json::from_str::<BuildOptionsFile>(r#"{"options": {}}"#).is_err());
    }

    #[test]
    fn test_build_options_rejects_nested_values() {
        let json = r#"{"build_options": {"flags": ["a", "b"]}}"#;
        assert!(serde_json::from_str::<BuildOptionsFile>(json).is_err());
    }
}
