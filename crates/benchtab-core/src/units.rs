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

//! Throughput unit normalization.
//!
//! Report cells carry a decimal value followed by a binary-prefixed rate
//! unit, e.g. `"  1.23 GiB/s "`. Every value is rescaled to a MiB/s
//! equivalent using decimal factors between prefixes, matching the
//! historical datasets.

use crate::error::{ParseError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+-]?\d+\.\d+").expect("decimal pattern is valid"));

/// Rate unit recognized in a throughput cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateUnit {
    KiBPerSec,
    MiBPerSec,
    GiBPerSec,
}

impl RateUnit {
    const ALL: [RateUnit; 3] = [RateUnit::KiBPerSec, RateUnit::MiBPerSec, RateUnit::GiBPerSec];

    /// Suffix as written in reports.
    pub fn suffix(self) -> &'static str {
        match self {
            RateUnit::KiBPerSec => "KiB/s",
            RateUnit::MiBPerSec => "MiB/s",
            RateUnit::GiBPerSec => "GiB/s",
        }
    }

    /// Factor that converts a value in this unit to MiB/s.
    pub fn to_mib_factor(self) -> f64 {
        match self {
            RateUnit::KiBPerSec => 1.0 / 1000.0,
            RateUnit::MiBPerSec => 1.0,
            RateUnit::GiBPerSec => 1000.0,
        }
    }

    /// Find the single unit suffix contained in `cell`.
    ///
    /// More than one suffix in the same cell is rejected as ambiguous.
    pub fn detect(cell: &str) -> Result<RateUnit> {
        let mut found = RateUnit::ALL
            .into_iter()
            .filter(|unit| cell.contains(unit.suffix()));

        match (found.next(), found.next()) {
            (Some(unit), None) => Ok(unit),
            (None, _) => Err(ParseError::malformed(
                cell.trim(),
                "no KiB/s, MiB/s or GiB/s unit suffix",
            )),
            (Some(first), Some(second)) => Err(ParseError::malformed(
                cell.trim(),
                format!(
                    "ambiguous unit: both {} and {} present",
                    first.suffix(),
                    second.suffix()
                ),
            )),
        }
    }
}

/// Convert a throughput cell to MiB/s.
///
/// Only the first decimal literal (`[sign]digits.digits`) in the cell is
/// used.
///
/// # Errors
///
/// Returns [`ParseError::MalformedMetric`] when the cell has no decimal
/// literal, no unit suffix, or more than one unit suffix.
///
/// # Examples
///
/// ```
/// use benchtab_core::to_mib_per_sec;
///
/// assert_eq!(to_mib_per_sec("12.5MiB/s").unwrap(), 12.5);
/// assert_eq!(to_mib_per_sec(" 1.2 GiB/s ").unwrap(), 1200.0);
/// assert!(to_mib_per_sec("garbage").is_err());
/// ```
pub fn to_mib_per_sec(cell: &str) -> Result<f64> {
    let literal = DECIMAL
        .find(cell)
        .ok_or_else(|| ParseError::malformed(cell.trim(), "no decimal value"))?;
    let unit = RateUnit::detect(cell)?;

    let raw: f64 = literal
        .as_str()
        .parse()
        .map_err(|e| ParseError::malformed(cell.trim(), format!("bad decimal value: {}", e)))?;

    Ok(raw * unit.to_mib_factor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_mib_is_identity() {
        assert_close(to_mib_per_sec("12.5MiB/s").unwrap(), 12.5);
    }

    #[test]
    fn test_kib_divides_by_thousand() {
        assert_close(to_mib_per_sec("3.0KiB/s").unwrap(), 0.003);
    }

    #[test]
    fn test_gib_multiplies_by_thousand() {
        assert_close(to_mib_per_sec("1.2GiB/s").unwrap(), 1200.0);
    }

    #[test]
    fn test_padded_cell() {
        assert_close(to_mib_per_sec("   845.72 MiB/s  ").unwrap(), 845.72);
    }

    #[test]
    fn test_negative_value() {
        assert_close(to_mib_per_sec("-2.5 MiB/s").unwrap(), -2.5);
    }

    #[test]
    fn test_first_number_wins() {
        assert_close(to_mib_per_sec("1.5 MiB/s (min 0.9)").unwrap(), 1.5);
    }

    #[test]
    fn test_garbage_is_malformed() {
        let err = to_mib_per_sec("garbage").unwrap_err();
        assert!(matches!(err, ParseError::MalformedMetric { .. }));
    }

    #[test]
    fn test_missing_unit_is_malformed() {
        let err = to_mib_per_sec("12.5 MB/s").unwrap_err();
        assert!(err.to_string().contains("unit suffix"));
    }

    #[test]
    fn test_integer_without_fraction_is_malformed() {
        assert!(to_mib_per_sec("12 MiB/s").is_err());
    }

    #[test]
    fn test_two_units_are_ambiguous() {
        let err = to_mib_per_sec("1.0 KiB/s / 2.0 MiB/s").unwrap_err();
        assert!(err.to_string().contains("ambiguous"));
    }

    proptest! {
        #[test]
        fn prop_gib_is_thousand_mib(whole in 0u32..100_000, frac in 0u32..100) {
            let text = format!("{}.{:02}", whole, frac);
            let mib = to_mib_per_sec(&format!("{} MiB/s", text)).unwrap();
            let gib = to_mib_per_sec(&format!("{} GiB/s", text)).unwrap();
            prop_assert!((gib - mib * 1000.0).abs() <= 1e-6 * gib.abs().max(1.0));
        }

        #[test]
        fn prop_never_panics(cell in ".{0,40}") {
            let _ = to_mib_per_sec(&cell);
        }
    }
}
