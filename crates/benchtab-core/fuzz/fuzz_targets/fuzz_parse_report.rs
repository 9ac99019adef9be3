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

#![no_main]

//! Fuzz target for report parsing.
//!
//! Feeds arbitrary text through [`parse_report`]. Any input must yield
//! `Ok` or a `ParseError`, never a panic. When parsing succeeds, the
//! extracted metrics must satisfy the structural guarantees of the format.
//!
//! # Running the Fuzzer
//!
//! ```bash
//! # From the benchtab-core directory
//! cargo fuzz run fuzz_parse_report
//!
//! # Bounded run
//! cargo fuzz run fuzz_parse_report -- -max_len=65536 -max_total_time=300
//! ```

use benchtab_core::{parse_report, pick_cpu_utilization, METRIC_COUNT};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(Some(metrics)) = parse_report(text) {
        assert_eq!(metrics.throughput.values().len(), METRIC_COUNT);
        assert!(text.contains('|'));
        if metrics.cpu.is_some() {
            assert!(text.lines().any(|l| l.starts_with("CPU")));
        }

        // CPU selection alone agrees with the full parse.
        let alone = pick_cpu_utilization(text).ok().flatten();
        assert_eq!(metrics.cpu.map(f64::to_bits), alone.map(f64::to_bits));
    }
});
