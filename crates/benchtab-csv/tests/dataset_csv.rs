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

//! Integration tests for benchtab-csv.

use benchtab_core::{
    BuildOptions, Dataset, MetricRecord, OptionValue, ReservedBuilds, ThroughputMetrics,
};
use benchtab_csv::to_csv_writer;

fn to_csv(ds: &Dataset) -> String {
    let mut out = Vec::new();
    to_csv_writer(ds, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn record(build: &str, run: u32, cpu: Option<f64>, options: BuildOptions) -> MetricRecord {
    MetricRecord {
        host: "polka-01".to_string(),
        date: "2022_06_01_1200".to_string(),
        version: "v0.9.24".to_string(),
        run,
        build: build.to_string(),
        cpu,
        throughput: ThroughputMetrics::try_from(&[1020.0, 0.6832, 13470.0, 1630.0, 712.24][..])
            .unwrap(),
        options,
    }
}

#[test]
fn test_records_to_csv() {
    let reserved = ReservedBuilds::default();
    let ds = Dataset::from_records(&[
        record("official", 1, Some(97.0), reserved.options().clone()),
        record("official", 2, None, reserved.options().clone()),
    ]);

    let csv = to_csv(&ds);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "index,host,date,ver,nb_run,nb_build,cpu,BLAKE2-256,SR25519-Verify,Copy,Seq_Write,Rnd_Write,\
         arch,codegen,lto_ldd,profile,toolchain"
    );
    assert_eq!(
        lines[1],
        "0,polka-01,2022_06_01_1200,v0.9.24,1,official,97.0,1020.0,0.6832,13470.0,1630.0,712.24,\
         none,true,false,production,nightly"
    );
    assert!(lines[2].starts_with("1,polka-01,2022_06_01_1200,v0.9.24,2,official,,"));
}

#[test]
fn test_empty_dataset_is_header_only() {
    let csv = to_csv(&Dataset::from_records(&[]));
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn test_heterogeneous_options_leave_blanks() {
    let a = BuildOptions::from([("arch".to_string(), OptionValue::from("native"))]);
    let b = BuildOptions::from([("jobs".to_string(), OptionValue::Int(16))]);
    let ds = Dataset::from_records(&[record("a", 1, Some(1.0), a), record("b", 1, Some(1.0), b)]);

    let csv = to_csv(&ds);
    let lines: Vec<&str> = csv.lines().collect();

    assert!(lines[0].ends_with(",arch,jobs"));
    assert!(lines[1].ends_with(",native,"));
    assert!(lines[2].ends_with(",,16"));
}
