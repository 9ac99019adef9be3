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

//! Report parsing benchmarks.
//!
//! Measures table extraction and full report parsing on a synthetic report
//! shaped like the harness output, padded with log noise of growing size.

use benchtab_core::{parse_report, parse_scores, to_mib_per_sec};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const TABLE: &str = "\
+----------+----------------+--------------+
| Category | Function       | Score        |
+==========+================+==============+
| CPU      | BLAKE2-256     | 1.02 GiB/s   |
|----------+----------------+--------------|
| CPU      | SR25519-Verify | 683.20 KiB/s |
|----------+----------------+--------------|
| Memory   | Copy           | 13.47 GiB/s  |
|----------+----------------+--------------|
| Disk     | Seq Write      | 1.63 GiB/s   |
|----------+----------------+--------------|
| Disk     | Rnd Write      | 712.24 MiB/s |
+----------+----------------+--------------+
";

fn report_with_noise(noise_lines: usize) -> String {
    let mut report = String::from("CPU before: 2.5\n");
    for i in 0..noise_lines {
        report.push_str(&format!("2022-06-01 12:00:{:02} INFO benchmark step {}\n", i % 60, i));
    }
    report.push_str(TABLE);
    report.push_str("CPU after: 98.0\n");
    report
}

fn bench_unit_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_mib_per_sec");
    for (name, cell) in [("kib", " 683.20 KiB/s "), ("gib", " 13.47 GiB/s ")] {
        group.bench_function(name, |b| b.iter(|| to_mib_per_sec(black_box(cell))));
    }
    group.finish();
}

fn bench_parse_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_report");
    for noise in [0usize, 100, 10_000] {
        let report = report_with_noise(noise);
        group.throughput(Throughput::Bytes(report.len() as u64));
        group.bench_with_input(BenchmarkId::new("scores", noise), &report, |b, r| {
            b.iter(|| parse_scores(black_box(r)))
        });
        group.bench_with_input(BenchmarkId::new("full", noise), &report, |b, r| {
            b.iter(|| parse_report(black_box(r)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unit_conversion, bench_parse_report);
criterion_main!(benches);
