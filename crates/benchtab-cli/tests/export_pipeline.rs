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

//! End-to-end export runs over a temporary benchmark output tree.

use std::fs::{self, File};
use std::path::Path;

use arrow::array::{Array, Float64Array, StringArray};
use arrow::ipc::reader::FileReader;
use tempfile::{tempdir, TempDir};

use benchtab_cli::config::ExportConfig;
use benchtab_cli::export::DatasetExporter;

fn report(rnd_write: &str, cpu_after: &str) -> String {
    format!(
        "\
Running benchmarks...
CPU utilization before: 5.25
+----------+----------------+--------------+
| Category | Function       | Score        |
+==========+================+==============+
| CPU      | BLAKE2-256     | 1.02 GiB/s   |
| CPU      | SR25519-Verify | 683.20 KiB/s |
| Memory   | Copy           | 13.47 GiB/s  |
| Disk     | Seq Write      | 1.63 GiB/s   |
| Disk     | Rnd Write      | {rnd_write} |
+----------+----------------+--------------+
CPU utilization after: {cpu_after}
"
    )
}

struct Tree {
    dir: TempDir,
}

impl Tree {
    fn new() -> Self {
        Self {
            dir: tempdir().unwrap(),
        }
    }

    fn config(&self) -> ExportConfig {
        let root = self.dir.path();
        ExportConfig {
            input_root: root.join("output"),
            output_root: root.join("processed"),
            archive_root: root.join("processed").join("old"),
            ..ExportConfig::default()
        }
    }

    fn group(&self, rel: &str) -> std::path::PathBuf {
        let path = self.dir.path().join("output").join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_single_group_produces_one_row_per_report() {
    let tree = Tree::new();
    let group = tree.group("v0.9.24/polka-01/2022_06_01");
    write(
        &group,
        "bench_lto_fat.json",
        r#"{"build_options": {"toolchain": "stable", "arch": "native", "codegen": false, "lto_ldd": true, "profile": "release"}}"#,
    );
    write(&group, "bench_lto_fat_run_1.txt", &report("712.24 MiB/s", "97.00"));
    write(&group, "bench_official_run_1.txt", &report("1.00 GiB/s", "42.5"));

    let config = tree.config();
    let summary = DatasetExporter::new(config.clone()).run().unwrap();
    assert_eq!(summary.success_count(), 1);
    assert_eq!(summary.records_written(), 2);

    let csv = fs::read_to_string(config.csv_dir().join("v0.9.24_polka-01_2022_06_01.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "index,host,date,ver,nb_run,nb_build,cpu,BLAKE2-256,SR25519-Verify,Copy,Seq_Write,Rnd_Write,arch,codegen,lto_ldd,profile,toolchain"
    );
    assert_eq!(
        lines[1],
        "0,polka-01,2022_06_01,v0.9.24,1,lto_fat,97.0,1020.0,0.6832,13470.0,1630.0,712.24,native,false,true,release,stable"
    );
    assert_eq!(
        lines[2],
        "1,polka-01,2022_06_01,v0.9.24,1,official,42.5,1020.0,0.6832,13470.0,1630.0,1000.0,none,true,false,production,nightly"
    );

    assert!(!group.exists());
    assert!(config
        .archive_root
        .join("v0.9.24/polka-01/2022_06_01/bench_lto_fat.json")
        .is_file());
}

#[test]
fn test_feather_output_carries_group_metadata() {
    let tree = Tree::new();
    let group = tree.group("v1/host-a/2023-03-03");
    write(&group, "bench_docker_run_1.txt", &report("700.00 MiB/s", "80.0"));
    write(&group, "bench_docker_run_2.txt", &report("710.00 MiB/s", "81.0"));

    let config = tree.config();
    DatasetExporter::new(config.clone()).run().unwrap();

    let file = File::open(config.todo_dir().join("v1_host-a_2023-03-03.feather")).unwrap();
    let reader = FileReader::try_new(file, None).unwrap();
    let schema = reader.schema();
    assert_eq!(schema.metadata()["benchtab:version"], "v1");
    assert_eq!(schema.metadata()["benchtab:host"], "host-a");
    assert_eq!(schema.metadata()["benchtab:date"], "2023-03-03");

    let batches: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
    let batch = &batches[0];
    assert_eq!(batch.num_rows(), 2);

    let rnd = batch
        .column(schema.index_of("Rnd_Write").unwrap())
        .as_any()
        .downcast_ref::<Float64Array>()
        .unwrap();
    assert_eq!(rnd.value(1), 710.0);

    let build = batch
        .column(schema.index_of("nb_build").unwrap())
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap();
    assert_eq!(build.value(0), "docker");
}

#[test]
fn test_report_without_cpu_exports_empty_cell() {
    let tree = Tree::new();
    let group = tree.group("v1/h/d");
    let text = report("700.00 MiB/s", "1.0")
        .lines()
        .filter(|l| !l.starts_with("CPU"))
        .collect::<Vec<_>>()
        .join("\n");
    write(&group, "bench_official_run_3.txt", &text);

    let config = tree.config();
    DatasetExporter::new(config.clone()).run().unwrap();

    let csv = fs::read_to_string(config.csv_dir().join("v1_h_d.csv")).unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert!(row.starts_with("0,h,d,v1,3,official,,1020.0,"));
}

#[test]
fn test_partial_failure_leaves_failed_group_in_place() {
    let tree = Tree::new();
    let good = tree.group("v1/h/2024-01-01");
    let bad = tree.group("v1/h/2024-01-02");
    write(&good, "bench_official_run_1.txt", &report("700.00 MiB/s", "50.0"));
    write(&bad, "bench_official_run_1.txt", &report("700.00 MiB/s", "50.0"));
    write(&bad, "bench_official_run_2.txt", &report("7 MiB/s", "50.0"));

    let config = tree.config();
    let summary = DatasetExporter::new(config.clone()).run().unwrap();
    assert_eq!(summary.success_count(), 1);
    assert_eq!(summary.failure_count(), 1);

    assert!(!good.exists());
    assert!(bad.join("bench_official_run_2.txt").is_file());
    assert!(config.csv_dir().join("v1_h_2024-01-01.csv").is_file());
    assert!(!config.csv_dir().join("v1_h_2024-01-02.csv").exists());

    // Fixing the report and running again picks the group up.
    write(&bad, "bench_official_run_2.txt", &report("7.00 MiB/s", "50.0"));
    let summary = DatasetExporter::new(config.clone()).run().unwrap();
    assert_eq!(summary.total_groups(), 1);
    assert_eq!(summary.records_written(), 2);
    assert!(!bad.exists());
}

#[test]
fn test_second_run_on_archived_tree_is_a_no_op() {
    let tree = Tree::new();
    let group = tree.group("v1/h/d");
    write(&group, "bench_official_run_1.txt", &report("700.00 MiB/s", "50.0"));

    let config = tree.config();
    DatasetExporter::new(config.clone()).run().unwrap();
    let first = fs::read(config.csv_dir().join("v1_h_d.csv")).unwrap();

    let summary = DatasetExporter::new(config.clone()).run().unwrap();
    assert_eq!(summary.total_groups(), 0);
    assert_eq!(fs::read(config.csv_dir().join("v1_h_d.csv")).unwrap(), first);
}
