//! Integration tests for the hostfacts collector
//!
//! Most tests build a fake host tree in a temporary directory and point the
//! collector at it. The live-host test is ignored by default:
//!
//! ```bash
//! cargo test -p hostfacts --test integration -- --ignored
//! ```

use std::path::Path;

use hostfacts::{Config, DiskUsage, Field, HostFactCollector, Report, SystemInformation};
use tempfile::TempDir;

const MISSING_TOOL: &str = "hostfacts-integration-missing-tool";

struct FakeHost {
    dir: TempDir,
}

impl FakeHost {
    fn new() -> Self {
        let host = Self {
            dir: tempfile::tempdir().expect("tempdir"),
        };
        std::fs::create_dir_all(host.proc_dir()).unwrap();
        std::fs::create_dir_all(host.dmi_dir()).unwrap();
        host.write_proc("cpuinfo", "processor\t: 0\nprocessor\t: 1\nprocessor\t: 2\nprocessor\t: 3\n");
        host.write_proc(
            "meminfo",
            "MemTotal:        8388608 kB\nMemFree:            2049 kB\nMemAvailable:    6291456 kB\n",
        );
        host
    }

    fn proc_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("proc")
    }

    fn dmi_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("dmi")
    }

    fn write_proc(&self, name: &str, content: &str) {
        std::fs::write(self.proc_dir().join(name), content).unwrap();
    }

    fn write_dmi(&self, name: &str, content: &str) {
        std::fs::write(self.dmi_dir().join(name), content).unwrap();
    }

    fn collector(&self) -> HostFactCollector {
        let mut config = Config::default();
        config.paths.proc_dir = self.proc_dir();
        config.paths.dmi_dir = self.dmi_dir();
        config.paths.release_file = self.dir.path().join("redhat-release");
        config.tools.release_query = MISSING_TOOL.to_string();
        config.tools.pci_list = MISSING_TOOL.to_string();
        config.disk.mount_point = Path::new("/hostfacts/integration/unmounted").to_path_buf();
        HostFactCollector::new(config)
    }
}

fn single(report: Report) -> String {
    match report.system_information {
        SystemInformation::Single(line) => line,
        other => panic!("expected a single fact, got {other:?}"),
    }
}

#[tokio::test]
async fn mem_total_round_trip() {
    let host = FakeHost::new();
    let report = host.collector().collect("mem_total").await.unwrap();

    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        serde_json::json!({ "system_information": "mem_total: 8192 MB" })
    );
}

#[tokio::test]
async fn memory_rounds_from_kilobytes() {
    let host = FakeHost::new();
    let collector = host.collector();

    assert_eq!(collector.mem_free_mb().await.unwrap(), 2);
    assert_eq!(collector.mem_available_mb().await.unwrap(), 6144);
}

#[tokio::test]
async fn every_selector_yields_one_prefixed_line() {
    let host = FakeHost::new();
    let collector = host.collector();

    for field in Field::FACTS {
        let report = collector.collect(field.as_str()).await.unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);

        let line = single(report);
        let prefix = format!("{}: ", field);
        assert!(line.starts_with(&prefix), "{line:?} should start with {prefix:?}");

        let value = &line[prefix.len()..];
        match field {
            Field::MemTotal | Field::MemFree | Field::MemAvailable => {
                let n = value.strip_suffix(" MB").unwrap();
                n.parse::<u64>().unwrap();
            }
            Field::DiskTotal | Field::DiskUsed | Field::DiskFree => {
                assert_eq!(value, "None GB");
            }
            Field::Cpu => assert_eq!(value, "4"),
            _ => {}
        }
    }
}

#[tokio::test]
async fn board_falls_back_to_system_vendor() {
    let host = FakeHost::new();
    host.write_dmi("sys_vendor", "Acme");
    host.write_dmi("board_name", "X1");

    assert_eq!(host.collector().baseboard().await, "Acme X1, None");
}

#[tokio::test]
async fn distro_reads_vendor_release_file() {
    let host = FakeHost::new();
    std::fs::write(
        host.dir.path().join("redhat-release"),
        "CentOS Stream release 9\n",
    )
    .unwrap();

    let line = single(host.collector().collect("distro").await.unwrap());
    assert_eq!(line, "distro: CentOS Stream release 9");
}

#[tokio::test]
async fn unavailable_disk_degrades_without_error() {
    let host = FakeHost::new();
    let collector = host.collector();

    assert_eq!(collector.disk_usage().await, DiskUsage::unavailable());

    let report = collector.collect("all").await.unwrap();
    let SystemInformation::All(sheet) = report.system_information else {
        panic!("expected the full sheet");
    };
    assert_eq!(sheet.disk_total, "None GB");
    assert_eq!(sheet.disk_used, "None GB");
    assert_eq!(sheet.disk_free, "None GB");
    assert_eq!(sheet.mem_total, "8192 MB");
    assert_eq!(sheet.cpu, "4");
}

#[tokio::test]
async fn unrecognized_selectors_report_everything() {
    let host = FakeHost::new();
    let collector = host.collector();

    let all = collector.collect("all").await.unwrap();
    for selector in ["ALL", "memory", "disk", "mem-total"] {
        let report = collector.collect(selector).await.unwrap();
        assert!(matches!(report.system_information, SystemInformation::All(_)));
        assert_eq!(
            serde_json::to_value(&report).unwrap()["system_information"]["cpu"],
            serde_json::to_value(&all).unwrap()["system_information"]["cpu"]
        );
    }
}

#[tokio::test]
async fn missing_cpuinfo_fails_the_aggregate() {
    let host = FakeHost::new();
    std::fs::remove_file(host.proc_dir().join("cpuinfo")).unwrap();

    let err = host.collector().collect_all().await.unwrap_err();
    assert!(err.to_string().contains("cpuinfo"));
}

#[tokio::test]
#[ignore = "reads the live host"]
#[cfg(target_os = "linux")]
async fn live_host_snapshot() {
    let collector = HostFactCollector::new(Config::default());
    let facts = collector.collect_all().await.unwrap();

    assert!(facts.cpu_count > 0);
    assert!(facts.mem_total_mb > 0);
    assert!(facts.mem_available_mb <= facts.mem_total_mb);
    assert!(!facts.kernel.is_empty());
    assert!(facts.board.contains(", "));
}
