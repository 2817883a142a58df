use calamine::{Data, Reader, open_workbook_auto};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rvenuereport::input::required_columns;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;

mod common;
use common::{job, read_file, rvr, sample_jobs, workspace, write_headers};

const REPORT_DIR: &str = "VEN_REPORT_06_01_25-06_30_25";

/// `report` over June 2025 with every other setting at its default. The
/// config path points at a missing file so the user's own config is ignored.
fn report_args(dir: &Path, input: &Path, format: &str) -> Vec<String> {
    let cfg = dir.join("missing.conf");
    [
        "--config",
        cfg.to_str().unwrap(),
        "report",
        "--input",
        input.to_str().unwrap(),
        "--start",
        "06/01/25",
        "--end",
        "06/30/25",
        "--out",
        dir.to_str().unwrap(),
        "--cutoff",
        "2020-01-01",
        "--format",
        format,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn test_check_reports_missing_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let headers: Vec<String> = required_columns()
        .into_iter()
        .filter(|c| c != "RMI" && c != "Dinner 3 Time")
        .collect();
    write_headers(&input, &headers);

    rvr()
        .args(["check", "--input", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("RMI").and(contains("Dinner 3 Time")));
}

#[test]
fn test_check_valid_file() {
    let (_dir, input) = workspace(&sample_jobs());

    rvr()
        .args(["check", "--input", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("4 data rows"));
}

#[test]
fn test_unsupported_input_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "hello").unwrap();

    rvr()
        .args(["check", "--input", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Unsupported input file"));
}

#[test]
fn test_report_csv_per_market() {
    let (dir, input) = workspace(&sample_jobs());

    rvr()
        .args(report_args(dir.path(), &input, "csv"))
        .assert()
        .success()
        .stdout(contains("2 report file(s) saved"));

    let hou = dir.path().join(REPORT_DIR).join("HOU_06_01_25-06_30_25.csv");
    let pdx = dir.path().join(REPORT_DIR).join("PDX_06_01_25-06_30_25.csv");

    let content = read_file(&hou);
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Job#,User,MKT,LOC#"));
    assert!(lines[1].starts_with("103,"));

    assert!(read_file(&pdx).contains(",02134,"));
}

#[test]
fn test_report_json() {
    let (dir, input) = workspace(&sample_jobs());

    rvr()
        .args(report_args(dir.path(), &input, "json"))
        .assert()
        .success();

    let path = dir.path().join(REPORT_DIR).join("PDX_06_01_25-06_30_25.json");
    let value: serde_json::Value = serde_json::from_str(&read_file(&path)).unwrap();
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Job#"], 104);
    assert_eq!(rows[0]["ZIP"], "02134");
    assert_eq!(rows[0]["MKT"], "PDX");
}

#[test]
fn test_report_xlsx() {
    let (dir, input) = workspace(&sample_jobs());

    rvr()
        .args(report_args(dir.path(), &input, "xlsx"))
        .assert()
        .success();

    let path = dir.path().join(REPORT_DIR).join("HOU_06_01_25-06_30_25.xlsx");
    let mut workbook = open_workbook_auto(&path).unwrap();
    let range = workbook.worksheet_range("HOU").unwrap();

    assert_eq!(range.height(), 4);
    assert_eq!(range.width(), 25);
    assert_eq!(range.get((0, 0)), Some(&Data::String("Job#".to_string())));
    assert_eq!(range.get((1, 0)), Some(&Data::Float(103.0)));
}

#[test]
fn test_report_reads_workbook_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (c, header) in required_columns().iter().enumerate() {
        sheet.write(0, c as u16, header.as_str()).unwrap();
    }
    for (r, j) in sample_jobs().iter().enumerate() {
        for (c, value) in j.values().iter().enumerate() {
            match value.parse::<f64>() {
                Ok(n) => sheet.write(r as u32 + 1, c as u16, n).unwrap(),
                Err(_) => sheet.write(r as u32 + 1, c as u16, value.as_str()).unwrap(),
            };
        }
    }
    workbook.save(&input).unwrap();

    rvr()
        .args(report_args(dir.path(), &input, "csv"))
        .args(["--markets", "PDX"])
        .assert()
        .success();

    let report = dir.path().join(REPORT_DIR);
    assert!(report.join("PDX_06_01_25-06_30_25.csv").exists());
    assert!(!report.join("HOU_06_01_25-06_30_25.csv").exists());
}

#[test]
fn test_report_market_list_and_cap() {
    let (dir, input) = workspace(&sample_jobs());

    rvr()
        .args(report_args(dir.path(), &input, "csv"))
        .args(["--markets", "hou,sea", "--cap", "1"])
        .assert()
        .success();

    let report = dir.path().join(REPORT_DIR);
    let files: Vec<_> = fs::read_dir(&report).unwrap().collect();
    assert_eq!(files.len(), 1);

    let content = read_file(&report.join("HOU_06_01_25-06_30_25.csv"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_report_uses_config_file() {
    let (dir, input) = workspace(&sample_jobs());
    let cfg = dir.path().join("rvenuereport.conf");
    fs::write(&cfg, "venues_per_market: 1\noutput_format: csv\nmin_rsvps: 0\n").unwrap();

    rvr()
        .args(["--config", cfg.to_str().unwrap()])
        .args(["report", "--input", input.to_str().unwrap()])
        .args(["--start", "06/01/2025", "--end", "06/30/2025"])
        .args(["--cutoff", "01/01/20", "--out", dir.path().to_str().unwrap()])
        .assert()
        .success();

    let content = read_file(&dir.path().join(REPORT_DIR).join("HOU_06_01_25-06_30_25.csv"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_report_without_eligible_venues() {
    let (dir, input) = workspace(&[job(1).rsvps(2).on("2024-01-10")]);

    rvr()
        .args(report_args(dir.path(), &input, "csv"))
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!dir.path().join(REPORT_DIR).exists());
}

#[test]
fn test_report_rejects_reversed_window() {
    let (dir, input) = workspace(&sample_jobs());

    rvr()
        .args(["--config", dir.path().join("missing.conf").to_str().unwrap()])
        .args(["report", "--input", input.to_str().unwrap()])
        .args(["--start", "2025-07-01", "--end", "2025-06-01"])
        .args(["--out", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));
}

#[test]
fn test_report_rejects_bad_date() {
    let (dir, input) = workspace(&sample_jobs());

    rvr()
        .args(["--config", dir.path().join("missing.conf").to_str().unwrap()])
        .args(["report", "--input", input.to_str().unwrap()])
        .args(["--start", "June 1st", "--end", "2025-06-30"])
        .args(["--out", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_report_quiet_mode() {
    let (dir, input) = workspace(&sample_jobs());

    rvr()
        .args(report_args(dir.path(), &input, "csv"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(contains("Venues:").not())
        .stdout(contains("saved"));
}

#[test]
fn test_list_prints_venues() {
    let (dir, input) = workspace(&sample_jobs());

    rvr()
        .args(["--config", dir.path().join("missing.conf").to_str().unwrap()])
        .args(["list", "--input", input.to_str().unwrap(), "--cutoff", "2020-01-01"])
        .assert()
        .success()
        .stdout(contains("Pappas Bros").and(contains("Portland")));
}

#[test]
fn test_list_single_market() {
    let (dir, input) = workspace(&sample_jobs());

    rvr()
        .args(["--config", dir.path().join("missing.conf").to_str().unwrap()])
        .args(["list", "--input", input.to_str().unwrap()])
        .args(["--cutoff", "2020-01-01", "--market", "pdx"])
        .assert()
        .success()
        .stdout(contains("Portland").and(contains("Houston").not()));
}

#[test]
fn test_init_and_migrate_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("rvenuereport.conf");

    rvr()
        .args(["--config", cfg.to_str().unwrap(), "init"])
        .assert()
        .success();
    assert!(cfg.exists());

    fs::write(&cfg, "min_rsvps: 25\n").unwrap();

    rvr()
        .args(["--config", cfg.to_str().unwrap(), "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing keys"));

    rvr()
        .args(["--config", cfg.to_str().unwrap(), "config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration migrated"));

    let content = read_file(&cfg);
    assert!(content.contains("min_rsvps: 25"));
    assert!(content.contains("venues_per_market: 20"));

    rvr()
        .args(["--config", cfg.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("min_rsvps: 25"));
}
