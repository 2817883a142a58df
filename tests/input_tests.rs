use rvenuereport::core::{ReportLogic, ReportParams};
use rvenuereport::errors::AppError;
use rvenuereport::input::{open_rows, required_columns};
use rvenuereport::models::IdentityScheme;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

mod common;
use common::{d, job, rows, sample_jobs, workspace, write_headers};

fn append(path: &Path, bytes: &[u8]) {
    let mut file = OpenOptions::new().append(true).open(path).unwrap();
    file.write_all(bytes).unwrap();
}

#[test]
fn test_headers_checked_before_any_row() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let headers: Vec<String> = required_columns()
        .into_iter()
        .filter(|c| c != "Zone")
        .collect();
    write_headers(&input, &headers);

    match open_rows(&input) {
        Err(AppError::MissingColumns(missing)) => assert_eq!(missing, vec!["Zone"]),
        other => panic!("expected missing columns, got {:?}", other.map(|r| r.headers().len())),
    }
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        open_rows(&dir.path().join("absent.csv")),
        Err(AppError::Io(_))
    ));
}

#[test]
fn test_blank_lines_are_dropped() {
    let (_dir, input) = workspace(&[job(1).on("2024-03-05")]);
    let blank = ",".repeat(required_columns().len() - 1);
    append(&input, format!("{blank}\n").as_bytes());
    append(&input, b"\n");

    let reader = open_rows(&input).unwrap();
    assert_eq!(reader.headers().len(), required_columns().len());

    let read: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].text("Job#"), "1");
}

#[test]
fn test_rows_are_read_one_at_a_time() {
    let (_dir, input) = workspace(&[job(1).on("2024-03-05"), job(2).on("2024-04-09")]);
    append(&input, b"\xff\xfe,broken\n");

    let mut reader = open_rows(&input).unwrap();

    // rows before the unreadable line come through
    assert!(reader.next().unwrap().is_ok());
    assert!(reader.next().unwrap().is_ok());
    assert!(matches!(reader.next(), Some(Err(AppError::Csv(_)))));
}

#[test]
fn test_read_error_aborts_the_index() {
    let (_dir, input) = workspace(&[job(1).on("2024-03-05")]);
    append(&input, b"\xff\xfe,broken\n");

    let result = ReportLogic::try_build_index(open_rows(&input).unwrap(), None, IdentityScheme::Full);
    assert!(matches!(result, Err(AppError::Csv(_))));
}

#[test]
fn test_cutoff_applies_while_streaming() {
    let (_dir, input) = workspace(&[
        job(1).street("1 A St").on("2021-03-05"),
        job(2).street("2 B St").on("2024-04-09"),
    ]);

    let index = ReportLogic::try_build_index(
        open_rows(&input).unwrap(),
        Some(d("2023-01-01")),
        IdentityScheme::Full,
    )
    .unwrap();

    assert_eq!(index.len(), 1);
    assert_eq!(index.stats().outdated, 1);
}

#[test]
fn test_streamed_run_matches_in_memory_run() {
    let (_dir, input) = workspace(&sample_jobs());
    let mut params = ReportParams::new(d("2025-06-01"), d("2025-06-30"));
    params.min_rsvps = 0;

    let streamed = ReportLogic::try_run(open_rows(&input).unwrap(), &params).unwrap();
    let in_memory = ReportLogic::run(rows(&sample_jobs()), &params).unwrap();

    assert_eq!(streamed.markets, in_memory.markets);
    assert_eq!(streamed.stats, in_memory.stats);
}
