use rvenuereport::config::Config;
use rvenuereport::config::migrate::{missing_keys, run_config_migration};
use rvenuereport::export::ExportFormat;
use rvenuereport::models::IdentityScheme;
use std::fs;

mod common;
use common::d;

#[test]
fn test_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.cutoff_months, 16);
    assert_eq!(cfg.saturation_weeks, 16);
    assert_eq!(cfg.prox_weeks, 2);
    assert_eq!(cfg.min_rsvps, 16);
    assert_eq!(cfg.min_ror, 0.0);
    assert_eq!(cfg.venues_per_market, 20);
    assert!(cfg.markets.is_empty());
    assert_eq!(cfg.output_format, ExportFormat::Xlsx);
    assert_eq!(cfg.identity_scheme, IdentityScheme::Full);
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("nope.conf")).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rvenuereport.conf");
    fs::write(
        &path,
        "min_rsvps: 30\noutput_format: csv\nidentity_scheme: legacy\nmarkets: [HOU]\n",
    )
    .unwrap();

    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.min_rsvps, 30);
    assert_eq!(cfg.output_format, ExportFormat::Csv);
    assert_eq!(cfg.identity_scheme, IdentityScheme::Legacy);
    assert_eq!(cfg.markets, vec!["HOU".to_string()]);
    assert_eq!(cfg.venues_per_market, 20);
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rvenuereport.conf");
    fs::write(&path, "min_rsvps: [not, a, number]\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sub").join("rvenuereport.conf");

    let cfg = Config {
        prox_weeks: 3,
        markets: vec!["PDX".to_string()],
        ..Config::default()
    };
    cfg.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), cfg);
}

#[test]
fn test_init_file_does_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rvenuereport.conf");

    assert!(Config::init_file(&path, false).unwrap());
    fs::write(&path, "min_rsvps: 99\n").unwrap();
    assert!(!Config::init_file(&path, false).unwrap());

    assert_eq!(Config::load_from(&path).unwrap().min_rsvps, 99);
}

#[test]
fn test_init_file_in_test_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rvenuereport.conf");

    assert!(!Config::init_file(&path, true).unwrap());
    assert!(!path.exists());
}

#[test]
fn test_migration_adds_missing_keys_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rvenuereport.conf");
    fs::write(&path, "min_rsvps: 30\nventure: kept\n").unwrap();

    let missing = missing_keys(&path).unwrap();
    assert!(missing.contains(&"cutoff_months".to_string()));
    assert!(!missing.contains(&"min_rsvps".to_string()));

    let added = run_config_migration(&path).unwrap();
    assert_eq!(added, missing);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("min_rsvps: 30"));
    assert!(content.contains("venture: kept"));
    assert!(content.contains("identity_scheme: full"));

    assert!(missing_keys(&path).unwrap().is_empty());
    assert!(run_config_migration(&path).unwrap().is_empty());
}

#[test]
fn test_cutoff_date() {
    let cfg = Config::default();
    assert_eq!(cfg.cutoff_date(d("2025-06-15")), d("2024-02-15"));
}
