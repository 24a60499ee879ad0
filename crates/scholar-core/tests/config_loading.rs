//! Config file loading

use scholar_core::{BrowserConfig, ConfigError, ConfigOrigin, YearRange};
use std::io::Write;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = BrowserConfig::load(Some(&dir.path().join("config.toml"))).unwrap();
    assert_eq!(config, BrowserConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "recommendation_limit = 2").unwrap();
    writeln!(file, "[default_year_range]").unwrap();
    writeln!(file, "from = 2015").unwrap();
    writeln!(file, "to = 2019").unwrap();

    let config = BrowserConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.recommendation_limit, 2);
    assert_eq!(config.default_year_range, YearRange::new(2015, 2019));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "recommendation_limit = [").unwrap();

    let err = BrowserConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("TOML parse error"));
}

#[test]
fn test_origin_reports_file_and_missing_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_level = \"debug\"").unwrap();
    let (config, origin) = BrowserConfig::load_with_origin(Some(file.path())).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(origin, ConfigOrigin::File(file.path().to_path_buf()));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("config.toml");
    let (config, origin) = BrowserConfig::load_with_origin(Some(&missing)).unwrap();
    assert_eq!(config, BrowserConfig::default());
    assert_eq!(origin, ConfigOrigin::Missing(missing));
}
