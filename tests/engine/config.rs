//! Config loading: file overrides, parse failures, validation failures.

use clinisim::DemoConfig;
use clinisim::error::ConfigError;
use std::fs;

#[test]
fn explicit_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
        [reveal]
        speed = "human"
        stream_chunk = 5

        [tasks]
        completion_delay_ms = 900
        "#,
    )
    .unwrap();

    let config = DemoConfig::load(Some(&path)).unwrap();
    assert_eq!(config.reveal.speed, clinisim::reveal::RevealSpeed::Human);
    assert_eq!(config.reveal.stream_chunk, 5);
    assert_eq!(config.tasks.completion_delay_ms, 900);
    // Unnamed sections keep their defaults.
    assert_eq!(config.autoplay, clinisim::config::AutoplayConfig::default());
}

#[test]
fn missing_explicit_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        DemoConfig::load(Some(&missing)),
        Err(ConfigError::Load(_))
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "reveal = not toml").unwrap();
    assert!(matches!(
        DemoConfig::load(Some(&path)),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn degenerate_values_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
        [reveal]
        stream_chunk = 0
        "#,
    )
    .unwrap();
    assert!(matches!(
        DemoConfig::load(Some(&path)),
        Err(ConfigError::Validation(_))
    ));
}
