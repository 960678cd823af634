//! Loading configuration from disk.

use std::io::Write;

use teeko::config::{AppConfig, ConfigError};
use teeko::types::Player;

#[test]
fn load_reads_a_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "blink_interval_ms = 300").unwrap();
    writeln!(file, "first_player = \"b\"").unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.blink_interval_ms, 300);
    assert_eq!(config.first_player().unwrap(), Player::B);
    assert_eq!(config.log_file.to_str(), Some("game.log"));
    assert_eq!(config.log_filter, "info");

    let session = config.session_config().unwrap();
    assert_eq!(session.blink_interval_ms, 300);
    assert_eq!(session.first_player, Player::B);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());

    assert!(matches!(
        AppConfig::load(&dir.path().join("absent.toml")),
        Err(ConfigError::FileRead { .. })
    ));
}

#[test]
fn broken_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "blink_interval_ms = [").unwrap();
    assert!(matches!(
        AppConfig::load_or_default(file.path()),
        Err(ConfigError::TomlParse(_))
    ));
}
