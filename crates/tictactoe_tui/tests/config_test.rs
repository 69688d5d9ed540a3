//! Tests for TOML configuration loading.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_tui::TuiConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.player_one(), "Player 1");
    assert_eq!(config.player_two(), "Player 2");
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_one = \"Ada\"").unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_one(), "Ada");
    assert_eq!(config.player_two(), "Player 2");
}

#[test]
fn test_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "player_one = \"Ada\"\nplayer_two = \"Grace\"\nlog_file = \"/tmp/ttt.log\""
    )
    .unwrap();

    let config = TuiConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.player_two(), "Grace");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_one = [").unwrap();

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"), "{}", err);
    assert!(err.to_string().starts_with("Config error: "));
}

#[test]
fn test_cli_names_override_config() {
    let config = TuiConfig::default().with_names(Some("Ada".to_string()), None);
    assert_eq!(config.player_one(), "Ada");
    assert_eq!(config.player_two(), "Player 2");
}
