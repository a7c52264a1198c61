//! Loading the arcade config from disk.

use clap::Parser;
use pocket_arcade::{ArcadeConfig, Cli, Overrides};
use pocket_tictactoe::GameMode;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
        seed = 99

        [tictactoe]
        mode = "two-player"
        computer_delay_ms = 250

        [snake]
        grid_size = 20
        tick_ms = 120
        auto_play = true

        [log]
        file = "arcade-test.log"
        filter = "debug"
        "#,
    );

    let config = ArcadeConfig::load_or_default(file.path()).unwrap();
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(*config.tictactoe().mode(), GameMode::TwoPlayer);
    assert_eq!(*config.tictactoe().computer_delay_ms(), 250);
    assert_eq!(*config.snake().grid_size(), 20);
    assert_eq!(*config.snake().tick_ms(), 120);
    assert!(*config.snake().auto_play());
    assert_eq!(config.log().file(), Path::new("arcade-test.log"));
    assert_eq!(config.log().filter(), "debug");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ArcadeConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ArcadeConfig::default());
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = write_config("[snake]\ngrid_size = 3\n");
    let err = ArcadeConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("grid_size"));

    let file = write_config("[snake]\ntick_ms = 10\n");
    assert!(ArcadeConfig::load_or_default(file.path()).is_err());

    let file = write_config("seed = \"not a number\"");
    let err = ArcadeConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_command_line_overrides_file() {
    let file = write_config("seed = 1\n[snake]\ngrid_size = 10\n");
    let path = file.path().to_string_lossy().into_owned();
    let cli = Cli::parse_from([
        "pocket_arcade",
        "--config",
        path.as_str(),
        "--seed",
        "5",
        "snake",
        "--grid",
        "25",
        "--auto",
    ]);

    let config = ArcadeConfig::load_or_default(&cli.config)
        .unwrap()
        .with_overrides(cli.overrides())
        .unwrap();
    assert_eq!(*config.seed(), Some(5));
    assert_eq!(*config.snake().grid_size(), 25);
    assert!(*config.snake().auto_play());

    let too_big = Overrides {
        grid_size: Some(41),
        ..Default::default()
    };
    assert!(config.with_overrides(too_big).is_err());
}
