//! Environment overrides for `BoardConfig::load`.
//!
//! Kept in its own test binary: environment variables are process-wide and
//! would leak into the file-based config tests running alongside.

use board_core::{BoardConfig, BoardError};

#[test]
fn test_environment_overrides_file_and_defaults() {
    let path = std::env::temp_dir().join(format!("board-env-{}.toml", std::process::id()));
    std::fs::write(&path, "feed_period_ms = 25\ntokens_per_bucket = 4\n").unwrap();

    std::env::set_var("BOARD_FEED_PERIOD_MS", "40");
    std::env::set_var("BOARD_SEED", "5");
    let config = BoardConfig::load(Some(&path)).unwrap();

    assert_eq!(config.feed_period_ms, 40, "environment wins over the file");
    assert_eq!(config.seed, Some(5));
    assert_eq!(config.tokens_per_bucket, 4, "file value kept where env is silent");
    assert_eq!(config.bootstrap_delay_ms, 900, "default kept where both are silent");

    let config = BoardConfig::load(None).unwrap();
    assert_eq!(config.feed_period_ms, 40);
    assert_eq!(config.tokens_per_bucket, 15);

    std::env::set_var("BOARD_FEED_PERIOD_MS", "0");
    assert!(matches!(
        BoardConfig::load(None),
        Err(BoardError::InvalidConfig(_))
    ));

    std::env::remove_var("BOARD_FEED_PERIOD_MS");
    std::env::remove_var("BOARD_SEED");
    std::fs::remove_file(&path).ok();
}
