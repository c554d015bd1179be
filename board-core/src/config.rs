use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Runtime configuration of a board session.
///
/// Every field has a default, so a config file only needs to name what it
/// overrides. Environment variables prefixed with `BOARD_` (e.g.
/// `BOARD_FEED_PERIOD_MS=50`) take precedence over the file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Interval between feed ticks.
    pub feed_period_ms: u64,
    /// Maximum absolute price move per tick.
    pub price_jitter: f64,
    /// Delay before the bootstrap load, modelling connection latency.
    pub bootstrap_delay_ms: u64,
    /// Generated tokens per bucket at bootstrap.
    pub tokens_per_bucket: usize,
    /// Intents that may queue up in front of the store.
    pub intent_capacity: usize,
    /// Events an observer may fall behind before it starts skipping.
    pub event_capacity: usize,
    /// Fixed RNG seed for reproducible runs. Entropy when absent.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            feed_period_ms: 100,
            price_jitter: 0.001,
            bootstrap_delay_ms: 900,
            tokens_per_bucket: 15,
            intent_capacity: 1024,
            event_capacity: 100,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Loads defaults, then the optional TOML file, then `BOARD_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(config::Environment::with_prefix("BOARD").try_parsing(true));

        let config: BoardConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.feed_period_ms == 0 {
            return Err(BoardError::InvalidConfig(
                "feed_period_ms must be greater than 0".into(),
            ));
        }
        if !self.price_jitter.is_finite() || self.price_jitter < 0.0 {
            return Err(BoardError::InvalidConfig(format!(
                "price_jitter must be a finite, non-negative number (got {})",
                self.price_jitter
            )));
        }
        if self.intent_capacity == 0 {
            return Err(BoardError::InvalidConfig(
                "intent_capacity must be greater than 0".into(),
            ));
        }
        if self.event_capacity == 0 {
            return Err(BoardError::InvalidConfig(
                "event_capacity must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn feed_period(&self) -> Duration {
        Duration::from_millis(self.feed_period_ms)
    }

    pub fn bootstrap_delay(&self) -> Duration {
        Duration::from_millis(self.bootstrap_delay_ms)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.feed_period(), Duration::from_millis(100));
        assert_eq!(config.bootstrap_delay(), Duration::from_millis(900));
        assert_eq!(config.tokens_per_bucket, 15);
    }

    #[test]
    fn test_rejects_zero_period() {
        let config = BoardConfig {
            feed_period_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BoardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_negative_jitter() {
        let config = BoardConfig {
            price_jitter: -0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BoardConfig {
            price_jitter: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file_merges_defaults() {
        let path = std::env::temp_dir().join(format!("board-config-{}.toml", std::process::id()));
        std::fs::write(&path, "feed_period_ms = 25\nseed = 9\n").unwrap();

        let config = BoardConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.feed_period_ms, 25);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.tokens_per_bucket, 15);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = std::env::temp_dir().join("board-config-does-not-exist.toml");
        assert!(matches!(
            BoardConfig::load(Some(&path)),
            Err(BoardError::Config(_))
        ));
    }
}
