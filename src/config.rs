use crate::error::AppError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Where quote snapshots come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedMode {
    /// Seeded random walk over the catalog.
    Simulated,
    /// Replay a JSONL recording.
    Replay(PathBuf),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Quote source.
    pub feed: FeedMode,
    /// Optional JSON catalog replacing the built-in commodity table.
    pub catalog_path: Option<PathBuf>,
    /// Interval between feed batches in milliseconds.
    pub refresh_ms: u64,
    /// Renderer tick rate in milliseconds.
    pub tick_ms: u64,
    /// Seed for the simulated feed (random when unset).
    pub seed: Option<u64>,
    /// Log lines kept for the logs view.
    pub log_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: FeedMode::Simulated,
            catalog_path: None,
            refresh_ms: 1000,
            tick_ms: 250,
            seed: None,
            log_capacity: 500,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let feed = match lookup("SCANNER_FEED")
            .map(|v| v.trim().to_lowercase())
            .as_deref()
        {
            None | Some("") | Some("simulated") | Some("sim") => FeedMode::Simulated,
            Some("replay") => {
                let path = lookup("SCANNER_REPLAY_PATH").ok_or_else(|| {
                    AppError::Config("SCANNER_REPLAY_PATH is required for replay feed".to_string())
                })?;
                FeedMode::Replay(PathBuf::from(path))
            }
            Some(other) => {
                return Err(AppError::Config(format!(
                    "Unknown feed '{}'. Use: simulated or replay",
                    other
                )))
            }
        };

        Ok(Self {
            feed,
            catalog_path: lookup("SCANNER_CATALOG_PATH").map(PathBuf::from),
            refresh_ms: lookup("SCANNER_REFRESH_MS")
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.refresh_ms),
            tick_ms: lookup("SCANNER_TICK_MS")
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.tick_ms),
            seed: lookup("SCANNER_SEED").and_then(|v| v.parse().ok()),
            log_capacity: lookup("SCANNER_LOG_CAPACITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_capacity),
        })
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.feed, FeedMode::Simulated);
        assert_eq!(config.refresh_ms, 1000);
        assert_eq!(config.tick_ms, 250);
        assert!(config.seed.is_none());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_replay_feed_requires_path() {
        let result = Config::from_lookup(lookup_from(&[("SCANNER_FEED", "replay")]));
        assert!(matches!(result, Err(AppError::Config(_))));

        let config = Config::from_lookup(lookup_from(&[
            ("SCANNER_FEED", "replay"),
            ("SCANNER_REPLAY_PATH", "quotes.jsonl"),
        ]))
        .unwrap();
        assert_eq!(config.feed, FeedMode::Replay(PathBuf::from("quotes.jsonl")));
    }

    #[test]
    fn test_unknown_feed_rejected() {
        let result = Config::from_lookup(lookup_from(&[("SCANNER_FEED", "oanda")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("SCANNER_REFRESH_MS", "fast"),
            ("SCANNER_TICK_MS", "0"),
            ("SCANNER_SEED", "42"),
        ]))
        .unwrap();
        assert_eq!(config.refresh_ms, 1000);
        assert_eq!(config.tick_ms, 250);
        assert_eq!(config.seed, Some(42));
    }
}
