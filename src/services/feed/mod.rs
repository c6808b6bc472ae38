//! Quote feeds that fill the quote board.

pub mod replay;
pub mod simulated;

pub use replay::ReplayFeed;
pub use simulated::SimulatedFeed;

use crate::error::FeedError;
use crate::services::board::QuoteBoard;
use crate::types::QuoteSnapshot;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A source of quote snapshots.
#[async_trait]
pub trait QuoteFeed: Send {
    /// Feed name for logging.
    fn name(&self) -> &str;

    /// Next batch of snapshots. `Ok(None)` means the feed is exhausted.
    async fn next_batch(&mut self) -> Result<Option<Vec<QuoteSnapshot>>, FeedError>;
}

/// Pump batches from a feed into the board every `interval` until the feed
/// is exhausted. Feed errors are logged and skipped.
///
/// Returns the number of batches applied.
pub async fn run_feed(
    mut feed: Box<dyn QuoteFeed>,
    board: Arc<QuoteBoard>,
    interval: Duration,
) -> u64 {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut applied = 0u64;

    info!("Starting {} feed ({}ms interval)", feed.name(), interval.as_millis());

    loop {
        ticker.tick().await;

        match feed.next_batch().await {
            Ok(Some(batch)) => {
                debug!("{} feed: {} snapshots", feed.name(), batch.len());
                for snapshot in batch {
                    board.update(snapshot);
                }
                applied += 1;
            }
            Ok(None) => {
                info!("{} feed exhausted after {} batches", feed.name(), applied);
                break;
            }
            Err(e) => {
                warn!("{} feed error: {}", feed.name(), e);
            }
        }
    }

    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedFeed {
        script: VecDeque<Result<Option<Vec<QuoteSnapshot>>, FeedError>>,
    }

    #[async_trait]
    impl QuoteFeed for ScriptedFeed {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn next_batch(&mut self) -> Result<Option<Vec<QuoteSnapshot>>, FeedError> {
            self.script.pop_front().unwrap_or(Ok(None))
        }
    }

    #[tokio::test]
    async fn test_run_feed_skips_errors() {
        let quote = QuoteSnapshot::new("XAU_USD", 2000.0, 2000.1, 2000.0, 10.0, 2020.0, 1990.0, 1.0);
        let feed = ScriptedFeed {
            script: VecDeque::from(vec![
                Ok(Some(vec![quote.clone()])),
                Err(FeedError::Parse {
                    line: 2,
                    message: "bad".to_string(),
                }),
                Ok(Some(vec![quote])),
            ]),
        };
        let board = QuoteBoard::new();

        let applied = run_feed(Box::new(feed), board.clone(), Duration::from_millis(1)).await;

        assert_eq!(applied, 2);
        assert_eq!(board.update_count(&"XAU_USD".into()), 2);
    }
}
