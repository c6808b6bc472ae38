//! JSONL replay feed.
//!
//! Each non-empty line is one batch: either a single quote object or an
//! array of them. `target` and `stop` may hold any JSON value; anything that
//! is not a number becomes NaN so the risk/reward cell degrades to zero.

use super::QuoteFeed;
use crate::error::FeedError;
use crate::types::{Direction, InstrumentId, QuoteSnapshot};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

/// Quote as written in a recording, before level coercion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuote {
    instrument: String,
    bid: f64,
    ask: f64,
    /// Defaults to bid when absent.
    price: Option<f64>,
    #[serde(default)]
    atr: f64,
    #[serde(default)]
    target: Value,
    #[serde(default)]
    stop: Value,
    #[serde(default)]
    volume: f64,
    change_24h_pct: Option<f64>,
    signal: Option<String>,
    #[serde(default)]
    direction: Direction,
    confidence_pct: Option<f64>,
    #[serde(default)]
    timestamp: i64,
}

impl RawQuote {
    fn into_snapshot(self) -> QuoteSnapshot {
        QuoteSnapshot {
            instrument: InstrumentId::new(self.instrument),
            bid: self.bid,
            ask: self.ask,
            price: self.price.unwrap_or(self.bid),
            atr: self.atr,
            target: level(&self.target),
            stop: level(&self.stop),
            volume: self.volume,
            change_24h_pct: self.change_24h_pct,
            signal: self.signal,
            direction: self.direction,
            confidence_pct: self.confidence_pct,
            timestamp: self.timestamp,
        }
    }
}

fn level(value: &Value) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLine {
    Batch(Vec<RawQuote>),
    Single(RawQuote),
}

/// Parse one recording line into a batch.
pub fn parse_line(line: &str, line_no: usize) -> Result<Vec<QuoteSnapshot>, FeedError> {
    let raw: RawLine = serde_json::from_str(line).map_err(|e| FeedError::Parse {
        line: line_no,
        message: e.to_string(),
    })?;

    Ok(match raw {
        RawLine::Batch(quotes) => quotes.into_iter().map(RawQuote::into_snapshot).collect(),
        RawLine::Single(quote) => vec![quote.into_snapshot()],
    })
}

/// Replays a JSONL recording one line per batch.
pub struct ReplayFeed {
    name: String,
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl ReplayFeed {
    /// Open a recording.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, FeedError> {
        let file = File::open(&path).await?;
        Ok(Self {
            name: format!("replay:{}", path.as_ref().display()),
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

#[async_trait]
impl QuoteFeed for ReplayFeed {
    fn name(&self) -> &str {
        &self.name
    }

    async fn next_batch(&mut self) -> Result<Option<Vec<QuoteSnapshot>>, FeedError> {
        while let Some(line) = self.lines.next_line().await? {
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return parse_line(&line, self.line_no).map(Some);
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_quote() {
        let line = r#"{"instrument":"XAU_USD","bid":2000.0,"ask":2000.1,"atr":12.0,"target":2030.0,"stop":1990.0,"volume":300}"#;
        let batch = parse_line(line, 1).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].price, 2000.0);
        assert_eq!(batch[0].target, 2030.0);
        assert_eq!(batch[0].direction, Direction::Neutral);
    }

    #[test]
    fn test_parse_non_numeric_levels() {
        let line = r#"{"instrument":"XAG_USD","bid":29.0,"ask":29.1,"target":"bad","stop":null}"#;
        let batch = parse_line(line, 1).unwrap();
        assert!(batch[0].target.is_nan());
        assert!(batch[0].stop.is_nan());
    }

    #[test]
    fn test_parse_batch_line() {
        let line = r#"[{"instrument":"BCO_USD","bid":82.0,"ask":82.05},{"instrument":"CORN_USD","bid":4.4,"ask":4.6,"direction":"long"}]"#;
        let batch = parse_line(line, 3).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[1].direction, Direction::Long);
    }

    #[test]
    fn test_parse_error_reports_line() {
        match parse_line("{not json", 7) {
            Err(FeedError::Parse { line, .. }) => assert_eq!(line, 7),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_replay_feed_reads_until_exhausted() {
        let path = std::env::temp_dir().join(format!("replay_feed_{}.jsonl", std::process::id()));
        let contents = concat!(
            r#"{"instrument":"XAU_USD","bid":2000.0,"ask":2000.1}"#,
            "\n\n",
            "garbage\n",
            r#"{"instrument":"XAU_USD","bid":2001.0,"ask":2001.1}"#,
            "\n"
        );
        tokio::fs::write(&path, contents).await.unwrap();

        let mut feed = ReplayFeed::open(&path).await.unwrap();
        assert_eq!(feed.next_batch().await.unwrap().unwrap()[0].bid, 2000.0);
        assert!(matches!(feed.next_batch().await, Err(FeedError::Parse { line: 3, .. })));
        assert_eq!(feed.next_batch().await.unwrap().unwrap()[0].bid, 2001.0);
        assert!(feed.next_batch().await.unwrap().is_none());

        tokio::fs::remove_file(&path).await.ok();
    }
}
