//! Random-walk quote feed for running the scanner without a broker.

use super::QuoteFeed;
use crate::error::FeedError;
use crate::services::catalog::ReferenceCatalog;
use crate::types::{Direction, InstrumentId, QuoteSnapshot};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rough starting prices so the table looks plausible.
const REFERENCE_PRICES: &[(&str, f64)] = &[
    ("XAU_USD", 2350.0),
    ("XAG_USD", 29.5),
    ("XPT_USD", 980.0),
    ("XPD_USD", 1020.0),
    ("BCO_USD", 82.0),
    ("WTICO_USD", 78.0),
    ("NATGAS_USD", 2.6),
    ("CORN_USD", 4.45),
    ("SOYBN_USD", 11.8),
    ("WHEAT_USD", 5.9),
    ("SUGAR_USD", 0.19),
];

const DEFAULT_PRICE: f64 = 100.0;
/// Moves smaller than this fraction produce no directional signal.
const FLAT_MOVE: f64 = 0.0004;

#[derive(Debug, Clone)]
struct WalkState {
    instrument: InstrumentId,
    open: f64,
    mid: f64,
    normal_spread: f64,
}

/// Seeded random walk over every catalogued instrument.
pub struct SimulatedFeed {
    rng: StdRng,
    walks: Vec<WalkState>,
}

impl SimulatedFeed {
    /// Create a feed for the catalog. The same seed always yields the same
    /// sequence of batches.
    pub fn new(catalog: &ReferenceCatalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let walks = catalog
            .instruments()
            .into_iter()
            .map(|instrument| {
                let start = REFERENCE_PRICES
                    .iter()
                    .find(|(code, _)| *code == instrument.as_str())
                    .map(|(_, price)| *price)
                    .unwrap_or(DEFAULT_PRICE);
                let normal_spread = catalog.normal_spread_of(&instrument).unwrap_or(0.0);
                WalkState {
                    instrument,
                    open: start,
                    mid: start,
                    normal_spread,
                }
            })
            .collect();

        Self { rng, walks }
    }

    fn step(rng: &mut StdRng, walk: &mut WalkState, timestamp: i64) -> QuoteSnapshot {
        let change: f64 = rng.gen_range(-0.002..0.002);
        walk.mid = (walk.mid * (1.0 + change)).max(f64::EPSILON);

        let spread = walk.normal_spread * rng.gen_range(0.6..1.5_f64);
        let bid = walk.mid - spread / 2.0;
        let ask = walk.mid + spread / 2.0;
        let atr = walk.mid * rng.gen_range(0.005..0.02_f64);

        let (direction, signal) = if change.abs() < FLAT_MOVE {
            (Direction::Neutral, "HOLD")
        } else if change > 0.0 {
            (Direction::Long, "BUY")
        } else {
            (Direction::Short, "SELL")
        };

        let reward_mult: f64 = rng.gen_range(1.0..3.0);
        let risk_mult: f64 = rng.gen_range(0.5..1.5);
        let (target, stop) = match direction {
            Direction::Long => (bid + atr * reward_mult, bid - atr * risk_mult),
            Direction::Short => (bid - atr * reward_mult, bid + atr * risk_mult),
            Direction::Neutral => (bid + atr, bid - atr),
        };

        let confidence = (50.0 + change.abs() / 0.002 * 40.0).min(95.0);

        QuoteSnapshot {
            instrument: walk.instrument.clone(),
            bid,
            ask,
            price: bid,
            atr,
            target,
            stop,
            volume: rng.gen_range(100.0..5000.0_f64).round(),
            change_24h_pct: Some((walk.mid - walk.open) / walk.open * 100.0),
            signal: Some(signal.to_string()),
            direction,
            confidence_pct: Some(confidence),
            timestamp,
        }
    }
}

#[async_trait]
impl QuoteFeed for SimulatedFeed {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn next_batch(&mut self) -> Result<Option<Vec<QuoteSnapshot>>, FeedError> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let rng = &mut self.rng;
        let batch: Vec<QuoteSnapshot> = self
            .walks
            .iter_mut()
            .map(|walk| Self::step(rng, walk, timestamp))
            .collect();
        Ok(Some(batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_covers_catalog() {
        let catalog = ReferenceCatalog::commodities();
        let mut feed = SimulatedFeed::new(&catalog, Some(7));
        let batch = tokio_test::block_on(feed.next_batch()).unwrap().unwrap();

        assert_eq!(batch.len(), catalog.len());
        for quote in &batch {
            assert!(quote.ask > quote.bid);
            assert!(quote.atr > 0.0);
            assert!(catalog.contains(&quote.instrument));
        }
    }

    #[tokio::test]
    async fn test_same_seed_same_prices() {
        let catalog = ReferenceCatalog::commodities();
        let mut a = SimulatedFeed::new(&catalog, Some(42));
        let mut b = SimulatedFeed::new(&catalog, Some(42));

        let first: Vec<f64> = a.next_batch().await.unwrap().unwrap().iter().map(|q| q.bid).collect();
        let second: Vec<f64> = b.next_batch().await.unwrap().unwrap().iter().map(|q| q.bid).collect();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_spread_stays_near_normal() {
        let catalog = ReferenceCatalog::commodities();
        let mut feed = SimulatedFeed::new(&catalog, Some(1));
        for _ in 0..20 {
            for quote in feed.next_batch().await.unwrap().unwrap() {
                let normal = catalog.normal_spread_of(&quote.instrument).unwrap();
                let ratio = quote.spread() / normal;
                assert!(ratio > 0.59 && ratio < 1.51, "ratio {} out of range", ratio);
            }
        }
    }
}
