//! Signal classifier.
//!
//! Pure functions turning one quote snapshot into normalized, colour-ready
//! metrics. Nothing here fails: bad input degrades to a neutral sentinel
//! (`0.0` or [`SpreadClass::Unknown`]) so a refreshing display never halts.

use crate::services::catalog::ReferenceCatalog;
use crate::types::{InstrumentId, QuoteSnapshot, SignalReport, SpreadClass};
use serde_json::Value;
use std::sync::Arc;

/// Spread at or below this fraction of normal is tight.
pub const TIGHT_FACTOR: f64 = 0.8;
/// Spread above this fraction of normal is wide.
pub const WIDE_FACTOR: f64 = 1.2;

/// ATR as a percentage of price. Returns `0.0` when `price <= 0` or the
/// result is not finite.
pub fn normalize_volatility(atr: f64, price: f64) -> f64 {
    if price > 0.0 {
        let pct = (atr / price) * 100.0;
        if pct.is_finite() {
            return pct;
        }
    }
    0.0
}

/// Classify a spread against a known normal spread.
///
/// `<= 0.8n` is tight (inclusive), `> 1.2n` is wide (exclusive), anything
/// between is normal. Non-positive spreads go through the same comparisons.
pub fn classify_against(spread: f64, normal_spread: f64) -> SpreadClass {
    if spread <= normal_spread * TIGHT_FACTOR {
        SpreadClass::Tight
    } else if spread > normal_spread * WIDE_FACTOR {
        SpreadClass::Wide
    } else {
        SpreadClass::Normal
    }
}

/// Reward-to-risk ratio for a position at `current` with the given levels.
///
/// Returns `0.0` when any level is not a number (NaN or infinite) or when
/// the stop sits on the current price. Unbounded above.
pub fn risk_reward(current: f64, target: f64, stop: f64) -> f64 {
    if !(current.is_finite() && target.is_finite() && stop.is_finite()) {
        return 0.0;
    }

    let risk = (current - stop).abs();
    let reward = (target - current).abs();

    if risk > 0.0 {
        reward / risk
    } else {
        0.0
    }
}

/// [`risk_reward`] over loosely typed JSON levels. Anything that is not a
/// JSON number yields `0.0`.
pub fn risk_reward_value(current: &Value, target: &Value, stop: &Value) -> f64 {
    match (current.as_f64(), target.as_f64(), stop.as_f64()) {
        (Some(c), Some(t), Some(s)) => risk_reward(c, t, s),
        _ => 0.0,
    }
}

/// Evaluates snapshots against an injected reference catalog.
#[derive(Debug, Clone)]
pub struct SignalClassifier {
    catalog: Arc<ReferenceCatalog>,
}

impl SignalClassifier {
    pub fn new(catalog: Arc<ReferenceCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<ReferenceCatalog> {
        &self.catalog
    }

    /// Classify a spread for an instrument. Uncatalogued instruments are
    /// always [`SpreadClass::Unknown`].
    pub fn classify_spread(&self, instrument: &InstrumentId, spread: f64) -> SpreadClass {
        match self.catalog.normal_spread_of(instrument) {
            Some(normal) => classify_against(spread, normal),
            None => SpreadClass::Unknown,
        }
    }

    /// Build the report for one snapshot.
    pub fn evaluate(&self, snapshot: &QuoteSnapshot) -> SignalReport {
        let spread = snapshot.spread();
        SignalReport {
            instrument: snapshot.instrument.clone(),
            normalized_atr_pct: normalize_volatility(snapshot.atr, snapshot.price),
            spread,
            spread_classification: self.classify_spread(&snapshot.instrument, spread),
            risk_reward_ratio: risk_reward(snapshot.price, snapshot.target, snapshot.stop),
        }
    }

    /// Build reports for a batch, preserving order.
    pub fn evaluate_all(&self, snapshots: &[QuoteSnapshot]) -> Vec<SignalReport> {
        snapshots.iter().map(|s| self.evaluate(s)).collect()
    }
}
