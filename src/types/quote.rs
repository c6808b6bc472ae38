use super::InstrumentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade direction suggested by the upstream analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
    #[default]
    Neutral,
}

impl Direction {
    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Long => "LONG",
            Self::Short => "SHORT",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One instrument's quote and indicator values for a single refresh tick.
///
/// All fields are sampled together. Consumers must never mix fields from
/// two snapshots of the same instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    pub instrument: InstrumentId,
    pub bid: f64,
    pub ask: f64,
    /// Reference price, usually bid or mid.
    pub price: f64,
    /// Average True Range in price units.
    pub atr: f64,
    pub target: f64,
    pub stop: f64,
    pub volume: f64,
    /// 24h change in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_24h_pct: Option<f64>,
    /// Signal label from the analysis layer (e.g. "BUY").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_pct: Option<f64>,
    /// Sample time in milliseconds.
    #[serde(default)]
    pub timestamp: i64,
}

impl QuoteSnapshot {
    /// Create a snapshot with the required fields and no display extras.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        instrument: impl Into<InstrumentId>,
        bid: f64,
        ask: f64,
        price: f64,
        atr: f64,
        target: f64,
        stop: f64,
        volume: f64,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            bid,
            ask,
            price,
            atr,
            target,
            stop,
            volume,
            change_24h_pct: None,
            signal: None,
            direction: Direction::Neutral,
            confidence_pct: None,
            timestamp: 0,
        }
    }

    /// Bid/ask spread (`ask - bid`).
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    /// Mid price.
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }
}
