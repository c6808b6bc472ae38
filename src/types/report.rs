use super::InstrumentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spread quality relative to the instrument's normal spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpreadClass {
    /// Between 80% (exclusive) and 120% (inclusive) of normal.
    Normal,
    /// At or below 80% of normal.
    Tight,
    /// Above 120% of normal.
    Wide,
    /// Instrument has no normal spread in the catalog.
    Unknown,
}

impl SpreadClass {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Tight => "TIGHT",
            Self::Wide => "WIDE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Colour tone a renderer should use. `Unknown` shares the neutral tone
    /// with `Normal`.
    pub fn tone(&self) -> Tone {
        match self {
            Self::Tight => Tone::Favorable,
            Self::Wide => Tone::Warning,
            Self::Normal | Self::Unknown => Tone::Neutral,
        }
    }
}

impl fmt::Display for SpreadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Renderer-facing colour intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Favorable,
    Warning,
    Neutral,
}

/// Normalized metrics for one instrument on one tick.
///
/// `0.0` in `normalized_atr_pct` or `risk_reward_ratio` is the "no signal"
/// sentinel (bad price, flat stop or non-numeric levels), not a measured zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalReport {
    pub instrument: InstrumentId,
    /// ATR as a percentage of price.
    pub normalized_atr_pct: f64,
    /// The spread that was classified.
    pub spread: f64,
    pub spread_classification: SpreadClass,
    pub risk_reward_ratio: f64,
}

impl SignalReport {
    /// True when the risk/reward cell carries no meaningful value.
    pub fn has_risk_reward(&self) -> bool {
        self.risk_reward_ratio > 0.0
    }

    /// True when the volatility cell carries no meaningful value.
    pub fn has_volatility(&self) -> bool {
        self.normalized_atr_pct > 0.0
    }
}
