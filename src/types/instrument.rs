use serde::{Deserialize, Serialize};
use std::fmt;

/// Broker instrument code, e.g. `XAU_USD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(String);

impl InstrumentId {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstrumentId {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for InstrumentId {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for InstrumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Display group an instrument belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentGroup {
    PreciousMetals,
    Energy,
    Agriculture,
}

impl InstrumentGroup {
    /// All groups in display order.
    pub fn all() -> [Self; 3] {
        [Self::PreciousMetals, Self::Energy, Self::Agriculture]
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "precious_metals" | "metals" | "precious" => Some(Self::PreciousMetals),
            "energy" | "energies" => Some(Self::Energy),
            "agriculture" | "agri" | "softs" | "grains" => Some(Self::Agriculture),
            _ => None,
        }
    }

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PreciousMetals => "PRECIOUS METALS",
            Self::Energy => "ENERGY",
            Self::Agriculture => "AGRICULTURE",
        }
    }
}

impl fmt::Display for InstrumentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_from_str_aliases() {
        assert_eq!(InstrumentGroup::from_str("PRECIOUS METALS"), Some(InstrumentGroup::PreciousMetals));
        assert_eq!(InstrumentGroup::from_str("PRECIOUS_METALS"), Some(InstrumentGroup::PreciousMetals));
        assert_eq!(InstrumentGroup::from_str("metals"), Some(InstrumentGroup::PreciousMetals));
        assert_eq!(InstrumentGroup::from_str("Energy"), Some(InstrumentGroup::Energy));
        assert_eq!(InstrumentGroup::from_str("agri"), Some(InstrumentGroup::Agriculture));
        assert_eq!(InstrumentGroup::from_str("crypto"), None);
    }

    #[test]
    fn test_group_serialization() {
        let json = serde_json::to_string(&InstrumentGroup::PreciousMetals).unwrap();
        assert_eq!(json, "\"PRECIOUS_METALS\"");
    }

    #[test]
    fn test_instrument_id_is_transparent() {
        let id: InstrumentId = serde_json::from_str("\"XAU_USD\"").unwrap();
        assert_eq!(id.as_str(), "XAU_USD");
        assert_eq!(id.to_string(), "XAU_USD");
    }
}
