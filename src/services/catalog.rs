//! Reference catalog: normal spreads and display groups per instrument.
//!
//! Built once at startup and shared read-only behind an `Arc`.

use crate::error::CatalogError;
use crate::types::{InstrumentGroup, InstrumentId};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Built-in commodity table: (group, instrument, normal spread).
const COMMODITY_SPREADS: &[(InstrumentGroup, &str, f64)] = &[
    (InstrumentGroup::PreciousMetals, "XAU_USD", 0.10),
    (InstrumentGroup::PreciousMetals, "XAG_USD", 0.15),
    (InstrumentGroup::PreciousMetals, "XPT_USD", 0.20),
    (InstrumentGroup::PreciousMetals, "XPD_USD", 0.35),
    (InstrumentGroup::Energy, "BCO_USD", 0.05),
    (InstrumentGroup::Energy, "WTICO_USD", 0.07),
    (InstrumentGroup::Energy, "NATGAS_USD", 0.30),
    (InstrumentGroup::Agriculture, "CORN_USD", 0.25),
    (InstrumentGroup::Agriculture, "SOYBN_USD", 0.20),
    (InstrumentGroup::Agriculture, "WHEAT_USD", 0.20),
    (InstrumentGroup::Agriculture, "SUGAR_USD", 0.15),
];

#[derive(Debug, Clone, Copy)]
struct CatalogEntry {
    group: InstrumentGroup,
    normal_spread: f64,
}

/// Read-only lookup from instrument to normal spread and group.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    entries: HashMap<InstrumentId, CatalogEntry>,
    members: HashMap<InstrumentGroup, Vec<InstrumentId>>,
}

impl ReferenceCatalog {
    /// The default commodity catalog (metals, energy, agriculture).
    pub fn commodities() -> Self {
        let mut builder = Self::builder();
        for (group, code, spread) in COMMODITY_SPREADS {
            builder = builder.instrument(*group, *code, *spread);
        }
        // The constant table is known-good.
        builder.build().unwrap_or_default()
    }

    /// Start an empty catalog builder.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Load a catalog from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            CatalogError::Parse(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(s).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut builder = Self::builder();
        for group_def in file.groups {
            let group = InstrumentGroup::from_str(&group_def.group)
                .ok_or_else(|| CatalogError::UnknownGroup(group_def.group.clone()))?;
            for entry in group_def.instruments {
                builder = builder.instrument(group, entry.instrument, entry.normal_spread);
            }
        }
        builder.build()
    }

    /// Normal spread for an instrument, or `None` when it is not catalogued.
    pub fn normal_spread_of(&self, instrument: &InstrumentId) -> Option<f64> {
        self.entries.get(instrument).map(|e| e.normal_spread)
    }

    /// Group an instrument belongs to.
    pub fn group_of(&self, instrument: &InstrumentId) -> Option<InstrumentGroup> {
        self.entries.get(instrument).map(|e| e.group)
    }

    /// Members of a group in display order. Empty when the group has none.
    pub fn group_members(&self, group: InstrumentGroup) -> &[InstrumentId] {
        self.members.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-empty groups in display order.
    pub fn groups(&self) -> Vec<InstrumentGroup> {
        InstrumentGroup::all()
            .into_iter()
            .filter(|g| !self.group_members(*g).is_empty())
            .collect()
    }

    /// Every catalogued instrument in display order.
    pub fn instruments(&self) -> Vec<InstrumentId> {
        InstrumentGroup::all()
            .into_iter()
            .flat_map(|g| self.group_members(g).iter().cloned())
            .collect()
    }

    pub fn contains(&self, instrument: &InstrumentId) -> bool {
        self.entries.contains_key(instrument)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects catalog entries and validates them on `build`.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    pending: Vec<(InstrumentGroup, InstrumentId, f64)>,
}

impl CatalogBuilder {
    /// Add an instrument to a group. Order of calls is display order.
    pub fn instrument(
        mut self,
        group: InstrumentGroup,
        instrument: impl Into<InstrumentId>,
        normal_spread: f64,
    ) -> Self {
        self.pending.push((group, instrument.into(), normal_spread));
        self
    }

    /// Validate and freeze the catalog.
    pub fn build(self) -> Result<ReferenceCatalog, CatalogError> {
        let mut catalog = ReferenceCatalog::default();

        for (group, instrument, normal_spread) in self.pending {
            if !normal_spread.is_finite() || normal_spread <= 0.0 {
                return Err(CatalogError::InvalidSpread {
                    instrument: instrument.to_string(),
                    value: normal_spread,
                });
            }
            if catalog.entries.contains_key(&instrument) {
                return Err(CatalogError::DuplicateInstrument(instrument.to_string()));
            }

            catalog.members.entry(group).or_default().push(instrument.clone());
            catalog.entries.insert(
                instrument,
                CatalogEntry {
                    group,
                    normal_spread,
                },
            );
        }

        Ok(catalog)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    groups: Vec<GroupDef>,
}

#[derive(Debug, Deserialize)]
struct GroupDef {
    group: String,
    instruments: Vec<EntryDef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryDef {
    instrument: String,
    normal_spread: f64,
}
