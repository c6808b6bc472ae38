use crate::services::catalog::ReferenceCatalog;
use crate::types::{InstrumentGroup, InstrumentId, QuoteSnapshot};
use dashmap::DashMap;
use std::sync::Arc;

/// Latest snapshot held for an instrument.
#[derive(Debug, Clone)]
struct BoardEntry {
    snapshot: QuoteSnapshot,
    updates: u64,
}

/// Latest quote snapshot per instrument.
///
/// Snapshots are replaced whole, so a reader never sees fields from two
/// different ticks for the same instrument.
pub struct QuoteBoard {
    entries: DashMap<InstrumentId, BoardEntry>,
}

impl QuoteBoard {
    /// Create a new quote board.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Replace the snapshot for its instrument.
    pub fn update(&self, snapshot: QuoteSnapshot) {
        let mut entry = self
            .entries
            .entry(snapshot.instrument.clone())
            .or_insert_with(|| BoardEntry {
                snapshot: snapshot.clone(),
                updates: 0,
            });
        entry.snapshot = snapshot;
        entry.updates += 1;
    }

    /// Get the latest snapshot for an instrument.
    pub fn get(&self, instrument: &InstrumentId) -> Option<QuoteSnapshot> {
        self.entries.get(instrument).map(|e| e.snapshot.clone())
    }

    /// Snapshots for a group in catalog order, skipping instruments not yet quoted.
    pub fn rows(&self, catalog: &ReferenceCatalog, group: InstrumentGroup) -> Vec<QuoteSnapshot> {
        catalog
            .group_members(group)
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// Number of updates received for an instrument.
    pub fn update_count(&self, instrument: &InstrumentId) -> u64 {
        self.entries.get(instrument).map(|e| e.updates).unwrap_or(0)
    }

    /// Total updates across all instruments.
    pub fn total_updates(&self) -> u64 {
        self.entries.iter().map(|e| e.updates).sum()
    }

    /// Most recent snapshot timestamp in milliseconds.
    pub fn last_timestamp(&self) -> Option<i64> {
        self.entries.iter().map(|e| e.snapshot.timestamp).max()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QuoteBoard {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}
