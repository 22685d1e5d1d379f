//! Static capacity lookup for the known temple locations.

use std::collections::HashMap;

/// Capacity assumed for ids the table does not know.
pub const DEFAULT_CAPACITY: u32 = 30_000;

const BUILTIN: [(&str, u32); 3] = [("dwarka", 50_000), ("ambaji", 30_000), ("somnath", 40_000)];

/// Maximum daily visitor count per location id.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct CapacityTable {
    capacities: HashMap<String, u32>,
}

impl CapacityTable {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().map(|(id, cap)| (id.to_string(), *cap)))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, u32)>) -> Self {
        Self {
            capacities: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, location_id: &str) -> Option<u32> {
        self.capacities.get(location_id).copied()
    }

    pub fn contains(&self, location_id: &str) -> bool {
        self.capacities.contains_key(location_id)
    }

    /// Permissive lookup: unknown ids get [`DEFAULT_CAPACITY`].
    pub fn capacity_or_default(&self, location_id: &str) -> u32 {
        self.get(location_id).unwrap_or(DEFAULT_CAPACITY)
    }
}

impl Default for CapacityTable {
    fn default() -> Self {
        Self::builtin()
    }
}
