use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::capacity::CapacityTable;

/// Shared, read-only application state.
///
/// Each request gets its own RNG from [`AppState::rng`], so nothing here is
/// mutated after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub capacities: CapacityTable,
    seed: Option<u64>,
}

impl AppState {
    pub fn new(capacities: CapacityTable, seed: Option<u64>) -> Self {
        Self { capacities, seed }
    }

    /// Fresh RNG for one request: fixed seed if configured, OS entropy otherwise.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CapacityTable::builtin(), None)
    }
}
