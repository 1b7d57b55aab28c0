// 🏷️ Allocators - IDs, names and social groups
//
// All three are stateful and sequential: they must be called in arrival
// order by a single owner. State is passed in explicitly; nothing here is
// global.

use crate::entities::Species;
use crate::error::Result;
use std::collections::{HashMap, VecDeque};
use tracing::warn;

// ============================================================================
// UNIQUE IDS
// ============================================================================

/// Two-letter ID prefix for a species name. Fails with `UnsupportedSpecies`
/// for anything outside the closed set.
pub fn species_prefix(species: &str) -> Result<&'static str> {
    Species::from_key(species).map(|s| s.prefix())
}

/// Running per-prefix counters. Monotonic; never reset within a run.
#[derive(Debug, Clone, Default)]
pub struct IdCounters {
    counters: HashMap<&'static str, u32>,
}

impl IdCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the counter for `species` and return e.g. "Hy01"
    pub fn next_id(&mut self, species: Species) -> String {
        let prefix = species.prefix();
        let count = self.counters.entry(prefix).or_insert(0);
        *count += 1;
        format!("{}{:02}", prefix, *count)
    }

    /// How many IDs have been handed out for a prefix
    pub fn count(&self, prefix: &str) -> u32 {
        self.counters.get(prefix).copied().unwrap_or(0)
    }
}

// ============================================================================
// NAME POOL
// ============================================================================

/// Unused names per lowercased species, consumed front to back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePool {
    names: HashMap<String, VecDeque<String>>,
}

impl NamePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list for a species (later lines win)
    pub fn insert(&mut self, species_key: impl Into<String>, names: Vec<String>) {
        self.names.insert(species_key.into(), names.into());
    }

    /// Pop the next name, or fall back to "Unnamed <species>" when exhausted
    pub fn next_name(&mut self, species_key: &str) -> String {
        match self.names.get_mut(species_key).and_then(|pool| pool.pop_front()) {
            Some(name) => name,
            None => {
                warn!(species = species_key, "name pool exhausted, using fallback name");
                format!("Unnamed {}", species_key)
            }
        }
    }

    pub fn remaining(&self, species_key: &str) -> usize {
        self.names.get(species_key).map_or(0, |pool| pool.len())
    }

    pub fn species_count(&self) -> usize {
        self.names.len()
    }
}

// ============================================================================
// SOCIAL GROUPS
// ============================================================================

/// Round-robin group for the `occurrence`-th animal (0-based) of a species.
/// Unknown species yields "Unknown".
pub fn select_social_group(species_key: &str, occurrence: usize) -> String {
    let options = match Species::from_key(species_key) {
        Ok(species) => species.social_groups(),
        Err(_) => return "Unknown".to_string(),
    };

    if options.is_empty() {
        return "Unknown".to_string();
    }
    options[occurrence % options.len()].to_string()
}

// ============================================================================
// TESTS
// ============================================================================
