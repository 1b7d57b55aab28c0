// 🐾 Species - closed set of animal kinds
//
// Adding a kind means adding a variant here; every match below then refuses
// to compile until the new kind has its prefix, habitat, label and groups.

use crate::error::{Result, ZooError};
use crate::text::to_lower;
use serde::{Deserialize, Serialize};

// ============================================================================
// SPECIES TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Hyena,
    Lion,
    Tiger,
    Bear,
}

impl Species {
    /// Report order: habitats always print in this sequence
    pub const ALL: [Species; 4] = [Species::Hyena, Species::Lion, Species::Tiger, Species::Bear];

    /// Resolve a species name (any case). This is the only gate into the
    /// closed set; anything else is `UnsupportedSpecies`.
    pub fn from_key(species: &str) -> Result<Species> {
        match to_lower(species).as_str() {
            "hyena" => Ok(Species::Hyena),
            "lion" => Ok(Species::Lion),
            "tiger" => Ok(Species::Tiger),
            "bear" => Ok(Species::Bear),
            _ => Err(ZooError::UnsupportedSpecies(species.to_string())),
        }
    }

    /// Lowercase key used by name pools and group tables
    pub fn key(&self) -> &'static str {
        match self {
            Species::Hyena => "hyena",
            Species::Lion => "lion",
            Species::Tiger => "tiger",
            Species::Bear => "bear",
        }
    }

    /// Two-letter prefix for unique IDs (Hy01, Li03, ...)
    pub fn prefix(&self) -> &'static str {
        match self {
            Species::Hyena => "Hy",
            Species::Lion => "Li",
            Species::Tiger => "Ti",
            Species::Bear => "Be",
        }
    }

    pub fn habitat_name(&self) -> &'static str {
        match self {
            Species::Hyena => "Hyena Habitat",
            Species::Lion => "Lion Habitat",
            Species::Tiger => "Tiger Habitat",
            Species::Bear => "Bear Habitat",
        }
    }

    /// Prefix rendered in front of the social group ("Clan: Motto Clan")
    pub fn group_label_prefix(&self) -> &'static str {
        match self {
            Species::Hyena => "Clan: ",
            Species::Lion => "Pride: ",
            Species::Tiger => "Ambush: ",
            Species::Bear => "Sleuth: ",
        }
    }

    /// Candidate social groups, assigned round-robin
    pub fn social_groups(&self) -> &'static [&'static str] {
        match self {
            Species::Hyena => &["Motto Clan", "Serengeti Clan", "Savannah Clan", "Spotted Clan"],
            Species::Lion => &["Golden Pride", "Savanna Pride", "Sunset Pride", "River Pride"],
            Species::Tiger => &["Ember Ambush", "Jungle Ambush", "River Ambush", "Shadow Ambush"],
            Species::Bear => &[
                "Highland Sleuth",
                "Forest Sleuth",
                "Mountain Sleuth",
                "Valley Sleuth",
            ],
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
