// 🦁 Animal Entity - one zoo resident
//
// Shared attributes live here once; habitat name and group label are looked
// up from the species tag instead of being overridden per kind.

use super::species::Species;
use serde::Serialize;

// ============================================================================
// ANIMAL ENTITY
// ============================================================================

/// A fully derived animal record. Immutable after construction.
///
/// The species tag is a `Species`, so an animal of an unsupported kind
/// cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Animal {
    name: String,
    species: Species,
    unique_id: String,
    age: u32,
    sex: String,
    color: String,
    /// Pounds
    weight: u32,
    origin: String,
    arrival_date: String,
    birth_date: String,
    social_group: String,
}

impl Animal {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        species: Species,
        unique_id: String,
        age: u32,
        sex: String,
        color: String,
        weight: u32,
        origin: String,
        arrival_date: String,
        birth_date: String,
        social_group: String,
    ) -> Self {
        Animal {
            name,
            species,
            unique_id,
            age,
            sex,
            color,
            weight,
            origin,
            arrival_date,
            birth_date,
            social_group,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn sex(&self) -> &str {
        &self.sex
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn arrival_date(&self) -> &str {
        &self.arrival_date
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    /// Bare group name, e.g. "Motto Clan"
    pub fn social_group(&self) -> &str {
        &self.social_group
    }

    pub fn habitat_name(&self) -> &'static str {
        self.species.habitat_name()
    }

    /// Group name with the species collective noun, e.g. "Clan: Motto Clan"
    pub fn social_group_label(&self) -> String {
        format!("{}{}", self.species.group_label_prefix(), self.social_group)
    }

    /// One line of the population report (without the group label)
    pub fn report_line(&self) -> String {
        format!(
            "{}; {}; birth date {}; {} color; {}; {} pounds; from {}; arrived {}",
            self.unique_id,
            self.name,
            self.birth_date,
            self.color,
            self.sex,
            self.weight,
            self.origin,
            self.arrival_date
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
