// 📊 Population Report
// Buckets animals by habitat and renders the text (and optional JSON) report.

use crate::entities::{Animal, Species};
use serde::Serialize;
use std::collections::HashMap;

// ============================================================================
// REPORT TYPES
// ============================================================================

/// One habitat and the animals assigned to it, in arrival order
#[derive(Debug, Clone, Serialize)]
pub struct HabitatSection<'a> {
    pub habitat: &'static str,
    pub count: usize,
    pub animals: Vec<AnimalEntry<'a>>,
}

/// JSON view of an animal: its record plus the rendered group label
#[derive(Debug, Clone, Serialize)]
pub struct AnimalEntry<'a> {
    #[serde(flatten)]
    pub animal: &'a Animal,
    pub social_group_label: String,
}

/// Habitats in fixed display order. Empty habitats are still present.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationReport<'a> {
    pub total: usize,
    pub habitats: Vec<HabitatSection<'a>>,
}

// ============================================================================
// REPORT BUILDER
// ============================================================================

/// Accumulates animals by `habitat_name()`, preserving arrival order
#[derive(Debug, Default)]
pub struct ReportBuilder<'a> {
    by_habitat: HashMap<&'static str, Vec<&'a Animal>>,
    total: usize,
}

impl<'a> ReportBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, animal: &'a Animal) {
        self.by_habitat
            .entry(animal.habitat_name())
            .or_default()
            .push(animal);
        self.total += 1;
    }

    /// Bucket a full arrival-ordered sequence in one go
    pub fn from_animals(animals: &'a [Animal]) -> Self {
        let mut builder = Self::new();
        for animal in animals {
            builder.add(animal);
        }
        builder
    }

    pub fn build(mut self) -> PopulationReport<'a> {
        let habitats = Species::ALL
            .iter()
            .map(|species| {
                let habitat = species.habitat_name();
                let animals: Vec<AnimalEntry<'a>> = self
                    .by_habitat
                    .remove(habitat)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|animal| AnimalEntry {
                        animal,
                        social_group_label: animal.social_group_label(),
                    })
                    .collect();

                HabitatSection {
                    habitat,
                    count: animals.len(),
                    animals,
                }
            })
            .collect();

        PopulationReport {
            total: self.total,
            habitats,
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl<'a> PopulationReport<'a> {
    /// Plain-text report:
    ///
    /// ```text
    /// Hyena Habitat (1)
    ///   - Hy01; Kiba; ... | Clan: Motto Clan
    ///
    /// Lion Habitat (0)
    ///
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();

        for section in &self.habitats {
            out.push_str(&format!("{} ({})\n", section.habitat, section.count));
            for entry in &section.animals {
                out.push_str(&format!(
                    "  - {} | {}\n",
                    entry.animal.report_line(),
                    entry.social_group_label
                ));
            }
            out.push('\n');
        }

        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(species: Species, id: &str, name: &str, group: &str) -> Animal {
        Animal::new(
            name.to_string(),
            species,
            id.to_string(),
            5,
            "male".to_string(),
            "brown".to_string(),
            90,
            "Nairobi, Kenya".to_string(),
            "2024-04-02".to_string(),
            "2019-12-15".to_string(),
            group.to_string(),
        )
    }

    #[test]
    fn test_empty_report_lists_every_habitat() {
        let report = ReportBuilder::new().build();
        assert_eq!(
            report.render(),
            "Hyena Habitat (0)\n\nLion Habitat (0)\n\nTiger Habitat (0)\n\nBear Habitat (0)\n\n"
        );
    }

    #[test]
    fn test_sections_follow_fixed_order_not_arrival_order() {
        let animals = vec![
            animal(Species::Bear, "Be01", "Grizz", "Highland Sleuth"),
            animal(Species::Hyena, "Hy01", "Kiba", "Motto Clan"),
        ];
        let report = ReportBuilder::from_animals(&animals).build();

        let order: Vec<&str> = report.habitats.iter().map(|s| s.habitat).collect();
        assert_eq!(
            order,
            vec!["Hyena Habitat", "Lion Habitat", "Tiger Habitat", "Bear Habitat"]
        );
        assert_eq!(report.total, 2);
        assert_eq!(report.habitats[0].count, 1);
        assert_eq!(report.habitats[3].count, 1);
    }

    #[test]
    fn test_arrival_order_kept_within_habitat() {
        let animals = vec![
            animal(Species::Tiger, "Ti01", "Raja", "Ember Ambush"),
            animal(Species::Lion, "Li01", "Nala", "Golden Pride"),
            animal(Species::Tiger, "Ti02", "Shere", "Jungle Ambush"),
        ];
        let report = ReportBuilder::from_animals(&animals).build();

        let tigers: Vec<&str> = report.habitats[2]
            .animals
            .iter()
            .map(|e| e.animal.unique_id())
            .collect();
        assert_eq!(tigers, vec!["Ti01", "Ti02"]);
    }

    #[test]
    fn test_render_body_line() {
        let animals = vec![animal(Species::Hyena, "Hy01", "Kiba", "Motto Clan")];
        let text = ReportBuilder::from_animals(&animals).build().render();

        assert!(text.starts_with(
            "Hyena Habitat (1)\n  - Hy01; Kiba; birth date 2019-12-15; brown color; male; 90 pounds; from Nairobi, Kenya; arrived 2024-04-02 | Clan: Motto Clan\n\nLion Habitat (0)\n"
        ));
    }

    #[test]
    fn test_json_export() {
        let animals = vec![animal(Species::Hyena, "Hy01", "Kiba", "Motto Clan")];
        let json = ReportBuilder::from_animals(&animals).build().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 1);
        assert_eq!(value["habitats"][0]["habitat"], "Hyena Habitat");
        assert_eq!(value["habitats"][0]["animals"][0]["unique_id"], "Hy01");
        assert_eq!(value["habitats"][0]["animals"][0]["species"], "hyena");
        assert_eq!(
            value["habitats"][0]["animals"][0]["social_group_label"],
            "Clan: Motto Clan"
        );
        assert_eq!(value["habitats"][1]["count"], 0);
    }
}
