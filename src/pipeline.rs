// 🔄 Arrival Pipeline
// raw line → ArrivalRow → {ID, name, birth date, group} → Animal
//
// RunContext owns every piece of mutable allocation state for one run. It is
// single-writer: lines must be fed in file order.

use crate::allocation::{select_social_group, IdCounters, NamePool};
use crate::entities::{Animal, Species};
use crate::error::Result;
use crate::parser::parse_arrival_row;
use crate::temporal::estimate_birth_date;
use std::collections::HashMap;
use tracing::{debug, error};

#[derive(Debug, Default)]
pub struct RunContext {
    names: NamePool,
    id_counters: IdCounters,
    /// Animals of each species already processed (drives group rotation)
    species_counts: HashMap<Species, usize>,
}

impl RunContext {
    pub fn new(names: NamePool) -> Self {
        RunContext {
            names,
            id_counters: IdCounters::new(),
            species_counts: HashMap::new(),
        }
    }

    /// Run one trimmed, non-empty arrival line through every derivation step
    pub fn process_line(&mut self, line: &str) -> Result<Animal> {
        let row = parse_arrival_row(line)?;

        // Species gate: unsupported species stop before any state moves
        let species = Species::from_key(&row.species)?;
        let unique_id = self.id_counters.next_id(species);

        let name = self.names.next_name(species.key());
        let birth_date = estimate_birth_date(row.age, &row.birth_season, &row.arrival_date)?;

        let seen = self.species_counts.entry(species).or_insert(0);
        let group = select_social_group(species.key(), *seen);
        *seen += 1;

        debug!(id = %unique_id, name = %name, habitat = species.habitat_name(), "processed arrival");

        Ok(Animal::new(
            name,
            species,
            unique_id,
            row.age,
            row.sex,
            row.color,
            row.weight,
            row.origin,
            row.arrival_date,
            birth_date,
            group,
        ))
    }

    /// Process every line in order. The first failure aborts the run.
    pub fn process_lines<I, S>(&mut self, lines: I) -> Result<Vec<Animal>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut animals = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match self.process_line(line) {
                Ok(animal) => animals.push(animal),
                Err(e) => {
                    error!(line = index + 1, error = %e, "arrival rejected");
                    return Err(e);
                }
            }
        }

        Ok(animals)
    }

    pub fn names(&self) -> &NamePool {
        &self.names
    }

    pub fn id_counters(&self) -> &IdCounters {
        &self.id_counters
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZooError;
    use crate::report::ReportBuilder;
    use crate::sources::parse_name_pool;

    const KIBA_LINE: &str =
        "2024-04-02, 5 years old male hyena, born in winter, brown color, 90 pounds, from Nairobi, Kenya";

    #[test]
    fn test_end_to_end_single_hyena() {
        let mut ctx = RunContext::new(parse_name_pool("hyena: Kiba").unwrap());
        let animal = ctx.process_line(KIBA_LINE).unwrap();

        assert_eq!(animal.unique_id(), "Hy01");
        assert_eq!(animal.name(), "Kiba");
        assert_eq!(animal.species(), Species::Hyena);
        assert_eq!(animal.birth_date(), "2019-12-15");
        assert_eq!(animal.color(), "brown");
        assert_eq!(animal.sex(), "male");
        assert_eq!(animal.weight(), 90);
        assert_eq!(animal.origin(), "Nairobi, Kenya");
        assert_eq!(animal.arrival_date(), "2024-04-02");
        assert_eq!(animal.social_group(), "Motto Clan");
        assert_eq!(
            format!("{} | {}", animal.report_line(), animal.social_group_label()),
            "Hy01; Kiba; birth date 2019-12-15; brown color; male; 90 pounds; from Nairobi, Kenya; arrived 2024-04-02 | Clan: Motto Clan"
        );
    }

    #[test]
    fn test_groups_rotate_per_species() {
        let mut ctx = RunContext::new(NamePool::new());
        let lines = [
            KIBA_LINE,
            "2024-04-02, 3 years old female lion, born in spring, tan color, 300 pounds, from Kruger, South Africa",
            KIBA_LINE,
        ];
        let animals = ctx.process_lines(lines).unwrap();

        assert_eq!(animals[0].social_group(), "Motto Clan");
        assert_eq!(animals[1].social_group(), "Golden Pride");
        assert_eq!(animals[2].social_group(), "Serengeti Clan");
        assert_eq!(animals[2].unique_id(), "Hy02");
        assert_eq!(animals[2].name(), "Unnamed hyena");
    }

    #[test]
    fn test_unsupported_species_aborts_run() {
        let mut ctx = RunContext::new(NamePool::new());
        let lines = [
            KIBA_LINE,
            "2024-04-02, 2 years old male giraffe, born in summer, spotted color, 900 pounds, from Arusha, Tanzania",
            KIBA_LINE,
        ];
        let result = ctx.process_lines(lines);

        assert!(matches!(result, Err(ZooError::UnsupportedSpecies(ref s)) if s == "giraffe"));
        // Third line never ran
        assert_eq!(ctx.id_counters().count("Hy"), 1);
    }

    #[test]
    fn test_bad_arrival_date_aborts_run() {
        let mut ctx = RunContext::new(NamePool::new());
        let line = "April 2nd, 5 years old male hyena, born in winter, brown color, 90 pounds, from Nairobi";
        assert!(matches!(ctx.process_line(line), Err(ZooError::Format(_))));
    }

    #[test]
    fn test_huge_age_is_format_error() {
        let mut ctx = RunContext::new(parse_name_pool("hyena: Kiba").unwrap());
        let line = "2024-04-02, 4294967295 years old male hyena, born in winter, brown color, 90 pounds, from Nairobi, Kenya";

        assert!(matches!(ctx.process_line(line), Err(ZooError::Format(_))));
        assert_eq!(ctx.id_counters().count("Hy"), 0);
        assert_eq!(ctx.names().remaining("hyena"), 1);
    }

    #[test]
    fn test_names_consumed_in_order() {
        let mut ctx = RunContext::new(parse_name_pool("hyena: Kiba, Zuri").unwrap());
        let animals = ctx.process_lines([KIBA_LINE, KIBA_LINE]).unwrap();

        assert_eq!(animals[0].name(), "Kiba");
        assert_eq!(animals[1].name(), "Zuri");
        assert_eq!(ctx.names().remaining("hyena"), 0);
    }

    #[test]
    fn test_sample_data_files() {
        use crate::sources::{load_name_pool, read_arrival_lines, write_report};
        use std::path::Path;

        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let names = load_name_pool(&root.join("animalNames.txt")).unwrap();
        let lines = read_arrival_lines(&root.join("arrivingAnimals.txt")).unwrap();
        assert_eq!(lines.len(), 7);

        let mut ctx = RunContext::new(names);
        let animals = ctx.process_lines(&lines).unwrap();
        let report = ReportBuilder::from_animals(&animals).build();

        let counts: Vec<usize> = report.habitats.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![3, 2, 1, 1]);

        let last_hyena = report.habitats[0].animals[2].animal;
        assert_eq!(last_hyena.unique_id(), "Hy03");
        assert_eq!(last_hyena.name(), "Ed");
        assert_eq!(last_hyena.social_group(), "Savannah Clan");
        assert_eq!(last_hyena.birth_date(), "2019-12-15");

        // Unrecognized season falls back to the arrival month/day
        let second_hyena = report.habitats[0].animals[1].animal;
        assert_eq!(second_hyena.birth_date(), "2012-04-02");

        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("zooPopulation.txt");
        write_report(&out, &report.render()).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("Hyena Habitat (3)\n"));
        assert!(written.contains("Bear Habitat (1)\n  - Be01; Yogi;"));
    }

    #[test]
    fn test_full_report_text() {
        let mut ctx = RunContext::new(parse_name_pool("hyena: Kiba").unwrap());
        let animals = ctx.process_lines([KIBA_LINE]).unwrap();
        let text = ReportBuilder::from_animals(&animals).build().render();

        assert_eq!(
            text,
            "Hyena Habitat (1)\n\
             \x20 - Hy01; Kiba; birth date 2019-12-15; brown color; male; 90 pounds; from Nairobi, Kenya; arrived 2024-04-02 | Clan: Motto Clan\n\
             \n\
             Lion Habitat (0)\n\
             \n\
             Tiger Habitat (0)\n\
             \n\
             Bear Habitat (0)\n\
             \n"
        );
    }
}
