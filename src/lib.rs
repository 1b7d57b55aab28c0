// Zoo Keeper - Core Library
// Parses animal arrival logs, derives IDs/names/birth dates/groups, and
// renders the habitat population report.

pub mod text;
pub mod date;
pub mod error;
pub mod parser;
pub mod allocation;
pub mod temporal;
pub mod entities;
pub mod report;
pub mod pipeline;
pub mod sources;
pub mod config;

// Re-export commonly used types
pub use error::{Result, ZooError};
pub use date::{CalendarDate, format_iso_date, parse_iso_date};
pub use parser::{ArrivalRow, parse_arrival_row};
pub use allocation::{IdCounters, NamePool, select_social_group, species_prefix};
pub use temporal::{estimate_birth_date, season_to_month_day};
pub use entities::{Animal, Species};
pub use report::{HabitatSection, PopulationReport, ReportBuilder};
pub use pipeline::RunContext;
pub use sources::{load_name_pool, parse_name_pool, read_arrival_lines, write_report};
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
