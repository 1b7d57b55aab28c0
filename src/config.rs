// ⚙️ Run Configuration
// File locations for one run. Defaults match the fixed data layout; flags override.

use crate::error::{Result, ZooError};
use std::path::PathBuf;

pub const DEFAULT_NAMES_PATH: &str = "data/animalNames.txt";
pub const DEFAULT_ARRIVALS_PATH: &str = "data/arrivingAnimals.txt";
pub const DEFAULT_REPORT_PATH: &str = "zooPopulation.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub names_path: PathBuf,
    pub arrivals_path: PathBuf,
    pub report_path: PathBuf,
    /// Also export the grouped population as JSON when set
    pub json_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            names_path: PathBuf::from(DEFAULT_NAMES_PATH),
            arrivals_path: PathBuf::from(DEFAULT_ARRIVALS_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            json_path: None,
        }
    }
}

impl Config {
    /// Build from command-line arguments (program name already stripped)
    ///
    /// Supported: `--names <path>`, `--arrivals <path>`, `--report <path>`,
    /// `--json <path>`.
    pub fn from_args<I, S>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .map(PathBuf::from)
                    .ok_or_else(|| ZooError::format(format!("Missing value for {}", flag)))
            };

            match flag.as_str() {
                "--names" => config.names_path = value()?,
                "--arrivals" => config.arrivals_path = value()?,
                "--report" => config.report_path = value()?,
                "--json" => config.json_path = Some(value()?),
                _ => return Err(ZooError::format(format!("Unknown argument: {}", flag))),
            }
        }

        Ok(config)
    }
}
