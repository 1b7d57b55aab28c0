// ❌ Error Taxonomy
// Every failure aborts the run: there is no skip-and-continue mode.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, parsing, or writing zoo data
#[derive(Debug, Error)]
pub enum ZooError {
    /// Malformed arrival row, malformed date, malformed name-pool line,
    /// or a bad command-line flag
    #[error("{0}")]
    Format(String),

    /// Species outside the closed set {hyena, lion, tiger, bear}
    #[error("Unsupported species: {0}")]
    UnsupportedSpecies(String),

    /// Input could not be opened/read, or output could not be created
    #[error("Unable to access {}: {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ZooError {
    pub fn format(message: impl Into<String>) -> Self {
        ZooError::Format(message.into())
    }

    pub fn resource(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ZooError::Resource {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ZooError>;
