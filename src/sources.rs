// 📂 Input/Output Sources
// Thin wrappers: name-pool file → NamePool, arrivals file → lines, report → file.

use crate::allocation::NamePool;
use crate::error::{Result, ZooError};
use crate::text::{split, to_lower, trim};
use std::fs;
use std::path::Path;
use tracing::info;

// ============================================================================
// NAME POOL
// ============================================================================

/// Parse `<species>: <name1>, <name2>, ...` lines.
///
/// Species is trimmed and lowercased; names are trimmed and empty ones are
/// dropped. Blank lines are skipped. A repeated species replaces the earlier
/// list. A non-blank line without ':' is a Format error.
pub fn parse_name_pool(content: &str) -> Result<NamePool> {
    let mut pool = NamePool::new();

    for raw in content.lines() {
        let line = trim(raw);
        if line.is_empty() {
            continue;
        }

        let colon = line.find(':').ok_or_else(|| {
            ZooError::format(format!("Expected ':' in name line: {}", line))
        })?;

        let species = to_lower(trim(&line[..colon]));
        let names: Vec<String> = split(trim(&line[colon + 1..]), ",")
            .into_iter()
            .map(trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        pool.insert(species, names);
    }

    Ok(pool)
}

pub fn load_name_pool(path: &Path) -> Result<NamePool> {
    let content = fs::read_to_string(path).map_err(|e| ZooError::resource(path, e))?;
    let pool = parse_name_pool(&content)?;
    info!(path = %path.display(), species = pool.species_count(), "loaded name pool");
    Ok(pool)
}

// ============================================================================
// ARRIVALS
// ============================================================================

/// Trimmed, non-blank lines in file order
pub fn arrival_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_arrival_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| ZooError::resource(path, e))?;
    let lines = arrival_lines(&content);
    info!(path = %path.display(), lines = lines.len(), "read arrivals");
    Ok(lines)
}

// ============================================================================
// REPORT SINK
// ============================================================================

pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report).map_err(|e| ZooError::resource(path, e))?;
    info!(path = %path.display(), bytes = report.len(), "wrote report");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
