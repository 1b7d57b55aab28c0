// 🏗️ Arrival Parser
// Turns one free-text arrival sentence into raw structured fields.
//
// Expected shape (comma-space separated):
//   2024-04-02, 5 years old male hyena, born in winter, brown color, 90 pounds, from Nairobi, Kenya
//
// This is a keyword/position heuristic, not a grammar. The tie-break rules
// (split on ", ", search for " color", strip a leading "from ") are relied
// on downstream and must stay literal.

use crate::error::{Result, ZooError};
use crate::text::{split, to_lower, trim};
use serde::Serialize;

const FIELD_DELIMITER: &str = ", ";
const MIN_FIELDS: usize = 6;

/// `<age> years old <sex> <species>`
const MIN_DESCRIPTION_TOKENS: usize = 5;

/// Ages are years subtracted from a signed year
const MAX_AGE: u32 = i32::MAX as u32;

// ============================================================================
// CORE TYPES
// ============================================================================

/// ArrivalRow - Output of parse_arrival_row()
///
/// The "raw" view of a line before any IDs, names or dates are derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrivalRow {
    /// Uninterpreted; validated later when the birth date is estimated
    pub arrival_date: String,
    pub age: u32,
    /// Lowercased
    pub sex: String,
    /// Lowercased, not yet checked against the supported set
    pub species: String,
    /// Season word, or "unknown" when none was given
    pub birth_season: String,
    pub color: String,
    /// Pounds
    pub weight: u32,
    pub origin: String,
}

// ============================================================================
// ROW PARSER
// ============================================================================

/// Parse one trimmed, non-empty arrival line
///
/// # Returns
/// * `Ok(ArrivalRow)` - Raw fields pulled from the sentence
/// * `Err(ZooError::Format)` - Fewer than 6 parts, bad age, too few
///   description tokens, or a non-numeric weight
pub fn parse_arrival_row(line: &str) -> Result<ArrivalRow> {
    let parts = split(line, FIELD_DELIMITER);
    if parts.len() < MIN_FIELDS {
        return Err(ZooError::format(format!("Malformed arrival entry: {}", line)));
    }

    let arrival_date = trim(parts[0]).to_string();
    let (age, sex, species) = parse_description(parts[1])?;
    let birth_season = parse_birth_season(parts[2]);
    let color = parse_color(parts[3]);
    let weight = parse_weight(parts[4])?;
    let origin = parse_origin(&parts[5..]);

    Ok(ArrivalRow {
        arrival_date,
        age,
        sex,
        species,
        birth_season,
        color,
        weight,
        origin,
    })
}

/// Part 1: "5 years old male hyena" → (5, "male", "hyena")
///
/// Only the first and the last two tokens are read; anything in between is
/// tolerated.
fn parse_description(section: &str) -> Result<(u32, String, String)> {
    let malformed = || {
        ZooError::format(format!(
            "Unable to parse age/sex/species segment: {}",
            section
        ))
    };

    let tokens: Vec<&str> = section.split_whitespace().collect();
    if tokens.len() < MIN_DESCRIPTION_TOKENS {
        return Err(malformed());
    }

    let age: u32 = tokens[0].parse().map_err(|_| malformed())?;
    if age > MAX_AGE {
        return Err(malformed());
    }
    let sex = to_lower(tokens[tokens.len() - 2]);
    let species = to_lower(tokens[tokens.len() - 1]);

    Ok((age, sex, species))
}

/// Part 2: "born in winter" → "winter"; anything else is used verbatim
fn parse_birth_season(section: &str) -> String {
    let lowered = to_lower(section);

    let season = match lowered.find("born in") {
        Some(pos) => lowered[pos + "born in".len()..]
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_string(),
        None => trim(section).to_string(),
    };

    if season.is_empty() {
        "unknown".to_string()
    } else {
        season
    }
}

/// Part 3: "brown color" → "brown"
fn parse_color(section: &str) -> String {
    // to_lower keeps byte offsets, so the index is valid in `section`
    match to_lower(section).find(" color") {
        Some(pos) => trim(&section[..pos]).to_string(),
        None => trim(section).to_string(),
    }
}

/// Part 4: "90 pounds" → 90
fn parse_weight(section: &str) -> Result<u32> {
    let number = match section.find(' ') {
        Some(pos) => &section[..pos],
        None => section,
    };

    number
        .parse()
        .map_err(|_| ZooError::format(format!("Invalid weight: {}", section)))
}

/// Parts 5..: "from Nairobi", "Kenya" → "Nairobi, Kenya"
fn parse_origin(parts: &[&str]) -> String {
    let origin = parts.join(FIELD_DELIMITER);
    let prefix = "from ";

    let origin = if to_lower(&origin).starts_with(prefix) {
        &origin[prefix.len()..]
    } else {
        origin.as_str()
    };

    trim(origin).to_string()
}

// ============================================================================
// TESTS
// ============================================================================
