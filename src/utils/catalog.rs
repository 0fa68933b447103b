//! Loading study space records.
//!
//! Records arrive as a JSON array in the shape the map UI consumes.
//! This is the validation boundary: coordinates, times and weekdays are
//! checked here, so the evaluators downstream never see bad data.

use std::collections::HashSet;

use once_cell::sync::OnceCell;

use crate::error::FinderError;
use crate::space::StudySpace;

/// Built-in campus records used until a live data source exists.
const SAMPLE_JSON: &str = include_str!("../../data/study_spaces.json");

static SAMPLE_SPACES: OnceCell<Vec<StudySpace>> = OnceCell::new();

/// Parses and validates a JSON array of study spaces.
///
/// # Returns
/// The spaces in input order, or [`FinderError::InvalidData`] for
/// malformed records and [`FinderError::DuplicateId`] when two records
/// share an id.
pub fn from_json(json: &str) -> Result<Vec<StudySpace>, FinderError> {
    let spaces: Vec<StudySpace> = serde_json::from_str(json).map_err(|e| {
        warn!("Rejected study space data: {}", e);
        FinderError::from(e)
    })?;
    check_unique_ids(&spaces)?;
    info!("Loaded {} study spaces", spaces.len());
    Ok(spaces)
}

/// Rejects collections in which an id appears more than once.
pub fn check_unique_ids(spaces: &[StudySpace]) -> Result<(), FinderError> {
    let mut seen = HashSet::new();
    for space in spaces {
        if !seen.insert(space.id.as_str()) {
            warn!("Duplicate study space id: {}", space.id);
            return Err(FinderError::DuplicateId {
                id: space.id.clone(),
            });
        }
    }
    Ok(())
}

/// The built-in sample spaces, parsed on first use.
pub fn sample_spaces() -> Result<&'static [StudySpace], FinderError> {
    SAMPLE_SPACES
        .get_or_try_init(|| from_json(SAMPLE_JSON))
        .map(Vec::as_slice)
}
