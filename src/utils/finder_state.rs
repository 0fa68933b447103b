//! Stores the state of the finder

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;

use crate::catalog;
use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::hours;
use crate::location::Coordinate;
use crate::nearest::nearest;
use crate::space::StudySpace;
use crate::status::Status;

/// Study spaces and the configuration they are queried with, set
/// together so readers never see one without the other
pub static FINDER: OnceCell<(Vec<StudySpace>, FinderConfig)> = OnceCell::new();

/// Initializes the finder with the given spaces and configuration.
pub fn init_finder(spaces: Vec<StudySpace>, config: FinderConfig) -> Result<(), FinderError> {
    info!("Initializing finder with {} spaces", spaces.len());
    if is_finder_initialized() {
        error!("Finder already initialized");
        return Err(FinderError::AlreadyInitialized);
    }
    catalog::check_unique_ids(&spaces)?;
    FINDER
        .set((spaces, config))
        .map_err(|_| FinderError::AlreadyInitialized)?;
    info!(
        "Finder ready, reference timezone {}",
        config.reference_timezone
    );
    Ok(())
}

/// Initializes the finder from a JSON array of study spaces.
pub fn init_finder_from_json(json: &str, config: FinderConfig) -> Result<(), FinderError> {
    init_finder(catalog::from_json(json)?, config)
}

/// Checks if finder is initialized
pub fn is_finder_initialized() -> bool {
    FINDER.get().is_some()
}

/// Gets all spaces, in catalog order
pub fn get_spaces() -> Result<&'static [StudySpace], FinderError> {
    FINDER
        .get()
        .map(|(spaces, _)| spaces.as_slice())
        .ok_or(FinderError::NotInitialized)
}

/// Gets the finder configuration, or the default one before
/// initialization.
pub fn get_config() -> FinderConfig {
    FINDER
        .get()
        .map(|(_, config)| *config)
        .unwrap_or_default()
}

/// Gets space by id
pub fn get_space_by_id(id: &str) -> Result<&'static StudySpace, FinderError> {
    debug!("id: {}", id);
    get_spaces()?
        .iter()
        .find(|space| space.id == id)
        .ok_or_else(|| FinderError::SpaceNotFound { id: id.to_string() })
}

/// Takes the user location and returns the nearest space, if any
pub fn get_nearest_space(
    user_location: &Coordinate,
) -> Result<Option<&'static StudySpace>, FinderError> {
    info!("Getting nearest space");
    debug!("user_location: {}", user_location);
    let space = nearest(user_location, get_spaces()?);
    debug!("nearest space: {:?}", space.map(|s| &s.id));
    Ok(space)
}

/// Open/closed status of every space at `now`, in catalog order.
///
/// Spaces and timezone are read from the same snapshot.
pub fn get_statuses(
    now: &DateTime<Utc>,
) -> Result<Vec<(&'static StudySpace, Status)>, FinderError> {
    let (spaces, config) = FINDER.get().ok_or(FinderError::NotInitialized)?;
    let tz = config.reference_timezone;
    Ok(spaces
        .iter()
        .map(|space| (space, hours::status(space, now, &tz)))
        .collect())
}

#[cfg(test)]
mod finder_state_tests {
    use super::*;
    use crate::catalog::sample_spaces;
    use chrono::TimeZone;

    // The state is process-wide, so everything touching it runs in a
    // single test.
    #[test]
    fn test_finder() {
        assert!(!is_finder_initialized());
        assert_eq!(get_spaces(), Err(FinderError::NotInitialized));
        assert_eq!(get_config(), FinderConfig::default());
        assert_eq!(get_statuses(&Utc::now()), Err(FinderError::NotInitialized));

        let spaces = sample_spaces().unwrap().to_vec();
        let tokyo = FinderConfig::with_timezone_name("Asia/Tokyo").unwrap();
        init_finder(spaces.clone(), tokyo).unwrap();
        assert!(is_finder_initialized());
        assert_eq!(get_config(), tokyo);
        assert_eq!(
            init_finder(spaces, FinderConfig::default()),
            Err(FinderError::AlreadyInitialized)
        );

        assert_eq!(get_space_by_id("8").unwrap().name, "Grosvenor East");
        assert_eq!(
            get_space_by_id("nope"),
            Err(FinderError::SpaceNotFound {
                id: "nope".to_string()
            })
        );

        // Standing at St Peter's Square.
        let user = Coordinate::new(-2.2440, 53.4780).unwrap();
        let nearest = get_nearest_space(&user).unwrap().unwrap();
        assert_eq!(nearest.name, "Central Library");

        // Monday 00:30 UTC is 09:30 in Tokyo, when every space is open.
        // In London only the 24h library would be.
        let now = Utc.with_ymd_and_hms(2024, 1, 8, 0, 30, 0).unwrap();
        let statuses = get_statuses(&now).unwrap();
        assert_eq!(statuses.len(), 10);
        let open: Vec<&str> = statuses
            .iter()
            .filter(|(_, status)| *status == Status::Open)
            .map(|(space, _)| space.id.as_str())
            .collect();
        assert_eq!(open.len(), 10);
    }
}
