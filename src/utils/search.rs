//! Search and filtering of study spaces, as done by the sidebar.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::hours::is_open;
use crate::location::Coordinate;
use crate::nearest::sort_by_distance;
use crate::space::StudySpace;

/// What the user asked to see.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceFilter {
    /// Case-insensitive substring of the space name. Empty matches all.
    pub query: String,
    /// Hide spaces that are closed right now.
    pub open_only: bool,
    /// When present, results are ordered nearest first.
    pub user_location: Option<Coordinate>,
}

/// Case-insensitive substring match on the space name.
pub fn matches_query(space: &StudySpace, query: &str) -> bool {
    space.name.to_lowercase().contains(&query.to_lowercase())
}

/// Applies `filter` to `spaces`.
///
/// Spaces are first ordered by distance from the user (when known,
/// otherwise input order is kept) and then filtered by name and, if
/// requested, by being open at `now` in `tz`.
pub fn filter_spaces<'a>(
    spaces: &'a [StudySpace],
    filter: &SpaceFilter,
    now: &DateTime<Utc>,
    tz: &Tz,
) -> Vec<&'a StudySpace> {
    let ordered = match &filter.user_location {
        Some(user) => sort_by_distance(user, spaces),
        None => spaces.iter().collect(),
    };
    let result: Vec<&StudySpace> = ordered
        .into_iter()
        .filter(|space| matches_query(space, &filter.query))
        .filter(|space| !filter.open_only || is_open(space, now, tz))
        .collect();
    debug!(
        "(filter_spaces) {:?} kept {} of {} spaces",
        filter,
        result.len(),
        spaces.len()
    );
    result
}

#[cfg(test)]
mod search_tests {
    use super::*;
    use crate::catalog::sample_spaces;
    use chrono::TimeZone;
    use chrono_tz::Europe::London;

    fn names<'a>(spaces: &[&'a StudySpace]) -> Vec<&'a str> {
        spaces.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_matches_query() {
        let spaces = sample_spaces().unwrap();
        assert!(matches_query(&spaces[0], ""));
        assert!(matches_query(&spaces[0], "LIBR"));
        assert!(matches_query(&spaces[6], "central lib"));
        assert!(!matches_query(&spaces[1], "library"));
    }

    #[test]
    fn test_no_filter_keeps_input_order() {
        let spaces = sample_spaces().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let result = filter_spaces(spaces, &SpaceFilter::default(), &now, &London);
        assert_eq!(result.len(), 10);
        assert_eq!(result[0].id, "1");
        assert_eq!(result[9].id, "10");
    }

    #[test]
    fn test_query_filter() {
        let spaces = sample_spaces().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let filter = SpaceFilter {
            query: "library".to_string(),
            ..Default::default()
        };
        let result = filter_spaces(spaces, &filter, &now, &London);
        assert_eq!(names(&result), vec!["Library", "Central Library"]);
    }

    #[test]
    fn test_open_only_on_sunday() {
        // 2024-01-07 is a Sunday: only the 24h library opens.
        let spaces = sample_spaces().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap();
        let filter = SpaceFilter {
            open_only: true,
            ..Default::default()
        };
        let result = filter_spaces(spaces, &filter, &now, &London);
        assert_eq!(names(&result), vec!["Library"]);
    }

    #[test]
    fn test_open_only_friday_evening() {
        // Friday 2024-01-05 at 19:45: Grosvenor East and Geoffrey Manton
        // have closed at 19:30, Central Library at 17:00.
        let spaces = sample_spaces().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 19, 45, 0).unwrap();
        let filter = SpaceFilter {
            open_only: true,
            ..Default::default()
        };
        let result = filter_spaces(spaces, &filter, &now, &London);
        assert_eq!(
            names(&result),
            vec![
                "Library",
                "Dalton Building",
                "Business School",
                "Student Union",
                "Institute of Sport",
                "Brooks Building",
                "Sandra Burslem"
            ]
        );
    }

    #[test]
    fn test_sorted_by_user_location() {
        let spaces = sample_spaces().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let filter = SpaceFilter {
            user_location: Some(Coordinate::new(-2.244521, 53.477839).unwrap()),
            ..Default::default()
        };
        let result = filter_spaces(spaces, &filter, &now, &London);
        assert_eq!(result.len(), 10);
        assert_eq!(result[0].name, "Central Library");
    }
}
