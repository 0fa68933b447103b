//! Opening-hours evaluation.
//!
//! All functions take the current instant in UTC together with the
//! reference timezone the venue operates in. The weekday and the time of
//! day are derived in that zone, never in the caller's local zone, so a
//! caller running abroad or across a DST change still sees the venue's
//! own wall clock.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

use crate::schedule::{DaySchedule, TimeOfDay};
use crate::space::StudySpace;
use crate::status::Status;

/// Opening hours that apply to `space` on the day `now` falls on in
/// `tz`, together with the wall-clock time of day in that zone.
fn todays_hours<'a>(
    space: &'a StudySpace,
    now: &DateTime<Utc>,
    tz: &Tz,
) -> (&'a DaySchedule, TimeOfDay) {
    let local = now.with_timezone(tz);
    let day = space.opening_hours.get(local.weekday());
    (day, TimeOfDay::from(local.time()))
}

/// Checks whether a study space is open at `now`.
///
/// A day whose opening and closing times are equal is closed all day.
/// Otherwise the space is open on the half-open window `[open, close)`.
/// Windows never wrap past midnight.
///
/// # Arguments
/// * `space` - The study space to check.
/// * `now` - The instant to evaluate.
/// * `tz` - Reference timezone of the venue.
pub fn is_open(space: &StudySpace, now: &DateTime<Utc>, tz: &Tz) -> bool {
    let (day, time) = todays_hours(space, now, tz);
    let open = day.contains(time);
    debug!(
        "(is_open) space {} at {} on {}: {}",
        space.id, time, day, open
    );
    open
}

/// Returns the closing time of the current day if the space is open at
/// `now`, otherwise [`None`].
///
/// The next opening is never looked up: a closed space has no "open
/// until" value.
pub fn open_until(space: &StudySpace, now: &DateTime<Utc>, tz: &Tz) -> Option<TimeOfDay> {
    let (day, time) = todays_hours(space, now, tz);
    day.contains(time).then_some(day.close)
}

/// Open or closed status of a space at `now`.
pub fn status(space: &StudySpace, now: &DateTime<Utc>, tz: &Tz) -> Status {
    Status::from(is_open(space, now, tz))
}
