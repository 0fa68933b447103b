//! Weekly opening hours of a study space.
//!
//! A [`WeeklySchedule`] always holds exactly seven [`DaySchedule`]s,
//! one per [`Weekday`], so a lookup can never miss.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::FinderError;

/// Wall-clock time of day with minute precision, written as "HH:MM".
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Builds a time from hours (0-23) and minutes (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, FinderError> {
        if hour >= 24 || minute >= 60 {
            return Err(FinderError::InvalidTime {
                value: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }

    /// Minutes since midnight, always below 1440.
    pub fn minutes(&self) -> u16 {
        self.0
    }
}

/// Seconds are dropped, so 19:59:59 is still 19:59.
impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }
}

impl FromStr for TimeOfDay {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M")
            .map(TimeOfDay::from)
            .map_err(|_| FinderError::InvalidTime {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = FinderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Opening and closing time of a single day.
///
/// `open == close` marks a day on which the space does not open at all.
/// Spans past midnight are not supported: a day with `close < open`
/// never counts as open.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaySchedule {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl DaySchedule {
    /// Creates a day open on `[open, close)`.
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        DaySchedule { open, close }
    }

    /// A day that stays closed, stored as "00:00" to "00:00".
    pub fn closed() -> Self {
        DaySchedule {
            open: TimeOfDay::MIDNIGHT,
            close: TimeOfDay::MIDNIGHT,
        }
    }

    /// True for the `open == close` sentinel.
    pub fn is_closed_all_day(&self) -> bool {
        self.open == self.close
    }

    /// Whether `time` falls inside the half-open window `[open, close)`.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        if self.is_closed_all_day() {
            return false;
        }
        self.open <= time && time < self.close
    }
}

impl fmt::Display for DaySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.open, self.close)
    }
}

/// Opening hours for a full week, indexed by [`Weekday`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WeeklyScheduleRecord", into = "WeeklyScheduleRecord")]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    /// Creates a schedule from seven days, Monday first.
    pub fn new(days: [DaySchedule; 7]) -> Self {
        WeeklySchedule { days }
    }

    /// The same hours on every day of the week.
    pub fn uniform(day: DaySchedule) -> Self {
        WeeklySchedule { days: [day; 7] }
    }

    /// Opening hours on `weekday`.
    pub fn get(&self, weekday: Weekday) -> &DaySchedule {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    /// Returns a copy of the schedule with `weekday` replaced.
    pub fn with_day(mut self, weekday: Weekday, day: DaySchedule) -> Self {
        self.days[weekday.num_days_from_monday() as usize] = day;
        self
    }

    /// Iterates Monday to Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        std::iter::successors(Some(Weekday::Mon), |day| {
            (*day != Weekday::Sun).then(|| day.succ())
        })
        .zip(self.days.iter())
    }
}

/// Wire shape of a week: an object keyed by capitalized English day
/// names. Every day must be present.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
struct WeeklyScheduleRecord {
    monday: DaySchedule,
    tuesday: DaySchedule,
    wednesday: DaySchedule,
    thursday: DaySchedule,
    friday: DaySchedule,
    saturday: DaySchedule,
    sunday: DaySchedule,
}

impl From<WeeklyScheduleRecord> for WeeklySchedule {
    fn from(r: WeeklyScheduleRecord) -> Self {
        WeeklySchedule::new([
            r.monday,
            r.tuesday,
            r.wednesday,
            r.thursday,
            r.friday,
            r.saturday,
            r.sunday,
        ])
    }
}

impl From<WeeklySchedule> for WeeklyScheduleRecord {
    fn from(s: WeeklySchedule) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = s.days;
        WeeklyScheduleRecord {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }
}
