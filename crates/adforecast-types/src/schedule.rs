//! Campaign schedule (start and end dates).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CampaignDays, ScheduleError};

/// Inclusive date range a campaign runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// First day of the campaign (inclusive).
    pub start: NaiveDate,
    /// Last day of the campaign (inclusive).
    pub end: NaiveDate,
}

impl Schedule {
    /// Creates a new schedule, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if end is before start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ScheduleError> {
        if end < start {
            return Err(ScheduleError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a schedule for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Creates a schedule of `days` days starting at `start`.
    #[must_use]
    pub fn starting(start: NaiveDate, days: CampaignDays) -> Self {
        let end = start + chrono::Duration::days(i64::from(days.get()) - 1);
        Self { start, end }
    }

    /// Returns the number of days in the schedule.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }

    /// Returns the schedule length as a campaign duration.
    #[must_use]
    pub fn days(&self) -> CampaignDays {
        // start <= end is enforced on construction, so there is always at least one day
        CampaignDays::new(self.total_days()).unwrap_or_default()
    }

    /// Returns true if the campaign would start before `today`.
    #[must_use]
    pub fn starts_before(&self, today: NaiveDate) -> bool {
        self.start < today
    }

    /// Returns true if the schedule contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_schedule_new() {
        let schedule = Schedule::new(date(2024, 9, 4), date(2024, 9, 17)).unwrap();
        assert_eq!(schedule.total_days(), 14);
        assert_eq!(schedule.days().get(), 14);
    }

    #[test]
    fn test_schedule_invalid() {
        let result = Schedule::new(date(2024, 9, 17), date(2024, 9, 4));
        assert!(matches!(result, Err(ScheduleError::EndBeforeStart { .. })));
    }

    #[test]
    fn test_single_day() {
        let schedule = Schedule::single_day(date(2024, 9, 4));
        assert_eq!(schedule.total_days(), 1);
        assert!(schedule.contains(date(2024, 9, 4)));
        assert!(!schedule.contains(date(2024, 9, 5)));
    }

    #[test]
    fn test_starting() {
        let schedule = Schedule::starting(date(2024, 9, 4), CampaignDays::default());
        assert_eq!(schedule.end, date(2024, 9, 17));
    }

    #[test]
    fn test_starts_before() {
        let schedule = Schedule::single_day(date(2024, 9, 4));
        assert!(schedule.starts_before(date(2024, 9, 5)));
        assert!(!schedule.starts_before(date(2024, 9, 4)));
    }
}
