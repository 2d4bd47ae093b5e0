//! Campaign settings chosen by the user.

use adforecast_estimate::ForecastRequest;
use adforecast_types::{
    Budget, CampaignDays, CampaignGoal, ForecastError, MINIMUM_DAILY_BUDGET, Schedule,
    ScheduleError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use url::Url;

/// Project name the planner starts with.
pub const DEFAULT_PROJECT_NAME: &str = "Akıllı Lens Ameliyatı – Göz İçi Mercek";

/// Call to action the planner starts with.
pub const DEFAULT_CTA: &str = "Daha Fazla Bilgi";

/// Daily budget the planner starts with.
pub const DEFAULT_BUDGET: f64 = 30.0;

/// Number of creative assets the planner starts with.
pub const DEFAULT_ASSETS_COUNT: u32 = 10;

/// Everything the user has configured for a campaign.
///
/// Serialized with camelCase keys. Fields missing from a stored document
/// take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignState {
    /// Website being advertised.
    pub url: String,
    /// Campaign name.
    pub project_name: String,
    /// What the campaign optimizes for.
    pub goal: CampaignGoal,
    /// Call-to-action button text.
    pub cta: String,
    /// First day of the campaign.
    #[serde(deserialize_with = "optional_date")]
    pub start_at: Option<NaiveDate>,
    /// Last day of the campaign.
    #[serde(deserialize_with = "optional_date")]
    pub end_at: Option<NaiveDate>,
    /// Targeted countries and cities.
    pub locations: Vec<String>,
    /// Daily budget as entered; validated when a forecast is requested.
    pub budget: f64,
    /// Number of creative assets to generate.
    pub assets_count: u32,
}

impl Default for CampaignState {
    fn default() -> Self {
        Self {
            url: String::new(),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            goal: CampaignGoal::default(),
            cta: DEFAULT_CTA.to_string(),
            start_at: None,
            end_at: None,
            locations: vec!["Turkey".to_string(), "Istanbul".to_string()],
            budget: DEFAULT_BUDGET,
            assets_count: DEFAULT_ASSETS_COUNT,
        }
    }
}

/// Accepts a date, `null`, or an empty string (stored for "not chosen yet").
fn optional_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => {
            // Accept full timestamps by keeping only the date part
            let date = text.get(..10).unwrap_or(text);
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
    }
}

/// A reason the campaign cannot be forecast or launched as configured.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateIssue {
    /// No website URL has been entered.
    #[error("No website URL has been entered")]
    MissingUrl,

    /// The website URL cannot be parsed.
    #[error("Website '{url}' is not a valid URL: {source}")]
    InvalidUrl {
        /// URL as entered.
        url: String,
        /// Why parsing failed.
        source: url::ParseError,
    },

    /// Budget is not a usable number.
    #[error("Budget {0} is not a valid amount")]
    InvalidBudget(f64),

    /// Budget is below the minimum daily spend.
    #[error("Budget {budget} is below the minimum daily budget of {minimum}")]
    BudgetBelowMinimum {
        /// Configured budget.
        budget: f64,
        /// Policy minimum.
        minimum: f64,
    },

    /// No locations are targeted.
    #[error("At least one location must be targeted")]
    NoLocations,

    /// Only one of the start and end dates is set.
    #[error("Both a start and an end date are required")]
    IncompleteSchedule,

    /// End date is before the start date.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Start date has already passed.
    #[error("Start date {0} is in the past")]
    StartsInPast(NaiveDate),
}

impl CampaignState {
    /// Returns the configured schedule, if both dates are set.
    ///
    /// # Errors
    ///
    /// Returns an error if the end date is before the start date.
    pub fn schedule(&self) -> Result<Option<Schedule>, ScheduleError> {
        match (self.start_at, self.end_at) {
            (Some(start), Some(end)) => Schedule::new(start, end).map(Some),
            _ => Ok(None),
        }
    }

    /// Returns the campaign length: the schedule's day count when both dates
    /// are set, otherwise the default length.
    ///
    /// # Errors
    ///
    /// Returns an error if the end date is before the start date.
    pub fn duration(&self) -> Result<CampaignDays, ScheduleError> {
        Ok(self
            .schedule()?
            .map_or_else(CampaignDays::default, |schedule| schedule.days()))
    }

    /// Builds the estimator input for this campaign.
    ///
    /// Only the budget's numeric validity and the schedule order are checked
    /// here; use [`validate`](Self::validate) for the full policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget or schedule is invalid.
    pub fn forecast_request(&self) -> Result<ForecastRequest, ForecastError> {
        let budget = Budget::new(self.budget)?;
        let duration = self.duration()?;
        Ok(ForecastRequest::new(budget, duration))
    }

    /// Returns every policy violation in the configuration.
    ///
    /// `today` is the reference date for rejecting past start dates.
    #[must_use]
    pub fn validate(&self, today: NaiveDate) -> Vec<StateIssue> {
        let mut issues = Vec::new();

        let url = self.url.trim();
        if url.is_empty() {
            issues.push(StateIssue::MissingUrl);
        } else if let Err(source) = Url::parse(url) {
            issues.push(StateIssue::InvalidUrl {
                url: url.to_string(),
                source,
            });
        }

        match Budget::new(self.budget) {
            Ok(budget) => {
                if budget.check_policy(MINIMUM_DAILY_BUDGET).is_err() {
                    issues.push(StateIssue::BudgetBelowMinimum {
                        budget: self.budget,
                        minimum: MINIMUM_DAILY_BUDGET,
                    });
                }
            }
            Err(_) => issues.push(StateIssue::InvalidBudget(self.budget)),
        }

        if self.locations.iter().all(|location| location.trim().is_empty()) {
            issues.push(StateIssue::NoLocations);
        }

        match (self.start_at, self.end_at) {
            (None, None) => {}
            (Some(_), None) | (None, Some(_)) => issues.push(StateIssue::IncompleteSchedule),
            (Some(start), Some(end)) => match Schedule::new(start, end) {
                Ok(schedule) if schedule.starts_before(today) => {
                    issues.push(StateIssue::StartsInPast(start));
                }
                Ok(_) => {}
                Err(e) => issues.push(StateIssue::Schedule(e)),
            },
        }

        issues
    }

    /// Adds a location unless it is already targeted (case-insensitive).
    ///
    /// Returns true if the location was added.
    pub fn add_location(&mut self, location: &str) -> bool {
        let location = location.trim();
        if location.is_empty()
            || self
                .locations
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(location))
        {
            return false;
        }
        self.locations.push(location.to_string());
        true
    }

    /// Removes a location (case-insensitive). Returns true if it was present.
    pub fn remove_location(&mut self, location: &str) -> bool {
        let before = self.locations.len();
        self.locations
            .retain(|existing| !existing.eq_ignore_ascii_case(location.trim()));
        self.locations.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_state() -> CampaignState {
        CampaignState {
            url: "https://example.com".to_string(),
            start_at: Some(date(2024, 9, 4)),
            end_at: Some(date(2024, 9, 17)),
            ..CampaignState::default()
        }
    }

    #[test]
    fn test_defaults() {
        let state = CampaignState::default();
        assert_eq!(state.budget, 30.0);
        assert_eq!(state.goal, CampaignGoal::Traffic);
        assert_eq!(state.cta, "Daha Fazla Bilgi");
        assert_eq!(state.locations, vec!["Turkey", "Istanbul"]);
        assert_eq!(state.assets_count, 10);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let state: CampaignState = serde_json::from_str(r#"{"budget": 45, "url": "x.com"}"#).unwrap();
        assert_eq!(state.budget, 45.0);
        assert_eq!(state.url, "x.com");
        assert_eq!(state.project_name, DEFAULT_PROJECT_NAME);
        assert_eq!(state.locations.len(), 2);
    }

    #[test]
    fn test_empty_dates_deserialize_as_none() {
        let state: CampaignState =
            serde_json::from_str(r#"{"startAt": "", "endAt": "2024-09-17T00:00:00Z"}"#).unwrap();
        assert_eq!(state.start_at, None);
        assert_eq!(state.end_at, Some(date(2024, 9, 17)));
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(CampaignState::default()).unwrap();
        assert!(json.get("projectName").is_some());
        assert!(json.get("assetsCount").is_some());
        assert_eq!(json["goal"], "Traffic");
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_state().validate(date(2024, 9, 1)).is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let state = CampaignState {
            url: "  ".to_string(),
            budget: 5.0,
            locations: Vec::new(),
            start_at: Some(date(2024, 9, 17)),
            end_at: Some(date(2024, 9, 4)),
            ..CampaignState::default()
        };

        let issues = state.validate(date(2024, 9, 1));

        assert_eq!(issues.len(), 4);
        assert_eq!(issues[0], StateIssue::MissingUrl);
        assert!(matches!(issues[1], StateIssue::BudgetBelowMinimum { .. }));
        assert_eq!(issues[2], StateIssue::NoLocations);
        assert!(matches!(issues[3], StateIssue::Schedule(_)));
    }

    #[test]
    fn test_validate_past_start_and_incomplete_schedule() {
        let issues = valid_state().validate(date(2024, 10, 1));
        assert_eq!(issues, vec![StateIssue::StartsInPast(date(2024, 9, 4))]);

        let state = CampaignState {
            end_at: None,
            ..valid_state()
        };
        assert_eq!(
            state.validate(date(2024, 9, 1)),
            vec![StateIssue::IncompleteSchedule]
        );
    }

    #[test]
    fn test_validate_unparseable_url() {
        let state = CampaignState {
            url: "not a url".to_string(),
            ..valid_state()
        };
        let issues = state.validate(date(2024, 9, 1));

        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0],
            StateIssue::InvalidUrl { url, source: url::ParseError::RelativeUrlWithoutBase }
                if url == "not a url"
        ));

        let bare_host = CampaignState {
            url: "example.com".to_string(),
            ..valid_state()
        };
        assert!(matches!(
            bare_host.validate(date(2024, 9, 1)).as_slice(),
            [StateIssue::InvalidUrl { .. }]
        ));
    }

    #[test]
    fn test_validate_negative_budget() {
        let state = CampaignState {
            budget: -1.0,
            ..valid_state()
        };
        assert_eq!(
            state.validate(date(2024, 9, 1)),
            vec![StateIssue::InvalidBudget(-1.0)]
        );
    }

    #[test]
    fn test_forecast_request() {
        let request = valid_state().forecast_request().unwrap();
        assert_eq!(request.budget.value(), 30.0);
        assert_eq!(request.duration.get(), 14);

        let state = CampaignState {
            budget: 60.0,
            start_at: Some(date(2024, 9, 4)),
            end_at: Some(date(2024, 9, 10)),
            ..CampaignState::default()
        };
        let request = state.forecast_request().unwrap();
        assert_eq!(request.budget.value(), 60.0);
        assert_eq!(request.duration.get(), 7);
    }

    #[test]
    fn test_forecast_request_without_schedule_uses_default_length() {
        let request = CampaignState::default().forecast_request().unwrap();
        assert_eq!(request.duration, CampaignDays::default());
    }

    #[test]
    fn test_forecast_request_rejects_bad_input() {
        let state = CampaignState {
            budget: -5.0,
            ..CampaignState::default()
        };
        assert!(matches!(
            state.forecast_request(),
            Err(ForecastError::InvalidBudget { .. })
        ));

        let state = CampaignState {
            start_at: Some(date(2024, 9, 17)),
            end_at: Some(date(2024, 9, 4)),
            ..CampaignState::default()
        };
        assert!(matches!(
            state.forecast_request(),
            Err(ForecastError::Schedule(_))
        ));
    }

    #[test]
    fn test_locations() {
        let mut state = CampaignState::default();
        assert!(state.add_location("Ankara"));
        assert!(!state.add_location("istanbul"));
        assert!(!state.add_location("  "));
        assert!(state.remove_location("ISTANBUL"));
        assert!(!state.remove_location("Izmir"));
        assert_eq!(state.locations, vec!["Turkey", "Ankara"]);
    }
}
