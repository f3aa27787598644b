//! FilterState - the UI's current filter selection.
//!
//! A plain value with no identity. Each evaluation receives a snapshot by
//! reference and never keeps or mutates it.

use crate::error::{PipelineError, Result};
use catalog::PlayerId;
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// `"all"` or a single player's id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayerSelection {
    #[default]
    All,
    Player(PlayerId),
}

impl From<String> for PlayerSelection {
    fn from(value: String) -> Self {
        if value == "all" {
            PlayerSelection::All
        } else {
            PlayerSelection::Player(value)
        }
    }
}

impl From<&str> for PlayerSelection {
    fn from(value: &str) -> Self {
        PlayerSelection::from(value.to_string())
    }
}

impl From<PlayerSelection> for String {
    fn from(selection: PlayerSelection) -> Self {
        match selection {
            PlayerSelection::All => "all".to_string(),
            PlayerSelection::Player(id) => id,
        }
    }
}

/// How far back the grid looks, relative to the evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Week,
    Month,
    Season,
    Year,
}

impl DateRange {
    /// Earliest date still included, or `None` for no cutoff.
    ///
    /// Weeks are 7 days; months, seasons (6 months) and years use calendar
    /// arithmetic, clamping to the last day of a shorter month.
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        let cutoff = match self {
            DateRange::All => return None,
            DateRange::Week => today.checked_sub_days(Days::new(7)),
            DateRange::Month => today.checked_sub_months(Months::new(1)),
            DateRange::Season => today.checked_sub_months(Months::new(6)),
            DateRange::Year => today.checked_sub_months(Months::new(12)),
        };
        Some(cutoff.unwrap_or(NaiveDate::MIN))
    }
}

impl FromStr for DateRange {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(DateRange::All),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "season" => Ok(DateRange::Season),
            "year" => Ok(DateRange::Year),
            _ => Err(PipelineError::UnknownDateRange(s.to_string())),
        }
    }
}

/// Snapshot of the filter controls.
///
/// `competition` and `playback_speed` belong to the playback side and are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub selected_player: PlayerSelection,
    pub show_strengths: bool,
    pub show_weaknesses: bool,
    /// Minimum annotation confidence, inclusive, in [0, 100]
    pub confidence_threshold: u8,
    pub date_range: DateRange,
    pub competition: String,
    pub playback_speed: f32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_player: PlayerSelection::All,
            show_strengths: true,
            show_weaknesses: true,
            confidence_threshold: 0,
            date_range: DateRange::All,
            competition: "all".to_string(),
            playback_speed: 1.0,
        }
    }
}

impl FilterState {
    /// Parse a JSON snapshot as produced by the web client. Missing keys
    /// take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let state: FilterState = serde_json::from_str(json)?;
        state.validate()?;
        Ok(state)
    }

    pub fn validate(&self) -> Result<()> {
        if self.confidence_threshold > 100 {
            return Err(PipelineError::ThresholdOutOfRange(self.confidence_threshold));
        }
        Ok(())
    }
}
