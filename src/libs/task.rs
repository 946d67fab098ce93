//! Task record and input normalization.
//!
//! A task is the only entity in the application. Numeric input is never
//! rejected: raw values are parsed and clamped so that after every mutation
//! `planned_time >= PLANNED_TIME_FLOOR` and `actual_time >= 0`.

use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lower bound for planned time, in minutes.
pub const PLANNED_TIME_FLOOR: f64 = 5.0;

/// Planned time assigned on add when the raw value is unparseable or non-positive.
pub const DEFAULT_PLANNED_TIME: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default = "default_planned_time")]
    pub planned_time: f64,
    #[serde(default)]
    pub actual_time: f64,
    #[serde(default)]
    pub completed: bool,
    /// Calendar day the task is for. `None` is treated as "today".
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub created_at: String,
}

fn default_planned_time() -> f64 {
    DEFAULT_PLANNED_TIME
}

impl Task {
    /// Creates a new task with a generated id and creation timestamp.
    pub fn new(text: &str, planned_time: f64, date: Option<NaiveDate>) -> Self {
        let now = Local::now();
        Task {
            id: now.timestamp_millis().to_string(),
            text: text.to_string(),
            planned_time,
            actual_time: 0.0,
            completed: false,
            date,
            created_at: now.to_rfc3339(),
        }
    }

    pub fn matches(&self, filter: TaskFilter) -> bool {
        match filter {
            TaskFilter::All => true,
            TaskFilter::Active => !self.completed,
            TaskFilter::Completed => self.completed,
        }
    }
}

/// Completion-state filter applied to today's tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskFilter {
    All,
    Active,
    Completed,
}

/// Parses a planned-time value for the add operation.
///
/// Unparseable or non-positive input falls back to [`DEFAULT_PLANNED_TIME`],
/// anything else is clamped to the floor.
pub fn parse_planned_or_default(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value > 0.0 => value.max(PLANNED_TIME_FLOOR),
        _ => DEFAULT_PLANNED_TIME,
    }
}

/// Parses a planned-time value for an update, clamping to the floor.
pub fn parse_planned(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(PLANNED_TIME_FLOOR).max(PLANNED_TIME_FLOOR)
}

/// Parses an actual-time value, clamping to zero.
pub fn parse_actual(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0).max(0.0)
}
