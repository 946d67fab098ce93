//! Date classification of the task snapshot.
//!
//! Tasks are partitioned relative to "today" (the local calendar date):
//! today's tasks, unfinished carryover from earlier days, and tasks
//! scheduled for later days. With a fixed `date` value a task lands in at
//! most one bucket; a completed task from an earlier day lands in none,
//! since carryover only surfaces unfinished work. Tasks without a date are
//! always today's.

use crate::libs::task::{Task, TaskFilter};
use chrono::{DateTime, Duration, Local, NaiveDate};

/// Trailing recency window used by [`recent`], in hours.
pub const RECENT_WINDOW_HOURS: i64 = 16;

/// The task snapshot partitioned by date relative to one calendar day.
#[derive(Debug, Default)]
pub struct DayBuckets {
    pub todays: Vec<Task>,
    pub carryover: Vec<Task>,
    /// Sorted ascending by date.
    pub scheduled: Vec<Task>,
}

impl DayBuckets {
    pub fn split(tasks: &[Task], today: NaiveDate) -> Self {
        let mut buckets = DayBuckets::default();
        for task in tasks {
            match task.date {
                None => buckets.todays.push(task.clone()),
                Some(date) if date == today => buckets.todays.push(task.clone()),
                Some(date) if date < today && !task.completed => buckets.carryover.push(task.clone()),
                Some(date) if date > today => buckets.scheduled.push(task.clone()),
                Some(_) => {} // completed on an earlier day
            }
        }
        buckets.scheduled.sort_by_key(|task| task.date);
        buckets
    }

    /// Today's tasks restricted by the completion-state filter.
    pub fn filtered(&self, filter: TaskFilter) -> Vec<Task> {
        self.todays.iter().filter(|task| task.matches(filter)).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.todays.is_empty() && self.carryover.is_empty() && self.scheduled.is_empty()
    }
}

/// Tasks created within the trailing recency window from `now`.
///
/// The rolling-window classification of the earliest tracker versions, kept
/// as an alternative to calendar-day bucketing. Tasks with an unparseable
/// creation timestamp are excluded.
pub fn recent(tasks: &[Task], now: DateTime<Local>, window: Duration) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| match DateTime::parse_from_rfc3339(&task.created_at) {
            Ok(created_at) => now.signed_duration_since(created_at.with_timezone(&Local)) <= window,
            Err(_) => false,
        })
        .cloned()
        .collect()
}
