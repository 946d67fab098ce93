//! Terminal presentation of tasks and analytics.

use crate::libs::analytics::Summary;
use crate::libs::messages::Message;
use crate::libs::schedule::DayBuckets;
use crate::libs::task::{Task, TaskFilter};
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders one task table.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "✓", "TASK", "DATE", "PLAN (m)", "ACTUAL (m)"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                if task.completed { "✔" } else { " " },
                task.text,
                task.date.map(|d| d.to_string()).unwrap_or_default(),
                task.planned_time,
                task.actual_time
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders today's filtered tasks plus the carryover and scheduled
    /// sections. Carryover and scheduled are hidden under the `completed`
    /// filter, matching the filter's today-only meaning.
    pub fn buckets(buckets: &DayBuckets, filter: TaskFilter) -> Result<()> {
        let filtered = buckets.filtered(filter);

        if filtered.is_empty() && buckets.carryover.is_empty() && buckets.scheduled.is_empty() {
            let message = match filter {
                TaskFilter::Completed if !buckets.todays.is_empty() => Message::NoCompletedTasks,
                TaskFilter::Active if !buckets.todays.is_empty() => Message::AllCaughtUp,
                _ => Message::NoTasksYet,
            };
            msg_print!(message);
            return Ok(());
        }

        if !filtered.is_empty() {
            Self::tasks(&filtered)?;
        }

        if !buckets.carryover.is_empty() && filter != TaskFilter::Completed {
            msg_print!(Message::CarryoverHeader(buckets.carryover.len()), true);
            Self::tasks(&buckets.carryover)?;
        }

        if !buckets.scheduled.is_empty() && filter != TaskFilter::Completed {
            msg_print!(Message::ScheduledHeader(buckets.scheduled.len()), true);
            Self::tasks(&buckets.scheduled)?;
        }

        Ok(())
    }

    /// Renders the read-only analytics panel.
    pub fn summary(summary: &Summary) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["Tasks", summary.total]);
        table.add_row(row!["Completed", summary.completed]);
        table.add_row(row!["Pending", summary.pending]);
        table.add_row(row!["Planned time", format!("{}m", summary.total_planned.round())]);
        table.add_row(row!["Actual time", format!("{}m", summary.total_actual.round())]);
        table.add_row(row!["Completion rate", format!("{}%", summary.completion_rate)]);
        table.add_row(row!["Efficiency", format!("{}%", summary.efficiency)]);
        table.add_row(row!["Progress", format!("{}% ({})", summary.progress, summary.tier().label())]);
        table.printstd();

        Ok(())
    }
}
