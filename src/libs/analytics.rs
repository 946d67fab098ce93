//! Aggregate analytics over a task bucket.
//!
//! Efficiency follows the completed-only policy: it compares planned to
//! actual time over completed tasks alone, so unfinished work with no
//! logged time cannot inflate or deflate the ratio. The whole-bucket
//! variant used by earlier tracker versions is intentionally not
//! implemented.

use crate::libs::task::Task;

/// Analytics numbers computed from one task bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub total_planned: f64,
    pub total_actual: f64,
    /// `round(100 * completed / total)`, 0 for an empty bucket.
    pub completion_rate: u32,
    /// Completed-only planned/actual ratio, 0 when no actual time is logged
    /// against completed tasks.
    pub efficiency: u32,
    /// Drives the progress indicator; equals the completion rate.
    pub progress: u32,
}

impl Summary {
    pub fn compute(bucket: &[Task]) -> Self {
        let total = bucket.len();
        let completed_tasks: Vec<&Task> = bucket.iter().filter(|task| task.completed).collect();
        let completed = completed_tasks.len();

        let total_planned: f64 = bucket.iter().map(|task| task.planned_time).sum();
        let total_actual: f64 = bucket.iter().map(|task| task.actual_time).sum();

        let completed_planned: f64 = completed_tasks.iter().map(|task| task.planned_time).sum();
        let completed_actual: f64 = completed_tasks.iter().map(|task| task.actual_time).sum();

        let completion_rate = if total > 0 {
            (100.0 * completed as f64 / total as f64).round() as u32
        } else {
            0
        };
        let efficiency = if completed_actual > 0.0 {
            (100.0 * completed_planned / completed_actual).round() as u32
        } else {
            0
        };

        Summary {
            total,
            completed,
            pending: total - completed,
            total_planned,
            total_actual,
            completion_rate,
            efficiency,
            progress: completion_rate,
        }
    }

    pub fn tier(&self) -> ProgressTier {
        ProgressTier::from_percent(self.progress)
    }
}

/// Presentation tier selected from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    /// `>= 80`
    Excellent,
    /// `>= 60`
    Good,
    /// `>= 40`
    Fair,
    /// everything below
    Low,
}

impl ProgressTier {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            p if p >= 80 => ProgressTier::Excellent,
            p if p >= 60 => ProgressTier::Good,
            p if p >= 40 => ProgressTier::Fair,
            _ => ProgressTier::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgressTier::Excellent => "excellent",
            ProgressTier::Good => "good",
            ProgressTier::Fair => "fair",
            ProgressTier::Low => "low",
        }
    }
}
