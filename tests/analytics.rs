#[cfg(test)]
mod tests {
    use tempo::libs::analytics::{ProgressTier, Summary};
    use tempo::libs::task::Task;

    fn task(planned: f64, actual: f64, completed: bool) -> Task {
        Task {
            id: format!("{}-{}-{}", planned, actual, completed),
            text: "task".to_string(),
            planned_time: planned,
            actual_time: actual,
            completed,
            date: None,
            created_at: chrono::Local::now().to_rfc3339(),
        }
    }

    #[test]
    fn test_empty_bucket_is_all_zero() {
        let summary = Summary::compute(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.completion_rate, 0);
        assert_eq!(summary.efficiency, 0);
        assert_eq!(summary.progress, 0);
        assert_eq!(summary.total_planned, 0.0);
        assert_eq!(summary.total_actual, 0.0);
    }

    #[test]
    fn test_efficiency_over_completed_tasks_only() {
        // Two completed (planned 20+10, actual 25+10) and one active task.
        let bucket = vec![task(20.0, 25.0, true), task(10.0, 10.0, true), task(30.0, 0.0, false)];
        let summary = Summary::compute(&bucket);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.total_planned, 60.0);
        assert_eq!(summary.total_actual, 35.0);
        // round(100 * 30 / 35)
        assert_eq!(summary.efficiency, 86);
        // round(100 * 2 / 3)
        assert_eq!(summary.completion_rate, 67);
        assert_eq!(summary.progress, 67);
    }

    #[test]
    fn test_efficiency_zero_without_logged_actual_time() {
        let bucket = vec![task(20.0, 0.0, true), task(15.0, 45.0, false)];
        let summary = Summary::compute(&bucket);
        // The active task's actual time must not leak into efficiency.
        assert_eq!(summary.efficiency, 0);
        assert_eq!(summary.completion_rate, 50);
    }

    #[test]
    fn test_progress_tiers() {
        assert_eq!(ProgressTier::from_percent(100), ProgressTier::Excellent);
        assert_eq!(ProgressTier::from_percent(80), ProgressTier::Excellent);
        assert_eq!(ProgressTier::from_percent(79), ProgressTier::Good);
        assert_eq!(ProgressTier::from_percent(60), ProgressTier::Good);
        assert_eq!(ProgressTier::from_percent(59), ProgressTier::Fair);
        assert_eq!(ProgressTier::from_percent(40), ProgressTier::Fair);
        assert_eq!(ProgressTier::from_percent(39), ProgressTier::Low);
        assert_eq!(ProgressTier::from_percent(0), ProgressTier::Low);
    }
}
