#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate};
    use tempo::libs::schedule::{recent, DayBuckets, RECENT_WINDOW_HOURS};
    use tempo::libs::task::{Task, TaskFilter};

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn task(id: &str, date: Option<&str>, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            text: format!("task {}", id),
            planned_time: 15.0,
            actual_time: 0.0,
            completed,
            date: date.map(day),
            created_at: Local::now().to_rfc3339(),
        }
    }

    #[test]
    fn test_partition_law() {
        let today = day("2026-08-23");
        let tasks = vec![
            task("dateless", None, false),
            task("today", Some("2026-08-23"), false),
            task("yesterday", Some("2026-08-22"), false),
            task("tomorrow", Some("2026-08-24"), false),
        ];
        let buckets = DayBuckets::split(&tasks, today);

        // Every dated task lands in exactly one bucket; dateless is today's.
        assert_eq!(buckets.todays.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["dateless", "today"]);
        assert_eq!(buckets.carryover.len(), 1);
        assert_eq!(buckets.carryover[0].id, "yesterday");
        assert_eq!(buckets.scheduled.len(), 1);
        assert_eq!(buckets.scheduled[0].id, "tomorrow");
    }

    #[test]
    fn test_completed_overdue_is_not_carryover() {
        let today = day("2026-08-23");
        let tasks = vec![task("done-before", Some("2026-08-20"), true), task("open-before", Some("2026-08-20"), false)];
        let buckets = DayBuckets::split(&tasks, today);

        assert_eq!(buckets.carryover.len(), 1);
        assert_eq!(buckets.carryover[0].id, "open-before");
        assert!(buckets.todays.is_empty());
        assert!(buckets.scheduled.is_empty());
    }

    #[test]
    fn test_scheduled_sorted_ascending_by_date() {
        let today = day("2026-08-23");
        let tasks = vec![
            task("c", Some("2026-09-10"), false),
            task("a", Some("2026-08-24"), false),
            task("b", Some("2026-08-30"), true),
        ];
        let buckets = DayBuckets::split(&tasks, today);

        let dates: Vec<_> = buckets.scheduled.iter().map(|t| t.date.unwrap()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(buckets.scheduled.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_filter_applies_to_todays_only() {
        let today = day("2026-08-23");
        let mut done = task("done", Some("2026-08-23"), true);
        done.actual_time = 10.0;
        let tasks = vec![done, task("open", None, false), task("old", Some("2026-08-01"), false)];
        let buckets = DayBuckets::split(&tasks, today);

        let all = buckets.filtered(TaskFilter::All);
        let active = buckets.filtered(TaskFilter::Active);
        let completed = buckets.filtered(TaskFilter::Completed);

        assert_eq!(all.len(), 2);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "open");
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, "done");
    }

    #[test]
    fn test_toggle_moves_between_filters() {
        let today = day("2026-08-23");
        let mut report = task("report", Some("2026-08-23"), false);
        let buckets = DayBuckets::split(std::slice::from_ref(&report), today);
        assert_eq!(buckets.filtered(TaskFilter::Active).len(), 1);
        assert!(buckets.filtered(TaskFilter::Completed).is_empty());

        report.completed = true;
        let buckets = DayBuckets::split(std::slice::from_ref(&report), today);
        assert!(buckets.filtered(TaskFilter::Active).is_empty());
        assert_eq!(buckets.filtered(TaskFilter::Completed).len(), 1);
    }

    #[test]
    fn test_recent_window() {
        let now = Local::now();
        let window = Duration::hours(RECENT_WINDOW_HOURS);

        let mut fresh = task("fresh", None, false);
        fresh.created_at = (now - Duration::hours(2)).to_rfc3339();
        let mut stale = task("stale", None, false);
        stale.created_at = (now - Duration::hours(20)).to_rfc3339();
        let mut broken = task("broken", None, false);
        broken.created_at = "not-a-timestamp".to_string();

        let recent_tasks = recent(&[fresh, stale, broken], now, window);
        assert_eq!(recent_tasks.len(), 1);
        assert_eq!(recent_tasks[0].id, "fresh");
    }
}
