#[cfg(test)]
mod tests {
    use tempo::libs::task::{parse_actual, parse_planned, parse_planned_or_default, DEFAULT_PLANNED_TIME, PLANNED_TIME_FLOOR};

    #[test]
    fn test_planned_update_clamps_to_floor() {
        assert_eq!(parse_planned("45"), 45.0);
        assert_eq!(parse_planned("5"), PLANNED_TIME_FLOOR);
        assert_eq!(parse_planned("3"), PLANNED_TIME_FLOOR);
        assert_eq!(parse_planned("0"), PLANNED_TIME_FLOOR);
        assert_eq!(parse_planned("-10"), PLANNED_TIME_FLOOR);
    }

    #[test]
    fn test_planned_update_parse_failure_uses_floor() {
        assert_eq!(parse_planned(""), PLANNED_TIME_FLOOR);
        assert_eq!(parse_planned("ten"), PLANNED_TIME_FLOOR);
        assert_eq!(parse_planned("NaN"), PLANNED_TIME_FLOOR);
        assert_eq!(parse_planned("  25 "), 25.0);
    }

    #[test]
    fn test_actual_clamps_to_zero() {
        assert_eq!(parse_actual("25.5"), 25.5);
        assert_eq!(parse_actual("0"), 0.0);
        assert_eq!(parse_actual("-3"), 0.0);
        assert_eq!(parse_actual("junk"), 0.0);
        assert_eq!(parse_actual("NaN"), 0.0);
    }

    #[test]
    fn test_add_defaults_planned_time() {
        assert_eq!(parse_planned_or_default("30"), 30.0);
        // Below the floor is still clamped up.
        assert_eq!(parse_planned_or_default("3"), PLANNED_TIME_FLOOR);
        // Unparseable or non-positive input falls back to the default.
        assert_eq!(parse_planned_or_default(""), DEFAULT_PLANNED_TIME);
        assert_eq!(parse_planned_or_default("abc"), DEFAULT_PLANNED_TIME);
        assert_eq!(parse_planned_or_default("0"), DEFAULT_PLANNED_TIME);
        assert_eq!(parse_planned_or_default("-20"), DEFAULT_PLANNED_TIME);
    }
}
