#[cfg(test)]
mod tests {
    use paybook::libs::shift::{payable_minutes, Shift, ShiftWindow, DEFAULT_SHIFT_DURATION};

    #[test]
    fn test_day_shift_window() {
        let window = Shift::new("S1", "Day", "9:00 AM", "6:00 PM", 60).window();
        assert_eq!(window.start, 540);
        assert_eq!(window.end, 1080);
        assert_eq!(window.duration(), 540);
        assert_eq!(window.effective_minutes(), 480);
    }

    #[test]
    fn test_overnight_shift_wraps() {
        let window = Shift::new("N1", "Night", "10:00 PM", "6:00 AM", 30).window();
        assert_eq!(window.end, 360 + 1440);
        assert_eq!(window.effective_minutes(), 450);
    }

    #[test]
    fn test_equal_start_and_end_is_a_full_day() {
        let window = Shift::new("R1", "Round the clock", "8:00 AM", "8:00 AM", 60).window();
        assert_eq!(window.duration(), 1440);
        assert_eq!(window.effective_minutes(), 1380);
        assert!(window.end > window.start);
    }

    #[test]
    fn test_negative_break_is_ignored() {
        let window = Shift::new("S2", "Odd", "9:00 AM", "5:00 PM", -30).window();
        assert_eq!(window.break_minutes, 0);
        assert_eq!(window.effective_minutes(), 480);
    }

    #[test]
    fn test_unassigned_pricing_uses_nine_hours() {
        assert_eq!(DEFAULT_SHIFT_DURATION, 540);
        assert_eq!(payable_minutes(None), 540);
        // Synthesized punches still follow the 9 to 6 window with a one hour break.
        assert_eq!(ShiftWindow::resolve(None).effective_minutes(), 480);

        let night = Shift::new("N1", "Night", "10:00 PM", "6:00 AM", 30);
        assert_eq!(payable_minutes(Some(&night)), 450);
    }
}
