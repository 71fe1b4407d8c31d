#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use paybook::libs::attendance::{generate_history, seed, AttendanceStatus, DayPattern, HISTORY_DAYS};
    use paybook::libs::employee::{Employee, WageType};
    use paybook::libs::shift::{Shift, ShiftWindow};

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
    }

    #[test]
    fn test_seed_sums_code_units() {
        assert_eq!(seed("E1", 0), 118);
        assert_eq!(seed("E1", 29), 147);
        assert_eq!(seed("", 5), 5);
        assert_eq!(seed("b", 2), 100);
    }

    #[test]
    fn test_day_pattern_buckets() {
        assert_eq!(DayPattern::from_seed(120), DayPattern::OnTime);
        assert_eq!(DayPattern::from_seed(123), DayPattern::OnTime);
        assert_eq!(DayPattern::from_seed(124), DayPattern::Undertime);
        assert_eq!(DayPattern::from_seed(126), DayPattern::Undertime);
        assert_eq!(DayPattern::from_seed(127), DayPattern::ShortOvertime);
        assert_eq!(DayPattern::from_seed(128), DayPattern::LongOvertime);
        assert_eq!(DayPattern::from_seed(129), DayPattern::LongOvertime);
    }

    #[test]
    fn test_history_spans_thirty_days_newest_first() {
        let employee = Employee::new("E1", "Asha", WageType::Monthly, 30000.0);
        let history = generate_history(&employee, None, friday());

        assert_eq!(history.len(), HISTORY_DAYS as usize);
        assert_eq!(history[0].date, friday());
        assert_eq!(history[29].date, friday() - Duration::days(29));
    }

    #[test]
    fn test_history_is_deterministic() {
        let employee = Employee::new("E42", "Ravi", WageType::Daily, 900.0).with_weekly_offs(&["Sunday"]);
        let shift = Shift::new("S1", "Day", "8:00 AM", "5:00 PM", 30);

        let first = generate_history(&employee, Some(&shift), friday());
        let second = generate_history(&employee, Some(&shift), friday());
        assert_eq!(first, second);
    }

    #[test]
    fn test_weekly_offs_have_no_minutes() {
        let employee = Employee::new("E7", "Meera", WageType::Monthly, 24000.0).with_weekly_offs(&["Saturday", "sunday"]);
        let history = generate_history(&employee, None, sunday());

        let mut week_offs = 0;
        for record in &history {
            let weekend = matches!(record.date.weekday(), Weekday::Sat | Weekday::Sun);
            if weekend {
                assert_eq!(record.status, AttendanceStatus::WeekOff);
                assert_eq!(record.working_minutes, 0);
                assert_eq!(record.overtime_minutes, 0);
                assert!(record.punch_in.is_none());
                week_offs += 1;
            } else {
                assert_ne!(record.status, AttendanceStatus::WeekOff);
            }
        }
        assert_eq!(week_offs, 10);
    }

    #[test]
    fn test_weekday_names_are_not_weekly_offs() {
        let employee = Employee::new("E7", "Meera", WageType::Monthly, 24000.0).with_weekly_offs(&["Monday", "Friday"]);
        let history = generate_history(&employee, None, friday());

        assert!(history.iter().all(|r| r.status != AttendanceStatus::WeekOff));
    }

    #[test]
    fn test_absent_and_leave_buckets() {
        // "b" is 98, so offsets 2..=6 land on 100..=104 and 7..=11 on 105..=109.
        let employee = Employee::new("b", "", WageType::Monthly, 15000.0);
        let history = generate_history(&employee, None, friday());

        for record in &history[2..=6] {
            assert_eq!(record.status, AttendanceStatus::Absent);
            assert_eq!(record.working_minutes, 0);
        }
        for record in &history[7..=11] {
            assert_eq!(record.status, AttendanceStatus::Leave);
            assert_eq!(record.working_minutes, 0);
        }
        assert_eq!(history[0].status, AttendanceStatus::Present);
        assert_eq!(history[12].status, AttendanceStatus::Present);
    }

    #[test]
    fn test_present_day_punches_on_fallback_shift() {
        let employee = Employee::new("E1", "Asha", WageType::Daily, 800.0);
        let history = generate_history(&employee, None, friday());

        // seed 118: long overtime, 131 minutes past 6:00 PM
        let today = &history[0];
        assert_eq!(today.status, AttendanceStatus::Present);
        assert_eq!(today.punch_in.as_deref(), Some("9:00 AM"));
        assert_eq!(today.punch_out.as_deref(), Some("8:11 PM"));
        assert_eq!(today.working_minutes, 611);
        assert_eq!(today.overtime_minutes, 131);

        // seed 120: on time, four minutes early at both ends
        assert_eq!(history[2].working_minutes, 480);
        assert_eq!(history[2].overtime_minutes, 0);
        assert_eq!(history[2].punch_in.as_deref(), Some("8:56 AM"));

        // seed 124: late by 72 minutes
        assert_eq!(history[6].working_minutes, 408);
        assert_eq!(history[6].punch_in.as_deref(), Some("10:12 AM"));

        // seed 125: leaves 72 minutes early
        assert_eq!(history[7].working_minutes, 408);
        assert_eq!(history[7].punch_out.as_deref(), Some("4:48 PM"));

        // seed 127: short overtime
        assert_eq!(history[9].overtime_minutes, 72);
    }

    #[test]
    fn test_overtime_never_negative_and_derived_from_shift() {
        let shift = Shift::new("N", "Night", "10:00 PM", "6:00 AM", 30);
        let effective = ShiftWindow::resolve(Some(&shift)).effective_minutes();
        assert_eq!(effective, 450);

        for id in ["E1", "E2", "N-17", "b", "zz"] {
            let employee = Employee::new(id, id, WageType::Monthly, 1.0);
            for record in generate_history(&employee, Some(&shift), friday()) {
                assert!(record.working_minutes >= 0);
                assert!(record.overtime_minutes >= 0);
                if record.status == AttendanceStatus::Present {
                    assert_eq!(record.overtime_minutes, (record.working_minutes - effective).max(0));
                } else {
                    assert_eq!(record.working_minutes, 0);
                }
            }
        }
    }

    #[test]
    fn test_label_format() {
        let employee = Employee::new("E1", "Asha", WageType::Daily, 800.0);
        let history = generate_history(&employee, None, friday());
        assert_eq!(history[0].label(), "Fri, 14 Mar");
    }
}
