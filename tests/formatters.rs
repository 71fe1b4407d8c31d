#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use paybook::libs::attendance::{AttendanceRecord, AttendanceStatus};
    use paybook::libs::config::PayrollConfig;
    use paybook::libs::employee::{Employee, WageType};
    use paybook::libs::formatter::{format_amount, format_days, FormattedAttendance, FormattedEntry};
    use paybook::libs::payroll::build_entry;
    use paybook::libs::shift::Shift;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(950.0), "950.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-2500.0), "-2,500.00");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(30.0), "30");
        assert_eq!(format_days(22.5), "22.5");
        assert_eq!(format_days(0.0), "0");
    }

    #[test]
    fn test_formatted_entry() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let employee = Employee::new("D1", "Kiran", WageType::Daily, 800.0);
        let history = vec![AttendanceRecord::present(date, 540, 480)];
        let shift = Shift::new("S1", "Day", "9:00 AM", "6:00 PM", 60);
        let entry = build_entry(&employee, Some(&shift), &history, &[], &PayrollConfig::default(), date);

        let row = FormattedEntry::from(&entry);
        assert_eq!(row.wage_type, "Daily");
        assert_eq!(row.present_days, "1");
        assert_eq!(row.overtime_hours, "1");
        assert_eq!(row.base_amount, "800.00");
        assert_eq!(row.additions, "150.00");
        assert_eq!(row.deductions, "0.00");
        assert_eq!(row.net_pay, "950.00");
        assert_eq!(row.payment_mode, "Cash");
        assert_eq!(row.status, "missing_details");
    }

    #[test]
    fn test_formatted_attendance() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        let worked = FormattedAttendance::from(&AttendanceRecord {
            punch_in: Some("9:00 AM".to_string()),
            punch_out: Some("8:11 PM".to_string()),
            ..AttendanceRecord::present(date, 611, 480)
        });
        assert_eq!(worked.worked, "10h 11m");
        assert_eq!(worked.overtime, "2h 11m");
        assert_eq!(worked.punch_out, "8:11 PM");

        let off = FormattedAttendance::from(&AttendanceRecord::idle(date, AttendanceStatus::WeekOff));
        assert_eq!(off.status, "week_off");
        assert_eq!(off.punch_in, "-");
        assert_eq!(off.worked, "-");
    }
}
