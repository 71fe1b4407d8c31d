#[cfg(test)]
mod tests {
    use paybook::libs::time::{format_clock, format_minutes, parse_time};

    #[test]
    fn test_parse_twelve_hour_clock() {
        assert_eq!(parse_time("9:00 AM"), 540);
        assert_eq!(parse_time("6:00 PM"), 1080);
        assert_eq!(parse_time("09:15 am"), 555);
        assert_eq!(parse_time("11:59PM"), 1439);
    }

    #[test]
    fn test_parse_midnight_and_noon() {
        assert_eq!(parse_time("12:00 AM"), 0);
        assert_eq!(parse_time("12:00 PM"), 720);
        assert_eq!(parse_time("12:45 AM"), 45);
    }

    #[test]
    fn test_parse_twenty_four_hour_clock() {
        assert_eq!(parse_time("00:00"), 0);
        assert_eq!(parse_time("18:30"), 1110);
    }

    #[test]
    fn test_parse_invalid_input_yields_zero() {
        for input in ["", "   ", "noon", "13:00 PM", "0:30 AM", "9:60 AM", "24:00", "9 AM", "ab:cd PM"] {
            assert_eq!(parse_time(input), 0, "input {:?}", input);
        }
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0h 0m");
        assert_eq!(format_minutes(480), "8h 0m");
        assert_eq!(format_minutes(611), "10h 11m");
        assert_eq!(format_minutes(-30), "0h 0m");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(540), "9:00 AM");
        assert_eq!(format_clock(1211), "8:11 PM");
        assert_eq!(format_clock(720), "12:00 PM");
        assert_eq!(format_clock(-10), "11:50 PM");
        assert_eq!(format_clock(1440 + 75), "1:15 AM");
    }

    #[test]
    fn test_format_then_parse_is_stable() {
        for minutes in [0, 1, 59, 540, 719, 720, 1080, 1439] {
            assert_eq!(parse_time(&format_clock(minutes)), minutes);
        }
    }
}
