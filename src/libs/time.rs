//! Clock-string arithmetic for shifts and punch times.
//!
//! Shift boundaries arrive from collaborators as 12-hour clock strings such as
//! `"9:00 AM"` or `"06:30 PM"`. Everything inside the engine works in
//! minutes since midnight, so this module converts in both directions and
//! renders minute totals for display.
//!
//! ## Conversions
//!
//! ```text
//! "12:00 AM" ->    0        0 -> "12:00 AM"
//! " 9:05 AM" ->  545      545 -> "9:05 AM"
//! "12:00 PM" ->  720      720 -> "12:00 PM"
//! " 6:00 PM" -> 1080     1080 -> "6:00 PM"
//! ```
//!
//! Parsing never fails: malformed or empty input yields `0`, which the rest of
//! the engine treats like any other clock value.

/// Minutes in a full day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses a clock string into minutes since midnight.
///
/// Accepts `"H:MM AM"` / `"H:MM PM"` (the meridiem may be lowercase and may
/// follow the minutes without a space). A string without a meridiem is read
/// as a 24-hour `"HH:MM"` clock. Anything else, including out-of-range hours
/// or minutes, yields `0`.
///
/// # Examples
///
/// ```rust
/// use paybook::libs::time::parse_time;
///
/// assert_eq!(parse_time("9:00 AM"), 540);
/// assert_eq!(parse_time("12:00 AM"), 0);
/// assert_eq!(parse_time("12:30 PM"), 750);
/// assert_eq!(parse_time("18:00"), 1080);
/// assert_eq!(parse_time("not a time"), 0);
/// ```
pub fn parse_time(clock: &str) -> i64 {
    parse_clock(clock).unwrap_or(0)
}

fn parse_clock(clock: &str) -> Option<i64> {
    let clock = clock.trim().to_ascii_uppercase();
    if clock.is_empty() {
        return None;
    }

    let (time, meridiem) = if let Some(time) = clock.strip_suffix("AM") {
        (time.trim_end(), Some(false))
    } else if let Some(time) = clock.strip_suffix("PM") {
        (time.trim_end(), Some(true))
    } else {
        (clock.as_str(), None)
    };

    let (hours, minutes) = time.split_once(':')?;
    let hours: i64 = hours.trim().parse().ok()?;
    let minutes: i64 = minutes.trim().parse().ok()?;
    if !(0..60).contains(&minutes) {
        return None;
    }

    let hours = match meridiem {
        Some(is_pm) => {
            if !(1..=12).contains(&hours) {
                return None;
            }
            // 12 AM is midnight, 12 PM is noon
            match (hours, is_pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, true) => h + 12,
                (h, false) => h,
            }
        }
        None if (0..24).contains(&hours) => hours,
        None => return None,
    };

    Some(hours * 60 + minutes)
}

/// Formats a minute total as `"Hh Mm"`, e.g. `"8h 30m"`.
///
/// Negative totals are displayed as zero.
pub fn format_minutes(total: i64) -> String {
    let total = total.max(0);
    format!("{}h {}m", total / 60, total % 60)
}

/// Formats minutes since midnight as a 12-hour clock string.
///
/// Values outside a single day wrap around, so an overnight punch at
/// `1500` renders as `"1:00 AM"`.
///
/// # Examples
///
/// ```rust
/// use paybook::libs::time::format_clock;
///
/// assert_eq!(format_clock(545), "9:05 AM");
/// assert_eq!(format_clock(720), "12:00 PM");
/// assert_eq!(format_clock(0), "12:00 AM");
/// ```
pub fn format_clock(minutes: i64) -> String {
    let minutes = minutes.rem_euclid(MINUTES_PER_DAY);
    let (hours, mins) = (minutes / 60, minutes % 60);
    let meridiem = if hours < 12 { "AM" } else { "PM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hours, mins, meridiem)
}
