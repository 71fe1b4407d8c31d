//! Shift definitions and their minute arithmetic.

use crate::libs::time::{parse_time, MINUTES_PER_DAY};
use serde::{Deserialize, Serialize};

/// Start of the fallback shift, 9:00 AM.
pub const DEFAULT_SHIFT_START: i64 = 540;
/// End of the fallback shift, 6:00 PM.
pub const DEFAULT_SHIFT_END: i64 = 1080;
/// Unpaid break of the fallback shift.
pub const DEFAULT_BREAK_MINUTES: i64 = 60;
/// Paid minutes per day used to price an employee without a shift.
///
/// This is nine hours, not the 480 effective minutes of the fallback
/// window: the window only drives synthesized punches.
pub const DEFAULT_SHIFT_DURATION: i64 = 540;

/// A named working window with an unpaid break.
///
/// Times are kept as the clock strings supplied by the shift editor
/// (`"9:00 AM"`), and converted with [`parse_time`] when needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub break_minutes: i64,
}

/// A shift resolved to minutes since midnight.
///
/// `end` is always after `start`: a shift whose end is not later than its
/// start crosses midnight and has its end pushed into the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    pub start: i64,
    pub end: i64,
    pub break_minutes: i64,
}

impl Shift {
    pub fn new(id: &str, name: &str, start_time: &str, end_time: &str, break_minutes: i64) -> Self {
        Shift {
            id: id.to_string(),
            name: name.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            break_minutes,
        }
    }

    pub fn window(&self) -> ShiftWindow {
        let start = parse_time(&self.start_time);
        let mut end = parse_time(&self.end_time);
        if end <= start {
            end += MINUTES_PER_DAY;
        }
        ShiftWindow {
            start,
            end,
            break_minutes: self.break_minutes.max(0),
        }
    }
}

/// Paid minutes of a normal day, used for rates and present-day credit.
///
/// ```rust
/// use paybook::libs::shift::{payable_minutes, Shift, DEFAULT_SHIFT_DURATION};
///
/// let day = Shift::new("S1", "Day", "9:00 AM", "6:00 PM", 60);
/// assert_eq!(payable_minutes(Some(&day)), 480);
/// assert_eq!(payable_minutes(None), DEFAULT_SHIFT_DURATION);
/// ```
pub fn payable_minutes(shift: Option<&Shift>) -> i64 {
    shift.map_or(DEFAULT_SHIFT_DURATION, |shift| shift.window().effective_minutes())
}

impl ShiftWindow {
    /// Window used when an employee has no shift assigned.
    pub fn fallback() -> Self {
        ShiftWindow {
            start: DEFAULT_SHIFT_START,
            end: DEFAULT_SHIFT_END,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }

    /// Resolves an optional shift, substituting [`ShiftWindow::fallback`].
    pub fn resolve(shift: Option<&Shift>) -> Self {
        shift.map_or_else(Self::fallback, Shift::window)
    }

    /// Gross length of the window, break included.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Paid minutes expected on a normal day: duration net of the break.
    pub fn effective_minutes(&self) -> i64 {
        (self.duration() - self.break_minutes).max(0)
    }
}
