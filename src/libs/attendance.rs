//! Deterministic attendance history.
//!
//! There is no time clock behind the payroll engine, so attendance is
//! synthesized from the employee's identity and the day offset. The same
//! employee, shift and day always produce the same record, which keeps drafts
//! reproducible and lets the payroll builder be exercised without a feed.
//!
//! ## Day Classification
//!
//! ```text
//! weekly off (Sat/Sun only) ............ week_off
//! seed % 100 in 0..5 ................... absent
//! seed % 100 in 5..10 .................. leave
//! otherwise ............................ present, pattern by seed % 10
//!
//!   0..=3  on time          in/out within +-5 min
//!   4..=6  undertime        late arrival (4, 6) or early departure (5), 60-120 min
//!   7      short overtime   departure +60..89 min
//!   8..=9  long overtime    departure +120..180 min
//! ```

use crate::libs::employee::Employee;
use crate::libs::shift::{Shift, ShiftWindow};
use crate::libs::time::format_clock;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Length of the trailing attendance window, today included.
pub const HISTORY_DAYS: u32 = 30;

/// Classification of a single attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
    /// Never synthesized; reserved for records supplied by a holiday calendar.
    Holiday,
    WeekOff,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Leave => "leave",
            AttendanceStatus::Holiday => "holiday",
            AttendanceStatus::WeekOff => "week_off",
        };
        write!(f, "{}", label)
    }
}

/// One day of attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub punch_in: Option<String>,
    pub punch_out: Option<String>,
    pub working_minutes: i64,
    pub overtime_minutes: i64,
}

impl AttendanceRecord {
    /// A record with no punches and no minutes.
    pub fn idle(date: NaiveDate, status: AttendanceStatus) -> Self {
        AttendanceRecord {
            date,
            status,
            punch_in: None,
            punch_out: None,
            working_minutes: 0,
            overtime_minutes: 0,
        }
    }

    /// A present record whose overtime is derived from the shift.
    pub fn present(date: NaiveDate, working_minutes: i64, effective_shift_minutes: i64) -> Self {
        let working_minutes = working_minutes.max(0);
        AttendanceRecord {
            date,
            status: AttendanceStatus::Present,
            punch_in: None,
            punch_out: None,
            working_minutes,
            overtime_minutes: (working_minutes - effective_shift_minutes).max(0),
        }
    }

    /// Short display label, e.g. `"Mon, 05 Oct"`.
    pub fn label(&self) -> String {
        self.date.format("%a, %d %b").to_string()
    }

    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }
}

/// Deterministic seed for an employee and a day offset.
///
/// The seed is the sum of the UTF-16 code units of `employee_id` plus
/// `day_offset`. It is stable across runs and platforms, and consecutive
/// offsets walk through consecutive buckets.
///
/// ```rust
/// use paybook::libs::attendance::seed;
///
/// // 'E' (69) + '1' (49)
/// assert_eq!(seed("E1", 0), 118);
/// assert_eq!(seed("E1", 3), 121);
/// ```
pub fn seed(employee_id: &str, day_offset: u32) -> u64 {
    employee_id.encode_utf16().map(u64::from).sum::<u64>() + u64::from(day_offset)
}

/// Punch variance pattern of a present day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPattern {
    OnTime,
    Undertime,
    ShortOvertime,
    LongOvertime,
}

impl DayPattern {
    pub fn from_seed(seed: u64) -> Self {
        match seed % 10 {
            0..=3 => DayPattern::OnTime,
            4..=6 => DayPattern::Undertime,
            7 => DayPattern::ShortOvertime,
            _ => DayPattern::LongOvertime,
        }
    }

    /// Minute offsets applied to the nominal (start, end) of the shift.
    pub fn variance(self, seed: u64) -> (i64, i64) {
        let spread = (seed / 10) as i64;
        match self {
            DayPattern::OnTime => (spread % 11 - 5, (spread / 11) % 11 - 5),
            DayPattern::Undertime => {
                let gap = 60 + spread % 61;
                if seed % 10 == 5 {
                    (0, -gap)
                } else {
                    (gap, 0)
                }
            }
            DayPattern::ShortOvertime => (0, 60 + spread % 30),
            DayPattern::LongOvertime => (0, 120 + spread % 61),
        }
    }
}

/// Builds the record for `today - day_offset`.
pub fn day_record(employee: &Employee, window: &ShiftWindow, today: NaiveDate, day_offset: u32) -> AttendanceRecord {
    let date = today - Duration::days(i64::from(day_offset));

    if employee.is_weekly_off(date.weekday()) {
        return AttendanceRecord::idle(date, AttendanceStatus::WeekOff);
    }

    let seed = seed(&employee.id, day_offset);
    match seed % 100 {
        0..=4 => return AttendanceRecord::idle(date, AttendanceStatus::Absent),
        5..=9 => return AttendanceRecord::idle(date, AttendanceStatus::Leave),
        _ => {}
    }

    let (in_offset, out_offset) = DayPattern::from_seed(seed).variance(seed);
    let actual_in = window.start + in_offset;
    let actual_out = window.end + out_offset;
    let working_minutes = (actual_out - actual_in - window.break_minutes).max(0);

    AttendanceRecord {
        punch_in: Some(format_clock(actual_in)),
        punch_out: Some(format_clock(actual_out)),
        ..AttendanceRecord::present(date, working_minutes, window.effective_minutes())
    }
}

/// Generates the trailing attendance history of an employee.
///
/// Index 0 is `today`, the last index is `HISTORY_DAYS - 1` days ago. Without
/// a shift the fallback 9:00 AM to 6:00 PM window with a one hour break is
/// used.
pub fn generate_history(employee: &Employee, shift: Option<&Shift>, today: NaiveDate) -> Vec<AttendanceRecord> {
    let window = ShiftWindow::resolve(shift);
    let history: Vec<AttendanceRecord> = (0..HISTORY_DAYS)
        .map(|offset| day_record(employee, &window, today, offset))
        .collect();

    debug!(
        employee = %employee.id,
        present = history.iter().filter(|r| r.is_present()).count(),
        "generated attendance history"
    );

    history
}
