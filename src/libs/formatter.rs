//! Display-ready renderings of payroll data shared by the table view and the
//! exporters.

use super::attendance::AttendanceRecord;
use super::payroll::PayrollEntry;
use super::time::format_minutes;
use serde::{Deserialize, Serialize};

/// One draft entry flattened to strings for tables and CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedEntry {
    pub employee_id: String,
    pub employee_name: String,
    pub wage_type: String,
    pub present_days: String,
    pub overtime_hours: String,
    pub base_amount: String,
    pub additions: String,
    pub deductions: String,
    pub net_pay: String,
    pub payment_mode: String,
    pub status: String,
}

impl From<&PayrollEntry> for FormattedEntry {
    fn from(entry: &PayrollEntry) -> Self {
        FormattedEntry {
            employee_id: entry.employee_id.clone(),
            employee_name: entry.employee_name.clone(),
            wage_type: entry.wage_type.to_string(),
            present_days: format_days(entry.stats.present_days),
            overtime_hours: entry.stats.overtime_hours.to_string(),
            base_amount: format_amount(entry.base_amount),
            additions: format_amount(entry.additions()),
            deductions: format_amount(entry.deductions()),
            net_pay: format_amount(entry.net_pay),
            payment_mode: entry.payment_mode.to_string(),
            status: entry.status.to_string(),
        }
    }
}

/// One attendance day flattened to strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedAttendance {
    pub date: String,
    pub status: String,
    pub punch_in: String,
    pub punch_out: String,
    pub worked: String,
    pub overtime: String,
}

impl From<&AttendanceRecord> for FormattedAttendance {
    fn from(record: &AttendanceRecord) -> Self {
        let present = record.is_present();
        FormattedAttendance {
            date: record.label(),
            status: record.status.to_string(),
            punch_in: record.punch_in.clone().unwrap_or_else(|| "-".to_string()),
            punch_out: record.punch_out.clone().unwrap_or_else(|| "-".to_string()),
            worked: if present { format_minutes(record.working_minutes) } else { "-".to_string() },
            overtime: if present && record.overtime_minutes > 0 {
                format_minutes(record.overtime_minutes)
            } else {
                "-".to_string()
            },
        }
    }
}

/// Money with two decimals and comma-grouped thousands, e.g. `12,345.50`.
pub fn format_amount(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && formatted != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Present-day credit without a trailing `.0` for whole days.
pub fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{}", days as i64)
    } else {
        format!("{:.1}", days)
    }
}
