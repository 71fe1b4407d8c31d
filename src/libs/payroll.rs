//! Payroll draft calculation.
//!
//! Turns wage configuration, synthesized attendance and open advances into
//! one [`PayrollEntry`] per employee. Drafts are transient: they are
//! recomputed on every request and never stored.
//!
//! ## Pay Formula
//!
//! ```text
//! Monthly   per_day  = salary / divisor             (divisor: calculation method)
//!           rate     = per_day / shift_hours
//!           base     = round(per_day * present_days)
//! Daily     rate     = salary / shift_hours
//!           base     = round(regular_minutes / 60 * rate)
//! Hourly    base     = salary                        (no rate derivation)
//!
//! overtime  = round(overtime_hours * rate * multiplier)
//! net       = max(0, base + additions - deductions)
//! ```
//!
//! Monthly employees are priced over the full attendance window, Daily and
//! Hourly employees over today's record only. `shift_hours` is the assigned
//! shift net of its break, or nine hours for an employee without one.
//!
//! ## Regular / Overtime Split
//!
//! Overtime is billed in whole hours once it reaches the configured minimum.
//! The billed hours are removed from the day's working minutes before they
//! count as regular time, so no minute is paid twice.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use paybook::db::memory::MemoryStore;
//! use paybook::libs::config::PayrollConfig;
//! use paybook::libs::employee::{Employee, WageType};
//! use paybook::libs::payroll::PayrollService;
//!
//! let store = MemoryStore::new();
//! store.add_employee(Employee::new("E1", "Asha", WageType::Monthly, 30000.0));
//!
//! let service = PayrollService::new(&store, &store, &store, PayrollConfig::default());
//! let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//! let draft = service.draft(today)?;
//! assert_eq!(draft.len(), 1);
//! # Ok::<(), paybook::db::repository::RepositoryError>(())
//! ```

use crate::db::repository::{AdvanceStore, EmployeeStore, RepositoryError, ShiftStore};
use crate::libs::advance::{open_by_employee, pending_total, ApprovedAdvance};
use crate::libs::attendance::{generate_history, AttendanceRecord, AttendanceStatus};
use crate::libs::config::PayrollConfig;
use crate::libs::employee::{Employee, PaymentDetails, WageType};
use crate::libs::shift::{payable_minutes, Shift};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

pub const ADVANCE_LABEL: &str = "Less Advance";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    Addition,
    Deduction,
}

/// A labelled amount added to or taken from the base pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollAdjustment {
    #[serde(rename = "type")]
    pub kind: AdjustmentType,
    pub label: String,
    pub amount: f64,
}

impl PayrollAdjustment {
    pub fn addition(label: impl Into<String>, amount: f64) -> Self {
        PayrollAdjustment {
            kind: AdjustmentType::Addition,
            label: label.into(),
            amount,
        }
    }

    pub fn deduction(label: impl Into<String>, amount: f64) -> Self {
        PayrollAdjustment {
            kind: AdjustmentType::Deduction,
            label: label.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    Bank,
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PaymentMode::Cash => write!(f, "Cash"),
            PaymentMode::Upi => write!(f, "UPI"),
            PaymentMode::Bank => write!(f, "Bank"),
        }
    }
}

/// Whether an entry can be paid out as drafted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Ready,
    /// No payment detail on file; payment must not be initiated.
    MissingDetails,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntryStatus::Ready => write!(f, "ready"),
            EntryStatus::MissingDetails => write!(f, "missing_details"),
        }
    }
}

/// Every intermediate value of an entry, kept for audit display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationStats {
    pub hourly_rate: f64,
    pub per_day_pay: f64,
    /// Days a monthly salary is spread over.
    pub salary_divisor: u32,
    /// Effective shift length, break excluded.
    pub shift_hours: f64,
    /// Attendance records considered: 30 for Monthly, 1 otherwise.
    pub window_days: u32,
    pub present_days: f64,
    pub present_shifts: u32,
    pub regular_hours: f64,
    pub overtime_hours: i64,
    pub overtime_amount: f64,
    pub pending_advance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollEntry {
    pub employee_id: String,
    pub employee_name: String,
    pub wage_type: WageType,
    pub base_amount: f64,
    pub adjustments: Vec<PayrollAdjustment>,
    pub net_pay: f64,
    pub payment_mode: PaymentMode,
    pub status: EntryStatus,
    pub stats: CalculationStats,
    /// Ledger ids of the advances recovered by this entry.
    pub advance_ids: Vec<i64>,
}

impl PayrollEntry {
    pub fn additions(&self) -> f64 {
        self.sum_of(AdjustmentType::Addition)
    }

    pub fn deductions(&self) -> f64 {
        self.sum_of(AdjustmentType::Deduction)
    }

    fn sum_of(&self, kind: AdjustmentType) -> f64 {
        self.adjustments.iter().filter(|a| a.kind == kind).map(|a| a.amount).sum()
    }
}

/// Attendance credit of a present day: 1.0, 0.5 or 0.0.
pub fn present_day_credit(working_minutes: i64, shift_minutes: i64, grace_minutes: i64) -> f64 {
    if working_minutes >= shift_minutes - grace_minutes {
        1.0
    } else if working_minutes * 2 >= shift_minutes {
        0.5
    } else {
        0.0
    }
}

/// Billed overtime of a day and the minutes left at the regular rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvertimeSplit {
    pub overtime_hours: i64,
    pub regular_minutes: i64,
}

/// Splits a record into whole overtime hours and regular minutes.
///
/// Overtime below `min_overtime_minutes` is not billed and stays regular.
pub fn split_overtime(record: &AttendanceRecord, min_overtime_minutes: i64) -> OvertimeSplit {
    let overtime_hours = if record.overtime_minutes >= min_overtime_minutes {
        record.overtime_minutes / 60
    } else {
        0
    };
    OvertimeSplit {
        overtime_hours,
        regular_minutes: (record.working_minutes - overtime_hours * 60).max(0),
    }
}

/// Picks the payment mode and readiness of an employee.
///
/// An explicit cash preference wins over UPI, UPI over a bank account, and
/// cash is the fallback when nothing is on file.
pub fn resolve_payment_mode(details: Option<&PaymentDetails>) -> (PaymentMode, EntryStatus) {
    let Some(details) = details else {
        return (PaymentMode::Cash, EntryStatus::MissingDetails);
    };

    let mode = if details.explicit_cash_preference {
        PaymentMode::Cash
    } else if details.upi().is_some() {
        PaymentMode::Upi
    } else if details.account().is_some() {
        PaymentMode::Bank
    } else {
        PaymentMode::Cash
    };
    let status = if details.has_any() {
        EntryStatus::Ready
    } else {
        EntryStatus::MissingDetails
    };

    (mode, status)
}

/// Records of `history` priced for the given wage type.
pub fn pay_window(wage_type: WageType, history: &[AttendanceRecord]) -> &[AttendanceRecord] {
    match wage_type {
        WageType::Monthly => history,
        WageType::Daily | WageType::Hourly => &history[..history.len().min(1)],
    }
}

#[derive(Debug, Default)]
struct Attendance {
    present_days: f64,
    present_shifts: u32,
    regular_minutes: i64,
    overtime_hours: i64,
    weekly_offs: u32,
}

fn aggregate(window: &[AttendanceRecord], shift_minutes: i64, config: &PayrollConfig) -> Attendance {
    let mut totals = Attendance::default();
    for record in window {
        match record.status {
            AttendanceStatus::Present => {
                let split = split_overtime(record, config.min_overtime_minutes);
                totals.present_days += present_day_credit(record.working_minutes, shift_minutes, config.grace_minutes);
                totals.present_shifts += 1;
                totals.regular_minutes += split.regular_minutes;
                totals.overtime_hours += split.overtime_hours;
            }
            AttendanceStatus::WeekOff => totals.weekly_offs += 1,
            _ => {}
        }
    }
    totals
}

/// Prices one employee over an explicit attendance history.
///
/// `history` is ordered newest first, as produced by
/// [`generate_history`]; `advances` may contain deducted advances, which
/// are ignored.
pub fn build_entry(
    employee: &Employee,
    shift: Option<&Shift>,
    history: &[AttendanceRecord],
    advances: &[ApprovedAdvance],
    config: &PayrollConfig,
    today: NaiveDate,
) -> PayrollEntry {
    let shift_minutes = payable_minutes(shift);
    let shift_hours = shift_minutes as f64 / 60.0;
    let window = pay_window(employee.wage_type, history);
    let attendance = aggregate(window, shift_minutes, config);
    let window_days = window.len() as u32;
    let salary = employee.salary_amount;

    let salary_divisor = config
        .calculation_method
        .divisor(today, window_days, attendance.weekly_offs);
    let rate_for = |amount: f64| if shift_hours > 0.0 { amount / shift_hours } else { 0.0 };

    let (base_amount, per_day_pay, hourly_rate) = match employee.wage_type {
        WageType::Monthly => {
            let per_day_pay = salary / f64::from(salary_divisor);
            ((per_day_pay * attendance.present_days).round(), per_day_pay, rate_for(per_day_pay))
        }
        WageType::Daily => {
            let hourly_rate = rate_for(salary);
            ((attendance.regular_minutes as f64 / 60.0 * hourly_rate).round(), salary, hourly_rate)
        }
        WageType::Hourly => (salary, 0.0, 0.0),
    };

    let mut adjustments = Vec::new();

    let overtime_amount = (attendance.overtime_hours as f64 * hourly_rate * config.overtime_multiplier).round();
    if overtime_amount > 0.0 {
        adjustments.push(PayrollAdjustment::addition(
            format!("Overtime ({} hrs)", attendance.overtime_hours),
            overtime_amount,
        ));
    }

    let pending_advance = pending_total(advances);
    if pending_advance > 0.0 {
        adjustments.push(PayrollAdjustment::deduction(ADVANCE_LABEL, pending_advance));
    }
    let advance_ids = advances.iter().filter(|a| a.is_open()).filter_map(|a| a.id).collect();

    let (payment_mode, status) = resolve_payment_mode(employee.payment_details.as_ref());

    let mut entry = PayrollEntry {
        employee_id: employee.id.clone(),
        employee_name: employee.display_name().to_string(),
        wage_type: employee.wage_type,
        base_amount,
        adjustments,
        net_pay: 0.0,
        payment_mode,
        status,
        stats: CalculationStats {
            hourly_rate,
            per_day_pay,
            salary_divisor,
            shift_hours,
            window_days,
            present_days: attendance.present_days,
            present_shifts: attendance.present_shifts,
            regular_hours: attendance.regular_minutes as f64 / 60.0,
            overtime_hours: attendance.overtime_hours,
            overtime_amount,
            pending_advance,
        },
        advance_ids,
    };
    entry.net_pay = (entry.base_amount + entry.additions() - entry.deductions()).max(0.0);

    debug!(
        employee = %entry.employee_id,
        base = entry.base_amount,
        net = entry.net_pay,
        status = %entry.status,
        "priced payroll entry"
    );

    entry
}

/// Builds a payroll draft: one entry per employee, in input order.
///
/// An employee whose shift id is not in `shifts` is treated like an employee
/// without a shift: punches come from the fallback window and pay from the
/// nine-hour default duration.
pub fn build_draft(
    employees: &[Employee],
    shifts: &HashMap<String, Shift>,
    open_advances: &HashMap<String, Vec<ApprovedAdvance>>,
    config: &PayrollConfig,
    today: NaiveDate,
) -> Vec<PayrollEntry> {
    employees
        .iter()
        .map(|employee| {
            let shift = employee.shift_id.as_ref().and_then(|id| {
                let shift = shifts.get(id);
                if shift.is_none() {
                    warn!(employee = %employee.id, shift = %id, "assigned shift not found, using default shift");
                }
                shift
            });
            let history = generate_history(employee, shift, today);
            let advances = open_advances.get(&employee.id).map(Vec::as_slice).unwrap_or_default();
            build_entry(employee, shift, &history, advances, config, today)
        })
        .collect()
}

/// Drafts and finalizes payroll against injected stores.
pub struct PayrollService<'a> {
    employees: &'a dyn EmployeeStore,
    shifts: &'a dyn ShiftStore,
    advances: &'a dyn AdvanceStore,
    config: PayrollConfig,
}

impl<'a> PayrollService<'a> {
    pub fn new(
        employees: &'a dyn EmployeeStore,
        shifts: &'a dyn ShiftStore,
        advances: &'a dyn AdvanceStore,
        config: PayrollConfig,
    ) -> Self {
        PayrollService {
            employees,
            shifts,
            advances,
            config,
        }
    }

    /// Fetches every input and builds the draft for `today`.
    ///
    /// Any store failure aborts the whole draft; no partial result is
    /// returned. The advance ledger is only read.
    pub fn draft(&self, today: NaiveDate) -> Result<Vec<PayrollEntry>, RepositoryError> {
        let employees = self.employees.employees()?;
        let shifts: HashMap<String, Shift> = self
            .shifts
            .shifts()?
            .into_iter()
            .map(|shift| (shift.id.clone(), shift))
            .collect();
        let open_advances = open_by_employee(self.advances.open_advances()?);

        let draft = build_draft(&employees, &shifts, &open_advances, &self.config, today);
        info!(entries = draft.len(), date = %today, "payroll draft built");
        Ok(draft)
    }

    /// Marks the advances recovered by `entries` as deducted.
    ///
    /// Advances already deducted are left untouched, so finalizing the same
    /// draft twice recovers each advance once. Returns the number of advances
    /// that changed state.
    pub fn finalize(&self, entries: &[PayrollEntry]) -> Result<usize, RepositoryError> {
        let ids: Vec<i64> = entries.iter().flat_map(|e| e.advance_ids.iter().copied()).collect();
        if ids.is_empty() {
            return Ok(0);
        }
        let settled = self.advances.mark_deducted(&ids)?;
        info!(settled, "advances recovered by payroll");
        Ok(settled)
    }
}
