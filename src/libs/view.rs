use super::advance::ApprovedAdvance;
use super::attendance::AttendanceRecord;
use super::formatter::{format_amount, FormattedAttendance, FormattedEntry};
use super::payroll::{AdjustmentType, PayrollEntry};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn draft(entries: &[PayrollEntry]) {
        let mut table = Table::new();

        table.add_row(row![
            "ID", "NAME", "WAGE", "DAYS", "OT H", "BASE", "ADD", "DEDUCT", "NET", "MODE", "STATUS"
        ]);
        for entry in entries.iter().map(FormattedEntry::from) {
            table.add_row(row![
                entry.employee_id,
                entry.employee_name,
                entry.wage_type,
                r->entry.present_days,
                r->entry.overtime_hours,
                r->entry.base_amount,
                r->entry.additions,
                r->entry.deductions,
                r->entry.net_pay,
                entry.payment_mode,
                entry.status
            ]);
        }
        table.printstd();
    }

    /// Adjustment lines of every entry that has any.
    pub fn adjustments(entries: &[PayrollEntry]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "LABEL", "AMOUNT"]);
        for entry in entries {
            for adjustment in &entry.adjustments {
                let sign = match adjustment.kind {
                    AdjustmentType::Addition => "+",
                    AdjustmentType::Deduction => "-",
                };
                table.add_row(row![
                    entry.employee_id,
                    adjustment.label,
                    r->format!("{}{}", sign, format_amount(adjustment.amount))
                ]);
            }
        }
        if table.len() > 1 {
            table.printstd();
        }
    }

    pub fn attendance(history: &[AttendanceRecord]) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "STATUS", "IN", "OUT", "WORKED", "OVERTIME"]);
        for record in history.iter().map(FormattedAttendance::from) {
            table.add_row(row![
                record.date,
                record.status,
                record.punch_in,
                record.punch_out,
                r->record.worked,
                r->record.overtime
            ]);
        }
        table.printstd();
    }

    pub fn advances(advances: &[ApprovedAdvance]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "EMPLOYEE", "AMOUNT", "STATUS", "APPROVED", "NOTE"]);
        for advance in advances {
            table.add_row(row![
                advance.id.unwrap_or(0),
                advance.employee_id,
                r->format_amount(advance.amount),
                advance.status,
                advance
                    .approved_at
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default(),
                advance.note.clone().unwrap_or_default()
            ]);
        }
        table.printstd();
    }
}
