//! Text for every user-facing message.
//!
//! All wording lives here so commands only pick a [`Message`] variant and
//! pass its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigFileNotFound => "No configuration file, defaults are in effect".to_string(),
            Message::ConfigModulePayroll => "Payroll settings".to_string(),
            Message::PromptCalculationMethod => "Salary calculation method".to_string(),
            Message::PromptGraceMinutes => "Grace minutes before a day counts as half".to_string(),
            Message::PromptOvertimeMultiplier => "Overtime multiplier".to_string(),
            Message::PromptMinOvertimeMinutes => "Minimum overtime in minutes".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseDeleted => "Database deleted".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::MigrationsCompleted => "All migrations completed".to_string(),

            // === IMPORT MESSAGES ===
            Message::ImportReading(path) => format!("Importing {}", path),
            Message::ImportedShifts(count) => format!("Imported {} shifts", count),
            Message::ImportedEmployees(count) => format!("Imported {} employees", count),
            Message::ImportedAdvances(count) => format!("Imported {} approved advances", count),
            Message::ImportEmpty => "Nothing to import".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::EmployeeNotFound(id) => format!("Employee '{}' not found", id),
            Message::NoEmployees => "No employees found. Import a staff file first".to_string(),
            Message::ShiftNotFound(employee, shift) => {
                format!("Shift '{}' of employee '{}' not found, using the default shift", shift, employee)
            }

            // === ADVANCE MESSAGES ===
            Message::AdvanceApproved(id, employee, amount) => {
                format!("Advance #{} of {} approved for '{}'", id, amount, employee)
            }
            Message::AdvanceAmountInvalid(amount) => format!("Advance amount must be positive, got {}", amount),
            Message::AdvancesHeader => "Approved advances".to_string(),
            Message::NoAdvances => "No advances found".to_string(),

            // === ATTENDANCE MESSAGES ===
            Message::AttendanceHeader(employee, date) => format!("Attendance of {} up to {}", employee, date),

            // === PAYROLL MESSAGES ===
            Message::DraftHeader(date) => format!("Payroll draft for {}", date),
            Message::DraftTotal(total) => format!("Total net pay: {}", total),
            Message::DraftMissingDetails(count) => {
                format!("{} employees have no payment details and will be paid in cash", count)
            }
            Message::ConfirmFinalize(count) => format!("Finalize payroll and recover {} advances?", count),
            Message::FinalizeCancelled => "Finalization cancelled".to_string(),
            Message::AdvancesRecovered(count) => format!("{} advances marked as deducted", count),
            Message::NothingToRecover => "No open advances to recover".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting payroll draft as {}", format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportNothing => "Nothing to export".to_string(),

            // === GENERIC ===
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD", value),
            Message::StoreFailed(error) => format!("Could not read payroll data: {}", error),
        };
        write!(f, "{}", s)
    }
}
