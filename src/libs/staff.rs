//! Staff files: the JSON documents that load master data into the stores.
//!
//! A staff file may carry any of three lists; missing lists are empty.
//!
//! Importing happens in two steps. [`StaffFile::plan`] decides which records
//! are written, without touching any store, and the plan is then written
//! either through the store traits ([`StaffFile::apply`]) or in a single
//! SQLite transaction ([`crate::db::staff::import`]).
//!
//! An advance is only taken when it is open, has a positive amount, names a
//! known employee and carries no id already present in the ledger. Advances
//! marked `deducted` in the file were recovered elsewhere and are skipped, so
//! importing them can never cause a second recovery.
//!
//! ```json
//! {
//!   "shifts": [{ "id": "S1", "name": "Day", "startTime": "9:00 AM", "endTime": "6:00 PM", "breakMinutes": 60 }],
//!   "employees": [{ "id": "E1", "name": "Asha", "wageType": "Monthly", "salaryAmount": 30000, "shiftId": "S1" }],
//!   "advances": [{ "employeeId": "E1", "amount": 500 }]
//! }
//! ```

use crate::db::repository::{AdvanceStore, EmployeeStore, RepositoryError, ShiftStore};
use crate::libs::advance::ApprovedAdvance;
use crate::libs::employee::Employee;
use crate::libs::shift::Shift;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffFile {
    pub shifts: Vec<Shift>,
    pub employees: Vec<Employee>,
    pub advances: Vec<ApprovedAdvance>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub shifts: usize,
    pub employees: usize,
    pub advances: usize,
}

impl ImportSummary {
    pub fn is_empty(&self) -> bool {
        self.shifts == 0 && self.employees == 0 && self.advances == 0
    }
}

/// The records of a staff file that will be written.
#[derive(Debug)]
pub struct ImportPlan<'a> {
    pub shifts: &'a [Shift],
    pub employees: &'a [Employee],
    pub advances: Vec<&'a ApprovedAdvance>,
}

impl ImportPlan<'_> {
    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            shifts: self.shifts.len(),
            employees: self.employees.len(),
            advances: self.advances.len(),
        }
    }
}

impl StaffFile {
    pub fn read(path: &Path) -> Result<StaffFile> {
        let content = fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
        let staff = serde_json::from_str(&content).with_context(|| format!("invalid staff file {}", path.display()))?;
        Ok(staff)
    }

    /// Selects what to write given the employees and advance ids already
    /// stored. Employees listed in the file count as known.
    pub fn plan<'a>(&'a self, stored_employees: &HashSet<String>, ledger_ids: &HashSet<i64>) -> ImportPlan<'a> {
        let advances = self
            .advances
            .iter()
            .filter(|advance| self.accepts(advance, stored_employees, ledger_ids))
            .collect();
        ImportPlan {
            shifts: &self.shifts,
            employees: &self.employees,
            advances,
        }
    }

    fn accepts(&self, advance: &ApprovedAdvance, stored_employees: &HashSet<String>, ledger_ids: &HashSet<i64>) -> bool {
        let employee = advance.employee_id.as_str();
        if advance.amount.is_nan() || advance.amount <= 0.0 {
            warn!(employee, amount = advance.amount, "skipping non-positive advance");
            return false;
        }
        if !advance.is_open() {
            warn!(employee, status = %advance.status, "skipping advance that is not open");
            return false;
        }
        if let Some(id) = advance.id.filter(|id| ledger_ids.contains(id)) {
            warn!(employee, id, "skipping advance already in the ledger");
            return false;
        }
        if !stored_employees.contains(employee) && !self.employees.iter().any(|e| e.id == employee) {
            warn!(employee, "skipping advance of unknown employee");
            return false;
        }
        true
    }

    /// Writes the plan through the stores, one record at a time.
    ///
    /// Shifts and employees replace existing records with the same id;
    /// accepted advances are approved as new open ledger entries.
    ///
    /// The stores offer no shared transaction, so a failure partway leaves
    /// the records written before it in place. The SQLite-backed import in
    /// [`crate::db::staff::import`] is all-or-nothing.
    pub fn apply(
        &self,
        employees: &dyn EmployeeStore,
        shifts: &dyn ShiftStore,
        advances: &dyn AdvanceStore,
    ) -> Result<ImportSummary, RepositoryError> {
        let stored: HashSet<String> = employees.employees()?.into_iter().map(|e| e.id).collect();
        let ledger: HashSet<i64> = advances.advances()?.into_iter().filter_map(|a| a.id).collect();
        let plan = self.plan(&stored, &ledger);

        for shift in plan.shifts {
            shifts.save_shift(shift)?;
        }
        for employee in plan.employees {
            employees.save_employee(employee)?;
        }
        for advance in &plan.advances {
            advances.approve(advance)?;
        }

        Ok(plan.summary())
    }
}
