//! In-memory implementation of every store.
//!
//! Used by tests and documentation examples. A store created with
//! [`MemoryStore::unavailable`] fails every call, which is how upstream
//! outages are simulated.

use crate::db::repository::{AdvanceStore, EmployeeStore, RepositoryError, ShiftStore};
use crate::libs::advance::{AdvanceStatus, ApprovedAdvance};
use crate::libs::employee::Employee;
use crate::libs::shift::Shift;
use chrono::Local;
use parking_lot::RwLock;

#[derive(Debug, Default)]
struct Records {
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
    advances: Vec<ApprovedAdvance>,
    next_advance_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
    outage: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with `reason`.
    pub fn unavailable(reason: &str) -> Self {
        MemoryStore {
            records: RwLock::default(),
            outage: Some(reason.to_string()),
        }
    }

    pub fn add_employee(&self, employee: Employee) {
        upsert(&mut self.records.write().employees, employee, |e| e.id.clone());
    }

    pub fn add_shift(&self, shift: Shift) {
        upsert(&mut self.records.write().shifts, shift, |s| s.id.clone());
    }

    /// Adds an advance as-is, assigning an id when it has none.
    pub fn add_advance(&self, mut advance: ApprovedAdvance) -> i64 {
        let mut records = self.records.write();
        records.next_advance_id += 1;
        let id = *advance.id.get_or_insert(records.next_advance_id);
        records.advances.push(advance);
        id
    }

    fn check(&self) -> Result<(), RepositoryError> {
        match &self.outage {
            Some(reason) => Err(RepositoryError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> String) {
    let id = key(&item);
    match items.iter_mut().find(|existing| key(existing) == id) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

impl EmployeeStore for MemoryStore {
    fn employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        self.check()?;
        Ok(self.records.read().employees.clone())
    }

    fn employee(&self, id: &str) -> Result<Option<Employee>, RepositoryError> {
        self.check()?;
        Ok(self.records.read().employees.iter().find(|e| e.id == id).cloned())
    }

    fn save_employee(&self, employee: &Employee) -> Result<(), RepositoryError> {
        self.check()?;
        self.add_employee(employee.clone());
        Ok(())
    }
}

impl ShiftStore for MemoryStore {
    fn shifts(&self) -> Result<Vec<Shift>, RepositoryError> {
        self.check()?;
        Ok(self.records.read().shifts.clone())
    }

    fn shift(&self, id: &str) -> Result<Option<Shift>, RepositoryError> {
        self.check()?;
        Ok(self.records.read().shifts.iter().find(|s| s.id == id).cloned())
    }

    fn save_shift(&self, shift: &Shift) -> Result<(), RepositoryError> {
        self.check()?;
        self.add_shift(shift.clone());
        Ok(())
    }
}

impl AdvanceStore for MemoryStore {
    fn advances(&self) -> Result<Vec<ApprovedAdvance>, RepositoryError> {
        self.check()?;
        Ok(self.records.read().advances.clone())
    }

    fn approve(&self, advance: &ApprovedAdvance) -> Result<ApprovedAdvance, RepositoryError> {
        self.check()?;
        let approved = ApprovedAdvance {
            id: None,
            status: AdvanceStatus::Open,
            approved_at: Some(Local::now().naive_local()),
            deducted_at: None,
            ..advance.clone()
        };
        let id = self.add_advance(approved.clone());
        Ok(ApprovedAdvance { id: Some(id), ..approved })
    }

    fn mark_deducted(&self, ids: &[i64]) -> Result<usize, RepositoryError> {
        self.check()?;
        let now = Local::now().naive_local();
        let mut records = self.records.write();
        let mut settled = 0;
        for advance in records.advances.iter_mut() {
            if advance.is_open() && advance.id.is_some_and(|id| ids.contains(&id)) {
                advance.status = AdvanceStatus::Deducted;
                advance.deducted_at = Some(now);
                settled += 1;
            }
        }
        Ok(settled)
    }
}
