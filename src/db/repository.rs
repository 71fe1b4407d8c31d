//! Store interfaces consumed by the payroll engine.
//!
//! The engine never touches storage directly. Drafting code receives these
//! traits, so the same computation runs against SQLite in the CLI and against
//! [`MemoryStore`](crate::db::memory::MemoryStore) in tests.

use crate::libs::advance::ApprovedAdvance;
use crate::libs::employee::Employee;
use crate::libs::shift::Shift;
use thiserror::Error;

/// Failure to read or write one of the upstream stores.
///
/// This is the only error a draft can fail with; business gaps such as a
/// missing shift are never reported here.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// SQLite rejected a statement or the connection failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The data directory or database file could not be reached.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A stored value no longer parses, e.g. an unknown wage type or advance
    /// status written by hand.
    #[error("corrupt {table} record: {reason}")]
    Corrupt { table: &'static str, reason: String },

    /// The store is offline. Raised by stores that front a remote source.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Read and upsert access to the employee directory.
///
/// Implementations return employees in a stable order; drafts list entries
/// in that order.
pub trait EmployeeStore {
    /// Every employee, in the store's stable order.
    fn employees(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// The employee with `id`, or `None` when there is none.
    fn employee(&self, id: &str) -> Result<Option<Employee>, RepositoryError>;

    /// Inserts or replaces the employee with the same id.
    fn save_employee(&self, employee: &Employee) -> Result<(), RepositoryError>;
}

/// Shift definitions referenced by employees through `shift_id`.
pub trait ShiftStore {
    fn shifts(&self) -> Result<Vec<Shift>, RepositoryError>;

    fn shift(&self, id: &str) -> Result<Option<Shift>, RepositoryError>;

    /// Inserts or replaces the shift with the same id.
    fn save_shift(&self, shift: &Shift) -> Result<(), RepositoryError>;
}

/// The advance ledger.
///
/// Drafting only reads it. Advances enter through [`approve`](Self::approve)
/// as open and leave through [`mark_deducted`](Self::mark_deducted), which
/// must ignore advances that are already deducted so a payroll is never
/// recovered twice.
pub trait AdvanceStore {
    /// Every advance in the ledger, open and deducted.
    fn advances(&self) -> Result<Vec<ApprovedAdvance>, RepositoryError>;

    /// Advances still awaiting recovery.
    fn open_advances(&self) -> Result<Vec<ApprovedAdvance>, RepositoryError> {
        Ok(self.advances()?.into_iter().filter(ApprovedAdvance::is_open).collect())
    }

    /// Records a newly approved advance and returns it with its ledger id.
    fn approve(&self, advance: &ApprovedAdvance) -> Result<ApprovedAdvance, RepositoryError>;

    /// Flips open advances among `ids` to deducted and returns how many changed.
    fn mark_deducted(&self, ids: &[i64]) -> Result<usize, RepositoryError>;
}
