use crate::db::repository::RepositoryError;
use crate::db::{advances, employees, shifts};
use crate::libs::staff::{ImportSummary, StaffFile};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::collections::HashSet;
use tracing::debug;

/// Imports a staff file in one transaction: either every accepted record is
/// written or, on the first failure, none is.
pub fn import(conn: &Mutex<Connection>, staff: &StaffFile) -> Result<ImportSummary, RepositoryError> {
    let mut conn = conn.lock();
    let tx = conn.transaction()?;

    let stored: HashSet<String> = {
        let mut stmt = tx.prepare("SELECT id FROM employees")?;
        let ids = stmt.query_map([], |row| row.get(0))?.collect::<Result<_, _>>()?;
        ids
    };
    let ledger: HashSet<i64> = {
        let mut stmt = tx.prepare("SELECT id FROM advances")?;
        let ids = stmt.query_map([], |row| row.get(0))?.collect::<Result<_, _>>()?;
        ids
    };
    let plan = staff.plan(&stored, &ledger);

    for shift in plan.shifts {
        shifts::insert(&tx, shift)?;
    }
    for employee in plan.employees {
        employees::insert(&tx, employee)?;
    }
    let approved_at = advances::now();
    for advance in &plan.advances {
        advances::insert_open(&tx, advance, approved_at)?;
    }

    tx.commit()?;
    let summary = plan.summary();
    debug!(?summary, "staff file imported");
    Ok(summary)
}
