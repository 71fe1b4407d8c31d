//! The advance ledger.
//!
//! Advances are inserted as `open` by approval and flipped to `deducted` when
//! a payroll that recovered them is finalized. Drafting only reads.
//!
//! ```rust,no_run
//! use paybook::db::advances::Advances;
//! use paybook::db::repository::AdvanceStore;
//! use paybook::libs::advance::ApprovedAdvance;
//!
//! let advances = Advances::new()?;
//! let approved = advances.approve(&ApprovedAdvance::new("E1", 500.0, None))?;
//! assert!(approved.id.is_some());
//! # Ok::<(), paybook::db::repository::RepositoryError>(())
//! ```

use crate::db::db::Db;
use crate::db::repository::{AdvanceStore, RepositoryError};
use crate::libs::advance::{AdvanceStatus, ApprovedAdvance};
use chrono::{Local, NaiveDateTime, Timelike};
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;

const SELECT_ALL: &str =
    "SELECT id, employee_id, amount, status, note, approved_at, deducted_at FROM advances ORDER BY id";
const SELECT_OPEN: &str = "SELECT id, employee_id, amount, status, note, approved_at, deducted_at FROM advances
    WHERE status = 'open' ORDER BY id";
const INSERT: &str = "INSERT INTO advances (employee_id, amount, status, note, approved_at) VALUES (?1, ?2, 'open', ?3, ?4)";
const MARK_DEDUCTED: &str = "UPDATE advances SET status = 'deducted', deducted_at = ?1 WHERE id = ?2 AND status = 'open'";

pub struct Advances {
    conn: Arc<Mutex<Connection>>,
}

impl Advances {
    pub fn new() -> Result<Self, RepositoryError> {
        Ok(Self::with_connection(Db::new()?.shared()))
    }

    pub fn with_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Advances { conn }
    }

    fn query(&self, sql: &str) -> Result<Vec<ApprovedAdvance>, RepositoryError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(sql)?;
        let advances = stmt
            .query_map([], advance_from_row)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| match e {
                rusqlite::Error::FromSqlConversionFailure(_, _, reason) => RepositoryError::Corrupt {
                    table: "advances",
                    reason: reason.to_string(),
                },
                other => RepositoryError::Database(other),
            })?;
        Ok(advances)
    }
}

pub(crate) fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Inserts `advance` as a new open ledger entry and returns its id.
pub(crate) fn insert_open(conn: &Connection, advance: &ApprovedAdvance, approved_at: NaiveDateTime) -> rusqlite::Result<i64> {
    conn.execute(INSERT, params![advance.employee_id, advance.amount, advance.note, approved_at])?;
    Ok(conn.last_insert_rowid())
}

fn advance_from_row(row: &Row) -> rusqlite::Result<ApprovedAdvance> {
    let status = row
        .get::<_, String>(3)?
        .parse::<AdvanceStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, e.into()))?;
    Ok(ApprovedAdvance {
        id: Some(row.get(0)?),
        employee_id: row.get(1)?,
        amount: row.get(2)?,
        status,
        note: row.get(4)?,
        approved_at: Some(row.get(5)?),
        deducted_at: row.get(6)?,
    })
}

impl AdvanceStore for Advances {
    fn advances(&self) -> Result<Vec<ApprovedAdvance>, RepositoryError> {
        self.query(SELECT_ALL)
    }

    fn open_advances(&self) -> Result<Vec<ApprovedAdvance>, RepositoryError> {
        self.query(SELECT_OPEN)
    }

    fn approve(&self, advance: &ApprovedAdvance) -> Result<ApprovedAdvance, RepositoryError> {
        let approved_at = now();
        let id = insert_open(&self.conn.lock(), advance, approved_at)?;
        Ok(ApprovedAdvance {
            id: Some(id),
            status: AdvanceStatus::Open,
            approved_at: Some(approved_at),
            deducted_at: None,
            ..advance.clone()
        })
    }

    fn mark_deducted(&self, ids: &[i64]) -> Result<usize, RepositoryError> {
        let deducted_at = now();
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let mut settled = 0;
        for id in ids {
            settled += tx.execute(MARK_DEDUCTED, params![deducted_at, id])?;
        }
        tx.commit()?;
        Ok(settled)
    }
}
