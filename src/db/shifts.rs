use crate::db::db::Db;
use crate::db::repository::{RepositoryError, ShiftStore};
use crate::libs::shift::Shift;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;

const SELECT_ALL: &str = "SELECT id, name, start_time, end_time, break_minutes FROM shifts ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, start_time, end_time, break_minutes FROM shifts WHERE id = ?1";
const UPSERT: &str = "INSERT OR REPLACE INTO shifts (id, name, start_time, end_time, break_minutes) VALUES (?1, ?2, ?3, ?4, ?5)";

/// Shift master data kept in SQLite.
pub struct Shifts {
    conn: Arc<Mutex<Connection>>,
}

impl Shifts {
    pub fn new() -> Result<Self, RepositoryError> {
        Ok(Self::with_connection(Db::new()?.shared()))
    }

    pub fn with_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Shifts { conn }
    }
}

pub(crate) fn insert(conn: &Connection, shift: &Shift) -> rusqlite::Result<usize> {
    conn.execute(
        UPSERT,
        params![shift.id, shift.name, shift.start_time, shift.end_time, shift.break_minutes],
    )
}

fn shift_from_row(row: &Row) -> rusqlite::Result<Shift> {
    Ok(Shift {
        id: row.get(0)?,
        name: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        break_minutes: row.get(4)?,
    })
}

impl ShiftStore for Shifts {
    fn shifts(&self) -> Result<Vec<Shift>, RepositoryError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_ALL)?;
        let shifts = stmt.query_map([], shift_from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(shifts)
    }

    fn shift(&self, id: &str) -> Result<Option<Shift>, RepositoryError> {
        let conn = self.conn.lock();
        Ok(conn.query_row(SELECT_BY_ID, [id], shift_from_row).optional()?)
    }

    fn save_shift(&self, shift: &Shift) -> Result<(), RepositoryError> {
        insert(&self.conn.lock(), shift)?;
        Ok(())
    }
}
