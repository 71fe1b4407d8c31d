//! Versioned schema migrations.
//!
//! Every connection opened through [`Db`](crate::db::db::Db) runs the pending
//! migrations inside one transaction, so the schema is either fully upgraded
//! or left untouched.
//!
//! ## Versions
//!
//! | Version | Name                    | Change                                   |
//! |---------|-------------------------|------------------------------------------|
//! | 1       | `create_payroll_tables` | `shifts`, `employees`, `advances`, indexes |
//! | 2       | `add_payment_details`   | UPI id, bank account, IFSC, cash flag    |
//!
//! Applied versions are recorded in the `migrations` table together with the
//! time they ran. New versions are appended in
//! `MigrationManager::register_migrations` and must never rewrite an
//! existing one: databases in the field already carry its effects.
//!
//! ```rust
//! use paybook::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert!(get_db_version(&conn)? >= 1);
//! # Ok::<(), rusqlite::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use rusqlite::{params, Connection, Result, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// One schema step.
struct Migration {
    /// Strictly increasing version number
    version: u32,
    /// Snake-case name stored in the history table
    name: &'static str,
    /// Applies the change inside the upgrade transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of every known migration, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.add_migration(1, "create_payroll_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS shifts (
                    id TEXT NOT NULL PRIMARY KEY,
                    name TEXT NOT NULL,
                    start_time TEXT NOT NULL,
                    end_time TEXT NOT NULL,
                    break_minutes INTEGER NOT NULL DEFAULT 0
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS employees (
                    id TEXT NOT NULL PRIMARY KEY,
                    name TEXT NOT NULL,
                    wage_type TEXT NOT NULL DEFAULT 'hourly',
                    salary_amount REAL NOT NULL DEFAULT 0,
                    weekly_offs TEXT NOT NULL DEFAULT '',
                    shift_id TEXT
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS advances (
                    id INTEGER PRIMARY KEY,
                    employee_id TEXT NOT NULL,
                    amount REAL NOT NULL,
                    status TEXT NOT NULL DEFAULT 'open',
                    note TEXT,
                    approved_at TIMESTAMP NOT NULL,
                    deducted_at TIMESTAMP
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_advances_employee ON advances(employee_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_advances_status ON advances(status)", [])?;
            Ok(())
        });

        // Payment details arrived after the first imports.
        self.add_migration(2, "add_payment_details", |tx| {
            tx.execute("ALTER TABLE employees ADD COLUMN upi_id TEXT", [])?;
            tx.execute("ALTER TABLE employees ADD COLUMN account_number TEXT", [])?;
            tx.execute("ALTER TABLE employees ADD COLUMN ifsc_code TEXT", [])?;
            tx.execute(
                "ALTER TABLE employees ADD COLUMN cash_preference BOOLEAN NOT NULL DEFAULT FALSE",
                [],
            )?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded version.
    ///
    /// Creates the history table on first use. All pending migrations run in
    /// one transaction; if any fails the error is logged and returned and
    /// nothing is committed.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        msg_debug!(Message::MigrationsCompleted);
        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    /// Version the schema reaches once every migration has run.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Brings `conn` up to the latest schema.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

/// Whether `conn` is behind the latest schema version.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
