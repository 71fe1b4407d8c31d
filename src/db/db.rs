use crate::db::migrations::init_with_migrations;
use crate::db::repository::RepositoryError;
use crate::libs::data_storage::DataStorage;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

pub const DB_FILE_NAME: &str = "paybook.db";

/// An open, fully migrated SQLite database.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the platform data directory.
    pub fn new() -> Result<Db, RepositoryError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens the database at `path`, applying pending migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db, RepositoryError> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Connection wrapped for sharing between stores.
    pub fn shared(self) -> Arc<Mutex<Connection>> {
        Arc::new(Mutex::new(self.conn))
    }

    /// Removes the database file. Returns `false` if there was none.
    pub fn delete() -> Result<bool, RepositoryError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        if !db_file_path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(db_file_path)?;
        Ok(true)
    }
}
