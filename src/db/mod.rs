//! Persistence layer for paybook.
//!
//! The payroll engine reads employees, shifts and open advances through the
//! traits in [`repository`]. Two implementations exist: SQLite stores used by
//! the command line, and an in-memory store for tests.
//!
//! ```rust,no_run
//! use paybook::db::{advances::Advances, employees::Employees, shifts::Shifts};
//! use paybook::libs::config::PayrollConfig;
//! use paybook::libs::payroll::PayrollService;
//!
//! let (employees, shifts, advances) = (Employees::new()?, Shifts::new()?, Advances::new()?);
//! let service = PayrollService::new(&employees, &shifts, &advances, PayrollConfig::default());
//! let draft = service.draft(chrono::Local::now().date_naive())?;
//! # Ok::<(), paybook::db::repository::RepositoryError>(())
//! ```

/// Connection setup and the database file location.
pub mod db;

/// Versioned schema changes applied on every open.
pub mod migrations;

/// Store traits and the error they share.
pub mod repository;

/// In-memory stores.
pub mod memory;

pub mod advances;
pub mod employees;
pub mod shifts;

/// All-or-nothing staff file import.
pub mod staff;
