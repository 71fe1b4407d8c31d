//! # Paybook - payroll drafting for small teams
//!
//! Computes a per-employee payroll draft from wage configuration, shift
//! timings, a synthesized 30-day attendance history and the ledger of
//! approved salary advances.
//!
//! ## Features
//!
//! - **Wage Types**: Monthly, Daily and Hourly pay rules
//! - **Attendance**: deterministic history that is stable across runs
//! - **Overtime**: whole-hour overtime above a configurable minimum
//! - **Advances**: pending advances deducted once per finalized payroll
//! - **Payment Routing**: UPI, bank or cash with missing-detail flags
//! - **Export**: drafts to CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paybook::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
