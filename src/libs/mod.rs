//! Core library of paybook.
//!
//! Domain types and the payroll engine live here, next to the supporting
//! pieces the command line needs: configuration, storage location, console
//! messages, tables and exporters.
//!
//! ## Engine
//!
//! - [`time`]: clock parsing and duration formatting
//! - [`shift`], [`employee`], [`advance`]: upstream master data
//! - [`attendance`]: deterministic 30-day attendance synthesis
//! - [`payroll`]: per-employee draft entries and finalization
//!
//! ## Support
//!
//! - [`config`], [`data_storage`]: settings and the data directory
//! - [`staff`]: staff file import
//! - [`messages`], [`view`], [`formatter`], [`export`]: output

pub mod advance;
pub mod attendance;
pub mod config;
pub mod data_storage;
pub mod employee;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod payroll;
pub mod shift;
pub mod staff;
pub mod time;
pub mod view;
