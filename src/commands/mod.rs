pub mod advance;
pub mod draft;
pub mod export;
pub mod history;
pub mod import;
pub mod init;

use crate::db::{advances::Advances, db::Db, employees::Employees, shifts::Shifts};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure payroll rules")]
    Init(init::InitArgs),
    #[command(about = "Import shifts, employees and advances from a JSON staff file")]
    Import(import::ImportArgs),
    #[command(about = "Approve and list salary advances", arg_required_else_help = true)]
    Advance(advance::AdvanceArgs),
    #[command(about = "Show the 30-day attendance of an employee")]
    History(history::HistoryArgs),
    #[command(about = "Draft payroll, optionally finalizing advance recovery")]
    Draft(draft::DraftArgs),
    #[command(about = "Export the payroll draft")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Advance(args) => advance::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Draft(args) => draft::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// The three SQLite stores over one shared connection.
pub(crate) fn open_stores() -> Result<(Employees, Shifts, Advances)> {
    let conn = Db::new()?.shared();
    Ok((
        Employees::with_connection(conn.clone()),
        Shifts::with_connection(conn.clone()),
        Advances::with_connection(conn),
    ))
}

/// Accepts `today` or `YYYY-MM-DD`.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
    }
}
