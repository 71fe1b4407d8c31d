use crate::{
    db::{db::Db, staff},
    libs::{messages::Message, staff::StaffFile},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Staff file in JSON
    file: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    msg_info!(Message::ImportReading(args.file.display().to_string()));
    let file = StaffFile::read(&args.file)?;

    let conn = Db::new()?.shared();
    let summary = staff::import(&conn, &file)?;

    if summary.is_empty() {
        msg_info!(Message::ImportEmpty);
        return Ok(());
    }
    msg_success!(Message::ImportedShifts(summary.shifts));
    msg_success!(Message::ImportedEmployees(summary.employees));
    msg_success!(Message::ImportedAdvances(summary.advances));
    Ok(())
}
