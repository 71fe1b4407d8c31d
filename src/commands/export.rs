use super::{open_stores, parse_date};
use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        payroll::PayrollService,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let config = Config::read()?.payroll_or_default();
    let (employees, shifts, advances) = open_stores()?;

    let draft = PayrollService::new(&employees, &shifts, &advances, config).draft(date)?;
    if draft.is_empty() {
        msg_info!(Message::ExportNothing);
        return Ok(());
    }

    msg_info!(Message::ExportingData(format!("{:?}", args.format)));
    let exporter = Exporter::new(args.format, args.output, date);
    exporter.export(&draft, date)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
