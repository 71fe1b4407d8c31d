use super::open_stores;
use crate::{
    db::repository::{AdvanceStore, EmployeeStore},
    libs::{advance::ApprovedAdvance, formatter::format_amount, messages::Message, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct AdvanceArgs {
    #[command(subcommand)]
    command: AdvanceCommand,
}

#[derive(Debug, Subcommand)]
enum AdvanceCommand {
    /// Approve an advance for an employee
    Approve {
        employee: String,
        amount: f64,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List open advances
    List {
        /// Include advances already deducted
        #[arg(short, long)]
        all: bool,
    },
}

pub fn cmd(args: AdvanceArgs) -> Result<()> {
    let (employees, _, advances) = open_stores()?;

    match args.command {
        AdvanceCommand::Approve { employee, amount, note } => {
            if amount.is_nan() || amount <= 0.0 {
                msg_bail_anyhow!(Message::AdvanceAmountInvalid(amount.to_string()));
            }
            if employees.employee(&employee)?.is_none() {
                msg_bail_anyhow!(Message::EmployeeNotFound(employee));
            }
            let approved = advances.approve(&ApprovedAdvance::new(&employee, amount, note))?;
            msg_success!(Message::AdvanceApproved(
                approved.id.unwrap_or_default(),
                employee,
                format_amount(amount)
            ));
        }
        AdvanceCommand::List { all } => {
            let list = if all { advances.advances()? } else { advances.open_advances()? };
            if list.is_empty() {
                msg_info!(Message::NoAdvances);
                return Ok(());
            }
            msg_print!(Message::AdvancesHeader, true);
            View::advances(&list);
        }
    }
    Ok(())
}
