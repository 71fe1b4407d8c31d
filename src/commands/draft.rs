use super::{open_stores, parse_date};
use crate::{
    libs::{
        config::Config,
        export::total_net_pay,
        formatter::format_amount,
        messages::Message,
        payroll::{EntryStatus, PayrollService},
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DraftArgs {
    /// Payroll date, `today` or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Mark the advances recovered by this draft as deducted
    #[arg(long)]
    finalize: bool,

    /// Skip the finalize confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DraftArgs) -> Result<()> {
    let today = parse_date(&args.date)?;
    let config = Config::read()?.payroll_or_default();
    let (employees, shifts, advances) = open_stores()?;
    let service = PayrollService::new(&employees, &shifts, &advances, config);

    let draft = service
        .draft(today)
        .map_err(|e| msg_error_anyhow!(Message::StoreFailed(e.to_string())))?;
    if draft.is_empty() {
        msg_info!(Message::NoEmployees);
        return Ok(());
    }

    msg_print!(Message::DraftHeader(today.format("%d %b %Y").to_string()), true);
    View::draft(&draft);
    View::adjustments(&draft);
    msg_print!(Message::DraftTotal(format_amount(total_net_pay(&draft))));

    let missing = draft.iter().filter(|e| e.status == EntryStatus::MissingDetails).count();
    if missing > 0 {
        msg_warning!(Message::DraftMissingDetails(missing));
    }

    if !args.finalize {
        return Ok(());
    }

    let recoverable: usize = draft.iter().map(|e| e.advance_ids.len()).sum();
    if recoverable == 0 {
        msg_info!(Message::NothingToRecover);
        return Ok(());
    }
    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmFinalize(recoverable).to_string())
            .default(false)
            .interact()?;
    if !confirmed {
        msg_info!(Message::FinalizeCancelled);
        return Ok(());
    }

    let settled = service.finalize(&draft)?;
    msg_success!(Message::AdvancesRecovered(settled));
    Ok(())
}
