use super::{open_stores, parse_date};
use crate::{
    db::repository::{EmployeeStore, ShiftStore},
    libs::{attendance::generate_history, messages::Message, view::View},
    msg_bail_anyhow, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    employee: String,
    /// Last day of the history, `today` or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let today = parse_date(&args.date)?;
    let (employees, shifts, _) = open_stores()?;

    let Some(employee) = employees.employee(&args.employee)? else {
        msg_bail_anyhow!(Message::EmployeeNotFound(args.employee));
    };
    let shift = match &employee.shift_id {
        Some(id) => {
            let shift = shifts.shift(id)?;
            if shift.is_none() {
                msg_warning!(Message::ShiftNotFound(employee.id.clone(), id.clone()));
            }
            shift
        }
        None => None,
    };

    let history = generate_history(&employee, shift.as_ref(), today);

    msg_print!(Message::AttendanceHeader(employee.display_name().to_string(), today.to_string()), true);
    View::attendance(&history);
    Ok(())
}
