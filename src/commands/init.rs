use crate::{
    db::db::Db,
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the configuration file and the database
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigFileNotFound);
        }
        if Db::delete()? {
            msg_success!(Message::DatabaseDeleted);
        }
        return Ok(());
    }

    Config::init()?.save()?;
    // Creates the schema so later commands start from a migrated database.
    Db::new()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
