use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RmArgs {
    #[arg(required = true, help = "Task id")]
    id: String,
}

pub async fn cmd(args: RmArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = TaskStore::open(&config).await?;

    let known = store.find(&args.id).is_some();
    store.delete(&args.id).await?;
    if known {
        msg_success!(Message::TaskDeleted(args.id));
    } else {
        msg_warning!(Message::TaskNotFound(args.id));
    }

    Ok(())
}
