use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TodayArgs {
    #[arg(required = true, help = "Task id")]
    id: String,
}

pub async fn cmd(args: TodayArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = TaskStore::open(&config).await?;

    match store.reschedule(&args.id).await? {
        Some(task) => msg_success!(Message::TaskMovedToToday(task.text)),
        None => msg_warning!(Message::TaskNotFound(args.id)),
    }

    Ok(())
}
