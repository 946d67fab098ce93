use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    #[arg(required = true, help = "Task id")]
    id: String,
}

pub async fn cmd(args: DoneArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = TaskStore::open(&config).await?;

    let text = store.find(&args.id).map(|task| task.text.clone()).unwrap_or_else(|| args.id.clone());
    match store.toggle_complete(&args.id).await? {
        Some(true) => msg_success!(Message::TaskCompleted(text)),
        Some(false) => msg_success!(Message::TaskReopened(text)),
        None => msg_warning!(Message::TaskNotFound(args.id)),
    }

    Ok(())
}
