use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true, help = "Task text")]
    text: String,
    #[arg(long, help = "Planned time in minutes (defaults to 15)")]
    plan: Option<String>,
    #[arg(long, help = "Task date as YYYY-MM-DD (defaults to today)")]
    date: Option<NaiveDate>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = TaskStore::open(&config).await?;

    match store.add(&args.text, args.plan.as_deref(), args.date).await? {
        Some(task) => msg_success!(Message::TaskCreated(task.text)),
        None => msg_info!(Message::TaskTextEmpty),
    }

    Ok(())
}
