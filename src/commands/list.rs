use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::schedule::DayBuckets;
use crate::libs::store::{today, TaskStore};
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value = "all", help = "Completion-state filter for today's tasks")]
    filter: TaskFilter,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let store = TaskStore::open(&config).await?;

    let today = today();
    let buckets = DayBuckets::split(store.tasks(), today);
    msg_print!(Message::TasksHeader(today.to_string()), true);
    View::buckets(&buckets, args.filter)?;

    Ok(())
}
