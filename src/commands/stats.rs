use crate::libs::analytics::Summary;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::schedule::DayBuckets;
use crate::libs::store::{today, TaskStore};
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let store = TaskStore::open(&config).await?;

    let today = today();
    let buckets = DayBuckets::split(store.tasks(), today);
    let summary = Summary::compute(&buckets.todays);

    msg_print!(Message::StatsHeader(today.to_string()), true);
    View::summary(&summary)?;

    Ok(())
}
