//! Live view over the remote snapshot feed.
//!
//! Blocks on the subscription and re-renders the task list and analytics on
//! every delivery. The feed is never cancelled from this side; the loop ends
//! only when the channel closes or the user interrupts the process.

use crate::libs::analytics::Summary;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::schedule::DayBuckets;
use crate::libs::store::{today, TaskStore};
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut store = TaskStore::open(&config).await?;

    if !store.is_remote() {
        msg_warning!(Message::WatchRequiresRemote);
        return Ok(());
    }

    msg_info!(Message::WatchStarted);
    render(&store)?;
    while store.next_update().await {
        render(&store)?;
    }
    msg_info!(Message::RemoteFeedClosed);

    Ok(())
}

fn render(store: &TaskStore) -> Result<()> {
    let today = today();
    let buckets = DayBuckets::split(store.tasks(), today);

    msg_print!(Message::TasksHeader(today.to_string()), true);
    View::buckets(&buckets, TaskFilter::All)?;
    View::summary(&Summary::compute(&buckets.todays))?;

    Ok(())
}
