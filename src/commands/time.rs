use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::{ArgGroup, Args};

/// Adjusts planned or actual time for one task.
///
/// Raw values are passed through as-is; the store clamps them to the
/// planned-time floor or to zero instead of rejecting bad input.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("value").required(true).multiple(true).args(["plan", "actual", "add"])))]
pub struct TimeArgs {
    #[arg(required = true, help = "Task id")]
    id: String,
    #[arg(long, help = "Set planned time in minutes")]
    plan: Option<String>,
    #[arg(long, help = "Set actual time in minutes")]
    actual: Option<String>,
    #[arg(long, help = "Add a work session to the actual time, in minutes")]
    add: Option<String>,
}

pub async fn cmd(args: TimeArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = TaskStore::open(&config).await?;

    let text = match store.find(&args.id) {
        Some(task) => task.text.clone(),
        None => {
            msg_warning!(Message::TaskNotFound(args.id));
            return Ok(());
        }
    };

    if let Some(raw) = args.plan.as_deref() {
        store.set_planned_time(&args.id, raw).await?;
    }
    if let Some(raw) = args.actual.as_deref() {
        store.set_actual_time(&args.id, raw).await?;
    }
    if let Some(raw) = args.add.as_deref() {
        store.add_actual_time(&args.id, raw).await?;
    }
    msg_success!(Message::TaskTimeUpdated(text));

    Ok(())
}
