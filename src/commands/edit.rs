use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(required = true, help = "Task id")]
    id: String,
    #[arg(help = "New task text (prompts when omitted)")]
    text: Option<String>,
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = TaskStore::open(&config).await?;

    let current = match store.find(&args.id) {
        Some(task) => task.text.clone(),
        None => {
            msg_warning!(Message::TaskNotFound(args.id));
            return Ok(());
        }
    };

    let new_text = match args.text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskText.to_string())
            .default(current)
            .interact_text()?,
    };

    match store.rename(&args.id, &new_text).await? {
        Some(_) => msg_success!(Message::TaskRenamed(new_text.trim().to_string())),
        None => msg_info!(Message::TaskTextEmpty),
    }

    Ok(())
}
