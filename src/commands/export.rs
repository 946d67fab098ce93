use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value = "csv", help = "Export format")]
    format: ExportFormat,
    #[arg(long, help = "Output file path")]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let store = TaskStore::open(&config).await?;

    let tasks = store.tasks();
    if tasks.is_empty() {
        msg_info!(Message::ExportNothingToExport);
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("tempo_tasks.{}", args.format.extension())));

    match args.format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_path(&path)?;
            for task in tasks {
                writer.serialize(task)?;
            }
            writer.flush()?;
        }
        ExportFormat::Json => {
            fs::write(&path, serde_json::to_string_pretty(tasks)?)?;
        }
    }
    msg_success!(Message::ExportCompleted(path.display().to_string()));

    Ok(())
}
