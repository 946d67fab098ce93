pub mod add;
pub mod done;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod rm;
pub mod stats;
pub mod time;
pub mod today;
pub mod watch;

use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Add a task with a planned-time estimate")]
    Add(add::AddArgs),
    #[command(about = "Toggle task completion")]
    Done(done::DoneArgs),
    #[command(about = "Edit task text")]
    Edit(edit::EditArgs),
    #[command(about = "Set or add planned/actual time", arg_required_else_help = true)]
    Time(time::TimeArgs),
    #[command(about = "Move a carryover or scheduled task to today")]
    Today(today::TodayArgs),
    #[command(about = "Delete a task")]
    Rm(rm::RmArgs),
    #[command(about = "List today's, carryover and scheduled tasks")]
    List(list::ListArgs),
    #[command(about = "Show the analytics panel")]
    Stats,
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Watch the remote store for live updates")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        if is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args).await,
            Commands::Done(args) => done::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Time(args) => time::cmd(args).await,
            Commands::Today(args) => today::cmd(args).await,
            Commands::Rm(args) => rm::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Stats => stats::cmd().await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Watch => watch::cmd().await,
        }
    }
}
