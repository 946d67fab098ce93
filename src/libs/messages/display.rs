//! Display implementation for tempo application messages.
//!
//! All user-facing text lives here, keeping message wording in one place and
//! the rest of the code working with typed `Message` values.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(text) => format!("Task '{}' created", text),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskCompleted(text) => format!("Task '{}' completed", text),
            Message::TaskReopened(text) => format!("Task '{}' reopened", text),
            Message::TaskRenamed(text) => format!("Task renamed to '{}'", text),
            Message::TaskMovedToToday(text) => format!("Task '{}' moved to today", text),
            Message::TaskTimeUpdated(text) => format!("Time updated for task '{}'", text),
            Message::TaskNotFound(id) => format!("Task {} not found", id),
            Message::TaskTextEmpty => "Task text is empty, nothing to do".to_string(),
            Message::TasksHeader(date) => format!("📋 Tasks for {}", date),
            Message::CarryoverHeader(count) => format!("Unfinished from before ({})", count),
            Message::ScheduledHeader(count) => format!("Scheduled ({})", count),
            Message::NoTasksYet => "No tasks yet. Add your first task to get started".to_string(),
            Message::NoCompletedTasks => "No completed tasks. Complete some tasks to see them here".to_string(),
            Message::AllCaughtUp => "All caught up! No active tasks remaining".to_string(),

            // === STATS MESSAGES ===
            Message::StatsHeader(date) => format!("📊 Analytics for {}", date),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigModuleRemote => "Remote store configuration".to_string(),
            Message::PromptRemoteApiUrl => "Remote store API URL".to_string(),
            Message::PromptRemoteApiKey => "Remote store API key".to_string(),
            Message::PromptRemotePollInterval => "Snapshot poll interval in seconds".to_string(),
            Message::PromptConfigureRemote => "Configure a remote task store?".to_string(),
            Message::PromptTaskText => "Task text".to_string(),

            // === STORE MESSAGES ===
            Message::RemoteConnected(url) => format!("Connected to remote store at {}", url),
            Message::RemoteConfigMissing => "No remote store configured, using local storage".to_string(),
            Message::RemoteInitFailed(e) => format!("Remote store init failed, using local storage: {}", e),
            Message::RemoteWriteFailed(e) => format!("Remote write failed: {}", e),
            Message::RemoteFetchFailed(e) => format!("Remote snapshot fetch failed: {}", e),
            Message::RemoteFeedClosed => "Remote snapshot feed closed".to_string(),
            Message::WatchRequiresRemote => "Watch requires a configured remote store".to_string(),
            Message::WatchStarted => "Watching remote store for updates (Ctrl+C to stop)".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to: {}", path),
            Message::ExportNothingToExport => "No tasks to export".to_string(),

            // === ERROR MESSAGES ===
            Message::StorageReadFailed(e) => format!("Failed to read task storage: {}", e),
            Message::StorageWriteFailed(e) => format!("Failed to write task storage: {}", e),
        };
        write!(f, "{}", text)
    }
}
