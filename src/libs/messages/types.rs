#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskDeleted(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskRenamed(String),
    TaskMovedToToday(String),
    TaskTimeUpdated(String),
    TaskNotFound(String),
    TaskTextEmpty,
    TasksHeader(String),
    CarryoverHeader(usize),
    ScheduledHeader(usize),
    NoTasksYet,
    NoCompletedTasks,
    AllCaughtUp,

    // === STATS MESSAGES ===
    StatsHeader(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigModuleRemote,
    PromptRemoteApiUrl,
    PromptRemoteApiKey,
    PromptRemotePollInterval,
    PromptConfigureRemote,
    PromptTaskText,

    // === STORE MESSAGES ===
    RemoteConnected(String),
    RemoteConfigMissing,
    RemoteInitFailed(String),
    RemoteWriteFailed(String),
    RemoteFetchFailed(String),
    RemoteFeedClosed,
    WatchRequiresRemote,
    WatchStarted,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportNothingToExport,

    // === ERROR MESSAGES ===
    StorageReadFailed(String),
    StorageWriteFailed(String),
}
