//! # Tempo - Personal Task & Time Tracker
//!
//! A command-line tool for planning daily tasks, logging the time they
//! actually take, and reviewing simple productivity analytics.
//!
//! ## Features
//!
//! - **Task Management**: Add tasks with a planned-time estimate, complete,
//!   rename, reschedule and delete them
//! - **Time Logging**: Set or accumulate actual time per task, clamped to
//!   sane bounds instead of rejecting input
//! - **Day Planning**: Tasks are bucketed into today, unfinished carryover
//!   and scheduled-for-later views
//! - **Analytics**: Completion rate, planned vs. actual time, a
//!   completed-only efficiency ratio and a progress tier
//! - **Storage**: A local JSON snapshot by default, or an external document
//!   store with a real-time snapshot feed and local fallback
//! - **Data Export**: Dump the task sequence to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tempo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
