//! Shared library modules for the tempo application.

/// Aggregate analytics over a task bucket.
pub mod analytics;

/// Configuration file management and the init wizard.
pub mod config;

/// Platform-specific application data directory resolution.
pub mod data_storage;

/// Centralized user-facing messages and logging macros.
pub mod messages;

/// Date classification of tasks into today/carryover/scheduled buckets.
pub mod schedule;

/// The local JSON snapshot file.
pub mod storage;

/// The task store: in-memory snapshot plus persistence backend.
pub mod store;

/// Task record and input normalization.
pub mod task;

/// Terminal tables for tasks and analytics.
pub mod view;
