//! The task store: one in-memory snapshot plus a persistence backend.
//!
//! Mutations behave differently per backend. With local storage every
//! mutation updates the snapshot and synchronously rewrites the blob. With
//! the remote store mutations are intent calls: the write is issued
//! asynchronously and the snapshot changes only when the store's snapshot
//! feed delivers the next full sequence, so a mutation's visible effect is
//! eventually consistent. A failed remote write is logged and dropped; it
//! never retries, rolls back, or interrupts the user.

use crate::api::remote::{RemoteStore, SnapshotFeed};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::storage::TaskFile;
use crate::libs::task::{self, Task};
use crate::{msg_debug, msg_error, msg_error_anyhow, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;

enum Backend {
    Local(TaskFile),
    Remote(RemoteStore),
}

pub struct TaskStore {
    tasks: Vec<Task>,
    backend: Backend,
    feed: Option<SnapshotFeed>,
}

impl TaskStore {
    /// Opens the store according to the configuration.
    ///
    /// A configured remote section is tried first; absent or placeholder
    /// credentials and connection failures fall back to local storage for
    /// the rest of the session.
    pub async fn open(config: &Config) -> Result<Self> {
        match &config.remote {
            Some(remote_config) if remote_config.is_configured() => match RemoteStore::connect(remote_config).await {
                Ok((remote, mut feed)) => {
                    msg_debug!(Message::RemoteConnected(remote_config.api_url.clone()));
                    // The first delivery is the initial snapshot.
                    let tasks = feed.recv().await.unwrap_or_default();
                    Ok(TaskStore {
                        tasks,
                        backend: Backend::Remote(remote),
                        feed: Some(feed),
                    })
                }
                Err(e) => {
                    msg_warning!(Message::RemoteInitFailed(e.to_string()));
                    Self::open_local()
                }
            },
            _ => {
                msg_debug!(Message::RemoteConfigMissing);
                Self::open_local()
            }
        }
    }

    fn open_local() -> Result<Self> {
        let file = TaskFile::new()?;
        let tasks = file.load().map_err(|e| msg_error_anyhow!(Message::StorageReadFailed(e.to_string())))?;
        Ok(TaskStore {
            tasks,
            backend: Backend::Local(file),
            feed: None,
        })
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.backend, Backend::Remote(_))
    }

    /// The current snapshot. Authoritative for local storage; for the remote
    /// store it reflects the last feed delivery.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Drains any pending feed deliveries into the snapshot.
    pub fn refresh(&mut self) {
        if let Some(feed) = self.feed.as_mut() {
            while let Ok(snapshot) = feed.try_recv() {
                self.tasks = snapshot;
            }
        }
    }

    /// Waits for the next feed delivery and applies it. Returns `false`
    /// when the feed has closed.
    pub async fn next_update(&mut self) -> bool {
        match self.feed.as_mut() {
            Some(feed) => match feed.recv().await {
                Some(snapshot) => {
                    self.tasks = snapshot;
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Adds a task. Returns `None` without touching anything when the text
    /// trims to empty. The planned time falls back to the default when the
    /// raw value is unparseable or non-positive; the date defaults to today.
    pub async fn add(&mut self, text: &str, planned_raw: Option<&str>, date: Option<NaiveDate>) -> Result<Option<Task>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let planned_time = task::parse_planned_or_default(planned_raw.unwrap_or(""));
        let date = date.unwrap_or_else(today);
        let mut new_task = Task::new(text, planned_time, Some(date));

        // Millisecond ids can collide on rapid adds.
        let base_id = new_task.id.clone();
        let mut suffix = 1;
        while self.tasks.iter().any(|t| t.id == new_task.id) {
            new_task.id = format!("{}-{}", base_id, suffix);
            suffix += 1;
        }

        match &self.backend {
            Backend::Local(_) => {
                self.tasks.insert(0, new_task.clone());
                self.persist()?;
            }
            Backend::Remote(remote) => {
                if let Err(e) = remote.add(&new_task).await {
                    msg_error!(Message::RemoteWriteFailed(e.to_string()));
                }
            }
        }
        Ok(Some(new_task))
    }

    /// Removes the task with the given id. Absent ids are a no-op.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        match &self.backend {
            Backend::Local(_) => {
                let before = self.tasks.len();
                self.tasks.retain(|t| t.id != id);
                if self.tasks.len() != before {
                    self.persist()?;
                }
            }
            Backend::Remote(remote) => {
                if let Err(e) = remote.delete(id).await {
                    msg_error!(Message::RemoteWriteFailed(e.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Flips the completion state. Returns the new state, or `None` when the
    /// id is unknown.
    pub async fn toggle_complete(&mut self, id: &str) -> Result<Option<bool>> {
        let completed = match self.find(id) {
            Some(task) => !task.completed,
            None => return Ok(None),
        };
        self.apply(id, json!({ "completed": completed }), |task| task.completed = completed).await?;
        Ok(Some(completed))
    }

    /// Sets the actual time from a raw value, clamped to `>= 0`.
    pub async fn set_actual_time(&mut self, id: &str, raw: &str) -> Result<Option<f64>> {
        if self.find(id).is_none() {
            return Ok(None);
        }
        let actual_time = task::parse_actual(raw);
        self.apply(id, json!({ "actual_time": actual_time }), |task| task.actual_time = actual_time).await?;
        Ok(Some(actual_time))
    }

    /// Adds a work session to the actual time. Unparseable or non-positive
    /// input is a no-op.
    pub async fn add_actual_time(&mut self, id: &str, raw: &str) -> Result<Option<f64>> {
        let minutes = match raw.trim().parse::<f64>() {
            Ok(m) if m > 0.0 => m,
            _ => return Ok(None),
        };
        let actual_time = match self.find(id) {
            Some(task) => task.actual_time + minutes,
            None => return Ok(None),
        };
        self.apply(id, json!({ "actual_time": actual_time }), |task| task.actual_time = actual_time).await?;
        Ok(Some(actual_time))
    }

    /// Sets the planned time from a raw value, clamped to the floor.
    pub async fn set_planned_time(&mut self, id: &str, raw: &str) -> Result<Option<f64>> {
        if self.find(id).is_none() {
            return Ok(None);
        }
        let planned_time = task::parse_planned(raw);
        self.apply(id, json!({ "planned_time": planned_time }), |task| task.planned_time = planned_time).await?;
        Ok(Some(planned_time))
    }

    /// Moves the task to today's date.
    pub async fn reschedule(&mut self, id: &str) -> Result<Option<Task>> {
        if self.find(id).is_none() {
            return Ok(None);
        }
        let date = today();
        self.apply(id, json!({ "date": date }), |task| task.date = Some(date)).await?;
        Ok(self.find(id).cloned())
    }

    /// Replaces the task text. Empty text is a no-op that returns `None`.
    pub async fn rename(&mut self, id: &str, new_text: &str) -> Result<Option<Task>> {
        let new_text = new_text.trim();
        if new_text.is_empty() || self.find(id).is_none() {
            return Ok(None);
        }
        let text = new_text.to_string();
        self.apply(id, json!({ "text": text }), |task| task.text = text.clone()).await?;
        Ok(self.find(id).cloned())
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Routes one field-level mutation to the backend: local storage mutates
    /// the snapshot and persists, the remote store receives an intent write
    /// and leaves the snapshot to the feed.
    async fn apply<F>(&mut self, id: &str, fields: serde_json::Value, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Task),
    {
        match &self.backend {
            Backend::Local(_) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    mutate(task);
                }
                self.persist()?;
            }
            Backend::Remote(remote) => {
                if let Err(e) = remote.update(id, fields).await {
                    msg_error!(Message::RemoteWriteFailed(e.to_string()));
                }
            }
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        if let Backend::Local(file) = &self.backend {
            file.save(&self.tasks)
                .map_err(|e| msg_error_anyhow!(Message::StorageWriteFailed(e.to_string())))?;
        }
        Ok(())
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
