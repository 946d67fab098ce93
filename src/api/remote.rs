//! HTTP client for the remote task collection.
//!
//! The collection lives at `{api_url}/tasks`. Documents are created with
//! `POST`, updated field-by-field with `PATCH` and removed with `DELETE`.
//! Reads go through a snapshot subscription: a listener task polls the
//! collection and delivers the full task sequence, ordered by creation time
//! descending, into a channel whenever it changes. The subscription is
//! established once and never cancelled; it ends only when the session does.

use crate::libs::config::RemoteConfig;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_debug;
use anyhow::Result;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const COLLECTION: &str = "tasks";

/// Receiving end of the snapshot subscription.
pub type SnapshotFeed = UnboundedReceiver<Vec<Task>>;

pub struct RemoteStore {
    client: reqwest::Client,
    collection_url: String,
    api_key: String,
}

impl RemoteStore {
    /// Connects to the remote collection and starts the snapshot listener.
    ///
    /// The initial snapshot is fetched eagerly, so a connection failure
    /// surfaces here instead of silently producing an empty feed. The first
    /// feed delivery is the initial snapshot.
    pub async fn connect(config: &RemoteConfig) -> Result<(Self, SnapshotFeed)> {
        let store = RemoteStore {
            client: reqwest::Client::new(),
            collection_url: format!("{}/{}", config.api_url.trim_end_matches('/'), COLLECTION),
            api_key: config.api_key.clone(),
        };

        let initial = store.fetch_snapshot().await?;
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(initial.clone());

        store.spawn_listener(tx, initial, Duration::from_secs(config.poll_interval_secs.max(1)));
        Ok((store, rx))
    }

    /// Adds a task document to the collection.
    pub async fn add(&self, task: &Task) -> Result<()> {
        self.client
            .post(&self.collection_url)
            .bearer_auth(&self.api_key)
            .json(task)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Applies a field-level update to one document.
    pub async fn update(&self, id: &str, fields: Value) -> Result<()> {
        self.client
            .patch(format!("{}/{}", self.collection_url, id))
            .bearer_auth(&self.api_key)
            .json(&fields)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Deletes one document from the collection.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete(format!("{}/{}", self.collection_url, id))
            .bearer_auth(&self.api_key)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Fetches the full collection, ordered by creation time descending.
    async fn fetch_snapshot(&self) -> Result<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .client
            .get(&self.collection_url)
            .bearer_auth(&self.api_key)
            .query(&[("order", "created_at.desc")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // The ordering contract is enforced locally as well, in case the
        // store ignores the order parameter.
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    fn spawn_listener(&self, tx: UnboundedSender<Vec<Task>>, mut last: Vec<Task>, interval: Duration) {
        let listener = RemoteStore {
            client: self.client.clone(),
            collection_url: self.collection_url.clone(),
            api_key: self.api_key.clone(),
        };
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                match listener.fetch_snapshot().await {
                    Ok(snapshot) => {
                        if snapshot != last {
                            last = snapshot.clone();
                            if tx.send(snapshot).is_err() {
                                break; // session over, receiver dropped
                            }
                        }
                    }
                    Err(e) => {
                        msg_debug!(Message::RemoteFetchFailed(e.to_string()));
                    }
                }
            }
        });
    }
}
