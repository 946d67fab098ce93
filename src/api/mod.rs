//! Client for the external task store.
//!
//! The remote side is a plain document collection reachable over HTTP:
//! writes are field-level document operations, reads arrive as full
//! collection snapshots through a subscription established once at startup.
//! The protocol is treated as opaque; nothing here knows about task
//! semantics beyond the record shape.

pub mod remote;

pub use remote::{RemoteStore, SnapshotFeed};
