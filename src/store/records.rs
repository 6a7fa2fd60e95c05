// Agent record and collection types
// Wire format: {"agents": [{"id", "status", "lastStatusChange", ...}, ...]}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One agent's status and metadata.
///
/// Only `id`, `status`, and `lastStatusChange` are interpreted by the store;
/// every other field on a record is opaque pass-through data that must
/// survive load/update/persist cycles verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentRecord {
    /// Opaque unique identifier, immutable after creation.
    pub id: String,
    /// Free-form status value ("Available", "Busy", "Offline", ...).
    /// The store does not constrain the domain; validating values is the
    /// caller's responsibility.
    pub status: String,
    /// Instant of the most recent status mutation. Absent until the first
    /// update; set only by [`AgentRecordStore::update_status`].
    ///
    /// [`AgentRecordStore::update_status`]: super::AgentRecordStore::update_status
    #[serde(
        rename = "lastStatusChange",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_status_change: Option<DateTime<Utc>>,
    /// Unknown/extra fields, preserved without loss.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The full on-disk collection of agent records.
///
/// Record order is preserved across persist. `id` values are unique within
/// one collection; the store does not repair corrupted data that violates
/// this, lookups simply take the first match in stored order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgentCollection {
    /// Ordered sequence of agent records.
    pub agents: Vec<AgentRecord>,
}

impl AgentCollection {
    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
