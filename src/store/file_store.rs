//! File-backed agent record store
//!
//! Owns the on-disk representation of the agent collection. Every operation
//! reads the backing file fresh; no in-memory copy survives between calls,
//! the file is the sole source of truth. Persistence is crash-safe: the new
//! contents are written to a temporary file and renamed over the backing
//! file, never truncated in place.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use super::records::{AgentCollection, AgentRecord};

/// Error types for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backing store or record with the given id does not exist
    #[error("{0}")]
    NotFound(String),

    /// Backing store contents do not parse as a valid collection
    #[error("backing store is corrupted: {0}")]
    Corruption(String),

    /// Read or write of the backing store failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Empty or otherwise invalid input
    #[error("invalid input: {0}")]
    Validation(String),
}

/// File-backed store for a single agent collection.
///
/// Holds only the backing file path; collections are materialized fresh on
/// every call and discarded when the operation completes. The store itself
/// provides no mutual exclusion across callers. Callers that may issue
/// concurrent mutations must serialize all operations externally, e.g.
/// behind a `tokio::sync::RwLock` with [`update_status`] on the write side.
///
/// [`update_status`]: AgentRecordStore::update_status
#[derive(Debug, Clone)]
pub struct AgentRecordStore {
    path: PathBuf,
}

impl AgentRecordStore {
    /// Create a store over the given backing file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection from the backing file.
    ///
    /// Read-only. Fails with [`StoreError::NotFound`] if the backing file
    /// does not exist and [`StoreError::Corruption`] if its contents do not
    /// parse as a collection.
    pub fn load_all(&self) -> Result<AgentCollection, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(format!(
                    "backing store not found: {}",
                    self.path.display()
                )));
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_str(&contents)
            .map_err(|e| StoreError::Corruption(format!("{}: {}", self.path.display(), e)))
    }

    /// Find one record by id.
    ///
    /// Scans the collection in stored order and returns the first record
    /// whose id matches. Duplicate ids violate the collection invariant; if
    /// corrupted data contains one anyway, the first match in stored order
    /// wins.
    pub fn find_by_id(&self, id: &str) -> Result<AgentRecord, StoreError> {
        if id.trim().is_empty() {
            return Err(StoreError::Validation("agent id cannot be empty".to_string()));
        }

        let collection = self.load_all()?;
        collection
            .agents
            .into_iter()
            .find(|agent| agent.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("no record with id {}", id)))
    }

    /// Change one record's status and persist the whole collection.
    ///
    /// Loads the collection, sets `status` on the matching record, stamps
    /// `lastStatusChange` with the current instant, and rewrites the backing
    /// file in full. Returns the updated record. If the id does not resolve,
    /// no write of any kind occurs.
    pub fn update_status(&self, id: &str, new_status: &str) -> Result<AgentRecord, StoreError> {
        if id.trim().is_empty() {
            return Err(StoreError::Validation("agent id cannot be empty".to_string()));
        }
        if new_status.trim().is_empty() {
            return Err(StoreError::Validation("status cannot be empty".to_string()));
        }

        let mut collection = self.load_all()?;
        let record = collection
            .agents
            .iter_mut()
            .find(|agent| agent.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("no record with id {}", id)))?;

        record.status = new_status.to_string();
        record.last_status_change = Some(Utc::now());
        let updated = record.clone();

        self.persist(&collection)?;
        Ok(updated)
    }

    /// Write the full collection to the backing file atomically (write tmp +
    /// rename).
    ///
    /// Uses a unique temp filename (PID + counter) to avoid corruption when
    /// concurrent saves race on the same `.tmp` file: a shorter write can
    /// leave trailing bytes from a longer previous write. A failure at any
    /// point leaves the prior backing file contents intact.
    pub fn persist(&self, collection: &AgentCollection) -> Result<(), StoreError> {
        use std::sync::atomic::{AtomicU32, Ordering};
        static COUNTER: AtomicU32 = AtomicU32::new(0);

        let json = serde_json::to_string_pretty(collection)
            .map_err(|e| StoreError::Corruption(format!("could not serialize collection: {}", e)))?;

        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp_name = format!(
            "{}.{}.{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy(),
            std::process::id(),
            seq,
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        std::fs::write(&tmp_path, json)?;
        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(StoreError::Io(e));
        }
        Ok(())
    }
}
