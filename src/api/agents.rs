//! Agent collection API handlers
//!
//! Contains HTTP request handlers for listing the agent collection and
//! mutating one record's status. Read handlers take the read side of the
//! shared lock and may run concurrently; the status mutation holds the write
//! side for its whole load+mutate+persist cycle so concurrent updates are
//! serialized and no read-modify-write interleaving can lose a change.

use crate::error::AppError;
use crate::store::{AgentCollection, AgentRecord, AgentRecordStore};
use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Agent collection listing response
#[derive(Debug, Serialize)]
pub struct AgentsListResponse {
    /// Always `true`; failures are reported through [`AppError`]
    pub success: bool,
    /// The full collection as stored
    pub data: AgentCollection,
    /// Instant the collection was read
    pub timestamp: DateTime<Utc>,
}

/// Status change request
#[derive(Deserialize)]
pub struct SetStatusRequest {
    /// New status value for the agent (non-empty)
    pub status: String,
}

/// Status change response
#[derive(Debug, Serialize)]
pub struct SetStatusResponse {
    /// Always `true`; failures are reported through [`AppError`]
    pub success: bool,
    /// The updated record, `lastStatusChange` freshly stamped
    pub agent: AgentRecord,
    /// Human-readable confirmation
    pub message: String,
}

/// GET /api/agents - List the full agent collection
pub async fn list_agents(
    State(store): State<Arc<RwLock<AgentRecordStore>>>,
) -> Result<Json<AgentsListResponse>, AppError> {
    let store = store.read().await;
    let data = store.load_all()?;
    info!(count = data.len(), "Loaded agent collection");

    Ok(Json(AgentsListResponse {
        success: true,
        data,
        timestamp: Utc::now(),
    }))
}

/// PUT /api/agents/:id/status - Change one agent's status
pub async fn set_agent_status(
    State(store): State<Arc<RwLock<AgentRecordStore>>>,
    Path(id): Path<String>,
    Json(request): Json<SetStatusRequest>,
) -> Result<Json<SetStatusResponse>, AppError> {
    let store = store.write().await;
    let agent = store.update_status(&id, &request.status)?;
    info!(agent_id = %id, status = %request.status, "Agent status changed");

    Ok(Json(SetStatusResponse {
        success: true,
        message: format!("Status changed to {}", request.status),
        agent,
    }))
}
