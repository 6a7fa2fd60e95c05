//! Message and greeting API handlers
//!
//! The echo and greet operations from the wallboard demo. Both always
//! succeed: echo is pure, and greet falls back to an agent count of zero
//! when the backing store is missing or unreadable rather than failing the
//! greeting.

use crate::greeting;
use crate::store::AgentRecordStore;
use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Echo request
#[derive(Deserialize)]
pub struct EchoRequest {
    /// Message to echo back
    pub message: String,
}

/// Echo response
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    /// The message exactly as received
    pub original: String,
    /// Server acknowledgement wrapping the message
    pub reply: String,
    /// Instant the message was handled
    pub timestamp: DateTime<Utc>,
    /// Always `"success"`
    pub status: String,
}

/// Greeting request
#[derive(Deserialize)]
pub struct GreetRequest {
    /// Name to greet
    pub name: String,
}

/// Greeting response
#[derive(Debug, Serialize)]
pub struct GreetResponse {
    /// One greeting drawn at random from the fixed template set
    pub greeting: String,
    /// The name exactly as received
    pub name: String,
    /// Instant the greeting was produced
    pub time: DateTime<Utc>,
    /// Number of records currently in the backing store (0 if unreadable)
    #[serde(rename = "agentCount")]
    pub agent_count: usize,
}

/// POST /api/messages - Echo a message back to the caller
pub async fn echo(Json(request): Json<EchoRequest>) -> Json<EchoResponse> {
    info!(message = %request.message, "Echo message received");

    let reply = format!("Server received: \"{}\"", request.message);
    Json(EchoResponse {
        original: request.message,
        reply,
        timestamp: Utc::now(),
        status: "success".to_string(),
    })
}

/// POST /api/greetings - Return a randomized greeting
pub async fn greet(
    State(store): State<Arc<RwLock<AgentRecordStore>>>,
    Json(request): Json<GreetRequest>,
) -> Json<GreetResponse> {
    let store = store.read().await;
    let agent_count = match store.load_all() {
        Ok(collection) => collection.len(),
        Err(e) => {
            debug!("Agent count unavailable for greeting: {}", e);
            0
        }
    };

    let greeting = greeting::random_greeting(&request.name);
    info!(name = %request.name, agent_count, "Greeting produced");

    Json(GreetResponse {
        greeting,
        name: request.name,
        time: Utc::now(),
        agent_count,
    })
}
