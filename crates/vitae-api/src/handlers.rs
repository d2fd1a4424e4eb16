//! Route handler functions for all API endpoints.
//!
//! Each handler extracts parameters via axum extractors, reads from the
//! immutable AppState, and returns JSON responses.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use vitae_chat::{ChatRequest, ChatResponse, QUICK_ACTIONS};
use vitae_core::profile::{ProfileRecord, QuickStats, SkillHighlights};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /health - health check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// POST /api/chat - answer a chat message.
///
/// Malformed JSON or a missing `message` is a 400; the engine is not called.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = body?;
    let response = state
        .engine
        .respond(&request.message, &request.conversation_id);
    Ok(Json(response))
}

/// GET /api/chat/suggestions - quick-action prompts for the widget.
pub async fn chat_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: QUICK_ACTIONS.iter().map(|s| s.to_string()).collect(),
    })
}

/// GET /api/profile - the full profile record.
pub async fn profile(State(state): State<AppState>) -> Json<ProfileRecord> {
    Json(state.profile.as_ref().clone())
}

/// GET /api/stats - headline counts.
pub async fn stats(State(state): State<AppState>) -> Json<QuickStats> {
    Json(state.profile.quick_stats())
}

/// GET /api/skills/{skill}/highlights - entries tagged with a skill.
pub async fn skill_highlights(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Result<Json<SkillHighlights>, ApiError> {
    state
        .profile
        .skill_highlights(&skill)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown skill: '{}'", skill)))
}
