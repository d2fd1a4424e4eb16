//! Application state shared across all route handlers.
//!
//! AppState is passed to handlers via axum's State extractor. Everything in
//! it is immutable after startup, so cloning only bumps reference counts.

use std::sync::Arc;
use std::time::Instant;

use vitae_chat::ResponseEngine;
use vitae_core::config::VitaeConfig;
use vitae_core::profile::ProfileRecord;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<VitaeConfig>,
    /// The loaded profile record.
    pub profile: Arc<ProfileRecord>,
    /// Chat responder over `profile`.
    pub engine: Arc<ResponseEngine>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Build the state from a loaded profile.
    pub fn new(config: VitaeConfig, profile: ProfileRecord) -> Self {
        let profile = Arc::new(profile);
        let engine = ResponseEngine::new(Arc::clone(&profile), config.chat.clone());
        Self {
            config: Arc::new(config),
            profile,
            engine: Arc::new(engine),
            start_time: Instant::now(),
        }
    }
}
