//! Conversational interface for the CV site.
//!
//! Provides the keyword-routed response engine that answers questions about
//! the profile record, and the session object that tracks a single
//! conversation on the presentation side.

pub mod engine;
pub mod error;
pub mod intent;
pub mod response;
pub mod session;
pub mod types;

pub use engine::ResponseEngine;
pub use error::ChatError;
pub use intent::{Intent, IntentRule, INTENT_RULES};
pub use session::{ChatSession, QUICK_ACTIONS};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role};
