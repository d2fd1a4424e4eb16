//! Vitae API crate - axum HTTP server and route handlers.
//!
//! Serves the chat endpoint backing the site's chat widget, plus read-only
//! views of the profile record (full document, quick stats, skill
//! highlights) and a health check.

pub mod error;
pub mod handlers;
pub mod rate_limit;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
