//! Per-second request budget for the `/api/*` routes.
//!
//! The window start and the number of requests admitted in it share one
//! `AtomicU64` (high 32 bits: epoch second, low 32 bits: count), so rolling
//! over to a new second and counting happen in a single compare-and-swap.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{Extension, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

const COUNT_BITS: u32 = 32;
const COUNT_MASK: u64 = (1 << COUNT_BITS) - 1;

fn pack(second: u64, count: u64) -> u64 {
    (second << COUNT_BITS) | (count & COUNT_MASK)
}

fn unpack(state: u64) -> (u64, u64) {
    (state >> COUNT_BITS, state & COUNT_MASK)
}

/// Fixed-window limiter shared by every clone of the router.
#[derive(Clone)]
pub struct RateLimiter {
    max_per_sec: u64,
    state: Arc<AtomicU64>,
}

impl RateLimiter {
    /// A limit of 0 rejects every request.
    pub fn new(max_per_sec: u64) -> Self {
        Self {
            max_per_sec: max_per_sec.min(COUNT_MASK),
            state: Arc::new(AtomicU64::new(0)),
        }
    }

    fn try_acquire(&self) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        self.try_acquire_at(now)
    }

    /// Admit one request in the window of epoch second `now`.
    ///
    /// A request stamped earlier than the current window is counted against
    /// the current window.
    fn try_acquire_at(&self, now: u64) -> bool {
        if self.max_per_sec == 0 {
            return false;
        }
        let second = now & COUNT_MASK;

        self.state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |state| {
                let (window, count) = unpack(state);
                if second > window {
                    Some(pack(second, 1))
                } else if count < self.max_per_sec {
                    Some(pack(window, count + 1))
                } else {
                    None
                }
            })
            .is_ok()
    }
}

/// Reject with 429 once the current second's budget is spent.
pub async fn rate_limit_middleware(
    Extension(limiter): Extension<RateLimiter>,
    req: Request,
    next: Next,
) -> Response {
    if limiter.try_acquire() {
        return next.run(req).await;
    }
    tracing::warn!(path = %req.uri().path(), "Rate limit exceeded");
    ApiError::TooManyRequests.into_response()
}
