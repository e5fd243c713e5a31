// Route exports
pub mod matches;
pub mod shortlist;
pub mod users;

use actix_web::{web, HttpResponse};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::{CoreError, Matcher, ShortlistStore, UserRegistry};
use crate::models::ErrorResponse;

/// Registry and shortlists behind a single lock, so no handler ever
/// observes a partial update across the two collections.
#[derive(Debug, Default)]
pub struct MatchmakerState {
    pub registry: UserRegistry,
    pub shortlists: ShortlistStore,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<MatchmakerState>>,
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            store: Arc::new(RwLock::new(MatchmakerState::default())),
            matcher,
        }
    }

    /// Read access to the shared state
    ///
    /// The guarded data is plain collections, so a poisoned lock from a
    /// panicked handler is recovered rather than propagated.
    pub fn store_read(&self) -> RwLockReadGuard<'_, MatchmakerState> {
        self.store.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Write access to the shared state
    pub fn store_write(&self) -> RwLockWriteGuard<'_, MatchmakerState> {
        self.store.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Matcher::with_default_policy())
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(users::configure)
        .configure(matches::configure)
        .configure(shortlist::configure);
}

/// Map a core error onto the shared JSON error body
pub(crate) fn error_response(err: &CoreError) -> HttpResponse {
    let status_code = err.status_code();
    let label = if err.is_validation() {
        "Validation failed"
    } else {
        "Not found"
    };

    let body = ErrorResponse {
        error: label.to_string(),
        message: err.to_string(),
        status_code,
    };

    if err.is_validation() {
        HttpResponse::BadRequest().json(body)
    } else {
        HttpResponse::NotFound().json(body)
    }
}
