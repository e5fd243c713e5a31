use actix_web::{web, HttpResponse, Responder};

use crate::models::HealthResponse;
use crate::routes::{error_response, AppState};

/// Configure match query routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/{username}", web::get().to(find_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches for a user
///
/// GET /matches/{username}
///
/// Returns every other registered profile sharing at least the
/// configured minimum number of interests with the user, each annotated
/// with the shared interests. The body is a bare array.
async fn find_matches(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let username = path.into_inner();
    let store = state.store_read();

    match state.matcher.find_matches(&store.registry, &username) {
        Ok(result) => {
            tracing::info!(
                "Returning {} matches for '{}' (from {} candidates)",
                result.matches.len(),
                username,
                result.total_candidates
            );
            HttpResponse::Ok().json(result.matches)
        }
        Err(e) => {
            tracing::info!("Match query for unknown user '{}'", username);
            error_response(&e)
        }
    }
}
