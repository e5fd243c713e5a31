use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::CoreError;
use crate::models::{ShortlistRequest, ShortlistResponse};
use crate::routes::{error_response, AppState, MatchmakerState};

/// Configure shortlist routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/shortlist", web::post().to(shortlist_match))
        .route("/shortlist/{username}", web::get().to(list_shortlist))
        .route(
            "/shortlist/{username}/{match_name}",
            web::delete().to(remove_shortlisted),
        );
}

/// Shortlist a match for a user
///
/// POST /shortlist
///
/// Request body:
/// ```json
/// {
///   "username": "string",
///   "matchName": "string"
/// }
/// ```
async fn shortlist_match(
    state: web::Data<AppState>,
    req: web::Json<ShortlistRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for shortlist request: username={:?}, field_errors={:?}",
            req.username,
            errors
        );
        return error_response(&CoreError::MissingShortlistFields);
    }

    let mut store = state.store_write();
    // Both collections sit behind one guard; split the borrow so the
    // shortlist insert can consult the registry.
    let MatchmakerState {
        registry,
        shortlists,
    } = &mut *store;

    match shortlists.add(registry, &req.username, &req.match_name) {
        Ok(shortlist) => {
            tracing::info!(
                "Shortlisted '{}' for '{}' ({} entries)",
                req.match_name,
                req.username,
                shortlist.len()
            );
            HttpResponse::Ok().json(ShortlistResponse {
                message: "Match shortlisted".to_string(),
                shortlists: shortlist,
            })
        }
        Err(e) => error_response(&e),
    }
}

/// List a user's shortlist
///
/// GET /shortlist/{username}
///
/// Unknown users get an empty array; stored names are lowercase.
async fn list_shortlist(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let username = path.into_inner();
    let store = state.store_read();
    HttpResponse::Ok().json(store.shortlists.list(&username))
}

/// Remove a shortlisted match
///
/// DELETE /shortlist/{username}/{match_name}
async fn remove_shortlisted(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (username, match_name) = path.into_inner();
    let mut store = state.store_write();

    match store.shortlists.remove(&username, &match_name) {
        Ok(shortlist) => {
            tracing::info!(
                "Removed '{}' from shortlist of '{}' ({} entries left)",
                match_name,
                username,
                shortlist.len()
            );
            HttpResponse::Ok().json(ShortlistResponse {
                message: "Match removed from shortlist".to_string(),
                shortlists: shortlist,
            })
        }
        Err(e) => error_response(&e),
    }
}
