use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::CoreError;
use crate::models::{RegisterUserRequest, RegisterUserResponse};
use crate::routes::{error_response, AppState};

/// Configure user registration routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::post().to(register_user))
        .route("/users", web::get().to(list_users));
}

/// Register a new user
///
/// POST /users
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "age": 30,
///   "interests": ["string"]
/// }
/// ```
async fn register_user(
    state: web::Data<AppState>,
    req: web::Json<RegisterUserRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for register request: name={:?}, field_errors={:?}",
            req.name,
            errors
        );
        return error_response(&CoreError::InvalidRegistration);
    }

    let req = req.into_inner();
    let mut store = state.store_write();

    match store.registry.register(req.name, req.age, req.interests) {
        Ok(user) => {
            tracing::info!(
                "Registered user '{}' with {} interests ({} total users)",
                user.name,
                user.interests.len(),
                store.registry.len()
            );
            HttpResponse::Created().json(RegisterUserResponse {
                message: "User created".to_string(),
                user,
            })
        }
        Err(e) => error_response(&e),
    }
}

/// List all registered users
///
/// GET /users
async fn list_users(state: web::Data<AppState>) -> impl Responder {
    let store = state.store_read();
    HttpResponse::Ok().json(store.registry.list_all())
}
