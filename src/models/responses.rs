use serde::{Deserialize, Serialize};
use crate::models::domain::Profile;

/// Response for POST /users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    pub message: String,
    pub user: Profile,
}

/// Response for shortlist add/remove
///
/// `shortlists` is the owner's full shortlist after the mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortlistResponse {
    pub message: String,
    pub shortlists: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
