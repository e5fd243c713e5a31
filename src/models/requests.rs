use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a new user
///
/// Missing fields deserialize to their empty defaults and are rejected
/// by validation, so every malformed body gets the same 400 shape.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub age: u8,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Request to shortlist a match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShortlistRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub username: String,
    #[validate(length(min = 1))]
    #[serde(default, alias = "match_name", rename = "matchName")]
    pub match_name: String,
}
