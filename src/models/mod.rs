// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchPolicy, MatchedProfile, Profile};
pub use requests::{RegisterUserRequest, ShortlistRequest};
pub use responses::{ErrorResponse, HealthResponse, RegisterUserResponse, ShortlistResponse};
