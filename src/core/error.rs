use thiserror::Error;

/// Errors surfaced by registry, match, and shortlist operations
///
/// Only two kinds exist: invalid input (HTTP 400) and a missing
/// user/match/shortlist entry (HTTP 404). The display strings are the
/// exact messages returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Name, age, and interests (array) are required")]
    InvalidRegistration,

    #[error("Username and matchName are required")]
    MissingShortlistFields,

    #[error("User not found")]
    UserNotFound,

    #[error("Match not found")]
    MatchNotFound,

    #[error("Match '{match_name}' not found in shortlist for user '{username}'")]
    ShortlistEntryNotFound {
        username: String,
        match_name: String,
    },
}

impl CoreError {
    /// HTTP status the error maps to at the service boundary
    pub fn status_code(&self) -> u16 {
        match self {
            CoreError::InvalidRegistration | CoreError::MissingShortlistFields => 400,
            CoreError::UserNotFound
            | CoreError::MatchNotFound
            | CoreError::ShortlistEntryNotFound { .. } => 404,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.status_code() == 400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CoreError::InvalidRegistration.status_code(), 400);
        assert_eq!(CoreError::MissingShortlistFields.status_code(), 400);
        assert_eq!(CoreError::UserNotFound.status_code(), 404);
        assert_eq!(CoreError::MatchNotFound.status_code(), 404);
    }

    #[test]
    fn test_shortlist_entry_message_echoes_names() {
        let err = CoreError::ShortlistEntryNotFound {
            username: "alice".to_string(),
            match_name: "bob".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Match 'bob' not found in shortlist for user 'alice'"
        );
        assert!(!err.is_validation());
    }
}
