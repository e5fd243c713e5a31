use serde::{Deserialize, Serialize};

/// Registered user profile
///
/// The name doubles as the user's identifier: lookups lowercase both
/// sides, while the original casing is kept for display. Interests are
/// stored exactly as submitted, duplicates included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u8,
    pub interests: Vec<String>,
}

impl Profile {
    /// Lowercased form of the name, the effective lookup key
    pub fn canonical_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A candidate profile together with the interests it shares with the
/// requesting user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedProfile {
    pub name: String,
    pub age: u8,
    pub interests: Vec<String>,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
}

impl MatchedProfile {
    pub fn new(candidate: &Profile, shared_interests: Vec<String>) -> Self {
        Self {
            name: candidate.name.clone(),
            age: candidate.age,
            interests: candidate.interests.clone(),
            shared_interests,
        }
    }
}

/// Matching policy
///
/// A candidate qualifies as a match when it shares at least
/// `min_shared_interests` interests with the requesting user.
#[derive(Debug, Clone, Copy)]
pub struct MatchPolicy {
    pub min_shared_interests: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            min_shared_interests: 2,
        }
    }
}
