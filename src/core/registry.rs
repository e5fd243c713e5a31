use crate::core::error::CoreError;
use crate::models::Profile;

/// In-memory store of registered profiles
///
/// Profiles are kept in insertion order. Names are not unique; lookups
/// return the first case-insensitive match, so a duplicate name shadows
/// later registrations.
#[derive(Debug, Default)]
pub struct UserRegistry {
    profiles: Vec<Profile>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new profile
    ///
    /// Rejects an empty name, a zero age, or an empty interests list.
    /// Interests are stored as submitted, duplicates included.
    pub fn register(
        &mut self,
        name: String,
        age: u8,
        interests: Vec<String>,
    ) -> Result<Profile, CoreError> {
        if name.is_empty() || age == 0 || interests.is_empty() {
            return Err(CoreError::InvalidRegistration);
        }

        let profile = Profile {
            name,
            age,
            interests,
        };
        self.profiles.push(profile.clone());

        Ok(profile)
    }

    /// Find a profile by name, case-insensitively
    ///
    /// Returns the first match in insertion order.
    pub fn find_by_name(&self, name: &str) -> Option<&Profile> {
        let needle = name.to_lowercase();
        self.profiles.iter().find(|p| p.canonical_name() == needle)
    }

    /// All registered profiles in insertion order
    pub fn list_all(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
