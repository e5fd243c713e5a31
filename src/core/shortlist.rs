use std::collections::HashMap;

use crate::core::{error::CoreError, registry::UserRegistry};

/// Per-user shortlists, keyed by the owner's lowercased name
///
/// Each shortlist is an ordered sequence of lowercased target names with
/// set semantics: inserts are suppressed when the target is already
/// present. An owner's entry is created lazily on first add and survives
/// (possibly empty) after removals.
#[derive(Debug, Default)]
pub struct ShortlistStore {
    entries: HashMap<String, Vec<String>>,
}

impl ShortlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortlist `match_name` for `username`
    ///
    /// Both names must resolve in the registry; both are lowercased
    /// before storage. Adding an already-present match is a no-op.
    /// Returns the owner's full shortlist after the operation.
    pub fn add(
        &mut self,
        registry: &UserRegistry,
        username: &str,
        match_name: &str,
    ) -> Result<Vec<String>, CoreError> {
        if username.is_empty() || match_name.is_empty() {
            return Err(CoreError::MissingShortlistFields);
        }
        if registry.find_by_name(username).is_none() {
            return Err(CoreError::UserNotFound);
        }
        if registry.find_by_name(match_name).is_none() {
            return Err(CoreError::MatchNotFound);
        }

        let target = match_name.to_lowercase();
        let shortlist = self.entries.entry(username.to_lowercase()).or_default();
        if !shortlist.contains(&target) {
            shortlist.push(target);
        }

        Ok(shortlist.clone())
    }

    /// The stored shortlist for `username`, or empty if none exists
    ///
    /// Unknown users are not an error here; they simply have nothing
    /// shortlisted.
    pub fn list(&self, username: &str) -> Vec<String> {
        self.entries
            .get(&username.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    /// Remove `match_name` from `username`'s shortlist
    ///
    /// Fails when the match is not currently shortlisted, including when
    /// the owner has no entry at all. Removes every case-insensitive
    /// occurrence and returns the remaining shortlist.
    pub fn remove(
        &mut self,
        username: &str,
        match_name: &str,
    ) -> Result<Vec<String>, CoreError> {
        let owner = username.to_lowercase();
        let target = match_name.to_lowercase();

        let missing = || CoreError::ShortlistEntryNotFound {
            username: owner.clone(),
            match_name: target.clone(),
        };

        let shortlist = self.entries.get_mut(&owner).ok_or_else(missing)?;
        if !shortlist.contains(&target) {
            return Err(missing());
        }

        shortlist.retain(|name| name.to_lowercase() != target);
        Ok(shortlist.clone())
    }
}
