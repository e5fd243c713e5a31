use crate::core::{error::CoreError, registry::UserRegistry};
use crate::models::{MatchPolicy, MatchedProfile, Profile};

/// Result of a match query
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MatchedProfile>,
    pub total_candidates: usize,
}

/// Shared-interest matcher
///
/// For a given user, every other registered profile is a candidate; a
/// candidate qualifies when it shares at least the policy's minimum
/// number of interests with the user. Results keep the registry's
/// insertion order and are not ranked by overlap size.
#[derive(Debug, Clone)]
pub struct Matcher {
    policy: MatchPolicy,
}

impl Matcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: MatchPolicy::default(),
        }
    }

    /// Find matches for a user by name
    ///
    /// Fails when the name does not resolve in the registry. The user is
    /// never their own candidate; any profile whose lowercased name
    /// equals the requester's is skipped, duplicates included.
    pub fn find_matches(
        &self,
        registry: &UserRegistry,
        username: &str,
    ) -> Result<MatchResult, CoreError> {
        let user = registry
            .find_by_name(username)
            .ok_or(CoreError::UserNotFound)?;
        let own_name = user.canonical_name();

        let mut matches = Vec::new();
        let mut total_candidates = 0;

        for candidate in registry.list_all() {
            if candidate.canonical_name() == own_name {
                continue;
            }
            total_candidates += 1;

            let shared = shared_interests(user, candidate);
            if shared.len() >= self.policy.min_shared_interests {
                matches.push(MatchedProfile::new(candidate, shared));
            }
        }

        Ok(MatchResult {
            matches,
            total_candidates,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_policy()
    }
}

/// Interests of `candidate` that also appear in `user`'s list
///
/// Comparison is exact (case-sensitive). The candidate's interest order
/// is preserved, and a repeated interest on the candidate side appears
/// once per repetition.
pub fn shared_interests(user: &Profile, candidate: &Profile) -> Vec<String> {
    candidate
        .interests
        .iter()
        .filter(|interest| user.interests.contains(interest))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(profiles: &[(&str, u8, &[&str])]) -> UserRegistry {
        let mut registry = UserRegistry::new();
        for (name, age, interests) in profiles {
            registry
                .register(
                    name.to_string(),
                    *age,
                    interests.iter().map(|i| i.to_string()).collect(),
                )
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_two_shared_interests_qualify() {
        let registry = registry_with(&[
            ("Alice", 30, &["hiking", "chess", "reading"]),
            ("Bob", 28, &["chess", "reading", "cooking"]),
        ]);
        let matcher = Matcher::with_default_policy();

        let result = matcher.find_matches(&registry, "Alice").unwrap();

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].name, "Bob");
        assert_eq!(result.matches[0].shared_interests, vec!["chess", "reading"]);
    }

    #[test]
    fn test_no_overlap_is_filtered() {
        let registry = registry_with(&[("Alice", 30, &["hiking"]), ("Carol", 25, &["chess"])]);
        let matcher = Matcher::with_default_policy();

        let result = matcher.find_matches(&registry, "Alice").unwrap();

        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 1);
    }

    #[test]
    fn test_single_shared_interest_is_below_threshold() {
        let registry = registry_with(&[
            ("Alice", 30, &["hiking", "chess"]),
            ("Bob", 28, &["chess", "cooking"]),
        ]);
        let matcher = Matcher::with_default_policy();

        let result = matcher.find_matches(&registry, "Alice").unwrap();

        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_requester_never_matches_self() {
        let registry = registry_with(&[
            ("Alice", 30, &["hiking", "chess", "reading"]),
            ("Bob", 28, &["hiking", "chess"]),
        ]);
        let matcher = Matcher::with_default_policy();

        let result = matcher.find_matches(&registry, "ALICE").unwrap();

        assert!(result.matches.iter().all(|m| m.name != "Alice"));
    }

    #[test]
    fn test_unknown_user_is_not_found() {
        let registry = registry_with(&[("Alice", 30, &["hiking", "chess"])]);
        let matcher = Matcher::with_default_policy();

        let result = matcher.find_matches(&registry, "Nobody");

        assert!(matches!(result, Err(CoreError::UserNotFound)));
    }

    #[test]
    fn test_interest_comparison_is_case_sensitive() {
        let registry = registry_with(&[
            ("Alice", 30, &["Hiking", "Chess"]),
            ("Bob", 28, &["hiking", "chess"]),
        ]);
        let matcher = Matcher::with_default_policy();

        let result = matcher.find_matches(&registry, "Alice").unwrap();

        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_candidate_duplicates_are_kept() {
        let registry = registry_with(&[
            ("Alice", 30, &["chess", "reading"]),
            ("Bob", 28, &["chess", "chess", "reading"]),
        ]);
        let matcher = Matcher::with_default_policy();

        let result = matcher.find_matches(&registry, "Alice").unwrap();

        assert_eq!(
            result.matches[0].shared_interests,
            vec!["chess", "chess", "reading"]
        );
    }

    #[test]
    fn test_matches_follow_insertion_order() {
        let registry = registry_with(&[
            ("Alice", 30, &["chess", "reading", "hiking"]),
            ("Bob", 28, &["chess", "reading"]),
            ("Carol", 25, &["reading", "hiking"]),
        ]);
        let matcher = Matcher::with_default_policy();

        let result = matcher.find_matches(&registry, "Alice").unwrap();

        let names: Vec<&str> = result.matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carol"]);
    }

    #[test]
    fn test_duplicate_named_profiles_are_skipped_as_candidates() {
        let registry = registry_with(&[
            ("Alice", 30, &["chess", "reading"]),
            ("alice", 40, &["chess", "reading"]),
            ("Bob", 28, &["chess", "reading"]),
        ]);
        let matcher = Matcher::with_default_policy();

        let result = matcher.find_matches(&registry, "Alice").unwrap();

        let names: Vec<&str> = result.matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Bob"]);
    }

    #[test]
    fn test_custom_threshold() {
        let registry = registry_with(&[
            ("Alice", 30, &["hiking", "chess"]),
            ("Bob", 28, &["chess", "cooking"]),
        ]);
        let matcher = Matcher::new(MatchPolicy {
            min_shared_interests: 1,
        });

        let result = matcher.find_matches(&registry, "Alice").unwrap();

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].shared_interests, vec!["chess"]);
    }
}
