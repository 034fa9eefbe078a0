//! Rank templates into recommendations.

use crate::{ActivityTemplate, PreferenceProfile, Recommendation};

/// Number of recommendations returned when the caller does not ask for a
/// specific count.
pub const DEFAULT_LIMIT: usize = 5;

/// Turn a set of candidate templates into ranked recommendations.
///
/// Implementations return at most `limit` items, best first, and return an
/// empty list rather than an error when nothing can be recommended. Deciding
/// whether an empty list is a failure is the caller's business.
/// Recommenders must be `Send + Sync` so a single instance built at start-up
/// can serve every request.
pub trait Recommender: Send + Sync {
    /// Rank `templates` for `profile`.
    fn recommend(
        &self,
        profile: &PreferenceProfile,
        templates: &[ActivityTemplate],
        limit: usize,
    ) -> Vec<Recommendation>;
}
