//! Score activity templates for a visitor profile.
//!
//! The `Scorer` trait assigns a raw match score to an
//! [`ActivityTemplate`](crate::ActivityTemplate) given the visitor's
//! [`PreferenceProfile`](crate::PreferenceProfile).

use crate::{ActivityTemplate, PreferenceProfile};

/// Calculate a raw match score for a template.
///
/// Higher scores indicate a better match. Scores are additive and not
/// normalised, so they may exceed `1.0`. Implementations must be thread-safe
/// (`Send` + `Sync`) so one scorer can serve concurrent requests, and are
/// infallible: return `0.0` when nothing matches.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use turismo_core::{ActivityTemplate, PreferenceProfile, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _template: &ActivityTemplate, _profile: &PreferenceProfile) -> f64 {
///         1.0
///     }
/// }
///
/// let scorer = UnitScorer;
/// let score = scorer.score(&ActivityTemplate::default(), &PreferenceProfile::default());
/// assert_eq!(score, 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `template` according to `profile`.
    fn score(&self, template: &ActivityTemplate, profile: &PreferenceProfile) -> f64;

    /// Validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps negatives to `0.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}
