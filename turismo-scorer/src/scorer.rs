//! Additive preference scoring.
#![forbid(unsafe_code)]

use turismo_core::{ActivityTemplate, OrderedSet, PreferenceProfile, Scorer};

use crate::{KeywordBoosts, MatchWeights, WeightsError};

/// Scores a template by summing the weights of every matching signal.
///
/// Shared interests contribute per tag; travel style, activity level,
/// companions, budget and time of day contribute once when the template
/// accepts the profile's value; the notes may add a single keyword boost.
///
/// # Examples
/// ```
/// use turismo_core::{ActivityTemplate, PreferenceProfile, Scorer};
/// use turismo_scorer::PreferenceScorer;
///
/// let template = ActivityTemplate {
///     tags: ["cultura", "gastronomia"].into_iter().collect(),
///     ..ActivityTemplate::default()
/// };
/// let profile = PreferenceProfile::default().with_interest("cultura");
/// let score = PreferenceScorer::default().score(&template, &profile);
/// assert!((score - 1.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreferenceScorer {
    weights: MatchWeights,
    boosts: KeywordBoosts,
}

impl PreferenceScorer {
    /// Construct a scorer from custom weights and keyword boosts.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when any weight is negative or not finite.
    pub fn new(weights: MatchWeights, boosts: KeywordBoosts) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
            boosts,
        })
    }

    /// The signal weights in use.
    #[must_use]
    pub const fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// The keyword boost table in use.
    #[must_use]
    pub const fn boosts(&self) -> &KeywordBoosts {
        &self.boosts
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "interest overlap scales the per-tag weight"
    )]
    fn interest_component(&self, template: &ActivityTemplate, profile: &PreferenceProfile) -> f64 {
        let shared = u32::try_from(profile.interests.overlap(&template.tags)).unwrap_or(u32::MAX);
        self.weights.interest * f64::from(shared)
    }

    fn attribute_signals<'a>(
        &self,
        template: &'a ActivityTemplate,
        profile: &'a PreferenceProfile,
    ) -> [(&'a OrderedSet, &'a str, f64); 5] {
        [
            (
                &template.travel_styles,
                profile.travel_style.as_str(),
                self.weights.travel_style,
            ),
            (
                &template.activity_levels,
                profile.activity_level.as_str(),
                self.weights.activity_level,
            ),
            (
                &template.companions,
                profile.companions.as_str(),
                self.weights.companions,
            ),
            (
                &template.budgets,
                profile.budget_level.as_str(),
                self.weights.budget,
            ),
            (
                &template.times_of_day,
                profile.preferred_time_of_day.as_str(),
                self.weights.time_of_day,
            ),
        ]
    }
}

impl Scorer for PreferenceScorer {
    #[expect(clippy::float_arithmetic, reason = "match scores are additive sums")]
    fn score(&self, template: &ActivityTemplate, profile: &PreferenceProfile) -> f64 {
        let mut total = self.interest_component(template, profile);
        for (accepted, value, weight) in self.attribute_signals(template, profile) {
            if accepted.contains(value) {
                total += weight;
            }
        }
        if let Some(boost) = profile
            .notes
            .as_deref()
            .and_then(|notes| self.boosts.boost_for(notes))
        {
            total += boost;
        }
        <Self as Scorer>::sanitise(total)
    }
}
