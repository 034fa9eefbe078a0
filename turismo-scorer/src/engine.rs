//! Rank templates and convert scores into display confidences.
#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use log::{debug, warn};
use turismo_core::{ActivityTemplate, PreferenceProfile, Recommendation, Recommender, Scorer};

use crate::PreferenceScorer;

/// A template paired with its raw match score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredTemplate<'a> {
    /// The template that was scored.
    pub template: &'a ActivityTemplate,
    /// Sanitised raw score.
    pub score: f64,
}

/// Map a raw score onto the `0.25..=1.0` display scale.
///
/// The result is `min(1, 0.25 + score / 10)` rounded to two decimals with
/// ties going to the even neighbour.
///
/// # Examples
/// ```
/// use turismo_scorer::confidence;
///
/// assert_eq!(confidence(0.0), 0.25);
/// assert_eq!(confidence(7.0), 0.95);
/// assert_eq!(confidence(40.0), 1.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "confidence is a linear rescale of the raw score"
)]
pub fn confidence(score: f64) -> f64 {
    let scaled = (0.25 + score / 10.0).min(1.0);
    (scaled * 100.0).round_ties_even() / 100.0
}

/// Scores every template and returns them best first.
///
/// The engine holds no mutable state, so one instance can be shared by all
/// requests.
///
/// # Examples
/// ```
/// use turismo_core::{AvailableActivity, PreferenceProfile, Recommender};
/// use turismo_scorer::{RecommendationEngine, TemplateBuilder};
///
/// let templates = TemplateBuilder::default().build_all(&[
///     AvailableActivity::new("Miradores", "Cristo Rey", "Vista al llano", "Baja"),
///     AvailableActivity::new("Parapente", "Buenavista", "Vuelo", "Alta"),
/// ]);
/// let profile = PreferenceProfile::default().with_interest("adrenalina");
/// let ranked = RecommendationEngine::default().recommend(&profile, &templates, 5);
/// assert_eq!(ranked[0].activity_name, "Parapente");
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationEngine<S = PreferenceScorer> {
    scorer: S,
}

impl Default for RecommendationEngine<PreferenceScorer> {
    fn default() -> Self {
        Self::new(PreferenceScorer::default())
    }
}

impl<S> RecommendationEngine<S> {
    /// Wrap `scorer` in an engine.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// The scorer used for ranking.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }
}

impl<S: Scorer> RecommendationEngine<S> {
    /// Score `templates` and sort them by descending score.
    ///
    /// The sort is stable: templates with equal scores keep their input
    /// order.
    #[must_use]
    pub fn rank<'a>(
        &self,
        profile: &PreferenceProfile,
        templates: &'a [ActivityTemplate],
    ) -> Vec<ScoredTemplate<'a>> {
        let mut scored: Vec<_> = templates
            .iter()
            .map(|template| ScoredTemplate {
                template,
                score: self.score_one(template, profile),
            })
            .collect();
        scored.sort_by(|left, right| right.score.total_cmp(&left.score));
        if let Some(best) = scored.first() {
            debug!(
                "ranked {} templates; best {:?} scored {}",
                scored.len(),
                best.template.name,
                best.score
            );
        }
        scored
    }

    /// Rank and convert the best `limit` templates, stamping each with
    /// `created_at`.
    #[must_use]
    pub fn recommend_at(
        &self,
        profile: &PreferenceProfile,
        templates: &[ActivityTemplate],
        limit: usize,
        created_at: DateTime<Utc>,
    ) -> Vec<Recommendation> {
        self.recommend_with_clock(profile, templates, limit, || created_at)
    }

    /// Rank and convert the best `limit` templates, reading `clock` once per
    /// recommendation as it is built.
    #[must_use]
    pub fn recommend_with_clock(
        &self,
        profile: &PreferenceProfile,
        templates: &[ActivityTemplate],
        limit: usize,
        clock: impl Fn() -> DateTime<Utc>,
    ) -> Vec<Recommendation> {
        self.rank(profile, templates)
            .into_iter()
            .take(limit)
            .map(|scored| {
                Recommendation::from_template(scored.template, confidence(scored.score), clock())
            })
            .collect()
    }

    fn score_one(&self, template: &ActivityTemplate, profile: &PreferenceProfile) -> f64 {
        let raw = self.scorer.score(template, profile);
        if !raw.is_finite() || raw < 0.0 {
            warn!(
                "scorer returned {raw} for {:?}; treating it as zero",
                template.name
            );
        }
        S::sanitise(raw)
    }
}

impl<S: Scorer> Recommender for RecommendationEngine<S> {
    fn recommend(
        &self,
        profile: &PreferenceProfile,
        templates: &[ActivityTemplate],
        limit: usize,
    ) -> Vec<Recommendation> {
        self.recommend_with_clock(profile, templates, limit, Utc::now)
    }
}
