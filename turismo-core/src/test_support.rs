//! Test-only fixtures and scorers shared by unit, property and behaviour
//! tests across the workspace.

use crate::{ActivityTemplate, OrderedSet, PreferenceProfile, Scorer};

/// Profile of an adventurous group of friends with a premium budget.
#[must_use]
pub fn adventurous_profile() -> PreferenceProfile {
    PreferenceProfile {
        travel_style: "aventurero".to_owned(),
        interests: ["aventura", "naturaleza"].into_iter().collect(),
        activity_level: "alta".to_owned(),
        companions: "amigos".to_owned(),
        budget_level: "premium".to_owned(),
        preferred_time_of_day: "manana".to_owned(),
        notes: None,
    }
}

/// Template carrying only a name and tags; every acceptance list is empty.
#[must_use]
pub fn tagged_template(name: &str, tags: &[&str]) -> ActivityTemplate {
    ActivityTemplate {
        name: name.to_owned(),
        summary: format!("{name} summary"),
        location: format!("{name} location"),
        tags: tags.iter().copied().collect::<OrderedSet>(),
        ..ActivityTemplate::default()
    }
}

/// Test `Scorer` counting one point per shared interest.
#[derive(Debug, Copy, Clone, Default)]
pub struct OverlapScorer;

impl Scorer for OverlapScorer {
    #[expect(
        clippy::cast_precision_loss,
        reason = "overlap counts in tests stay tiny"
    )]
    fn score(&self, template: &ActivityTemplate, profile: &PreferenceProfile) -> f64 {
        template.tags.overlap(&profile.interests) as f64
    }
}
