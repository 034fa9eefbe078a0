//! Turn raw activities into scoring templates.
//!
//! Curated profiles take precedence. Anything else is synthesised from the
//! substring rules in [`crate::rules`], so building never fails.
#![forbid(unsafe_code)]

use log::debug;
use turismo_core::{ActivityTemplate, AvailableActivity, OrderedSet};

use crate::curated::{CURATED_PROFILES, CuratedProfile, lookup};
use crate::rules::{
    ACTIVITY_LEVEL_RULES, ALL_COMPANIONS, BASE_BUDGETS, BASE_TIMES_OF_DAY, BASE_TRAVEL_STYLES,
    BUDGET_RULES, DEFAULT_ACTIVITY_LEVELS, FALLBACK_TAG, Haystacks, SubstringRule, TAG_RULES,
    TIME_OF_DAY_RULES, TRAVEL_STYLE_RULES, apply_all, first_match,
};

/// Builds one [`ActivityTemplate`] per [`AvailableActivity`].
///
/// # Examples
/// ```
/// use turismo_core::AvailableActivity;
/// use turismo_scorer::TemplateBuilder;
///
/// let builder = TemplateBuilder::default();
/// let template = builder.build(&AvailableActivity::new(
///     "Tour nocturno",
///     "Centro",
///     "Recorrido histórico al atardecer",
///     "Baja",
/// ));
/// assert_eq!(template.tags.as_slice(), ["cultura"]);
/// assert!(template.times_of_day.contains("noche"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TemplateBuilder {
    curated: &'static [CuratedProfile],
}

impl TemplateBuilder {
    /// Create a builder consulting `curated` before falling back to
    /// heuristics.
    #[must_use]
    pub const fn new(curated: &'static [CuratedProfile]) -> Self {
        Self { curated }
    }

    /// Build the template for one activity.
    #[must_use]
    pub fn build(&self, activity: &AvailableActivity) -> ActivityTemplate {
        if let Some(profile) = lookup(self.curated, &activity.name) {
            debug!("activity {:?} matched curated profile {:?}", activity.name, profile.key);
            return profile.instantiate(activity);
        }
        debug!(
            "activity {:?} has no curated profile; synthesising a generic template",
            activity.name
        );
        generic_template(activity)
    }

    /// Build templates for every activity, preserving order.
    #[must_use]
    pub fn build_all(&self, activities: &[AvailableActivity]) -> Vec<ActivityTemplate> {
        activities.iter().map(|activity| self.build(activity)).collect()
    }
}

impl Default for TemplateBuilder {
    fn default() -> Self {
        Self::new(&CURATED_PROFILES)
    }
}

/// Synthesise a template from keyword heuristics.
///
/// Tags are sorted lexicographically; curated templates keep declaration
/// order instead. Every attribute list is non-empty.
#[must_use]
pub fn generic_template(activity: &AvailableActivity) -> ActivityTemplate {
    let haystacks = Haystacks::from_activity(activity);

    let mut tags: OrderedSet = activity.tags.iter().cloned().collect();
    apply_all(&TAG_RULES, &haystacks, &mut tags);
    if tags.is_empty() {
        tags.insert(FALLBACK_TAG);
    }

    let activity_levels = first_match(&ACTIVITY_LEVEL_RULES, &haystacks)
        .unwrap_or(DEFAULT_ACTIVITY_LEVELS)
        .iter()
        .copied()
        .collect();

    ActivityTemplate {
        name: activity.name.clone(),
        summary: generic_summary(activity),
        location: activity.route_name.clone(),
        tags: tags.into_sorted(),
        travel_styles: extended(BASE_TRAVEL_STYLES, &TRAVEL_STYLE_RULES, &haystacks),
        activity_levels,
        companions: ALL_COMPANIONS.iter().copied().collect(),
        budgets: extended(BASE_BUDGETS, &BUDGET_RULES, &haystacks),
        times_of_day: extended(BASE_TIMES_OF_DAY, &TIME_OF_DAY_RULES, &haystacks),
    }
}

fn extended(base: &[&str], rules: &[SubstringRule], haystacks: &Haystacks) -> OrderedSet {
    let mut values: OrderedSet = base.iter().copied().collect();
    apply_all(rules, haystacks, &mut values);
    values
}

fn generic_summary(activity: &AvailableActivity) -> String {
    format!(
        "{} en {}. {}",
        activity.name,
        activity.route_name,
        activity.route_description.trim()
    )
    .trim()
    .to_owned()
}
