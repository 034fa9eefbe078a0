//! Scoring-ready activity templates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::OrderedSet;

/// Canonical description of an activity used by scorers.
///
/// Each acceptance list holds the attribute values the activity suits; a
/// profile attribute matches when it is a member of the corresponding list.
/// Templates are immutable once built.
///
/// # Examples
/// ```
/// use turismo_core::{ActivityTemplate, OrderedSet};
///
/// let template = ActivityTemplate {
///     name: "Parapente".into(),
///     location: "Zona de parapente".into(),
///     tags: ["aventura"].into_iter().collect(),
///     ..ActivityTemplate::default()
/// };
/// assert!(template.tags.contains("aventura"));
/// assert!(template.budgets.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActivityTemplate {
    /// Activity name shown to the visitor.
    pub name: String,
    /// Human-readable description.
    pub summary: String,
    /// Where the activity takes place.
    pub location: String,
    /// Thematic tags matched against interests.
    pub tags: OrderedSet,
    /// Accepted travel styles.
    #[cfg_attr(feature = "serde", serde(alias = "travel_styles"))]
    pub travel_styles: OrderedSet,
    /// Accepted activity levels.
    #[cfg_attr(feature = "serde", serde(alias = "activity_levels"))]
    pub activity_levels: OrderedSet,
    /// Accepted travel companions.
    pub companions: OrderedSet,
    /// Accepted budget levels.
    pub budgets: OrderedSet,
    /// Accepted times of day.
    #[cfg_attr(feature = "serde", serde(alias = "times_of_day"))]
    pub times_of_day: OrderedSet,
}
