//! Visitor preferences collected by the travel questionnaire.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::OrderedSet;

/// Answers to the preference questionnaire.
///
/// Every attribute is an opaque token chosen by the caller. Interests must
/// be non-empty for a request to be accepted; see
/// [`RecommendationRequest::validate`](crate::RecommendationRequest::validate).
///
/// # Examples
/// ```
/// use turismo_core::PreferenceProfile;
///
/// let profile = PreferenceProfile::default()
///     .with_interest("naturaleza")
///     .with_notes("viajamos con niños");
/// assert!(profile.interests.contains("naturaleza"));
/// assert_eq!(profile.notes.as_deref(), Some("viajamos con niños"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PreferenceProfile {
    /// Preferred pace of travel, e.g. `aventurero` or `relajado`.
    #[cfg_attr(feature = "serde", serde(alias = "travel_style"))]
    pub travel_style: String,
    /// Themes the visitor wants to explore.
    pub interests: OrderedSet,
    /// Physical effort the visitor is comfortable with.
    #[cfg_attr(feature = "serde", serde(alias = "activity_level"))]
    pub activity_level: String,
    /// Who the visitor travels with.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "travelCompanions", alias = "travel_companions")
    )]
    pub companions: String,
    /// Spending bracket.
    #[cfg_attr(feature = "serde", serde(alias = "budget_level"))]
    pub budget_level: String,
    /// Part of the day the visitor prefers.
    #[cfg_attr(feature = "serde", serde(alias = "preferred_time_of_day"))]
    pub preferred_time_of_day: String,
    /// Free-text remarks scanned for keyword boosts.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "additionalNotes",
            alias = "additional_notes",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub notes: Option<String>,
}

impl PreferenceProfile {
    /// Add an interest while returning `self` for chaining.
    #[must_use]
    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.insert(interest);
        self
    }

    /// Replace the free-text notes while returning `self` for chaining.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Report whether the profile names at least one interest.
    #[must_use]
    pub const fn has_interests(&self) -> bool {
        !self.interests.is_empty()
    }
}
