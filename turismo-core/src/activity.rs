//! Raw activity descriptions supplied by callers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An activity offered along a tourist route, before it is turned into an
/// [`ActivityTemplate`](crate::ActivityTemplate).
///
/// # Examples
/// ```
/// use turismo_core::AvailableActivity;
///
/// let activity = AvailableActivity::new(
///     "Parapente",
///     "Vía al Llano",
///     "Vuelo sobre la cordillera",
///     "Alta",
/// )
/// .with_tag("adrenalina");
/// assert_eq!(activity.tags, ["adrenalina"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AvailableActivity {
    /// Display name of the activity.
    pub name: String,
    /// Name of the route hosting the activity.
    #[cfg_attr(feature = "serde", serde(alias = "route_name"))]
    pub route_name: String,
    /// Free-text description of the route.
    #[cfg_attr(feature = "serde", serde(alias = "route_description"))]
    pub route_description: String,
    /// Difficulty rating of the route, e.g. `Media`.
    #[cfg_attr(feature = "serde", serde(alias = "route_difficulty"))]
    pub route_difficulty: String,
    /// Extra tags supplied by the caller.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
}

impl AvailableActivity {
    /// Construct an activity without caller tags.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        route_name: impl Into<String>,
        route_description: impl Into<String>,
        route_difficulty: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            route_name: route_name.into(),
            route_description: route_description.into(),
            route_difficulty: route_difficulty.into(),
            tags: Vec::new(),
        }
    }

    /// Append a caller tag while returning `self` for chaining.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}
