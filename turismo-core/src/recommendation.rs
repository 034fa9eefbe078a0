//! Ranked suggestions returned to the visitor.

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ActivityTemplate;

/// A suggested activity with a display confidence.
///
/// `confidence` lies in `0.0..=1.0` and carries two decimals. It is derived
/// from the raw match score and is not a probability.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Recommendation {
    /// Name of the recommended activity.
    #[cfg_attr(feature = "serde", serde(alias = "activity_name"))]
    pub activity_name: String,
    /// Description of the activity.
    pub summary: String,
    /// Where the activity takes place.
    pub location: String,
    /// Bounded display score.
    pub confidence: f64,
    /// Tags of the underlying template.
    pub tags: Vec<String>,
    /// When this recommendation was produced (UTC).
    #[cfg_attr(feature = "serde", serde(alias = "created_at"))]
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    /// Build a recommendation for `template`.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use turismo_core::{ActivityTemplate, Recommendation};
    ///
    /// let template = ActivityTemplate {
    ///     name: "Miradores".into(),
    ///     ..ActivityTemplate::default()
    /// };
    /// let recommendation = Recommendation::from_template(&template, 0.75, Utc::now());
    /// assert_eq!(recommendation.activity_name, "Miradores");
    /// ```
    #[must_use]
    pub fn from_template(
        template: &ActivityTemplate,
        confidence: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            activity_name: template.name.clone(),
            summary: template.summary.clone(),
            location: template.location.clone(),
            confidence,
            tags: template.tags.as_slice().to_vec(),
            created_at,
        }
    }
}
