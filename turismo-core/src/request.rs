//! Request and response envelopes exchanged with front ends.

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AvailableActivity, PreferenceProfile, Recommendation};

/// A recommendation request as submitted by a client.
///
/// # Examples
/// ```
/// use turismo_core::{AvailableActivity, PreferenceProfile, RecommendationRequest};
///
/// let request = RecommendationRequest {
///     user_id: "visitor-1".into(),
///     survey: PreferenceProfile::default().with_interest("cultura"),
///     available_activities: vec![AvailableActivity::new(
///         "Museo", "Centro", "Recorrido histórico", "Baja",
///     )],
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendationRequest {
    /// Identifier echoed back in the response.
    pub user_id: String,
    /// Questionnaire answers.
    pub survey: PreferenceProfile,
    /// Candidate activities to score.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "availableActivities",
            alias = "available_activities",
            default
        )
    )]
    pub available_activities: Vec<AvailableActivity>,
}

/// Reasons a [`RecommendationRequest`] is rejected before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    /// The survey listed no interests.
    #[error("the survey must list at least one interest")]
    MissingInterests,
    /// No candidate activities were supplied.
    #[error("the request must list the available activities")]
    MissingActivities,
}

impl RecommendationRequest {
    /// Check the survey and the candidate list.
    ///
    /// # Errors
    /// Returns [`RequestValidationError::MissingInterests`] before
    /// [`RequestValidationError::MissingActivities`] when both apply.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        self.validate_survey()?;
        if self.available_activities.is_empty() {
            return Err(RequestValidationError::MissingActivities);
        }
        Ok(())
    }

    /// Check only the survey, for callers scoring against their own catalog.
    ///
    /// # Errors
    /// Returns [`RequestValidationError::MissingInterests`] when the survey
    /// has no interests.
    pub const fn validate_survey(&self) -> Result<(), RequestValidationError> {
        if self.survey.has_interests() {
            Ok(())
        } else {
            Err(RequestValidationError::MissingInterests)
        }
    }
}

/// Ranked recommendations for one request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendationResponse {
    /// Identifier copied from the request.
    pub user_id: String,
    /// Suggestions, best first.
    pub recommendations: Vec<Recommendation>,
    /// When the response was assembled (UTC).
    #[cfg_attr(
        feature = "serde",
        serde(rename = "generatedAt", alias = "generated_at")
    )]
    pub generated_at: DateTime<Utc>,
}

impl RecommendationResponse {
    /// Wrap `recommendations` for `user_id`, stamped with the current time.
    #[must_use]
    pub fn new(user_id: impl Into<String>, recommendations: Vec<Recommendation>) -> Self {
        Self {
            user_id: user_id.into(),
            recommendations,
            generated_at: Utc::now(),
        }
    }
}
