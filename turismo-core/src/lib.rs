//! Core domain types for the Turismo recommendation engine.
//!
//! The crate describes what a visitor asked for
//! ([`PreferenceProfile`]), what can be recommended ([`AvailableActivity`]
//! and the scoring-ready [`ActivityTemplate`]) and what comes back
//! ([`Recommendation`]). Scoring and ranking live behind the [`Scorer`] and
//! [`Recommender`] traits so engines can be swapped without touching the
//! callers.
//!
//! Attribute values such as travel styles or budgets are opaque strings
//! compared by equality; the core never interprets them.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod activity;
pub mod ordered_set;
pub mod profile;
pub mod recommendation;
pub mod recommender;
pub mod request;
pub mod scorer;
pub mod template;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use activity::AvailableActivity;
pub use ordered_set::OrderedSet;
pub use profile::PreferenceProfile;
pub use recommendation::Recommendation;
pub use recommender::{DEFAULT_LIMIT, Recommender};
pub use request::{RecommendationRequest, RecommendationResponse, RequestValidationError};
pub use scorer::Scorer;
pub use template::ActivityTemplate;
