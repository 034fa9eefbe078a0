//! Facade crate for the Turismo recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the template
//! builder, preference scorer and ranking engine behind the `scorer`
//! feature.

#![forbid(unsafe_code)]

pub use turismo_core::{
    ActivityTemplate, AvailableActivity, DEFAULT_LIMIT, OrderedSet, PreferenceProfile,
    Recommendation, RecommendationRequest, RecommendationResponse, Recommender,
    RequestValidationError, Scorer,
};

#[cfg(feature = "scorer")]
pub use turismo_scorer::{
    Catalog, CatalogError, KeywordBoost, KeywordBoosts, MatchWeights, PreferenceScorer,
    RecommendationEngine, ScoredTemplate, TemplateBuilder, WeightsError, confidence,
};
