//! Template building and preference scoring for Turismo recommendations.
//!
//! The crate provides three complementary capabilities:
//! - **Template building** turns raw [`AvailableActivity`] records into
//!   scoring-ready [`ActivityTemplate`]s. Names with a curated profile use
//!   its hand-authored attribute lists; everything else is synthesised from
//!   keyword heuristics over the route description, activity name and
//!   difficulty.
//! - **Preference scoring** adds a fixed weight for every signal a template
//!   shares with a [`PreferenceProfile`](turismo_core::PreferenceProfile),
//!   plus at most one boost for keywords found in the visitor's notes. It
//!   implements the [`Scorer`](turismo_core::Scorer) trait.
//! - **Ranking** sorts templates by score, keeps the best few and maps each
//!   score onto a bounded confidence. [`RecommendationEngine`] implements
//!   [`Recommender`](turismo_core::Recommender).
//!
//! # Examples
//!
//! ```
//! use turismo_core::{AvailableActivity, PreferenceProfile, Recommender, DEFAULT_LIMIT};
//! use turismo_scorer::{RecommendationEngine, TemplateBuilder};
//!
//! let activities = [AvailableActivity::new(
//!     "Parapente",
//!     "Buenavista",
//!     "Vuelo sobre el llano",
//!     "Alta",
//! )];
//! let templates = TemplateBuilder::default().build_all(&activities);
//! let profile = PreferenceProfile::default().with_interest("aventura");
//! let ranked = RecommendationEngine::default().recommend(&profile, &templates, DEFAULT_LIMIT);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].location, "Zona de parapente en Buenavista");
//! ```
//!
//! [`AvailableActivity`]: turismo_core::AvailableActivity
//! [`ActivityTemplate`]: turismo_core::ActivityTemplate

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod catalog;
mod curated;
mod engine;
mod error;
pub(crate) mod rules;
mod scorer;
mod table;
mod weights;

pub use builder::{TemplateBuilder, generic_template};
pub use catalog::Catalog;
pub use curated::{CURATED_PROFILES, CuratedProfile, normalise_name};
pub use engine::{RecommendationEngine, ScoredTemplate, confidence};
pub use error::{CatalogError, WeightsError};
pub use scorer::PreferenceScorer;
pub use table::StaticTemplate;
pub use weights::{KeywordBoost, KeywordBoosts, MatchWeights};
