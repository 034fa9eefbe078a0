//! Recommend command implementation for the Turismo CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, ErrorKind, Write};
use turismo_core::{
    DEFAULT_LIMIT, RecommendationRequest, RecommendationResponse, Recommender,
};
use turismo_fs::{PathKind, inspect_path, open_utf8_file};
use turismo_scorer::{Catalog, RecommendationEngine, TemplateBuilder};

use crate::{
    ARG_RECOMMEND_BUILTIN_CATALOG, ARG_RECOMMEND_CATALOG, ARG_RECOMMEND_LIMIT,
    ARG_RECOMMEND_REQUEST, CliError, ENV_RECOMMEND_REQUEST,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank activities for a JSON-encoded recommendation request. \
                 Candidates come from the request's available activities, a \
                 JSON catalog of templates, or the built-in Villavicencio \
                 catalog.",
    about = "Recommend activities for a visitor"
)]
#[ortho_config(prefix = "TURISMO")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a recommendation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Score against the templates in this JSON catalog instead of the
    /// request's activities.
    #[arg(long = ARG_RECOMMEND_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Score against the built-in Villavicencio catalog.
    #[arg(
        long = ARG_RECOMMEND_BUILTIN_CATALOG,
        value_name = "bool",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) builtin_catalog: Option<bool>,
    /// Maximum number of recommendations to return.
    #[arg(long = ARG_RECOMMEND_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Where candidate templates come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogChoice {
    /// Build templates from the request's available activities.
    Request,
    /// Use the built-in Villavicencio catalog.
    Builtin,
    /// Load templates from a JSON file.
    File(Utf8PathBuf),
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Source of candidate templates.
    pub(crate) catalog: CatalogChoice,
    /// Maximum number of recommendations.
    pub(crate) limit: usize,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_RECOMMEND_REQUEST)?;
        if let CatalogChoice::File(path) = &self.catalog {
            Self::require_existing(path, ARG_RECOMMEND_CATALOG)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match inspect_path(path) {
            Ok(PathKind::File) => Ok(()),
            Ok(PathKind::NotFile) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Ok(PathKind::Missing) => Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;

        let catalog = match (args.catalog, args.builtin_catalog.unwrap_or(false)) {
            (Some(_), true) => {
                return Err(CliError::ConflictingCatalogs {
                    file: ARG_RECOMMEND_CATALOG,
                    builtin: ARG_RECOMMEND_BUILTIN_CATALOG,
                });
            }
            (Some(path), false) => CatalogChoice::File(path),
            (None, true) => CatalogChoice::Builtin,
            (None, false) => CatalogChoice::Request,
        };

        let limit = match args.limit {
            Some(0) => {
                return Err(CliError::InvalidLimit {
                    field: ARG_RECOMMEND_LIMIT,
                });
            }
            Some(limit) => limit,
            None => DEFAULT_LIMIT,
        };

        Ok(Self {
            request_path,
            catalog,
            limit,
        })
    }
}

/// Builds a recommender for the current invocation.
pub(super) trait RecommenderBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Box<dyn Recommender>, CliError>;
}

pub(super) struct DefaultRecommenderBuilder;

impl RecommenderBuilder for DefaultRecommenderBuilder {
    fn build(&self, _config: &RecommendConfig) -> Result<Box<dyn Recommender>, CliError> {
        Ok(Box::new(RecommendationEngine::default()))
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultRecommenderBuilder;
    run_recommend_with(args, &builder, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn RecommenderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_recommend(args, builder)?;
    write_response(writer, &response)
}

fn execute_recommend(
    args: RecommendArgs,
    builder: &dyn RecommenderBuilder,
) -> Result<RecommendationResponse, CliError> {
    let config = resolve_recommend_config(args)?;
    let request = load_request(&config.request_path)?;
    let catalog = candidate_catalog(&config, &request)?;
    debug!(
        "scoring {} candidate templates for user {:?}",
        catalog.len(),
        request.user_id
    );

    let recommender = builder.build(&config)?;
    let recommendations = recommender.recommend(&request.survey, catalog.templates(), config.limit);
    if recommendations.is_empty() {
        return Err(CliError::NoRecommendations {
            user_id: request.user_id,
        });
    }
    info!(
        "produced {} recommendations for user {:?}",
        recommendations.len(),
        request.user_id
    );
    Ok(RecommendationResponse::new(request.user_id, recommendations))
}

fn candidate_catalog(
    config: &RecommendConfig,
    request: &RecommendationRequest,
) -> Result<Catalog, CliError> {
    let invalid = |source| CliError::InvalidRequest {
        path: config.request_path.clone(),
        source,
    };
    match &config.catalog {
        CatalogChoice::Request => {
            request.validate().map_err(invalid)?;
            let builder = TemplateBuilder::default();
            Ok(Catalog::new(builder.build_all(&request.available_activities)))
        }
        CatalogChoice::Builtin => {
            request.validate_survey().map_err(invalid)?;
            Ok(Catalog::villavicencio())
        }
        CatalogChoice::File(path) => {
            request.validate_survey().map_err(invalid)?;
            Ok(Catalog::from_path(path)?)
        }
    }
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`RecommendationRequest`] from disk.
pub(super) fn load_request(path: &Utf8Path) -> Result<RecommendationRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn write_response(
    writer: &mut dyn Write,
    response: &RecommendationResponse,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerialiseResponse)?;
    let written = writer
        .write_all(payload.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .and_then(|()| writer.flush());
    match written {
        Ok(()) => Ok(()),
        // A reader such as `head` closed the pipe; nothing is left to report.
        Err(err) if err.kind() == ErrorKind::BrokenPipe => {
            debug!("output closed before the response was fully written");
            Ok(())
        }
        Err(err) => Err(CliError::WriteOutput(err)),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
