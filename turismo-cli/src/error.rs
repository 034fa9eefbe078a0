//! Error types emitted by the Turismo CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use turismo_core::RequestValidationError;
use turismo_scorer::CatalogError;

/// Exit status for mistakes the caller can fix.
const CLIENT_ERROR_EXIT: i32 = 2;
/// Exit status for every other failure.
const FAILURE_EXIT: i32 = 1;

/// Errors emitted by the Turismo CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Both a catalog file and the built-in catalog were requested.
    #[error("--{file} and --{builtin} cannot be combined")]
    ConflictingCatalogs {
        /// Option naming a catalog file.
        file: &'static str,
        /// Option selecting the built-in catalog.
        builtin: &'static str,
    },
    /// The recommendation limit must be at least one.
    #[error("--{field} must be at least 1")]
    InvalidLimit {
        /// Option that carried the limit.
        field: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that is not a regular file.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Opening the recommendation request file failed.
    #[error("failed to open recommendation request at {path:?}: {source}")]
    OpenRequest {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Recommendation request JSON could not be decoded.
    #[error("failed to parse recommendation request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The recommendation request failed validation.
    #[error("recommendation request in {path:?} failed validation: {source}")]
    InvalidRequest {
        /// Requested path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: RequestValidationError,
    },
    /// Loading a catalog file failed.
    #[error(transparent)]
    LoadCatalog(#[from] CatalogError),
    /// A valid request produced no recommendations.
    #[error("no recommendations could be produced for user {user_id:?}")]
    NoRecommendations {
        /// User the request was made for.
        user_id: String,
    },
    /// Serialising the response to JSON failed.
    #[error("failed to serialise recommendation response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the response failed.
    #[error("failed to write recommendation output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl CliError {
    /// Report whether the caller can fix the failure by changing its input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ArgumentParsing(_)
                | Self::Configuration(_)
                | Self::MissingArgument { .. }
                | Self::ConflictingCatalogs { .. }
                | Self::InvalidLimit { .. }
                | Self::MissingSourceFile { .. }
                | Self::SourcePathNotFile { .. }
                | Self::ParseRequest { .. }
                | Self::InvalidRequest { .. }
        )
    }

    /// Process exit status for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.is_client_error() {
            CLIENT_ERROR_EXIT
        } else {
            FAILURE_EXIT
        }
    }
}
