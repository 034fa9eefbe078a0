//! Error types raised while configuring scorers or loading catalogs.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised when scoring weights or keyword boosts are unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    /// A signal weight was negative or not finite.
    #[error("weight for {signal} must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Name of the offending signal.
        signal: &'static str,
        /// Value that was rejected.
        value: f64,
    },
    /// A keyword boost was negative or not finite.
    #[error("boost for keyword {token:?} must be finite and non-negative, got {value}")]
    InvalidBoost {
        /// Keyword whose boost was rejected.
        token: String,
        /// Value that was rejected.
        value: f64,
    },
    /// A keyword was empty, so it would match every note.
    #[error("keyword boost tokens must not be empty")]
    EmptyToken,
}

/// Errors raised while loading a template catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("failed to read catalog at {path}")]
    Read {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The catalog file was not a JSON array of templates.
    #[error("failed to parse catalog JSON at {path}")]
    Parse {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The catalog parsed but listed no templates.
    #[error("catalog at {path} contains no templates")]
    Empty {
        /// Requested catalog path.
        path: Utf8PathBuf,
    },
}
