//! Core error types for the Acquia SDK

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Acquia SDK operations
pub type AcquiaResult<T> = Result<T, AcquiaError>;

/// Main error type for the Acquia SDK
///
/// Every variant is terminal for the operation that raised it: there is no
/// automatic retry and no fallback to a secondary credential source once one
/// has been chosen.
#[derive(Error, Debug)]
pub enum AcquiaError {
    /// No credential source yielded a value
    #[error(
        "no Acquia Cloud API credentials found (checked {} and {})",
        conf_path.display(),
        netrc_path.display()
    )]
    MissingConfiguration {
        conf_path: PathBuf,
        netrc_path: PathBuf,
    },

    /// Credential discovery needs a home directory and none could be found
    #[error("could not determine a home directory for credential discovery")]
    MissingHomeDirectory,

    /// A netrc file exists but has no entry for the Cloud API host
    #[error("no entry for {host} found in {}", path.display())]
    MissingNetrcConfiguration { host: String, path: PathBuf },

    /// The server rejected basic auth with HTTP 401
    #[error("invalid user credentials")]
    InvalidCredentials,

    /// Any other non-success HTTP status from the API
    #[error("API request failed with status {status}: {body}")]
    ApiRequest { status: u16, body: String },

    /// The cloudapi.conf file exists but is not valid JSON
    #[error("failed to parse {}: {source}", path.display())]
    ConfParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A response body that should be JSON failed to decode
    #[error("failed to decode JSON {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP transport errors (connect failures, TLS, bad proxy URL)
    #[error("HTTP error {context}: {source}")]
    Http {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// Local filesystem errors while reading credential sources
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AcquiaError {
    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AcquiaError::ApiRequest { status, .. } => Some(*status),
            AcquiaError::InvalidCredentials => Some(401),
            _ => None,
        }
    }
}
