//! Acquia configuration file loading
//!
//! `~/.acquia/cloudapi.conf` is a JSON object carrying the account email and
//! private key. A file that exists but fails to parse is a hard error, never
//! silently skipped.

use crate::error::{AcquiaError, AcquiaResult};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Contents of a cloudapi.conf file
#[derive(Debug, Clone, Deserialize)]
pub struct CloudApiConf {
    /// Account email address, used as the basic-auth username
    pub email: String,
    /// Private Cloud API key, used as the basic-auth password
    pub key: String,
}

impl CloudApiConf {
    /// Load and parse the configuration file at `path`.
    ///
    /// Returns `Ok(None)` only when the file does not exist; read and parse
    /// failures propagate as errors.
    pub fn load(path: &Path) -> AcquiaResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| AcquiaError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let conf: CloudApiConf =
            serde_json::from_str(&content).map_err(|source| AcquiaError::ConfParse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("loaded credentials for {} from {}", conf.email, path.display());
        Ok(Some(conf))
    }
}
