//! Generic request helper

use super::types::Client;
use crate::error::{AcquiaError, AcquiaResult};
use serde_json::Value;

impl Client {
    /// Issue a GET request against the configured endpoint.
    ///
    /// `path` is relative to the versioned endpoint, e.g.
    /// `sites/mysite/envs.json`. The stored connection configuration
    /// (credentials, proxy, TLS, user-agent) is reused for every call.
    /// Any non-success status raises [`AcquiaError::ApiRequest`] carrying
    /// the status and body; the body is JSON-decoded before return.
    pub fn get(&self, path: &str) -> AcquiaResult<Value> {
        let response = self.send_get(path).map_err(|source| AcquiaError::Http {
            context: format!("GET {path}"),
            source,
        })?;

        let status = response.status();
        let body = response.text().map_err(|source| AcquiaError::Http {
            context: format!("reading response for GET {path}"),
            source,
        })?;

        if !status.is_success() {
            return Err(AcquiaError::ApiRequest {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| AcquiaError::Json {
            context: format!("in response for GET {path}"),
            source,
        })
    }

    pub(super) fn send_get(&self, path: &str) -> reqwest::Result<reqwest::blocking::Response> {
        let url = format!("{}{}", self.endpoint, path.trim_start_matches('/'));
        self.http
            .get(url)
            .basic_auth(
                self.credentials.username(),
                Some(self.credentials.secret()),
            )
            .send()
    }
}
