//! Client type definition

use crate::credentials::{CredentialSource, Credentials};

/// Client for the Acquia Cloud API.
///
/// Construction resolves credentials, builds the HTTP connection, and
/// validates the credentials with a bootstrap request; a `Client` therefore
/// never holds credentials that have not been exercised against the API.
pub struct Client {
    pub(super) http: reqwest::blocking::Client,
    /// Base endpoint with trailing slash, e.g. `https://cloudapi.acquia.com/v1/`
    pub(super) endpoint: String,
    pub(super) credentials: Credentials,
    pub(super) source: CredentialSource,
    /// Site discovered by the bootstrap call, or the explicitly supplied one
    pub(super) default_site: Option<String>,
}
