//! Client construction options

use crate::credentials::{mask_secret, ResolverConfig};
use std::fmt;
use std::path::PathBuf;

/// Options for [`Client::new`](super::Client::new)
///
/// Everything is optional: missing credentials run the discovery cascade and
/// a missing site is filled in by the bootstrap call.
#[derive(Clone, Default)]
pub struct ClientOptions {
    pub(super) username: Option<String>,
    pub(super) secret: Option<String>,
    pub(super) site: Option<String>,
    pub(super) endpoint: Option<String>,
    pub(super) ca_file: Option<PathBuf>,
    pub(super) proxy: Option<String>,
    pub(super) resolver: Option<ResolverConfig>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this username instead of running credential discovery
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Use this secret instead of running credential discovery
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Pin the site selection instead of taking the bootstrap default
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Override the API endpoint (staging environments, tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Pin TLS verification to the PEM trust anchor at this path
    pub fn with_ca_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_file = Some(path.into());
        self
    }

    /// Route requests through this proxy, overriding `HTTPS_PROXY`
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Use a custom resolver configuration for credential discovery
    pub fn with_resolver_config(mut self, config: ResolverConfig) -> Self {
        self.resolver = Some(config);
        self
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("username", &self.username)
            .field("secret", &self.secret.as_deref().map(mask_secret))
            .field("site", &self.site)
            .field("endpoint", &self.endpoint)
            .field("ca_file", &self.ca_file)
            .field("proxy", &self.proxy)
            .finish()
    }
}
