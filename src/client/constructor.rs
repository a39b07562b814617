//! Client constructor and bootstrap logic

use super::options::ClientOptions;
use super::types::Client;
use crate::credentials::CredentialResolver;
use crate::endpoint::cloud_api_endpoint;
use crate::error::{AcquiaError, AcquiaResult};
use std::env;
use tracing::debug;

/// Identifying user-agent sent with every request
const USER_AGENT: &str = concat!("Acquia SDK (", env!("CARGO_PKG_VERSION"), ")");

impl Client {
    /// Create a new Cloud API client.
    ///
    /// Resolves credentials (explicit options win over discovery), builds the
    /// HTTP connection, and issues the bootstrap request to `sites.json`.
    /// A 401 from the bootstrap fails construction with
    /// [`AcquiaError::InvalidCredentials`]; no alternate credential source is
    /// tried. When no site was supplied, the first element of the bootstrap
    /// response becomes the default site.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use acquia_sdk::{Client, ClientOptions};
    ///
    /// # fn example() -> acquia_sdk::AcquiaResult<()> {
    /// let client = Client::new(
    ///     ClientOptions::new()
    ///         .with_username("user@example.com")
    ///         .with_secret("cloud-api-key"),
    /// )?;
    /// println!("default site: {:?}", client.default_site());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(options: ClientOptions) -> AcquiaResult<Self> {
        let resolver = CredentialResolver::new(options.resolver.clone().unwrap_or_default());
        let (credentials, source) =
            resolver.resolve(options.username.as_deref(), options.secret.as_deref())?;
        debug!("credentials resolved from {source}");

        let endpoint = normalize_endpoint(options.endpoint.as_deref());

        let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);

        if let Some(ca_path) = &options.ca_file {
            let pem = std::fs::read(ca_path).map_err(|source| AcquiaError::Io {
                path: ca_path.clone(),
                source,
            })?;
            let cert = reqwest::Certificate::from_pem(&pem).map_err(|source| AcquiaError::Http {
                context: format!("loading trust anchor {}", ca_path.display()),
                source,
            })?;
            builder = builder
                .tls_built_in_root_certs(false)
                .add_root_certificate(cert);
        }

        // Proxy comes from the explicit option or the environment, read once
        // here at connection-build time.
        let proxy_url = options
            .proxy
            .clone()
            .or_else(|| env::var("HTTPS_PROXY").ok())
            .filter(|url| !url.is_empty());
        builder = match proxy_url {
            Some(url) => {
                debug!("routing requests through proxy {url}");
                builder.proxy(reqwest::Proxy::all(&url).map_err(|source| AcquiaError::Http {
                    context: format!("configuring proxy {url}"),
                    source,
                })?)
            }
            None => builder.no_proxy(),
        };

        let http = builder.build().map_err(|source| AcquiaError::Http {
            context: "building HTTP client".to_string(),
            source,
        })?;

        let mut client = Self {
            http,
            endpoint,
            credentials,
            source,
            default_site: None,
        };

        // Bootstrap: validates the credentials before any domain operation
        // proceeds, and discovers the default site unless one was supplied.
        client.default_site = client.bootstrap_default_site(options.site.clone())?;
        debug!("default site: {:?}", client.default_site);

        Ok(client)
    }

    fn bootstrap_default_site(
        &self,
        explicit_site: Option<String>,
    ) -> AcquiaResult<Option<String>> {
        let response = self
            .send_get("sites.json")
            .map_err(|source| AcquiaError::Http {
                context: "bootstrap request to sites.json".to_string(),
                source,
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AcquiaError::InvalidCredentials);
        }

        let body = response.text().map_err(|source| AcquiaError::Http {
            context: "reading sites.json response".to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(AcquiaError::ApiRequest {
                status: status.as_u16(),
                body,
            });
        }

        // An explicit site selection wins; the response body is not consulted.
        if let Some(site) = explicit_site {
            return Ok(Some(site));
        }

        let sites: Vec<String> =
            serde_json::from_str(&body).map_err(|source| AcquiaError::Json {
                context: "in sites.json response".to_string(),
                source,
            })?;
        Ok(sites.into_iter().next())
    }
}

fn normalize_endpoint(endpoint: Option<&str>) -> String {
    let endpoint = endpoint
        .map(str::to_string)
        .unwrap_or_else(cloud_api_endpoint);
    if endpoint.ends_with('/') {
        endpoint
    } else {
        format!("{endpoint}/")
    }
}
