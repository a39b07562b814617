//! Acquia Cloud API SDK
//!
//! Client library for the Acquia Cloud REST API. Credentials are resolved
//! from a fixed-priority list of sources (explicit options, then
//! `~/.acquia/cloudapi.conf`, then `~/.netrc`), the HTTPS connection is built
//! once per client (TLS verification, optional proxy, basic auth,
//! identifying user-agent), and a bootstrap call to `sites.json` validates
//! the credentials and discovers the default site before any domain
//! operation proceeds.
//!
//! # Example
//!
//! ```no_run
//! use acquia_sdk::{Client, ClientOptions};
//!
//! # fn example() -> acquia_sdk::AcquiaResult<()> {
//! // Credentials come from ~/.acquia/cloudapi.conf or ~/.netrc when not
//! // supplied explicitly.
//! let client = Client::new(ClientOptions::new())?;
//!
//! if let Some(site) = client.default_site() {
//!     let servers = client.get(&format!("sites/{site}/servers.json"))?;
//!     println!("{servers}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Secrets never appear in display or debug output; any rendering of client
//! state masks the secret down to its first and last four characters.

pub mod client;
pub mod credentials;
pub mod endpoint;
pub mod error;

// Re-export commonly used types
pub use client::{Client, ClientOptions};
pub use credentials::{
    mask_secret, CredentialResolver, CredentialSource, Credentials, ResolverConfig,
};
pub use endpoint::{cloud_api_endpoint, cloud_api_uri, CLOUD_API_HOST, CLOUD_API_VERSION};
pub use error::{AcquiaError, AcquiaResult};
