//! Credential types and resolution
//!
//! Credentials are resolved from a fixed-priority list of sources (explicit
//! options, `~/.acquia/cloudapi.conf`, `~/.netrc`) and are immutable once
//! resolved. The raw secret is never exposed through `Debug` or `Display`.

mod conf_file;
mod netrc;
mod resolver;
mod source;

pub use conf_file::CloudApiConf;
pub use netrc::{Netrc, NetrcEntry};
pub use resolver::{CredentialResolver, ResolverConfig};
pub use source::CredentialSource;

use std::fmt;

/// A resolved username/secret pair
///
/// The secret is treated as sensitive: the `Debug` implementation masks it,
/// and any display rendering goes through [`mask_secret`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    secret: String,
}

impl Credentials {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// The account username (email address for the Cloud API)
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The raw secret, for use in the Authorization header only
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Display-safe form of the secret
    pub fn masked_secret(&self) -> String {
        mask_secret(&self.secret)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &self.masked_secret())
            .finish()
    }
}

/// Mask a secret for safe display.
///
/// Keeps the first and last four characters with `****` in between; secrets
/// of eight characters or fewer are starred out entirely.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}****{suffix}")
}
