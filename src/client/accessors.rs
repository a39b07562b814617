//! Client accessor methods and redaction-safe rendering

use super::types::Client;
use crate::credentials::CredentialSource;
use std::fmt;

impl Client {
    /// The username the client authenticates as
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Where the credentials were resolved from
    pub fn credential_source(&self) -> &CredentialSource {
        &self.source
    }

    /// The configured base endpoint, trailing slash included
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The site used when the caller does not name one explicitly.
    ///
    /// Set from client options, else cached from the first element of the
    /// bootstrap response; `None` when the account has no sites.
    pub fn default_site(&self) -> Option<&str> {
        self.default_site.as_deref()
    }

    /// Render the client state for display with the secret masked.
    ///
    /// This is the only way client state is turned into text; the raw secret
    /// never appears in it.
    pub fn redacted(&self) -> String {
        format!(
            "Client {{ endpoint: {}, username: {}, secret: {}, source: {}, default_site: {:?} }}",
            self.endpoint,
            self.credentials.username(),
            self.credentials.masked_secret(),
            self.source,
            self.default_site,
        )
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}
