//! Credential source definitions with priority-based resolution
//!
//! Sources are consulted in a fixed order: explicit options first, then the
//! Acquia configuration file, then the netrc file. Only one filesystem source
//! is ever consulted per resolution, chosen by existence check.

use std::fmt;
use std::path::PathBuf;

/// Where a resolved credential came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Supplied directly in client options
    Explicit,
    /// Parsed from the Acquia configuration file
    ConfFile {
        /// Path to the cloudapi.conf file
        path: PathBuf,
    },
    /// Read from a netrc entry for the Cloud API host
    Netrc {
        /// Path to the netrc file
        path: PathBuf,
    },
}

impl CredentialSource {
    /// Get a description of where this credential came from
    pub fn description(&self) -> String {
        match self {
            CredentialSource::Explicit => "explicit options".to_string(),
            CredentialSource::ConfFile { path } => format!("config file: {}", path.display()),
            CredentialSource::Netrc { path } => format!("netrc: {}", path.display()),
        }
    }

    /// Whether resolution touched the filesystem
    pub fn is_discovered(&self) -> bool {
        !matches!(self, CredentialSource::Explicit)
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
