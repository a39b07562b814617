//! Credential resolver for multi-source credential loading
//!
//! Sources are consulted in fixed priority order with short-circuit on first
//! success: explicit options, then the Acquia configuration file, then the
//! netrc file. A source that exists but cannot be parsed is a hard error and
//! never falls through to the next source.

use super::conf_file::CloudApiConf;
use super::netrc::Netrc;
use super::source::CredentialSource;
use super::Credentials;
use crate::endpoint::CLOUD_API_HOST;
use crate::error::{AcquiaError, AcquiaResult};
use std::path::PathBuf;
use tracing::debug;

/// Configuration for the credential resolver
///
/// All paths are derived from an injectable home directory so tests can point
/// resolution at fixtures instead of the real filesystem.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Home directory holding `.acquia/cloudapi.conf` and `.netrc`.
    /// `None` when no home directory could be determined; discovery then
    /// fails rather than probing relative paths.
    pub home_dir: Option<PathBuf>,
    /// Hostname keying the netrc entry
    pub api_host: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            home_dir: dirs::home_dir(),
            api_host: CLOUD_API_HOST.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Override the home directory used for discovery
    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }

    /// Override the hostname used for the netrc lookup
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    /// Path to the Acquia Cloud configuration file
    pub fn conf_path(&self) -> Option<PathBuf> {
        self.home_dir
            .as_ref()
            .map(|home| home.join(".acquia").join("cloudapi.conf"))
    }

    /// Path to the user's netrc
    pub fn netrc_path(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|home| home.join(".netrc"))
    }
}

/// A single credential source strategy
///
/// Strategies are invoked in fixed priority order; the first to return
/// `Some` wins. Hard errors (unreadable or malformed files, a netrc without
/// the required host entry) propagate instead of falling through.
trait CredentialStrategy {
    fn try_resolve(&self) -> AcquiaResult<Option<(Credentials, CredentialSource)>>;
}

/// `~/.acquia/cloudapi.conf`: JSON object with `email` and `key`
struct ConfFileStrategy {
    path: PathBuf,
}

impl CredentialStrategy for ConfFileStrategy {
    fn try_resolve(&self) -> AcquiaResult<Option<(Credentials, CredentialSource)>> {
        let Some(conf) = CloudApiConf::load(&self.path)? else {
            return Ok(None);
        };
        debug!("resolved credentials from {}", self.path.display());
        Ok(Some((
            Credentials::new(conf.email, conf.key),
            CredentialSource::ConfFile {
                path: self.path.clone(),
            },
        )))
    }
}

/// `~/.netrc`: machine/login/password records keyed by the API hostname
struct NetrcStrategy {
    path: PathBuf,
    host: String,
}

impl CredentialStrategy for NetrcStrategy {
    fn try_resolve(&self) -> AcquiaResult<Option<(Credentials, CredentialSource)>> {
        let Some(netrc) = Netrc::load(&self.path)? else {
            return Ok(None);
        };

        // The file may exist without holding Cloud API credentials. That is
        // a configuration error, not an absent source.
        let entry = netrc
            .machine(&self.host)
            .ok_or_else(|| AcquiaError::MissingNetrcConfiguration {
                host: self.host.clone(),
                path: self.path.clone(),
            })?;

        let (Some(login), Some(password)) = (entry.login.as_deref(), entry.password.as_deref())
        else {
            return Err(AcquiaError::MissingNetrcConfiguration {
                host: self.host.clone(),
                path: self.path.clone(),
            });
        };

        debug!("resolved credentials from {}", self.path.display());
        Ok(Some((
            Credentials::new(login, password),
            CredentialSource::Netrc {
                path: self.path.clone(),
            },
        )))
    }
}

/// Credential resolver running the source cascade
pub struct CredentialResolver {
    config: ResolverConfig,
}

impl CredentialResolver {
    /// Create a new credential resolver
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Create a resolver with default configuration
    pub fn with_defaults() -> Self {
        Self::new(ResolverConfig::default())
    }

    /// Resolve credentials, preferring explicit values over discovery.
    ///
    /// When both explicit values are supplied no filesystem access occurs.
    /// When either is missing the discovery cascade runs and the explicit
    /// value, if any, overrides the discovered half.
    pub fn resolve(
        &self,
        explicit_username: Option<&str>,
        explicit_secret: Option<&str>,
    ) -> AcquiaResult<(Credentials, CredentialSource)> {
        if let (Some(username), Some(secret)) = (explicit_username, explicit_secret) {
            debug!("using explicitly supplied credentials");
            return Ok((
                Credentials::new(username, secret),
                CredentialSource::Explicit,
            ));
        }

        let (Some(conf_path), Some(netrc_path)) =
            (self.config.conf_path(), self.config.netrc_path())
        else {
            return Err(AcquiaError::MissingHomeDirectory);
        };

        let strategies: [&dyn CredentialStrategy; 2] = [
            &ConfFileStrategy {
                path: conf_path.clone(),
            },
            &NetrcStrategy {
                path: netrc_path.clone(),
                host: self.config.api_host.clone(),
            },
        ];

        for strategy in strategies {
            if let Some((discovered, source)) = strategy.try_resolve()? {
                let credentials = Credentials::new(
                    explicit_username.unwrap_or_else(|| discovered.username()),
                    explicit_secret.unwrap_or_else(|| discovered.secret()),
                );
                return Ok((credentials, source));
            }
        }

        debug!("no credential source found");
        Err(AcquiaError::MissingConfiguration {
            conf_path,
            netrc_path,
        })
    }

    /// Get the resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn resolver_for(home: &TempDir) -> CredentialResolver {
        CredentialResolver::new(ResolverConfig::default().with_home_dir(home.path()))
    }

    fn write_conf(home: &TempDir, body: &str) {
        let dir = home.path().join(".acquia");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("cloudapi.conf"), body).unwrap();
    }

    #[test]
    fn explicit_credentials_skip_discovery() {
        // Point at a home dir holding a conf file that would fail to parse;
        // explicit values must never touch it.
        let home = TempDir::new().unwrap();
        write_conf(&home, "{broken");

        let (creds, source) = resolver_for(&home)
            .resolve(Some("user@example.com"), Some("s3cret"))
            .unwrap();
        assert_eq!(creds.username(), "user@example.com");
        assert_eq!(creds.secret(), "s3cret");
        assert_eq!(source, CredentialSource::Explicit);
    }

    #[test]
    fn conf_file_wins_over_netrc() {
        let home = TempDir::new().unwrap();
        write_conf(&home, r#"{"email": "conf@example.com", "key": "confkey"}"#);
        fs::write(
            home.path().join(".netrc"),
            "machine cloudapi.acquia.com login netrc@example.com password netrckey\n",
        )
        .unwrap();

        let (creds, source) = resolver_for(&home).resolve(None, None).unwrap();
        assert_eq!(creds.username(), "conf@example.com");
        assert_eq!(creds.secret(), "confkey");
        assert!(matches!(source, CredentialSource::ConfFile { .. }));
    }

    #[test]
    fn malformed_conf_file_is_fatal_not_skipped() {
        let home = TempDir::new().unwrap();
        write_conf(&home, "{broken");
        fs::write(
            home.path().join(".netrc"),
            "machine cloudapi.acquia.com login a password b\n",
        )
        .unwrap();

        let err = resolver_for(&home).resolve(None, None).unwrap_err();
        assert!(matches!(err, AcquiaError::ConfParse { .. }));
    }

    #[test]
    fn netrc_entry_used_when_conf_absent() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join(".netrc"),
            "machine cloudapi.acquia.com\n  login netrc@example.com\n  password netrckey\n",
        )
        .unwrap();

        let (creds, source) = resolver_for(&home).resolve(None, None).unwrap();
        assert_eq!(creds.username(), "netrc@example.com");
        assert_eq!(creds.secret(), "netrckey");
        assert!(matches!(source, CredentialSource::Netrc { .. }));
    }

    #[test]
    fn netrc_without_host_entry_fails_naming_path() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join(".netrc"),
            "machine github.com login a password b\n",
        )
        .unwrap();

        let err = resolver_for(&home).resolve(None, None).unwrap_err();
        match err {
            AcquiaError::MissingNetrcConfiguration { host, path } => {
                assert_eq!(host, CLOUD_API_HOST);
                assert_eq!(path, home.path().join(".netrc"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn netrc_with_only_default_entry_fails_naming_path() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join(".netrc"),
            "default login fallback password anything\n",
        )
        .unwrap();

        let err = resolver_for(&home).resolve(None, None).unwrap_err();
        match err {
            AcquiaError::MissingNetrcConfiguration { host, path } => {
                assert_eq!(host, CLOUD_API_HOST);
                assert_eq!(path, home.path().join(".netrc"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn no_sources_fails_with_missing_configuration() {
        let home = TempDir::new().unwrap();
        let err = resolver_for(&home).resolve(None, None).unwrap_err();
        assert!(matches!(err, AcquiaError::MissingConfiguration { .. }));
    }

    #[test]
    fn partial_explicit_value_overrides_discovered_half() {
        let home = TempDir::new().unwrap();
        write_conf(&home, r#"{"email": "conf@example.com", "key": "confkey"}"#);

        let (creds, source) = resolver_for(&home)
            .resolve(Some("cli@example.com"), None)
            .unwrap();
        assert_eq!(creds.username(), "cli@example.com");
        assert_eq!(creds.secret(), "confkey");
        assert!(matches!(source, CredentialSource::ConfFile { .. }));
    }

    #[test]
    fn missing_home_directory_is_surfaced_not_probed() {
        let resolver = CredentialResolver::new(ResolverConfig {
            home_dir: None,
            api_host: CLOUD_API_HOST.to_string(),
        });
        let err = resolver.resolve(None, None).unwrap_err();
        assert!(matches!(err, AcquiaError::MissingHomeDirectory));
    }

    #[test]
    fn explicit_credentials_need_no_home_directory() {
        let resolver = CredentialResolver::new(ResolverConfig {
            home_dir: None,
            api_host: CLOUD_API_HOST.to_string(),
        });
        let (creds, source) = resolver.resolve(Some("u"), Some("p")).unwrap();
        assert_eq!(creds.username(), "u");
        assert_eq!(source, CredentialSource::Explicit);
    }

    #[test]
    fn custom_api_host_keys_the_netrc_lookup() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join(".netrc"),
            "machine staging.example.com login s password t\n",
        )
        .unwrap();

        let resolver = CredentialResolver::new(
            ResolverConfig::default()
                .with_home_dir(home.path())
                .with_api_host("staging.example.com"),
        );
        let (creds, _) = resolver.resolve(None, None).unwrap();
        assert_eq!(creds.username(), "s");
    }
}
