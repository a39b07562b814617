//! Minimal netrc file parsing
//!
//! Covers the classic grammar: `machine <name>`, `login <value>`,
//! `password <value>`. `default` entries, `account` values, and `macdef`
//! bodies (which run to a blank line) are tolerated but never satisfy a
//! machine lookup. Nothing in the wider ecosystem we depend on covers netrc,
//! so this stays in-crate.

use crate::error::{AcquiaError, AcquiaResult};
use std::path::Path;

/// A single machine entry from a netrc file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetrcEntry {
    /// Machine name; `None` for the `default` entry
    pub machine: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
}

/// Parsed contents of a netrc file
#[derive(Debug, Clone, Default)]
pub struct Netrc {
    entries: Vec<NetrcEntry>,
}

impl Netrc {
    /// Load and parse the netrc file at `path`.
    ///
    /// Returns `Ok(None)` only when the file does not exist.
    pub fn load(path: &Path) -> AcquiaResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|source| AcquiaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(Self::parse(&content)))
    }

    /// Parse netrc content.
    pub fn parse(content: &str) -> Self {
        enum Expect {
            Keyword,
            Machine,
            Login,
            Password,
            Account,
            MacdefName,
        }

        let mut entries: Vec<NetrcEntry> = Vec::new();
        let mut expect = Expect::Keyword;
        let mut in_macdef = false;

        for line in content.lines() {
            // A macdef body runs until the first blank line.
            if in_macdef {
                if line.trim().is_empty() {
                    in_macdef = false;
                }
                continue;
            }

            for token in line.split_whitespace() {
                match expect {
                    Expect::Keyword => match token {
                        "machine" => expect = Expect::Machine,
                        "default" => entries.push(NetrcEntry::default()),
                        "login" => expect = Expect::Login,
                        "password" => expect = Expect::Password,
                        "account" => expect = Expect::Account,
                        "macdef" => expect = Expect::MacdefName,
                        // Unknown tokens are skipped for forward compatibility.
                        _ => {}
                    },
                    Expect::Machine => {
                        entries.push(NetrcEntry {
                            machine: Some(token.to_string()),
                            ..NetrcEntry::default()
                        });
                        expect = Expect::Keyword;
                    }
                    Expect::Login => {
                        if let Some(entry) = entries.last_mut() {
                            entry.login = Some(token.to_string());
                        }
                        expect = Expect::Keyword;
                    }
                    Expect::Password => {
                        if let Some(entry) = entries.last_mut() {
                            entry.password = Some(token.to_string());
                        }
                        expect = Expect::Keyword;
                    }
                    Expect::Account => {
                        expect = Expect::Keyword;
                    }
                    Expect::MacdefName => {
                        expect = Expect::Keyword;
                        in_macdef = true;
                        break;
                    }
                }
            }
        }

        Self { entries }
    }

    /// Look up the entry for a machine.
    ///
    /// A `default` entry never satisfies the lookup; the Cloud API host must
    /// be named explicitly.
    pub fn machine(&self, name: &str) -> Option<&NetrcEntry> {
        self.entries
            .iter()
            .find(|e| e.machine.as_deref() == Some(name))
    }
}
