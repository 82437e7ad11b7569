use std::{borrow::Borrow, fmt, str::FromStr};

use thiserror::Error;

/// Canonical identifier of a plugin: `username/repo`.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PluginId(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid plugin id '{0}': expected 'username/repo'")]
pub struct PluginIdParseError(pub String);

impl PluginId {
    pub fn new(username: &str, repo: &str) -> Self {
        Self(format!("{username}/{repo}"))
    }

    pub fn is_valid(&self) -> bool {
        self.split().is_some()
    }

    /// Splits the id into `(username, repo)`.
    pub fn split(&self) -> Option<(&str, &str)> {
        let (username, repo) = self.0.split_once('/')?;
        if username.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some((username, repo))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PluginId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PluginId> for String {
    fn from(from: PluginId) -> Self {
        from.0
    }
}

impl FromStr for PluginId {
    type Err = PluginIdParseError;
    fn from_str(s: &str) -> Result<PluginId, Self::Err> {
        let id = Self(s.to_owned());
        if !id.is_valid() {
            return Err(PluginIdParseError(s.to_owned()));
        }
        Ok(id)
    }
}

impl Borrow<str> for PluginId {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}
