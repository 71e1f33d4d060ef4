use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::domain::IssuePrefix;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".commithelperrc.json";

/// Top-level configuration loaded from `.commithelperrc.json`.
///
/// ```json
/// {
///   "rules": { "bug": null, "feature": "org/repo" },
///   "protect": ["main", "release/*"],
///   "template": "{{.Prefix}}: {{.Message}}"
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Branch key → repository name. `null` renders a bare `#N`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: BTreeMap<String, Option<String>>,
    /// Glob patterns for branches that must not receive commits.
    #[serde(default, deserialize_with = "null_as_default")]
    pub protect: Vec<String>,
    #[serde(default)]
    pub template: Option<String>,
}

/// The rule configured for a branch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule<'a> {
    /// `"key": null` → `#N`
    Issue,
    /// `"key": "org/repo"` → `org/repo#N`
    Repo(&'a str),
}

impl Rule<'_> {
    pub fn prefix(&self, issue: &str) -> IssuePrefix {
        match self {
            Rule::Issue => IssuePrefix::new(None, issue),
            Rule::Repo(repo) => IssuePrefix::new(Some(*repo), issue),
        }
    }
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl Config {
    /// Load a config from an explicit path. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::parse(&content)
    }

    /// Load `.commithelperrc.json` from `dir`, falling back to an empty
    /// config when the file does not exist.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        match Self::load(&dir.join(CONFIG_FILE_NAME)) {
            Err(ConfigError::NotFound(path)) => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Config::default())
            }
            other => other,
        }
    }

    /// Parse a JSON string into a Config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Look up the rule for a branch key. Exact, case-sensitive match.
    pub fn rule(&self, key: &str) -> Option<Rule<'_>> {
        self.rules.get(key).map(|repo| match repo {
            Some(repo) => Rule::Repo(repo.as_str()),
            None => Rule::Issue,
        })
    }

    /// The configured template, treating an empty string as unset.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref().filter(|t| !t.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
