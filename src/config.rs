//! Configuration file
//!
//! A TOML file holding the curated name data:
//!
//! ```toml
//! [names]
//! separators = [" and ", " & "]
//! ignore = ["^\\d+$"]
//!
//! [names.aliases]
//! miloops = "Emilio Tagua"
//!
//! [[names.special_cases]]
//! name = "DHH"
//! names = ["David Heinemeier Hansson"]
//! ```
//!
//! Located via `--config`, then `$COMMIT_CREDITS_CONFIG`. Without either,
//! the defaults apply.

use std::collections::BTreeMap;
use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "COMMIT_CREDITS_CONFIG";

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("alias {alias:?} points at {target:?}, which is itself an alias")]
    AliasChain { alias: String, target: String },

    #[error("invalid ignore pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub names: NamesConfig,
}

/// Curated name data
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NamesConfig {
    /// Separators that split one candidate into several names
    pub separators: Vec<String>,

    /// Regexes; candidates matching any of them are dropped
    pub ignore: Vec<String>,

    /// Alias or misspelling → canonical name
    pub aliases: BTreeMap<String, String>,

    /// Explicit overrides, checked before anything else
    pub special_cases: Vec<SpecialCase>,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            separators: vec![" and ".to_string(), " & ".to_string()],
            ignore: Vec::new(),
            aliases: BTreeMap::new(),
            special_cases: Vec::new(),
        }
    }
}

/// One explicit override
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SpecialCase {
    /// Candidate text, matched exactly
    pub name: String,

    /// Restrict the rule to commits by this author
    #[serde(default)]
    pub author: Option<String>,

    /// Replacement names; empty suppresses the candidate
    #[serde(default)]
    pub names: Vec<String>,
}

impl Config {
    /// Load from an explicit path, the environment, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path(path, env::var_os(CONFIG_ENV)) {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// An explicit path beats the environment; an empty variable counts as unset
fn config_path(explicit: Option<&Path>, from_env: Option<OsString>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| from_env.filter(|value| !value.is_empty()).map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.names.separators, vec![" and ", " & "]);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml_str(
            r#"
[names]
separators = [", "]
ignore = ['^\d+$']

[names.aliases]
miloops = "Emilio Tagua"

[[names.special_cases]]
name = "DHH"
names = ["David Heinemeier Hansson"]

[[names.special_cases]]
name = "docs"
author = "Pratik Naik"
"#,
        )
        .unwrap();

        assert_eq!(config.names.separators, vec![", "]);
        assert_eq!(config.names.ignore, vec![r"^\d+$"]);
        assert_eq!(config.names.aliases["miloops"], "Emilio Tagua");
        assert_eq!(config.names.special_cases.len(), 2);
        assert_eq!(config.names.special_cases[1].author.as_deref(), Some("Pratik Naik"));
        assert!(config.names.special_cases[1].names.is_empty());
    }

    #[test]
    fn test_partial_names_section_keeps_default_separators() {
        let config = Config::from_toml_str("[names.aliases]\nbob = \"Bob Smith\"\n").unwrap();
        assert_eq!(config.names.separators, vec![" and ", " & "]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Config::from_toml_str("[names]\nalias = {}\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[names.aliases]\nbob = \"Bob Smith\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.names.aliases["bob"], "Bob Smith");
    }

    #[test]
    fn test_config_path_precedence() {
        let explicit = Path::new("/etc/explicit.toml");
        let from_env = || Some(OsString::from("/etc/env.toml"));

        assert_eq!(
            config_path(Some(explicit), from_env()),
            Some(PathBuf::from("/etc/explicit.toml"))
        );
        assert_eq!(config_path(None, from_env()), Some(PathBuf::from("/etc/env.toml")));
        assert_eq!(config_path(None, Some(OsString::new())), None);
        assert_eq!(config_path(None, None), None);
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file(Path::new("/nonexistent/commit-credits.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
