//! Configuration-backed name table

use std::collections::HashMap;

use log::{debug, warn};
use regex::Regex;

use super::{CanonicalNames, SpecialCaseRules};
use crate::config::{ConfigError, NamesConfig, SpecialCase};

/// Special cases and aliases loaded from [`NamesConfig`]
///
/// Special-case resolution, in order:
/// 1. explicit rule for the whole candidate (author-specific before generic)
/// 2. split on the configured separators
/// 3. per part: explicit rule, then ignore patterns, else the part itself
#[derive(Debug, Clone)]
pub struct NameTable {
    aliases: HashMap<String, String>,
    rules: Vec<SpecialCase>,
    ignore: Vec<Regex>,
    separators: Vec<String>,
}

impl NameTable {
    /// Build the table, validating the configured data
    ///
    /// Rejects alias chains (`a → b`, `b → c`) so that canonicalizing a
    /// canonical name is always a no-op. A name aliased to itself is fine.
    pub fn from_config(config: &NamesConfig) -> Result<Self, ConfigError> {
        for (alias, target) in &config.aliases {
            let chained = config
                .aliases
                .get(target)
                .is_some_and(|next| next != target);
            if chained {
                return Err(ConfigError::AliasChain {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }

        let ignore = config
            .ignore
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rules = config
            .special_cases
            .iter()
            .filter_map(|rule| {
                let name = rule.name.trim();
                if name.is_empty() {
                    warn!("ignoring special case without a name: {:?}", rule);
                    return None;
                }
                // Candidates are trimmed before lookup, so keys must be too
                let author = rule
                    .author
                    .as_deref()
                    .map(str::trim)
                    .filter(|author| !author.is_empty())
                    .map(str::to_string);
                Some(SpecialCase {
                    name: name.to_string(),
                    author,
                    names: rule.names.clone(),
                })
            })
            .collect();

        let separators = config
            .separators
            .iter()
            .filter(|sep| !sep.is_empty())
            .cloned()
            .collect();

        Ok(Self {
            aliases: config.aliases.clone().into_iter().collect(),
            rules,
            ignore,
            separators,
        })
    }

    /// Find the rule for a candidate, preferring one scoped to the author
    fn rule_for(&self, name: &str, author: &str) -> Option<&SpecialCase> {
        self.rules
            .iter()
            .find(|rule| rule.name == name && rule.author.as_deref() == Some(author))
            .or_else(|| {
                self.rules
                    .iter()
                    .find(|rule| rule.name == name && rule.author.is_none())
            })
    }

    /// Split a candidate on every configured separator
    fn split<'a>(&self, name: &'a str) -> Vec<&'a str> {
        let mut parts = vec![name];
        for sep in &self.separators {
            parts = parts.into_iter().flat_map(|part| part.split(sep.as_str())).collect();
        }
        parts
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect()
    }

    fn resolve_part(&self, part: &str, author: &str) -> Vec<String> {
        if let Some(rule) = self.rule_for(part, author) {
            return rule_names(rule);
        }
        if self.ignore.iter().any(|re| re.is_match(part)) {
            debug!("ignoring candidate {:?}", part);
            return Vec::new();
        }
        vec![part.to_string()]
    }
}

fn rule_names(rule: &SpecialCase) -> Vec<String> {
    rule.names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

impl SpecialCaseRules for NameTable {
    fn handle_special_case(&self, name: &str, author: &str) -> Vec<String> {
        let name = name.trim();
        if name.is_empty() {
            return Vec::new();
        }
        if let Some(rule) = self.rule_for(name, author) {
            return rule_names(rule);
        }
        self.split(name)
            .into_iter()
            .flat_map(|part| self.resolve_part(part, author))
            .collect()
    }
}

impl CanonicalNames for NameTable {
    fn canonical_name_for(&self, name: &str) -> String {
        self.aliases
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}
