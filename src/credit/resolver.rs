//! Contributor name resolution

use std::collections::HashSet;

use log::debug;

use super::canonical::{apply_special_cases, canonicalize};
use super::{CreditError, DiffProvider, extract_candidates};
use crate::model::Commit;
use crate::names::{CanonicalNames, SpecialCaseRules};

/// The full pipeline with its services bound, reusable across commits
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    diffs: &'a dyn DiffProvider,
    rules: &'a dyn SpecialCaseRules,
    names: &'a dyn CanonicalNames,
}

impl<'a> Resolver<'a> {
    pub fn new(
        diffs: &'a dyn DiffProvider,
        rules: &'a dyn SpecialCaseRules,
        names: &'a dyn CanonicalNames,
    ) -> Self {
        Self { diffs, rules, names }
    }

    pub fn resolve(&self, commit: &Commit) -> Result<Vec<String>, CreditError> {
        resolve_contributor_names(commit, self.diffs, self.rules, self.names)
    }
}

/// Resolve the canonical contributor names of a commit
///
/// Extract → special cases → canonicalize → dedup. Order is that of first
/// occurrence. When the special cases suppress every candidate, the
/// canonical author name is returned instead, so a commit with an author is
/// never credited to nobody.
pub fn resolve_contributor_names(
    commit: &Commit,
    diffs: &dyn DiffProvider,
    rules: &dyn SpecialCaseRules,
    names: &dyn CanonicalNames,
) -> Result<Vec<String>, CreditError> {
    let candidates = extract_candidates(commit, diffs)?;
    let special = apply_special_cases(&candidates, commit.author_name(), rules);
    let mut resolved = canonicalize(&special, names);

    let mut seen = HashSet::new();
    resolved.retain(|name| seen.insert(name.clone()));

    if resolved.is_empty() && !commit.author_name().is_empty() {
        debug!("{}: every candidate suppressed, crediting author", commit.id());
        resolved.push(names.canonical_name_for(commit.author_name()));
    }

    Ok(resolved)
}
