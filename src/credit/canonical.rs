//! Candidate canonicalization

use crate::names::{CanonicalNames, SpecialCaseRules};

/// Run every candidate through the special-case rules
///
/// Each candidate may turn into zero, one, or several names. Results are
/// flattened in order and empty names are dropped.
pub fn apply_special_cases(
    candidates: &[String],
    author: &str,
    rules: &dyn SpecialCaseRules,
) -> Vec<String> {
    candidates
        .iter()
        .flat_map(|candidate| rules.handle_special_case(candidate, author))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Map every name to its canonical form
pub fn canonicalize(names: &[String], lookup: &dyn CanonicalNames) -> Vec<String> {
    names
        .iter()
        .map(|name| lookup.canonical_name_for(name))
        .collect()
}
