//! Candidate extraction
//!
//! Stages, first non-empty result wins:
//! 1. trailing `[name]` in the commit message
//! 2. changelog bullets added by the diff (imported commits only)
//! 3. the recorded author

use log::debug;

use super::patterns::extract_bracketed_name;
use super::{CreditError, DiffProvider};
use crate::model::Commit;

/// Extract the raw contributor names of a commit
///
/// Never returns an empty list for a commit with an author. Only imported
/// commits ever touch `diffs`, and at most once per commit instance.
pub fn extract_candidates(
    commit: &Commit,
    diffs: &dyn DiffProvider,
) -> Result<Vec<String>, CreditError> {
    let mut names = extract_bracketed_name(commit.message());
    if !names.is_empty() {
        debug!("{}: credited in message: {:?}", commit.id(), names);
        return Ok(names);
    }

    if commit.is_legacy_import() {
        names = commit
            .changelog_text(diffs)?
            .lines()
            .flat_map(extract_bracketed_name)
            .collect();
        debug!("{}: credited in changelog: {:?}", commit.id(), names);
    }

    if names.is_empty() {
        debug!("{}: falling back to author", commit.id());
        names.push(commit.author_name().to_string());
    }

    Ok(names)
}
