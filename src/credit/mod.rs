//! Contributor name extraction
//!
//! Turns a commit into the canonical names of the people who wrote it:
//! - [`patterns`]: the text conventions that carry names
//! - [`changelog`]: changelog mining for imported commits
//! - [`candidates`]: raw candidate extraction with author fallback
//! - [`canonical`]: special cases and alias resolution
//! - [`resolver`]: the full pipeline

pub mod candidates;
pub mod canonical;
pub mod changelog;
pub mod patterns;
pub mod resolver;

pub use candidates::extract_candidates;
pub use canonical::{apply_special_cases, canonicalize};
pub use changelog::{extract_changelog_added_lines, is_changelog_only_diff};
pub use patterns::extract_bracketed_name;
pub use resolver::{Resolver, resolve_contributor_names};

use std::error::Error as StdError;
use thiserror::Error;

/// Errors that can occur while crediting a commit
#[derive(Error, Debug)]
pub enum CreditError {
    #[error("diff unavailable for commit {commit_id}: {source}")]
    DiffUnavailable {
        commit_id: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Source of a commit's unified diff against its parent
///
/// Fetching must be idempotent: the same commit always yields the same text.
pub trait DiffProvider {
    fn fetch_diff(&self, commit_id: &str) -> Result<String, CreditError>;
}

impl<F> DiffProvider for F
where
    F: Fn(&str) -> Result<String, CreditError>,
{
    fn fetch_diff(&self, commit_id: &str) -> Result<String, CreditError> {
        self(commit_id)
    }
}
