//! Commit (text view) data model

use std::sync::OnceLock;

use log::debug;

use crate::credit::patterns::LEGACY_IMPORT_MARKER;
use crate::credit::{
    CreditError, DiffProvider, extract_changelog_added_lines, is_changelog_only_diff,
};

/// The parts of a commit that contributor extraction looks at
///
/// Immutable once built. The diff and the changelog text derived from it
/// are filled lazily, at most once per instance; a race between two first
/// callers fetches twice and keeps the first result.
#[derive(Debug, Clone, Default)]
pub struct Commit {
    /// Full commit ID
    id: String,

    /// Full commit message
    message: String,

    /// Recorded author name (often the committer of a patch)
    author_name: String,

    /// Message carried the git-svn marker when the commit was built
    is_legacy_import: bool,

    /// Unified diff against the parent
    diff: OnceLock<String>,

    /// Added changelog bullets, empty for changelog-only diffs
    changelog: OnceLock<String>,
}

impl Commit {
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        let message = message.into();
        let is_legacy_import = message.contains(LEGACY_IMPORT_MARKER);
        Self {
            id: id.into(),
            message,
            author_name: author_name.into(),
            is_legacy_import,
            diff: OnceLock::new(),
            changelog: OnceLock::new(),
        }
    }

    /// Seed the diff slot with text fetched earlier
    ///
    /// The first seed wins; later ones are discarded.
    pub fn with_diff(self, diff: impl Into<String>) -> Self {
        if self.diff.set(diff.into()).is_err() {
            debug!("{}: diff already set, keeping the first", self.id);
        }
        self
    }

    /// Seed the changelog slot with a previously persisted value
    ///
    /// A commit carrying its changelog text never fetches its diff. The
    /// first seed wins; later ones are discarded.
    pub fn with_changelog(self, changelog: impl Into<String>) -> Self {
        if self.changelog.set(changelog.into()).is_err() {
            debug!("{}: changelog already set, keeping the first", self.id);
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Was this commit imported from Subversion?
    pub fn is_legacy_import(&self) -> bool {
        self.is_legacy_import
    }

    /// Changelog text computed so far, if any (for persisting it)
    pub fn cached_changelog(&self) -> Option<&str> {
        self.changelog.get().map(String::as_str)
    }

    /// Get the diff, fetching it on first use
    pub fn diff(&self, diffs: &dyn DiffProvider) -> Result<&str, CreditError> {
        if let Some(diff) = self.diff.get() {
            return Ok(diff);
        }

        debug!("fetching diff for {}", self.id);
        let fetched = diffs.fetch_diff(&self.id)?;
        Ok(self.diff.get_or_init(|| fetched))
    }

    /// Get the added changelog bullets, computing them on first use
    ///
    /// Changelog-only diffs yield an empty string: the entry being edited is
    /// not new work, so there is nothing to credit.
    pub fn changelog_text(&self, diffs: &dyn DiffProvider) -> Result<&str, CreditError> {
        if let Some(text) = self.changelog.get() {
            return Ok(text);
        }

        let diff = self.diff(diffs)?;
        let text = if is_changelog_only_diff(diff) {
            debug!("{} only touches changelogs, skipping", self.id);
            String::new()
        } else {
            extract_changelog_added_lines(diff)
        };
        Ok(self.changelog.get_or_init(|| text))
    }
}
