//! Text conventions that carry contributor names
//!
//! Every convention the extractor relies on lives here as a named pattern,
//! so the domain knowledge is in one place rather than scattered literals.

use regex::Regex;
use std::sync::LazyLock;

/// Marker left in the message of every commit imported by git-svn
///
/// Example: `git-svn-id: http://svn.rubyonrails.org/rails/trunk@4567 5ecf4fe2-...`
pub const LEGACY_IMPORT_MARKER: &str = "git-svn-id:";

/// Trailing bracket group at the end of a line
///
/// Matches `[<content>]` followed only by optional whitespace before the end
/// of the line. Multi-line mode is required: imported messages put the name
/// on the first line and the `git-svn-id:` trailer below it.
///
/// Groups:
/// 1. content (one or more characters other than `]`, within the line)
static TRAILING_BRACKET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\[([^\]\n]+)\][ \t]*\r?$").expect("Invalid trailing bracket regex")
});

/// Per-file header in git's unified diff output
///
/// Example: `diff --git a/activerecord/CHANGELOG b/activerecord/CHANGELOG`
pub(crate) static DIFF_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^diff --git (.+)$").expect("Invalid diff header regex"));

/// New-side file marker inside a file segment
///
/// Example: `+++ b/CHANGELOG.md`
pub(crate) static NEW_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\+\+ (.+)$").expect("Invalid new file marker regex"));

/// Added line holding a changelog bullet: `+`, optional whitespace, then `*`
pub(crate) static CHANGELOG_BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\s*\*").expect("Invalid changelog bullet regex"));

/// Changelog file name at the end of a path, optionally with one extension
///
/// Matches `CHANGELOG`, `railties/CHANGELOG`, `CHANGELOG.md`, `changelog.txt`.
static CHANGELOG_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)changelog(\.[a-z0-9]+)?$").expect("Invalid changelog path regex")
});

/// Extract the name carried by a trailing `[...]` group
///
/// Returns a single-element vector with the bracket's inner content, or an
/// empty vector when there is no trailing bracket.
pub fn extract_bracketed_name(text: &str) -> Vec<String> {
    TRAILING_BRACKET_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| vec![m.as_str().to_string()])
        .unwrap_or_default()
}

/// Check whether a diff path names a changelog file
///
/// Git quotes paths containing unusual characters; the quotes are ignored.
/// `/dev/null` (the new side of a deleted file) never matches.
pub fn is_changelog_path(path: &str) -> bool {
    let path = path.trim().trim_matches('"');
    path != "/dev/null" && CHANGELOG_PATH_REGEX.is_match(path)
}
