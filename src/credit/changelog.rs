//! Changelog diff scanner
//!
//! Mines the added bullets of changelog files out of a commit's unified diff.
//! Imported Subversion commits credited contributors in the changelog entry
//! rather than in the commit message, so this is the only place their names
//! survive.

use super::patterns::{
    CHANGELOG_BULLET_REGEX, DIFF_HEADER_REGEX, NEW_FILE_REGEX, is_changelog_path,
};

/// Check whether every file touched by the diff is a changelog
///
/// Scans the `diff --git` headers and stops at the first one whose path is
/// not a changelog. A diff without headers (including the empty diff) is
/// vacuously changelog-only.
pub fn is_changelog_only_diff(diff: &str) -> bool {
    diff.lines()
        .filter_map(|line| DIFF_HEADER_REGEX.captures(line))
        .filter_map(|caps| caps.get(1))
        .all(|pathspec| is_changelog_path(new_side_path(pathspec.as_str())))
}

/// Collect the added changelog bullets of a diff, in source order
///
/// Single forward pass over the lines, tracking whether the current file
/// segment belongs to a changelog:
/// 1. `diff --git` → a new segment starts, flag reset
/// 2. `+++ <path>` → flag set if `<path>` is a changelog
/// 3. `+ * ...` while the flag is set → line kept verbatim
///
/// Kept lines are joined with `\n`.
pub fn extract_changelog_added_lines(diff: &str) -> String {
    let mut in_changelog_section = false;
    let mut added = Vec::new();

    for line in diff.lines() {
        // Segment reset must be evaluated before the marker of the same segment
        if DIFF_HEADER_REGEX.is_match(line) {
            in_changelog_section = false;
        } else if let Some(caps) = NEW_FILE_REGEX.captures(line) {
            in_changelog_section = caps.get(1).is_some_and(|m| is_changelog_path(m.as_str()));
        } else if in_changelog_section && CHANGELOG_BULLET_REGEX.is_match(line) {
            added.push(line);
        }
    }

    added.join("\n")
}

/// Pick the new-side path out of a `diff --git` pathspec
///
/// - `a/CHANGELOG b/CHANGELOG` → `b/CHANGELOG`
/// - `"a/odd name" "b/odd name"` → `"b/odd name"`
/// - anything else is returned whole
fn new_side_path(pathspec: &str) -> &str {
    pathspec
        .rfind(" \"b/")
        .or_else(|| pathspec.rfind(" b/"))
        .map(|pos| &pathspec[pos + 1..])
        .unwrap_or(pathspec)
}
