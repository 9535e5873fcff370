//! git log format definitions for stable output parsing
//!
//! The format ensures consistent, parseable output regardless of user
//! configuration (`format.pretty`, color settings and the like).

/// Separator used between fields of a record (ASCII unit separator)
pub const FIELD_SEPARATOR: char = '\x1f';

/// Terminator of each record (ASCII record separator)
///
/// Commit messages span lines, so newlines cannot delimit records.
pub const RECORD_SEPARATOR: char = '\x1e';

/// Formats for git commands
pub struct Templates;

impl Templates {
    /// Format for `git log` output
    ///
    /// Fields (separated by 0x1F, record ends with 0x1E):
    /// 1. full commit ID
    /// 2. author name
    /// 3. raw message (subject and body)
    ///
    /// git expands `%x1f` / `%x1e` itself, so the argument stays printable.
    pub fn log() -> &'static str {
        concat!("--format=", "%H", "%x1f", "%an", "%x1f", "%B", "%x1e")
    }
}
