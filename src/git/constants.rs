//! git-specific constants
//!
//! Centralized definitions for git command names and flags.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const SHOW: &str = "show";
}

/// git command flags
pub mod flags {
    /// Run against another directory (global flag, must precede the subcommand)
    pub const REPO_PATH: &str = "-C";
    /// Never page output (global flag)
    pub const NO_PAGER: &str = "--no-pager";
    /// Disable color output for parsing
    pub const NO_COLOR: &str = "--no-color";
    /// Never run external diff drivers
    pub const NO_EXT_DIFF: &str = "--no-ext-diff";
    /// Show the patch of each commit
    pub const PATCH: &str = "--patch";
    /// Suppress the commit header in `git show`
    pub const EMPTY_FORMAT: &str = "--format=";
    /// Show only the named commits, without walking their ancestry
    pub const NO_WALK: &str = "--no-walk";
    /// Limit output to one commit
    pub const SINGLE: &str = "-1";
    /// End of revisions, no pathspecs follow
    pub const END_OF_REVISIONS: &str = "--";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}

/// Length of the abbreviated commit ID printed by the CLI
pub const SHORT_ID_LEN: usize = 12;

